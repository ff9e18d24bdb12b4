//! # Price Core
//!
//! 가격 분석 엔진의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 분석 엔진 전반에서 사용되는 기본 타입을 제공합니다:
//! - 가격 관측치 및 가격 시계열
//! - 분석 리포트 값 객체 (볼린저 밴드, 추천 등급, 시장 심리 등)
//! - 설정 관리
//! - 로깅 인프라
//! - 에러 타입

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
