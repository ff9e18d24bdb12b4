//! 가격 분석 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - JSON/CSV 가격 이력 읽기
//! - 단일 품목 분석 리포트 출력
//! - 시장 단위 일괄 분석 요약

pub mod commands;
