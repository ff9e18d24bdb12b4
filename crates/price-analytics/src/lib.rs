//! 농산물 가격 분석 엔진.
//!
//! 품목의 날짜별 가격 이력을 받아 다음을 계산합니다.
//!
//! - 기술 통계, 이동평균, 변동성, 추세 기울기, 가격 수준
//! - RSI, 볼린저 밴드, 계절성 점수
//! - 시장 심리, 7일/30일 가격 예측, 리스크 요인
//! - 5단계 추천 등급과 신뢰도
//!
//! # 사용 예시
//!
//! ```ignore
//! use price_analytics::PriceAnalyzer;
//!
//! let analyzer = PriceAnalyzer::default();
//! if let Some(report) = analyzer.analyze("배추", observations) {
//!     println!("{} ({:.2})", report.recommendation, report.confidence);
//! }
//! ```

pub mod batch;
pub mod engine;
pub mod forecast;
pub mod indicators;
pub mod recommendation;
pub mod risk;
pub mod sentiment;

#[cfg(test)]
mod test_support;

pub use batch::{analyze_market, BatchSummary, MarketAnalysis};
pub use engine::{analyze_price_history, PriceAnalyzer};
pub use forecast::{forecast_price, ForecastComponents, LONG_HORIZON_DAYS, SHORT_HORIZON_DAYS};
pub use indicators::{IndicatorEngine, IndicatorError, IndicatorResult, IndicatorSnapshot};
pub use recommendation::{score_recommendation, RecommendationScore, ScoreBreakdown};
pub use risk::identify_risk_factors;
pub use sentiment::{count_votes, determine_sentiment, SentimentVotes};
