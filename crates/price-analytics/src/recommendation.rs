//! 구매 추천 점수 계산.
//!
//! 여섯 개 팩터의 가중 점수(만점 100)를 신뢰도(0~1)로 정규화한 뒤
//! 5단계 추천 등급으로 변환합니다.
//!
//! | 팩터 | 만점 | 배점 |
//! |------|------|------|
//! | 가격 수준 | 25 | LOW 25 / MEDIUM 12 / HIGH 0 |
//! | 추세 | 20 | 기울기 < -0.5 → 20, < 0.5 → 8, 그 외 0 |
//! | 장기 이동평균 대비 | 20 | 현재가 < MA → 20, 그 외 4 |
//! | RSI | 15 | < 30 → 15, > 70 → 0, 그 외 5 |
//! | 볼린저 위치 | 10 | 하단 이탈 10 / 밴드 내 5 / 상단 이탈 0 |
//! | 계절성 | 10 | > 0.7 → 10, > 0.3 → 5, 그 외 0 |

use serde::{Deserialize, Serialize};

use price_core::{BandPosition, PriceLevel, Recommendation, TREND_SLOPE_THRESHOLD};

use crate::indicators::{is_overbought, is_oversold, IndicatorSnapshot};

/// 전체 만점.
pub const MAX_SCORE: u32 = 100;

const SEASONALITY_FAVORABLE: f64 = 0.7;
const SEASONALITY_NEUTRAL: f64 = 0.3;

/// 팩터별 점수.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 가격 수준 (0~25)
    pub price_level: u32,
    /// 추세 (0~20)
    pub trend: u32,
    /// 장기 이동평균 대비 (4~20)
    pub moving_average: u32,
    /// RSI (0~15)
    pub rsi: u32,
    /// 볼린저 위치 (0~10)
    pub bollinger: u32,
    /// 계절성 (0~10)
    pub seasonality: u32,
}

impl ScoreBreakdown {
    /// 스냅샷의 팩터별 점수를 계산합니다.
    pub fn compute(snapshot: &IndicatorSnapshot) -> Self {
        let price_level = match snapshot.price_level {
            PriceLevel::Low => 25,
            PriceLevel::Medium => 12,
            PriceLevel::High => 0,
        };

        let trend = if snapshot.trend_slope < -TREND_SLOPE_THRESHOLD {
            20
        } else if snapshot.trend_slope < TREND_SLOPE_THRESHOLD {
            8
        } else {
            0
        };

        let moving_average = if snapshot.current_price() < snapshot.long_moving_average {
            20
        } else {
            4
        };

        let rsi = if is_oversold(snapshot.rsi) {
            15
        } else if is_overbought(snapshot.rsi) {
            0
        } else {
            5
        };

        let bollinger = match snapshot.bollinger_bands.position {
            BandPosition::BelowLower => 10,
            BandPosition::Between => 5,
            BandPosition::AboveUpper => 0,
        };

        let seasonality = if snapshot.seasonality_score > SEASONALITY_FAVORABLE {
            10
        } else if snapshot.seasonality_score > SEASONALITY_NEUTRAL {
            5
        } else {
            0
        };

        Self {
            price_level,
            trend,
            moving_average,
            rsi,
            bollinger,
            seasonality,
        }
    }

    /// 합계 점수 (0~100).
    pub fn total(&self) -> u32 {
        self.price_level
            + self.trend
            + self.moving_average
            + self.rsi
            + self.bollinger
            + self.seasonality
    }

    /// 신뢰도 (합계 / 100).
    pub fn confidence(&self) -> f64 {
        f64::from(self.total()) / f64::from(MAX_SCORE)
    }
}

/// 추천 점수 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationScore {
    /// 팩터별 점수
    pub breakdown: ScoreBreakdown,
    /// 신뢰도 (0~1)
    pub confidence: f64,
    /// 추천 등급
    pub recommendation: Recommendation,
}

/// 스냅샷으로부터 추천 등급과 신뢰도를 계산합니다.
pub fn score_recommendation(snapshot: &IndicatorSnapshot) -> RecommendationScore {
    let breakdown = ScoreBreakdown::compute(snapshot);
    let confidence = breakdown.confidence();

    RecommendationScore {
        breakdown,
        confidence,
        recommendation: Recommendation::from_confidence(confidence),
    }
}
