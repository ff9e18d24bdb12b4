//! 계절성 지표 (Seasonality).
//!
//! 월별 평균 가격을 비교하여 현재 월이 연중 어느 정도 가격대인지 0~1 점수로 나타냅니다.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use price_core::{mean_rounded, DecimalExt, PriceObservation};

/// 데이터가 부족할 때 사용하는 중립 계절성 점수.
pub const NEUTRAL_SEASONALITY: f64 = 0.5;

/// 월별 평균 비율의 소수점 자릿수.
const RATIO_SCALE: u32 = 4;

/// 계절성 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeasonalityParams {
    /// 계산에 필요한 최소 관측치 수 (기본: 12).
    pub min_points: usize,
}

impl Default for SeasonalityParams {
    fn default() -> Self {
        Self { min_points: 12 }
    }
}

/// 월(1~12)별 평균 가격 (2자리 반올림).
pub fn monthly_averages(observations: &[PriceObservation]) -> BTreeMap<u32, Decimal> {
    let mut grouped: BTreeMap<u32, Vec<Decimal>> = BTreeMap::new();
    for obs in observations {
        grouped.entry(obs.date.month()).or_default().push(obs.price);
    }

    grouped
        .into_iter()
        .map(|(month, prices)| (month, mean_rounded(&prices)))
        .collect()
}

/// 계절성 점수 계산.
///
/// 1. 관측치가 `min_points`개 미만이면 0.5
/// 2. 월별 평균을 구하고, 현재(인덱스 0) 관측치의 월 평균을 찾음
/// 3. `ratio = 현재 월 평균 / 월별 평균들의 평균` (4자리 반올림)
/// 4. `score = clamp((ratio - 0.5) × 2, 0, 1)`
///
/// 관측치는 최신순이어야 합니다.
pub fn seasonality_score(observations: &[PriceObservation], params: SeasonalityParams) -> f64 {
    if observations.len() < params.min_points {
        return NEUTRAL_SEASONALITY;
    }

    let Some(current) = observations.first() else {
        return NEUTRAL_SEASONALITY;
    };

    let averages = monthly_averages(observations);
    let Some(&current_month_avg) = averages.get(&current.date.month()) else {
        return NEUTRAL_SEASONALITY;
    };

    let month_values: Vec<Decimal> = averages.values().copied().collect();
    let overall_avg = mean_rounded(&month_values);
    if overall_avg.is_zero() {
        return NEUTRAL_SEASONALITY;
    }

    let ratio = (current_month_avg / overall_avg)
        .round_half_up(RATIO_SCALE)
        .to_f64_lossy();

    ((ratio - 0.5) * 2.0).clamp(0.0, 1.0)
}
