//! 단기 가격 예측.
//!
//! 추세, 계절성, RSI 반전 보정을 더하는 단순 다요인 모델입니다.
//!
//! ```text
//! 추세 성분   = 기울기 × d
//! 계절 성분   = (계절성 점수 - 0.5) × 0.1 × d
//! 변동성 성분 = 변동성 × 0.05
//! RSI 보정    = RSI > 70 이면 -변동성 성분, RSI < 30 이면 +변동성 성분, 그 외 0
//! 예측가      = clamp(현재가 + 추세 + 계절 + RSI 보정, 0.5 × 최저가, 2.0 × 최고가)
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use price_core::decimal_from_f64;

use crate::indicators::{is_overbought, is_oversold, IndicatorSnapshot};

/// 7일 예측 기간.
pub const SHORT_HORIZON_DAYS: u32 = 7;
/// 30일 예측 기간.
pub const LONG_HORIZON_DAYS: u32 = 30;

const SEASONAL_WEIGHT: f64 = 0.1;
const VOLATILITY_WEIGHT: f64 = 0.05;
const FLOOR_RATIO: Decimal = dec!(0.5);
const CEILING_RATIO: Decimal = dec!(2.0);

/// 예측 성분 분해.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastComponents {
    /// 추세 성분
    pub trend: f64,
    /// 계절 성분
    pub seasonal: f64,
    /// RSI 반전 보정
    pub rsi_adjustment: f64,
}

impl ForecastComponents {
    /// 예측 기간에 대한 성분을 계산합니다.
    pub fn compute(snapshot: &IndicatorSnapshot, days_ahead: u32) -> Self {
        let days = f64::from(days_ahead);
        let volatility_component = snapshot.volatility * VOLATILITY_WEIGHT;

        let rsi_adjustment = if is_overbought(snapshot.rsi) {
            -volatility_component
        } else if is_oversold(snapshot.rsi) {
            volatility_component
        } else {
            0.0
        };

        Self {
            trend: snapshot.trend_slope * days,
            seasonal: (snapshot.seasonality_score - 0.5) * SEASONAL_WEIGHT * days,
            rsi_adjustment,
        }
    }

    /// 전체 가격 변화량.
    pub fn total_change(&self) -> f64 {
        self.trend + self.seasonal + self.rsi_adjustment
    }
}

/// `days_ahead`일 후 가격을 예측합니다.
pub fn forecast_price(snapshot: &IndicatorSnapshot, days_ahead: u32) -> Decimal {
    let components = ForecastComponents::compute(snapshot, days_ahead);
    let raw = snapshot
        .current_price()
        .saturating_add(decimal_from_f64(components.total_change()));

    let floor = snapshot.stats.min * FLOOR_RATIO;
    let ceiling = snapshot.stats.max.saturating_mul(CEILING_RATIO);

    raw.max(floor).min(ceiling)
}
