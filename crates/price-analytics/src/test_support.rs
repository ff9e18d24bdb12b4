//! 단위 테스트용 지표 스냅샷.

use rust_decimal_macros::dec;

use price_core::{BandPosition, BollingerBands, PriceLevel};

use crate::indicators::{DescriptiveStats, IndicatorSnapshot};

/// 모든 값이 500에 고정되고 신호가 중립인 스냅샷.
pub(crate) fn flat_snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot {
        stats: DescriptiveStats {
            current: dec!(500),
            average: dec!(500),
            median: dec!(500),
            min: dec!(500),
            max: dec!(500),
        },
        short_moving_average: dec!(500),
        long_moving_average: dec!(500),
        volatility: 0.0,
        trend_slope: 0.0,
        price_level: PriceLevel::Medium,
        rsi: 50.0,
        bollinger_bands: BollingerBands {
            upper_band: dec!(500),
            middle_band: dec!(500),
            lower_band: dec!(500),
            position: BandPosition::Between,
        },
        seasonality_score: 0.5,
    }
}
