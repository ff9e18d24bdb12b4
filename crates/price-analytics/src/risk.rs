//! 리스크 요인 식별.

use price_core::{BandPosition, PriceLevel, RiskFactor};

use crate::indicators::{is_high_volatility, IndicatorSnapshot};

/// 극단적 과매수 RSI 기준.
pub const EXTREME_OVERBOUGHT_RSI: f64 = 80.0;
/// 극단적 과매도 RSI 기준.
pub const EXTREME_OVERSOLD_RSI: f64 = 20.0;
/// 급격한 추세 변화로 보는 기울기 절대값.
pub const SHARP_TREND_SLOPE: f64 = 2.0;

/// 스냅샷에서 리스크 요인을 식별합니다.
///
/// 순서는 변동성 → RSI → 볼린저 밴드 → 가격 수준 → 추세로 고정되며,
/// 아무것도 해당하지 않으면 `NoMajorRisk` 하나만 담깁니다.
pub fn identify_risk_factors(snapshot: &IndicatorSnapshot) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if is_high_volatility(snapshot.volatility) {
        factors.push(RiskFactor::HighVolatility);
    }

    if snapshot.rsi > EXTREME_OVERBOUGHT_RSI {
        factors.push(RiskFactor::ExtremeOverbought);
    } else if snapshot.rsi < EXTREME_OVERSOLD_RSI {
        factors.push(RiskFactor::ExtremeOversold);
    }

    match snapshot.bollinger_bands.position {
        BandPosition::AboveUpper => factors.push(RiskFactor::UpperBandBreach),
        BandPosition::BelowLower => factors.push(RiskFactor::LowerBandBreach),
        BandPosition::Between => {}
    }

    if snapshot.price_level == PriceLevel::High {
        factors.push(RiskFactor::HistoricHighPriceRange);
    }

    if snapshot.trend_slope.abs() > SHARP_TREND_SLOPE {
        factors.push(RiskFactor::SharpTrendReversal);
    }

    if factors.is_empty() {
        factors.push(RiskFactor::NoMajorRisk);
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::flat_snapshot;

    #[test]
    fn test_no_major_risk() {
        assert_eq!(
            identify_risk_factors(&flat_snapshot()),
            vec![RiskFactor::NoMajorRisk]
        );
    }

    #[test]
    fn test_all_risks_in_order() {
        let mut snapshot = flat_snapshot();
        snapshot.volatility = 25.0;
        snapshot.rsi = 85.0;
        snapshot.bollinger_bands.position = BandPosition::AboveUpper;
        snapshot.price_level = PriceLevel::High;
        snapshot.trend_slope = -2.5;

        assert_eq!(
            identify_risk_factors(&snapshot),
            vec![
                RiskFactor::HighVolatility,
                RiskFactor::ExtremeOverbought,
                RiskFactor::UpperBandBreach,
                RiskFactor::HistoricHighPriceRange,
                RiskFactor::SharpTrendReversal,
            ]
        );
    }

    #[test]
    fn test_oversold_and_lower_breach() {
        let mut snapshot = flat_snapshot();
        snapshot.rsi = 10.0;
        snapshot.bollinger_bands.position = BandPosition::BelowLower;

        assert_eq!(
            identify_risk_factors(&snapshot),
            vec![RiskFactor::ExtremeOversold, RiskFactor::LowerBandBreach]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut snapshot = flat_snapshot();
        snapshot.volatility = 20.0;
        snapshot.rsi = 80.0;
        snapshot.trend_slope = 2.0;

        assert_eq!(identify_risk_factors(&snapshot), vec![RiskFactor::NoMajorRisk]);
    }
}
