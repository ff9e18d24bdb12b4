//! 모멘텀 지표 (Momentum Indicators).
//!
//! 과매수/과매도 상태를 측정하는 단순화된 RSI를 제공합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use price_core::DecimalExt;

use super::{IndicatorError, IndicatorResult};

/// 데이터가 부족할 때 사용하는 중립 RSI.
pub const NEUTRAL_RSI: f64 = 50.0;

/// 과매수 기준 RSI.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// 과매도 기준 RSI.
pub const RSI_OVERSOLD: f64 = 30.0;

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiParams {
    /// RSI 기간 (기본: 14).
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 단순 RSI (Relative Strength Index) 계산.
///
/// 가장 최근 `period`개의 일간 변화(인덱스 i-1의 가격 - 인덱스 i의 가격)에 대해
/// 평균 상승폭과 평균 하락폭을 구합니다. 지수 평활은 하지 않습니다.
///
/// - 관측치가 `period + 1`개 미만이면 중립값 50
/// - 평균 하락폭이 0이면 100 (변화가 전혀 없는 시계열 포함)
/// - 그 외 `100 - 100 / (1 + 평균상승 / 평균하락)`
///
/// # 에러
/// - 기간이 0인 경우
pub fn rsi(prices: &[Decimal], params: RsiParams) -> IndicatorResult<f64> {
    let period = params.period;
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "기간은 0보다 커야 합니다".to_string(),
        ));
    }

    if prices.len() < period + 1 {
        return Ok(NEUTRAL_RSI);
    }

    let (gain_sum, loss_sum) = prices[..=period]
        .windows(2)
        .map(|pair| pair[0].to_f64_lossy() - pair[1].to_f64_lossy())
        .fold((0.0, 0.0), |(gain, loss), change| {
            if change > 0.0 {
                (gain + change, loss)
            } else {
                (gain, loss + change.abs())
            }
        });

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}

/// 과매수 여부 (RSI > 70).
pub fn is_overbought(rsi: f64) -> bool {
    rsi > RSI_OVERBOUGHT
}

/// 과매도 여부 (RSI < 30).
pub fn is_oversold(rsi: f64) -> bool {
    rsi < RSI_OVERSOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn series(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::from(v)).collect()
    }

    #[test]
    fn test_rsi_insufficient_data_is_neutral() {
        let prices = series(&[10; 14]);
        assert_eq!(rsi(&prices, RsiParams::default()).unwrap(), NEUTRAL_RSI);
    }

    #[test]
    fn test_rsi_flat_series_is_100() {
        let prices = vec![dec!(500); 20];
        assert_eq!(rsi(&prices, RsiParams::default()).unwrap(), 100.0);
    }

    #[test]
    fn test_rsi_only_gains_toward_present() {
        // 최신순: 115, 114, ..., 100 → 매일 상승
        let prices: Vec<Decimal> = (100..=115).rev().map(Decimal::from).collect();
        assert_eq!(rsi(&prices, RsiParams::default()).unwrap(), 100.0);
    }

    #[test]
    fn test_rsi_only_losses_toward_present() {
        // 최신순: 100, 101, ..., 115 → 매일 하락
        let prices: Vec<Decimal> = (100..=115).map(Decimal::from).collect();
        let value = rsi(&prices, RsiParams::default()).unwrap();
        assert!(value.abs() < 1e-9);
    }

    #[test]
    fn test_rsi_mixed_changes() {
        // 변화: +2, -1 반복 (최근 14개 변화 중 상승 7회, 하락 7회)
        let mut prices = Vec::new();
        let mut p = 100i64;
        for i in 0..15 {
            prices.push(Decimal::from(p));
            p -= if i % 2 == 0 { 2 } else { -1 };
        }
        let value = rsi(&prices, RsiParams::default()).unwrap();
        // 평균상승 = 14/14, 평균하락 = 7/14 → RS = 2 → RSI = 66.67
        assert!((value - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_ignores_older_points() {
        let mut prices = vec![dec!(100); 15];
        prices.extend(series(&[1, 1000, 1, 1000]));
        assert_eq!(rsi(&prices, RsiParams::default()).unwrap(), 100.0);
    }

    #[test]
    fn test_thresholds() {
        assert!(is_overbought(70.1));
        assert!(!is_overbought(70.0));
        assert!(is_oversold(29.9));
        assert!(!is_oversold(30.0));
    }
}
