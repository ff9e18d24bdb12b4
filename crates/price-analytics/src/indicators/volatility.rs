//! 변동성 지표 (Volatility Indicators).
//!
//! - 전체 시계열 변동성 (모표준편차)
//! - 볼린저 밴드 (창 기반 표준편차)
//!
//! 두 표준편차는 창이 다릅니다. 변동성은 전체 시계열과 전체 평균을,
//! 볼린저 밴드는 최근 `min(n, period)`개와 그 창의 평균을 사용합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use price_core::{decimal_from_f64, BandPosition, BollingerBands, DecimalExt};

use super::{statistics, trend, IndicatorError, IndicatorResult, SmaParams};

/// 리스크로 간주하는 변동성 기준.
pub const HIGH_VOLATILITY_THRESHOLD: f64 = 20.0;

/// 볼린저 밴드 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerBandsParams {
    /// 이동평균 기간 (기본: 20).
    pub period: usize,
    /// 표준편차 배수 (기본: 2.0).
    pub std_dev_multiplier: Decimal,
}

impl Default for BollingerBandsParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: dec!(2.0),
        }
    }
}

/// 기준값 대비 모표준편차.
///
/// 편차는 Decimal로 구한 뒤 `f64`로 바꿔 제곱 평균을 냅니다.
fn std_dev_around(prices: &[Decimal], mean: Decimal) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }

    let variance = prices
        .iter()
        .map(|&p| {
            let diff = p.saturating_sub(mean).to_f64_lossy();
            diff * diff
        })
        .sum::<f64>()
        / prices.len() as f64;

    variance.sqrt()
}

/// 전체 시계열 변동성.
///
/// `sqrt(mean((price - average)^2))`, 여기서 average는 2자리 반올림된 전체 평균입니다.
pub fn volatility(prices: &[Decimal]) -> f64 {
    std_dev_around(prices, statistics::average(prices))
}

/// 최근 `min(n, period)`개 가격의 표준편차.
///
/// 기준값은 같은 창의 이동평균(2자리 반올림)입니다.
///
/// # 에러
/// - 기간이 0인 경우
pub fn windowed_std_dev(prices: &[Decimal], period: usize) -> IndicatorResult<f64> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "기간은 0보다 커야 합니다".to_string(),
        ));
    }

    let window = &prices[..prices.len().min(period)];
    let mean = trend::moving_average(
        window,
        SmaParams {
            period: window.len().max(1),
        },
    )?;

    Ok(std_dev_around(window, mean))
}

/// 볼린저 밴드 계산.
///
/// 중간 밴드 = `period` 이동평균 (부족하면 전체 평균)
/// 상단/하단 = 중간 ± (k × 창 표준편차)
///
/// # 에러
/// - 빈 슬라이스
/// - 기간이 0인 경우
pub fn bollinger_bands(
    prices: &[Decimal],
    params: BollingerBandsParams,
) -> IndicatorResult<BollingerBands> {
    let current = *prices.first().ok_or(IndicatorError::InsufficientData {
        required: 1,
        provided: 0,
    })?;

    let middle = trend::moving_average(
        prices,
        SmaParams {
            period: params.period,
        },
    )?;
    let std_dev = windowed_std_dev(prices, params.period)?;

    let deviation = decimal_from_f64(params.std_dev_multiplier.to_f64_lossy() * std_dev);
    let upper = middle.saturating_add(deviation);
    let lower = middle.saturating_sub(deviation);

    Ok(BollingerBands {
        upper_band: upper,
        middle_band: middle,
        lower_band: lower,
        position: BandPosition::classify(current, upper, lower),
    })
}

/// 높은 변동성 여부 (변동성 > 20).
pub fn is_high_volatility(volatility: f64) -> bool {
    volatility > HIGH_VOLATILITY_THRESHOLD
}
