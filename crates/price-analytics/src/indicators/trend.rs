//! 추세 지표 (Trend Indicators).
//!
//! - 단순 이동평균 (짧은 시계열은 전체 평균으로 대체)
//! - 최소제곱 추세 기울기
//!
//! 가격 슬라이스는 최신순(인덱스 0 = 가장 최근)입니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use price_core::{mean_rounded, DecimalExt};

use super::{statistics, IndicatorError, IndicatorResult};

/// SMA 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 30 }
    }
}

/// 추세 기울기 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrendParams {
    /// 회귀에 사용할 최근 관측치 최대 개수 (기본: 30).
    pub window: usize,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self { window: 30 }
    }
}

/// 최근 `period`개 가격의 단순 이동평균 (2자리 반올림).
///
/// 관측치가 `period`개보다 적으면 전체 평균을 반환합니다.
///
/// # 에러
/// - 기간이 0인 경우
pub fn moving_average(prices: &[Decimal], params: SmaParams) -> IndicatorResult<Decimal> {
    let period = params.period;
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "기간은 0보다 커야 합니다".to_string(),
        ));
    }

    if prices.len() < period {
        return Ok(statistics::average(prices));
    }

    Ok(mean_rounded(&prices[..period]))
}

/// 최근 `min(n, window)`개 가격에 대한 최소제곱 기울기.
///
/// x = 인덱스(0 = 최신), y = 가격으로 두고
/// `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`를 계산합니다.
/// 관측치가 2개 미만이거나 분모가 0이면 0을 반환합니다.
///
/// 인덱스가 과거로 갈수록 커지므로, 음수 기울기는 최근 가격이 과거보다 낮다는 뜻입니다.
///
/// # 에러
/// - 창 크기가 0인 경우
pub fn trend_slope(prices: &[Decimal], params: TrendParams) -> IndicatorResult<f64> {
    if params.window == 0 {
        return Err(IndicatorError::InvalidParameter(
            "추세 창 크기는 0보다 커야 합니다".to_string(),
        ));
    }

    if prices.len() < 2 {
        return Ok(0.0);
    }

    let n = prices.len().min(params.window);
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);

    for (i, price) in prices[..n].iter().enumerate() {
        let x = i as f64;
        let y = price.to_f64_lossy();
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok((n * sum_xy - sum_x * sum_y) / denominator)
}
