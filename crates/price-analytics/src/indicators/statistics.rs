//! 기술 통계 (Descriptive Statistics).
//!
//! 현재가, 평균, 중앙값, 최저가, 최고가와 가격 수준 분류를 제공합니다.
//! 모든 함수는 최신순으로 정렬된 가격 슬라이스를 받습니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use price_core::{mean_rounded, midpoint, DecimalExt, PriceLevel};

use super::{IndicatorError, IndicatorResult};

/// 가격 수준 하단 경계 비율.
const LOW_LEVEL_RATIO: Decimal = dec!(0.33);
/// 가격 수준 상단 경계 비율.
const HIGH_LEVEL_RATIO: Decimal = dec!(0.67);

/// 기술 통계 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// 현재가 (인덱스 0)
    pub current: Decimal,
    /// 평균 (2자리 반올림)
    pub average: Decimal,
    /// 중앙값
    pub median: Decimal,
    /// 최저가
    pub min: Decimal,
    /// 최고가
    pub max: Decimal,
}

/// 기술 통계를 계산합니다.
///
/// # 에러
/// - 빈 슬라이스
pub fn descriptive_stats(prices: &[Decimal]) -> IndicatorResult<DescriptiveStats> {
    let (&current, rest) = prices
        .split_first()
        .ok_or(IndicatorError::InsufficientData {
            required: 1,
            provided: 0,
        })?;

    let (min, max) = rest
        .iter()
        .fold((current, current), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    Ok(DescriptiveStats {
        current,
        average: average(prices),
        median: median(prices),
        min,
        max,
    })
}

/// 전체 평균 (2자리 반올림, 빈 슬라이스는 0).
pub fn average(prices: &[Decimal]) -> Decimal {
    mean_rounded(prices)
}

/// 중앙값.
///
/// 개수가 짝수이면 가운데 두 값의 평균(2자리 반올림),
/// 홀수이면 가운데 값을 그대로 반환합니다.
pub fn median(prices: &[Decimal]) -> Decimal {
    if prices.is_empty() {
        return Decimal::ZERO;
    }

    let mut sorted = prices.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        midpoint(sorted[mid - 1], sorted[mid]).round_price()
    } else {
        sorted[mid]
    }
}

/// 최저가~최고가 범위 안에서 현재가의 가격 수준을 분류합니다.
pub fn classify_price_level(current: Decimal, min: Decimal, max: Decimal) -> PriceLevel {
    let range = max.saturating_sub(min);
    if range.is_zero() {
        return PriceLevel::Medium;
    }

    let low_threshold = min.saturating_add(range * LOW_LEVEL_RATIO);
    let high_threshold = min.saturating_add(range * HIGH_LEVEL_RATIO);

    if current < low_threshold {
        PriceLevel::Low
    } else if current > high_threshold {
        PriceLevel::High
    } else {
        PriceLevel::Medium
    }
}
