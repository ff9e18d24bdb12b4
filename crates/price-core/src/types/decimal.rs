//! 가격 계산을 위한 Decimal 유틸리티.
//!
//! 가격은 항상 `Decimal`로 다루고, 통계량(표준편차, 기울기 등)은 `f64`로 다룹니다.
//! 이 모듈은 두 표현 사이의 변환과 반올림 규칙을 한 곳에 모읍니다.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// 평균·중앙값 등 금액 통계의 소수점 자릿수.
pub const PRICE_SCALE: u32 = 2;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
    fn round_half_up(&self, dp: u32) -> Decimal;

    /// 금액 통계 자릿수(2자리)로 반올림합니다.
    fn round_price(&self) -> Decimal;

    /// `f64`로 변환합니다. 표현 범위를 벗어나면 0을 반환합니다.
    fn to_f64_lossy(&self) -> f64;
}

impl DecimalExt for Decimal {
    fn round_half_up(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn round_price(&self) -> Decimal {
        self.round_half_up(PRICE_SCALE)
    }

    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

/// `f64` 값을 Decimal로 변환합니다.
///
/// NaN이나 무한대처럼 표현할 수 없는 값은 0이 됩니다.
pub fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// 가격 합계를 개수로 나눈 평균을 2자리 반올림하여 반환합니다.
///
/// 빈 슬라이스는 0을 반환합니다. 합계가 Decimal 범위를 넘으면
/// 각 값을 먼저 개수로 나눈 뒤 더합니다.
pub fn mean_rounded(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }

    let count = Decimal::from(values.len());
    let mean = match values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
    {
        Some(sum) => sum / count,
        None => values
            .iter()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v / count)),
    };

    mean.round_price()
}

/// 두 값의 평균. 합이 Decimal 범위를 넘어도 패닉하지 않습니다.
pub fn midpoint(a: Decimal, b: Decimal) -> Decimal {
    match a.checked_add(b) {
        Some(sum) => sum / Decimal::TWO,
        None => (a / Decimal::TWO).saturating_add(b / Decimal::TWO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up() {
        assert_eq!(dec!(1.005).round_price(), dec!(1.01));
        assert_eq!(dec!(1.004).round_price(), dec!(1.00));
        assert_eq!(dec!(-1.005).round_price(), dec!(-1.01));
        assert_eq!(dec!(0.12345).round_half_up(4), dec!(0.1235));
    }

    #[test]
    fn test_mean_rounded() {
        assert_eq!(mean_rounded(&[dec!(100), dec!(90), dec!(80)]), dec!(90.00));
        assert_eq!(mean_rounded(&[dec!(1), dec!(2), dec!(2)]), dec!(1.67));
        assert_eq!(mean_rounded(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_mean_rounded_near_decimal_max() {
        let huge = dec!(40000000000000000000000000000);
        assert_eq!(mean_rounded(&[huge, huge]), huge);
        assert_eq!(
            mean_rounded(&[huge, huge, Decimal::ZERO, Decimal::ZERO]),
            huge / Decimal::TWO
        );
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(dec!(80), dec!(100)), dec!(90));
        assert_eq!(midpoint(Decimal::MAX, Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_f64_conversions() {
        assert_eq!(dec!(12.5).to_f64_lossy(), 12.5);
        assert_eq!(decimal_from_f64(2.5), dec!(2.5));
        assert_eq!(decimal_from_f64(f64::NAN), Decimal::ZERO);
    }
}
