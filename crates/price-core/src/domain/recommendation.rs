//! Recommendation - 5단계 구매 추천 등급.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 신뢰도 구간으로 결정되는 구매 추천 등급.
///
/// | 신뢰도 | 등급 |
/// |--------|------|
/// | ≥ 0.80 | StrongBuy |
/// | ≥ 0.65 | Buy |
/// | ≥ 0.35 | Hold |
/// | ≥ 0.20 | Sell |
/// | 그 외  | StrongSell |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    /// 적극 구매
    StrongBuy,
    /// 구매
    Buy,
    /// 관망
    #[default]
    Hold,
    /// 구매 보류
    Sell,
    /// 적극 구매 보류
    StrongSell,
}

impl Recommendation {
    /// 공격적인 순서대로 나열한 전체 등급.
    pub const ALL: [Recommendation; 5] = [
        Self::StrongBuy,
        Self::Buy,
        Self::Hold,
        Self::Sell,
        Self::StrongSell,
    ];

    /// 이 등급이 되기 위한 최소 신뢰도.
    pub fn score_floor(self) -> f64 {
        match self {
            Self::StrongBuy => 0.80,
            Self::Buy => 0.65,
            Self::Hold => 0.35,
            Self::Sell => 0.20,
            Self::StrongSell => 0.0,
        }
    }

    /// 신뢰도(0~1)로부터 등급을 결정합니다.
    pub fn from_confidence(confidence: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|rec| confidence >= rec.score_floor())
            .unwrap_or(Self::StrongSell)
    }

    /// 구매 신호 여부 (StrongBuy, Buy)
    pub fn is_buy(self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy)
    }

    /// 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::StrongBuy => "지금 구매 적기",
            Self::Buy => "구매 추천",
            Self::Hold => "관망",
            Self::Sell => "구매 보류",
            Self::StrongSell => "구매 비추천",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StrongBuy => "STRONG_BUY",
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
            Self::StrongSell => "STRONG_SELL",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        let labels: Vec<&str> = Recommendation::ALL.iter().map(|r| r.description()).collect();
        assert_eq!(
            labels,
            vec!["지금 구매 적기", "구매 추천", "관망", "구매 보류", "구매 비추천"]
        );
    }

    #[test]
    fn test_from_confidence_thresholds() {
        assert_eq!(Recommendation::from_confidence(1.0), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_confidence(0.80), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_confidence(0.79), Recommendation::Buy);
        assert_eq!(Recommendation::from_confidence(0.65), Recommendation::Buy);
        assert_eq!(Recommendation::from_confidence(0.64), Recommendation::Hold);
        assert_eq!(Recommendation::from_confidence(0.35), Recommendation::Hold);
        assert_eq!(Recommendation::from_confidence(0.34), Recommendation::Sell);
        assert_eq!(Recommendation::from_confidence(0.20), Recommendation::Sell);
        assert_eq!(Recommendation::from_confidence(0.19), Recommendation::StrongSell);
        assert_eq!(Recommendation::from_confidence(0.0), Recommendation::StrongSell);
    }

    #[test]
    fn test_monotonic_in_confidence() {
        let mut previous = Recommendation::StrongBuy;
        for step in (0..=100).rev() {
            let current = Recommendation::from_confidence(step as f64 / 100.0);
            assert!(current >= previous, "{} -> {}", previous, current);
            previous = current;
        }
    }

    #[test]
    fn test_is_buy() {
        assert!(Recommendation::StrongBuy.is_buy());
        assert!(Recommendation::Buy.is_buy());
        assert!(!Recommendation::Hold.is_buy());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Recommendation::StrongSell.to_string(), "STRONG_SELL");
        let json = serde_json::to_string(&Recommendation::StrongBuy).unwrap();
        assert_eq!(json, "\"STRONG_BUY\"");
    }
}
