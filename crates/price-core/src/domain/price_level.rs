//! PriceLevel - 과거 가격 범위 내 현재가 위치.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 최저가~최고가 범위를 3등분했을 때 현재가가 속한 구간.
///
/// - **Low**: 현재가 < 최저가 + 0.33 × 범위
/// - **High**: 현재가 > 최저가 + 0.67 × 범위
/// - **Medium**: 그 외 (범위가 0이면 항상 Medium)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceLevel {
    /// 저가 구간
    Low,
    /// 중간 구간
    #[default]
    Medium,
    /// 고가 구간
    High,
}

impl PriceLevel {
    /// 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "저가 구간",
            Self::Medium => "보통 가격",
            Self::High => "고가 구간",
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        assert_eq!(PriceLevel::Low.description(), "저가 구간");
        assert_eq!(PriceLevel::Medium.description(), "보통 가격");
        assert_eq!(PriceLevel::High.description(), "고가 구간");
    }

    #[test]
    fn test_display() {
        assert_eq!(PriceLevel::Low.to_string(), "LOW");
        assert_eq!(PriceLevel::High.to_string(), "HIGH");
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&PriceLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
    }
}
