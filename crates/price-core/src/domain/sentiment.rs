//! 시장 심리와 추세 방향.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 추세 판정 기준 기울기 (절대값).
pub const TREND_SLOPE_THRESHOLD: f64 = 0.5;

/// 지표 투표로 결정되는 시장 심리.
///
/// 매수자 관점의 투표입니다. `Bullish`는 "지금 사기에 유리한 신호가 많다"는 뜻입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketSentiment {
    /// 매수 우호 신호 우세
    Bullish,
    /// 매수 비우호 신호 우세
    Bearish,
    /// 동률
    #[default]
    Neutral,
}

impl MarketSentiment {
    /// 찬성·반대 투표 수로 심리를 결정합니다.
    pub fn from_votes(bullish: u32, bearish: u32) -> Self {
        match bullish.cmp(&bearish) {
            std::cmp::Ordering::Greater => Self::Bullish,
            std::cmp::Ordering::Less => Self::Bearish,
            std::cmp::Ordering::Equal => Self::Neutral,
        }
    }

    /// 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::Bullish => "강세",
            Self::Bearish => "약세",
            Self::Neutral => "중립",
        }
    }
}

impl fmt::Display for MarketSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
            Self::Neutral => "NEUTRAL",
        };
        write!(f, "{}", s)
    }
}

/// 추세 기울기의 방향.
///
/// 기울기는 인덱스 0이 최신인 시계열에 대해 계산되므로,
/// 음수 기울기는 하락(`Falling`), 양수 기울기는 상승(`Rising`)으로 읽습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    /// 상승 추세 (기울기 > 0.5)
    Rising,
    /// 하락 추세 (기울기 < -0.5)
    Falling,
    /// 보합 (-0.5 ~ 0.5)
    #[default]
    Flat,
}

impl TrendDirection {
    /// 기울기로부터 추세 방향을 판정합니다.
    pub fn from_slope(slope: f64) -> Self {
        if slope < -TREND_SLOPE_THRESHOLD {
            Self::Falling
        } else if slope > TREND_SLOPE_THRESHOLD {
            Self::Rising
        } else {
            Self::Flat
        }
    }

    /// 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::Rising => "상승 추세",
            Self::Falling => "하락 추세",
            Self::Flat => "보합 추세",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rising => "RISING",
            Self::Falling => "FALLING",
            Self::Flat => "FLAT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(MarketSentiment::Bullish.description(), "강세");
        assert_eq!(MarketSentiment::Bearish.description(), "약세");
        assert_eq!(MarketSentiment::Neutral.description(), "중립");

        assert_eq!(TrendDirection::Rising.description(), "상승 추세");
        assert_eq!(TrendDirection::Falling.description(), "하락 추세");
        assert_eq!(TrendDirection::Flat.description(), "보합 추세");
    }

    #[test]
    fn test_sentiment_from_votes() {
        assert_eq!(MarketSentiment::from_votes(3, 1), MarketSentiment::Bullish);
        assert_eq!(MarketSentiment::from_votes(0, 2), MarketSentiment::Bearish);
        assert_eq!(MarketSentiment::from_votes(2, 2), MarketSentiment::Neutral);
    }

    #[test]
    fn test_trend_direction_boundaries() {
        assert_eq!(TrendDirection::from_slope(-10.0), TrendDirection::Falling);
        assert_eq!(TrendDirection::from_slope(-0.5), TrendDirection::Flat);
        assert_eq!(TrendDirection::from_slope(0.5), TrendDirection::Flat);
        assert_eq!(TrendDirection::from_slope(0.51), TrendDirection::Rising);
    }

    #[test]
    fn test_display() {
        assert_eq!(MarketSentiment::Bullish.to_string(), "BULLISH");
        assert_eq!(TrendDirection::Flat.to_string(), "FLAT");
    }
}
