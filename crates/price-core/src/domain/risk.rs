//! RiskFactor - 분석 결과에서 식별되는 리스크 요인.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 임계값 기반 리스크 요인.
///
/// `Display`와 직렬화 모두 리포트의 리스크 목록에 들어가는 고정 문자열을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    /// 변동성 > 20
    #[serde(rename = "high volatility")]
    HighVolatility,
    /// RSI > 80
    #[serde(rename = "extreme overbought")]
    ExtremeOverbought,
    /// RSI < 20
    #[serde(rename = "extreme oversold")]
    ExtremeOversold,
    /// 현재가가 볼린저 상단 밴드 위
    #[serde(rename = "upper band breach")]
    UpperBandBreach,
    /// 현재가가 볼린저 하단 밴드 아래
    #[serde(rename = "lower band breach")]
    LowerBandBreach,
    /// 가격 수준이 HIGH
    #[serde(rename = "historic high-price range")]
    HistoricHighPriceRange,
    /// |기울기| > 2.0
    #[serde(rename = "sharp trend reversal")]
    SharpTrendReversal,
    /// 어떤 요인도 해당하지 않음
    #[serde(rename = "no major risk")]
    NoMajorRisk,
}

impl RiskFactor {
    /// 모든 리스크 요인 (판정 순서).
    pub const ALL: [RiskFactor; 8] = [
        Self::HighVolatility,
        Self::ExtremeOverbought,
        Self::ExtremeOversold,
        Self::UpperBandBreach,
        Self::LowerBandBreach,
        Self::HistoricHighPriceRange,
        Self::SharpTrendReversal,
        Self::NoMajorRisk,
    ];

    /// 리포트에 기록되는 표식 문자열.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighVolatility => "high volatility",
            Self::ExtremeOverbought => "extreme overbought",
            Self::ExtremeOversold => "extreme oversold",
            Self::UpperBandBreach => "upper band breach",
            Self::LowerBandBreach => "lower band breach",
            Self::HistoricHighPriceRange => "historic high-price range",
            Self::SharpTrendReversal => "sharp trend reversal",
            Self::NoMajorRisk => "no major risk",
        }
    }

    /// 사용자에게 보여줄 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::HighVolatility => "높은 가격 변동성",
            Self::ExtremeOverbought => "극도의 과매수 상태",
            Self::ExtremeOversold => "극도의 과매도 상태",
            Self::UpperBandBreach => "볼린저 밴드 상단 이탈 (과매수)",
            Self::LowerBandBreach => "볼린저 밴드 하단 이탈 (과매도)",
            Self::HistoricHighPriceRange => "역사적 고가 구간",
            Self::SharpTrendReversal => "급격한 가격 추세 변화",
            Self::NoMajorRisk => "주요 리스크 없음",
        }
    }

    /// 실제 리스크인지 여부 (`NoMajorRisk`만 false)
    pub fn is_risk(self) -> bool {
        !matches!(self, Self::NoMajorRisk)
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
