//! 볼린저 밴드 값 객체.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 현재가의 볼린저 밴드 대비 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandPosition {
    /// 상단 밴드 위 (과매수)
    AboveUpper,
    /// 밴드 내부
    #[default]
    Between,
    /// 하단 밴드 아래 (과매도)
    BelowLower,
}

impl BandPosition {
    /// 현재가와 상·하단 밴드로 위치를 판정합니다.
    ///
    /// 밴드 경계와 같은 가격은 `Between`입니다.
    pub fn classify(current: Decimal, upper: Decimal, lower: Decimal) -> Self {
        if current > upper {
            Self::AboveUpper
        } else if current < lower {
            Self::BelowLower
        } else {
            Self::Between
        }
    }

    /// 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::AboveUpper => "상단 밴드 이탈 (과매수)",
            Self::Between => "정상 범위",
            Self::BelowLower => "하단 밴드 이탈 (과매도)",
        }
    }
}

impl fmt::Display for BandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AboveUpper => "ABOVE_UPPER",
            Self::Between => "BETWEEN",
            Self::BelowLower => "BELOW_LOWER",
        };
        write!(f, "{}", s)
    }
}

/// 볼린저 밴드 (분석마다 새로 생성되며 이후 변경되지 않음).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerBands {
    /// 상단 밴드 (MA + k × σ)
    pub upper_band: Decimal,
    /// 중간 밴드 (이동평균)
    pub middle_band: Decimal,
    /// 하단 밴드 (MA - k × σ)
    pub lower_band: Decimal,
    /// 현재가 위치
    pub position: BandPosition,
}

impl BollingerBands {
    /// 밴드 폭 (상단 - 하단).
    pub fn width(&self) -> Decimal {
        self.upper_band.saturating_sub(self.lower_band)
    }
}
