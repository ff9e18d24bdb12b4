//! 가격 관측치와 가격 시계열.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 원본 가격 문자열을 Decimal로 변환합니다.
///
/// 숫자와 `.` 이외의 문자("1,500원", "2,000/kg" 등)는 모두 제거한 뒤 파싱합니다.
/// 비어 있거나 파싱할 수 없는 값은 0을 반환합니다.
pub fn parse_price(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// 특정 날짜의 가격 관측치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// 관측 날짜
    pub date: NaiveDate,
    /// 가격
    pub price: Decimal,
}

impl PriceObservation {
    /// 새 관측치를 생성합니다.
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }

    /// 원본 가격 문자열로부터 관측치를 생성합니다.
    pub fn from_raw(date: NaiveDate, raw_price: &str) -> Self {
        Self::new(date, parse_price(raw_price))
    }
}

/// 한 품목의 가격 시계열.
///
/// 항상 하나 이상의 관측치를 가지며 날짜 내림차순(최신순)으로 정렬되어 있습니다.
/// 같은 날짜의 관측치는 입력 순서를 유지하며 중복 제거는 하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSeries {
    name: String,
    observations: Vec<PriceObservation>,
}

impl PriceSeries {
    /// 임의 순서의 관측치로부터 시계열을 생성합니다.
    ///
    /// 관측치가 없으면 `None`을 반환합니다.
    pub fn new(name: impl Into<String>, mut observations: Vec<PriceObservation>) -> Option<Self> {
        if observations.is_empty() {
            return None;
        }

        observations.sort_by(|a, b| b.date.cmp(&a.date));

        Some(Self {
            name: name.into(),
            observations,
        })
    }

    /// 품목 이름.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 최신순으로 정렬된 관측치.
    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    /// 관측치 개수.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// 관측치가 없는지 확인합니다. 생성 규칙상 항상 `false`입니다.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// 가장 최근 관측치.
    pub fn current(&self) -> &PriceObservation {
        &self.observations[0]
    }

    /// 최신순 가격 목록.
    pub fn prices(&self) -> Vec<Decimal> {
        self.observations.iter().map(|o| o.price).collect()
    }
}

/// 상위 수집기에서 넘어오는 원본 가격 레코드.
///
/// 가격은 단위나 쉼표가 섞인 문자열 그대로 들어옵니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// 품목 이름
    pub item_name: String,
    /// 시장 이름
    #[serde(default)]
    pub market_name: String,
    /// 원본 가격 문자열
    pub price: String,
    /// 판매 단위 (예: "1kg")
    #[serde(default)]
    pub unit: Option<String>,
    /// 조사 날짜
    pub date: NaiveDate,
}

impl PriceRecord {
    /// 파싱된 가격.
    pub fn parsed_price(&self) -> Decimal {
        parse_price(&self.price)
    }

    /// 가격 관측치로 변환합니다.
    pub fn to_observation(&self) -> PriceObservation {
        PriceObservation::new(self.date, self.parsed_price())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn series_is_sorted_newest_first(
            raw in prop::collection::vec((0u64..1000, 0i64..1_000_000), 1..60)
        ) {
            let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let observations: Vec<_> = raw
                .iter()
                .map(|(offset, cents)| {
                    PriceObservation::new(base + Days::new(*offset), Decimal::new(*cents, 2))
                })
                .collect();

            let series = PriceSeries::new("품목", observations.clone()).unwrap();
            prop_assert_eq!(series.len(), observations.len());
            prop_assert!(series.observations().windows(2).all(|w| w[0].date >= w[1].date));

            let newest = observations.iter().map(|o| o.date).max().unwrap();
            prop_assert_eq!(series.current().date, newest);
        }

        #[test]
        fn parse_price_never_negative(raw in ".*") {
            prop_assert!(parse_price(&raw) >= Decimal::ZERO);
        }
    }
}
