//! 시장 단위 일괄 분석.
//!
//! 한 시장(또는 여러 시장)의 가격 레코드를 품목별로 묶어 각각 분석합니다.
//! 품목명이 비었거나 가격이 0으로 파싱되는 레코드는 분석에서 제외됩니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use price_core::{
    AnalysisParams, PriceAnalysisReport, PriceObservation, PriceRecord, PriceResult,
    Recommendation,
};

use crate::engine::PriceAnalyzer;

/// 시장 일괄 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    /// 모든 유효 레코드가 비어 있지 않은 같은 시장이면 그 시장명
    pub market_name: Option<String>,
    /// 품목별 리포트 (입력에서 처음 등장한 순서)
    pub reports: Vec<PriceAnalysisReport>,
    /// 제외된 레코드 수
    pub skipped_records: usize,
}

impl MarketAnalysis {
    /// 품목명으로 리포트를 찾습니다.
    pub fn report(&self, item_name: &str) -> Option<&PriceAnalysisReport> {
        self.reports.iter().find(|r| r.name == item_name)
    }

    /// 매수 신호(STRONG_BUY / BUY) 품목 리포트.
    pub fn buy_signals(&self) -> impl Iterator<Item = &PriceAnalysisReport> {
        self.reports.iter().filter(|r| r.is_buy_signal())
    }

    /// 추천 등급별 요약.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_reports(&self.reports)
    }
}

/// 추천 등급별 품목 수.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_items: usize,
    pub strong_buy: usize,
    pub buy: usize,
    pub hold: usize,
    pub sell: usize,
    pub strong_sell: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[PriceAnalysisReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            acc.total_items += 1;
            match report.recommendation {
                Recommendation::StrongBuy => acc.strong_buy += 1,
                Recommendation::Buy => acc.buy += 1,
                Recommendation::Hold => acc.hold += 1,
                Recommendation::Sell => acc.sell += 1,
                Recommendation::StrongSell => acc.strong_sell += 1,
            }
            acc
        })
    }

    /// 특정 등급의 품목 수.
    pub fn count(&self, recommendation: Recommendation) -> usize {
        match recommendation {
            Recommendation::StrongBuy => self.strong_buy,
            Recommendation::Buy => self.buy,
            Recommendation::Hold => self.hold,
            Recommendation::Sell => self.sell,
            Recommendation::StrongSell => self.strong_sell,
        }
    }
}

/// 가격 레코드를 품목별로 묶어 분석합니다.
///
/// # 에러
/// - 분석 파라미터가 유효하지 않은 경우
pub fn analyze_market(
    records: &[PriceRecord],
    params: AnalysisParams,
) -> PriceResult<MarketAnalysis> {
    let analyzer = PriceAnalyzer::new(params)?;

    let mut order: Vec<&str> = Vec::new();
    let mut grouped: HashMap<&str, Vec<PriceObservation>> = HashMap::new();
    let mut markets: Vec<&str> = Vec::new();
    let mut unnamed_market = false;
    let mut skipped_records = 0;

    for record in records {
        let item = record.item_name.trim();
        let observation = record.to_observation();
        if item.is_empty() || observation.price.is_zero() {
            skipped_records += 1;
            continue;
        }

        let market = record.market_name.trim();
        if market.is_empty() {
            unnamed_market = true;
        } else if !markets.contains(&market) {
            markets.push(market);
        }

        grouped
            .entry(item)
            .or_insert_with(|| {
                order.push(item);
                Vec::new()
            })
            .push(observation);
    }

    if skipped_records > 0 {
        warn!(skipped = skipped_records, "Skipped price records without item name or price");
    }

    let reports: Vec<PriceAnalysisReport> = order
        .iter()
        .filter_map(|item| {
            let observations = grouped.remove(item)?;
            analyzer.analyze(item, observations)
        })
        .collect();

    let market_name = match markets.as_slice() {
        [single] if !unnamed_market => Some((*single).to_string()),
        _ => None,
    };

    info!(
        items = reports.len(),
        records = records.len(),
        skipped = skipped_records,
        "Market analysis complete"
    );

    Ok(MarketAnalysis {
        market_name,
        reports,
        skipped_records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(item: &str, price: &str, d: u32) -> PriceRecord {
        PriceRecord {
            item_name: item.to_string(),
            market_name: "가락시장".to_string(),
            price: price.to_string(),
            unit: Some("kg".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
        }
    }

    #[test]
    fn test_groups_by_item_in_first_seen_order() {
        let records = vec![
            record("배추", "3,000원", 1),
            record("무", "1500", 1),
            record("배추", "3,500원", 2),
        ];

        let analysis = analyze_market(&records, AnalysisParams::default()).unwrap();
        let names: Vec<&str> = analysis.reports.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["배추", "무"]);
        assert_eq!(analysis.skipped_records, 0);
        assert_eq!(analysis.market_name.as_deref(), Some("가락시장"));

        let cabbage = analysis.report("배추").unwrap();
        assert_eq!(cabbage.data_points, 2);
        assert_eq!(cabbage.current_price, dec!(3500));
    }

    #[test]
    fn test_skips_blank_names_and_zero_prices() {
        let records = vec![
            record("  ", "1000", 1),
            record("당근", "가격없음", 1),
            record("당근", "0", 2),
            record("당근", "2000", 3),
        ];

        let analysis = analyze_market(&records, AnalysisParams::default()).unwrap();
        assert_eq!(analysis.skipped_records, 3);
        assert_eq!(analysis.reports.len(), 1);
        assert_eq!(analysis.reports[0].data_points, 1);
    }

    #[test]
    fn test_mixed_markets_have_no_market_name() {
        let mut other = record("무", "1200", 2);
        other.market_name = "강서시장".to_string();
        let records = vec![record("무", "1000", 1), other];

        let analysis = analyze_market(&records, AnalysisParams::default()).unwrap();
        assert!(analysis.market_name.is_none());
    }

    #[test]
    fn test_blank_market_clears_market_name() {
        let mut unnamed = record("무", "1200", 2);
        unnamed.market_name = "  ".to_string();
        let records = vec![record("무", "1000", 1), unnamed];

        let analysis = analyze_market(&records, AnalysisParams::default()).unwrap();
        assert!(analysis.market_name.is_none());
        assert_eq!(analysis.skipped_records, 0);
    }

    #[test]
    fn test_summary_counts_every_report() {
        let records = vec![record("배추", "3000", 1), record("무", "1500", 1)];
        let analysis = analyze_market(&records, AnalysisParams::default()).unwrap();
        let summary = analysis.summary();

        assert_eq!(summary.total_items, 2);
        let counted: usize = Recommendation::ALL.iter().map(|r| summary.count(*r)).sum();
        assert_eq!(counted, 2);
    }

    #[test]
    fn test_empty_records() {
        let analysis = analyze_market(&[], AnalysisParams::default()).unwrap();
        assert!(analysis.reports.is_empty());
        assert_eq!(analysis.summary(), BatchSummary::default());
    }
}
