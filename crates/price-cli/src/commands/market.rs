//! 시장 일괄 분석 명령.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use price_analytics::{analyze_market, MarketAnalysis};
use price_core::{AnalysisParams, InputFormat, Recommendation};

use super::input::load_records;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 시장 분석 명령 설정.
#[derive(Debug)]
pub struct MarketConfig {
    /// 입력 파일 경로
    pub input: PathBuf,
    /// 입력 형식
    pub format: InputFormat,
    /// CSV 구분자
    pub delimiter: u8,
}

/// 레코드 파일을 읽어 품목별로 분석합니다.
pub fn run_market(config: &MarketConfig, params: AnalysisParams) -> Result<MarketAnalysis> {
    let records = load_records(&config.input, config.format, config.delimiter)?;
    info!(records = records.len(), "Running market analysis");

    analyze_market(&records, params).context("Invalid analysis parameters")
}

/// 분석 결과를 출력용 문자열로 변환합니다.
pub fn render_market(
    analysis: &MarketAnalysis,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(analysis)),
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(analysis).context("Failed to serialize to JSON")
        }
        OutputFormat::Json => {
            serde_json::to_string(analysis).context("Failed to serialize to JSON")
        }
    }
}

/// 테이블 형식 출력.
fn format_table(analysis: &MarketAnalysis) -> String {
    let mut output = String::new();

    if let Some(market) = &analysis.market_name {
        output.push_str(&format!("Market: {}\n\n", market));
    }

    output.push_str(&format!(
        "{:<16} {:>6} {:>12} {:>12} {:>7} {:<7} {:<8} {:>12} {:>12} {:<12} {:>5}  {}\n",
        "ITEM",
        "POINTS",
        "CURRENT",
        "AVERAGE",
        "RSI",
        "LEVEL",
        "MOOD",
        "7D",
        "30D",
        "ACTION",
        "CONF",
        "RISKS"
    ));
    output.push_str(&"-".repeat(150));
    output.push('\n');

    for report in &analysis.reports {
        output.push_str(&format!(
            "{:<16} {:>6} {:>12} {:>12} {:>7.2} {:<7} {:<8} {:>12} {:>12} {:<12} {:>5.2}  {}\n",
            truncate(&report.name, 16),
            report.data_points,
            report.current_price,
            report.average_price,
            report.rsi,
            report.price_level.to_string(),
            report.market_sentiment.to_string(),
            report.predicted_price_7_days.round_dp(2),
            report.predicted_price_30_days.round_dp(2),
            report.recommendation.to_string(),
            report.confidence,
            report.risk_messages().join(", ")
        ));
    }

    let summary = analysis.summary();
    output.push('\n');
    output.push_str(&format!(
        "Total: {} items ({} records skipped)\n",
        summary.total_items, analysis.skipped_records
    ));
    for recommendation in Recommendation::ALL {
        let count = summary.count(recommendation);
        if count > 0 {
            output.push_str(&format!("  {}: {}\n", recommendation, count));
        }
    }

    output
}

/// 문자열 자르기 (UTF-8 안전).
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use price_core::PriceRecord;

    fn sample() -> MarketAnalysis {
        let records = vec![
            PriceRecord {
                item_name: "배추".to_string(),
                market_name: "가락시장".to_string(),
                price: "3000".to_string(),
                unit: None,
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            },
            PriceRecord {
                item_name: String::new(),
                market_name: "가락시장".to_string(),
                price: "100".to_string(),
                unit: None,
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            },
        ];
        analyze_market(&records, AnalysisParams::default()).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_table_lists_items_and_summary() {
        let analysis = sample();
        let table = render_market(&analysis, OutputFormat::Table, false).unwrap();
        assert!(table.contains("Market: 가락시장"));
        assert!(table.contains("배추"));
        assert!(table.contains(&analysis.reports[0].risk_messages().join(", ")));
        assert!(table.contains("Total: 1 items (1 records skipped)"));
    }

    #[test]
    fn test_json_output() {
        let json = render_market(&sample(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skippedRecords"], 1);
        assert_eq!(value["reports"][0]["name"], "배추");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("아주아주긴품목이름입니다", 6), "아주아...");
        assert_eq!(truncate("무", 6), "무");
        assert_eq!(truncate("양배추", 2), "...");
    }
}
