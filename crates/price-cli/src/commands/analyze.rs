//! 단일 품목 분석 명령.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use price_analytics::PriceAnalyzer;
use price_core::{AnalysisParams, InputFormat, PriceAnalysisReport};

use super::input::load_observations;

/// 관측치가 없을 때 출력하는 메시지.
pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// 분석 명령 설정.
#[derive(Debug)]
pub struct AnalyzeConfig {
    /// 입력 파일 경로
    pub input: PathBuf,
    /// 리포트에 표시할 품목명 (기본: 파일명)
    pub item: Option<String>,
    /// 입력 형식
    pub format: InputFormat,
    /// CSV 구분자
    pub delimiter: u8,
}

impl AnalyzeConfig {
    /// 품목명. 지정하지 않으면 파일명(확장자 제외)을 사용합니다.
    pub fn item_name(&self) -> String {
        self.item.clone().unwrap_or_else(|| {
            self.input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("unknown")
                .to_string()
        })
    }
}

/// 입력 파일을 읽어 분석합니다.
///
/// 관측치가 없으면 `Ok(None)`을 반환합니다.
pub fn run_analyze(
    config: &AnalyzeConfig,
    params: AnalysisParams,
) -> Result<Option<PriceAnalysisReport>> {
    let analyzer = PriceAnalyzer::new(params).context("Invalid analysis parameters")?;
    let observations = load_observations(&config.input, config.format, config.delimiter)?;
    let item = config.item_name();

    info!(item = %item, observations = observations.len(), "Analyzing price history");

    let report = analyzer.analyze(&item, observations);
    match &report {
        Some(report) => info!(
            item = %item,
            recommendation = %report.recommendation,
            confidence = report.confidence,
            "Analysis finished"
        ),
        None => warn!(item = %item, "No observations in input"),
    }

    Ok(report)
}

/// 리포트를 출력용 문자열로 변환합니다.
pub fn render_report(report: Option<&PriceAnalysisReport>, pretty: bool) -> Result<String> {
    let Some(report) = report else {
        return Ok(INSUFFICIENT_DATA.to_string());
    };

    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("Failed to serialize report to JSON")
}

/// 리포트를 사람이 읽는 요약 텍스트로 변환합니다.
pub fn render_summary(report: Option<&PriceAnalysisReport>) -> String {
    let Some(report) = report else {
        return INSUFFICIENT_DATA.to_string();
    };

    let bands = &report.bollinger_bands;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} points, as of {})",
        report.name, report.data_points, report.as_of
    );
    let _ = writeln!(
        out,
        "  현재가 {} / 평균 {} / 중앙값 {} ({}~{})",
        report.current_price,
        report.average_price,
        report.median_price,
        report.min_price,
        report.max_price
    );
    let _ = writeln!(out, "  가격 수준: {}", report.price_level.description());
    let _ = writeln!(
        out,
        "  추세: {} (기울기 {:.4})",
        report.trend_direction.description(),
        report.trend_slope
    );
    let _ = writeln!(
        out,
        "  RSI {:.2}, 시장 심리: {}",
        report.rsi,
        report.market_sentiment.description()
    );
    let _ = writeln!(
        out,
        "  볼린저 밴드 {}~{} (폭 {}): {}",
        bands.lower_band,
        bands.upper_band,
        bands.width(),
        bands.position.description()
    );
    let _ = writeln!(
        out,
        "  예측: 7일 {} ({:+}), 30일 {}",
        report.predicted_price_7_days.round_dp(2),
        report.expected_change_7_days().round_dp(2),
        report.predicted_price_30_days.round_dp(2)
    );
    for risk in &report.risk_factors {
        let _ = writeln!(out, "  리스크: {}", risk.description());
    }
    let _ = write!(
        out,
        "  추천: {} (신뢰도 {:.2})",
        report.recommendation.description(),
        report.confidence
    );
    out
}
