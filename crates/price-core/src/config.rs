//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정과 분석 파라미터를 정의하고 관리합니다.
//! 분석 파라미터의 기본값은 가격 분석 휴리스틱의 표준 창 크기와 정확히 일치합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PriceError, PriceResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 파라미터
    #[serde(default)]
    pub analysis: AnalysisParams,
    /// 입력 파일 설정
    #[serde(default)]
    pub input: InputConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// 입력 파일 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `[{"date": "...", "price": "..."}]` 형태의 JSON 배열
    #[default]
    Json,
    /// 헤더가 있는 CSV
    Csv,
}

impl std::str::FromStr for InputFormat {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(PriceError::InvalidInput(format!(
                "지원하지 않는 입력 형식: {}",
                other
            ))),
        }
    }
}

/// 입력 파일 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// 기본 입력 형식
    pub format: InputFormat,
    /// CSV 구분자 (한 글자)
    pub csv_delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::Json,
            csv_delimiter: ",".to_string(),
        }
    }
}

impl InputConfig {
    /// CSV 리더에 넘길 구분자 바이트를 반환합니다.
    pub fn delimiter_byte(&self) -> PriceResult<u8> {
        match self.csv_delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(PriceError::Config(format!(
                "CSV 구분자는 한 글자여야 합니다: {:?}",
                self.csv_delimiter
            ))),
        }
    }
}

/// 분석 파라미터.
///
/// 각 지표의 창 크기를 담습니다. 임계값(0.5 기울기, RSI 30/70 등)은
/// 판정 규칙의 일부이므로 여기서 바꿀 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// 단기 이동평균 기간 (기본: 7)
    pub short_window: usize,
    /// 장기 이동평균 기간 (기본: 30)
    pub long_window: usize,
    /// 추세 회귀에 사용할 최근 관측치 수 (기본: 30)
    pub trend_window: usize,
    /// RSI 기간 (기본: 14)
    pub rsi_period: usize,
    /// 볼린저 밴드 기간 (기본: 20)
    pub bollinger_period: usize,
    /// 볼린저 밴드 표준편차 배수 (기본: 2)
    pub bollinger_std_dev_multiplier: Decimal,
    /// 계절성 계산에 필요한 최소 관측치 수 (기본: 12)
    pub seasonality_min_points: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            short_window: 7,
            long_window: 30,
            trend_window: 30,
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_std_dev_multiplier: dec!(2),
            seasonality_min_points: 12,
        }
    }
}

impl AnalysisParams {
    /// 파라미터 유효성을 검사합니다.
    ///
    /// 모든 창 크기는 1 이상이어야 하고 표준편차 배수는 음수일 수 없습니다.
    pub fn validate(&self) -> PriceResult<()> {
        let windows = [
            ("short_window", self.short_window),
            ("long_window", self.long_window),
            ("trend_window", self.trend_window),
            ("rsi_period", self.rsi_period),
            ("bollinger_period", self.bollinger_period),
        ];

        if let Some((name, _)) = windows.iter().find(|(_, value)| *value == 0) {
            return Err(PriceError::Config(format!("{}는 0보다 커야 합니다", name)));
        }

        if self.bollinger_std_dev_multiplier < Decimal::ZERO {
            return Err(PriceError::Config(
                "bollinger_std_dev_multiplier는 음수일 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 우선순위: 환경 변수(`PRICE__ANALYSIS__RSI_PERIOD` 등) > 파일 > 기본값.
    pub fn load<P: AsRef<Path>>(path: P) -> PriceResult<Self> {
        let builder = config::Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("PRICE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.analysis.validate()?;
        Ok(config)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> PriceResult<Self> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analysis_params() {
        let params = AnalysisParams::default();
        assert_eq!(params.short_window, 7);
        assert_eq!(params.long_window, 30);
        assert_eq!(params.trend_window, 30);
        assert_eq!(params.rsi_period, 14);
        assert_eq!(params.bollinger_period, 20);
        assert_eq!(params.bollinger_std_dev_multiplier, dec!(2));
        assert_eq!(params.seasonality_min_points, 12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let params = AnalysisParams {
            rsi_period: 0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("rsi_period"));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let params = AnalysisParams {
            bollinger_std_dev_multiplier: dec!(-1),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_input_format_from_str() {
        assert_eq!("CSV".parse::<InputFormat>().unwrap(), InputFormat::Csv);
        assert_eq!("json".parse::<InputFormat>().unwrap(), InputFormat::Json);
        assert!("xml".parse::<InputFormat>().is_err());
    }

    #[test]
    fn test_delimiter_byte() {
        let mut input = InputConfig::default();
        assert_eq!(input.delimiter_byte().unwrap(), b',');

        input.csv_delimiter = ";;".to_string();
        assert!(input.delimiter_byte().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.analysis, AnalysisParams::default());
        assert_eq!(config.input.format, InputFormat::Json);
    }

    #[test]
    fn test_bundled_default_file_matches_defaults() {
        let raw = include_str!("../../../config/default.toml");
        let config: AppConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.analysis, AnalysisParams::default());
        assert_eq!(config.logging.format, "compact");
        assert_eq!(config.input.delimiter_byte().unwrap(), b',');
    }
}
