//! 농산물 가격 분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 배추 가격 이력 분석 (JSON 리포트)
//! price analyze -i data/cabbage.csv --item 배추 --pretty
//!
//! # 시장 전체 품목 일괄 분석
//! price market -i data/garak_2024.csv
//!
//! # 설정 파일과 환경 변수로 파라미터 조정
//! PRICE__ANALYSIS__RSI_PERIOD=21 price -c config/custom.toml analyze -i prices.json
//!
//! # 사람이 읽는 요약, RUST_LOG/LOG_FORMAT으로 로그 제어
//! RUST_LOG=price_analytics=trace LOG_FORMAT=json price analyze -i prices.json --summary
//! ```
//!
//! 입력 파일이나 설정이 잘못되면 종료 코드 2, 그 밖의 실패는 1로 끝납니다.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use price_cli::commands::analyze::{render_report, render_summary, run_analyze, AnalyzeConfig};
use price_cli::commands::input::detect_format;
use price_cli::commands::market::{render_market, run_market, MarketConfig, OutputFormat};
use price_core::{
    init_logging, init_logging_from_env, AppConfig, InputFormat, LogConfig, LogFormat, PriceError,
};

#[derive(Parser)]
#[command(name = "price")]
#[command(about = "Price analysis CLI - 농산물 가격 기술적 분석 및 구매 추천", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (TOML)
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    /// 디버그 로그 출력 (스팬 시작/종료 포함)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 단일 품목 가격 이력 분석
    Analyze {
        /// 입력 파일 (JSON 배열 또는 date,price CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// 품목명 (기본: 파일명)
        #[arg(long)]
        item: Option<String>,

        /// 입력 형식 (json, csv). 생략하면 확장자나 설정을 따름
        #[arg(short, long)]
        format: Option<String>,

        /// 들여쓰기된 JSON 출력
        #[arg(long)]
        pretty: bool,

        /// JSON 대신 사람이 읽는 요약 출력
        #[arg(long)]
        summary: bool,
    },

    /// 시장 가격 레코드 일괄 분석
    Market {
        /// 입력 파일 (item_name,market_name,price,unit,date CSV 또는 JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// 입력 형식 (json, csv). 생략하면 확장자나 설정을 따름
        #[arg(short, long)]
        format: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,

        /// 들여쓰기된 JSON 출력
        #[arg(long)]
        pretty: bool,
    },
}

fn resolve_format(flag: Option<&str>, input: &Path, config: &AppConfig) -> Result<InputFormat> {
    match flag {
        Some(value) => Ok(InputFormat::from_str(value)?),
        None => Ok(detect_format(input, config.input.format)),
    }
}

/// 로깅 초기화.
///
/// `--verbose`가 가장 우선하고, `RUST_LOG`가 설정되어 있으면 환경 변수를,
/// 그 외에는 설정 파일의 `[logging]`을 따릅니다.
fn setup_logging(verbose: bool, config: &AppConfig) -> Result<()> {
    let log_format = LogFormat::from_str(&config.logging.format).unwrap_or(LogFormat::Compact);
    let result = if verbose {
        init_logging(
            LogConfig::new("debug")
                .with_format(log_format)
                .with_span_events(true),
        )
    } else if std::env::var_os("RUST_LOG").is_some() {
        init_logging_from_env()
    } else {
        init_logging(LogConfig::new(config.logging.level.clone()).with_format(log_format))
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// 에러 체인에 입력 에러가 있으면 2, 아니면 1.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    let input_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<PriceError>())
        .is_some_and(PriceError::is_input_error);
    if input_error {
        2
    } else {
        1
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;

    setup_logging(cli.verbose, &config)?;

    debug!(config = ?config, "Configuration loaded");
    let delimiter = config.input.delimiter_byte()?;

    match cli.command {
        Commands::Analyze {
            input,
            item,
            format,
            pretty,
            summary,
        } => {
            let format = resolve_format(format.as_deref(), &input, &config)?;
            let analyze_config = AnalyzeConfig {
                input,
                item,
                format,
                delimiter,
            };

            let report = run_analyze(&analyze_config, config.analysis)?;
            if summary {
                println!("{}", render_summary(report.as_ref()));
            } else {
                println!("{}", render_report(report.as_ref(), pretty)?);
            }
        }

        Commands::Market {
            input,
            format,
            output,
            pretty,
        } => {
            let output = OutputFormat::parse(&output)?;
            let format = resolve_format(format.as_deref(), &input, &config)?;
            let market_config = MarketConfig {
                input,
                format,
                delimiter,
            };

            let analysis = run_market(&market_config, config.analysis)?;
            println!("{}", render_market(&analysis, output, pretty)?);
        }
    }

    Ok(())
}
