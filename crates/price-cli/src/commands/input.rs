//! 가격 이력 입력 파서.
//!
//! - 관측치: `{date, price}` JSON 배열 또는 `date,price` 헤더를 가진 CSV
//! - 시장 레코드: `item_name,market_name,price,unit,date` CSV 또는 같은 필드의 JSON 배열
//!
//! 가격은 숫자뿐 아니라 "1,500원" 같은 원본 문자열도 허용합니다.
//! 형식이 맞지 않는 입력은 `PriceError::Parse`, 파일을 열 수 없으면 `PriceError::Io`입니다.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use price_core::{
    parse_price, InputFormat, PriceError, PriceObservation, PriceRecord, PriceResult,
};

/// 입력 가격 값 (숫자 또는 원본 문자열).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(serde_json::Number),
    Text(String),
}

impl RawPrice {
    fn to_observation_price(&self) -> rust_decimal::Decimal {
        match self {
            Self::Number(n) => parse_price(&n.to_string()),
            Self::Text(s) => parse_price(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonObservation {
    date: NaiveDate,
    price: RawPrice,
}

#[derive(Debug, Deserialize)]
struct CsvObservation {
    date: NaiveDate,
    price: String,
}

/// 파일 확장자로 입력 형식을 추정합니다. 알 수 없으면 `fallback`을 사용합니다.
pub fn detect_format(path: &Path, fallback: InputFormat) -> InputFormat {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => InputFormat::Json,
        Some("csv") => InputFormat::Csv,
        _ => fallback,
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(PriceError::from)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn csv_row_error(line: usize, err: csv::Error) -> PriceError {
    PriceError::Parse(format!("Invalid CSV row {}: {}", line + 1, err))
}

/// 관측치 목록을 읽습니다.
pub fn read_observations<R: Read>(
    reader: R,
    format: InputFormat,
    delimiter: u8,
) -> PriceResult<Vec<PriceObservation>> {
    let observations: Vec<PriceObservation> = match format {
        InputFormat::Json => {
            let rows: Vec<JsonObservation> = serde_json::from_reader(reader)
                .map_err(|e| PriceError::Parse(format!("JSON observations: {}", e)))?;
            rows.into_iter()
                .map(|row| PriceObservation::new(row.date, row.price.to_observation_price()))
                .collect()
        }
        InputFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .delimiter(delimiter)
                .trim(csv::Trim::All)
                .from_reader(reader);

            let mut observations = Vec::new();
            for (line, row) in rdr.deserialize::<CsvObservation>().enumerate() {
                let row = row.map_err(|e| csv_row_error(line, e))?;
                observations.push(PriceObservation::from_raw(row.date, &row.price));
            }
            observations
        }
    };

    debug!(count = observations.len(), ?format, "Observations loaded");
    Ok(observations)
}

/// 파일에서 관측치 목록을 읽습니다.
pub fn load_observations(
    path: &Path,
    format: InputFormat,
    delimiter: u8,
) -> Result<Vec<PriceObservation>> {
    Ok(read_observations(open(path)?, format, delimiter)?)
}

/// 시장 가격 레코드를 읽습니다.
pub fn read_records<R: Read>(
    reader: R,
    format: InputFormat,
    delimiter: u8,
) -> PriceResult<Vec<PriceRecord>> {
    let records: Vec<PriceRecord> = match format {
        InputFormat::Json => serde_json::from_reader(reader)
            .map_err(|e| PriceError::Parse(format!("JSON price records: {}", e)))?,
        InputFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .delimiter(delimiter)
                .trim(csv::Trim::All)
                .from_reader(reader);

            rdr.deserialize()
                .enumerate()
                .map(|(line, row)| row.map_err(|e| csv_row_error(line, e)))
                .collect::<PriceResult<_>>()?
        }
    };

    debug!(count = records.len(), ?format, "Price records loaded");
    Ok(records)
}

/// 파일에서 시장 가격 레코드를 읽습니다.
pub fn load_records(path: &Path, format: InputFormat, delimiter: u8) -> Result<Vec<PriceRecord>> {
    Ok(read_records(open(path)?, format, delimiter)?)
}
