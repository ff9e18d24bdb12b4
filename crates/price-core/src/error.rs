//! 가격 분석 시스템의 에러 타입.
//!
//! 분석 엔진 자체는 에러를 반환하지 않습니다. 빈 입력은 `None`으로,
//! 퇴화된 통계는 정해진 대체값으로 처리됩니다. 여기 정의된 에러는
//! 입력 파싱, 설정 로드, 파일 입출력 등 경계 영역에서만 사용됩니다.

use thiserror::Error;

/// 가격 분석 에러.
#[derive(Debug, Error)]
pub enum PriceError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 파싱 에러
    #[error("파싱 에러: {0}")]
    Parse(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 가격 분석 작업을 위한 Result 타입.
pub type PriceResult<T> = Result<T, PriceError>;

impl PriceError {
    /// 사용자 입력을 고치면 해결되는 에러인지 확인합니다.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PriceError::InvalidInput(_) | PriceError::Parse(_) | PriceError::Config(_)
        )
    }
}

impl From<serde_json::Error> for PriceError {
    fn from(err: serde_json::Error) -> Self {
        PriceError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for PriceError {
    fn from(err: config::ConfigError) -> Self {
        PriceError::Config(err.to_string())
    }
}
