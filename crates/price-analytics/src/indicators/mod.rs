//! 기술적 지표 모듈.
//!
//! 가격 분석 리포트의 기초가 되는 지표 계산기를 제공합니다.
//! 모든 계산기는 상태가 없는 순수 함수이며, 최신순으로 정렬된 가격을 입력으로 받습니다.
//!
//! # 지원 지표
//!
//! ## 기술 통계 (Statistics)
//! - 현재가, 평균, 중앙값, 최저가, 최고가
//! - 가격 수준 (LOW / MEDIUM / HIGH)
//!
//! ## 추세 지표 (Trend Indicators)
//! - **SMA**: 단순 이동평균 (7일, 30일)
//! - **기울기**: 최근 30개 관측치의 최소제곱 기울기
//!
//! ## 모멘텀 지표 (Momentum Indicators)
//! - **RSI**: 단순 상대강도지수 (14)
//!
//! ## 변동성 지표 (Volatility Indicators)
//! - **변동성**: 전체 시계열 모표준편차
//! - **Bollinger Bands**: 볼린저 밴드 (20, 2σ)
//!
//! ## 계절성 (Seasonality)
//! - 월별 평균 대비 현재 월 가격 점수
//!
//! # 사용 예시
//!
//! ```ignore
//! use price_analytics::indicators::{IndicatorEngine, rsi, RsiParams};
//!
//! let value = rsi(&prices, RsiParams { period: 14 })?;
//!
//! let engine = IndicatorEngine::default();
//! let snapshot = engine.compute(&series)?;
//! ```

pub mod momentum;
pub mod seasonality;
pub mod statistics;
pub mod trend;
pub mod volatility;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use price_core::{AnalysisParams, BollingerBands, PriceLevel, PriceSeries, TrendDirection};

pub use momentum::{is_overbought, is_oversold, rsi, RsiParams, NEUTRAL_RSI};
pub use seasonality::{monthly_averages, seasonality_score, SeasonalityParams, NEUTRAL_SEASONALITY};
pub use statistics::{classify_price_level, descriptive_stats, DescriptiveStats};
pub use trend::{moving_average, trend_slope, SmaParams, TrendParams};
pub use volatility::{
    bollinger_bands, is_high_volatility, volatility, windowed_std_dev, BollingerBandsParams,
};

/// 지표 계산 오류.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 데이터 부족 오류
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// 한 시계열에 대해 계산된 모든 기초 지표.
///
/// 시장 심리, 가격 예측, 리스크, 추천 점수는 모두 이 값만 보고 계산됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// 기술 통계
    pub stats: DescriptiveStats,
    /// 단기 이동평균
    pub short_moving_average: Decimal,
    /// 장기 이동평균
    pub long_moving_average: Decimal,
    /// 전체 시계열 변동성
    pub volatility: f64,
    /// 추세 기울기
    pub trend_slope: f64,
    /// 가격 수준
    pub price_level: PriceLevel,
    /// RSI
    pub rsi: f64,
    /// 볼린저 밴드
    pub bollinger_bands: BollingerBands,
    /// 계절성 점수
    pub seasonality_score: f64,
}

impl IndicatorSnapshot {
    /// 현재가.
    pub fn current_price(&self) -> Decimal {
        self.stats.current
    }

    /// 추세 방향.
    pub fn trend_direction(&self) -> TrendDirection {
        TrendDirection::from_slope(self.trend_slope)
    }
}

/// 통합 지표 엔진.
///
/// 분석 파라미터를 각 지표의 파라미터로 나누어 전달하고
/// 의존 순서(통계 → 이동평균 → 변동성 → 추세 → 가격 수준 → RSI → 밴드 → 계절성)대로 계산합니다.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    params: AnalysisParams,
}

impl IndicatorEngine {
    /// 새로운 지표 엔진 생성.
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    /// 사용 중인 분석 파라미터.
    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// 시계열의 모든 기초 지표를 계산합니다.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorResult<IndicatorSnapshot> {
        let prices = series.prices();
        let params = &self.params;

        let stats = descriptive_stats(&prices)?;
        let short_moving_average = moving_average(
            &prices,
            SmaParams {
                period: params.short_window,
            },
        )?;
        let long_moving_average = moving_average(
            &prices,
            SmaParams {
                period: params.long_window,
            },
        )?;
        let volatility = volatility(&prices);
        let trend_slope = trend_slope(
            &prices,
            TrendParams {
                window: params.trend_window,
            },
        )?;
        let price_level = classify_price_level(stats.current, stats.min, stats.max);
        let rsi = rsi(
            &prices,
            RsiParams {
                period: params.rsi_period,
            },
        )?;
        let bollinger_bands = bollinger_bands(
            &prices,
            BollingerBandsParams {
                period: params.bollinger_period,
                std_dev_multiplier: params.bollinger_std_dev_multiplier,
            },
        )?;
        let seasonality_score = seasonality_score(
            series.observations(),
            SeasonalityParams {
                min_points: params.seasonality_min_points,
            },
        );

        trace!(
            item = series.name(),
            average = %stats.average,
            volatility,
            trend_slope,
            rsi,
            band_position = %bollinger_bands.position,
            seasonality_score,
            "Indicators computed"
        );

        Ok(IndicatorSnapshot {
            stats,
            short_moving_average,
            long_moving_average,
            volatility,
            trend_slope,
            price_level,
            rsi,
            bollinger_bands,
            seasonality_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use price_core::{BandPosition, PriceObservation};
    use rust_decimal_macros::dec;

    fn sample_series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let observations = (0..40)
            .map(|i| {
                PriceObservation::new(
                    start + chrono::Days::new(i),
                    Decimal::from(1000 + (i as i64 % 5) * 10),
                )
            })
            .collect();
        PriceSeries::new("두부", observations).unwrap()
    }

    #[test]
    fn test_compute_snapshot() {
        let engine = IndicatorEngine::default();
        let snapshot = engine.compute(&sample_series()).unwrap();

        assert_eq!(snapshot.current_price(), dec!(1040));
        assert_eq!(snapshot.stats.min, dec!(1000));
        assert_eq!(snapshot.stats.max, dec!(1040));
        assert!(snapshot.rsi >= 0.0 && snapshot.rsi <= 100.0);
        assert!(snapshot.bollinger_bands.upper_band >= snapshot.bollinger_bands.lower_band);
    }

    #[test]
    fn test_compute_single_point() {
        let series = PriceSeries::new(
            "무",
            vec![PriceObservation::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), dec!(1500))],
        )
        .unwrap();
        let snapshot = IndicatorEngine::default().compute(&series).unwrap();

        assert_eq!(snapshot.short_moving_average, dec!(1500));
        assert_eq!(snapshot.long_moving_average, dec!(1500));
        assert_eq!(snapshot.volatility, 0.0);
        assert_eq!(snapshot.trend_slope, 0.0);
        assert_eq!(snapshot.price_level, PriceLevel::Medium);
        assert_eq!(snapshot.rsi, NEUTRAL_RSI);
        assert_eq!(snapshot.bollinger_bands.position, BandPosition::Between);
        assert_eq!(snapshot.seasonality_score, NEUTRAL_SEASONALITY);
        assert_eq!(snapshot.trend_direction(), TrendDirection::Flat);
    }

    #[test]
    fn test_compute_rejects_zero_window() {
        let engine = IndicatorEngine::new(AnalysisParams {
            short_window: 0,
            ..Default::default()
        });
        assert!(matches!(
            engine.compute(&sample_series()),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }
}
