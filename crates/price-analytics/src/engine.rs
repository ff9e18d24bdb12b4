//! 가격 분석 엔진.
//!
//! 시계열 준비 → 기초 지표 → 심리·예측·리스크 → 추천 순으로 계산하고
//! 그 결과를 하나의 [`PriceAnalysisReport`]로 조립합니다.
//! 엔진은 상태를 갖지 않으므로 여러 스레드에서 동시에 호출해도 안전합니다.

use tracing::{debug, error};

use price_core::{
    analysis_span, AnalysisParams, PriceAnalysisReport, PriceObservation, PriceResult,
    PriceSeries,
};

use crate::forecast::{forecast_price, LONG_HORIZON_DAYS, SHORT_HORIZON_DAYS};
use crate::indicators::{IndicatorEngine, IndicatorResult};
use crate::recommendation::score_recommendation;
use crate::risk::identify_risk_factors;
use crate::sentiment::determine_sentiment;

/// 가격 분석기.
///
/// 검증된 분석 파라미터만 보관합니다.
#[derive(Debug, Clone, Default)]
pub struct PriceAnalyzer {
    indicators: IndicatorEngine,
}

impl PriceAnalyzer {
    /// 파라미터를 검증하여 분석기를 생성합니다.
    pub fn new(params: AnalysisParams) -> PriceResult<Self> {
        params.validate()?;
        Ok(Self {
            indicators: IndicatorEngine::new(params),
        })
    }

    /// 사용 중인 분석 파라미터.
    pub fn params(&self) -> &AnalysisParams {
        self.indicators.params()
    }

    /// 품목의 가격 이력을 분석합니다.
    ///
    /// 관측치는 임의 순서로 넘겨도 됩니다. 관측치가 하나도 없으면
    /// "데이터 부족"을 뜻하는 `None`을 반환합니다.
    pub fn analyze(
        &self,
        name: &str,
        observations: Vec<PriceObservation>,
    ) -> Option<PriceAnalysisReport> {
        let Some(series) = PriceSeries::new(name, observations) else {
            debug!(item = name, "No price history, skipping analysis");
            return None;
        };

        match self.analyze_series(&series) {
            Ok(report) => Some(report),
            Err(e) => {
                // 파라미터는 생성 시 검증되므로 여기에 도달하지 않습니다.
                error!(item = name, error = %e, "Price analysis failed");
                None
            }
        }
    }

    /// 정렬된 시계열을 분석하여 리포트를 생성합니다.
    pub fn analyze_series(&self, series: &PriceSeries) -> IndicatorResult<PriceAnalysisReport> {
        let span = analysis_span!("price_analysis", series.name(), series.len());
        let _enter = span.enter();

        let snapshot = self.indicators.compute(series)?;

        let market_sentiment = determine_sentiment(&snapshot);
        let predicted_price_7_days = forecast_price(&snapshot, SHORT_HORIZON_DAYS);
        let predicted_price_30_days = forecast_price(&snapshot, LONG_HORIZON_DAYS);
        let risk_factors = identify_risk_factors(&snapshot);
        let score = score_recommendation(&snapshot);

        debug!(
            current = %snapshot.current_price(),
            slope = snapshot.trend_slope,
            rsi = snapshot.rsi,
            sentiment = %market_sentiment,
            score = score.breakdown.total(),
            recommendation = %score.recommendation,
            "Price analysis complete"
        );

        Ok(PriceAnalysisReport {
            name: series.name().to_string(),
            data_points: series.len(),
            as_of: series.current().date,
            current_price: snapshot.stats.current,
            average_price: snapshot.stats.average,
            median_price: snapshot.stats.median,
            min_price: snapshot.stats.min,
            max_price: snapshot.stats.max,
            short_moving_average: snapshot.short_moving_average,
            long_moving_average: snapshot.long_moving_average,
            volatility: snapshot.volatility,
            trend_slope: snapshot.trend_slope,
            trend_direction: snapshot.trend_direction(),
            price_level: snapshot.price_level,
            rsi: snapshot.rsi,
            bollinger_bands: snapshot.bollinger_bands,
            seasonality_score: snapshot.seasonality_score,
            market_sentiment,
            predicted_price_7_days,
            predicted_price_30_days,
            risk_factors,
            recommendation: score.recommendation,
            confidence: score.confidence,
        })
    }
}

/// 기본 파라미터로 가격 이력을 분석합니다.
///
/// 관측치가 없으면 `None`을 반환합니다.
pub fn analyze_price_history(
    name: &str,
    observations: Vec<PriceObservation>,
) -> Option<PriceAnalysisReport> {
    PriceAnalyzer::default().analyze(name, observations)
}
