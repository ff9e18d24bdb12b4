//! PriceAnalysisReport - 가격 분석의 유일한 출력 값 객체.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    BollingerBands, MarketSentiment, PriceLevel, Recommendation, RiskFactor, TrendDirection,
};

/// 한 품목의 가격 분석 리포트.
///
/// 분석 엔진이 모든 지표를 계산한 뒤 한 번에 생성합니다.
/// 일부만 채워진 리포트는 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAnalysisReport {
    /// 품목 이름
    pub name: String,
    /// 분석에 사용된 관측치 수
    pub data_points: usize,
    /// 가장 최근 관측 날짜
    pub as_of: NaiveDate,

    // ===== 기본 통계 =====
    /// 현재가 (가장 최근 관측치)
    pub current_price: Decimal,
    /// 평균가 (2자리 반올림)
    pub average_price: Decimal,
    /// 중앙값
    pub median_price: Decimal,
    /// 최저가
    pub min_price: Decimal,
    /// 최고가
    pub max_price: Decimal,

    // ===== 이동평균 / 변동성 / 추세 =====
    /// 단기 이동평균 (기본 7)
    pub short_moving_average: Decimal,
    /// 장기 이동평균 (기본 30)
    pub long_moving_average: Decimal,
    /// 전체 시계열 모표준편차
    pub volatility: f64,
    /// 최근 30개 관측치의 최소제곱 기울기
    pub trend_slope: f64,
    /// 기울기 방향
    pub trend_direction: TrendDirection,
    /// 가격 수준
    pub price_level: PriceLevel,

    // ===== 기술적 지표 =====
    /// RSI(14)
    pub rsi: f64,
    /// 볼린저 밴드(20, 2σ)
    pub bollinger_bands: BollingerBands,
    /// 계절성 점수 (0~1)
    pub seasonality_score: f64,
    /// 시장 심리
    pub market_sentiment: MarketSentiment,

    // ===== 예측 / 리스크 / 추천 =====
    /// 7일 후 예상 가격
    pub predicted_price_7_days: Decimal,
    /// 30일 후 예상 가격
    pub predicted_price_30_days: Decimal,
    /// 리스크 요인 (비어 있지 않음)
    pub risk_factors: Vec<RiskFactor>,
    /// 추천 등급
    pub recommendation: Recommendation,
    /// 신뢰도 (0~1)
    pub confidence: f64,
}

impl PriceAnalysisReport {
    /// 리스크 요인을 표식 문자열 목록으로 반환합니다.
    pub fn risk_messages(&self) -> Vec<String> {
        self.risk_factors.iter().map(|r| r.to_string()).collect()
    }

    /// 구매 신호(StrongBuy, Buy) 여부.
    pub fn is_buy_signal(&self) -> bool {
        self.recommendation.is_buy()
    }

    /// 실제 리스크 요인이 하나라도 있는지 확인합니다.
    pub fn has_risk(&self) -> bool {
        self.risk_factors.iter().any(|r| r.is_risk())
    }

    /// 현재가와 7일 예측가의 차이.
    pub fn expected_change_7_days(&self) -> Decimal {
        self.predicted_price_7_days.saturating_sub(self.current_price)
    }
}
