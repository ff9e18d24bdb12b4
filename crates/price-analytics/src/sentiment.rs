//! 시장 심리 판정.
//!
//! 추세, RSI, 볼린저 밴드, 장기 이동평균 네 가지 신호의 투표로 심리를 결정합니다.
//!
//! | 신호 | 강세 표 | 약세 표 |
//! |------|---------|---------|
//! | 추세 기울기 | < -0.5 | > 0.5 |
//! | RSI | < 30 | > 70 |
//! | 볼린저 위치 | 하단 이탈 | 상단 이탈 |
//! | 현재가 vs 장기 이동평균 | 현재가 > MA | 그 외 |

use serde::{Deserialize, Serialize};

use price_core::{BandPosition, MarketSentiment, TrendDirection};

use crate::indicators::{is_overbought, is_oversold, IndicatorSnapshot};

/// 신호별 투표 집계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentVotes {
    /// 강세 표 수
    pub bullish: u32,
    /// 약세 표 수
    pub bearish: u32,
}

impl SentimentVotes {
    fn vote(&mut self, bullish: bool, bearish: bool) {
        if bullish {
            self.bullish += 1;
        } else if bearish {
            self.bearish += 1;
        }
    }

    /// 집계 결과에 따른 시장 심리.
    pub fn sentiment(&self) -> MarketSentiment {
        MarketSentiment::from_votes(self.bullish, self.bearish)
    }
}

/// 지표 스냅샷으로부터 투표를 집계합니다.
pub fn count_votes(snapshot: &IndicatorSnapshot) -> SentimentVotes {
    let mut votes = SentimentVotes::default();

    let direction = snapshot.trend_direction();
    votes.vote(
        direction == TrendDirection::Falling,
        direction == TrendDirection::Rising,
    );

    votes.vote(is_oversold(snapshot.rsi), is_overbought(snapshot.rsi));

    let position = snapshot.bollinger_bands.position;
    votes.vote(
        position == BandPosition::BelowLower,
        position == BandPosition::AboveUpper,
    );

    let above_long_ma = snapshot.current_price() > snapshot.long_moving_average;
    votes.vote(above_long_ma, !above_long_ma);

    votes
}

/// 시장 심리를 판정합니다.
pub fn determine_sentiment(snapshot: &IndicatorSnapshot) -> MarketSentiment {
    count_votes(snapshot).sentiment()
}
