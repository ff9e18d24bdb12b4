//! 가격 분석을 위한 도메인 모델.

mod bollinger;
mod observation;
mod price_level;
mod recommendation;
mod report;
mod risk;
mod sentiment;

pub use bollinger::*;
pub use observation::*;
pub use price_level::*;
pub use recommendation::*;
pub use report::*;
pub use risk::*;
pub use sentiment::*;
