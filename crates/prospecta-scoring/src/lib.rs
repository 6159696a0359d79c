//! Web-probability scoring for prospected businesses.
//!
//! Estimates how likely a business is to need a new website, or to benefit
//! from redesigning the one it has, from observable attributes of its
//! places listing. Everything here is pure and synchronous.

pub mod chains;
pub mod display;
pub mod engine;
pub mod keywords;
pub mod types;

pub use chains::is_known_chain;
pub use display::{score_color, score_label, ScoreColor};
pub use engine::{score, MAX_SCORE, WEBSITE_TOTAL_CAP};
pub use keywords::{classify_category, CategoryNeed};
pub use types::{
    BusinessSignal, FactorImpact, OpportunityType, PlaceSnapshot, ScoreFactor, ScoreResult,
};
