use prospecta_core::Lead;
use serde::{Deserialize, Serialize};

use crate::chains::is_known_chain;

/// Read-only snapshot of what can be observed about a business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessSignal {
    pub name: String,
    pub category: Option<String>,
    /// Raw provider category tags, e.g. `beauty_salon`.
    pub types: Vec<String>,
    pub has_website: bool,
    /// Average rating in `[0, 5]`.
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    /// Provider price level in `[0, 4]`.
    pub price_level: Option<u8>,
    pub photo_count: u32,
    pub is_chain: bool,
}

/// A places-search result as returned by the maps provider, before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceSnapshot {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub photo_count: u32,
}

impl BusinessSignal {
    /// Builds a signal from a places result, deriving `has_website` from the
    /// URL being present and non-blank and `is_chain` from the name.
    #[must_use]
    pub fn from_place(place: &PlaceSnapshot) -> Self {
        Self {
            name: place.name.clone(),
            category: place.category.clone(),
            types: place.types.clone(),
            has_website: place
                .website
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty()),
            rating: place.rating,
            review_count: place.review_count,
            price_level: place.price_level,
            photo_count: place.photo_count,
            is_chain: is_known_chain(&place.name),
        }
    }
}

impl From<&Lead> for BusinessSignal {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            category: lead.category.clone(),
            types: lead.types.clone(),
            has_website: lead.has_website(),
            rating: lead.rating,
            review_count: lead.review_count,
            price_level: lead.price_level,
            photo_count: lead.photo_count,
            is_chain: is_known_chain(&lead.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorImpact {
    Positive,
    Negative,
    Neutral,
}

/// One heuristic that contributed to a score, kept for "why this score"
/// explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub name: String,
    pub impact: FactorImpact,
    pub points: i32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    NewWebsite,
    Redesign,
    LowPriority,
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpportunityType::NewWebsite => write!(f, "new_website"),
            OpportunityType::Redesign => write!(f, "redesign"),
            OpportunityType::LowPriority => write!(f, "low_priority"),
        }
    }
}

/// Output of [`crate::score`]. Recomputed on every call, never cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Contributing factors in evaluation order.
    pub factors: Vec<ScoreFactor>,
    /// Normalized web probability in `[0, 100]`.
    pub total: u8,
    pub has_website: bool,
    pub opportunity_type: OpportunityType,
    /// In `[0, 100]`; always `0` when the business has no website.
    pub redesign_potential: u8,
    pub redesign_reason: Option<String>,
}
