//! Lead and conversation types shared by the scoring, outreach and HTTP layers.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a CLI or query string names an unknown enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Delivery channel for a drafted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Whatsapp,
    Email,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Whatsapp => write!(f, "whatsapp"),
            Channel::Email => write!(f, "email"),
        }
    }
}

impl FromStr for Channel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" => Ok(Channel::Whatsapp),
            "email" => Ok(Channel::Email),
            other => Err(ParseEnumError {
                kind: "channel",
                value: other.to_string(),
                expected: "whatsapp, email",
            }),
        }
    }
}

/// Cold-outreach template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutreachTemplate {
    /// First contact with a business.
    Presentacion,
    /// Follow-up after an unanswered first contact.
    Seguimiento,
    /// Pitch aimed at businesses with no website at all.
    SinWeb,
}

impl std::fmt::Display for OutreachTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutreachTemplate::Presentacion => write!(f, "presentacion"),
            OutreachTemplate::Seguimiento => write!(f, "seguimiento"),
            OutreachTemplate::SinWeb => write!(f, "sin_web"),
        }
    }
}

impl FromStr for OutreachTemplate {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "presentacion" => Ok(OutreachTemplate::Presentacion),
            "seguimiento" => Ok(OutreachTemplate::Seguimiento),
            "sin_web" | "sin-web" => Ok(OutreachTemplate::SinWeb),
            other => Err(ParseEnumError {
                kind: "template",
                value: other.to_string(),
                expected: "presentacion, seguimiento, sin_web",
            }),
        }
    }
}

/// Tone used when replying inside an ongoing conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTone {
    Amigable,
    Profesional,
    /// Steer the conversation toward booking a call or meeting.
    CerrarCita,
}

impl std::fmt::Display for ReplyTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyTone::Amigable => write!(f, "amigable"),
            ReplyTone::Profesional => write!(f, "profesional"),
            ReplyTone::CerrarCita => write!(f, "cerrar_cita"),
        }
    }
}

impl FromStr for ReplyTone {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amigable" => Ok(ReplyTone::Amigable),
            "profesional" => Ok(ReplyTone::Profesional),
            "cerrar_cita" | "cerrar-cita" => Ok(ReplyTone::CerrarCita),
            other => Err(ParseEnumError {
                kind: "tone",
                value: other.to_string(),
                expected: "amigable, profesional, cerrar_cita",
            }),
        }
    }
}

/// Pipeline stage of a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Nuevo,
    Contactado,
    Interesado,
    Propuesta,
    Negociacion,
    Ganado,
    Perdido,
}

impl LeadStatus {
    /// Human-readable label used in prompts and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::Nuevo => "Nuevo",
            LeadStatus::Contactado => "Contactado",
            LeadStatus::Interesado => "Interesado",
            LeadStatus::Propuesta => "Propuesta enviada",
            LeadStatus::Negociacion => "En negociación",
            LeadStatus::Ganado => "Ganado",
            LeadStatus::Perdido => "Perdido",
        }
    }
}

/// A business tracked in the sales pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub website: Option<String>,
    /// Web-probability score persisted when the lead was imported, if any.
    #[serde(default)]
    pub web_probability: Option<u8>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub last_contacted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub photo_count: u32,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Lead {
    /// A website counts only when the URL is present and non-blank.
    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Whole days elapsed between the last contact and `now`.
    ///
    /// Returns `None` when the lead was never contacted. Future timestamps
    /// clamp to zero.
    #[must_use]
    pub fn days_since_last_contact(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_contacted_at
            .map(|at| now.signed_duration_since(at).num_days().max(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageDirection {
    /// Sent by the business to us.
    Inbound,
    /// Sent by us to the business.
    Outbound,
}

/// One message of a WhatsApp or email thread with a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    #[serde(rename = "type")]
    pub direction: MessageDirection,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
