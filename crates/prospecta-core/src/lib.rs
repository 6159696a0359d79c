//! Shared domain types and configuration for Prospecta.

pub mod app_config;
pub mod config;
pub mod leads;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use leads::{
    Channel, ConversationMessage, Lead, LeadStatus, MessageDirection, OutreachTemplate,
    ParseEnumError, ReplyTone,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
