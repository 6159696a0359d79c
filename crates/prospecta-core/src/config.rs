use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_nonzero_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        match parse_u64(var, default)? {
            0 => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            n => Ok(n),
        }
    };

    let parse_nonzero_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<usize>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            Ok(n) => Ok(n),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let env = parse_environment(&or_default("PROSPECTA_ENV", "development"));
    let bind_addr = parse_addr("PROSPECTA_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PROSPECTA_LOG_LEVEL", "info");

    let ai_api_key = lookup("OPENAI_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());
    let ai_base_url = or_default("PROSPECTA_AI_BASE_URL", DEFAULT_AI_BASE_URL);
    let ai_model = or_default("PROSPECTA_AI_MODEL", DEFAULT_AI_MODEL);
    let ai_timeout_secs = parse_u64("PROSPECTA_AI_TIMEOUT_SECS", "30")?;

    let rate_limit_max_requests = parse_nonzero_usize("PROSPECTA_RATE_LIMIT_MAX_REQUESTS", "60")?;
    let rate_limit_window_secs = parse_nonzero_u64("PROSPECTA_RATE_LIMIT_WINDOW_SECS", "60")?;
    let rate_limit_max_clients = parse_nonzero_usize("PROSPECTA_RATE_LIMIT_MAX_CLIENTS", "10000")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        ai_api_key,
        ai_base_url,
        ai_model,
        ai_timeout_secs,
        rate_limit_max_requests,
        rate_limit_window_secs,
        rate_limit_max_clients,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
