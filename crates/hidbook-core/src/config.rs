use crate::app_config::{AppConfig, Environment, SelectionPolicy, SourceKind};
use crate::ConfigError;

/// Largest page size the Aladin API accepts.
const MAX_RESULTS_CEILING: u32 = 50;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or the selected source is
/// missing its credentials.
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
/// Returns `ConfigError` if values are invalid or the selected source is
/// missing its credentials.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("HIDBOOK_ENV", "development"))?;
    let log_level = or_default("HIDBOOK_LOG_LEVEL", "warn");
    let source = parse_source(&or_default("HIDBOOK_SOURCE", "kyobo"))?;
    let selection_policy = parse_policy(&or_default("HIDBOOK_SELECTION_POLICY", "seeded"))?;

    let kyobo_base_url = or_default("HIDBOOK_KYOBO_BASE_URL", "https://search.kyobobook.co.kr");
    let aladin_base_url = or_default("HIDBOOK_ALADIN_BASE_URL", "http://www.aladin.co.kr/ttb/api");
    let aladin_api_key = lookup("HIDBOOK_ALADIN_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());

    if source == SourceKind::Aladin && aladin_api_key.is_none() {
        return Err(ConfigError::MissingEnvVar(
            "HIDBOOK_ALADIN_API_KEY".to_string(),
        ));
    }

    let request_timeout_secs = parse_u64("HIDBOOK_REQUEST_TIMEOUT_SECS", "5")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "HIDBOOK_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("HIDBOOK_USER_AGENT", "Mozilla/5.0");
    let inter_keyword_delay_ms = parse_u64("HIDBOOK_INTER_KEYWORD_DELAY_MS", "500")?;
    let max_results = parse_u32("HIDBOOK_MAX_RESULTS", "10")?.clamp(1, MAX_RESULTS_CEILING);
    let max_pages = parse_u32("HIDBOOK_MAX_PAGES", "1")?.max(1);
    let curation_path = lookup("HIDBOOK_CURATION_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        source,
        selection_policy,
        kyobo_base_url,
        aladin_base_url,
        aladin_api_key,
        request_timeout_secs,
        user_agent,
        inter_keyword_delay_ms,
        max_results,
        max_pages,
        curation_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HIDBOOK_ENV".to_string(),
            reason: format!(
                "unrecognized value '{other}'; expected development, test, or production"
            ),
        }),
    }
}

/// Parse a source name (`kyobo` or `aladin`, case-insensitive).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
pub fn parse_source(s: &str) -> Result<SourceKind, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "kyobo" => Ok(SourceKind::Kyobo),
        "aladin" => Ok(SourceKind::Aladin),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HIDBOOK_SOURCE".to_string(),
            reason: format!("unrecognized value '{other}'; expected kyobo or aladin"),
        }),
    }
}

/// Parse a selection policy name (`scored` or `seeded`, case-insensitive).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
pub fn parse_policy(s: &str) -> Result<SelectionPolicy, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "scored" => Ok(SelectionPolicy::Scored),
        "seeded" => Ok(SelectionPolicy::Seeded),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HIDBOOK_SELECTION_POLICY".to_string(),
            reason: format!("unrecognized value '{other}'; expected scored or seeded"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
