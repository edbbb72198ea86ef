use crate::config::types::{CacheConfig, Config, FetchConfig, IdentityConfig};
use crate::{ConfigError, ConfigResult};

/// One year
const MAX_REFRESH_HOURS: i64 = 24 * 365;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_identity_config(&config.identity)?;
    validate_fetch_config(&config.fetch)?;
    validate_cache_config(&config.cache)?;
    Ok(())
}

/// Validates the crawler identity
///
/// The name is matched against `User-agent` values and sent as a header, so it
/// must be a single non-empty token.
fn validate_identity_config(config: &IdentityConfig) -> ConfigResult<()> {
    let Some(name) = &config.crawler_name else {
        return Ok(());
    };

    if name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == ':')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must not contain whitespace, control characters or ':', got '{}'",
            name
        )));
    }

    Ok(())
}

/// Validates transport timeouts and redirect limits
fn validate_fetch_config(config: &FetchConfig) -> ConfigResult<()> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be > 0".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= 20, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}

/// Validates cache settings
fn validate_cache_config(config: &CacheConfig) -> ConfigResult<()> {
    if config.refresh_hours < 1 || config.refresh_hours > MAX_REFRESH_HOURS {
        return Err(ConfigError::Validation(format!(
            "refresh_hours must be between 1 and {}, got {}",
            MAX_REFRESH_HOURS,
            config.refresh_hours
        )));
    }

    Ok(())
}
