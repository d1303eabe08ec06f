use crate::config::types::{Config, FetchConfig, OutputConfig, RegistryConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_registry_config(&config.registry)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates registry configuration
fn validate_registry_config(config: &RegistryConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.index_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid index-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "index-url must be http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.use_cache && config.cache_path.is_empty() {
        return Err(ConfigError::Validation(
            "cache-path cannot be empty while use-cache is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_dir.is_empty() {
        return Err(ConfigError::Validation(
            "results-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_non_http_index_url() {
        let mut config = Config::default();
        config.registry.index_url = "ftp://peps.python.org/".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_unparseable_index_url() {
        let mut config = Config::default();
        config.registry.index_url = "not a url".to_string();

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_empty_cache_path_when_caching() {
        let mut config = Config::default();
        config.fetch.cache_path = String::new();

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_cache_path_allowed_when_cache_disabled() {
        let mut config = Config::default();
        config.fetch.cache_path = String::new();
        config.fetch.use_cache = false;

        assert!(validate(&config).is_ok());
    }
}
