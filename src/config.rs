use crate::errors::ConfigError;
use std::env;
use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone)]
pub struct Config {
    pub host: IpAddr,
    pub api_port: u16,
    pub provider_base_url: String,
    pub api_key: String,
    pub upstream_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // all interfaces by default
        let host = parse_or(&lookup, "RELAY_HOST", "0.0.0.0")?;
        let api_port = parse_or(&lookup, "API_PORT", "5000")?;

        let api_key = lookup("EXCHANGE_RATE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("EXCHANGE_RATE_API_KEY"))?;

        let provider_base_url = lookup("EXCHANGE_RATE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", "10")?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be at least 1 second".to_string(),
            });
        }

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                });
            }
        };

        Ok(Self {
            host,
            api_port,
            provider_base_url,
            api_key,
            upstream_timeout: Duration::from_secs(timeout_secs),
            log_format,
        })
    }
}

// Debug without the key
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("api_port", &self.api_port)
            .field("provider_base_url", &self.provider_base_url)
            .field("api_key", &"<redacted>")
            .field("upstream_timeout", &self.upstream_timeout)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("'{raw}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("EXCHANGE_RATE_API_KEY", "abc123")]))
            .unwrap();

        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.api_port, 5000);
        assert_eq!(config.provider_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("API_PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EXCHANGE_RATE_API_KEY")));

        let err = Config::from_lookup(lookup_from(&[("EXCHANGE_RATE_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EXCHANGE_RATE_API_KEY")));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATE_API_KEY", "k"),
            ("RELAY_HOST", "127.0.0.1"),
            ("API_PORT", "8081"),
            ("EXCHANGE_RATE_BASE_URL", "http://localhost:9000/v6/"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.api_port, 8081);
        assert_eq!(config.provider_base_url, "http://localhost:9000/v6");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATE_API_KEY", "k"),
            ("API_PORT", "70000"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "API_PORT", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATE_API_KEY", "k"),
            ("UPSTREAM_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATE_API_KEY", "k"),
            ("LOG_FORMAT", "xml"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "LOG_FORMAT", .. }));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config =
            Config::from_lookup(lookup_from(&[("EXCHANGE_RATE_API_KEY", "super-secret")])).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
