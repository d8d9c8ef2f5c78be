use crate::error::AppError;
use std::env;
use std::fmt;
use std::num::NonZeroU32;

const DEFAULT_REGION: &str = "na1";
const DEFAULT_DDRAGON_VERSION: &str = "13.24.1";
const DEFAULT_RATE_LIMIT_PER_SECOND: u32 = 20;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub ddragon_version: String,
    pub rate_limit_per_second: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("RIOT_API_KEY not found in environment or .env file".to_string())
            })?;

        let region = lookup("RIOT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let ddragon_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string());

        let rate_limit_per_second = match lookup("RIOT_RATE_LIMIT_PER_SECOND") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "RIOT_RATE_LIMIT_PER_SECOND must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => NonZeroU32::new(DEFAULT_RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        };

        Ok(Config {
            api_key,
            region,
            ddragon_version,
            rate_limit_per_second,
        })
    }
}

// The key must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("ddragon_version", &self.ddragon_version)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .finish()
    }
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        api_key: "TEST_KEY".to_string(),
        region: "na1".to_string(),
        ddragon_version: "13.24.1".to_string(),
        rate_limit_per_second: NonZeroU32::new(1000).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = Config::from_lookup(lookup_from(&[("RIOT_REGION", "euw1")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("RIOT_API_KEY", "  ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("RIOT_API_KEY", "RGAPI-x")])).unwrap();
        assert_eq!(config.api_key, "RGAPI-x");
        assert_eq!(config.region, "na1");
        assert_eq!(config.ddragon_version, "13.24.1");
        assert_eq!(config.rate_limit_per_second.get(), 20);
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("RIOT_API_KEY", "RGAPI-x"),
            ("RIOT_REGION", "euw1"),
            ("DDRAGON_VERSION", "14.1.1"),
            ("RIOT_RATE_LIMIT_PER_SECOND", "5"),
        ]))
        .unwrap();
        assert_eq!(config.region, "euw1");
        assert_eq!(config.ddragon_version, "14.1.1");
        assert_eq!(config.rate_limit_per_second.get(), 5);
    }

    #[test]
    fn zero_rate_limit_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("RIOT_API_KEY", "RGAPI-x"),
            ("RIOT_RATE_LIMIT_PER_SECOND", "0"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = Config::from_lookup(lookup_from(&[("RIOT_API_KEY", "RGAPI-secret")])).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("RGAPI-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
