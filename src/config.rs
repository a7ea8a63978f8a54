//! Runtime settings.
//!
//! Settings are installed once per process with [`init`]; until then
//! [`get`] hands out the defaults.

use std::sync::OnceLock;
use tracing::warn;

/// Environment variable toggling the entity caches.
pub const CACHE_ENV_VAR: &str = "DISCORD_ENTITIES_CACHE";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Library settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Whether decoded entities are stored in the global caches.
    pub cache_entities: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_entities: true,
        }
    }
}

impl Config {
    /// Read settings from the environment, loading `.env` first when the
    /// `env` feature is enabled.
    pub fn from_env() -> Self {
        #[cfg(feature = "env")]
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(raw) = std::env::var(CACHE_ENV_VAR) {
            match parse_toggle(&raw) {
                Some(enabled) => config.cache_entities = enabled,
                None => warn!(var = CACHE_ENV_VAR, value = %raw, "ignoring unrecognised toggle"),
            }
        }

        config
    }
}

/// Install process-wide settings.
///
/// # Errors
///
/// Returns the rejected settings if [`init`] already ran or [`get`] was
/// already called.
pub fn init(config: Config) -> Result<(), Config> {
    CONFIG.set(config)
}

/// Active settings.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{get, parse_toggle, Config};

    #[test]
    fn toggles() {
        assert_eq!(parse_toggle("0"), Some(false));
        assert_eq!(parse_toggle(" OFF "), Some(false));
        assert_eq!(parse_toggle("true"), Some(true));
        assert_eq!(parse_toggle("maybe"), None);
    }

    #[test]
    fn caches_by_default() {
        assert!(Config::default().cache_entities);
        assert!(get().cache_entities);
    }
}
