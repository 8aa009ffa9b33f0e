use log::debug;

use crate::error::ConfigError;
use crate::DEFAULT_MAX_EXPANSIONS;

/// Environment variable overriding [SearchConfig::max_expansions].
pub const MAX_EXPANSIONS_ENV: &str = "HAZARD_MAX_EXPANSIONS";

/// Tunables for the search engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on expanded nodes before a search is reported as failed. The plane is
    /// unbounded, so a goal walled off from an infinite start region would otherwise never
    /// terminate. [None] disables the bound.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
        }
    }
}

impl SearchConfig {
    pub fn unbounded() -> SearchConfig {
        SearchConfig {
            max_expansions: None,
        }
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<SearchConfig, ConfigError> {
        SearchConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `none` or `0` disable the expansion bound.
    pub fn from_lookup<F>(lookup: F) -> Result<SearchConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SearchConfig::default();
        if let Some(value) = lookup(MAX_EXPANSIONS_ENV) {
            let trimmed = value.trim();
            config.max_expansions = if trimmed.eq_ignore_ascii_case("none") {
                None
            } else {
                match trimmed.parse::<usize>() {
                    Ok(0) => None,
                    Ok(n) => Some(n),
                    Err(_) => {
                        return Err(ConfigError::InvalidValue {
                            key: MAX_EXPANSIONS_ENV,
                            value,
                        })
                    }
                }
            };
            debug!(
                "{} overrides max_expansions to {:?}",
                MAX_EXPANSIONS_ENV, config.max_expansions
            );
        }
        Ok(config)
    }
}
