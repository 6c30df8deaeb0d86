use std::env;
use std::str::FromStr;

use tracing::info;

use crate::error::RosterError;

pub const DEFAULT_VOLUNTEER_COUNT: usize = 500;
pub const SEED_ENV: &str = "RELIEF_ROSTER_SEED";
pub const COUNT_ENV: &str = "RELIEF_ROSTER_COUNT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub volunteer_count: usize,
    /// Unseeded runs draw from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            volunteer_count: DEFAULT_VOLUNTEER_COUNT,
            seed: None,
        }
    }
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>, RosterError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| RosterError::InvalidConfig(format!("{key}={raw}: {e}"))),
        _ => Ok(None),
    }
}

impl RosterConfig {
    /// Resolves flags over environment over defaults.
    pub fn resolve(count: Option<usize>, seed: Option<u64>) -> Result<Self, RosterError> {
        let defaults = Self::default();
        let volunteer_count = match count {
            Some(value) => value,
            None => env_value(COUNT_ENV)?.unwrap_or(defaults.volunteer_count),
        };
        let seed = match seed {
            Some(value) => Some(value),
            None => env_value(SEED_ENV)?,
        };

        let config = Self {
            volunteer_count,
            seed,
        };
        config.validate()?;
        info!(
            volunteers = config.volunteer_count,
            seed = ?config.seed,
            "roster configuration resolved"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if self.volunteer_count == 0 {
            return Err(RosterError::InvalidConfig(
                "volunteer count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let config = RosterConfig::resolve(Some(40), Some(9)).unwrap();
        assert_eq!(config.volunteer_count, 40);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn environment_sits_between_flags_and_defaults() {
        let saved = env::var(COUNT_ENV).ok();

        env::set_var(COUNT_ENV, "abc");
        assert!(matches!(
            RosterConfig::resolve(None, Some(1)),
            Err(RosterError::InvalidConfig(_))
        ));

        env::set_var(COUNT_ENV, "42");
        assert_eq!(
            RosterConfig::resolve(None, Some(1)).unwrap().volunteer_count,
            42
        );
        assert_eq!(
            RosterConfig::resolve(Some(7), Some(1)).unwrap().volunteer_count,
            7
        );

        env::remove_var(COUNT_ENV);
        assert_eq!(
            RosterConfig::resolve(None, Some(1)).unwrap().volunteer_count,
            DEFAULT_VOLUNTEER_COUNT
        );

        match saved {
            Some(value) => env::set_var(COUNT_ENV, value),
            None => env::remove_var(COUNT_ENV),
        }
    }

    #[test]
    fn zero_volunteers_is_rejected() {
        assert!(RosterConfig::resolve(Some(0), None).is_err());
        let config = RosterConfig {
            volunteer_count: 0,
            seed: None,
        };
        assert!(matches!(config.validate(), Err(RosterError::InvalidConfig(_))));
    }

    #[test]
    fn default_is_five_hundred_unseeded() {
        let config = RosterConfig::default();
        assert_eq!(config.volunteer_count, DEFAULT_VOLUNTEER_COUNT);
        assert!(config.seed.is_none());
    }
}
