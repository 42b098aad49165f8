//! read retry settings from a file, an inline document or the environment

use tracing::debug;

use crate::errors::Error;
use crate::retry::RetryOption;

pub const MAX_TRIES_ENV: &str = "RETRY_MAX_TRIES";

pub enum ConfigLocation {
    File(String),
    Json(String),
    Env,
}

#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    pub max_tries: Option<i64>,
}

impl RetryConfig {
    /// Options to place ahead of any caller-supplied ones, so that the
    /// caller's options override the configured values.
    pub fn options<'a, E>(&self) -> Vec<RetryOption<'a, E>> {
        self.max_tries.map(RetryOption::MaxTries).into_iter().collect()
    }
}

pub fn read_config(loc: ConfigLocation) -> Result<RetryConfig, Error> {
    let config = match loc {
        ConfigLocation::File(path) => {
            let contents = std::fs::read_to_string(&path)?;
            debug!(path = %path, "retry.config.file");
            serde_json::from_str(&contents)?
        }
        ConfigLocation::Json(contents) => serde_json::from_str(&contents)?,
        ConfigLocation::Env => read_config_from_env()?,
    };
    Ok(config)
}

fn read_config_from_env() -> Result<RetryConfig, Error> {
    let max_tries = match std::env::var(MAX_TRIES_ENV) {
        Ok(raw) => Some(raw.trim().parse::<i64>().map_err(|_| {
            Error::Config(format!("{} must be an integer, got '{}'", MAX_TRIES_ENV, raw))
        })?),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            return Err(Error::Config(format!(
                "{} is not valid unicode",
                MAX_TRIES_ENV
            )));
        }
    };
    Ok(RetryConfig { max_tries })
}
