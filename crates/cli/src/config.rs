//! Layered configuration: defaults, then environment, then command-line flags.

use std::path::PathBuf;

use thiserror::Error;

use prodcat_catalog::IntegrityPolicy;
use prodcat_observability::LogFormat;

use crate::args::{GlobalArgs, OutputFormat};

pub const ENV_DATA_DIR: &str = "PRODCAT_DATA_DIR";
pub const ENV_INTEGRITY_POLICY: &str = "PRODCAT_INTEGRITY_POLICY";
pub const ENV_FORMAT: &str = "PRODCAT_FORMAT";
pub const ENV_LOG_FORMAT: &str = "PRODCAT_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// `None` means the embedded fixtures.
    pub data_dir: Option<PathBuf>,
    pub integrity_policy: IntegrityPolicy,
    pub format: OutputFormat,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(policy) = get(ENV_INTEGRITY_POLICY) {
            config.integrity_policy = policy.parse().map_err(|e| ConfigError {
                key: ENV_INTEGRITY_POLICY,
                message: format!("{e}"),
            })?;
        }
        if let Some(format) = get(ENV_FORMAT) {
            config.format = parse_output_format(&format).ok_or_else(|| ConfigError {
                key: ENV_FORMAT,
                message: format!("expected 'text' or 'json', got '{format}'"),
            })?;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.log_format = format.parse().map_err(|e| ConfigError {
                key: ENV_LOG_FORMAT,
                message: format!("{e}"),
            })?;
        }

        Ok(config)
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(policy) = args.integrity_policy {
            self.integrity_policy = policy;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(format) = args.log_format {
            self.log_format = format;
        }
        self
    }
}

fn parse_output_format(value: &str) -> Option<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, None);
        assert_eq!(config.integrity_policy, IntegrityPolicy::Keep);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/srv/catalog"),
            (ENV_INTEGRITY_POLICY, "skip"),
            (ENV_FORMAT, "JSON"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/catalog")));
        assert_eq!(config.integrity_policy, IntegrityPolicy::Skip);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn empty_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(ENV_DATA_DIR, ""), (ENV_FORMAT, "  ")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = Config::from_lookup(lookup(&[(ENV_INTEGRITY_POLICY, "drop")])).unwrap_err();
        assert_eq!(err.key, ENV_INTEGRITY_POLICY);

        let err = Config::from_lookup(lookup(&[(ENV_FORMAT, "xml")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for PRODCAT_FORMAT: expected 'text' or 'json', got 'xml'"
        );
    }

    #[test]
    fn flags_override_environment() {
        let config = Config::from_lookup(lookup(&[
            (ENV_INTEGRITY_POLICY, "skip"),
            (ENV_FORMAT, "json"),
        ]))
        .unwrap();

        let args = GlobalArgs {
            data_dir: Some(PathBuf::from("./data")),
            integrity_policy: Some(IntegrityPolicy::Keep),
            format: None,
            log_format: None,
        };
        let config = config.with_overrides(&args);

        assert_eq!(config.data_dir, Some(PathBuf::from("./data")));
        assert_eq!(config.integrity_policy, IntegrityPolicy::Keep);
        assert_eq!(config.format, OutputFormat::Json);
    }
}
