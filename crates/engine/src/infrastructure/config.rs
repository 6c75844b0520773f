//! Engine configuration read from environment variables.
//!
//! | Variable                | Values          | Default            |
//! |-------------------------|-----------------|--------------------|
//! | `HOMESTEAD_PLAN`        | path to JSON    | built-in demo plan |
//! | `HOMESTEAD_ON_CAPACITY` | `skip`, `abort` | `skip`             |
//! | `HOMESTEAD_OUTPUT`      | `text`, `json`  | `text`             |

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::use_cases::neighborhood::CapacityPolicy;

pub const PLAN_VAR: &str = "HOMESTEAD_PLAN";
pub const ON_CAPACITY_VAR: &str = "HOMESTEAD_ON_CAPACITY";
pub const OUTPUT_VAR: &str = "HOMESTEAD_OUTPUT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: expected one of {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: OUTPUT_VAR,
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

impl FromStr for CapacityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(ConfigError::InvalidValue {
                key: ON_CAPACITY_VAR,
                value: s.to_string(),
                expected: "skip, abort",
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub plan_path: Option<PathBuf>,
    pub capacity_policy: CapacityPolicy,
    pub output: OutputFormat,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let plan_path = get(PLAN_VAR).map(PathBuf::from);
        let capacity_policy = get(ON_CAPACITY_VAR)
            .map(|value| value.parse::<CapacityPolicy>())
            .transpose()?
            .unwrap_or_default();
        let output = get(OUTPUT_VAR)
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            plan_path,
            capacity_policy,
            output,
        })
    }
}

/// Load `.env.local` then `.env` from the repo root, if present.
///
/// Values already set in the environment win over file values.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.capacity_policy, CapacityPolicy::Skip);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.plan_path.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = EngineConfig::from_lookup(lookup(&[
            (PLAN_VAR, "plans/town.json"),
            (ON_CAPACITY_VAR, "Abort"),
            (OUTPUT_VAR, " json "),
        ]))
        .unwrap();

        assert_eq!(config.plan_path, Some(PathBuf::from("plans/town.json")));
        assert_eq!(config.capacity_policy, CapacityPolicy::Abort);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = EngineConfig::from_lookup(lookup(&[(PLAN_VAR, "   ")])).unwrap();
        assert!(config.plan_path.is_none());
    }

    #[test]
    fn rejects_unknown_values() {
        let err = EngineConfig::from_lookup(lookup(&[(OUTPUT_VAR, "yaml")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: OUTPUT_VAR,
                value: "yaml".to_string(),
                expected: "text, json",
            }
        );
        assert!(err.to_string().contains("HOMESTEAD_OUTPUT"));

        let err = EngineConfig::from_lookup(lookup(&[(ON_CAPACITY_VAR, "retry")])).unwrap_err();
        assert!(err.to_string().contains("skip, abort"));
    }
}
