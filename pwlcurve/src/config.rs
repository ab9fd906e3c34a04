//! Layered settings for the command-line tools: built-in defaults, then an
//! optional TOML file, then `PWL_*` environment variables.

use crate::Cli;
use pwl_model::ExportConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for every subcommand, grouped by the library they configure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Export configuration (inequality direction, shape tolerance)
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration, later sources overriding earlier ones:
    /// 1. Default values
    /// 2. The config file named by `--config` (or `PWL_CONFIG`)
    /// 3. Environment variables, `PWL_<SECTION>__<KEY>` setting `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Bound the cost from below, for convex curves
    /// export PWL_EXPORT__BOUND="lower"
    ///
    /// # Loosen the curvature check
    /// export PWL_EXPORT__SHAPE_TOLERANCE="1e-6"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        Self::load_from(cli.config.as_deref())
    }

    /// Load configuration as [`AppConfig::load`] does, from an explicit file path
    pub fn load_from(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::layered(path, environment())
    }

    fn layered(path: Option<&Path>, environment: config::Environment) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        // A named file that is missing is an error, not an empty layer
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(environment);

        Ok(config.build()?.try_deserialize()?)
    }
}

// PWL_EXPORT__BOUND -> export.bound
fn environment() -> config::Environment {
    config::Environment::with_prefix("PWL")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwl_model::Bound;

    fn variables(pairs: &[(&str, &str)]) -> config::Environment {
        environment().source(Some(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::layered(
            None,
            variables(&[
                ("PWL_EXPORT__BOUND", "lower"),
                ("PWL_EXPORT__SHAPE_TOLERANCE", "0.25"),
            ]),
        )
        .unwrap();
        assert_eq!(config.export.bound, Bound::Lower);
        assert_eq!(config.export.shape_tolerance, 0.25);
    }

    #[test]
    fn environment_overrides_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/partial.toml");
        let config = AppConfig::layered(
            Some(&path),
            variables(&[("PWL_EXPORT__SHAPE_TOLERANCE", "2")]),
        )
        .unwrap();
        assert_eq!(config.export.bound, Bound::Upper);
        assert_eq!(config.export.shape_tolerance, 2.0);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config = AppConfig::layered(
            None,
            variables(&[("PWL_CONFIG", "elsewhere.toml"), ("HOME", "/root")]),
        )
        .unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
