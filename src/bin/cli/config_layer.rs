//! Configuration Layer Management
//!
//! Merges the default configuration, an optional YAML file and command line
//! overrides, in that order of increasing priority.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::ConvertArgs;
use bandplan_rs::core::config::{BandplanConfig, BoundsConfig};

/// Config files picked up from the working directory when `--config` is absent
const IMPLICIT_CONFIG_FILES: [&str; 2] = [".bandplan.yml", ".bandplan.yaml"];

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Partial configuration carried by command line flags
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub min_frequency_hz: Option<i64>,
    pub max_frequency_hz: Option<i64>,
}

/// Convert CLI arguments to partial configuration overrides
pub trait FromCliArgs<T> {
    /// Create a partial configuration from CLI arguments
    fn from_cli_args(args: &T) -> Self;
}

impl FromCliArgs<ConvertArgs> for CliOverrides {
    fn from_cli_args(args: &ConvertArgs) -> Self {
        Self {
            input: args.input.clone(),
            min_frequency_hz: args.min_frequency,
            max_frequency_hz: args.max_frequency,
        }
    }
}

impl ConfigMerge<CliOverrides> for BandplanConfig {
    fn merge_with(&mut self, mut other: CliOverrides) {
        if let Some(input) = other.input.take() {
            self.input = input;
        }
        self.bounds.merge_with(other);
    }
}

impl ConfigMerge<CliOverrides> for BoundsConfig {
    fn merge_with(&mut self, other: CliOverrides) {
        if let Some(min) = other.min_frequency_hz {
            self.min_frequency_hz = min;
        }
        if let Some(max) = other.max_frequency_hz {
            self.max_frequency_hz = max;
        }
    }
}

/// Find the config file to load: explicit path first, then implicit files in `dir`.
pub fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
    })
}

/// Load a configuration file, or the defaults when there is none.
pub fn load_configuration(path: Option<&Path>) -> anyhow::Result<BandplanConfig> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let config = BandplanConfig::from_yaml_file(path).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to load configuration from {}: {}",
                    path.display(),
                    e
                )
            })?;
            config
                .validate()
                .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;
            Ok(config)
        }
        None => Ok(BandplanConfig::default()),
    }
}

/// Layered configuration for the convert command
pub fn build_layered_config(args: &ConvertArgs, dir: &Path) -> anyhow::Result<BandplanConfig> {
    let config_path = resolve_config_path(args.config.as_deref(), dir);
    let mut config = load_configuration(config_path.as_deref())?;

    config.merge_with(CliOverrides::from_cli_args(args));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Cli, Commands};
    use clap::Parser;
    use tempfile::tempdir;

    fn convert_args(argv: &[&str]) -> ConvertArgs {
        let cli = Cli::parse_from(argv.iter().copied());
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert command");
        };
        args
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let temp = tempdir().expect("temp dir");
        let args = convert_args(&["bandplan", "convert"]);
        let config = build_layered_config(&args, temp.path()).expect("config");
        assert_eq!(config, BandplanConfig::default());
    }

    #[test]
    fn cli_flags_override_config_file() {
        let temp = tempdir().expect("temp dir");
        let config_path = temp.path().join("custom.yml");

        let mut file_config = BandplanConfig::default();
        file_config.input = PathBuf::from("from-file.xml");
        file_config.bounds.min_frequency_hz = 5_000_000;
        file_config.bounds.max_frequency_hz = 500_000_000;
        file_config.to_yaml_file(&config_path).expect("write config");

        let args = convert_args(&[
            "bandplan",
            "convert",
            "--config",
            config_path.to_str().unwrap(),
            "--min-frequency",
            "1000000",
        ]);
        let config = build_layered_config(&args, temp.path()).expect("config");

        assert_eq!(config.input, PathBuf::from("from-file.xml"));
        assert_eq!(config.bounds.min_frequency_hz, 1_000_000);
        assert_eq!(config.bounds.max_frequency_hz, 500_000_000);
    }

    #[test]
    fn positional_input_overrides_config_input() {
        let temp = tempdir().expect("temp dir");
        let args = convert_args(&["bandplan", "convert", "other.xml"]);
        let config = build_layered_config(&args, temp.path()).expect("config");
        assert_eq!(config.input, PathBuf::from("other.xml"));
    }

    #[test]
    fn implicit_config_file_is_discovered() {
        let temp = tempdir().expect("temp dir");
        std::fs::write(
            temp.path().join(".bandplan.yaml"),
            "bounds:\n  min_frequency_hz: 123\n",
        )
        .expect("write config");

        let args = convert_args(&["bandplan", "convert"]);
        let config = build_layered_config(&args, temp.path()).expect("config");
        assert_eq!(config.bounds.min_frequency_hz, 123);
    }

    #[test]
    fn inverted_cli_bounds_fail_validation() {
        let temp = tempdir().expect("temp dir");
        let args = convert_args(&[
            "bandplan",
            "convert",
            "--min-frequency",
            "500",
            "--max-frequency",
            "100",
        ]);
        assert!(build_layered_config(&args, temp.path()).is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = tempdir().expect("temp dir");
        let missing = temp.path().join("missing.yml");
        let args = convert_args(&[
            "bandplan",
            "convert",
            "--config",
            missing.to_str().unwrap(),
        ]);
        assert!(build_layered_config(&args, temp.path()).is_err());
    }
}
