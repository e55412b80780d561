pub mod toml_config;

pub use toml_config::DemoSettings;

use crate::domain::model::DemoKind;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "learning-patterns")]
#[command(about = "Runs one classic design pattern demonstration")]
pub struct CliConfig {
    /// Demo to run (defaults to runner.default_demo from the settings)
    #[arg(value_enum)]
    pub demo: Option<DemoKind>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds to wait after the demo before exiting
    #[arg(long)]
    pub linger_secs: Option<u64>,

    /// List the available demos and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn selected_demo(&self, settings: &DemoSettings) -> DemoKind {
        self.demo.unwrap_or(settings.runner.default_demo)
    }

    pub fn linger(&self, settings: &DemoSettings) -> Duration {
        Duration::from_secs(self.linger_secs.unwrap_or(settings.runner.linger_seconds))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.list && self.demo.is_some() {
            return Err(PatternError::ConfigError {
                message: "--list cannot be combined with a demo name".to_string(),
            });
        }
        if let Some(secs) = self.linger_secs {
            validate_range("--linger-secs", secs, 0, toml_config::MAX_LINGER_SECONDS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demo_and_overrides() {
        let config =
            CliConfig::try_parse_from(["learning-patterns", "factory-method", "--linger-secs", "0"])
                .unwrap();
        let settings = DemoSettings::default();

        assert_eq!(config.selected_demo(&settings), DemoKind::FactoryMethod);
        assert_eq!(config.linger(&settings), Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_come_from_settings() {
        let config = CliConfig::try_parse_from(["learning-patterns"]).unwrap();
        let settings = DemoSettings::default();

        assert_eq!(config.selected_demo(&settings), DemoKind::Adapter);
        assert_eq!(config.linger(&settings), Duration::from_secs(15));
    }

    #[test]
    fn test_rejects_unknown_demo() {
        assert!(CliConfig::try_parse_from(["learning-patterns", "visitor"]).is_err());
    }

    #[test]
    fn test_linger_override_is_bounded() {
        let config =
            CliConfig::try_parse_from(["learning-patterns", "--linger-secs", "7200"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_list_conflicts_with_demo_name() {
        let config = CliConfig::try_parse_from(["learning-patterns", "proxy", "--list"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PatternError::ConfigError { .. })
        ));
    }
}
