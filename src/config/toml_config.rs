use crate::domain::model::DemoKind;
use crate::patterns::decorator::TextSource;
use crate::patterns::facade::UserRole;
use crate::patterns::strategy::QuackStyle;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_device_code, validate_non_empty_string, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const MAX_LINGER_SECONDS: u64 = 3600;
pub const MAX_GUMBALLS: u32 = 10_000;
pub const MAX_PROXY_LATENCY_MS: u64 = 60_000;

/// Per-demo knobs. Every section and key is optional; missing values fall back to the
/// values the scripted demonstrations were written around.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub runner: RunnerSettings,
    pub strategy: StrategySettings,
    pub decorator: DecoratorSettings,
    pub command: CommandSettings,
    pub facade: FacadeSettings,
    pub state: StateSettings,
    pub proxy: ProxySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    pub default_demo: DemoKind,
    pub linger_seconds: u64,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            default_demo: DemoKind::Adapter,
            linger_seconds: 15,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    pub quack: QuackStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorSettings {
    pub source: TextSource,
    pub text: String,
}

impl Default for DecoratorSettings {
    fn default() -> Self {
        Self {
            source: TextSource::Dummy,
            text: crate::patterns::decorator::DEFAULT_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    pub device_code: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            device_code: "1234".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeSettings {
    pub role: UserRole,
    pub item: String,
}

impl Default for FacadeSettings {
    fn default() -> Self {
        Self {
            role: UserRole::Admin,
            item: "printer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSettings {
    pub gumballs: u32,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self { gumballs: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub machine_id: u32,
    pub latency_ms: u64,
    pub new_ball_count: u32,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            machine_id: 45,
            latency_ms: 2000,
            new_ball_count: 150,
        }
    }
}

impl ProxySettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl DemoSettings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let settings = toml::from_str(&processed_content)?;
        Ok(settings)
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_REF: OnceLock<Regex> = OnceLock::new();
        let re = ENV_REF.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "runner.linger_seconds",
            self.runner.linger_seconds,
            0,
            MAX_LINGER_SECONDS,
        )?;
        validate_non_empty_string("decorator.text", &self.decorator.text)?;
        validate_device_code("command.device_code", &self.command.device_code)?;
        validate_non_empty_string("facade.item", &self.facade.item)?;
        validate_range("state.gumballs", self.state.gumballs, 0, MAX_GUMBALLS)?;
        validate_range(
            "proxy.latency_ms",
            self.proxy.latency_ms,
            0,
            MAX_PROXY_LATENCY_MS,
        )?;
        Ok(())
    }
}
