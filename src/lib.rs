pub mod config;
pub mod core;
pub mod domain;
pub mod patterns;
pub mod utils;

pub use config::{CliConfig, DemoSettings};
pub use core::{registry::build_demo, runner::DemoRunner};
pub use domain::{model::DemoKind, ports::Demo};
pub use utils::error::{PatternError, Result};
