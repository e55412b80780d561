pub mod registry;
pub mod runner;

pub use crate::domain::model::DemoKind;
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
