use crate::domain::model::DemoKind;
use crate::utils::error::Result;
use std::io::Write;

/// A scripted demonstration of one pattern.
///
/// Implementations write their console text to `out` so the binary can hand them stdout and
/// tests can hand them a buffer.
pub trait Demo {
    fn kind(&self) -> DemoKind;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}
