use crate::core::Demo;
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

pub struct DemoRunner {
    demo: Box<dyn Demo>,
}

impl DemoRunner {
    pub fn new(demo: Box<dyn Demo>) -> Self {
        Self { demo }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        let kind = self.demo.kind();
        let span = tracing::info_span!("demo", name = %kind);
        let _guard = span.enter();

        tracing::info!("Starting {} demo", kind);
        let started = Instant::now();

        writeln!(out, "=== {} ===", kind.pattern_name())?;
        let result = self.demo.run(out);
        out.flush()?;

        match &result {
            Ok(()) => tracing::info!(elapsed = ?started.elapsed(), "{} demo finished", kind),
            Err(e) => tracing::error!(elapsed = ?started.elapsed(), "{} demo failed: {}", kind, e),
        }
        result
    }
}
