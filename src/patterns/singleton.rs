//! Singleton: one chocolate boiler per process, built on first use.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, OnceLock};

#[cfg(test)]
static SHARED_CONSTRUCTIONS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

#[derive(Debug, PartialEq, Eq)]
pub struct ChocolateBoiler {
    empty: bool,
    boiled: bool,
}

impl ChocolateBoiler {
    fn new() -> Self {
        Self {
            empty: true,
            boiled: false,
        }
    }

    /// The shared boiler. `OnceLock` guarantees a single construction even when the first
    /// calls race.
    pub fn instance() -> &'static Mutex<ChocolateBoiler> {
        static BOILER: OnceLock<Mutex<ChocolateBoiler>> = OnceLock::new();
        BOILER.get_or_init(|| {
            #[cfg(test)]
            SHARED_CONSTRUCTIONS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            tracing::debug!("constructing the shared chocolate boiler");
            Mutex::new(ChocolateBoiler::new())
        })
    }

    /// Locks the shared boiler, recovering it if a previous holder panicked.
    pub fn lock() -> MutexGuard<'static, ChocolateBoiler> {
        Self::instance()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_boiled(&self) -> bool {
        self.boiled
    }

    pub fn fill(&mut self) -> bool {
        if !self.empty {
            return false;
        }
        self.empty = false;
        self.boiled = false;
        true
    }

    pub fn boil(&mut self) -> bool {
        if self.empty || self.boiled {
            return false;
        }
        self.boiled = true;
        true
    }

    pub fn drain(&mut self) -> bool {
        if self.empty || !self.boiled {
            return false;
        }
        self.empty = true;
        true
    }
}

pub struct Executor;

impl Executor {
    fn report(out: &mut dyn Write, step: &str, boiler: &ChocolateBoiler, done: bool) -> Result<()> {
        writeln!(
            out,
            "{:<5} -> {} (empty: {}, boiled: {})",
            step,
            if done { "ok" } else { "skipped" },
            boiler.is_empty(),
            boiler.is_boiled()
        )?;
        Ok(())
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Singleton
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut boiler = ChocolateBoiler::lock();
        writeln!(out, "{}", boiler.is_boiled())?;

        let filled = boiler.fill();
        Self::report(out, "fill", &boiler, filled)?;
        let boiled = boiler.boil();
        Self::report(out, "boil", &boiler, boiled)?;
        let drained = boiler.drain();
        Self::report(out, "drain", &boiler, drained)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::thread;

    #[test]
    fn test_boiler_cycle() {
        let mut boiler = ChocolateBoiler::new();
        assert!(boiler.is_empty());
        assert!(!boiler.boil());
        assert!(!boiler.drain());

        assert!(boiler.fill());
        assert!(!boiler.fill());
        assert!(!boiler.drain());
        assert!(boiler.boil());
        assert!(boiler.is_boiled());
        assert!(boiler.drain());
        assert!(boiler.is_empty());
    }

    #[test]
    fn test_concurrent_access_builds_one_instance() {
        let addresses: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| ChocolateBoiler::instance() as *const _ as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(SHARED_CONSTRUCTIONS.load(Ordering::SeqCst), 1);
        assert!(std::ptr::eq(ChocolateBoiler::instance(), ChocolateBoiler::instance()));
    }
}
