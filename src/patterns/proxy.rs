//! Proxy: a local stand-in for a gumball machine that lives on a (simulated) remote server.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use std::io::Write;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

pub trait GumballMachineRecord {
    fn id(&self) -> u32;
    fn ball_count(&self) -> Result<u32>;
    fn set_ball_count(&mut self, ball_count: u32) -> Result<()>;
    fn location(&self) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteGumballMachine {
    id: u32,
    ball_count: u32,
    location: String,
}

impl RemoteGumballMachine {
    pub fn new(id: u32, ball_count: u32, location: impl Into<String>) -> Self {
        Self {
            id,
            ball_count,
            location: location.into(),
        }
    }
}

impl GumballMachineRecord for RemoteGumballMachine {
    fn id(&self) -> u32 {
        self.id
    }

    fn ball_count(&self) -> Result<u32> {
        Ok(self.ball_count)
    }

    fn set_ball_count(&mut self, ball_count: u32) -> Result<()> {
        self.ball_count = ball_count;
        Ok(())
    }

    fn location(&self) -> Result<String> {
        Ok(self.location.clone())
    }
}

/// In-memory stand-in for the remote service. Every call blocks for `latency` first; there is
/// no timeout or cancellation.
#[derive(Debug)]
pub struct Server {
    machines: Mutex<Vec<RemoteGumballMachine>>,
    latency: Duration,
}

impl Server {
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            machines: Mutex::new(vec![
                RemoteGumballMachine::new(45, 200, "Allen Street 35a"),
                RemoteGumballMachine::new(32, 10, "Ann Street 10"),
                RemoteGumballMachine::new(11, 180, "Forsyth Street 75c"),
                RemoteGumballMachine::new(15, 127, "Irving Place 105"),
            ]),
            latency,
        }
    }

    /// The process-wide server. The first caller fixes its latency.
    pub fn global(latency: Duration) -> &'static Server {
        static SERVER: OnceLock<Server> = OnceLock::new();
        SERVER.get_or_init(|| Server::with_latency(latency))
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn round_trip(&self) -> MutexGuard<'_, Vec<RemoteGumballMachine>> {
        thread::sleep(self.latency);
        self.machines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn fetch(&self, id: u32) -> Result<RemoteGumballMachine> {
        let started = Instant::now();
        let machines = self.round_trip();
        let machine = machines
            .iter()
            .find(|machine| machine.id == id)
            .cloned()
            .ok_or(PatternError::MachineNotFound { id })?;
        tracing::debug!(id, elapsed = ?started.elapsed(), "fetched remote gumball machine");
        Ok(machine)
    }

    pub fn update_ball_count(&self, id: u32, ball_count: u32) -> Result<()> {
        let mut machines = self.round_trip();
        let machine = machines
            .iter_mut()
            .find(|machine| machine.id == id)
            .ok_or(PatternError::MachineNotFound { id })?;
        machine.ball_count = ball_count;
        tracing::debug!(id, ball_count, "updated remote gumball machine");
        Ok(())
    }
}

/// Holds only the id; every read or write goes to the server.
pub struct GumballMachineProxy<'a> {
    id: u32,
    server: &'a Server,
}

impl<'a> GumballMachineProxy<'a> {
    pub fn new(id: u32, server: &'a Server) -> Self {
        Self { id, server }
    }
}

impl GumballMachineRecord for GumballMachineProxy<'_> {
    fn id(&self) -> u32 {
        self.id
    }

    fn ball_count(&self) -> Result<u32> {
        Ok(self.server.fetch(self.id)?.ball_count)
    }

    fn set_ball_count(&mut self, ball_count: u32) -> Result<()> {
        self.server.update_ball_count(self.id, ball_count)
    }

    fn location(&self) -> Result<String> {
        Ok(self.server.fetch(self.id)?.location)
    }
}

pub struct Executor {
    machine_id: u32,
    new_ball_count: u32,
    latency: Duration,
}

impl Executor {
    pub fn new(machine_id: u32, new_ball_count: u32, latency: Duration) -> Self {
        Self {
            machine_id,
            new_ball_count,
            latency,
        }
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Proxy
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let server = Server::global(self.latency);
        let mut proxy = GumballMachineProxy::new(self.machine_id, server);

        writeln!(out, "{}", proxy.ball_count()?)?;
        writeln!(out, "Machine {} is at {}", proxy.id(), proxy.location()?)?;

        proxy.set_ball_count(self.new_ball_count)?;
        writeln!(out, "Ball count after update: {}", proxy.ball_count()?)?;
        Ok(())
    }
}
