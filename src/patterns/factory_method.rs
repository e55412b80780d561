//! Factory Method: each destination's creator decides how its drones are painted.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DressCode {
    Red,
    Blue,
    Yellow,
}

impl DressCode {
    /// Where a drone wearing this dress code is stationed.
    pub fn mission_location(self) -> &'static str {
        match self {
            DressCode::Red => "Mars",
            DressCode::Blue => "Titan",
            DressCode::Yellow => "Moon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Scout,
    Repair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneStatus {
    Active,
    Deactivated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drone {
    id: u32,
    dress_code: DressCode,
    purpose: Purpose,
    status: DroneStatus,
}

impl Drone {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn dress_code(&self) -> DressCode {
        self.dress_code
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    pub fn is_in_function(&self) -> bool {
        self.status == DroneStatus::Active
    }

    pub fn do_the_job(&self, out: &mut dyn Write) -> Result<()> {
        let location = self.dress_code.mission_location();
        match (self.status, self.purpose) {
            (DroneStatus::Deactivated, _) => writeln!(
                out,
                "Drone {} is terminated and therefore unoperable.",
                self.id
            )?,
            (DroneStatus::Active, Purpose::Scout) => {
                writeln!(out, "Drone {} is scouting on {}.", self.id, location)?
            }
            (DroneStatus::Active, Purpose::Repair) => {
                writeln!(out, "Drone {} is repairing on {}.", self.id, location)?
            }
        }
        Ok(())
    }
}

pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> u32;
}

#[derive(Debug, Default)]
pub struct SequentialIds {
    current: AtomicU32,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide id source shared by every creator.
    pub fn global() -> &'static SequentialIds {
        static IDS: OnceLock<SequentialIds> = OnceLock::new();
        IDS.get_or_init(SequentialIds::new)
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> u32 {
        self.current.fetch_add(1, Ordering::Relaxed)
    }
}

pub trait DroneCreator {
    fn dress_code(&self) -> DressCode;
    fn ids(&self) -> &dyn IdProvider;

    fn create(&self, purpose: Purpose) -> Drone {
        let drone = Drone {
            id: self.ids().next_id(),
            dress_code: self.dress_code(),
            purpose,
            status: DroneStatus::Active,
        };
        tracing::debug!(id = drone.id, ?purpose, location = drone.dress_code.mission_location(), "drone created");
        drone
    }

    fn terminate(&self, drone: Drone, out: &mut dyn Write) -> Result<Drone> {
        if !drone.is_in_function() {
            return Err(PatternError::DroneAlreadyDeactivated { id: drone.id });
        }
        writeln!(out, "Drone {} terminated.", drone.id)?;
        Ok(Drone {
            status: DroneStatus::Deactivated,
            ..drone
        })
    }
}

macro_rules! drone_creator {
    ($name:ident, $dress_code:expr) => {
        pub struct $name<'a> {
            ids: &'a dyn IdProvider,
        }

        impl<'a> $name<'a> {
            pub fn new(ids: &'a dyn IdProvider) -> Self {
                Self { ids }
            }
        }

        impl DroneCreator for $name<'_> {
            fn dress_code(&self) -> DressCode {
                $dress_code
            }

            fn ids(&self) -> &dyn IdProvider {
                self.ids
            }
        }
    };
}

drone_creator!(MarsDroneCreator, DressCode::Red);
drone_creator!(MoonDroneCreator, DressCode::Yellow);
drone_creator!(TitanDroneCreator, DressCode::Blue);

pub struct Executor;

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::FactoryMethod
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let ids = SequentialIds::global();

        let mars_creator = MarsDroneCreator::new(ids);
        let mars_scout = mars_creator.create(Purpose::Scout);
        let mars_repair = mars_creator.create(Purpose::Repair);

        let moon_creator = MoonDroneCreator::new(ids);
        let moon_repair = moon_creator.create(Purpose::Repair);

        mars_scout.do_the_job(out)?;
        mars_repair.do_the_job(out)?;
        let mars_scout = mars_creator.terminate(mars_scout, out)?;
        mars_scout.do_the_job(out)?;
        moon_repair.do_the_job(out)?;
        Ok(())
    }
}
