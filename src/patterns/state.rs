//! State: a gumball machine whose answer to every operation depends on its current state.
//!
//! The transition table lives in a single exhaustive `match` over `(state, operation)`, so
//! every state handles every operation, even if only with a message.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GumballState {
    NoPayment,
    HasPayment,
    Sold,
    SoldOut,
}

impl fmt::Display for GumballState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GumballState::NoPayment => "NoPayment",
            GumballState::HasPayment => "HasPayment",
            GumballState::Sold => "Sold",
            GumballState::SoldOut => "SoldOut",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InsertPayment,
    EjectPayment,
    TurnCrank,
    Dispense,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GumballMachine {
    count: u32,
    state: GumballState,
}

impl GumballMachine {
    pub fn new(count: u32) -> Self {
        let state = if count == 0 {
            GumballState::SoldOut
        } else {
            GumballState::NoPayment
        };
        Self { count, state }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn state(&self) -> GumballState {
        self.state
    }

    pub fn insert_payment(&mut self, out: &mut dyn Write) -> Result<()> {
        self.handle(Operation::InsertPayment, out).map(|_| ())
    }

    pub fn eject_payment(&mut self, out: &mut dyn Write) -> Result<()> {
        self.handle(Operation::EjectPayment, out).map(|_| ())
    }

    pub fn turn_crank(&mut self, out: &mut dyn Write) -> Result<()> {
        self.handle(Operation::TurnCrank, out).map(|_| ())
    }

    /// Returns whether a gumball came out.
    pub fn dispense(&mut self, out: &mut dyn Write) -> Result<bool> {
        self.handle(Operation::Dispense, out)
    }

    pub fn refill(&mut self, gumballs: u32, out: &mut dyn Write) -> Result<()> {
        self.count = self.count.saturating_add(gumballs);
        writeln!(out, "The gumball machine was refilled; it now holds {}", self.count)?;
        if self.state == GumballState::SoldOut && self.count > 0 {
            self.enter(GumballState::NoPayment, out)?;
        }
        Ok(())
    }

    /// Applies one operation and returns whether a gumball was dispensed.
    pub fn handle(&mut self, operation: Operation, out: &mut dyn Write) -> Result<bool> {
        use GumballState::*;
        use Operation::*;

        let (message, next) = match (self.state, operation) {
            (NoPayment, InsertPayment) => ("You inserted a quarter", Some(HasPayment)),
            (NoPayment, EjectPayment) => ("You haven't inserted a quarter", None),
            (NoPayment, TurnCrank) => ("You turned but there's no quarter", None),
            (NoPayment, Dispense) => ("You need to pay first", None),

            (HasPayment, InsertPayment) => ("You can't insert another quarter", None),
            (HasPayment, EjectPayment) => ("Quarter returned", Some(NoPayment)),
            (HasPayment, TurnCrank) => ("You turned...", Some(Sold)),
            (HasPayment, Dispense) => ("No gumball dispensed", None),

            (Sold, InsertPayment) => ("Please wait, we're already giving you a gumball", None),
            (Sold, EjectPayment) => ("Sorry, you already turned the crank", None),
            (Sold, TurnCrank) => ("Turning twice doesn't get you another gumball", None),
            (Sold, Dispense) => {
                let Some(remaining) = self.count.checked_sub(1) else {
                    // Sold is only entered with stock; treat an empty machine as sold out.
                    writeln!(out, "No gumball dispensed")?;
                    self.enter(SoldOut, out)?;
                    return Ok(false);
                };
                writeln!(out, "A gumball comes rolling out the slot")?;
                self.count = remaining;
                let next = if remaining == 0 { SoldOut } else { NoPayment };
                self.enter(next, out)?;
                return Ok(true);
            }

            (SoldOut, InsertPayment) => ("You can't insert a quarter, the machine is sold out", None),
            (SoldOut, EjectPayment) => ("You can't eject, you haven't inserted a quarter yet", None),
            (SoldOut, TurnCrank) => ("You turned, but there are no gumballs", None),
            (SoldOut, Dispense) => ("No gumball dispensed", None),
        };

        writeln!(out, "{}", message)?;
        if let Some(next) = next {
            self.enter(next, out)?;
        }
        Ok(false)
    }

    fn enter(&mut self, next: GumballState, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(from = %self.state, to = %next, count = self.count, "gumball machine transition");
        self.state = next;
        if next == GumballState::SoldOut {
            writeln!(out, "Oops, out of gumballs!")?;
        }
        Ok(())
    }
}

impl fmt::Display for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gumball machine: {} gumballs, state {}", self.count, self.state)
    }
}

pub struct Executor {
    gumballs: u32,
}

impl Executor {
    pub fn new(gumballs: u32) -> Self {
        Self { gumballs }
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::State
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut machine = GumballMachine::new(self.gumballs);
        if machine.state() == GumballState::SoldOut {
            writeln!(out, "Oops, out of gumballs!")?;
        }
        writeln!(out, "{}", machine)?;

        machine.insert_payment(out)?;
        machine.eject_payment(out)?;
        machine.insert_payment(out)?;
        machine.turn_crank(out)?;
        machine.dispense(out)?;
        machine.turn_crank(out)?;

        writeln!(out, "{}", machine)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ops(machine: &mut GumballMachine, ops: &[Operation]) -> String {
        let mut out = Vec::new();
        for op in ops {
            machine.handle(*op, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_initial_state_depends_on_inventory() {
        assert_eq!(GumballMachine::new(0).state(), GumballState::SoldOut);
        assert_eq!(GumballMachine::new(3).state(), GumballState::NoPayment);
    }

    #[test]
    fn test_scripted_scenario_with_single_gumball() {
        use Operation::*;
        let mut machine = GumballMachine::new(1);
        let mut out = Vec::new();

        machine.handle(InsertPayment, &mut out).unwrap();
        machine.handle(EjectPayment, &mut out).unwrap();
        machine.handle(InsertPayment, &mut out).unwrap();
        machine.handle(TurnCrank, &mut out).unwrap();
        assert!(machine.dispense(&mut out).unwrap());
        machine.handle(TurnCrank, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You inserted a quarter\n\
             Quarter returned\n\
             You inserted a quarter\n\
             You turned...\n\
             A gumball comes rolling out the slot\n\
             Oops, out of gumballs!\n\
             You turned, but there are no gumballs\n"
        );
        assert_eq!(machine.count(), 0);
        assert_eq!(machine.state(), GumballState::SoldOut);
    }

    #[test]
    fn test_no_op_messages_keep_state() {
        use Operation::*;
        let mut machine = GumballMachine::new(2);

        let text = run_ops(&mut machine, &[EjectPayment, TurnCrank, Dispense]);
        assert_eq!(machine.state(), GumballState::NoPayment);
        assert!(text.contains("You need to pay first"));

        let text = run_ops(&mut machine, &[InsertPayment, InsertPayment, Dispense]);
        assert_eq!(machine.state(), GumballState::HasPayment);
        assert!(text.contains("You can't insert another quarter"));

        let text = run_ops(&mut machine, &[TurnCrank, InsertPayment, EjectPayment, TurnCrank]);
        assert_eq!(machine.state(), GumballState::Sold);
        assert!(text.contains("Turning twice doesn't get you another gumball"));
        assert_eq!(machine.count(), 2);
    }

    #[test]
    fn test_dispense_with_stock_left_returns_to_no_payment() {
        use Operation::*;
        let mut machine = GumballMachine::new(2);
        run_ops(&mut machine, &[InsertPayment, TurnCrank, Dispense]);
        assert_eq!(machine.state(), GumballState::NoPayment);
        assert_eq!(machine.count(), 1);
    }

    #[test]
    fn test_refill_revives_sold_out_machine() {
        let mut machine = GumballMachine::new(0);
        let mut out = Vec::new();
        machine.refill(5, &mut out).unwrap();
        assert_eq!(machine.state(), GumballState::NoPayment);
        assert_eq!(machine.count(), 5);
    }

    #[test]
    fn test_executor_output() {
        let mut out = Vec::new();
        Executor::new(1).run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Gumball machine: 1 gumballs, state NoPayment\n"));
        assert_eq!(text.matches("A gumball comes rolling out the slot").count(), 1);
        assert!(text.contains("You turned, but there are no gumballs\n"));
        assert!(text.ends_with("Gumball machine: 0 gumballs, state SoldOut\n"));
    }
}
