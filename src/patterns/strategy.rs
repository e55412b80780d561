//! Strategy: a duck delegates its quack to an injected behaviour.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub trait Quack {
    fn quack(&self) -> &'static str;
}

pub struct LongQuack;

impl Quack for LongQuack {
    fn quack(&self) -> &'static str {
        "Long QUACK!"
    }
}

pub struct Squee;

impl Quack for Squee {
    fn quack(&self) -> &'static str {
        "SqueeSqUeee"
    }
}

pub struct Silent;

impl Quack for Silent {
    fn quack(&self) -> &'static str {
        "<nothing>"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuackStyle {
    #[default]
    Long,
    Squee,
    Silent,
}

impl QuackStyle {
    pub fn strategy(self) -> Box<dyn Quack> {
        match self {
            QuackStyle::Long => Box::new(LongQuack),
            QuackStyle::Squee => Box::new(Squee),
            QuackStyle::Silent => Box::new(Silent),
        }
    }
}

pub struct Duck {
    quack: Box<dyn Quack>,
}

impl Duck {
    pub fn new(quack: Box<dyn Quack>) -> Self {
        Self { quack }
    }

    pub fn set_quack(&mut self, quack: Box<dyn Quack>) {
        self.quack = quack;
    }

    pub fn quack(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.quack.quack())?;
        Ok(())
    }
}

pub struct Executor {
    style: QuackStyle,
}

impl Executor {
    pub fn new(style: QuackStyle) -> Self {
        Self { style }
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Strategy
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut duck = Duck::new(self.style.strategy());
        duck.quack(out)?;

        tracing::debug!("swapping quack behaviour at runtime");
        duck.set_quack(Box::new(Squee));
        duck.quack(out)?;
        Ok(())
    }
}
