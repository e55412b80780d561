//! Template Method: the beverage recipe is fixed, individual steps are not.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::io::Write;

pub trait CaffeineBeverage {
    fn brew(&self, out: &mut dyn Write) -> Result<()>;
    fn add_condiments(&self, out: &mut dyn Write) -> Result<()>;

    /// Hook: beverages may opt out of the condiment step.
    fn wants_condiments(&self) -> bool {
        true
    }

    /// The recipe itself. Implementors customise steps, never their order.
    fn prepare(&self, out: &mut dyn Write) -> Result<()> {
        boil_water(out)?;
        self.brew(out)?;
        pour_in_cup(out)?;
        if self.wants_condiments() {
            self.add_condiments(out)?;
        }
        Ok(())
    }
}

fn boil_water(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Boiling water...")?;
    Ok(())
}

fn pour_in_cup(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Pouring in cup...")?;
    Ok(())
}

pub struct Coffee {
    with_condiments: bool,
}

impl Coffee {
    pub fn new() -> Self {
        Self {
            with_condiments: true,
        }
    }

    pub fn black() -> Self {
        Self {
            with_condiments: false,
        }
    }
}

impl Default for Coffee {
    fn default() -> Self {
        Self::new()
    }
}

impl CaffeineBeverage for Coffee {
    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dripping Coffee through filter.")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding sugar.")?;
        Ok(())
    }

    fn wants_condiments(&self) -> bool {
        self.with_condiments
    }
}

pub struct GreenTea;

impl CaffeineBeverage for GreenTea {
    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Steeping the tea.")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, " - None to add. - ")?;
        Ok(())
    }
}

pub struct Executor;

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::TemplateMethod
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let coffee = Coffee::new();
        let black_coffee = Coffee::black();
        let beverages: [(&str, &dyn CaffeineBeverage); 3] = [
            ("Coffee", &coffee),
            ("Green tea", &GreenTea),
            ("Black coffee", &black_coffee),
        ];
        for (name, beverage) in beverages {
            writeln!(out, "-- {} --", name)?;
            beverage.prepare(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(beverage: &dyn CaffeineBeverage) -> Vec<String> {
        let mut out = Vec::new();
        beverage.prepare(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_coffee_follows_recipe() {
        assert_eq!(
            prepared(&Coffee::new()),
            [
                "Boiling water...",
                "Dripping Coffee through filter.",
                "Pouring in cup...",
                "Adding sugar."
            ]
        );
    }

    #[test]
    fn test_tea_customises_steps() {
        assert_eq!(
            prepared(&GreenTea),
            [
                "Boiling water...",
                "Steeping the tea.",
                "Pouring in cup...",
                " - None to add. - "
            ]
        );
    }

    #[test]
    fn test_hook_skips_condiments() {
        let steps = prepared(&Coffee::black());
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().map(String::as_str), Some("Pouring in cup..."));
    }
}
