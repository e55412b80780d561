//! Observer: a weather station pushes temperature changes to subscribed displays.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::io::{self, Write};
use std::rc::Rc;

pub trait Measurements {
    fn temperature(&self) -> i32;
    fn humidity(&self) -> i32;
    fn pressure(&self) -> i32;
}

pub trait Display {
    fn display(&self, measurements: &dyn Measurements, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct WeatherData {
    temperature: i32,
    humidity: i32,
    pressure: i32,
    subscribers: Vec<(SubscriptionId, Rc<dyn Display>)>,
    next_id: u64,
}

impl WeatherData {
    pub fn new() -> Self {
        Self {
            temperature: 20,
            humidity: 85,
            pressure: 110_000,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `display`; subscribing the same display again returns its existing id.
    pub fn subscribe(&mut self, display: Rc<dyn Display>) -> SubscriptionId {
        if let Some((id, _)) = self
            .subscribers
            .iter()
            .find(|(_, existing)| Rc::ptr_eq(existing, &display))
        {
            return *id;
        }

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, display));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn temperature_changed(&mut self, temperature: i32, out: &mut dyn Write) -> Result<()> {
        self.temperature = temperature;
        self.notify(out)
    }

    fn notify(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(subscribers = self.subscribers.len(), "notifying displays");
        for (_, display) in &self.subscribers {
            display.display(self, out)?;
        }
        Ok(())
    }
}

impl Default for WeatherData {
    fn default() -> Self {
        Self::new()
    }
}

impl Measurements for WeatherData {
    fn temperature(&self) -> i32 {
        self.temperature
    }

    fn humidity(&self) -> i32 {
        self.humidity
    }

    fn pressure(&self) -> i32 {
        self.pressure
    }
}

pub struct NumberedDisplay {
    number: u32,
}

impl NumberedDisplay {
    pub fn new(number: u32) -> Self {
        Self { number }
    }
}

impl Display for NumberedDisplay {
    fn display(&self, measurements: &dyn Measurements, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Tmp changed:{} (Display {})",
            measurements.temperature(),
            self.number
        )
    }
}

pub struct Executor;

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Observer
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut data = WeatherData::new();

        data.subscribe(Rc::new(NumberedDisplay::new(1)));
        let second = data.subscribe(Rc::new(NumberedDisplay::new(2)));
        data.temperature_changed(25, out)?;
        data.unsubscribe(second);
        data.temperature_changed(27, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDisplay {
        seen: RefCell<Vec<i32>>,
    }

    impl Display for RecordingDisplay {
        fn display(&self, measurements: &dyn Measurements, _out: &mut dyn Write) -> io::Result<()> {
            self.seen.borrow_mut().push(measurements.temperature());
            Ok(())
        }
    }

    #[test]
    fn test_all_subscribers_receive_every_update() {
        let mut data = WeatherData::new();
        let first = Rc::new(RecordingDisplay::default());
        let second = Rc::new(RecordingDisplay::default());
        data.subscribe(first.clone());
        data.subscribe(second.clone());

        let mut out = Vec::new();
        data.temperature_changed(21, &mut out).unwrap();
        data.temperature_changed(22, &mut out).unwrap();

        assert_eq!(*first.seen.borrow(), vec![21, 22]);
        assert_eq!(*second.seen.borrow(), vec![21, 22]);
    }

    #[test]
    fn test_unsubscribed_display_stops_receiving() {
        let mut data = WeatherData::new();
        let display = Rc::new(RecordingDisplay::default());
        let id = data.subscribe(display.clone());

        let mut out = Vec::new();
        data.temperature_changed(21, &mut out).unwrap();
        assert!(data.unsubscribe(id));
        data.temperature_changed(30, &mut out).unwrap();

        assert_eq!(*display.seen.borrow(), vec![21]);
        assert!(!data.unsubscribe(id));
    }

    #[test]
    fn test_duplicate_subscription_is_ignored() {
        let mut data = WeatherData::new();
        let display = Rc::new(RecordingDisplay::default());
        let first = data.subscribe(display.clone());
        let again = data.subscribe(display.clone());

        assert_eq!(first, again);
        assert_eq!(data.subscriber_count(), 1);

        data.temperature_changed(19, &mut Vec::new()).unwrap();
        assert_eq!(*display.seen.borrow(), vec![19]);
    }

    #[test]
    fn test_executor_output() {
        let mut out = Vec::new();
        Executor.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Tmp changed:25 (Display 1)\nTmp changed:25 (Display 2)\nTmp changed:27 (Display 1)\n"
        );
    }

    #[test]
    fn test_initial_measurements() {
        let data = WeatherData::new();
        assert_eq!(data.temperature(), 20);
        assert_eq!(data.humidity(), 85);
        assert_eq!(data.pressure(), 110_000);
    }
}
