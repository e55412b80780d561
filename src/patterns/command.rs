//! Command: a remote control stores device actions behind numbered buttons.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::is_device_code;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

/// A four-digit pairing code shared by a remote and the devices it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(String);

impl Code {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if !is_device_code(&code) {
            return Err(PatternError::InvalidDeviceCode { code });
        }
        Ok(Self(code))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Temperature {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Temperature::High => "High",
            Temperature::Medium => "Medium",
            Temperature::Low => "Low",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tv {
    code: Code,
    channel: u32,
    turned_on: bool,
}

impl Tv {
    pub fn new(code: Code) -> Self {
        Self {
            code,
            channel: 0,
            turned_on: false,
        }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn is_turned_on(&self) -> bool {
        self.turned_on
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirConditioner {
    code: Code,
    temperature: Temperature,
    turned_on: bool,
}

impl AirConditioner {
    pub fn new(code: Code) -> Self {
        Self {
            code,
            temperature: Temperature::default(),
            turned_on: false,
        }
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn is_turned_on(&self) -> bool {
        self.turned_on
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TurnOn,
    TurnOff,
    ChangeChannel(u32),
    SetTemperature(Temperature),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::TurnOn => f.write_str("turn on"),
            Action::TurnOff => f.write_str("turn off"),
            Action::ChangeChannel(channel) => write!(f, "change channel to {}", channel),
            Action::SetTemperature(temperature) => write!(f, "set temperature to {}", temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Device {
    Tv(Tv),
    AirConditioner(AirConditioner),
}

impl Device {
    pub fn code(&self) -> &Code {
        match self {
            Device::Tv(tv) => &tv.code,
            Device::AirConditioner(ac) => &ac.code,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Device::Tv(_) => "TV",
            Device::AirConditioner(_) => "AirConditioner",
        }
    }

    pub fn supports(&self, action: Action) -> bool {
        matches!(
            (self, action),
            (_, Action::TurnOn | Action::TurnOff)
                | (Device::Tv(_), Action::ChangeChannel(_))
                | (Device::AirConditioner(_), Action::SetTemperature(_))
        )
    }

    pub fn apply(&mut self, action: Action, out: &mut dyn Write) -> Result<()> {
        let name = self.name();
        match (self, action) {
            (Device::Tv(tv), Action::TurnOn) => {
                tv.turned_on = true;
                writeln!(out, "{} turned ON.", name)?;
            }
            (Device::Tv(tv), Action::TurnOff) => {
                tv.turned_on = false;
                writeln!(out, "{} turned OFF.", name)?;
            }
            (Device::Tv(tv), Action::ChangeChannel(channel)) => {
                tv.channel = channel;
                writeln!(out, "Channel set to {}", tv.channel)?;
            }
            (Device::AirConditioner(ac), Action::TurnOn) => {
                ac.turned_on = true;
                writeln!(out, "{} turned ON.", name)?;
            }
            (Device::AirConditioner(ac), Action::TurnOff) => {
                ac.turned_on = false;
                writeln!(out, "{} turned OFF.", name)?;
            }
            (Device::AirConditioner(ac), Action::SetTemperature(temperature)) => {
                ac.temperature = temperature;
                writeln!(out, "Temperature set to {}", ac.temperature)?;
            }
            (_, action) => {
                return Err(PatternError::UnsupportedAction {
                    device: name.to_string(),
                    action: action.to_string(),
                })
            }
        }
        Ok(())
    }
}

pub type SharedDevice = Rc<RefCell<Device>>;

pub fn shared(device: Device) -> SharedDevice {
    Rc::new(RefCell::new(device))
}

#[derive(Debug, Clone)]
pub struct RemoteCommand {
    device: SharedDevice,
    action: Action,
}

impl RemoteCommand {
    pub fn new(device: SharedDevice, action: Action) -> Result<Self> {
        {
            let target = device.borrow();
            if !target.supports(action) {
                return Err(PatternError::UnsupportedAction {
                    device: target.name().to_string(),
                    action: action.to_string(),
                });
            }
        }
        Ok(Self { device, action })
    }

    /// Runs the action if `code` pairs with the device; returns whether it ran.
    pub fn execute(&self, code: &Code, out: &mut dyn Write) -> Result<bool> {
        let mut device = self.device.borrow_mut();
        if device.code() != code {
            tracing::debug!(device = device.name(), action = %self.action, "code mismatch, ignored");
            return Ok(false);
        }
        device.apply(self.action, out)?;
        Ok(true)
    }
}

pub struct RemoteController {
    code: Code,
    commands: Vec<RemoteCommand>,
}

impl RemoteController {
    pub fn new(code: Code) -> Self {
        Self {
            code,
            commands: Vec::new(),
        }
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Assigns `command` to the next free button and returns its number.
    pub fn add_command(&mut self, command: RemoteCommand) -> usize {
        self.commands.push(command);
        self.commands.len() - 1
    }

    pub fn press_button(&self, number: usize, out: &mut dyn Write) -> Result<bool> {
        let command = self
            .commands
            .get(number)
            .ok_or(PatternError::ButtonNotAssigned { button: number })?;
        command.execute(&self.code, out)
    }

    pub fn change_code(&mut self, code: Code) {
        self.code = code;
    }
}

pub struct Executor {
    device_code: String,
}

impl Executor {
    pub fn new(device_code: impl Into<String>) -> Self {
        Self {
            device_code: device_code.into(),
        }
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Command
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let code = Code::new(self.device_code.clone())?;
        let tv = shared(Device::Tv(Tv::new(code.clone())));
        let ac = shared(Device::AirConditioner(AirConditioner::new(code.clone())));

        let mut remote = RemoteController::new(code);
        let tv_on = remote.add_command(RemoteCommand::new(tv.clone(), Action::TurnOn)?);
        let tv_channel = remote.add_command(RemoteCommand::new(tv.clone(), Action::ChangeChannel(7))?);
        let tv_off = remote.add_command(RemoteCommand::new(tv, Action::TurnOff)?);
        let ac_on = remote.add_command(RemoteCommand::new(ac.clone(), Action::TurnOn)?);
        let ac_low = remote.add_command(RemoteCommand::new(
            ac.clone(),
            Action::SetTemperature(Temperature::Low),
        )?);
        let ac_off = remote.add_command(RemoteCommand::new(ac, Action::TurnOff)?);

        for button in [tv_on, tv_channel, ac_on, ac_low, tv_off] {
            remote.press_button(button, out)?;
        }

        let other_code = if remote.code().value() == "9999" { "0000" } else { "9999" };
        remote.change_code(Code::new(other_code)?);
        writeln!(out, "Remote code changed to {}", remote.code().value())?;
        if !remote.press_button(ac_off, out)? {
            writeln!(out, "AirConditioner ignored the command (code mismatch).")?;
        }
        Ok(())
    }
}
