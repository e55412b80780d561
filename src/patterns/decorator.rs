//! Decorator: text readers wrapped in layers that reverse or upper-case what they read.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

pub const DEFAULT_TEXT: &str = "Just use a goto statement.";

pub trait TextReader {
    fn read(&mut self) -> Result<String>;
}

impl<T: TextReader + ?Sized> TextReader for Box<T> {
    fn read(&mut self) -> Result<String> {
        (**self).read()
    }
}

pub struct DummyTextReader {
    text: String,
}

impl DummyTextReader {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for DummyTextReader {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT)
    }
}

impl TextReader for DummyTextReader {
    fn read(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Prompts on `prompt_out` and blocks until a line arrives on `input`.
pub struct ConsoleTextReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ConsoleTextReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> TextReader for ConsoleTextReader<R, W> {
    fn read(&mut self) -> Result<String> {
        writeln!(self.prompt_out, "Enter some text")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no text entered").into());
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

pub struct ReverseTextDecorator<T> {
    inner: T,
}

impl<T: TextReader> ReverseTextDecorator<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: TextReader> TextReader for ReverseTextDecorator<T> {
    fn read(&mut self) -> Result<String> {
        Ok(self.inner.read()?.chars().rev().collect())
    }
}

pub struct ToUpperCaseDecorator<T> {
    inner: T,
}

impl<T: TextReader> ToUpperCaseDecorator<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: TextReader> TextReader for ToUpperCaseDecorator<T> {
    fn read(&mut self) -> Result<String> {
        Ok(self.inner.read()?.to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    #[default]
    Dummy,
    Console,
}

pub struct Executor {
    source: TextSource,
    text: String,
}

impl Executor {
    pub fn new(source: TextSource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    fn base_reader(&self) -> Box<dyn TextReader> {
        match self.source {
            TextSource::Dummy => Box::new(DummyTextReader::new(self.text.clone())),
            TextSource::Console => Box::new(ConsoleTextReader::new(
                io::BufReader::new(io::stdin()),
                io::stdout(),
            )),
        }
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Decorator
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut text = self.base_reader();
        writeln!(out, "{}", text.read()?)?;

        let mut text: Box<dyn TextReader> = Box::new(ReverseTextDecorator::new(text));
        writeln!(out, "{}", text.read()?)?;

        let mut text: Box<dyn TextReader> = Box::new(ToUpperCaseDecorator::new(text));
        writeln!(out, "{}", text.read()?)?;

        let mut text: Box<dyn TextReader> = Box::new(ReverseTextDecorator::new(text));
        writeln!(out, "{}", text.read()?)?;
        Ok(())
    }
}
