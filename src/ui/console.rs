//! Line-based console boundary
//!
//! The engine only ever asks for one line at a prompt and prints text.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::GameError;

/// Where the engine reads commands from and writes narration to
pub trait Console {
    /// Show `prompt` and return the next raw line
    fn read_line(&mut self, prompt: &str) -> Result<String, GameError>;

    fn print(&mut self, text: &str);
}

/// Interactive console on stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Replays pre-recorded input lines and records everything printed
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    output: Vec<String>,
    /// Echo prompts, input and output to stdout as well
    echo: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            echo: false,
        }
    }

    /// Load a script, one command per line. Blank lines and `#` comments are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            lines.push(trimmed.to_string());
        }
        Ok(Self::new(lines))
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Everything printed so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All output joined, for substring assertions
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        let line = self.lines.pop_front().ok_or(GameError::InputClosed)?;
        if self.echo {
            println!("{}{}", prompt, line);
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) {
        if self.echo {
            println!("{}", text);
        }
        self.output.push(text.to_string());
    }
}
