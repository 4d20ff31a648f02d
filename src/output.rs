//! Status output for export runs.
//!
//! Status messages (generated paths, warnings, the completion notice) go to
//! stderr so stdout carries only generated data. `--silent` swaps in a handler
//! that drops them. Errors bypass this module entirely: `main` prints them
//! directly, so they cannot be silenced.

use std::io::{self, Write};

use crate::styling::{eprintln, info_message, success_message, warning_message};

/// Core output handler trait
///
/// Implementations provide their message stream via `write_message_line`;
/// the message kinds only differ in formatting.
pub trait OutputHandler {
    /// Write a single logical message line to the status stream
    fn write_message_line(&mut self, line: &str) -> io::Result<()>;

    /// Emit a success message
    fn success(&mut self, message: String) -> io::Result<()> {
        self.write_message_line(&success_message(message))
    }

    /// Emit a warning message
    fn warning(&mut self, message: String) -> io::Result<()> {
        self.write_message_line(&warning_message(message))
    }

    /// Emit an info message
    fn info(&mut self, message: String) -> io::Result<()> {
        self.write_message_line(&info_message(message))
    }
}

/// Status messages on stderr, with color detection from anstream.
#[derive(Debug)]
pub struct StderrOutput;

impl OutputHandler for StderrOutput {
    fn write_message_line(&mut self, line: &str) -> io::Result<()> {
        eprintln!("{line}");
        io::stderr().flush()
    }
}

/// Drops every status message (`--silent`).
#[derive(Debug)]
pub struct SilentOutput;

impl OutputHandler for SilentOutput {
    fn write_message_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Pick the status handler for a run.
pub fn handler(silent: bool) -> Box<dyn OutputHandler> {
    if silent {
        Box::new(SilentOutput)
    } else {
        Box::new(StderrOutput)
    }
}

/// Collects status lines in memory. Used by tests.
#[derive(Debug, Default)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
}

impl CapturedOutput {
    /// Captured lines with ANSI styling removed.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| anstream::adapter::strip_str(line).to_string())
            .collect()
    }
}

impl OutputHandler for CapturedOutput {
    fn write_message_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
