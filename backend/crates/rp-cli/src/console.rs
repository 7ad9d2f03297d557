//! The terminal as a mount point.

use crate::{CliError, CliResult};

use rp_startup::{DEFAULT_MOUNT_ID, Environment};

use std::io::{self, Stdout, Write};

use serde_json::Value;

/// Output sink the application renders into
pub struct Console<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }

    /// Write one JSON document followed by a newline
    pub fn emit(&mut self, value: &Value) -> CliResult<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| CliError::output(format!("Error serializing response: {e}")))?;

        writeln!(self.out, "{json}")
            .and_then(|()| self.out.flush())
            .map_err(|e| CliError::output(e.to_string()))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The process terminal. Only the `app` mount point exists, and it is stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEnvironment;

impl Environment for TerminalEnvironment {
    type Mount = Console<Stdout>;

    fn mount_point(&self, id: &str) -> Option<Console<Stdout>> {
        (id == DEFAULT_MOUNT_ID).then(|| Console::new(io::stdout()))
    }
}
