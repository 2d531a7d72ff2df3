//! Text rendering of the bridge MAC table.

use crate::error::BrfdbError;
use crate::table::{sort_entries, FdbEntry};
use std::io::{self, Write};

/// Version printed in the report header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Writes the header line followed by a blank line.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Bridge MAC table, version {}", VERSION)?;
    writeln!(out)
}

/// One-line summary of a failed run.
///
/// `bridge` is used when the error itself does not name one.
pub fn failure_headline(err: &BrfdbError, bridge: &str) -> String {
    let bridge = err.bridge().unwrap_or(bridge);
    if err.is_port_discovery() {
        format!("Failed to parse the port indexes for bridge {}!", bridge)
    } else if err.is_table_read() {
        format!("Failed to parse the MAC table for bridge {}!", bridge)
    } else {
        format!("Failed to print the MAC table for bridge {}!", bridge)
    }
}

/// Writes the headline followed by the underlying cause.
pub fn write_failure<W: Write>(out: &mut W, err: &BrfdbError, bridge: &str) -> io::Result<()> {
    writeln!(out, "{}", failure_headline(err, bridge))?;
    writeln!(out, "{}", err)
}

/// Sorted entries plus the width of the port column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<FdbEntry>,
    port_width: usize,
}

impl Report {
    /// Sorts `entries` by MAC address and keeps them for rendering.
    pub fn new(mut entries: Vec<FdbEntry>, port_width: usize) -> Self {
        sort_entries(&mut entries);
        Self {
            entries,
            port_width,
        }
    }

    /// Entries in output order.
    pub fn entries(&self) -> &[FdbEntry] {
        &self.entries
    }

    pub fn port_width(&self) -> usize {
        self.port_width
    }

    /// Writes one `port\tmac\tage` line per entry.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(
                out,
                "{:>width$}\t{}\t{:.2}",
                entry.port,
                entry.mac,
                entry.age,
                width = self.port_width
            )?;
        }
        Ok(())
    }
}
