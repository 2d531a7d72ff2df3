//! brfdb - Linux bridge forwarding table viewer
//!
//! Reads the kernel's binary bridge forwarding database
//! (`/sys/class/net/<bridge>/brforward`), drops entries local to the bridge,
//! resolves port numbers through `/sys/class/net/<bridge>/brif` and prints
//! the learned addresses sorted by MAC.
//!
//! # Pipeline
//!
//! ```text
//!  brif/ ──▶ PortMap ─────────────┐
//!                                 ▼
//!  brforward ──▶ ForwardingTable ──▶ FdbEntry* ──▶ Report ──▶ stdout
//!               (16-byte records)   (non-local)   (sorted)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use brfdb::{collect, write_header, SysfsLayout};
//!
//! let report = collect(&SysfsLayout::default(), "br0")?;
//! let mut out = std::io::stdout().lock();
//! write_header(&mut out)?;
//! report.render(&mut out)?;
//! # Ok::<(), brfdb::BrfdbError>(())
//! ```

pub mod config;
pub mod error;
pub mod mac;
pub mod ports;
pub mod record;
pub mod report;
pub mod sysfs;
pub mod table;

pub use config::{BrfdbConfig, DEFAULT_CONFIG_PATH};
pub use error::{BrfdbError, Result};
pub use mac::MacAddress;
pub use ports::PortMap;
pub use record::{records, FdbRecord, RECORD_LEN};
pub use report::{failure_headline, write_failure, write_header, Report, VERSION};
pub use sysfs::SysfsLayout;
pub use table::{sort_entries, FdbEntry, ForwardingTable};

use std::io::Write;
use tracing::info;

/// Builds the sorted report for `bridge`.
///
/// Ports are discovered before the table is read, so a missing bridge
/// reports as a port discovery failure.
pub fn collect(layout: &SysfsLayout, bridge: &str) -> Result<Report> {
    let ports = PortMap::discover(layout, bridge)?;
    let table = ForwardingTable::read(layout, bridge)?;

    let entries: Vec<FdbEntry> = table.entries(&ports).collect();
    info!(
        bridge,
        records = table.record_count(),
        visible = entries.len(),
        "Decoded forwarding table"
    );

    Ok(Report::new(entries, ports.max_name_len()))
}

/// Writes the sorted rows for `bridge` to `out`.
///
/// Nothing is written unless both pseudo-files were read.
pub fn run<W: Write>(layout: &SysfsLayout, bridge: &str, out: &mut W) -> Result<()> {
    let report = collect(layout, bridge)?;
    report.render(out)?;
    out.flush()?;
    Ok(())
}
