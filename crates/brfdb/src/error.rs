//! Error types for brfdb.
//!
//! Only two conditions abort a run: the bridge's port directory cannot be
//! listed, or its forwarding table cannot be read. Everything else found in
//! the table (unknown port index, local entries, trailing bytes) is tolerated.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for brfdb operations.
pub type Result<T> = std::result::Result<T, BrfdbError>;

/// Errors that can occur while building a bridge MAC table report.
#[derive(Debug, Error)]
pub enum BrfdbError {
    /// The bridge's port directory could not be enumerated.
    #[error("cannot read ports of bridge '{bridge}' at {}: {source}", .path.display())]
    PortDiscovery {
        /// Bridge name as given by the user.
        bridge: String,
        /// Directory that failed to list.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The bridge's forwarding table could not be read.
    #[error("cannot read forwarding table of bridge '{bridge}' at {}: {source}", .path.display())]
    TableRead {
        /// Bridge name as given by the user.
        bridge: String,
        /// File that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Configuration file is malformed or fails validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BrfdbError {
    /// Creates a port discovery error.
    pub fn port_discovery(
        bridge: impl Into<String>,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::PortDiscovery {
            bridge: bridge.into(),
            path: path.into(),
            source,
        }
    }

    /// Creates a table read error.
    pub fn table_read(
        bridge: impl Into<String>,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::TableRead {
            bridge: bridge.into(),
            path: path.into(),
            source,
        }
    }

    /// Returns true if the port directory could not be listed.
    pub fn is_port_discovery(&self) -> bool {
        matches!(self, BrfdbError::PortDiscovery { .. })
    }

    /// Returns true if the forwarding table could not be read.
    pub fn is_table_read(&self) -> bool {
        matches!(self, BrfdbError::TableRead { .. })
    }

    /// Bridge the failure relates to, if any.
    pub fn bridge(&self) -> Option<&str> {
        match self {
            BrfdbError::PortDiscovery { bridge, .. } | BrfdbError::TableRead { bridge, .. } => {
                Some(bridge.as_str())
            }
            _ => None,
        }
    }
}
