//! Bridge port index resolution.
//!
//! The forwarding table identifies ports by a small integer. The names behind
//! those integers come from the bridge's `brif` directory: the first entry
//! the OS returns gets index 1, the second index 2, and so on.
//!
//! The directory is not sorted. This assumes the OS lists ports in the order
//! the kernel numbered them, which the kernel does not guarantee; the sysfs
//! interface offers no explicit index to do better.

use crate::error::{BrfdbError, Result};
use crate::sysfs::SysfsLayout;
use std::fs;
use tracing::{debug, warn};

/// Mapping from 1-based port index to port name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMap {
    /// `names[i]` is the port with index `i + 1`
    names: Vec<String>,
    /// Length of the longest name, in characters
    max_name_len: usize,
}

impl PortMap {
    /// Builds the map by listing `<root>/<bridge>/brif`.
    ///
    /// Fails with [`BrfdbError::PortDiscovery`] if the directory or any of
    /// its entries cannot be read. No partial map is returned.
    pub fn discover(layout: &SysfsLayout, bridge: &str) -> Result<Self> {
        let path = layout.ports_dir(bridge);
        debug!(bridge, path = %path.display(), "Listing bridge ports");

        let dir = fs::read_dir(&path)
            .map_err(|e| BrfdbError::port_discovery(bridge, &path, e))?;

        let mut names = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|e| BrfdbError::port_discovery(bridge, &path, e))?;
            let name = entry.file_name();
            match name.to_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    warn!(bridge, name = ?name, "Port name is not valid UTF-8");
                    names.push(name.to_string_lossy().into_owned());
                }
            }
        }

        let map = Self::from_names(names);
        debug!(bridge, ports = map.len(), width = map.max_name_len(), "Discovered bridge ports");
        Ok(map)
    }

    /// Builds the map from names in discovery order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let max_name_len = names
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            names,
            max_name_len,
        }
    }

    /// Port name for `index`, or `None` if no port has it.
    ///
    /// Index 0 is never assigned.
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// Port name for `index`, empty if unknown.
    pub fn name(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }

    /// Length of the longest port name; 0 when the bridge has no ports.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Number of ports.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the bridge has no ports.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(index, name)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }
}
