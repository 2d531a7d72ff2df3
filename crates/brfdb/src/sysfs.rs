//! Locations of the bridge pseudo-files under sysfs.

use std::path::{Path, PathBuf};

/// Default root of the network class directory.
pub const SYS_CLASS_NET: &str = "/sys/class/net";

/// Per-bridge directory whose entries are the bridge's port names.
pub const PORTS_DIR: &str = "brif";

/// Per-bridge binary forwarding table.
pub const FORWARD_FILE: &str = "brforward";

/// Resolves bridge pseudo-file paths relative to a sysfs root.
///
/// The root is configurable so a fabricated tree can stand in for
/// `/sys/class/net`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsLayout {
    root: PathBuf,
}

impl SysfsLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding one subdirectory per network device.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<bridge>/brif`
    pub fn ports_dir(&self, bridge: &str) -> PathBuf {
        self.root.join(bridge).join(PORTS_DIR)
    }

    /// `<root>/<bridge>/brforward`
    pub fn forward_table(&self, bridge: &str) -> PathBuf {
        self.root.join(bridge).join(FORWARD_FILE)
    }
}

impl Default for SysfsLayout {
    fn default() -> Self {
        Self::new(SYS_CLASS_NET)
    }
}
