//! Forwarding table loading, filtering and ordering.

use crate::error::{BrfdbError, Result};
use crate::ports::PortMap;
use crate::record::{records, FdbRecord, RECORD_LEN};
use crate::sysfs::SysfsLayout;
use std::fs;
use tracing::debug;

/// A learned (non-local) forwarding table entry, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FdbEntry {
    /// Port name; empty if the port index did not resolve
    pub port: String,
    /// Lowercase colon-separated MAC address
    pub mac: String,
    /// Seconds since the address was last seen
    pub age: f64,
}

impl FdbEntry {
    /// Builds a visible entry from a record, or `None` for local records.
    pub fn from_record(record: &FdbRecord, ports: &PortMap) -> Option<Self> {
        if record.is_local() {
            debug!(mac = %record.mac, "Skipping local entry");
            return None;
        }

        let index = usize::from(record.port_no);
        let port = match ports.get(index) {
            Some(name) => name.to_string(),
            None => {
                debug!(mac = %record.mac, port_no = record.port_no, "Unknown port index");
                String::new()
            }
        };

        Some(Self {
            port,
            mac: record.mac.to_string(),
            age: record.age_secs(),
        })
    }
}

/// Raw contents of a bridge's `brforward` file.
#[derive(Debug, Clone, Default)]
pub struct ForwardingTable {
    raw: Vec<u8>,
}

impl ForwardingTable {
    /// Reads `<root>/<bridge>/brforward` in full.
    ///
    /// Fails with [`BrfdbError::TableRead`] if the file cannot be read.
    pub fn read(layout: &SysfsLayout, bridge: &str) -> Result<Self> {
        let path = layout.forward_table(bridge);
        let raw = fs::read(&path).map_err(|e| BrfdbError::table_read(bridge, &path, e))?;

        debug!(
            bridge,
            bytes = raw.len(),
            records = raw.len() / RECORD_LEN,
            "Read forwarding table"
        );
        Ok(Self::from_bytes(raw))
    }

    /// Wraps an already loaded buffer.
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    /// Number of complete records, local ones included.
    pub fn record_count(&self) -> usize {
        self.raw.len() / RECORD_LEN
    }

    /// Visible entries in table order, with port names resolved.
    pub fn entries<'a>(&'a self, ports: &'a PortMap) -> impl Iterator<Item = FdbEntry> + 'a {
        records(&self.raw).filter_map(move |record| FdbEntry::from_record(&record, ports))
    }
}

/// Orders entries by MAC string. Equal addresses keep their relative order.
pub fn sort_entries(entries: &mut [FdbEntry]) {
    entries.sort_by(|a, b| a.mac.cmp(&b.mac));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn push_record(buf: &mut Vec<u8>, mac: [u8; 6], port: u8, local: u8, age: [u8; 2]) {
        buf.extend_from_slice(&mac);
        buf.push(port);
        buf.push(local);
        buf.extend_from_slice(&age);
        buf.extend_from_slice(&[0u8; 6]);
    }

    fn entry(port: &str, mac: &str, age: f64) -> FdbEntry {
        FdbEntry {
            port: port.to_string(),
            mac: mac.to_string(),
            age,
        }
    }

    #[test]
    fn test_local_records_filtered() {
        let ports = PortMap::from_names(["eth0"]);
        let mut buf = Vec::new();
        push_record(&mut buf, [0x02, 0, 0, 0, 0, 1], 1, 1, [0, 0]);
        push_record(&mut buf, [0x02, 0, 0, 0, 0, 2], 1, 0, [50, 0]);
        push_record(&mut buf, [0x02, 0, 0, 0, 0, 3], 1, 0xff, [0, 0]);

        let table = ForwardingTable::from_bytes(buf);
        assert_eq!(table.record_count(), 3);

        let entries: Vec<_> = table.entries(&ports).collect();
        assert_eq!(entries, vec![entry("eth0", "02:00:00:00:00:02", 0.5)]);
    }

    #[test]
    fn test_unknown_port_resolves_empty() {
        let ports = PortMap::from_names(["eth0"]);
        let mut buf = Vec::new();
        push_record(&mut buf, [0xaa; 6], 9, 0, [0, 0]);
        push_record(&mut buf, [0xbb; 6], 0, 0, [0, 0]);

        let table = ForwardingTable::from_bytes(buf);
        let ports_seen: Vec<_> = table.entries(&ports).map(|e| e.port).collect();
        assert_eq!(ports_seen, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_mac_shape() {
        let ports = PortMap::default();
        let mut buf = Vec::new();
        push_record(&mut buf, [0x00, 0x1B, 0x21, 0xAF, 0x09, 0xF0], 1, 0, [0, 0]);
        push_record(&mut buf, [0xFF; 6], 1, 0, [0, 0]);

        let table = ForwardingTable::from_bytes(buf);
        for e in table.entries(&ports) {
            assert_eq!(e.mac.len(), 17);
            assert_eq!(e.mac.matches(':').count(), 5);
            assert!(e
                .mac
                .chars()
                .filter(|c| *c != ':')
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_entries_restart_from_scratch() {
        let ports = PortMap::from_names(["eth0"]);
        let mut buf = Vec::new();
        push_record(&mut buf, [1; 6], 1, 0, [0, 0]);
        let table = ForwardingTable::from_bytes(buf);

        assert_eq!(table.entries(&ports).count(), 1);
        assert_eq!(table.entries(&ports).count(), 1);
    }

    #[test]
    fn test_sort_by_mac_string() {
        let mut entries = vec![
            entry("eth0", "aa:bb:cc:dd:ee:ff", 0.0),
            entry("eth1", "00:11:22:33:44:55", 2.0),
            entry("eth2", "0a:00:00:00:00:00", 1.0),
        ];
        sort_entries(&mut entries);

        let macs: Vec<_> = entries.iter().map(|e| e.mac.as_str()).collect();
        assert_eq!(
            macs,
            vec!["00:11:22:33:44:55", "0a:00:00:00:00:00", "aa:bb:cc:dd:ee:ff"]
        );
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut entries = vec![
            entry("eth1", "bb:00:00:00:00:00", 1.0),
            entry("eth0", "aa:00:00:00:00:00", 1.0),
            entry("eth2", "bb:00:00:00:00:00", 2.0),
            entry("eth3", "aa:00:00:00:00:00", 3.0),
        ];
        sort_entries(&mut entries);

        let order: Vec<_> = entries.iter().map(|e| e.port.as_str()).collect();
        assert_eq!(order, vec!["eth0", "eth3", "eth1", "eth2"]);

        let once = entries.clone();
        sort_entries(&mut entries);
        assert_eq!(entries, once);
    }
}
