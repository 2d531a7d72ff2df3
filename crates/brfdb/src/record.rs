//! Raw `brforward` record decoding.
//!
//! The kernel exposes the bridge forwarding database as an array of
//! fixed-size records (`struct __fdb_entry`):
//!
//! ```text
//!  offset  size  field
//!  0       6     MAC address
//!  6       1     port number (low byte)
//!  7       1     is_local
//!  8       2     ageing timer, little-endian, 1/100 s
//!  10      6     reserved
//! ```
//!
//! Only records that are not local are shown to the user.

use crate::mac::MacAddress;
use tracing::debug;

/// Size of one forwarding table record in bytes.
pub const RECORD_LEN: usize = 16;

/// Ageing timer ticks per second.
pub const TICKS_PER_SEC: f64 = 100.0;

/// One decoded forwarding table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdbRecord {
    pub mac: MacAddress,
    pub port_no: u8,
    /// Raw flag byte; any non-zero value marks a local entry
    pub is_local: u8,
    /// Ageing timer in ticks
    pub ageing_timer: u16,
}

impl FdbRecord {
    /// Decodes a single 16-byte window.
    pub fn decode(window: &[u8; RECORD_LEN]) -> Self {
        let [m0, m1, m2, m3, m4, m5, port_no, is_local, age_lo, age_hi, ..] = *window;
        Self {
            mac: MacAddress::new([m0, m1, m2, m3, m4, m5]),
            port_no,
            is_local,
            ageing_timer: u16::from_le_bytes([age_lo, age_hi]),
        }
    }

    /// Returns true if the address belongs to the bridge itself.
    pub fn is_local(&self) -> bool {
        self.is_local != 0
    }

    /// Time since the address was last seen, in seconds.
    pub fn age_secs(&self) -> f64 {
        f64::from(self.ageing_timer) / TICKS_PER_SEC
    }
}

/// Decodes every complete record in `buf`.
///
/// A trailing remainder shorter than [`RECORD_LEN`] is ignored.
pub fn records(buf: &[u8]) -> impl Iterator<Item = FdbRecord> + '_ {
    let trailing = buf.len() % RECORD_LEN;
    if trailing != 0 {
        debug!(trailing, "Ignoring partial forwarding record");
    }

    buf.chunks_exact(RECORD_LEN).map(|chunk| {
        // chunks_exact only yields RECORD_LEN-sized chunks
        let mut window = [0u8; RECORD_LEN];
        window.copy_from_slice(chunk);
        FdbRecord::decode(&window)
    })
}
