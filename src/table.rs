/// Signal strength table for devices that passed the filter.
///
/// Keyed by the canonical MAC string, valued by the magnitude of the last
/// RSSI seen for that address. Entries are never removed: a device that
/// stops appearing keeps its last value for the life of the process.
/// Owned by the firmware loop and passed into every cycle.
use alloc::collections::btree_map::{self, BTreeMap};

use crate::protocol::MacString;

#[derive(Debug, Default, Clone)]
pub struct SignalTable {
    entries: BTreeMap<MacString, u32>,
}

impl SignalTable {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record an observation, overwriting any previous value for `mac`.
    ///
    /// Stores `|rssi|`. Returns the previous magnitude, if any.
    pub fn record(&mut self, mac: MacString, rssi: i32) -> Option<u32> {
        self.entries.insert(mac, rssi.unsigned_abs())
    }

    /// Last recorded magnitude for `mac`.
    pub fn get(&self, mac: &str) -> Option<u32> {
        let key = MacString::try_from(mac).ok()?;
        self.entries.get(&key).copied()
    }

    pub fn contains(&self, mac: &str) -> bool {
        self.get(mac).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in address order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Entry with the smallest magnitude, i.e. the strongest signal.
    ///
    /// Ties resolve to the lowest address.
    pub fn strongest(&self) -> Option<(&str, u32)> {
        self.iter().min_by_key(|&(_, value)| value)
    }
}

/// Iterator over `(address, magnitude)` pairs
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, MacString, u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, &value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
