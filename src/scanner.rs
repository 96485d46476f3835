/// WiFi scan results and the radio seam.
///
/// Each firmware wraps its WiFi driver in a [`WifiScanner`] that performs one
/// blocking active scan and converts the driver's access point records into
/// [`DiscoveredDevice`]s. Every record the driver reports is kept, so the
/// filter sees the whole scan.
use alloc::vec::Vec;
use core::fmt::Write;

use crate::mask::{AddressMask, MacAddress};
use crate::protocol::{MacString, NameString};

/// One access point seen by a scan. Lives for a single cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDevice {
    /// SSID, display only
    pub name: NameString,
    pub address: MacAddress,
    /// Raw RSSI in dBm (negative)
    pub signal: i32,
    pub channel: u8,
}

impl DiscoveredDevice {
    /// Build a device record, truncating `name` to the SSID limit.
    pub fn new(name: &str, address: MacAddress, signal: i32, channel: u8) -> Self {
        let mut ssid = NameString::new();
        for c in name.chars() {
            if ssid.push(c).is_err() {
                break;
            }
        }
        Self {
            name: ssid,
            address,
            signal,
            channel,
        }
    }

    /// Canonical `AA:BB:CC:DD:EE:FF` form of the address.
    pub fn mac_string(&self) -> MacString {
        let mut buf = MacString::new();
        format_mac(&self.address, &mut buf);
        buf
    }
}

/// Result set of one scan, in the order the radio reported it
pub type ScanResults = Vec<DiscoveredDevice>;

/// A radio that can perform one synchronous scan.
pub trait WifiScanner {
    type Error: core::fmt::Debug;

    /// Scan for access points. An empty result set is not an error.
    fn scan(&mut self) -> Result<ScanResults, Self::Error>;
}

impl<T: WifiScanner + ?Sized> WifiScanner for &mut T {
    type Error = T::Error;

    fn scan(&mut self) -> Result<ScanResults, Self::Error> {
        (**self).scan()
    }
}

/// Format a 6-byte MAC address into "AA:BB:CC:DD:EE:FF" string
pub fn format_mac(mac: &MacAddress, buf: &mut MacString) {
    buf.clear();
    let _ = write!(
        buf,
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
}

/// Format a mask like a MAC address, disabled segments shown as `**`.
pub fn format_mask(mask: &AddressMask, buf: &mut MacString) {
    buf.clear();
    for (i, (&byte, &enabled)) in mask.reference.iter().zip(mask.enabled.iter()).enumerate() {
        if i > 0 {
            let _ = buf.push(':');
        }
        if enabled {
            let _ = write!(buf, "{:02X}", byte);
        } else {
            let _ = buf.push_str("**");
        }
    }
}
