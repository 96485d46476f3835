/// NDJSON diagnostic records emitted on the serial console.
///
/// One JSON object per line. Uses `heapless` types for no_std/no-alloc
/// operation. Nothing on the device parses these; they exist for host-side
/// tooling watching the serial port.
use heapless::{String, Vec};
use serde::Serialize;

/// Maximum length for MAC address strings ("AA:BB:CC:DD:EE:FF")
pub type MacString = String<18>;

/// Maximum length for SSID strings
pub type NameString = String<33>;

/// Messages written by the device
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum DeviceMessage<'a> {
    /// One access point from the current scan
    #[serde(rename = "device")]
    Device {
        /// Position in the scan, starting at 1
        idx: u16,
        ssid: &'a NameString,
        mac: &'a MacString,
        rssi: i32,
        ch: u8,
        /// Whether the address passed the filter
        #[serde(rename = "match")]
        matched: bool,
    },
    /// Summary of a completed cycle
    #[serde(rename = "cycle")]
    Cycle {
        /// Access points seen by the scan
        found: u16,
        /// Access points that passed the filter
        matched: u16,
        /// Distinct addresses in the signal table
        tracked: u32,
        /// Address with the strongest recorded signal
        #[serde(skip_serializing_if = "Option::is_none")]
        nearest: Option<&'a str>,
        /// Signal magnitude of `nearest`
        #[serde(skip_serializing_if = "Option::is_none")]
        nearest_rssi: Option<u32>,
    },
    /// Boot banner
    #[serde(rename = "status")]
    Status {
        /// Active filter, disabled segments shown as `**`
        filter: &'a MacString,
        /// Number of indicator LEDs
        leds: u8,
        /// Board identifier
        board: &'static str,
        /// Firmware version
        version: &'static str,
    },
}

/// Firmware version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum size of a serialized JSON message
pub const MAX_MSG_LEN: usize = 256;

/// Buffer type for serialized JSON messages
pub type MsgBuffer = Vec<u8, MAX_MSG_LEN>;
