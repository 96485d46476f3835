/// Compile-time configuration for the counter.
///
/// The filter compares the MAC address of every scanned access point
/// against the enabled segments of `MAC_FILTER`. Segments are whole bytes:
/// `1A:2B:3C:4D:5E:6F` is written `[0x1A, 0x2B, 0x3C, 0x4D, 0x5E, 0x6F]`.
/// Enable the first three segments to match an OUI, all six to look for a
/// single device, or any other combination.
use crate::mask::AddressMask;

/// Reference address the enabled segments are compared against.
pub const MAC_FILTER: [u8; 6] = [0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x00];

/// Segment enables, position-aligned with `MAC_FILTER`.
pub const APPLY_FILTER: [bool; 6] = [true, true, true, false, false, false];

/// The mask built from `MAC_FILTER` and `APPLY_FILTER`.
pub const ADDRESS_MASK: AddressMask = AddressMask::new(MAC_FILTER, APPLY_FILTER);

/// Render the match count on the indicator LEDs.
pub const DISPLAY_LEDS: bool = true;

/// Log a numbered line for every device found by each scan.
pub const PRINT_FOUND_DEVICES: bool = true;

/// Also emit device and cycle records as NDJSON lines.
pub const REPORT_JSON: bool = false;

/// Pause between scan cycles in milliseconds.
pub const SCAN_INTERVAL_MS: u64 = 100;

/// Diagnostic output toggles for a scan cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Log each discovered device, numbered from 1
    pub print_found_devices: bool,
    /// Emit NDJSON records alongside the human-readable log
    pub json: bool,
}

impl ReportConfig {
    pub const fn new() -> Self {
        Self {
            print_found_devices: PRINT_FOUND_DEVICES,
            json: REPORT_JSON,
        }
    }

    /// No per-device lines and no NDJSON, summary only.
    pub const fn quiet() -> Self {
        Self {
            print_found_devices: false,
            json: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
