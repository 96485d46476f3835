//! Hardware-address mask filter.
//!
//! A mask is a reference address plus one enable flag per segment. An
//! address passes when every enabled segment equals the reference byte at
//! the same position. Disabled segments are never looked at, so an
//! all-disabled mask accepts every address.

/// Number of byte segments in a MAC address
pub const MAC_SEGMENTS: usize = 6;

/// A 6-byte hardware address
pub type MacAddress = [u8; MAC_SEGMENTS];

/// Reference address with per-segment enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressMask {
    pub reference: MacAddress,
    pub enabled: [bool; MAC_SEGMENTS],
}

impl AddressMask {
    pub const fn new(reference: MacAddress, enabled: [bool; MAC_SEGMENTS]) -> Self {
        Self { reference, enabled }
    }

    /// Mask enabling the leading `segments` segments of `reference`.
    ///
    /// `prefix(oui, 3)` matches an OUI. Values above 6 enable every segment.
    pub const fn prefix(reference: MacAddress, segments: usize) -> Self {
        let mut enabled = [false; MAC_SEGMENTS];
        let mut i = 0;
        while i < MAC_SEGMENTS && i < segments {
            enabled[i] = true;
            i += 1;
        }
        Self { reference, enabled }
    }

    /// Mask with no enabled segments.
    pub const fn accept_all() -> Self {
        Self {
            reference: [0; MAC_SEGMENTS],
            enabled: [false; MAC_SEGMENTS],
        }
    }

    /// Check `address` against this mask. See [`matches`].
    pub fn matches(&self, address: &MacAddress) -> bool {
        matches(address, self)
    }
}

/// Returns true if every enabled segment of `mask` equals the same segment
/// of `address`. Whole-byte comparison only.
pub fn matches(address: &MacAddress, mask: &AddressMask) -> bool {
    address
        .iter()
        .zip(mask.reference.iter())
        .zip(mask.enabled.iter())
        .all(|((&byte, &reference), &enabled)| !enabled || byte == reference)
}
