//! Element IDs (RFC 8794, 5).
//!
//! The ID is resolved by the surrounding framework; the float element only
//! compares IDs to decide whether two elements are of the same type.

use core::fmt;

/// Raw EBML Element ID including its VINT_MARKER bits, e.g. `0x4489` for
/// the Matroska `Duration` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ElementId(u32);

impl ElementId {
    /// Wraps a raw ID value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw ID value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Encoded length of the ID in octets (1..=4), derived from the
    /// position of the VINT_MARKER in the leading byte.
    ///
    /// Returns `None` if no valid leading byte exists (ID 0 or a leading
    /// byte without marker in the upper nibble).
    pub fn encoded_len(self) -> Option<u8> {
        let bytes = self.0.to_be_bytes();
        // Fuehrendes Nicht-Null-Byte bestimmt die Laenge.
        let first = bytes.iter().position(|&b| b != 0)?;
        let len = 4 - first as u8;
        let marker = bytes[first].leading_zeros() as u8 + 1;
        (marker == len).then_some(len)
    }
}

impl From<u32> for ElementId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}
