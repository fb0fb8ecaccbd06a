//! Float precision (RFC 8794, 7.3).

/// Serialized width of a float element's payload.
///
/// The value itself is always held as `f64`; the precision only decides how
/// many bytes the element declares and therefore how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// IEEE-754 binary32, 4 octets.
    Single,
    /// IEEE-754 binary64, 8 octets.
    #[default]
    Double,
}

impl Precision {
    /// Payload length in octets.
    pub const fn byte_len(self) -> u64 {
        match self {
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Maps a declared payload size to its precision. Only 4 and 8 are valid.
    pub const fn from_size(size: u64) -> Option<Self> {
        match size {
            4 => Some(Self::Single),
            8 => Some(Self::Double),
            _ => None,
        }
    }
}
