//! Parse directives passed down by the tree walker.

/// How much of an element's payload a parse call has to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeMode {
    /// Read the payload of this element but not necessarily of its children.
    /// Leaf elements treat this like [`ScopeMode::AllData`].
    PartialData,
    /// Read the complete payload.
    #[default]
    AllData,
    /// Size-only pass: the payload is not read and the stream is not touched.
    NoData,
}

impl ScopeMode {
    /// Whether payload bytes have to be read in this mode.
    pub const fn reads_payload(self) -> bool {
        !matches!(self, Self::NoData)
    }
}
