//! Read options for float elements.
//!
//! # Beispiel
//!
//! ```
//! use ebml_float::options::{MalformedSizePolicy, ReadOptions};
//!
//! let opts = ReadOptions::default().with_malformed_size(MalformedSizePolicy::Fail);
//! assert_eq!(opts.malformed_size(), MalformedSizePolicy::Fail);
//! ```

/// What a parse does when the declared size is neither 4 nor 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedSizePolicy {
    /// Seek past the declared size, leave the value unset and report success,
    /// so the enclosing tree walk can continue behind the corrupt element.
    #[default]
    Skip,
    /// Report [`Error::InvalidFloatSize`](crate::Error::InvalidFloatSize)
    /// without consuming any bytes, the same way rendering does.
    Fail,
}

/// Options controlling how float payloads are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    malformed_size: MalformedSizePolicy,
}

impl ReadOptions {
    /// Sets the malformed-size policy.
    pub fn with_malformed_size(mut self, policy: MalformedSizePolicy) -> Self {
        self.malformed_size = policy;
        self
    }

    /// Returns the malformed-size policy.
    pub fn malformed_size(&self) -> MalformedSizePolicy {
        self.malformed_size
    }

    /// Options that reject malformed sizes instead of skipping them.
    pub fn strict() -> Self {
        Self::default().with_malformed_size(MalformedSizePolicy::Fail)
    }
}
