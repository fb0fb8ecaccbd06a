//! ebml-float – EBML Float Element (RFC 8794, 7.3)
//!
//! Holds one floating-point value with an optional default, computes its
//! payload size, renders it as big-endian binary32/binary64 and parses it
//! back. Tag and length framing belong to the surrounding element tree.
//!
//! # Beispiel
//!
//! ```
//! use std::io::Cursor;
//! use ebml_float::{ElementId, FloatElement, Precision, ScopeMode};
//!
//! let id = ElementId::new(0x4489);
//! let mut element = FloatElement::new(id, Precision::Double);
//! element.set_value(1.5);
//!
//! let mut bytes = Vec::new();
//! element.render_data(&mut bytes).unwrap();
//! assert_eq!(bytes, [0x3F, 0xF8, 0, 0, 0, 0, 0, 0]);
//!
//! let mut decoded = FloatElement::new(id, Precision::Double);
//! decoded.read_data(&mut Cursor::new(&bytes), ScopeMode::AllData).unwrap();
//! assert_eq!(decoded.value(), 1.5);
//! ```

pub mod element;
pub mod error;
pub mod float;
pub mod id;
pub mod options;
pub mod precision;
pub mod scope;

pub use error::{Error, Result};

// Public API
pub use element::{Element, ReadSeek};
pub use float::FloatElement;
pub use id::ElementId;
pub use options::{MalformedSizePolicy, ReadOptions};
pub use precision::Precision;
pub use scope::ScopeMode;
