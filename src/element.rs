//! The interface the enclosing element tree drives.
//!
//! Tag identification, size decoding and tree construction live in the
//! surrounding framework; it talks to leaf elements only through
//! [`Element`], over type-erased streams.

use std::io::{Read, Seek, Write};

use crate::Result;
use crate::id::ElementId;
use crate::options::ReadOptions;
use crate::scope::ScopeMode;

/// Byte source with relative seeking, as consumed by [`Element::read_data`].
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// A leaf element whose ID and declared size were resolved upstream.
pub trait Element {
    /// Type identifier of this element.
    fn id(&self) -> ElementId;

    /// Declared payload size in octets.
    fn size(&self) -> u64;

    /// Overrides the declared payload size (set by the framework after
    /// decoding the element's length).
    fn set_size(&mut self, size: u64);

    /// Whether a value was assigned or parsed.
    fn value_is_set(&self) -> bool;

    /// Whether a default value exists.
    fn default_is_set(&self) -> bool;

    /// Whether the current value equals the default.
    fn is_default_value(&self) -> bool;

    /// Payload size this element would occupy when rendered; 0 if it would
    /// be omitted because it carries its default and `with_default` is false.
    fn update_size(&self, with_default: bool) -> u64;

    /// Writes the payload and returns the number of octets written.
    fn render_data(&self, output: &mut dyn Write) -> Result<u64>;

    /// Reads the payload and returns the number of octets it spans.
    fn read_data(
        &mut self,
        input: &mut dyn ReadSeek,
        scope: ScopeMode,
        options: &ReadOptions,
    ) -> Result<u64>;
}
