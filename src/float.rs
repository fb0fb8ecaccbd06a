//! Float Element (RFC 8794, 7.3).
//!
//! The payload is a single IEEE-754 number in big-endian byte order, either
//! binary32 (4 octets) or binary64 (8 octets). Any other declared length is
//! invalid for this element type.
//!
//! The value is always held as `f64`, also for [`Precision::Single`]; it is
//! narrowed to `f32` only while rendering, so intermediate manipulation does
//! not lose precision. Conversion between a float and its octets goes through
//! `to_bits`/`from_bits`, never a numeric cast, which keeps signed zero,
//! infinities and NaN encodings intact.
//!
//! # Beispiel
//!
//! ```
//! use std::io::Cursor;
//! use ebml_float::{ElementId, FloatElement, Precision, ScopeMode};
//!
//! let mut duration = FloatElement::new(ElementId::new(0x4489), Precision::Single);
//! duration.set_value(1.5);
//!
//! let mut bytes = Vec::new();
//! assert_eq!(duration.render_data(&mut bytes).unwrap(), 4);
//! assert_eq!(bytes, [0x3F, 0xC0, 0x00, 0x00]);
//!
//! let mut parsed = FloatElement::new(ElementId::new(0x4489), Precision::Single);
//! parsed.read_data(&mut Cursor::new(bytes), ScopeMode::AllData).unwrap();
//! assert_eq!(parsed.value(), 1.5);
//! ```

use core::cmp::Ordering;
use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, trace, warn};

use crate::element::{Element, ReadSeek};
use crate::id::ElementId;
use crate::options::{MalformedSizePolicy, ReadOptions};
use crate::precision::Precision;
use crate::scope::ScopeMode;
use crate::{Error, Result};

/// An EBML element carrying one floating-point value.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatElement {
    id: ElementId,
    precision: Precision,
    /// Declared payload size in octets; 4 or 8 for a well-formed element.
    size: u64,
    value: f64,
    value_is_set: bool,
    default_value: f64,
    default_is_set: bool,
}

impl FloatElement {
    /// Creates an element without default; the value is unset until
    /// [`set_value`](Self::set_value) or a successful parse.
    pub fn new(id: ElementId, precision: Precision) -> Self {
        Self {
            id,
            precision,
            size: precision.byte_len(),
            value: 0.0,
            value_is_set: false,
            default_value: 0.0,
            default_is_set: false,
        }
    }

    /// Creates an element whose value and default are both `default`.
    pub fn with_default(id: ElementId, default: f64, precision: Precision) -> Self {
        Self {
            value: default,
            value_is_set: true,
            default_value: default,
            default_is_set: true,
            ..Self::new(id, precision)
        }
    }

    /// Type identifier of this element.
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Changes the precision and resets the declared size to its width.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
        self.size = precision.byte_len();
    }

    /// Declared payload size in octets.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Overrides the declared payload size, normally with the length decoded
    /// from the element header. Sizes other than 4 and 8 are accepted here
    /// and rejected by render/parse.
    pub fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    /// Whether the declared size is one a float payload can have.
    pub fn is_valid_size(&self) -> bool {
        Precision::from_size(self.size).is_some()
    }

    /// Assigns the default value.
    ///
    /// Returns [`Error::DefaultAlreadySet`] if a default exists already.
    pub fn set_default_value(&mut self, value: f64) -> Result<()> {
        if self.default_is_set {
            return Err(Error::DefaultAlreadySet);
        }
        self.default_value = value;
        self.default_is_set = true;
        Ok(())
    }

    /// Returns the default value, or [`Error::DefaultNotSet`].
    pub fn default_value(&self) -> Result<f64> {
        if !self.default_is_set {
            return Err(Error::DefaultNotSet);
        }
        Ok(self.default_value)
    }

    pub fn default_is_set(&self) -> bool {
        self.default_is_set
    }

    /// Returns the stored value as is (0.0 if nothing was set or parsed).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the value, or [`Error::ValueNotSet`] before any set or parse.
    pub fn try_value(&self) -> Result<f64> {
        if !self.value_is_set {
            return Err(Error::ValueNotSet);
        }
        Ok(self.value)
    }

    /// Assigns the value and marks it as set.
    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.value = value;
        self.value_is_set = true;
        self
    }

    pub fn value_is_set(&self) -> bool {
        self.value_is_set
    }

    /// Narrowed (lossy) view of the value.
    pub fn as_f32(&self) -> f32 {
        self.value as f32
    }

    /// Lossless view of the value.
    pub fn as_f64(&self) -> f64 {
        self.value
    }

    /// True when a default exists and the value equals it.
    pub fn is_default_value(&self) -> bool {
        self.default_is_set && self.value == self.default_value
    }

    /// Payload size this element occupies when rendered.
    ///
    /// Returns 0 when `with_default` is false and the value equals the
    /// default: such elements are omitted from the stream entirely.
    pub fn update_size(&self, with_default: bool) -> u64 {
        if !with_default && self.is_default_value() {
            return 0;
        }
        self.size
    }

    /// Writes the payload, big-endian, and returns the octets written.
    ///
    /// Returns [`Error::InvalidFloatSize`] without writing anything if the
    /// declared size is neither 4 nor 8.
    pub fn render_data<W: Write + ?Sized>(&self, output: &mut W) -> Result<u64> {
        match Precision::from_size(self.size) {
            Some(Precision::Single) => {
                let bits = (self.value as f32).to_bits();
                output.write_u32::<BigEndian>(bits)?;
                trace!("float {}: rendered {bits:#010X}", self.id);
            }
            Some(Precision::Double) => {
                let bits = self.value.to_bits();
                output.write_u64::<BigEndian>(bits)?;
                trace!("float {}: rendered {bits:#018X}", self.id);
            }
            None => return Err(Error::InvalidFloatSize(self.size)),
        }
        Ok(self.size)
    }

    /// Renders the payload unless [`update_size`](Self::update_size) omits it.
    ///
    /// Returns the octets written; 0 for an omitted default value.
    pub fn render<W: Write + ?Sized>(&self, output: &mut W, with_default: bool) -> Result<u64> {
        if self.update_size(with_default) == 0 {
            debug!("float {}: default value omitted", self.id);
            return Ok(0);
        }
        self.render_data(output)
    }

    /// Reads the payload with default [`ReadOptions`].
    pub fn read_data<R: Read + Seek + ?Sized>(&mut self, input: &mut R, scope: ScopeMode) -> Result<u64> {
        self.read_data_with_options(input, scope, &ReadOptions::default())
    }

    /// Reads the payload and returns the number of octets it spans.
    ///
    /// With [`ScopeMode::NoData`] the stream is not touched. A declared size
    /// other than 4 or 8 is handled according to
    /// [`ReadOptions::malformed_size`]. On a short read the element keeps its
    /// previous state.
    pub fn read_data_with_options<R: Read + Seek + ?Sized>(
        &mut self,
        input: &mut R,
        scope: ScopeMode,
        options: &ReadOptions,
    ) -> Result<u64> {
        if !scope.reads_payload() {
            return Ok(self.size);
        }

        let value = match Precision::from_size(self.size) {
            Some(Precision::Single) => {
                let bits = input.read_u32::<BigEndian>()?;
                f64::from(f32::from_bits(bits))
            }
            Some(Precision::Double) => f64::from_bits(input.read_u64::<BigEndian>()?),
            None => return self.handle_malformed_size(input, options),
        };

        trace!("float {}: parsed {value}", self.id);
        self.value = value;
        self.value_is_set = true;
        Ok(self.size)
    }

    fn handle_malformed_size<R: Seek + ?Sized>(&self, input: &mut R, options: &ReadOptions) -> Result<u64> {
        match options.malformed_size() {
            MalformedSizePolicy::Fail => Err(Error::InvalidFloatSize(self.size)),
            MalformedSizePolicy::Skip => {
                // Groessen jenseits von i64 kann kein Stream ueberspringen.
                let offset = i64::try_from(self.size).map_err(|_| Error::InvalidFloatSize(self.size))?;
                input.seek(SeekFrom::Current(offset))?;
                warn!(
                    "float {}: invalid float size {}, skipped payload",
                    self.id, self.size
                );
                Ok(self.size)
            }
        }
    }

    /// True iff `other` has the same ID and this value is smaller.
    ///
    /// Elements of different types are never ordered against each other.
    pub fn is_smaller_than(&self, other: &FloatElement) -> bool {
        self.id == other.id && self.value < other.value
    }

    /// Value ordering between elements of the same ID; `None` across IDs or
    /// when a NaN is involved.
    pub fn partial_cmp_value(&self, other: &FloatElement) -> Option<Ordering> {
        if self.id != other.id {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl From<&FloatElement> for f64 {
    fn from(element: &FloatElement) -> Self {
        element.as_f64()
    }
}

impl From<&FloatElement> for f32 {
    fn from(element: &FloatElement) -> Self {
        element.as_f32()
    }
}

impl Element for FloatElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    fn value_is_set(&self) -> bool {
        self.value_is_set
    }

    fn default_is_set(&self) -> bool {
        self.default_is_set
    }

    fn is_default_value(&self) -> bool {
        FloatElement::is_default_value(self)
    }

    fn update_size(&self, with_default: bool) -> u64 {
        FloatElement::update_size(self, with_default)
    }

    fn render_data(&self, output: &mut dyn Write) -> Result<u64> {
        FloatElement::render_data(self, output)
    }

    fn read_data(
        &mut self,
        input: &mut dyn ReadSeek,
        scope: ScopeMode,
        options: &ReadOptions,
    ) -> Result<u64> {
        self.read_data_with_options(input, scope, options)
    }
}
