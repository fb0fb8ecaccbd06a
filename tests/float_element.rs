//! Float element payloads inside a byte stream, driven the way an element
//! tree walker drives them: one shared cursor, sizes decided upstream.

use std::io::{Cursor, Seek, SeekFrom};

use ebml_float::{
    Element, ElementId, Error, FloatElement, MalformedSizePolicy, Precision, ReadOptions,
    ScopeMode,
};

const DURATION: ElementId = ElementId::new(0x4489);
const SAMPLING_FREQUENCY: ElementId = ElementId::new(0xB5);
const OUTPUT_SAMPLING_FREQUENCY: ElementId = ElementId::new(0x78B5);

fn element(id: ElementId, value: f64, precision: Precision) -> FloatElement {
    let mut e = FloatElement::new(id, precision);
    e.set_value(value);
    e
}

/// Mehrere Payloads hintereinander im selben Stream.
#[test]
fn sequential_payloads_in_one_stream() {
    let elements = [
        element(DURATION, 1.5, Precision::Single),
        element(SAMPLING_FREQUENCY, 48000.0, Precision::Double),
        element(OUTPUT_SAMPLING_FREQUENCY, -0.0, Precision::Single),
        element(DURATION, f64::INFINITY, Precision::Double),
    ];

    let mut stream = Vec::new();
    let mut written = 0;
    for e in &elements {
        written += e.render_data(&mut stream).unwrap();
    }
    assert_eq!(written, 24);
    assert_eq!(stream.len(), 24);

    let mut cursor = Cursor::new(stream);
    for expected in &elements {
        let mut e = FloatElement::new(expected.id(), expected.precision());
        let consumed = e.read_data(&mut cursor, ScopeMode::AllData).unwrap();
        assert_eq!(consumed, expected.size());
        assert_eq!(e.value().to_bits(), expected.value().to_bits());
    }
    assert_eq!(cursor.position(), 24);
}

/// Ein korruptes Element wird uebersprungen; der Walk geht dahinter weiter.
#[test]
fn malformed_element_is_skipped_and_walk_continues() {
    let mut stream = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00];
    stream.extend_from_slice(&[0x3F, 0xC0, 0x00, 0x00]);

    let mut cursor = Cursor::new(stream);

    let mut corrupt = FloatElement::new(DURATION, Precision::Double);
    corrupt.set_size(5);
    assert_eq!(corrupt.read_data(&mut cursor, ScopeMode::AllData).unwrap(), 5);
    assert!(!corrupt.value_is_set());
    assert_eq!(cursor.position(), 5);

    let mut next = FloatElement::new(SAMPLING_FREQUENCY, Precision::Single);
    assert_eq!(next.read_data(&mut cursor, ScopeMode::AllData).unwrap(), 4);
    assert_eq!(next.value(), 1.5);
}

#[test]
fn malformed_element_fails_under_strict_policy() {
    let mut cursor = Cursor::new(vec![0u8; 16]);
    let opts = ReadOptions::default().with_malformed_size(MalformedSizePolicy::Fail);

    let mut e = FloatElement::new(DURATION, Precision::Double);
    e.set_size(10);
    assert_eq!(
        e.read_data_with_options(&mut cursor, ScopeMode::AllData, &opts)
            .unwrap_err(),
        Error::InvalidFloatSize(10)
    );
    assert_eq!(cursor.position(), 0);
}

/// Size-only Pass ueber den Stream: Positionen wandert der Walker selbst.
#[test]
fn size_only_pass_leaves_stream_alone() {
    let mut cursor = Cursor::new(vec![0x3F, 0xF8, 0, 0, 0, 0, 0, 0]);
    let mut e = FloatElement::new(DURATION, Precision::Double);

    let size = e.read_data(&mut cursor, ScopeMode::NoData).unwrap();
    assert_eq!(size, 8);
    assert_eq!(cursor.position(), 0);

    cursor.seek(SeekFrom::Current(size as i64)).unwrap();
    assert_eq!(cursor.position(), 8);
    assert!(!e.value_is_set());
}

#[test]
fn truncated_stream_reports_premature_end() {
    let mut cursor = Cursor::new(vec![0x3F, 0xC0]);
    let mut e = FloatElement::new(DURATION, Precision::Single);
    assert_eq!(
        e.read_data(&mut cursor, ScopeMode::AllData).unwrap_err(),
        Error::PrematureEndOfStream
    );
    assert!(!e.value_is_set());
}

/// Rendering mit Default-Unterdrueckung ueber das Trait-Interface.
#[test]
fn tree_render_omits_defaults() {
    let mut at_default = FloatElement::with_default(SAMPLING_FREQUENCY, 8000.0, Precision::Single);
    let mut changed = FloatElement::with_default(OUTPUT_SAMPLING_FREQUENCY, 8000.0, Precision::Double);
    changed.set_value(16000.0);

    let children: [&mut dyn Element; 2] = [&mut at_default, &mut changed];

    let mut stream: Vec<u8> = Vec::new();
    let mut total = 0;
    for child in children {
        if child.update_size(false) == 0 {
            continue;
        }
        total += child.render_data(&mut stream).unwrap();
    }

    assert_eq!(total, 8);
    assert_eq!(stream, 16000.0f64.to_bits().to_be_bytes());
}

#[test]
fn render_invalid_size_writes_nothing() {
    let mut e = element(DURATION, 3.25, Precision::Single);
    e.set_size(5);
    let mut stream = vec![0xAA];
    assert_eq!(e.render_data(&mut stream).unwrap_err(), Error::InvalidFloatSize(5));
    assert_eq!(stream, [0xAA]);
}

/// Sortierung gleichartiger Geschwister nach Wert.
#[test]
fn siblings_sort_by_value() {
    let mut siblings = vec![
        element(DURATION, 3.0, Precision::Double),
        element(DURATION, -1.0, Precision::Double),
        element(DURATION, 2.5, Precision::Single),
    ];
    siblings.sort_by(|a, b| {
        if a.is_smaller_than(b) {
            std::cmp::Ordering::Less
        } else if b.is_smaller_than(a) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    });
    let values: Vec<f64> = siblings.iter().map(FloatElement::value).collect();
    assert_eq!(values, [-1.0, 2.5, 3.0]);

    let other = element(SAMPLING_FREQUENCY, 100.0, Precision::Double);
    assert!(siblings.iter().all(|s| !s.is_smaller_than(&other) && !other.is_smaller_than(s)));
}
