#![no_main]
use libfuzzer_sys::fuzz_target;

use ebml_float::{ElementId, FloatElement, Precision, ScopeMode};

fuzz_target!(|bits: u64| {
    let id = ElementId::new(0x4489);
    let value = f64::from_bits(bits);

    let mut double = FloatElement::new(id, Precision::Double);
    double.set_value(value);
    let mut bytes = Vec::new();
    double.render_data(&mut bytes).unwrap();

    let mut parsed = FloatElement::new(id, Precision::Double);
    parsed.read_data(&mut std::io::Cursor::new(&bytes), ScopeMode::AllData).unwrap();
    if !value.is_nan() {
        assert_eq!(parsed.value().to_bits(), bits);
    }

    let mut single = FloatElement::new(id, Precision::Single);
    single.set_value(value);
    let mut bytes = Vec::new();
    single.render_data(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 4);
});
