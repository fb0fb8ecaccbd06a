#![no_main]
use libfuzzer_sys::fuzz_target;

use ebml_float::{ElementId, FloatElement, Precision, ReadOptions, ScopeMode};

fuzz_target!(|data: &[u8]| {
    let Some((&size, payload)) = data.split_first() else {
        return;
    };
    let mut element = FloatElement::new(ElementId::new(0x4489), Precision::Double);
    element.set_size(u64::from(size % 16));
    let mut cursor = std::io::Cursor::new(payload);
    let _ = element.read_data(&mut cursor, ScopeMode::AllData);
    let _ = element.read_data_with_options(&mut cursor, ScopeMode::AllData, &ReadOptions::strict());
});
