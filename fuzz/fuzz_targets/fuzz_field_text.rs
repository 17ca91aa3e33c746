#![no_main]

use hlr_units::controller::{FieldBindings, format_value, parse_value};
use hlr_units::Field;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text typed into a field must never panic, and anything that
    // parses must format and parse back to the same value
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(value) = parse_value(s) {
            let text = format_value(value, 3);
            let reparsed = parse_value(&text);
            assert!(reparsed.is_some(), "formatted text {text:?} did not parse");
        }

        let mut bindings = FieldBindings::default();
        let bound = bindings.edit_text(Field::Source, s);
        assert_eq!(bound, parse_value(s).is_some());
    }
});
