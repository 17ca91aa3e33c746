#![no_main]

use hlr_units::units::{ConversionState, Edit, Field, tick};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as a sequence of edits: 1 byte field selector + 4 byte f32
    let mut state = ConversionState::default();
    for chunk in data.chunks_exact(5) {
        let field = if chunk[0] & 1 == 0 { Field::Blender } else { Field::Source };
        let value = f32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);

        state = tick(state, Some(Edit::new(field, value)));

        // The edited field always holds exactly what was typed
        assert_eq!(state.get(field).to_bits(), value.to_bits());

        // A following no-op tick changes nothing
        assert!(tick(state, None).bit_eq(&state));
    }
});
