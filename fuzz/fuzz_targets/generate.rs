#![no_main]

use libfuzzer_sys::fuzz_target;
use strenum::GenerationError;

fuzz_target!(|data: &[u8]| {
    // Ignore invalid UTF-8; first line is the type name, the rest are comma-separated variants
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (type_name, variants) = s.split_once('\n').unwrap_or((s, ""));

    match strenum::generate(type_name, variants.split(',')) {
        Ok(source) => assert!(syn::parse_file(&source).is_ok(), "generated source does not parse"),
        Err(GenerationError::CodegenInvalid(msg)) => panic!("internal codegen error: {}", msg),
        Err(_) => {}
    }
});
