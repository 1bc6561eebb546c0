#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; a parsed value prints back to its input.
        if let Ok(iban) = ibancheck::parse(s) {
            assert_eq!(iban.to_string(), s);
        }
    }
});
