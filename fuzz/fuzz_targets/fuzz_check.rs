#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Compact → parse → validate must not panic at any step.
        let _ = ibancheck::check(&ibancheck::compact(s));
    }
});
