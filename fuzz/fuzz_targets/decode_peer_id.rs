#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = peerid_core::decode(data);
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = peerid_core::decode(s);
    }
});
