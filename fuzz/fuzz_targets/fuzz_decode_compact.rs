#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = mt940_pl::mt940::decode_compact(s);
        let _ = mt940_pl::mt940::decode_opening_balance(s);
    }
});
