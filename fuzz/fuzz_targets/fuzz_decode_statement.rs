#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decoding is total: any text yields a statement.
        let _ = mt940_pl::decode_statement(s);
    }
});
