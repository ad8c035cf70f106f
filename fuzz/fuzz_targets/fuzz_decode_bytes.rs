#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The default candidates accept every byte sequence.
    let statement = mt940_pl::decode_bytes(data).unwrap();
    let _ = statement.transactions.len();
});
