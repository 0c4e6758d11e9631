#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = keywire_codec::pkcs8::parse_any_private_key_der(data);
});
