#![no_main]

use libfuzzer_sys::fuzz_target;
use symgraph::{RegistryContext, decode_symbol, encode_symbol};

fuzz_target!(|data: &[u8]| {
    let context = RegistryContext::new();
    // Anything that decodes must re-encode, and the canonical form must be a fixed point
    if let Ok(symbol) = decode_symbol(data, &context) {
        let first = encode_symbol(&symbol, &context).expect("decoded symbol re-encodes");
        let again = decode_symbol(&first, &context).expect("canonical form decodes");
        let second = encode_symbol(&again, &context).expect("canonical form re-encodes");
        assert_eq!(first, second);
    }
});
