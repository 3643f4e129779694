#![no_main]

use libfuzzer_sys::fuzz_target;
use symgraph::KindIdentifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let kind = KindIdentifier::parse(raw);
        // Custom kinds keep the exact input
        if kind.is_custom() {
            assert_eq!(kind.as_str(), raw);
        }
        assert_eq!(KindIdentifier::is_known_identifier(raw), !kind.is_custom());
        assert_eq!(KindIdentifier::parse(kind.as_str()), kind);
        assert_eq!(KindIdentifier::custom(raw), kind);
    }
});
