#![no_main]

use libfuzzer_sys::fuzz_target;
use multisend_types::{parse_on_chain_units, OnChainAmount, RawAmount};

fuzz_target!(|data: &[u8]| {
    // Conversion either fails cleanly or agrees with the RawAmount path.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(on_chain) = parse_on_chain_units(text) {
            let raw: RawAmount = text.parse().expect("same parser accepted it");
            assert_eq!(on_chain, OnChainAmount::from(&raw));
        }
    }

    // Any 8 bytes as a float: never panic, never accept a negative.
    if data.len() >= 8 {
        let bytes: [u8; 8] = data[..8].try_into().unwrap();
        let value = f64::from_le_bytes(bytes);
        if let Ok(amount) = OnChainAmount::try_from(value) {
            assert!(value.is_finite() && value >= 0.0);
            let _ = amount.to_token_string();
        }
    }
});
