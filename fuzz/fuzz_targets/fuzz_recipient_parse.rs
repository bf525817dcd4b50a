#![no_main]

use libfuzzer_sys::fuzz_target;
use multisend_ledger::parse_recipients;
use multisend_transactions::BatchBuilder;

fuzz_target!(|data: &[u8]| {
    // Arbitrary pasted text must never panic, and whatever parses must
    // build into a batch whose deposit matches its operations.
    let text = String::from_utf8_lossy(data);
    let parsed = parse_recipients(&text);
    assert_eq!(parsed.ledger().sum(), *parsed.total());

    match BatchBuilder::new().build(&parsed) {
        Ok(batch) => assert_eq!(batch.len(), parsed.ledger().len()),
        Err(_) => assert!(parsed.is_empty()),
    }
});
