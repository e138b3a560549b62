#![no_main]

use libfuzzer_sys::fuzz_target;
use secretshare::Share;

fuzz_target!(|data: &[u8]| {
    // Binary decode must never panic — always Ok or Err
    if let Ok(share) = Share::from_bytes(data) {
        // Round-trip through both codecs
        assert_eq!(Share::from_bytes(&share.to_bytes()).unwrap(), share);
        assert_eq!(Share::from_hex(&share.to_hex()).unwrap(), share);
    }

    // Hex decode on arbitrary text must never panic either
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Share::from_hex(text);
    }
});
