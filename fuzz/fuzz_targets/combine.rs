#![no_main]

use libfuzzer_sys::fuzz_target;
use secretshare::{combine_keyshares, combine_shares, Share};

// Carve arbitrary bytes into share records and feed them to the combiners.
// Neither path may panic: mixed lengths, zero indices, and duplicate or
// inconsistent indices (which drive a zero denominator through the Lagrange
// basis) must all come back as Ok or Err.
fuzz_target!(|data: &[u8]| {
    let shares: Vec<Share> = data
        .chunks(33)
        .filter_map(|chunk| Share::from_bytes(chunk).ok())
        .collect();

    let _ = combine_keyshares(&shares);
    let _ = combine_shares(&shares);

    let _ = secretshare::padding::unpad(data);
});
