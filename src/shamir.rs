//! The four secret-sharing operations
//!
//! Split a secret into N shares where any K can reconstruct it, in two
//! flavors: padded variable-length secrets (up to 63 bytes) and raw 32-byte
//! keyshares for symmetric key material.
//!
//! Only the padded variant can tell a bad combine from a good one (via the
//! padding marker). Combining too few keyshares yields a random 32-byte
//! value indistinguishable from a real key; that asymmetry is part of the
//! wire format, not something this module papers over.

use crate::padding::{pad, unpad, BLOCK_LEN, MAX_SECRET_LEN};
use crate::poly::{interpolate_at_zero, split_byte};
use crate::share::{dedup_shares, Share};
use crate::SssError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Secret length of the raw keyshare variant (a symmetric key)
pub const KEYSHARE_LEN: usize = 32;

/// Largest share count the field supports (nonzero indices 1..=255)
pub const MAX_SHARES: usize = 255;

/// Split a variable-length secret into `count` shares, any `threshold` of
/// which reconstruct it
///
/// The secret (1..=63 bytes) is padded to a fixed 64-byte block first, so
/// every share is 65 bytes on the wire. Randomness comes from the operating
/// system; use [`create_shares_with_rng`] to supply your own source.
pub fn create_shares(
    secret: &[u8],
    count: usize,
    threshold: usize,
) -> Result<Vec<Share>, SssError> {
    create_shares_with_rng(secret, count, threshold, &mut OsRng)
}

/// [`create_shares`] with a caller-supplied random source
///
/// The generic form exists so tests can inject a seeded CSPRNG; production
/// callers should pass a cryptographically secure generator, and must never
/// reuse one stream position across split calls.
pub fn create_shares_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    count: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Share>, SssError> {
    check_parameters(count, threshold)?;
    if secret.is_empty() {
        return Err(SssError::InvalidParameters(
            "secret must not be empty".into(),
        ));
    }
    if secret.len() > MAX_SECRET_LEN {
        return Err(SssError::InvalidParameters(format!(
            "secret must be at most {} bytes, got {}",
            MAX_SECRET_LEN,
            secret.len()
        )));
    }

    let block = pad(secret)?;
    Ok(split_block(&block, count as u8, threshold as u8, rng))
}

/// Reconstruct a padded secret from shares
///
/// Byte-identical duplicates are dropped first. Fails with
/// [`SssError::InvalidAccess`] when no shares remain or when the
/// reconstructed block carries no padding marker — the latter is the only
/// signal this variant has for "too few shares" or "corrupted shares".
pub fn combine_shares(shares: &[Share]) -> Result<Vec<u8>, SssError> {
    let shares = dedup_shares(shares);
    if shares.is_empty() {
        return Err(SssError::InvalidAccess("no shares supplied".into()));
    }
    let block = reconstruct_block(&shares, BLOCK_LEN)?;
    unpad(&block)
}

/// Split a 32-byte key into `count` keyshares
///
/// No padding: each share is exactly 33 bytes on the wire. Fails with
/// [`SssError::InvalidParameters`] unless `key` is exactly
/// [`KEYSHARE_LEN`] bytes.
pub fn create_keyshares(
    key: &[u8],
    count: usize,
    threshold: usize,
) -> Result<Vec<Share>, SssError> {
    create_keyshares_with_rng(key, count, threshold, &mut OsRng)
}

/// [`create_keyshares`] with a caller-supplied random source
pub fn create_keyshares_with_rng<R: RngCore + CryptoRng>(
    key: &[u8],
    count: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Share>, SssError> {
    check_parameters(count, threshold)?;
    if key.len() != KEYSHARE_LEN {
        return Err(SssError::InvalidParameters(format!(
            "key must be exactly {} bytes, got {}",
            KEYSHARE_LEN,
            key.len()
        )));
    }
    Ok(split_block(key, count as u8, threshold as u8, rng))
}

/// Reconstruct a 32-byte key from keyshares
///
/// There is no self-checking structure in a raw key: combining fewer than
/// threshold keyshares succeeds and returns a uniformly random-looking
/// 32-byte value that is not the key. Callers own threshold bookkeeping.
pub fn combine_keyshares(shares: &[Share]) -> Result<Vec<u8>, SssError> {
    let shares = dedup_shares(shares);
    if shares.is_empty() {
        return Err(SssError::InvalidAccess("no shares supplied".into()));
    }
    let block = reconstruct_block(&shares, KEYSHARE_LEN)?;
    Ok(block.to_vec())
}

/// Validate 1 <= threshold <= count <= 255
fn check_parameters(count: usize, threshold: usize) -> Result<(), SssError> {
    if count == 0 || count > MAX_SHARES {
        return Err(SssError::InvalidParameters(format!(
            "share count must be between 1 and {}, got {}",
            MAX_SHARES, count
        )));
    }
    if threshold == 0 || threshold > count {
        return Err(SssError::InvalidParameters(format!(
            "threshold must be between 1 and the share count ({}), got {}",
            count, threshold
        )));
    }
    Ok(())
}

/// Split a fixed-length block byte by byte
///
/// One fresh random polynomial per block byte; the index set 1..=count is
/// shared across all bytes of the split.
fn split_block<R: RngCore + CryptoRng>(
    block: &[u8],
    count: u8,
    threshold: u8,
    rng: &mut R,
) -> Vec<Share> {
    let indices: Vec<u8> = (1..=count).collect();
    let mut shares: Vec<Share> = indices
        .iter()
        .map(|&index| Share {
            index,
            data: Vec::with_capacity(block.len()),
        })
        .collect();

    for &byte in block {
        let evals = split_byte(byte, threshold, &indices, rng);
        for (share, y) in shares.iter_mut().zip(evals) {
            share.data.push(y);
        }
    }

    shares
}

/// Interpolate every byte of a block from the supplied shares
///
/// All shares must carry `expected_len` evaluations and nonzero indices;
/// anything else is a [`SssError::MalformedShare`]. The block is wiped on
/// drop since for the padded variant it still contains the secret.
fn reconstruct_block(
    shares: &[Share],
    expected_len: usize,
) -> Result<Zeroizing<Vec<u8>>, SssError> {
    for share in shares {
        if share.index == 0 {
            return Err(SssError::MalformedShare(
                "share index 0 is reserved for the secret".into(),
            ));
        }
        if share.data.len() != expected_len {
            return Err(SssError::MalformedShare(format!(
                "expected {} evaluations per share, got {}",
                expected_len,
                share.data.len()
            )));
        }
    }

    let mut block = Zeroizing::new(Vec::with_capacity(expected_len));
    for byte_idx in 0..expected_len {
        let points: Vec<(u8, u8)> = shares
            .iter()
            .map(|s| (s.index, s.data[byte_idx]))
            .collect();
        block.push(interpolate_at_zero(&points));
    }
    Ok(block)
}
