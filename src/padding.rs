//! Block padding for variable-length secrets
//!
//! The engine only splits fixed-length blocks, so variable-length secrets
//! are padded to [`BLOCK_LEN`] bytes first: a single 0x80 marker, then
//! zeros. Unpadding strips the zeros and the marker; a block with no marker
//! means reconstruction failed (too few shares, or corrupted shares).
//!
//! The padded length is fixed but the work done by pad/unpad is linear in
//! the secret length, so a timing observer can learn the length. Accepted
//! limitation, inherited from the original scheme.

use crate::SssError;
use zeroize::Zeroizing;

/// Fixed block length the engine operates on (padded variant)
pub const BLOCK_LEN: usize = 64;

/// Maximum secret length for the padded variant (one byte is the marker)
pub const MAX_SECRET_LEN: usize = BLOCK_LEN - 1;

/// Padding marker byte
const MARKER: u8 = 0x80;

/// Pad a secret to a fixed [`BLOCK_LEN`]-byte block
///
/// Appends the 0x80 marker, then zeros. Fails with
/// [`SssError::InvalidParameters`] if `data` exceeds [`MAX_SECRET_LEN`]
/// bytes. The returned block is wiped on drop.
pub fn pad(data: &[u8]) -> Result<Zeroizing<Vec<u8>>, SssError> {
    if data.len() > MAX_SECRET_LEN {
        return Err(SssError::InvalidParameters(format!(
            "secret must be at most {} bytes, got {}",
            MAX_SECRET_LEN,
            data.len()
        )));
    }

    let mut block = Zeroizing::new(Vec::with_capacity(BLOCK_LEN));
    block.extend_from_slice(data);
    block.push(MARKER);
    block.resize(BLOCK_LEN, 0);
    Ok(block)
}

/// Strip block padding, recovering the original secret
///
/// Drops trailing zeros, then the 0x80 marker. If the last nonzero byte is
/// not the marker the block did not come from a successful reconstruction;
/// that is the padded variant's only "not enough shares" signal and is
/// surfaced as [`SssError::InvalidAccess`].
pub fn unpad(block: &[u8]) -> Result<Vec<u8>, SssError> {
    let end = block
        .iter()
        .rposition(|&b| b != 0)
        .ok_or_else(invalid_padding)?;
    if block[end] != MARKER {
        return Err(invalid_padding());
    }
    Ok(block[..end].to_vec())
}

fn invalid_padding() -> SssError {
    SssError::InvalidAccess(
        "padding marker missing; too few shares, or shares are corrupted".into(),
    )
}
