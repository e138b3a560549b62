//! Shamir's Secret Sharing over GF(256)
//!
//! Split a secret byte string into `n` shares so that any `k` of them
//! reconstruct it exactly, while `k - 1` or fewer reveal nothing
//! (information-theoretically, not just computationally).
//!
//! # Two Variants
//!
//! ## Padded (variable-length secrets)
//! - Secrets of 1..=63 bytes, padded to a fixed 64-byte block
//! - Shares are 65 bytes: one index byte plus 64 evaluations
//! - A failed combine is detectable: the padding marker goes missing
//!
//! ## Keyshares (raw 32-byte keys)
//! - Exactly 32 bytes, no padding; shares are 33 bytes
//! - A below-threshold combine *succeeds* and returns a random-looking
//!   wrong key — the raw format has nothing to check against. Callers must
//!   track the threshold themselves.
//!
//! # Example
//!
//! ```
//! use secretshare::{create_shares, combine_shares};
//!
//! // Split into 5 shares, any 3 of which recover the secret
//! let shares = create_shares(b"correct horse battery staple", 5, 3).unwrap();
//!
//! // Hand them out; later, any 3 come back
//! let recovered = combine_shares(&shares[1..4]).unwrap();
//! assert_eq!(recovered, b"correct horse battery staple");
//! ```
//!
//! # Security Notes
//!
//! - Polynomial coefficients are drawn fresh per split from a CSPRNG
//!   (the OS generator by default, injectable via the `*_with_rng` forms)
//! - Intermediate secret material (padded blocks, coefficients) is zeroized
//! - **The running time of split and unpad correlates with the secret
//!   length.** This scheme does not hide secret length from a timing or
//!   size observer; known, accepted limitation.
//! - Shares are not authenticated. A forged share makes the combine produce
//!   garbage, it does not get detected as forged.

pub mod gf256;
pub mod padding;
pub mod poly;
pub mod shamir;
pub mod share;

// Re-exports
pub use padding::{BLOCK_LEN, MAX_SECRET_LEN};
pub use shamir::{
    combine_keyshares, combine_shares, create_keyshares, create_keyshares_with_rng,
    create_shares, create_shares_with_rng, KEYSHARE_LEN, MAX_SHARES,
};
pub use share::{dedup_shares, Share};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SssError {
    /// n/k out of bounds, or the secret length is wrong for the variant
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// A share's binary layout is invalid (bad length or reserved index 0)
    #[error("malformed share: {0}")]
    MalformedShare(String),
    /// A share's hex rendering could not be decoded
    #[error("invalid share encoding: {0}")]
    Encoding(String),
    /// The secret could not be recovered. For the padded variant this is
    /// the "too few shares or corrupted shares" signal; the keyshare
    /// variant cannot raise it for that case and returns a wrong key
    /// instead.
    #[error("could not recover secret: {0}")]
    InvalidAccess(String),
}
