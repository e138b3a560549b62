//! Share records, their byte/hex codecs, and deduplication
//!
//! On the wire a share is `[index] || [eval_0 .. eval_{L-1}]`: one nonzero
//! index byte followed by one polynomial evaluation per secret byte. The
//! textual rendering used at the transport boundary is plain lowercase hex.

use crate::SssError;
use serde::{Deserialize, Serialize};

/// A single share of a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Share index (1..=255, never 0: x = 0 encodes the secret itself)
    pub index: u8,
    /// Polynomial evaluations, one per byte of the (padded) secret
    pub data: Vec<u8>,
}

impl Share {
    /// Serialize to bytes: index || evaluations
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.data.len());
        bytes.push(self.index);
        bytes.extend_from_slice(&self.data);
        bytes
    }

    /// Deserialize from bytes
    ///
    /// Fails with [`SssError::MalformedShare`] if the record is too short
    /// to hold an index plus at least one evaluation, or if the index byte
    /// is the reserved value 0.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SssError> {
        if bytes.len() < 2 {
            return Err(SssError::MalformedShare(format!(
                "share must be at least 2 bytes, got {}",
                bytes.len()
            )));
        }
        if bytes[0] == 0 {
            return Err(SssError::MalformedShare(
                "share index 0 is reserved for the secret".into(),
            ));
        }
        Ok(Self {
            index: bytes[0],
            data: bytes[1..].to_vec(),
        })
    }

    /// Render as lowercase hex, the transport encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse the hex transport encoding
    ///
    /// Fails with [`SssError::Encoding`] on non-hex or odd-length input,
    /// then validates the binary layout as [`Share::from_bytes`] does.
    pub fn from_hex(text: &str) -> Result<Self, SssError> {
        let bytes = hex::decode(text.trim()).map_err(|e| SssError::Encoding(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

/// Remove byte-identical duplicate shares
///
/// Duplicates contribute no interpolation information but inflate the share
/// count, so they are dropped before combining. Pure function: the caller's
/// slice is untouched and the result comes back sorted by raw byte value.
/// Two shares with the same index but different payloads are *not*
/// duplicates — they are an inconsistent combine and both are kept, letting
/// interpolation produce its documented garbage.
pub fn dedup_shares(shares: &[Share]) -> Vec<Share> {
    let mut out = shares.to_vec();
    out.sort_unstable_by(|a, b| (a.index, &a.data).cmp(&(b.index, &b.data)));
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(index: u8, data: &[u8]) -> Share {
        Share {
            index,
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let sh = share(3, &[0xde, 0xad, 0xbe, 0xef]);
        let bytes = sh.to_bytes();
        assert_eq!(bytes, [3, 0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(Share::from_bytes(&bytes).unwrap(), sh);
    }

    #[test]
    fn test_from_bytes_rejects_zero_index() {
        assert!(matches!(
            Share::from_bytes(&[0, 1, 2]),
            Err(SssError::MalformedShare(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_short_input() {
        assert!(matches!(
            Share::from_bytes(&[]),
            Err(SssError::MalformedShare(_))
        ));
        assert!(matches!(
            Share::from_bytes(&[1]),
            Err(SssError::MalformedShare(_))
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        let sh = share(0x0a, &[0x00, 0xff, 0x42]);
        let text = sh.to_hex();
        assert_eq!(text, "0a00ff42");
        assert_eq!(Share::from_hex(&text).unwrap(), sh);
        // Uppercase input decodes too
        assert_eq!(Share::from_hex("0A00FF42").unwrap(), sh);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            Share::from_hex("zz00"),
            Err(SssError::Encoding(_))
        ));
        // Odd length
        assert!(matches!(
            Share::from_hex("0a00f"),
            Err(SssError::Encoding(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let sh = share(7, &[1, 2, 3]);
        let json = serde_json::to_string(&sh).unwrap();
        let back: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sh);
    }

    #[test]
    fn test_dedup_removes_identical_shares() {
        let a = share(1, &[10, 20]);
        let b = share(2, &[30, 40]);
        let input = vec![b.clone(), a.clone(), a.clone(), b.clone(), a.clone()];

        let out = dedup_shares(&input);
        assert_eq!(out, vec![a, b]);
        // Caller's input is untouched
        assert_eq!(input.len(), 5);
    }

    #[test]
    fn test_dedup_keeps_same_index_different_payload() {
        let a = share(1, &[10, 20]);
        let b = share(1, &[99, 20]);
        let out = dedup_shares(&[a.clone(), b.clone()]);
        assert_eq!(out.len(), 2);
        assert!(out.contains(&a) && out.contains(&b));
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_shares(&[]).is_empty());
    }
}
