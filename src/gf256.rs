//! Galois Field GF(256) arithmetic for Shamir's Secret Sharing
//!
//! Uses the irreducible polynomial x^8 + x^4 + x^3 + x + 1 (0x11B),
//! the same field as AES.
//!
//! Multiplication is branch-free shift-and-conditional-XOR and inversion
//! is a fixed Fermat chain (a^254), so there are no lookup tables and the
//! operation sequence does not depend on operand values.

/// Add two elements in GF(256) (XOR)
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two elements in GF(256) (same as add in characteristic 2)
#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two elements in GF(256)
///
/// Carry-less multiplication reduced modulo 0x11B, eight fixed rounds of
/// masked XOR. No data-dependent branches.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut product = 0u8;
    for _ in 0..8 {
        // Mix `a` into the product when the low bit of `b` is set
        let mask = (b & 1).wrapping_neg();
        product ^= a & mask;
        // Multiply `a` by x, folding the overflow back in with 0x1B
        let carry = (a >> 7).wrapping_neg();
        a = (a << 1) ^ (carry & 0x1b);
        b >>= 1;
    }
    product
}

/// Compute the multiplicative inverse of an element in GF(256)
///
/// Fermat: inv(a) = a^254, computed with a fixed square-and-multiply chain.
/// Zero has no inverse; the chain returns 0 for it, which callers must not
/// treat as a field inverse.
pub fn gf_inv(a: u8) -> u8 {
    let a2 = gf_mul(a, a);
    let a3 = gf_mul(a2, a);
    let a6 = gf_mul(a3, a3);
    let a7 = gf_mul(a6, a);
    let a14 = gf_mul(a7, a7);
    let a28 = gf_mul(a14, a14);
    let a56 = gf_mul(a28, a28);
    let a63 = gf_mul(a56, a7);
    let a126 = gf_mul(a63, a63);
    let a127 = gf_mul(a126, a);
    gf_mul(a127, a127)
}

/// Divide two elements in GF(256)
///
/// Division by zero yields 0 (via `gf_inv`), not a panic. That value is
/// meaningless; interpolation over inconsistent points relies on it only to
/// produce garbage instead of aborting.
#[inline]
pub fn gf_div(a: u8, b: u8) -> u8 {
    gf_mul(a, gf_inv(b))
}
