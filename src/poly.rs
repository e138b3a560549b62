//! Per-byte polynomial split and Lagrange reconstruction
//!
//! Each secret byte gets its own random degree-(k-1) polynomial with the
//! secret byte as the constant term. Splitting evaluates that polynomial at
//! every share index; combining interpolates the constant term back out at
//! x = 0.

use crate::gf256::{gf_add, gf_div, gf_mul, gf_sub};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Evaluate a polynomial at a given x value
///
/// `coefficients[0]` is the constant term, `coefficients[n-1]` the highest
/// degree. Uses Horner's method.
pub fn poly_eval(coefficients: &[u8], x: u8) -> u8 {
    let mut result = 0u8;
    for &coef in coefficients.iter().rev() {
        result = gf_add(gf_mul(result, x), coef);
    }
    result
}

/// Split one secret byte into one evaluation per share index
///
/// Draws `threshold - 1` random coefficients from `rng`, puts `secret_byte`
/// in the constant term, and evaluates the polynomial at each index. The
/// returned evaluations are position-aligned with `indices`.
///
/// Indices must be nonzero: x = 0 is the secret itself. Coefficients are
/// wiped when the internal buffer drops.
pub fn split_byte<R: RngCore + CryptoRng>(
    secret_byte: u8,
    threshold: u8,
    indices: &[u8],
    rng: &mut R,
) -> Vec<u8> {
    debug_assert!(threshold >= 1);
    debug_assert!(indices.iter().all(|&x| x != 0));

    let mut coefficients = Zeroizing::new(Vec::with_capacity(threshold as usize));
    coefficients.push(secret_byte);
    for _ in 1..threshold {
        let mut byte = [0u8];
        rng.fill_bytes(&mut byte);
        coefficients.push(byte[0]);
    }

    indices.iter().map(|&x| poly_eval(&coefficients, x)).collect()
}

/// Lagrange interpolation at x = 0 to recover one secret byte
///
/// `points` are (index, evaluation) pairs. With k correct points from the
/// real split this returns the secret byte exactly; with fewer, forged, or
/// same-index-inconsistent points it returns an arbitrary field value. The
/// engine cannot tell those apart — detection lives at the whole-secret
/// level (the padding marker), or nowhere for raw keyshares.
pub fn interpolate_at_zero(points: &[(u8, u8)]) -> u8 {
    let mut secret = 0u8;

    for (i, &(xi, yi)) in points.iter().enumerate() {
        // Basis polynomial at zero: Li(0) = prod_{j != i} xj / (xi - xj)
        // (negation is identity in characteristic 2, so -xj = xj)
        let mut basis = 1u8;
        for (j, &(xj, _)) in points.iter().enumerate() {
            if i != j {
                basis = gf_mul(basis, gf_div(xj, gf_sub(xi, xj)));
            }
        }
        secret = gf_add(secret, gf_mul(yi, basis));
    }

    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_poly_eval() {
        // p(x) = 5 + 3x + 2x^2
        let coeffs = [5u8, 3, 2];
        // p(0) = 5
        assert_eq!(poly_eval(&coeffs, 0), 5);
        // p(1) = 5 ^ 3 ^ 2 = 4 (field addition is XOR)
        assert_eq!(poly_eval(&coeffs, 1), 4);
    }

    #[test]
    fn test_interpolate_linear() {
        // p(x) = 42 + 7x, sampled at x = 1, 2, 3
        let secret = 42u8;
        let coef = 7u8;
        let points: Vec<(u8, u8)> = (1..=3)
            .map(|x| (x, gf_add(secret, gf_mul(coef, x))))
            .collect();

        // Any 2 points recover the constant term
        assert_eq!(interpolate_at_zero(&points[0..2]), secret);
        assert_eq!(interpolate_at_zero(&points[1..3]), secret);
        assert_eq!(interpolate_at_zero(&[points[0], points[2]]), secret);
    }

    #[test]
    fn test_split_byte_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let indices: Vec<u8> = (1..=5).collect();

        for secret in [0u8, 1, 0x42, 0x80, 0xff] {
            let evals = split_byte(secret, 3, &indices, &mut rng);
            assert_eq!(evals.len(), 5);

            // Any 3 of the 5 points reconstruct the byte
            let points: Vec<(u8, u8)> =
                indices.iter().copied().zip(evals.iter().copied()).collect();
            assert_eq!(interpolate_at_zero(&points[0..3]), secret);
            assert_eq!(interpolate_at_zero(&points[2..5]), secret);
            assert_eq!(
                interpolate_at_zero(&[points[0], points[2], points[4]]),
                secret
            );
        }
    }

    #[test]
    fn test_split_byte_threshold_one_is_constant() {
        // k = 1: no random coefficients, every evaluation is the secret
        let mut rng = StdRng::seed_from_u64(0);
        let indices: Vec<u8> = (1..=4).collect();
        let evals = split_byte(0x5a, 1, &indices, &mut rng);
        assert!(evals.iter().all(|&y| y == 0x5a));
    }

    #[test]
    fn test_split_byte_deterministic_under_seeded_rng() {
        let indices: Vec<u8> = (1..=3).collect();
        let a = split_byte(9, 2, &indices, &mut StdRng::seed_from_u64(99));
        let b = split_byte(9, 2, &indices, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_interpolate_inconsistent_points_does_not_panic() {
        // Two points with the same x drive a zero denominator through the
        // basis product; the result is garbage, never a panic.
        let _ = interpolate_at_zero(&[(1, 10), (1, 20), (2, 30)]);
    }
}
