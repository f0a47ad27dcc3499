//! Number-theory helpers for the RSA engine.

/// Greatest common divisor (Euclid). Returns 0 only when both inputs are 0.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Smallest `d` in `[1, phi)` with `e * d ≡ 1 (mod phi)`.
///
/// Brute-force linear search, so the trace can describe exactly what a
/// student would do by hand. `None` when no such `d` exists.
pub fn modular_inverse(e: u64, phi: u64) -> Option<u64> {
    let (e, phi) = (u128::from(e), u128::from(phi));
    (1..phi)
        .find(|d| (e * d) % phi == 1)
        .and_then(|d| u64::try_from(d).ok())
}

/// `base^exp mod modulus` by square-and-multiply.
///
/// Intermediates are 128-bit so any `u64` modulus is safe.
///
/// # Panics
/// Panics if `modulus` is zero.
#[allow(clippy::cast_possible_truncation)] // result < modulus
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = u128::from(modulus);
    let mut result: u128 = 1 % m;
    let mut base = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}
