//! Textbook RSA
//!
//! Key generation from two small primes, then per-character encryption and
//! decryption by modular exponentiation. Keys are re-derived on every call;
//! nothing is cached between invocations.
//!
//! No primality check is performed. Composite `p`/`q` still produce a key,
//! but it may not satisfy `m^(ed) ≡ m (mod n)`.

use crate::arith::{gcd, mod_pow, modular_inverse};
use crate::trace::{Stage, Trace};
use crate::types::{Error, Result};
use core::fmt;

// =============================================================================
// KEYS
// =============================================================================

/// `(e, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    /// Public exponent.
    pub e: u64,
    /// Modulus `p * q`.
    pub n: u64,
}

/// `(d, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateKey {
    /// Private exponent, `e⁻¹ mod phi`.
    pub d: u64,
    /// Modulus `p * q`.
    pub n: u64,
}

/// Public and private halves derived from one `(p, q)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyPair {
    /// Encryption key.
    pub public: PublicKey,
    /// Decryption key.
    pub private: PrivateKey,
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "public ({}, {}), private ({}, {})",
            self.public.e, self.public.n, self.private.d, self.private.n
        )
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Output of [`encrypt`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RsaEncryption {
    /// Keys used.
    pub keys: KeyPair,
    /// One integer per input character.
    pub ciphertext: Vec<u64>,
    /// Key generation followed by one step per character.
    pub trace: Trace,
}

/// Output of [`decrypt`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RsaDecryption {
    /// Keys used.
    pub keys: KeyPair,
    /// Recovered text.
    pub plaintext: String,
    /// Key generation followed by one step per integer.
    pub trace: Trace,
}

// =============================================================================
// KEY GENERATION
// =============================================================================

/// Derive `(e, d, n)` from `p` and `q`.
///
/// `e` is the smallest value in `[2, phi)` coprime with `phi`; every rejected
/// candidate is traced. `d` is found by linear search.
///
/// # Errors
/// - [`Error::MalformedInput`] if `p` or `q` is below 2 or `p * q` overflows.
/// - [`Error::DegenerateKey`] if no `e` below `phi` exists or `e` has no inverse.
pub fn generate_keys(p: u64, q: u64) -> Result<(KeyPair, Trace)> {
    let mut trace = Trace::new();
    let keys = derive_keys(p, q, &mut trace)?;
    Ok((keys, trace))
}

fn derive_keys(p: u64, q: u64, trace: &mut Trace) -> Result<KeyPair> {
    const STAGE: Stage = Stage::KeyGeneration;

    if p < 2 || q < 2 {
        return Err(Error::MalformedInput(format!(
            "p and q must both be at least 2 (got p = {p}, q = {q})"
        )));
    }
    let n = p
        .checked_mul(q)
        .ok_or_else(|| Error::MalformedInput(format!("p * q overflows ({p} * {q})")))?;
    trace
        .push(STAGE, format!("n = p * q = {p} * {q} = {n}"))
        .operand("p", p)
        .operand("q", q)
        .operand("n", n);

    let phi = (p - 1) * (q - 1);
    trace
        .push(
            STAGE,
            format!("phi(n) = (p-1)*(q-1) = {} * {} = {phi}", p - 1, q - 1),
        )
        .operand("phi", phi);

    let e = choose_exponent(phi, trace)?;
    trace.push(STAGE, format!("Chosen e = {e}")).operand("e", e);

    let d = modular_inverse(e, phi).ok_or_else(|| {
        Error::DegenerateKey(format!("e = {e} has no inverse modulo phi = {phi}"))
    })?;
    trace
        .push(STAGE, format!("Computed d (mod inverse of e) = {d}"))
        .operand("d", d);
    trace.push(
        STAGE,
        format!(
            "Check: e * d mod phi = {e} * {d} mod {phi} = {}",
            (u128::from(e) * u128::from(d)) % u128::from(phi)
        ),
    );

    trace
        .push(STAGE, format!("Public Key = ({e}, {n})"))
        .operand("e", e)
        .operand("n", n);
    trace
        .push(STAGE, format!("Private Key = ({d}, {n})"))
        .operand("d", d)
        .operand("n", n);

    Ok(KeyPair {
        public: PublicKey { e, n },
        private: PrivateKey { d, n },
    })
}

/// Smallest `e` in `[2, phi)` with `gcd(e, phi) == 1`.
fn choose_exponent(phi: u64, trace: &mut Trace) -> Result<u64> {
    for e in 2..phi {
        let g = gcd(e, phi);
        if g == 1 {
            trace
                .push(
                    Stage::KeyGeneration,
                    format!("gcd({e}, {phi}) = 1 -> accept e = {e}"),
                )
                .operand("e", e)
                .operand("gcd", g);
            return Ok(e);
        }
        trace
            .push(
                Stage::KeyGeneration,
                format!("gcd({e}, {phi}) = {g} -> reject e = {e}"),
            )
            .operand("e", e)
            .operand("gcd", g);
    }
    Err(Error::DegenerateKey(format!(
        "no public exponent e in [2, {phi}) is coprime with phi = {phi}"
    )))
}

// =============================================================================
// ENCRYPTION
// =============================================================================

/// Encrypt each character of `message` as `c = m^e mod n`.
///
/// Characters whose code point is `>= n` wrap modulo `n`; the trace notes
/// that such characters will not decrypt back to themselves.
///
/// # Errors
/// Any [`generate_keys`] error.
pub fn encrypt(message: &str, p: u64, q: u64) -> Result<RsaEncryption> {
    let mut trace = Trace::new();
    let keys = derive_keys(p, q, &mut trace)?;
    let PublicKey { e, n } = keys.public;

    let mut ciphertext = Vec::with_capacity(message.chars().count());
    for ch in message.chars() {
        let m = u64::from(u32::from(ch));
        let c = mod_pow(m, e, n);
        trace
            .push(
                Stage::Encryption,
                format!("{} -> {m}^{e} mod {n} = {c}", ch.escape_debug()),
            )
            .operand("char", ch.escape_debug())
            .operand("m", m)
            .operand("e", e)
            .operand("n", n)
            .operand("c", c);
        if m >= n {
            trace.push(
                Stage::Encryption,
                format!(
                    "note: m = {m} >= n = {n}, so m wraps to {} and will not decrypt back to '{}'",
                    m % n,
                    ch.escape_debug()
                ),
            );
        }
        ciphertext.push(c);
    }

    trace
        .push(Stage::Encryption, format!("Ciphertext: {}", join(&ciphertext)))
        .operand("ciphertext", join(&ciphertext));

    Ok(RsaEncryption {
        keys,
        ciphertext,
        trace,
    })
}

// =============================================================================
// DECRYPTION
// =============================================================================

/// Decrypt each integer as `m = c^d mod n` and map it back to a character.
///
/// # Errors
/// - Any [`generate_keys`] error.
/// - [`Error::InvalidCodepoint`] if a decrypted value is not a Unicode scalar.
pub fn decrypt(ciphertext: &[u64], p: u64, q: u64) -> Result<RsaDecryption> {
    let mut trace = Trace::new();
    let keys = derive_keys(p, q, &mut trace)?;
    let PrivateKey { d, n } = keys.private;

    let mut plaintext = String::with_capacity(ciphertext.len());
    for &c in ciphertext {
        let m = mod_pow(c, d, n);
        let ch = u32::try_from(m)
            .ok()
            .and_then(char::from_u32)
            .ok_or(Error::InvalidCodepoint(m))?;
        trace
            .push(
                Stage::Decryption,
                format!("{c}^{d} mod {n} = {m} -> {}", ch.escape_debug()),
            )
            .operand("c", c)
            .operand("d", d)
            .operand("n", n)
            .operand("m", m)
            .operand("char", ch.escape_debug());
        plaintext.push(ch);
    }

    trace
        .push(Stage::Decryption, format!("Recovered Plaintext: {plaintext}"))
        .operand("plaintext", &plaintext);

    Ok(RsaDecryption {
        keys,
        plaintext,
        trace,
    })
}

/// Parse whitespace separated ciphertext integers (`"32 12 5"`).
///
/// # Errors
/// [`Error::MalformedInput`] naming the first token that is not a `u64`.
pub fn parse_ciphertext(text: &str) -> Result<Vec<u64>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<u64>().map_err(|_| {
                Error::MalformedInput(format!("'{tok}' is not a ciphertext integer"))
            })
        })
        .collect()
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
