//! Shared types used across the cipherstep library.

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Failure raised by any engine or utility.
///
/// Every error is reported at the point of failure. A failing call never
/// returns a partial result or a truncated trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input could not be accepted as given (bad characters, wrong length,
    /// out-of-range primes, unparsable numbers).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A permutation table refers to a bit outside the input.
    #[error("table index {index} out of range for a {width}-bit input (valid: 1..={width})")]
    TableIndexOutOfRange {
        /// Offending 1-based table entry.
        index: usize,
        /// Length of the input the table was applied to.
        width: usize,
    },

    /// Two bit strings that must have equal length do not.
    #[error("length mismatch: {left} bits vs {right} bits")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// No usable RSA exponent exists for the given primes.
    #[error("degenerate key: {0}")]
    DegenerateKey(String),

    /// A decrypted RSA value is not a valid Unicode scalar value.
    #[error("decrypted value {0} is not a valid character code point")]
    InvalidCodepoint(u64),
}

/// Result alias for cipherstep operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// DIRECTION
// =============================================================================

/// Which way a cipher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Plaintext to ciphertext.
    #[default]
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Self::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Self::Decrypt),
            other => Err(Error::MalformedInput(format!(
                "unknown direction '{other}' (expected encrypt or decrypt)"
            ))),
        }
    }
}
