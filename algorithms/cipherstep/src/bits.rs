//! Bit Strings & Permutations
//!
//! Fixed-length bit sequences and the three primitives S-DES is built from:
//! table permutation, left rotation and XOR.

use crate::types::{Error, Result};
use core::fmt;
use core::str::FromStr;

// =============================================================================
// BIT STRING
// =============================================================================

/// A fixed-length sequence of bits, most significant (leftmost) first.
///
/// Parsed from and rendered as text of `0`/`1` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Build from individual bits.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// The low `width` bits of `value`, most significant first.
    pub fn from_value(value: u64, width: usize) -> Self {
        Self::from_bits((0..width).rev().map(|i| i < 64 && (value >> i) & 1 == 1))
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` for the zero-length string.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at 0-based position `i`.
    pub fn bit(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    /// Borrow the bits.
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Interpret the bits as an unsigned big-endian number.
    ///
    /// Only meaningful for strings of at most 64 bits; longer strings keep
    /// their low 64 bits.
    pub fn to_value(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &b| (acc << 1) | u64::from(b))
    }

    /// Split into a left and right half (the left half takes the smaller share
    /// for odd lengths).
    pub fn split_halves(&self) -> (Self, Self) {
        let (left, right) = self.bits.split_at(self.bits.len() / 2);
        (Self::from_bits(left.iter().copied()), Self::from_bits(right.iter().copied()))
    }

    /// `self ‖ other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self::from_bits(self.bits.iter().chain(other.bits.iter()).copied())
    }

    /// Fail with [`Error::MalformedInput`] unless the string is exactly
    /// `expected` bits long.
    pub fn require_len(&self, what: &str, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(Error::MalformedInput(format!(
                "{what} must be {expected} bits, got {} ('{self}')",
                self.len()
            )))
        }
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::MalformedInput(format!(
                    "'{other}' is not a binary digit in '{}'",
                    s.trim()
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(|bits| Self { bits })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BitString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// PERMUTATION TABLE
// =============================================================================

/// Ordered 1-based source positions: output bit `i` is input bit `table[i] - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PermutationTable {
    indices: Vec<usize>,
}

impl PermutationTable {
    /// Wrap raw 1-based indices. Range checks happen when the table is
    /// applied or when it joins an [`SdesTables`](crate::SdesTables) set.
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// The raw indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Output width.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// `true` for an empty table.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check every entry addresses a bit of a `width`-bit input.
    pub fn check_range(&self, width: usize) -> Result<()> {
        match self.indices.iter().find(|&&i| i == 0 || i > width) {
            Some(&index) => Err(Error::TableIndexOutOfRange { index, width }),
            None => Ok(()),
        }
    }
}

/// Accepts whitespace and/or comma separated integers: `"3 5 2 7"`, `"3,5,2,7"`.
impl FromStr for PermutationTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<usize>().map_err(|_| {
                    Error::MalformedInput(format!("'{tok}' is not a table index"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl fmt::Display for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{idx}")?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Rearrange `bits` through `table`.
///
/// The output is always `table.len()` bits long. Any entry outside
/// `1..=bits.len()` fails with [`Error::TableIndexOutOfRange`].
pub fn permute(bits: &BitString, table: &PermutationTable) -> Result<BitString> {
    table.check_range(bits.len())?;
    Ok(BitString::from_bits(
        table.indices.iter().map(|&i| bits.bits[i - 1]),
    ))
}

/// Rotate left by `n` positions, taken modulo the length.
pub fn left_rotate(bits: &BitString, n: usize) -> BitString {
    if bits.is_empty() {
        return BitString::default();
    }
    let mut out = bits.bits.clone();
    out.rotate_left(n % bits.len());
    BitString { bits: out }
}

/// Bitwise XOR of two equal-length strings.
pub fn xor_bits(a: &BitString, b: &BitString) -> Result<BitString> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(BitString::from_bits(
        a.bits.iter().zip(&b.bits).map(|(x, y)| x ^ y),
    ))
}
