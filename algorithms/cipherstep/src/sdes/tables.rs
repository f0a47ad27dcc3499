//! S-DES Tables
//!
//! Fixed substitution boxes plus the caller-supplied permutation set.

use crate::bits::PermutationTable;
use crate::types::{Error, Result};

// =============================================================================
// SUBSTITUTION BOXES
// =============================================================================

/// 4×4 matrix of 2-bit outputs, addressed by `(row, col)`.
pub type SBox = [[u8; 4]; 4];

/// First substitution box (applied to the left 4 bits).
#[rustfmt::skip]
pub const S0: SBox = [
    [1, 0, 3, 2],
    [3, 2, 1, 0],
    [0, 2, 1, 3],
    [3, 1, 3, 2],
];

/// Second substitution box (applied to the right 4 bits).
#[rustfmt::skip]
pub const S1: SBox = [
    [0, 1, 2, 3],
    [2, 0, 1, 3],
    [3, 0, 1, 0],
    [2, 1, 0, 3],
];

// =============================================================================
// TEXTBOOK PERMUTATIONS
// =============================================================================

/// Standard P10.
pub const STANDARD_P10: [usize; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];
/// Standard P8.
pub const STANDARD_P8: [usize; 8] = [6, 3, 7, 4, 8, 5, 10, 9];
/// Standard initial permutation.
pub const STANDARD_IP: [usize; 8] = [2, 6, 3, 1, 4, 8, 5, 7];
/// Standard inverse initial permutation.
pub const STANDARD_IP_INV: [usize; 8] = [4, 1, 3, 5, 7, 2, 8, 6];
/// Standard expansion/permutation.
pub const STANDARD_EP: [usize; 8] = [4, 1, 2, 3, 2, 3, 4, 1];
/// Standard P4.
pub const STANDARD_P4: [usize; 4] = [2, 4, 3, 1];

/// Key width in bits.
pub const KEY_BITS: usize = 10;
/// Block width in bits.
pub const BLOCK_BITS: usize = 8;

/// `(name, required length, input width)` for each table, in set order.
const SHAPES: [(&str, usize, usize); 6] = [
    ("P10", 10, KEY_BITS),
    ("P8", 8, KEY_BITS),
    ("IP", 8, BLOCK_BITS),
    ("IP-1", 8, BLOCK_BITS),
    ("EP", 8, BLOCK_BITS / 2),
    ("P4", 4, BLOCK_BITS / 2),
];

// =============================================================================
// TABLE SET
// =============================================================================

/// The six permutation tables S-DES is parameterised by.
///
/// Only constructible through validation, so the engines never see a table of
/// the wrong length or one that points outside its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TableSpec", into = "TableSpec"))]
pub struct SdesTables {
    p10: PermutationTable,
    p8: PermutationTable,
    ip: PermutationTable,
    ip_inv: PermutationTable,
    ep: PermutationTable,
    p4: PermutationTable,
}

impl SdesTables {
    /// Validate and assemble a table set.
    ///
    /// # Errors
    /// - [`Error::MalformedInput`] when a table has the wrong length.
    /// - [`Error::TableIndexOutOfRange`] when an entry is 0 or exceeds the
    ///   width of the input that table is applied to.
    pub fn new(
        p10: PermutationTable,
        p8: PermutationTable,
        ip: PermutationTable,
        ip_inv: PermutationTable,
        ep: PermutationTable,
        p4: PermutationTable,
    ) -> Result<Self> {
        let tables = Self {
            p10,
            p8,
            ip,
            ip_inv,
            ep,
            p4,
        };
        for ((name, len, width), table) in SHAPES.iter().zip(tables.as_array()) {
            if table.len() != *len {
                return Err(Error::MalformedInput(format!(
                    "{name} must have {len} entries, got {}",
                    table.len()
                )));
            }
            table.check_range(*width)?;
        }
        Ok(tables)
    }

    /// The textbook table set.
    pub fn standard() -> Self {
        Self {
            p10: PermutationTable::new(STANDARD_P10),
            p8: PermutationTable::new(STANDARD_P8),
            ip: PermutationTable::new(STANDARD_IP),
            ip_inv: PermutationTable::new(STANDARD_IP_INV),
            ep: PermutationTable::new(STANDARD_EP),
            p4: PermutationTable::new(STANDARD_P4),
        }
    }

    /// `true` when IP-1 undoes IP. Without this, decryption cannot recover
    /// the plaintext even though every step still runs.
    pub fn inverts_ip(&self) -> bool {
        self.ip_inv
            .indices()
            .iter()
            .enumerate()
            .all(|(i, &j)| self.ip.indices()[j - 1] == i + 1)
    }

    /// P10 (key, 10 → 10).
    pub const fn p10(&self) -> &PermutationTable {
        &self.p10
    }

    /// P8 (shifted key, 10 → 8).
    pub const fn p8(&self) -> &PermutationTable {
        &self.p8
    }

    /// IP (block, 8 → 8).
    pub const fn ip(&self) -> &PermutationTable {
        &self.ip
    }

    /// IP-1 (block, 8 → 8).
    pub const fn ip_inv(&self) -> &PermutationTable {
        &self.ip_inv
    }

    /// EP (half block, 4 → 8).
    pub const fn ep(&self) -> &PermutationTable {
        &self.ep
    }

    /// P4 (S-box output, 4 → 4).
    pub const fn p4(&self) -> &PermutationTable {
        &self.p4
    }

    const fn as_array(&self) -> [&PermutationTable; 6] {
        [
            &self.p10,
            &self.p8,
            &self.ip,
            &self.ip_inv,
            &self.ep,
            &self.p4,
        ]
    }
}

impl Default for SdesTables {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// PARTIAL SPECIFICATION
// =============================================================================

/// A possibly incomplete table set, as read from a config file or flags.
///
/// Missing tables fall back to the textbook ones when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TableSpec {
    /// P10 override.
    pub p10: Option<PermutationTable>,
    /// P8 override.
    pub p8: Option<PermutationTable>,
    /// IP override.
    pub ip: Option<PermutationTable>,
    /// IP-1 override.
    #[cfg_attr(feature = "serde", serde(alias = "ip-1", alias = "ip1"))]
    pub ip_inv: Option<PermutationTable>,
    /// EP override.
    pub ep: Option<PermutationTable>,
    /// P4 override.
    pub p4: Option<PermutationTable>,
}

impl TableSpec {
    /// Overlay `other` on top of `self`: tables set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            p10: other.p10.or(self.p10),
            p8: other.p8.or(self.p8),
            ip: other.ip.or(self.ip),
            ip_inv: other.ip_inv.or(self.ip_inv),
            ep: other.ep.or(self.ep),
            p4: other.p4.or(self.p4),
        }
    }

    /// Fill gaps from the textbook set and validate.
    ///
    /// # Errors
    /// See [`SdesTables::new`].
    pub fn resolve(self) -> Result<SdesTables> {
        SdesTables::try_from(self)
    }
}

impl TryFrom<TableSpec> for SdesTables {
    type Error = Error;

    fn try_from(spec: TableSpec) -> Result<Self> {
        let std = Self::standard();
        Self::new(
            spec.p10.unwrap_or(std.p10),
            spec.p8.unwrap_or(std.p8),
            spec.ip.unwrap_or(std.ip),
            spec.ip_inv.unwrap_or(std.ip_inv),
            spec.ep.unwrap_or(std.ep),
            spec.p4.unwrap_or(std.p4),
        )
    }
}

impl From<SdesTables> for TableSpec {
    fn from(tables: SdesTables) -> Self {
        Self {
            p10: Some(tables.p10),
            p8: Some(tables.p8),
            ip: Some(tables.ip),
            ip_inv: Some(tables.ip_inv),
            ep: Some(tables.ep),
            p4: Some(tables.p4),
        }
    }
}
