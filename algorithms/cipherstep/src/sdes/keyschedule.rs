//! S-DES key schedule: P10, split, LS-1, P8 → K1, LS-2, P8 → K2.

use super::tables::{SdesTables, KEY_BITS};
use crate::bits::{left_rotate, permute, BitString};
use crate::trace::{Stage, Trace};
use crate::types::{Direction, Result};

/// Round keys in schedule order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubKeys {
    /// First-round key for encryption.
    pub k1: BitString,
    /// Second-round key for encryption.
    pub k2: BitString,
}

impl SubKeys {
    /// Keys in the order the rounds consume them: `(K1, K2)` to encrypt,
    /// `(K2, K1)` to decrypt.
    pub const fn round_order(&self, direction: Direction) -> (&BitString, &BitString) {
        match direction {
            Direction::Encrypt => (&self.k1, &self.k2),
            Direction::Decrypt => (&self.k2, &self.k1),
        }
    }
}

/// Derive `(K1, K2)` from a 10-bit key.
///
/// # Errors
/// [`Error::MalformedInput`](crate::Error::MalformedInput) unless `key` is 10 bits.
pub fn derive_subkeys(key: &BitString, tables: &SdesTables) -> Result<(SubKeys, Trace)> {
    const STAGE: Stage = Stage::SubkeyGeneration;

    key.require_len("key", KEY_BITS)?;
    let mut trace = Trace::new();

    let p10 = permute(key, tables.p10())?;
    trace
        .push(STAGE, format!("P10(Key) = {p10}"))
        .operand("key", key)
        .operand("P10", tables.p10())
        .operand("result", &p10);

    let (left, right) = p10.split_halves();
    trace
        .push(STAGE, format!("Split -> L={left}, R={right}"))
        .operand("L", &left)
        .operand("R", &right);

    let (left, right) = (left_rotate(&left, 1), left_rotate(&right, 1));
    trace
        .push(STAGE, format!("LS-1 -> L={left}, R={right}"))
        .operand("L", &left)
        .operand("R", &right);

    let k1 = permute(&left.concat(&right), tables.p8())?;
    trace
        .push(STAGE, format!("K1 = P8(L||R) = {k1}"))
        .operand("P8", tables.p8())
        .operand("K1", &k1);

    // LS-2 continues from the LS-1 halves, not from P10.
    let (left, right) = (left_rotate(&left, 2), left_rotate(&right, 2));
    trace
        .push(STAGE, format!("LS-2 -> L={left}, R={right}"))
        .operand("L", &left)
        .operand("R", &right);

    let k2 = permute(&left.concat(&right), tables.p8())?;
    trace
        .push(STAGE, format!("K2 = P8(L||R) = {k2}"))
        .operand("P8", tables.p8())
        .operand("K2", &k2);

    Ok((SubKeys { k1, k2 }, trace))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn textbook_key_schedule() {
        let key: BitString = "1010000010".parse().unwrap();
        let (keys, trace) = derive_subkeys(&key, &SdesTables::standard()).unwrap();

        assert_eq!(keys.k1.to_string(), "10100100");
        assert_eq!(keys.k2.to_string(), "01000011");
        assert_eq!(
            trace.lines(),
            vec![
                "P10(Key) = 1000001100",
                "Split -> L=10000, R=01100",
                "LS-1 -> L=00001, R=11000",
                "K1 = P8(L||R) = 10100100",
                "LS-2 -> L=00100, R=00011",
                "K2 = P8(L||R) = 01000011",
            ]
        );
    }

    #[test]
    fn round_order_swaps_for_decryption() {
        let keys = SubKeys {
            k1: "10100100".parse().unwrap(),
            k2: "01000011".parse().unwrap(),
        };
        let (first, second) = keys.round_order(Direction::Decrypt);
        assert_eq!((first, second), (&keys.k2, &keys.k1));
    }

    #[test]
    fn key_must_be_ten_bits() {
        let key: BitString = "101".parse().unwrap();
        assert!(matches!(
            derive_subkeys(&key, &SdesTables::standard()),
            Err(Error::MalformedInput(_))
        ));
    }
}
