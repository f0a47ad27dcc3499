//! Simplified DES
//!
//! A 10-bit key yields two 8-bit round keys; an 8-bit block passes through
//! IP, two Feistel rounds and IP-1. The permutation tables are supplied by the
//! caller so the trace can show how any table set behaves, not just the
//! textbook one.

mod feistel;
mod keyschedule;
pub mod tables;

pub use feistel::run_feistel;
pub use keyschedule::{derive_subkeys, SubKeys};
pub use tables::{SdesTables, TableSpec};

use crate::bits::BitString;
use crate::trace::Trace;
use crate::types::{Direction, Result};

#[cfg(feature = "multithread")]
use rayon::prelude::*;

// =============================================================================
// END-TO-END
// =============================================================================

/// Output of [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SdesOutput {
    /// Direction the block was run in.
    pub direction: Direction,
    /// Round keys in schedule order.
    pub subkeys: SubKeys,
    /// Ciphertext (encrypt) or plaintext (decrypt).
    pub result: BitString,
    /// Key schedule followed by the Feistel network.
    pub trace: Trace,
}

/// Encrypt or decrypt one 8-bit block under a 10-bit key.
///
/// # Example
/// ```rust
/// use cipherstep::{sdes, BitString, Direction, SdesTables};
///
/// let key: BitString = "1010000010".parse()?;
/// let block: BitString = "10010111".parse()?;
/// let out = sdes::process(&block, &key, &SdesTables::standard(), Direction::Encrypt)?;
/// assert_eq!(out.result.to_string(), "00111000");
/// # Ok::<(), cipherstep::Error>(())
/// ```
///
/// # Errors
/// [`Error::MalformedInput`](crate::Error::MalformedInput) for a key that is
/// not 10 bits or a block that is not 8 bits, plus anything raised by
/// [`derive_subkeys`] or [`run_feistel`].
pub fn process(
    text: &BitString,
    key: &BitString,
    tables: &SdesTables,
    direction: Direction,
) -> Result<SdesOutput> {
    text.require_len("block", tables::BLOCK_BITS)?;
    let (subkeys, mut trace) = derive_subkeys(key, tables)?;
    let (result, network) = run_feistel(text, &subkeys, tables, direction)?;
    trace.extend(network);

    Ok(SdesOutput {
        direction,
        subkeys,
        result,
        trace,
    })
}

/// Run [`process`] on every block independently, keeping input order.
///
/// Blocks are processed in parallel with the `multithread` feature. The first
/// failing block fails the whole batch.
///
/// # Errors
/// Any error from [`process`].
pub fn process_blocks(
    blocks: &[BitString],
    key: &BitString,
    tables: &SdesTables,
    direction: Direction,
) -> Result<Vec<SdesOutput>> {
    #[cfg(feature = "multithread")]
    {
        blocks
            .par_iter()
            .map(|block| process(block, key, tables, direction))
            .collect()
    }

    #[cfg(not(feature = "multithread"))]
    {
        blocks
            .iter()
            .map(|block| process(block, key, tables, direction))
            .collect()
    }
}
