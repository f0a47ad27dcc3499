//! # cipherstep
//!
//! Step-by-step tracer for two textbook ciphers: RSA over small primes and
//! simplified DES (S-DES). Every engine call returns its result together with
//! an ordered [`Trace`] of each intermediate value, ready to be printed for a
//! class or serialized for another front end.
//!
//! Key sizes are toy-scale and there is no primality check. This is a teaching
//! aid, not a cipher to protect anything with.

//! # Usage
//! ```rust
//! use cipherstep::{rsa, sdes, BitString, Direction, SdesTables};
//!
//! // 1. RSA
//! let enc = rsa::encrypt("HI", 61, 53)?;
//! let dec = rsa::decrypt(&enc.ciphertext, 61, 53)?;
//! assert_eq!(dec.plaintext, "HI");
//! println!("{}", enc.trace);
//!
//! // 2. S-DES
//! let key: BitString = "1010000010".parse()?;
//! let block: BitString = "10111101".parse()?;
//! let out = sdes::process(&block, &key, &SdesTables::standard(), Direction::Encrypt)?;
//! assert_eq!(out.result.to_string(), "01110101");
//! # Ok::<(), cipherstep::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod arith;
mod bits;
pub mod rsa;
pub mod sdes;
mod trace;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use arith::{gcd, mod_pow, modular_inverse};
pub use bits::{left_rotate, permute, xor_bits, BitString, PermutationTable};
pub use rsa::{KeyPair, PrivateKey, PublicKey};
pub use sdes::{SdesOutput, SdesTables, SubKeys, TableSpec};
pub use trace::{Operand, Stage, Trace, TraceEntry};
pub use types::{Direction, Error, Result};
