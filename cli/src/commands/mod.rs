//! CLI Commands
//!
//! All cipherstep CLI commands organized as separate modules.

mod output;
mod rsa;
mod sdes;

pub use output::Format;
pub use rsa::{rsa_decrypt, rsa_encrypt, rsa_keys};
pub use sdes::{print_tables, sdes_run, TableArgs};
