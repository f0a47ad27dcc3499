//! cipherstep Basic Example
//!
//! Minimal usage: run one cipher, print the trace.

#![allow(clippy::pedantic, clippy::nursery)]

use cipherstep::{rsa, sdes, BitString, Direction, SdesTables};

fn main() -> Result<(), cipherstep::Error> {
    let enc = rsa::encrypt("HI", 61, 53)?;
    println!("{}", enc.trace);

    let key: BitString = "1010000010".parse()?;
    let block: BitString = "10111101".parse()?;
    let out = sdes::process(&block, &key, &SdesTables::standard(), Direction::Encrypt)?;
    println!("{}", out.trace);
    println!("Result: {}", out.result);
    Ok(())
}
