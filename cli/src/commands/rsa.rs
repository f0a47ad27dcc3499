//! RSA Commands
//!
//! Key derivation, encryption and decryption with the trace printed first and
//! the result last.

use super::output::{print_json, Format};
use anyhow::{Context, Result};
use cipherstep::rsa;
use serde::Serialize;

#[derive(Serialize)]
struct KeysReport<'a> {
    keys: &'a cipherstep::KeyPair,
    trace: &'a cipherstep::Trace,
}

/// Derive and print the key pair for `(p, q)`.
pub fn rsa_keys(p: u64, q: u64, format: Format) -> Result<()> {
    let (keys, trace) =
        rsa::generate_keys(p, q).with_context(|| format!("Key generation failed for p = {p}, q = {q}"))?;

    match format {
        Format::Text => {
            print!("{trace}");
            println!();
            println!("Keys: {keys}");
        }
        Format::Json => print_json(&KeysReport {
            keys: &keys,
            trace: &trace,
        })?,
    }
    Ok(())
}

/// Encrypt `message` and print the trace and ciphertext.
pub fn rsa_encrypt(message: &str, p: u64, q: u64, format: Format) -> Result<()> {
    let out = rsa::encrypt(message, p, q)
        .with_context(|| format!("RSA encryption failed for p = {p}, q = {q}"))?;

    match format {
        Format::Text => print!("{}", out.trace),
        Format::Json => print_json(&out)?,
    }
    Ok(())
}

/// Parse `ciphertext` ("32 12 5") and print the trace and recovered text.
pub fn rsa_decrypt(ciphertext: &str, p: u64, q: u64, format: Format) -> Result<()> {
    let values = rsa::parse_ciphertext(ciphertext).context("Invalid ciphertext")?;
    let out = rsa::decrypt(&values, p, q)
        .with_context(|| format!("RSA decryption failed for p = {p}, q = {q}"))?;

    match format {
        Format::Text => print!("{}", out.trace),
        Format::Json => print_json(&out)?,
    }
    Ok(())
}
