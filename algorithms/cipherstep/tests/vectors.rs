//! Reference Test Vectors for cipherstep
//!
//! This test verifies both engines against the JSON test vectors in
//! `tests/test_vectors.json` (regenerate with the `generate_test_vectors` example).

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use cipherstep::{rsa, sdes, BitString, Direction, SdesTables};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct SdesVector {
    name: String,
    key: BitString,
    plaintext: BitString,
    ciphertext: BitString,
}

#[derive(Deserialize)]
struct RsaVector {
    name: String,
    p: u64,
    q: u64,
    e: u64,
    d: u64,
    n: u64,
    message: String,
    ciphertext: Vec<u64>,
}

#[derive(Deserialize)]
struct TestVectors {
    sdes: Vec<SdesVector>,
    rsa: Vec<RsaVector>,
}

fn load() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).expect("Failed to parse JSON")
}

#[test]
fn test_sdes_vectors() {
    let tables = SdesTables::standard();

    println!("\n=== Verifying S-DES Vectors ===");
    for v in load().sdes {
        let enc = sdes::process(&v.plaintext, &v.key, &tables, Direction::Encrypt).unwrap();
        assert_eq!(enc.result, v.ciphertext, "Encrypt mismatch: {}", v.name);

        let dec = sdes::process(&v.ciphertext, &v.key, &tables, Direction::Decrypt).unwrap();
        assert_eq!(dec.result, v.plaintext, "Decrypt mismatch: {}", v.name);
        println!("✅ {:<12} | {} -> {}", v.name, v.plaintext, v.ciphertext);
    }
}

#[test]
fn test_rsa_vectors() {
    println!("\n=== Verifying RSA Vectors ===");
    for v in load().rsa {
        let enc = rsa::encrypt(&v.message, v.p, v.q).unwrap();
        assert_eq!(
            (enc.keys.public.e, enc.keys.private.d, enc.keys.public.n),
            (v.e, v.d, v.n),
            "Key mismatch: {}",
            v.name
        );
        assert_eq!(enc.ciphertext, v.ciphertext, "Ciphertext mismatch: {}", v.name);

        let dec = rsa::decrypt(&v.ciphertext, v.p, v.q).unwrap();
        if v.message.chars().all(|c| u64::from(u32::from(c)) < v.n) {
            assert_eq!(dec.plaintext, v.message, "Round trip mismatch: {}", v.name);
        }
        println!("✅ {:<12} | {:?} -> {:?}", v.name, v.message, v.ciphertext);
    }
}
