//! Generator for cipherstep test vectors
//!
//! Generates the JSON test vectors used by `tests/test_vectors.json`.
//! S-DES vectors use the textbook tables; RSA vectors include the small
//! modulus case where a character wraps.
#![allow(clippy::unwrap_used)]
use cipherstep::{rsa, sdes, BitString, Direction, SdesTables};
use serde_json::json;

fn main() {
    let tables = SdesTables::standard();

    // =========================================================================
    // 1. S-DES VECTORS
    // =========================================================================

    let sdes_inputs = [
        ("textbook_a", "1010000010", "10111101"),
        ("textbook_b", "1010000010", "10010111"),
        ("zero_key", "0000000000", "00000000"),
        ("ones", "1111111111", "11111111"),
        ("mixed", "0111111101", "10100010"),
        ("alt", "1100011110", "00101000"),
    ];

    let mut sdes_vectors = Vec::new();
    for (name, key, plaintext) in sdes_inputs {
        let key: BitString = key.parse().unwrap();
        let block: BitString = plaintext.parse().unwrap();
        let out = sdes::process(&block, &key, &tables, Direction::Encrypt).unwrap();
        sdes_vectors.push(json!({
            "name": name,
            "key": key,
            "plaintext": block,
            "ciphertext": out.result,
        }));
    }

    // =========================================================================
    // 2. RSA VECTORS
    // =========================================================================

    let rsa_inputs = [
        ("notes_small", 3, 11, "A"),
        ("classic", 61, 53, "HELLO"),
        ("sentence", 61, 53, "Rust & RSA"),
        ("empty", 17, 19, ""),
        ("pair", 101, 103, "ok?"),
    ];

    let mut rsa_vectors = Vec::new();
    for (name, p, q, message) in rsa_inputs {
        let enc = rsa::encrypt(message, p, q).unwrap();
        rsa_vectors.push(json!({
            "name": name,
            "p": p,
            "q": q,
            "e": enc.keys.public.e,
            "d": enc.keys.private.d,
            "n": enc.keys.public.n,
            "message": message,
            "ciphertext": enc.ciphertext,
        }));
    }

    let output = json!({ "sdes": sdes_vectors, "rsa": rsa_vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
