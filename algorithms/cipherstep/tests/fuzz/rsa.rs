use bolero::check;
use cipherstep::{gcd, rsa};

/// Primes small enough that the brute-force inverse search stays fast, with
/// `p * q` above every code point the round trip feeds in.
const PRIMES: [u64; 8] = [211, 223, 227, 229, 233, 239, 241, 251];

#[test]
fn fuzz_rsa_round_trip() {
    check!()
        .with_type::<(u8, u8, String)>()
        .for_each(|input| {
            let (i, j, text) = input;
            let p = PRIMES[usize::from(*i) % PRIMES.len()];
            let q = PRIMES[usize::from(*j) % PRIMES.len()];
            if p == q {
                return;
            }
            let n = p * q;
            let message: String = text.chars().filter(|&c| u64::from(u32::from(c)) < n).collect();

            let enc = rsa::encrypt(&message, p, q).unwrap();
            let dec = rsa::decrypt(&enc.ciphertext, p, q).unwrap();
            assert_eq!(dec.plaintext, message);
        });
}

#[test]
fn fuzz_rsa_key_invariants() {
    check!().with_type::<(u16, u16)>().for_each(|input| {
        let p = u64::from(input.0 % 128) + 2;
        let q = u64::from(input.1 % 128) + 2;

        match rsa::generate_keys(p, q) {
            Ok((keys, _)) => {
                let phi = (p - 1) * (q - 1);
                assert_eq!(keys.public.n, p * q);
                assert_eq!(gcd(keys.public.e, phi), 1);
                assert_eq!((keys.public.e * keys.private.d) % phi, 1);
                assert!((2..keys.public.e).all(|e| gcd(e, phi) != 1), "e is not minimal");
            }
            Err(err) => assert!(matches!(err, cipherstep::Error::DegenerateKey(_))),
        }
    });
}
