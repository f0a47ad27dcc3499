use bolero::check;
use cipherstep::{gcd, left_rotate, permute, xor_bits, BitString, PermutationTable};

#[test]
fn fuzz_permute_output_length() {
    check!()
        .with_type::<(u64, u8, Vec<u8>)>()
        .for_each(|input| {
            let (value, width, raw) = input;
            let width = usize::from(*width % 64) + 1;
            let bits = BitString::from_value(*value, width);
            let table = PermutationTable::new(
                raw.iter().map(|b| usize::from(*b) % width + 1).collect::<Vec<_>>(),
            );
            let out = permute(&bits, &table).unwrap();
            assert_eq!(out.len(), table.len());
        });
}

#[test]
fn fuzz_rotate_and_xor() {
    check!()
        .with_type::<(u64, u64, u8, usize)>()
        .for_each(|input| {
            let (a, b, width, n) = *input;
            let width = usize::from(width % 64) + 1;
            let a = BitString::from_value(a, width);
            let b = BitString::from_value(b, width);

            // Rotating by the full length is the identity.
            assert_eq!(left_rotate(&left_rotate(&a, n), width - n % width), a);

            // XOR is its own inverse.
            let x = xor_bits(&a, &b).unwrap();
            assert_eq!(xor_bits(&x, &b).unwrap(), a);
        });
}

#[test]
fn fuzz_gcd_symmetry() {
    check!().with_type::<(u64, u64)>().for_each(|input| {
        let (a, b) = *input;
        assert_eq!(gcd(a, b), gcd(b, a));
        assert_eq!(gcd(a, 0), a);
    });
}
