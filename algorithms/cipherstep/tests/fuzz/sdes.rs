use bolero::check;
use cipherstep::{sdes, BitString, Direction, PermutationTable, SdesTables, TableSpec};

/// Fisher-Yates over `1..=n`, driven by a fuzzer-chosen seed.
fn shuffled(n: usize, mut seed: u64) -> Vec<usize> {
    let mut v: Vec<usize> = (1..=n).collect();
    for i in (1..n).rev() {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let j = (seed >> 33) as usize % (i + 1);
        v.swap(i, j);
    }
    v
}

/// IP-1 such that IP-1(IP(x)) = x.
fn inverse(table: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; table.len()];
    for (i, &j) in table.iter().enumerate() {
        inv[j - 1] = i + 1;
    }
    inv
}

#[test]
fn fuzz_sdes_round_trip_standard_tables() {
    check!().with_type::<(u16, u8)>().for_each(|input| {
        let (key, block) = *input;
        let key = BitString::from_value(u64::from(key), 10);
        let block = BitString::from_value(u64::from(block), 8);
        let tables = SdesTables::standard();

        let enc = sdes::process(&block, &key, &tables, Direction::Encrypt).unwrap();
        let dec = sdes::process(&enc.result, &key, &tables, Direction::Decrypt).unwrap();
        assert_eq!(dec.result, block, "Round trip failed for key {key}");
    });
}

#[test]
fn fuzz_sdes_round_trip_random_tables() {
    check!()
        .with_type::<(u16, u8, u64, [u8; 12])>()
        .for_each(|input| {
            let (key, block, seed, raw) = *input;

            // =================================================================
            // TABLE SET
            // =================================================================

            // P10, P8, EP and P4 may be arbitrary in-range tables; only IP-1
            // has to undo IP for decryption to work.
            let ip = shuffled(8, seed);
            let spec = TableSpec {
                p10: Some(PermutationTable::new(shuffled(10, seed ^ 0xA5A5))),
                p8: Some(PermutationTable::new(
                    raw[..8].iter().map(|b| usize::from(b % 10) + 1).collect::<Vec<_>>(),
                )),
                ip_inv: Some(PermutationTable::new(inverse(&ip))),
                ip: Some(PermutationTable::new(ip)),
                ep: Some(PermutationTable::new(
                    raw[..8].iter().map(|b| usize::from(b % 4) + 1).collect::<Vec<_>>(),
                )),
                p4: Some(PermutationTable::new(
                    raw[8..].iter().map(|b| usize::from(b % 4) + 1).collect::<Vec<_>>(),
                )),
            };
            let tables = spec.resolve().unwrap();
            assert!(tables.inverts_ip());

            // =================================================================
            // ROUND TRIP
            // =================================================================

            let key = BitString::from_value(u64::from(key), 10);
            let block = BitString::from_value(u64::from(block), 8);
            let enc = sdes::process(&block, &key, &tables, Direction::Encrypt).unwrap();
            let dec = sdes::process(&enc.result, &key, &tables, Direction::Decrypt).unwrap();
            assert_eq!(dec.result, block);
        });
}
