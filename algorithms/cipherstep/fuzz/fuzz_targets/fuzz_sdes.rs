#![no_main]

use cipherstep::{sdes, BitString, Direction, PermutationTable, SdesTables, TableSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 3 bytes pick key and block, the rest (if any) becomes a P4 table.
    if data.len() < 3 {
        return;
    }
    let key = BitString::from_value(u64::from(u16::from_le_bytes([data[0], data[1]])), 10);
    let block = BitString::from_value(u64::from(data[2]), 8);

    let tables = if data.len() >= 7 {
        let p4 = PermutationTable::new(
            data[3..7]
                .iter()
                .map(|b| usize::from(*b))
                .collect::<Vec<_>>(),
        );
        match (TableSpec {
            p4: Some(p4),
            ..TableSpec::default()
        })
        .resolve()
        {
            Ok(tables) => tables,
            // Out-of-range tables must be rejected, never applied.
            Err(_) => return,
        }
    } else {
        SdesTables::standard()
    };

    // =============================================================================
    // 1. ROUND TRIP
    // =============================================================================

    let enc = sdes::process(&block, &key, &tables, Direction::Encrypt).expect("valid input");
    let dec = sdes::process(&enc.result, &key, &tables, Direction::Decrypt).expect("valid input");
    assert_eq!(dec.result, block, "S-DES round trip failed");

    // =============================================================================
    // 2. TRACE SHAPE
    // =============================================================================

    assert_eq!(enc.trace.len(), dec.trace.len() - 1, "Decrypt adds one key-order line");
});
