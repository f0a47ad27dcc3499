#![no_main]

use cipherstep::{rsa, BitString, PermutationTable, TableSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // =============================================================================
    // 1. BIT STRINGS
    // =============================================================================

    // Parsing either fails cleanly or renders back to the trimmed input.
    if let Ok(bits) = text.parse::<BitString>() {
        assert_eq!(bits.to_string(), text.trim());
    }

    // =============================================================================
    // 2. TABLES
    // =============================================================================

    // Any parsed table either validates or is rejected; never panics.
    if let Ok(table) = text.parse::<PermutationTable>() {
        let _ = TableSpec {
            p10: Some(table),
            ..TableSpec::default()
        }
        .resolve();
    }

    // =============================================================================
    // 3. RSA CIPHERTEXT
    // =============================================================================

    if let Ok(values) = rsa::parse_ciphertext(text) {
        let _ = rsa::decrypt(&values, 61, 53);
    }
});
