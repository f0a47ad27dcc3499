//! S-DES Feistel Network
//!
//! IP, two rounds of `f(half, K)` with a swap in between, then IP-1.

use super::keyschedule::SubKeys;
use super::tables::{SBox, SdesTables, BLOCK_BITS, S0, S1};
use crate::bits::{permute, xor_bits, BitString};
use crate::trace::{Stage, Trace};
use crate::types::{Direction, Error, Result};

// =============================================================================
// NETWORK
// =============================================================================

/// Run the two-round network over one 8-bit block.
///
/// For [`Direction::Decrypt`] the round keys are applied as `(K2, K1)`.
///
/// # Errors
/// - [`Error::MalformedInput`] unless `block` is 8 bits.
/// - [`Error::LengthMismatch`] if a subkey is not 8 bits.
pub fn run_feistel(
    block: &BitString,
    subkeys: &SubKeys,
    tables: &SdesTables,
    direction: Direction,
) -> Result<(BitString, Trace)> {
    block.require_len("block", BLOCK_BITS)?;
    let mut trace = Trace::new();

    let (first_key, second_key) = subkeys.round_order(direction);
    if direction == Direction::Decrypt {
        trace
            .push(
                Stage::SubkeyGeneration,
                format!("Keys reversed for Decryption: round 1 uses {first_key}, round 2 uses {second_key}"),
            )
            .operand("K1", first_key)
            .operand("K2", second_key);
    }

    // ----- initial permutation -----
    let ip = permute(block, tables.ip())?;
    trace
        .push(Stage::InitialPermutation, format!("IP(Text) = {ip}"))
        .operand("text", block)
        .operand("IP", tables.ip())
        .operand("result", &ip);

    let (l0, r0) = ip.split_halves();
    trace
        .push(Stage::InitialPermutation, format!("L0={l0}, R0={r0}"))
        .operand("L0", &l0)
        .operand("R0", &r0);

    // ----- round 1 -----
    let stage = Stage::Round(1);
    let f1 = round_function(&r0, first_key, "R0", tables, stage, &mut trace)?;
    let l1 = xor_bits(&l0, &f1)?;
    trace
        .push(stage, format!("L1 = L0 xor P4 = {l1}"))
        .operand("L1", &l1);
    trace
        .push(stage, format!("SWAP -> L={r0}, R={l1}"))
        .operand("L", &r0)
        .operand("R", &l1);

    // ----- round 2 -----
    let stage = Stage::Round(2);
    let f2 = round_function(&l1, second_key, "R1", tables, stage, &mut trace)?;
    let l2 = xor_bits(&r0, &f2)?;
    trace
        .push(stage, format!("L2 = L xor P4 = {l2}"))
        .operand("L2", &l2);

    // ----- final permutation -----
    // Output is IP-1(L2 || L1): round 2 does not swap back.
    let output = permute(&l2.concat(&l1), tables.ip_inv())?;
    trace
        .push(
            Stage::FinalPermutation,
            format!("Final Output = IP-1(L||R) = {output}"),
        )
        .operand("IP-1", tables.ip_inv())
        .operand("result", &output);

    Ok((output, trace))
}

// =============================================================================
// ROUND FUNCTION
// =============================================================================

/// `f(half, K) = P4(S0(l) ‖ S1(r))` where `l ‖ r = EP(half) xor K`.
fn round_function(
    half: &BitString,
    key: &BitString,
    label: &str,
    tables: &SdesTables,
    stage: Stage,
    trace: &mut Trace,
) -> Result<BitString> {
    let ep = permute(half, tables.ep())?;
    trace
        .push(stage, format!("EP({label}) = {ep}"))
        .operand(label, half)
        .operand("EP", tables.ep())
        .operand("result", &ep);

    let mixed = xor_bits(&ep, key)?;
    trace
        .push(stage, format!("EP xor K = {mixed}"))
        .operand("K", key)
        .operand("result", &mixed);

    let (left, right) = mixed.split_halves();
    let s0 = substitute(&left, &S0, "S0", stage, trace)?;
    let s1 = substitute(&right, &S1, "S1", stage, trace)?;

    let p4 = permute(&s0.concat(&s1), tables.p4())?;
    trace
        .push(stage, format!("P4 = {p4}"))
        .operand("S0||S1", s0.concat(&s1))
        .operand("P4", tables.p4())
        .operand("result", &p4);

    Ok(p4)
}

/// Look up a 4-bit group in `sbox`: row from bits 1 and 4, column from bits
/// 2 and 3. Yields 2 bits.
fn substitute(
    group: &BitString,
    sbox: &SBox,
    name: &str,
    stage: Stage,
    trace: &mut Trace,
) -> Result<BitString> {
    let [b0, b1, b2, b3] = <[bool; 4]>::try_from(group.as_bits()).map_err(|_| {
        Error::MalformedInput(format!("{name} input must be 4 bits, got '{group}'"))
    })?;
    let row = BitString::from_bits([b0, b3]);
    let col = BitString::from_bits([b1, b2]);
    let (r, c) = (row.to_value(), col.to_value());
    trace
        .push(stage, format!("{name}: Row = {row} = {r}, Column = {col} = {c}"))
        .operand("row", r)
        .operand("col", c);

    // row and col are 2-bit values, always within the 4x4 box
    #[allow(clippy::cast_possible_truncation)]
    let value = sbox[r as usize][c as usize];
    let out = BitString::from_value(u64::from(value), 2);
    trace
        .push(stage, format!("{name} Output = {value} -> {out}"))
        .operand(name, &out);
    Ok(out)
}
