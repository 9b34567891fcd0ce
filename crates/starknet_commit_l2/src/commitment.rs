use starknet_types_core::felt::Felt;
use starknet_types_core::hash::{Poseidon, StarkHash};

#[cfg(test)]
#[path = "commitment_test.rs"]
mod commitment_test;

/// The Poseidon hash of `values`, as committed from L1.
pub fn compute_commitment(values: &[Felt]) -> Felt {
    Poseidon::hash_array(values)
}

/// `0x`-prefixed lowercase hex, without leading zeros.
pub fn commitment_hex(commitment: &Felt) -> String {
    commitment.to_hex_string()
}
