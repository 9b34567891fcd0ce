use pretty_assertions::assert_eq;
use rstest::rstest;
use starknet_types_core::felt::Felt;

use crate::commitment::{commitment_hex, compute_commitment};

const POSEIDON_OF_ONE: &str = "0x579e8877c7755365d5ec1ec7d3a94a457eff5d1f40482bbe9729c064cdead2";

#[test]
fn commitment_of_one_matches_known_poseidon_hash() {
    let commitment = compute_commitment(&[Felt::ONE]);

    assert_eq!(commitment, Felt::from_hex_unchecked(POSEIDON_OF_ONE));
    assert_eq!(commitment_hex(&commitment), POSEIDON_OF_ONE);
}

#[test]
fn commitment_depends_on_every_value() {
    let one = compute_commitment(&[Felt::ONE]);

    assert_ne!(one, compute_commitment(&[Felt::TWO]));
    assert_ne!(one, compute_commitment(&[Felt::ONE, Felt::ONE]));
    assert_ne!(one, compute_commitment(&[]));
    assert_ne!(one, Felt::ONE);
}

#[rstest]
#[case::zero(Felt::ZERO, "0x0")]
#[case::small(Felt::from(0xabc_u64), "0xabc")]
#[case::leading_zero_nibble(Felt::from(0x0f_u64), "0xf")]
fn hex_is_prefixed_lowercase_and_minimal(#[case] value: Felt, #[case] expected: &str) {
    assert_eq!(commitment_hex(&value), expected);
}

#[test]
fn commitment_hex_parses_back() {
    let commitment = compute_commitment(&[Felt::ONE]);
    let hex = commitment_hex(&commitment);

    assert!(hex.starts_with("0x"));
    assert_eq!(hex, hex.to_lowercase());
    assert_eq!(Felt::from_hex(&hex).unwrap(), commitment);
}
