use starknet_commit_artifacts::errors::ArtifactError;
use starknet_rust::providers::ProviderError;
use starknet_rust_core::types::contract::{ComputeClassHashError, JsonError};
use starknet_types_core::felt::Felt;

pub type L2Result<T> = Result<T, L2Error>;

#[derive(thiserror::Error, Debug)]
pub enum L2Error {
    #[error("{operation} transaction failed: {message}")]
    Account { operation: &'static str, message: String },
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    ClassHash(#[from] ComputeClassHashError),
    #[error("Failed to flatten the Sierra class: {0}")]
    Flatten(#[from] JsonError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("Transaction {tx_hash:#x} reverted: {reason}")]
    TransactionReverted { tx_hash: Felt, reason: String },
    #[error("Transaction {tx_hash:#x} has no receipt after {attempts} attempts.")]
    TransactionTimeout { tx_hash: Felt, attempts: usize },
}
