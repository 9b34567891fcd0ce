use alloy::primitives::TxHash;
use alloy::providers::PendingTransactionError;
use alloy::rpc::json_rpc::RpcError;
use alloy::transports::TransportErrorKind;

pub type L1Result<T> = Result<T, L1Error>;

#[derive(thiserror::Error, Debug)]
pub enum L1Error {
    #[error(transparent)]
    Anvil(#[from] alloy::node_bindings::NodeError),
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error("Invalid L1 address {address}: {source}")]
    InvalidAddress { address: String, source: alloy::primitives::hex::FromHexError },
    #[error("Deployment transaction {tx_hash} did not create a contract.")]
    NoContractAddress { tx_hash: TxHash },
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
    #[error("L1 transaction {tx_hash} reverted.")]
    Reverted { tx_hash: TxHash },
    #[error(transparent)]
    Rpc(#[from] RpcError<TransportErrorKind>),
}
