use std::str::FromStr;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address as EthereumAddress, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol;
use alloy::sol_types::SolConstructor;
use starknet_commit_artifacts::l1_artifact::L1ContractArtifact;
use starknet_types_core::felt::Felt;
use tracing::{debug, info, instrument, warn};

use crate::errors::{L1Error, L1Result};
use crate::l1_node::L1Node;

#[cfg(test)]
#[path = "starknet_commit_contract_test.rs"]
mod starknet_commit_contract_test;

pub const STARKNET_COMMIT_CONTRACT_NAME: &str = "StarknetCommit";

/// Value attached to every `commit` call, in wei. Pays for the L1 to L2 message.
pub const L1_TO_L2_MESSAGE_FEE: u128 = 18_485_000_000_000;

// The bytecode is not embedded; it is read from the Solidity build artifact at runtime.
sol! {
    #[sol(rpc)]
    contract StarknetCommit {
        constructor(address starknetCore);

        function commit(uint256 l2Address, uint256 commitment) external payable;
    }
}

pub type StarknetCommitInstance = StarknetCommit::StarknetCommitInstance<DynProvider>;

pub fn felt_to_u256(felt: Felt) -> U256 {
    U256::from_be_bytes(felt.to_bytes_be())
}

/// Creation code of `StarknetCommit`: the artifact bytecode followed by the ABI-encoded
/// constructor arguments.
pub fn deployment_code(bytecode: &[u8], starknet_core_address: EthereumAddress) -> Vec<u8> {
    let constructor_args =
        StarknetCommit::constructorCall { starknetCore: starknet_core_address }.abi_encode();
    [bytecode, constructor_args.as_slice()].concat()
}

fn parse_ethereum_address(address: &str) -> L1Result<EthereumAddress> {
    EthereumAddress::from_str(address)
        .map_err(|source| L1Error::InvalidAddress { address: address.to_string(), source })
}

fn ensure_succeeded(receipt: TransactionReceipt) -> L1Result<TransactionReceipt> {
    if receipt.status() {
        Ok(receipt)
    } else {
        warn!("L1 transaction {} reverted.", receipt.transaction_hash);
        Err(L1Error::Reverted { tx_hash: receipt.transaction_hash })
    }
}

/// Deploys `StarknetCommit` wired to the messaging contract at `messaging_contract_address`.
#[instrument(skip(node, artifact), fields(l1_url = %node.url()))]
pub async fn deploy_starknet_commit(
    node: &L1Node,
    artifact: &L1ContractArtifact,
    messaging_contract_address: &str,
) -> L1Result<StarknetCommitContract> {
    let starknet_core_address = parse_ethereum_address(messaging_contract_address)?;
    let code = deployment_code(&artifact.bytecode, starknet_core_address);
    debug!("Deploying {STARKNET_COMMIT_CONTRACT_NAME} with {} bytes of code.", code.len());

    let tx = TransactionRequest::default()
        .with_from(node.sender_address())
        .with_deploy_code(code);
    let receipt = node.provider().send_transaction(tx).await?.get_receipt().await?;
    let receipt = ensure_succeeded(receipt)?;
    let address = receipt
        .contract_address
        .ok_or(L1Error::NoContractAddress { tx_hash: receipt.transaction_hash })?;
    info!("{STARKNET_COMMIT_CONTRACT_NAME} deployed at {address}.");

    Ok(StarknetCommitContract::new(address, node.sender_address(), node.provider().clone()))
}

/// A deployed `StarknetCommit` contract.
#[derive(Clone)]
pub struct StarknetCommitContract {
    sender_address: EthereumAddress,
    instance: StarknetCommitInstance,
}

impl StarknetCommitContract {
    /// Wraps an already deployed contract.
    pub fn new(
        address: EthereumAddress,
        sender_address: EthereumAddress,
        provider: DynProvider,
    ) -> Self {
        Self { sender_address, instance: StarknetCommit::new(address, provider) }
    }

    pub fn address(&self) -> EthereumAddress {
        *self.instance.address()
    }

    /// Sends `commitment` to the L2 contract at `l2_target`, paying `value` wei for the message.
    #[instrument(skip(self), fields(contract = %self.address()), err)]
    pub async fn commit(
        &self,
        l2_target: Felt,
        commitment: Felt,
        value: U256,
    ) -> L1Result<TransactionReceipt> {
        let receipt = self
            .instance
            .commit(felt_to_u256(l2_target), felt_to_u256(commitment))
            .value(value)
            .from(self.sender_address)
            .send()
            .await?
            .get_receipt()
            .await?;
        let receipt = ensure_succeeded(receipt)?;
        info!("Commit sent to L2 in L1 transaction {}.", receipt.transaction_hash);
        Ok(receipt)
    }
}
