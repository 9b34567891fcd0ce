use alloy::primitives::U256;
use alloy::rpc::types::TransactionReceipt;
use starknet_commit_artifacts::l1_artifact::load_l1_artifact;
use starknet_commit_devnet::devnet::Devnet;
use starknet_commit_devnet::rpc_objects::{FlushResponse, RestartParams};
use starknet_commit_l1::l1_node::L1Node;
use starknet_commit_l1::starknet_commit_contract::{
    deploy_starknet_commit,
    StarknetCommitContract,
    L1_TO_L2_MESSAGE_FEE,
};
use starknet_commit_l2::deployer::{DeployedL2Contract, L2Deployer};
use starknet_types_core::felt::Felt;
use tracing::{info, instrument};

use crate::config::FlowTestConfig;
use crate::errors::{FlowTestError, FlowTestResult};

/// The L1 node, the devnet and the contracts of the commit flow.
///
/// The L1 side (node, messaging contract, `StarknetCommit`) lives as long as the setup. The L2
/// side is wiped by [`CommitFlowSetup::restart_l2`], after which authenticators must be deployed
/// again.
pub struct CommitFlowSetup {
    config: FlowTestConfig,
    // Declared before `l1_node` so that the devnet is killed first.
    devnet: Devnet,
    l2_deployer: L2Deployer,
    starknet_commit: StarknetCommitContract,
    messaging_contract_address: String,
    l1_node: L1Node,
}

impl CommitFlowSetup {
    /// Starts both nodes, loads the L1 messaging contract and deploys `StarknetCommit` on L1.
    pub async fn new(config: FlowTestConfig) -> FlowTestResult<Self> {
        let l1_node = L1Node::start(&config.l1).await?;
        let devnet = Devnet::spawn(config.devnet.clone()).await?;

        let messaging_contract_address = devnet
            .client()
            .load_l1_messaging_contract(l1_node.url(), None)
            .await?
            .messaging_contract_address;

        let artifact_path = config.artifacts.starknet_commit_artifact_path()?;
        let artifact = load_l1_artifact(&artifact_path).await?;
        let starknet_commit =
            deploy_starknet_commit(&l1_node, &artifact, &messaging_contract_address).await?;

        let l2_deployer = L2Deployer::new(
            devnet.rpc_url().clone(),
            &config.l2_account,
            config.tx_polling.clone(),
        )
        .await?;

        Ok(Self {
            config,
            devnet,
            l2_deployer,
            starknet_commit,
            messaging_contract_address,
            l1_node,
        })
    }

    pub fn messaging_contract_address(&self) -> &str {
        &self.messaging_contract_address
    }

    /// Declares (if needed) and deploys a new authenticator instance on L2.
    pub async fn deploy_authenticator(&self) -> FlowTestResult<DeployedL2Contract> {
        let artifacts = &self.config.artifacts;
        let authenticator = self
            .l2_deployer
            .deploy_from_build_dir(
                &artifacts.resolved_l2_build_dir()?,
                &artifacts.authenticator_contract_name,
                vec![],
            )
            .await?;
        info!("Authenticator deployed at {:#x}.", authenticator.address);
        Ok(authenticator)
    }

    /// Commits `commitment` to `l2_target`, paying the L1 to L2 message fee.
    pub async fn commit(
        &self,
        l2_target: Felt,
        commitment: Felt,
    ) -> FlowTestResult<TransactionReceipt> {
        self.commit_with_value(l2_target, commitment, U256::from(L1_TO_L2_MESSAGE_FEE)).await
    }

    pub async fn commit_with_value(
        &self,
        l2_target: Felt,
        commitment: Felt,
        value: U256,
    ) -> FlowTestResult<TransactionReceipt> {
        Ok(self.starknet_commit.commit(l2_target, commitment, value).await?)
    }

    pub async fn flush(&self) -> FlowTestResult<FlushResponse> {
        Ok(self.devnet.client().flush().await?)
    }

    /// Pending messages, without delivering them.
    pub async fn pending_messages(&self) -> FlowTestResult<FlushResponse> {
        Ok(self.devnet.client().flush_dry_run().await?)
    }

    /// Wipes the L2 state and re-attaches the postman to the messaging contract already on L1.
    #[instrument(skip(self), fields(messaging_contract = %self.messaging_contract_address))]
    pub async fn restart_l2(&self) -> FlowTestResult<()> {
        self.devnet.restart(RestartParams::default()).await?;
        let reloaded = self
            .devnet
            .client()
            .load_l1_messaging_contract(
                self.l1_node.url(),
                Some(self.messaging_contract_address.as_str()),
            )
            .await?
            .messaging_contract_address;

        if !reloaded.eq_ignore_ascii_case(&self.messaging_contract_address) {
            return Err(FlowTestError::BridgeAddressChanged {
                expected: self.messaging_contract_address.clone(),
                actual: reloaded,
            });
        }
        info!("L2 restarted, messaging contract re-attached.");
        Ok(())
    }
}
