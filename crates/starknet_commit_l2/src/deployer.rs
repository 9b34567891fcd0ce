use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use starknet_commit_artifacts::compiled_contract::{load_compiled_contract, CompiledContract};
use starknet_commit_infra_utils::run_until::run_until;
use starknet_rust::accounts::{Account, ConnectedAccount, ExecutionEncoding, SingleOwnerAccount};
use starknet_rust::contract::{ContractFactory, UdcSelector};
use starknet_rust::providers::jsonrpc::HttpTransport;
use starknet_rust::providers::{JsonRpcClient, Provider, ProviderError};
use starknet_rust::signers::{LocalWallet, SigningKey};
use starknet_rust_core::types::contract::{CompiledClass, SierraClass};
use starknet_rust_core::types::{
    BlockId,
    BlockTag,
    ExecutionResult,
    FlattenedSierraClass,
    StarknetError,
};
use starknet_types_core::felt::Felt;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::{L2AccountConfig, TxPollingConfig};
use crate::errors::{L2Error, L2Result};

#[cfg(test)]
#[path = "deployer_test.rs"]
mod deployer_test;

/// Devnet predeploys both deployers; the legacy one is deprecated.
pub(crate) const DEPLOYER_UDC: UdcSelector = UdcSelector::New;

pub type L2Provider = JsonRpcClient<HttpTransport>;
pub type L2Account = SingleOwnerAccount<L2Provider, LocalWallet>;
/// A Scarb build output: Sierra class and CASM class.
pub type CairoContract = CompiledContract<SierraClass, CompiledClass>;

#[derive(Clone, Debug, PartialEq)]
pub struct DeployedL2Contract {
    pub address: Felt,
    pub class_hash: Felt,
    /// The Sierra ABI, as a JSON string.
    pub abi: String,
    /// False if the class was already known to the node.
    pub declared: bool,
}

/// Declares and deploys contracts from a single L2 account.
pub struct L2Deployer {
    account: L2Account,
    polling: TxPollingConfig,
}

impl L2Deployer {
    /// Connects to the node at `rpc_url` and reads its chain id for signing.
    #[instrument(skip(account_config, polling), fields(account = %account_config.address))]
    pub async fn new(
        rpc_url: Url,
        account_config: &L2AccountConfig,
        polling: TxPollingConfig,
    ) -> L2Result<Self> {
        let provider = JsonRpcClient::new(HttpTransport::new(rpc_url));
        let chain_id = provider.chain_id().await?;
        debug!("L2 chain id: {chain_id:#x}.");

        let signer = LocalWallet::from(SigningKey::from_secret_scalar(account_config.private_key));
        let account = SingleOwnerAccount::new(
            provider,
            signer,
            account_config.address,
            chain_id,
            ExecutionEncoding::New,
        );
        Ok(Self { account, polling })
    }

    pub fn account_address(&self) -> Felt {
        self.account.address()
    }

    /// Loads `<contract_name>` from a Scarb build directory, then declares and deploys it.
    pub async fn deploy_from_build_dir(
        &self,
        build_dir: &Path,
        contract_name: &str,
        constructor_calldata: Vec<Felt>,
    ) -> L2Result<DeployedL2Contract> {
        let contract: CairoContract = load_compiled_contract(build_dir, contract_name).await?;
        info!("Loaded {contract_name} from {}.", build_dir.display());
        self.declare_and_deploy(contract, constructor_calldata).await
    }

    /// Declares the class unless the node already knows it, then deploys a new instance with a
    /// random salt.
    #[instrument(skip_all)]
    pub async fn declare_and_deploy(
        &self,
        contract: CairoContract,
        constructor_calldata: Vec<Felt>,
    ) -> L2Result<DeployedL2Contract> {
        let CompiledContract { sierra, casm } = contract;
        let compiled_class_hash = casm.class_hash()?;
        self.declare_and_deploy_class(sierra.flatten()?, compiled_class_hash, constructor_calldata)
            .await
    }

    pub(crate) async fn declare_and_deploy_class(
        &self,
        flattened: FlattenedSierraClass,
        compiled_class_hash: Felt,
        constructor_calldata: Vec<Felt>,
    ) -> L2Result<DeployedL2Contract> {
        let class_hash = flattened.class_hash();
        let abi = flattened.abi.clone();

        let declared = if self.is_declared(class_hash).await? {
            info!("Class {class_hash:#x} is already declared.");
            false
        } else {
            self.declare(flattened, compiled_class_hash).await?;
            true
        };

        let address = self.deploy(class_hash, constructor_calldata).await?;
        Ok(DeployedL2Contract { address, class_hash, abi, declared })
    }

    async fn is_declared(&self, class_hash: Felt) -> L2Result<bool> {
        match self.account.provider().get_class(BlockId::Tag(BlockTag::Latest), class_hash).await {
            Ok(_) => Ok(true),
            Err(err) if is_class_hash_not_found(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn declare(
        &self,
        flattened: FlattenedSierraClass,
        compiled_class_hash: Felt,
    ) -> L2Result<()> {
        let class_hash = flattened.class_hash();
        let result = self
            .account
            .declare_v3(Arc::new(flattened), compiled_class_hash)
            .send()
            .await
            .map_err(|err| account_error("Declare", err))?;
        self.wait_for_acceptance(result.transaction_hash).await?;
        info!("Declared class {class_hash:#x}.");
        Ok(())
    }

    async fn deploy(&self, class_hash: Felt, constructor_calldata: Vec<Felt>) -> L2Result<Felt> {
        let salt = Felt::from(rand::thread_rng().gen::<u128>());
        let factory = ContractFactory::new_with_udc(class_hash, &self.account, DEPLOYER_UDC);
        let deployment = factory.deploy_v3(constructor_calldata, salt, false);
        let address = deployment.deployed_address();

        let result = deployment.send().await.map_err(|err| account_error("Deploy", err))?;
        self.wait_for_acceptance(result.transaction_hash).await?;
        info!("Deployed class {class_hash:#x} at {address:#x}.");
        Ok(address)
    }

    /// Polls for the receipt of `tx_hash` and fails if its execution reverted.
    async fn wait_for_acceptance(&self, tx_hash: Felt) -> L2Result<()> {
        let provider = self.account.provider();
        let subject = format!("Receipt of {tx_hash:#x}");
        let receipt = run_until(self.polling.policy(), &subject, move || async move {
            match provider.get_transaction_receipt(tx_hash).await {
                Err(ProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => None,
                response => Some(response),
            }
        })
        .await;

        match receipt {
            Some(receipt) => check_execution(tx_hash, receipt?.receipt.execution_result()),
            None => {
                Err(L2Error::TransactionTimeout { tx_hash, attempts: self.polling.max_attempts })
            }
        }
    }
}

pub(crate) fn is_class_hash_not_found(err: &ProviderError) -> bool {
    matches!(err, ProviderError::StarknetError(StarknetError::ClassHashNotFound))
}

pub(crate) fn check_execution(tx_hash: Felt, result: &ExecutionResult) -> L2Result<()> {
    match result {
        ExecutionResult::Succeeded => Ok(()),
        ExecutionResult::Reverted { reason } => {
            Err(L2Error::TransactionReverted { tx_hash, reason: reason.clone() })
        }
    }
}

fn account_error(operation: &'static str, err: impl Display) -> L2Error {
    L2Error::Account { operation, message: err.to_string() }
}
