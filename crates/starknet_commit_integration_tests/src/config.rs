use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use itertools::chain;
use serde::{Deserialize, Serialize};
use starknet_commit_artifacts::compiled_contract::CompiledContractPaths;
use starknet_commit_artifacts::l1_artifact::hardhat_artifact_path;
use starknet_commit_config::dumping::{prepend_sub_config_name, ser_param, SerializeConfig};
use starknet_commit_config::loading::load_config_file;
use starknet_commit_config::{ConfigError, ParamPath, ParamPrivacyInput, SerializedParam};
use starknet_commit_devnet::config::DevnetConfig;
use starknet_commit_infra_utils::path::resolve_project_path;
use starknet_commit_l1::config::L1NodeConfig;
use starknet_commit_l1::starknet_commit_contract::STARKNET_COMMIT_CONTRACT_NAME;
use starknet_commit_l2::config::{L2AccountConfig, TxPollingConfig};
use tracing::info;
use validator::Validate;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Path of a flat JSON config file overriding [`FlowTestConfig::default`].
pub const FLOW_TEST_CONFIG_ENV_VAR: &str = "STARKNET_COMMIT_FLOW_CONFIG";
pub const AUTHENTICATOR_CONTRACT_NAME: &str = "ex_Authenticator";

/// Locations of the compiled contracts. Relative paths are resolved from the project root.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Validate)]
pub struct ArtifactsConfig {
    pub l2_build_dir: PathBuf,
    pub l1_artifacts_dir: PathBuf,
    #[validate(length(min = 1))]
    pub authenticator_contract_name: String,
    #[validate(length(min = 1))]
    pub starknet_commit_contract_name: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            l2_build_dir: PathBuf::from("starknet/target/dev"),
            l1_artifacts_dir: PathBuf::from("artifacts/contracts"),
            authenticator_contract_name: AUTHENTICATOR_CONTRACT_NAME.to_string(),
            starknet_commit_contract_name: STARKNET_COMMIT_CONTRACT_NAME.to_string(),
        }
    }
}

impl ArtifactsConfig {
    pub fn resolved_l2_build_dir(&self) -> std::io::Result<PathBuf> {
        resolve_project_path(&self.l2_build_dir)
    }

    pub fn authenticator_paths(&self) -> std::io::Result<CompiledContractPaths> {
        Ok(CompiledContractPaths::new(
            &self.resolved_l2_build_dir()?,
            &self.authenticator_contract_name,
        ))
    }

    pub fn starknet_commit_artifact_path(&self) -> std::io::Result<PathBuf> {
        let artifacts_dir = resolve_project_path(&self.l1_artifacts_dir)?;
        Ok(hardhat_artifact_path(&artifacts_dir, &self.starknet_commit_contract_name))
    }
}

impl SerializeConfig for ArtifactsConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "l2_build_dir",
                &self.l2_build_dir,
                "Scarb build directory holding the Sierra and CASM classes.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "l1_artifacts_dir",
                &self.l1_artifacts_dir,
                "Hardhat or Foundry output directory holding the Solidity artifacts.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "authenticator_contract_name",
                &self.authenticator_contract_name,
                "Name of the L2 contract receiving the commits.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "starknet_commit_contract_name",
                &self.starknet_commit_contract_name,
                "Name of the L1 contract sending the commits.",
                ParamPrivacyInput::Public,
            ),
        ])
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Validate)]
pub struct FlowTestConfig {
    #[validate(nested)]
    pub devnet: DevnetConfig,
    #[validate(nested)]
    pub l1: L1NodeConfig,
    #[validate(nested)]
    pub l2_account: L2AccountConfig,
    #[validate(nested)]
    pub artifacts: ArtifactsConfig,
    #[validate(nested)]
    pub tx_polling: TxPollingConfig,
}

impl SerializeConfig for FlowTestConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        chain!(
            prepend_sub_config_name(self.devnet.dump(), "devnet"),
            prepend_sub_config_name(self.l1.dump(), "l1"),
            prepend_sub_config_name(self.l2_account.dump(), "l2_account"),
            prepend_sub_config_name(self.artifacts.dump(), "artifacts"),
            prepend_sub_config_name(self.tx_polling.dump(), "tx_polling"),
        )
        .collect()
    }
}

impl FlowTestConfig {
    /// Loads the file named by [`FLOW_TEST_CONFIG_ENV_VAR`] if set, the defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(FLOW_TEST_CONFIG_ENV_VAR) {
            Some(path) => load_config_file(Path::new(&path)),
            None => {
                info!("{FLOW_TEST_CONFIG_ENV_VAR} is not set, using the default config.");
                Ok(Self::default())
            }
        }
    }
}
