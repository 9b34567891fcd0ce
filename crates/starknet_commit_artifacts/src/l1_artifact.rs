use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::compiled_contract::read_json_file;
use crate::errors::{ArtifactError, ArtifactResult};

#[cfg(test)]
#[path = "l1_artifact_test.rs"]
mod l1_artifact_test;

/// A compiled Solidity contract, ready to be deployed.
#[derive(Clone, Debug, PartialEq)]
pub struct L1ContractArtifact {
    pub contract_name: Option<String>,
    pub abi: Value,
    /// Creation bytecode, without constructor arguments.
    pub bytecode: Vec<u8>,
}

// Hardhat writes the bytecode as a hex string, Foundry nests it under `object`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawL1Artifact {
    contract_name: Option<String>,
    #[serde(default)]
    abi: Value,
    bytecode: Option<RawBytecode>,
}

/// Returns the Hardhat artifact path of `contract_name`, e.g.
/// `<artifacts_dir>/StarknetCommit.sol/StarknetCommit.json`.
pub fn hardhat_artifact_path(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
    artifacts_dir.join(format!("{contract_name}.sol")).join(format!("{contract_name}.json"))
}

#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_l1_artifact(path: &Path) -> ArtifactResult<L1ContractArtifact> {
    let raw: RawL1Artifact = read_json_file(path).await?;
    let hex_bytecode = match raw.bytecode {
        Some(RawBytecode::Hex(hex_bytecode))
        | Some(RawBytecode::Object { object: hex_bytecode }) => hex_bytecode,
        None => return Err(ArtifactError::MissingBytecode { path: path.to_owned() }),
    };
    let digits = hex_bytecode.trim().trim_start_matches("0x");
    if digits.is_empty() {
        return Err(ArtifactError::MissingBytecode { path: path.to_owned() });
    }
    let bytecode = hex::decode(digits)
        .map_err(|source| ArtifactError::InvalidBytecode { path: path.to_owned(), source })?;

    Ok(L1ContractArtifact { contract_name: raw.contract_name, abi: raw.abi, bytecode })
}
