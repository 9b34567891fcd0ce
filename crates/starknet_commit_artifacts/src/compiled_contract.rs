use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::{ArtifactError, ArtifactResult};

#[cfg(test)]
#[path = "compiled_contract_test.rs"]
mod compiled_contract_test;

pub const SIERRA_FILE_SUFFIX: &str = ".contract_class.json";
pub const CASM_FILE_SUFFIX: &str = ".compiled_contract_class.json";

/// The files Scarb writes for a single contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledContractPaths {
    pub sierra: PathBuf,
    pub casm: PathBuf,
}

impl CompiledContractPaths {
    pub fn new(build_dir: &Path, contract_name: &str) -> Self {
        Self {
            sierra: build_dir.join(format!("{contract_name}{SIERRA_FILE_SUFFIX}")),
            casm: build_dir.join(format!("{contract_name}{CASM_FILE_SUFFIX}")),
        }
    }

    pub fn exist(&self) -> bool {
        self.sierra.is_file() && self.casm.is_file()
    }
}

/// A loaded contract: its Sierra class and its CASM class.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledContract<S = Value, C = Value> {
    pub sierra: S,
    pub casm: C,
}

/// Reads and parses the Sierra and CASM files of `contract_name` from `build_dir`.
/// Both files are read concurrently; if either one is missing or malformed the whole load fails.
#[instrument(skip(build_dir), fields(build_dir = %build_dir.display()))]
pub async fn load_compiled_contract<S, C>(
    build_dir: &Path,
    contract_name: &str,
) -> ArtifactResult<CompiledContract<S, C>>
where
    S: DeserializeOwned,
    C: DeserializeOwned,
{
    let paths = CompiledContractPaths::new(build_dir, contract_name);
    let (sierra, casm) =
        tokio::try_join!(read_json_file::<S>(&paths.sierra), read_json_file::<C>(&paths.casm))?;
    debug!("Loaded compiled contract {contract_name}.");
    Ok(CompiledContract { sierra, casm })
}

pub(crate) async fn read_json_file<T: DeserializeOwned>(path: &Path) -> ArtifactResult<T> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|source| ArtifactError::Io { path: path.to_owned(), source })?;
    serde_json::from_slice(&raw)
        .map_err(|source| ArtifactError::Json { path: path.to_owned(), source })
}
