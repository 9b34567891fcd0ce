use std::path::Path;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::compiled_contract::{load_compiled_contract, CompiledContract, CompiledContractPaths};
use crate::errors::ArtifactError;

const CONTRACT_NAME: &str = "ex_Authenticator";

fn write_artifacts(dir: &Path, sierra: &str, casm: &str) -> CompiledContractPaths {
    let paths = CompiledContractPaths::new(dir, CONTRACT_NAME);
    std::fs::write(&paths.sierra, sierra).unwrap();
    std::fs::write(&paths.casm, casm).unwrap();
    paths
}

#[test]
fn paths_use_scarb_suffixes() {
    let paths = CompiledContractPaths::new(Path::new("starknet/target/dev"), CONTRACT_NAME);
    assert_eq!(
        paths.sierra,
        Path::new("starknet/target/dev/ex_Authenticator.contract_class.json")
    );
    assert_eq!(
        paths.casm,
        Path::new("starknet/target/dev/ex_Authenticator.compiled_contract_class.json")
    );
}

#[tokio::test]
async fn loads_both_files() {
    let dir = TempDir::new().unwrap();
    let sierra = json!({ "abi": [], "sierra_program": ["0x1"] });
    let casm = json!({
        "bytecode": ["0x2"],
        "prime": "0x800000000000011000000000000000000000000000000000000000000000001",
    });
    let paths = write_artifacts(dir.path(), &sierra.to_string(), &casm.to_string());
    assert!(paths.exist());

    let loaded: CompiledContract = load_compiled_contract(dir.path(), CONTRACT_NAME).await.unwrap();
    assert_eq!(loaded, CompiledContract { sierra, casm });
}

#[tokio::test]
async fn parses_into_typed_classes() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Sierra {
        sierra_program: Vec<String>,
    }
    #[derive(Debug, Deserialize, PartialEq)]
    struct Casm {
        bytecode: Vec<String>,
    }

    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), r#"{"sierra_program": ["0x1"]}"#, r#"{"bytecode": ["0x2"]}"#);

    let loaded: CompiledContract<Sierra, Casm> =
        load_compiled_contract(dir.path(), CONTRACT_NAME).await.unwrap();
    assert_eq!(loaded.sierra, Sierra { sierra_program: vec!["0x1".to_owned()] });
    assert_eq!(loaded.casm, Casm { bytecode: vec!["0x2".to_owned()] });
}

#[tokio::test]
async fn missing_casm_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let paths = CompiledContractPaths::new(dir.path(), CONTRACT_NAME);
    std::fs::write(&paths.sierra, "{}").unwrap();
    assert!(!paths.exist());

    let result = load_compiled_contract::<Value, Value>(dir.path(), CONTRACT_NAME).await;
    assert_matches!(result, Err(ArtifactError::Io { path, .. }) if path == paths.casm);
}

#[tokio::test]
async fn malformed_sierra_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let paths = write_artifacts(dir.path(), "{ not json", "{}");

    let result = load_compiled_contract::<Value, Value>(dir.path(), CONTRACT_NAME).await;
    assert_matches!(result, Err(ArtifactError::Json { path, .. }) if path == paths.sierra);
}

#[tokio::test]
async fn invalid_utf8_casm_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let paths = CompiledContractPaths::new(dir.path(), CONTRACT_NAME);
    std::fs::write(&paths.sierra, "{}").unwrap();
    // A JSON string holding a byte that is not valid UTF-8.
    std::fs::write(&paths.casm, b"{\"bytecode\": \"\xff\"}").unwrap();

    let result = load_compiled_contract::<Value, Value>(dir.path(), CONTRACT_NAME).await;
    assert_matches!(result, Err(ArtifactError::Json { path, .. }) if path == paths.casm);
}
