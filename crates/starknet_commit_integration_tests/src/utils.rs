use starknet_commit_infra_utils::command::is_command_available;

use crate::config::FlowTestConfig;

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

/// Lists what this machine lacks to run the commit flow: node binaries and compiled contracts.
pub fn missing_prerequisites(config: &FlowTestConfig) -> Vec<String> {
    let mut missing = Vec::new();
    if !is_command_available(&config.devnet.executable) {
        missing.push(format!("devnet executable `{}`", config.devnet.executable));
    }
    if config.l1.spawn_anvil && !is_command_available("anvil") {
        missing.push("anvil executable".to_string());
    }
    match config.artifacts.authenticator_paths() {
        Ok(paths) if paths.exist() => {}
        Ok(paths) => missing.push(format!("L2 artifacts {}", paths.sierra.display())),
        Err(err) => missing.push(format!("L2 build directory: {err}")),
    }
    match config.artifacts.starknet_commit_artifact_path() {
        Ok(path) if path.is_file() => {}
        Ok(path) => missing.push(format!("L1 artifact {}", path.display())),
        Err(err) => missing.push(format!("L1 artifacts directory: {err}")),
    }
    missing
}
