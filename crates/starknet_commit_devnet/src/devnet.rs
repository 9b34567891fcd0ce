use std::process::Stdio;

use starknet_commit_infra_utils::command::node_command;
use starknet_commit_infra_utils::run_until::{run_until, PollPolicy};
use tokio::process::Child;
use tracing::{error, info, instrument};
use url::Url;

use crate::client::DevnetClient;
use crate::config::DevnetConfig;
use crate::errors::{DevnetError, DevnetResult};
use crate::rpc_objects::RestartParams;

#[cfg(test)]
#[path = "devnet_test.rs"]
mod devnet_test;

/// A running devnet process. The process is killed when the handle is dropped.
#[derive(Debug)]
pub struct Devnet {
    client: DevnetClient,
    // Held for `kill_on_drop`.
    _process: Child,
}

impl Devnet {
    /// Spawns the devnet and waits until it answers liveness checks.
    #[instrument(skip(config), fields(executable = %config.executable, port = config.port))]
    pub async fn spawn(config: DevnetConfig) -> DevnetResult<Self> {
        let url = config.url()?;
        let args = config.command_args();
        info!("Spawning devnet: {} {}", config.executable, args.join(" "));

        let mut process = node_command(&config.executable)?
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| DevnetError::Spawn {
                executable: config.executable.clone(),
                source,
            })?;

        let client = DevnetClient::new(url.clone())?;
        let policy = PollPolicy {
            interval: config.startup_polling_interval,
            max_attempts: config.max_startup_attempts,
        };
        let client_ref = &client;
        let is_alive = run_until(policy, &format!("Devnet at {url}"), move || async move {
            client_ref.is_alive().await.then_some(())
        })
        .await
        .is_some();

        if !is_alive {
            if let Some(status) = process.try_wait()? {
                error!("Devnet exited with {status}.");
                return Err(DevnetError::ProcessExited { status });
            }
            return Err(DevnetError::StartupTimeout { url, attempts: config.max_startup_attempts });
        }

        info!("Devnet is alive at {url}.");
        Ok(Self { client, _process: process })
    }

    pub fn client(&self) -> &DevnetClient {
        &self.client
    }

    /// Base URL of the devnet, e.g. `http://127.0.0.1:5050/`.
    pub fn url(&self) -> &Url {
        self.client.base_url()
    }

    /// URL of the Starknet JSON-RPC endpoint.
    pub fn rpc_url(&self) -> &Url {
        self.client.rpc_url()
    }

    /// Clears all L2 state while the process keeps running.
    pub async fn restart(&self, params: RestartParams) -> DevnetResult<()> {
        self.client.restart(params).await
    }
}
