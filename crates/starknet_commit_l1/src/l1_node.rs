use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::Address as EthereumAddress;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tracing::{info, instrument};
use url::Url;

use crate::config::L1NodeConfig;
use crate::errors::L1Result;

#[cfg(test)]
#[path = "l1_node_test.rs"]
mod l1_node_test;

/// Connection to an L1 node, optionally owning a spawned Anvil process.
pub struct L1Node {
    url: Url,
    provider: DynProvider,
    sender_address: EthereumAddress,
    // Killed on drop.
    _anvil: Option<AnvilInstance>,
}

impl L1Node {
    #[instrument(skip(config), fields(spawn_anvil = config.spawn_anvil))]
    pub async fn start(config: &L1NodeConfig) -> L1Result<Self> {
        let (url, anvil) = if config.spawn_anvil {
            let anvil = Anvil::new().port(config.anvil_port).try_spawn()?;
            (anvil.endpoint_url(), Some(anvil))
        } else {
            (config.node_url.clone(), None)
        };

        let provider = ProviderBuilder::new().connect_http(url.clone()).erased();
        let chain_id = provider.get_chain_id().await?;
        info!("Connected to L1 node at {url} with chain id {chain_id}.");

        Ok(Self { url, provider, sender_address: config.sender_address, _anvil: anvil })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn sender_address(&self) -> EthereumAddress {
        self.sender_address
    }
}
