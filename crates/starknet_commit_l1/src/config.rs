use std::collections::BTreeMap;

use alloy::primitives::{address, Address as EthereumAddress};
use serde::{Deserialize, Serialize};
use starknet_commit_config::dumping::{ser_param, SerializeConfig};
use starknet_commit_config::{ParamPath, ParamPrivacyInput, SerializedParam};
use url::Url;
use validator::Validate;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_L1_PORT: u16 = 8545;

// The first of the 10 pre-funded accounts of Anvil and Hardhat nodes. Both nodes leave it
// unlocked, so transactions from it need no local signer.
pub const DEFAULT_L1_SENDER_ADDRESS: EthereumAddress =
    address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Validate)]
pub struct L1NodeConfig {
    /// Ignored when `spawn_anvil` is set.
    pub node_url: Url,
    pub spawn_anvil: bool,
    #[validate(range(min = 1))]
    pub anvil_port: u16,
    pub sender_address: EthereumAddress,
}

impl Default for L1NodeConfig {
    fn default() -> Self {
        Self {
            node_url: Url::parse(&format!("http://127.0.0.1:{DEFAULT_L1_PORT}"))
                .expect("Default L1 node URL should be valid."),
            spawn_anvil: true,
            anvil_port: DEFAULT_L1_PORT,
            sender_address: DEFAULT_L1_SENDER_ADDRESS,
        }
    }
}

impl SerializeConfig for L1NodeConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "node_url",
                &self.node_url.to_string(),
                "URL of an already running L1 node, used when spawn_anvil is false.",
                ParamPrivacyInput::Private,
            ),
            ser_param(
                "spawn_anvil",
                &self.spawn_anvil,
                "If true, an Anvil node is spawned for the lifetime of the test.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "anvil_port",
                &self.anvil_port,
                "Port of the spawned Anvil node.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "sender_address",
                &self.sender_address,
                "Unlocked L1 account that deploys contracts and sends messages to L2.",
                ParamPrivacyInput::Public,
            ),
        ])
    }
}
