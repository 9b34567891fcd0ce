use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use starknet_commit_config::dumping::{ser_param, SerializeConfig};
use starknet_commit_config::{ParamPath, ParamPrivacyInput, SerializedParam};
use starknet_commit_infra_utils::run_until::PollPolicy;
use starknet_types_core::felt::Felt;
use validator::Validate;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

// First predeployed account of a devnet started with `--seed 42`. Test-only credentials.
pub const DEVNET_SEED_42_ACCOUNT_ADDRESS: Felt =
    Felt::from_hex_unchecked("0x34ba56f92265f0868c57d3fe72ecab144fc96f97954bbbc4252cef8e8a979ba");
pub const DEVNET_SEED_42_ACCOUNT_PRIVATE_KEY: Felt =
    Felt::from_hex_unchecked("0xb137668388dbe9acdfa3bc734cc2c469");

/// The L2 account that declares and deploys contracts.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Validate)]
pub struct L2AccountConfig {
    pub address: Felt,
    pub private_key: Felt,
}

impl Default for L2AccountConfig {
    fn default() -> Self {
        Self {
            address: DEVNET_SEED_42_ACCOUNT_ADDRESS,
            private_key: DEVNET_SEED_42_ACCOUNT_PRIVATE_KEY,
        }
    }
}

impl SerializeConfig for L2AccountConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "address",
                &self.address,
                "Address of the L2 account contract.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "private_key",
                &self.private_key,
                "Private key of the L2 account signer.",
                ParamPrivacyInput::Private,
            ),
        ])
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Validate)]
pub struct TxPollingConfig {
    #[serde(with = "starknet_commit_config::converters::duration_as_millis")]
    pub interval: Duration,
    #[validate(range(min = 1))]
    pub max_attempts: usize,
}

impl Default for TxPollingConfig {
    fn default() -> Self {
        Self { interval: Duration::from_millis(100), max_attempts: 100 }
    }
}

impl TxPollingConfig {
    pub fn policy(&self) -> PollPolicy {
        PollPolicy { interval: self.interval, max_attempts: self.max_attempts }
    }
}

impl SerializeConfig for TxPollingConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "interval",
                &u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
                "Interval between transaction receipt polls, in milliseconds.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "max_attempts",
                &self.max_attempts,
                "Number of receipt polls before a transaction is considered lost.",
                ParamPrivacyInput::Public,
            ),
        ])
    }
}
