use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use starknet_commit_config::dumping::{ser_param, SerializeConfig};
use starknet_commit_config::{ParamPath, ParamPrivacyInput, SerializedParam};
use url::Url;
use validator::Validate;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DEVNET_EXECUTABLE: &str = "starknet-devnet";
pub const DEFAULT_DEVNET_SEED: u32 = 42;
pub const DEFAULT_DEVNET_PORT: u16 = 5050;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Validate)]
pub struct DevnetConfig {
    #[validate(length(min = 1))]
    pub executable: String,
    pub seed: u32,
    pub lite_mode: bool,
    pub host: IpAddr,
    #[validate(range(min = 1))]
    pub port: u16,
    pub additional_args: Vec<String>,
    #[serde(with = "starknet_commit_config::converters::duration_as_millis")]
    pub startup_polling_interval: Duration,
    #[validate(range(min = 1))]
    pub max_startup_attempts: usize,
}

impl DevnetConfig {
    /// The command line arguments the devnet is spawned with.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = vec!["--seed".to_owned(), self.seed.to_string()];
        if self.lite_mode {
            args.push("--lite-mode".to_owned());
        }
        args.extend([
            "--host".to_owned(),
            self.host.to_string(),
            "--port".to_owned(),
            self.port.to_string(),
        ]);
        args.extend(self.additional_args.iter().cloned());
        args
    }

    pub fn url(&self) -> Result<Url, url::ParseError> {
        let host = match self.host {
            IpAddr::V4(host) => host.to_string(),
            IpAddr::V6(host) => format!("[{host}]"),
        };
        Url::parse(&format!("http://{host}:{}", self.port))
    }
}

impl Default for DevnetConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_DEVNET_EXECUTABLE.to_owned(),
            seed: DEFAULT_DEVNET_SEED,
            lite_mode: true,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_DEVNET_PORT,
            additional_args: Vec::new(),
            startup_polling_interval: Duration::from_millis(500),
            max_startup_attempts: 60,
        }
    }
}

impl SerializeConfig for DevnetConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "executable",
                &self.executable,
                "The devnet executable, either a path or a name looked up in PATH.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "seed",
                &self.seed,
                "Seed of the predeployed accounts. The L2 deployer account relies on it.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "lite_mode",
                &self.lite_mode,
                "If true, the devnet skips block hash and state root computation.",
                ParamPrivacyInput::Public,
            ),
            ser_param("host", &self.host, "Host the devnet binds to.", ParamPrivacyInput::Public),
            ser_param("port", &self.port, "Port the devnet listens on.", ParamPrivacyInput::Public),
            ser_param(
                "additional_args",
                &self.additional_args,
                "Extra command line arguments passed to the devnet as-is.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "startup_polling_interval",
                &u64::try_from(self.startup_polling_interval.as_millis()).unwrap_or(u64::MAX),
                "Interval in milliseconds between liveness checks while the devnet starts.",
                ParamPrivacyInput::Public,
            ),
            ser_param(
                "max_startup_attempts",
                &self.max_startup_attempts,
                "Number of liveness checks before giving up on the devnet.",
                ParamPrivacyInput::Public,
            ),
        ])
    }
}
