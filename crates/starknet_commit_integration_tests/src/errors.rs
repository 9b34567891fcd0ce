use starknet_commit_artifacts::errors::ArtifactError;
use starknet_commit_config::ConfigError;
use starknet_commit_devnet::errors::DevnetError;
use starknet_commit_l1::errors::L1Error;
use starknet_commit_l2::errors::L2Error;

pub type FlowTestResult<T> = Result<T, FlowTestError>;

#[derive(thiserror::Error, Debug)]
pub enum FlowTestError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error("Re-attaching the messaging contract at {expected} returned {actual}.")]
    BridgeAddressChanged { expected: String, actual: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Devnet(#[from] DevnetError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    L1(#[from] L1Error),
    #[error(transparent)]
    L2(#[from] L2Error),
}
