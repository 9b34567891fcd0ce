//! Configuration utilities for the commit flow tests.
//!
//! A config is a plain struct that derives `Serialize`, `Deserialize` and `Validate`, and
//! implements [`dumping::SerializeConfig`]. Dumping flattens the struct into a map whose keys are
//! dot-separated param paths:
//!
//! ```json
//! "devnet.port": {
//!     "description": "Port the devnet listens on.",
//!     "value": 5050,
//!     "privacy": "Public"
//! }
//! ```
//!
//! Loading goes the other way: the default dump is overridden by a flat `"param.path": value`
//! JSON file, unflattened, deserialized and validated (see [`loading`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

pub mod converters;
pub mod dumping;
pub mod loading;


/// Separates the components of a [`ParamPath`].
pub const FIELD_SEPARATOR: &str = ".";

/// A nested path of a configuration parameter.
pub type ParamPath = String;

/// A description of a configuration param.
pub type Description = String;

/// The privacy level of a config parameter, that is received as input to serialization functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamPrivacyInput {
    /// The field is visible only by a secret.
    Private,
    /// The field is visible only to node's users.
    Public,
}

/// The privacy level of a config parameter.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ParamPrivacy {
    Private,
    Public,
}

impl From<ParamPrivacyInput> for ParamPrivacy {
    fn from(user_param_privacy: ParamPrivacyInput) -> Self {
        match user_param_privacy {
            ParamPrivacyInput::Private => ParamPrivacy::Private,
            ParamPrivacyInput::Public => ParamPrivacy::Public,
        }
    }
}

/// A serialized configuration parameter: its description, default value and privacy.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SerializedParam {
    pub description: Description,
    pub value: Value,
    pub privacy: ParamPrivacy,
}

/// Errors at the configuration dumping and loading process.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("Failed to write config file {path}: {source}")]
    WriteFile { path: String, source: std::io::Error },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Config file must hold a JSON object of param paths, got: {0}")]
    NotAnObject(Value),
    #[error("Param {param_path} is not part of the config.")]
    UnknownParam { param_path: ParamPath },
    #[error("Param {param_path} conflicts with a param nested under it.")]
    ConflictingParamPaths { param_path: ParamPath },
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
