//! Loading of config objects from their flattened representation.
//!
//! The default values of a config are taken from its dump, then overridden by the values of a
//! flat JSON file:
//!
//! ```json
//! {
//!     "devnet.port": 5055,
//!     "l1.spawn_anvil": false
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};
use validator::Validate;

use crate::dumping::SerializeConfig;
use crate::{ConfigError, ParamPath, FIELD_SEPARATOR};

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Deserializes and validates a config from a map of param paths to values.
pub fn load<T: DeserializeOwned + Validate>(
    config_map: &BTreeMap<ParamPath, Value>,
) -> Result<T, ConfigError> {
    let nested_config = unflatten(config_map)?;
    let config: T = serde_json::from_value(nested_config)?;
    config.validate()?;
    Ok(config)
}

/// Loads a config whose values are the defaults of `T`, overridden by `overrides`.
/// Fails if an override does not match any param of `T`.
pub fn load_with_overrides<T>(overrides: BTreeMap<ParamPath, Value>) -> Result<T, ConfigError>
where
    T: SerializeConfig + Default + DeserializeOwned + Validate,
{
    let mut config_map: BTreeMap<ParamPath, Value> =
        T::default().dump().into_iter().map(|(path, param)| (path, param.value)).collect();
    for (param_path, value) in overrides {
        let Some(current_value) = config_map.get_mut(&param_path) else {
            return Err(ConfigError::UnknownParam { param_path });
        };
        debug!("Overriding {param_path}: {current_value} -> {value}.");
        *current_value = value;
    }
    load(&config_map)
}

/// Loads a config from a flat JSON file of param paths to values; missing params take their
/// default values.
pub fn load_config_file<T>(file_path: &Path) -> Result<T, ConfigError>
where
    T: SerializeConfig + Default + DeserializeOwned + Validate,
{
    info!("Loading config from {}.", file_path.display());
    let raw_config = fs::read_to_string(file_path).map_err(|source| ConfigError::ReadFile {
        path: file_path.display().to_string(),
        source,
    })?;
    let overrides = match serde_json::from_str::<Value>(&raw_config)? {
        Value::Object(map) => map.into_iter().collect(),
        other => return Err(ConfigError::NotAnObject(other)),
    };
    load_with_overrides(overrides)
}

// Rebuilds the nested JSON object from dot-separated param paths.
fn unflatten(config_map: &BTreeMap<ParamPath, Value>) -> Result<Value, ConfigError> {
    let mut root = Map::new();
    for (param_path, value) in config_map {
        let conflict = || ConfigError::ConflictingParamPaths { param_path: param_path.clone() };
        let mut components: Vec<&str> = param_path.split(FIELD_SEPARATOR).collect();
        let Some(leaf) = components.pop() else {
            continue;
        };

        let mut current = &mut root;
        for component in components {
            let entry =
                current.entry(component.to_owned()).or_insert_with(|| Value::Object(Map::new()));
            current = entry.as_object_mut().ok_or_else(conflict)?;
        }
        if current.insert(leaf.to_owned(), value.clone()).is_some() {
            return Err(conflict());
        }
    }
    Ok(Value::Object(root))
}
