//! Keep an existing YAML config file in step with the fields `Config` knows.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key of the config file with the value written when it is missing.
fn expected_keys() -> Vec<(&'static str, Value)> {
    let defaults = Config::default();
    vec![
        ("database", Value::String(defaults.database)),
        ("default_unit", Value::String(defaults.default_unit)),
        ("default_responsible", Value::String(defaults.default_responsible)),
        ("default_shift", Value::String(defaults.default_shift)),
        ("separator_char", Value::String(defaults.separator_char)),
    ]
}

fn read_mapping(conf_file: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(conf_file).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", conf_file.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: expected a mapping at the top level",
            conf_file.display()
        ))),
    }
}

/// Keys `Config` expects that are absent from the file.
pub fn missing_keys(conf_file: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(conf_file)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String((*k).to_string())))
        .map(|(k, _)| k)
        .collect())
}

/// Add every missing key with its default value and rewrite the file.
/// Existing values are never touched. Returns the keys that were added.
pub fn add_missing_keys(conf_file: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(conf_file)?;
    let mut added = Vec::new();

    for (key, value) in expected_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, value);
            added.push(key);
        }
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
        fs::write(conf_file, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
