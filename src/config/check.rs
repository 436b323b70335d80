//! Detection and repair of config files written by older versions.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};

const KNOWN_FIELDS: [&str; 6] = [
    "tasks_file",
    "seed_file",
    "log_level",
    "hour_height_px",
    "min_event_height_px",
    "gutter_px",
];

/// Top-level keys of [`Config`] absent from the YAML document.
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let map = parse_mapping(content)?;
    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add every missing key with its default value, keeping existing values.
/// Returns the updated YAML and the keys that were added.
pub fn fill_missing(content: &str) -> AppResult<(String, Vec<&'static str>)> {
    let mut map = parse_mapping(content)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_FIELDS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    Ok((serde_yaml::to_string(&Value::Mapping(map))?, added))
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration file is not a YAML mapping".into())),
    }
}
