// crates/engine/src/settings.rs
//! Settings files.
//!
//! A settings file is JSON or YAML. Keys live either at the top level or in a
//! `sortConcentrically` section, so an editor `settings.json` can be passed
//! directly. Values of the wrong shape are dropped with a warning and the
//! built-in behaviour applies.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::filesystem;
use crate::options::{UnknownPlacement, parse_placement};

const SECTION: &str = "sortConcentrically";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub filter_blank_lines: Option<bool>,
    pub custom_order: Option<Vec<String>>,
    pub remove_duplicates: Option<bool>,
    pub unknown_placement: Option<UnknownPlacement>,
    pub normalize_keys: Option<bool>,
}

impl Settings {
    /// Read settings from `path`; `.yaml`/`.yml` files are parsed as YAML.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid JSON/YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = filesystem::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "yaml" | "yml"));

        let value: Value = if is_yaml {
            serde_yaml::from_str(&text)?
        } else {
            serde_json::from_str(&text)?
        };
        log::debug!("loaded settings from {}", path.display());
        Ok(Self::from_value(&value))
    }

    /// Extract settings from an already parsed document.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            log::warn!("settings root is not an object; ignoring it");
            return Self::default();
        };
        let section = match root.get(SECTION) {
            Some(Value::Object(section)) => section,
            _ => root,
        };

        Self {
            filter_blank_lines: field(section, "filterBlankLines"),
            custom_order: custom_order(section),
            remove_duplicates: field(section, "removeDuplicates"),
            unknown_placement: placement(section),
            normalize_keys: field(section, "normalizeKeys"),
        }
    }
}

fn field<T: DeserializeOwned>(section: &Map<String, Value>, name: &str) -> Option<T> {
    let value = section.get(name)?;
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring setting '{name}': {e}");
            None
        }
    }
}

fn custom_order(section: &Map<String, Value>) -> Option<Vec<String>> {
    let order: Vec<String> = field(section, "customOrder")?;
    if order.is_empty() {
        log::warn!("ignoring empty 'customOrder'; using the default order");
        return None;
    }
    Some(order)
}

fn placement(section: &Map<String, Value>) -> Option<UnknownPlacement> {
    let name: String = field(section, "unknownPlacement")?;
    parse_placement(&name)
        .map_err(|e| log::warn!("ignoring setting 'unknownPlacement': {e}"))
        .ok()
}

/// Read a plain-text order file: one property per line, `#` starts a comment.
///
/// # Errors
/// Fails if the file cannot be read.
pub fn load_order_file(path: &Path) -> Result<Vec<String>> {
    let text = filesystem::read_to_string(path)?;
    Ok(parse_order(&text))
}

#[must_use]
pub fn parse_order(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(name, _)| name).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
