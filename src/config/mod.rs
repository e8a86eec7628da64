use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    errors::BuildInfoError,
    record::{PrimitiveFields, STRING_INITIAL},
};

/// Initial values a record is created with.
///
/// Every key is optional in JSON. Primitive fields are flattened next to
/// `string`, for example `{ "int8": -1, "bool": true, "string": "Boot" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    #[serde(flatten)]
    pub primitives: PrimitiveFields,
    pub string: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            primitives: PrimitiveFields::default(),
            string: STRING_INITIAL.into(),
        }
    }
}

impl RecordConfig {
    pub fn from_json_str(data: &str) -> Result<Self, BuildInfoError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, BuildInfoError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            let config = Self::from_json_str(&data)?;
            tracing::info!(path = %path.display(), "loaded record configuration");
            Ok(config)
        } else {
            tracing::warn!(path = %path.display(), "record configuration not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, BuildInfoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
