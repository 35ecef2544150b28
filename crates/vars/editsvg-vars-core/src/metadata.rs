//! Persistence metadata.
//!
//! The core's only contribution to the persistence store's metadata blob:
//! the live variable set reduced to declared fields. Current values and
//! envelope timing are derived/animated and deliberately excluded.

use serde::{Deserialize, Serialize};

use crate::error::VarsError;
use crate::schema::VariableKind;
use crate::state::LiveState;

pub const METADATA_SAVED_BY: &str = "editsvgcode";
pub const METADATA_VERSION: &str = "1.0";

/// One variable as persisted: name, declared value, bounds and kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VariableMeta {
    pub name: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub kind: VariableKind,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentMetadata {
    #[serde(rename = "savedBy")]
    pub saved_by: String,
    pub version: String,
    pub variables: Vec<VariableMeta>,
}

impl DocumentMetadata {
    /// Snapshot the declared side of the live state. Copies, never moves:
    /// a failed save leaves the state untouched.
    pub fn from_state(state: &LiveState) -> Self {
        Self {
            saved_by: METADATA_SAVED_BY.to_string(),
            version: METADATA_VERSION.to_string(),
            variables: state
                .iter()
                .map(|var| VariableMeta {
                    name: var.def.name.clone(),
                    value: var.def.value,
                    min: var.def.min,
                    max: var.def.max,
                    step: var.def.step,
                    kind: var.def.kind,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, VarsError> {
        Ok(serde_json::to_string(self)?)
    }
}
