//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::schema::VARIABLE_NS;

/// Behavior knobs for the engine. Keep this minimal; expand without breaking
/// the serialized shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Namespace URI that scopes variable declarations.
    pub namespace: String,
    /// Maximum events retained per tick; further events are dropped.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: VARIABLE_NS.to_string(),
            max_events_per_tick: 1024,
        }
    }
}
