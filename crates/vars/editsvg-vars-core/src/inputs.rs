//! Input contracts for the engine.
//!
//! Hosts batch everything that happened since the last frame into one
//! [`Inputs`] and pass it to `Engine::update()`. Document edits are the only
//! input that re-runs extraction; sliders and triggers mutate live state
//! directly.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Full replacement text from the document surface, if the user edited.
    #[serde(default)]
    pub document_edit: Option<String>,
    /// Slider drags applied before any edit this frame.
    #[serde(default)]
    pub sliders: Vec<SliderInput>,
    /// Names of trigger variables whose control was activated this frame.
    #[serde(default)]
    pub triggers: Vec<String>,
}

impl Inputs {
    /// A lone document edit.
    pub fn edit(text: impl Into<String>) -> Self {
        Self {
            document_edit: Some(text.into()),
            ..Self::default()
        }
    }

    /// A lone slider drag.
    pub fn slider(name: impl Into<String>, value: f64) -> Self {
        Self {
            sliders: vec![SliderInput {
                name: name.into(),
                value,
            }],
            ..Self::default()
        }
    }

    /// A lone trigger activation.
    pub fn trigger(name: impl Into<String>) -> Self {
        Self {
            triggers: vec![name.into()],
            ..Self::default()
        }
    }
}

/// One slider drag: the value is clamped into the variable's bounds on apply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SliderInput {
    pub name: String,
    pub value: f64,
}
