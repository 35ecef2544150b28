//! Output contracts from the engine.
//!
//! Outputs carry at most one substituted document per tick, an optional
//! rebuilt control list (only when definitions changed), semantic events and
//! the `animating` flag hosts use to keep scheduling frames.

use serde::{Deserialize, Serialize};

use crate::schema::VariableKind;
use crate::state::LiveVar;

/// Everything a host needs to rebuild one interactive control.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlSpec {
    pub name: String,
    pub label: String,
    pub kind: VariableKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Current value the control should display.
    pub value: f64,
}

impl From<&LiveVar> for ControlSpec {
    fn from(var: &LiveVar) -> Self {
        Self {
            name: var.def.name.clone(),
            label: var.def.label.clone(),
            kind: var.def.kind,
            min: var.def.min,
            max: var.def.max,
            step: var.def.step,
            value: var.current_value,
        }
    }
}

/// Discrete semantic signals emitted during a tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum CoreEvent {
    /// Definitions were re-extracted; `count` is the reconciled variable count.
    VariablesChanged { count: usize },
    EnvelopeStarted { name: String },
    EnvelopeFinished { name: String },
    /// Recovered problem worth surfacing to the host (e.g. an input naming an
    /// unknown variable).
    Error { message: String },
}

/// Outputs returned by `Engine::update()` / `Engine::load_document()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Substituted document text, present when this tick changed anything.
    #[serde(default)]
    pub rendered: Option<String>,
    /// Rebuilt control list, present only when definitions changed.
    #[serde(default)]
    pub controls: Option<Vec<ControlSpec>>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
    /// True while envelope runs are active; hosts keep ticking every frame.
    #[serde(default)]
    pub animating: bool,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.rendered = None;
        self.controls = None;
        self.events.clear();
        self.animating = false;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rendered.is_none() && self.controls.is_none() && self.events.is_empty()
    }
}
