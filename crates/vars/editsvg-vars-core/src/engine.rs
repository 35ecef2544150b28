//! Render orchestration: data ownership and the per-frame update loop.
//!
//! The [`Engine`] owns the raw document text, the live variable state and
//! the active envelope runs, and sequences extraction -> reconciliation ->
//! substitution on document-mutating events, substitution alone on
//! state-only events (slider drag, envelope tick). All mutation happens on
//! the host's single logical timeline; `update` is called at most once per
//! display frame and renders at most once per call.

use crate::config::Config;
use crate::envelope::{Envelope, EnvelopePhase, EnvelopeSample};
use crate::inputs::{Inputs, SliderInput};
use crate::metadata::DocumentMetadata;
use crate::outputs::{ControlSpec, CoreEvent, Outputs};
use crate::schema::{extract_variables, VariableKind};
use crate::state::LiveState;
use crate::subst::substitute;

#[derive(Debug, Default)]
pub struct Engine {
    cfg: Config,
    /// Raw (un-substituted) document text, as last seen from the editor.
    document: String,
    state: LiveState,
    /// Active envelope runs, keyed by variable name. One run per variable;
    /// retriggering replaces the run in place.
    runs: Vec<(String, Envelope)>,
    /// Last substituted text handed to the presentation sink.
    rendered: String,
    outputs: Outputs,
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Replace the document wholesale (a newly loaded file). Unlike an edit,
    /// this discards the session's live state and any running envelopes
    /// before extracting.
    pub fn load_document(&mut self, text: impl Into<String>) -> &Outputs {
        self.outputs.clear();
        self.state = LiveState::new();
        self.runs.clear();
        self.document = text.into();
        self.reextract();
        self.rendered = substitute(&self.document, &self.state);
        self.outputs.rendered = Some(self.rendered.clone());
        self.outputs.controls = Some(self.control_specs());
        &self.outputs
    }

    /// Advance one frame at wall-clock `now` (seconds).
    ///
    /// Ordering within the frame: slider drags, then trigger activations,
    /// then the document edit (the only path that re-runs extraction and
    /// reconciliation, so in-flight interactive state survives state-only
    /// frames), then envelope advancement. If anything changed, the document
    /// is substituted exactly once and published.
    pub fn update(&mut self, now: f64, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        let mut dirty = false;
        let mut defs_changed = false;

        for slider in &inputs.sliders {
            dirty |= self.apply_slider(slider);
        }
        for name in &inputs.triggers {
            dirty |= self.apply_trigger(name, now);
        }
        if let Some(text) = inputs.document_edit {
            self.document = text;
            self.reextract();
            defs_changed = true;
            dirty = true;
        }
        dirty |= self.advance_envelopes(now);

        if dirty {
            self.rendered = substitute(&self.document, &self.state);
            self.outputs.rendered = Some(self.rendered.clone());
        }
        if defs_changed {
            self.outputs.controls = Some(self.control_specs());
        }
        self.outputs.animating = !self.runs.is_empty();
        &self.outputs
    }

    /// Snapshot of every interactive control, in definition order.
    pub fn control_specs(&self) -> Vec<ControlSpec> {
        self.state.iter().map(ControlSpec::from).collect()
    }

    /// The core's contribution to the persistence store's metadata.
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata::from_state(&self.state)
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Last substituted text.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn state(&self) -> &LiveState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn apply_slider(&mut self, input: &SliderInput) -> bool {
        let target = self
            .state
            .get(&input.name)
            .map(|v| (v.def.kind, v.def.min, v.def.max));
        match target {
            Some((VariableKind::Slider, min, max)) => {
                // Bounds can be declared inverted; never panic on clamp.
                let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
                self.state.set_current(&input.name, input.value.clamp(lo, hi))
            }
            Some(_) => {
                log::warn!("slider input targets non-slider variable '{}'", input.name);
                false
            }
            None => {
                log::warn!("slider input for unknown variable '{}'", input.name);
                self.push_event(CoreEvent::Error {
                    message: format!("unknown variable '{}'", input.name),
                });
                false
            }
        }
    }

    fn apply_trigger(&mut self, name: &str, now: f64) -> bool {
        let def = self
            .state
            .get(name)
            .filter(|v| v.def.kind == VariableKind::Button)
            .map(|v| v.def.clone());
        match (def, self.state.get(name).is_some()) {
            (Some(def), _) => {
                let env = Envelope::start(&def, now);
                match self.runs.iter_mut().find(|(n, _)| n.as_str() == name) {
                    // Retrigger mid-sweep: restart the timer, no queuing.
                    Some(run) => run.1 = env,
                    None => self.runs.push((name.to_string(), env)),
                }
                self.push_event(CoreEvent::EnvelopeStarted {
                    name: name.to_string(),
                });
                true
            }
            (None, true) => {
                log::warn!("trigger for non-button variable '{name}'");
                false
            }
            (None, false) => {
                log::warn!("trigger for unknown variable '{name}'");
                self.push_event(CoreEvent::Error {
                    message: format!("unknown variable '{name}'"),
                });
                false
            }
        }
    }

    /// Re-extract definitions from the current document and reconcile. Runs
    /// whose variable vanished (or stopped being a button) are dropped.
    fn reextract(&mut self) {
        let defs = extract_variables(&self.document, &self.cfg.namespace);
        log::debug!("extracted {} variable declarations", defs.len());
        self.state = LiveState::reconcile(&self.state, defs);

        let state = &self.state;
        self.runs.retain(|(name, _)| {
            matches!(state.get(name), Some(v) if v.def.kind == VariableKind::Button)
        });

        self.push_event(CoreEvent::VariablesChanged {
            count: self.state.len(),
        });
    }

    /// Write each active run's sampled value into the live state; completed
    /// runs are removed with their value pinned at `min`.
    fn advance_envelopes(&mut self, now: f64) -> bool {
        if self.runs.is_empty() {
            return false;
        }

        let samples: Vec<(String, EnvelopeSample)> = self
            .runs
            .iter()
            .map(|(name, env)| (name.clone(), env.advance(now)))
            .collect();

        let mut finished = Vec::new();
        for (name, sample) in samples {
            self.state.set_current(&name, sample.value);
            if sample.phase == EnvelopePhase::Idle {
                finished.push(name);
            }
        }

        self.runs.retain(|(name, _)| !finished.contains(name));
        for name in finished {
            self.push_event(CoreEvent::EnvelopeFinished { name });
        }
        true
    }

    fn push_event(&mut self, event: CoreEvent) {
        if self.outputs.events.len() < self.cfg.max_events_per_tick {
            self.outputs.events.push(event);
        }
    }
}
