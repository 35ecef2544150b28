//! Live variable state and reconciliation.
//!
//! [`LiveState`] is the session-long, mutable side of the data model: one
//! [`LiveVar`] per variable, in definition order, with a by-name index.
//! Definitions are recreated wholesale on every document change; the state is
//! merged incrementally so a user-adjusted value survives unrelated edits.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::schema::VariableDef;

/// One variable's definition plus its current, possibly user- or
/// envelope-driven value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LiveVar {
    pub def: VariableDef,
    /// The value substituted into the document. Stays within
    /// `[def.min, def.max]` by construction for slider-kind variables.
    pub current_value: f64,
}

impl LiveVar {
    /// Seed a fresh entry from its declaration.
    pub fn seeded(def: VariableDef) -> Self {
        Self {
            current_value: def.value,
            def,
        }
    }
}

/// Ordered live state with by-name lookup. Names are unique: duplicate
/// declarations collapse last-declared-wins at the first occurrence's slot,
/// so iteration order still tracks document order.
#[derive(Clone, Debug, Default)]
pub struct LiveState {
    vars: Vec<LiveVar>,
    index: HashMap<String, usize>,
}

impl LiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge freshly extracted definitions with the previous state:
    /// - a name present in both keeps its previous `current_value`;
    /// - a newly declared name seeds from its declared `value`;
    /// - a name absent from `defs` is dropped.
    pub fn reconcile(previous: &LiveState, defs: Vec<VariableDef>) -> LiveState {
        let mut next = LiveState::new();
        for def in defs {
            let var = match previous.get(&def.name) {
                Some(prev) => LiveVar {
                    current_value: prev.current_value,
                    def,
                },
                None => LiveVar::seeded(def),
            };
            next.upsert(var);
        }
        next
    }

    fn upsert(&mut self, var: LiveVar) {
        match self.index.get(&var.def.name) {
            Some(&i) => self.vars[i] = var,
            None => {
                self.index.insert(var.def.name.clone(), self.vars.len());
                self.vars.push(var);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&LiveVar> {
        self.index.get(name).map(|&i| &self.vars[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut LiveVar> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.vars[i]),
            None => None,
        }
    }

    /// Write `current_value` for `name`. Returns false if the variable is
    /// not present (e.g. it was edited away mid-sweep).
    pub fn set_current(&mut self, name: &str, value: f64) -> bool {
        match self.get_mut(name) {
            Some(var) => {
                var.current_value = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveVar> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
