//! Variable declaration vocabulary and extraction.
//!
//! Declarations live in a dedicated namespace inside the document itself:
//!
//! ```xml
//! <editsvg:variable name="w" value="150" min="20" max="300" label="Width" />
//! ```
//!
//! Extraction walks the document as structured markup and returns one
//! [`VariableDef`] per declaration, in document order. A non-parseable
//! document yields no declarations rather than an error; substitution still
//! proceeds on the raw text.

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use serde::{Deserialize, Serialize};

use crate::error::VarsError;

/// Namespace URI that scopes variable declarations.
pub const VARIABLE_NS: &str = "http://editsvgcode.com";
/// Local element name of a declaration.
pub const VARIABLE_TAG: &str = "variable";

/// Declaration attribute names, exported for editor-completion glue that
/// consumes the same vocabulary.
pub const ATTR_NAME: &str = "name";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_MIN: &str = "min";
pub const ATTR_MAX: &str = "max";
pub const ATTR_STEP: &str = "step";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_ATTACK: &str = "attack";
pub const ATTR_DECAY: &str = "decay";
pub const ATTR_LABEL: &str = "label";

pub const DEFAULT_VALUE: f64 = 0.0;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;
pub const DEFAULT_ATTACK: f64 = 0.1;
pub const DEFAULT_DECAY: f64 = 0.5;

/// Seed document presented by hosts when no stored document exists.
pub const SAMPLE_DOCUMENT: &str = r##"<!-- sample rectangle -->
<svg width="400" height="400" xmlns="http://www.w3.org/2000/svg" xmlns:editsvg="http://editsvgcode.com">
  <editsvg:variable name="w" value="150" min="20" max="300" label="Width" />
  <editsvg:variable name="h" value="150" min="20" max="300" label="Height" />
  <editsvg:variable name="strk" value="5" min="5" max="30" type="button" attack="0.1" decay="0.8" label="Stroke Width" />

  <rect x="50" y="50" width="{w}" height="{h}"
        fill="#4285f4" stroke="#333" stroke-width="{strk}" rx="10" />
</svg>"##;

/// Control flavor of a variable. Unknown `type` attribute values map to
/// `Slider` for forward compatibility.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    #[default]
    Slider,
    Button,
}

impl VariableKind {
    fn parse(raw: &str) -> Self {
        match raw {
            "button" => VariableKind::Button,
            _ => VariableKind::Slider,
        }
    }
}

/// Parsed, authoritative description of one placeholder variable: default
/// value, interactive bounds, control kind and envelope timing. Recreated
/// wholesale on every document change.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VariableDef {
    pub name: String,
    /// Declared default (`value` attribute).
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub kind: VariableKind,
    /// Envelope timing in seconds; only meaningful for `Button` kind.
    pub attack: f64,
    pub decay: f64,
    /// Display name; falls back to `name`.
    pub label: String,
}

impl VariableDef {
    /// A definition with every attribute at its documented default.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            value: DEFAULT_VALUE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            kind: VariableKind::default(),
            attack: DEFAULT_ATTACK,
            decay: DEFAULT_DECAY,
        }
    }
}

/// Extract all variable declarations bound to `namespace`, in document order.
///
/// Malformed markup yields an empty Vec: mid-edit documents are routinely
/// invalid and must not fail the render path.
pub fn extract_variables(text: &str, namespace: &str) -> Vec<VariableDef> {
    match try_extract(text, namespace) {
        Ok(defs) => defs,
        Err(err) => {
            log::debug!("markup parse failed ({err}); treating document as variable-free");
            Vec::new()
        }
    }
}

fn try_extract(text: &str, namespace: &str) -> Result<Vec<VariableDef>, VarsError> {
    let mut reader = NsReader::from_str(text);
    let mut defs = Vec::new();

    loop {
        match reader.read_resolved_event()? {
            (ResolveResult::Bound(Namespace(ns)), Event::Start(el) | Event::Empty(el))
                if ns == namespace.as_bytes()
                    && el.local_name().as_ref() == VARIABLE_TAG.as_bytes() =>
            {
                if let Some(def) = def_from_element(&el)? {
                    defs.push(def);
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    Ok(defs)
}

/// Build a definition from one declaration element. A declaration without a
/// (non-empty) `name` attribute is skipped, not an error. Numeric attributes
/// that are absent or fail to parse fall back to their per-field defaults.
fn def_from_element(el: &BytesStart<'_>) -> Result<Option<VariableDef>, VarsError> {
    let mut name: Option<String> = None;
    let mut value: Option<String> = None;
    let mut min: Option<String> = None;
    let mut max: Option<String> = None;
    let mut step: Option<String> = None;
    let mut kind: Option<String> = None;
    let mut attack: Option<String> = None;
    let mut decay: Option<String> = None;
    let mut label: Option<String> = None;

    for attr in el.attributes() {
        let attr = attr?;
        let val = attr.unescape_value()?.into_owned();
        match attr.key.local_name().as_ref() {
            b"name" => name = Some(val),
            b"value" => value = Some(val),
            b"min" => min = Some(val),
            b"max" => max = Some(val),
            b"step" => step = Some(val),
            b"type" => kind = Some(val),
            b"attack" => attack = Some(val),
            b"decay" => decay = Some(val),
            b"label" => label = Some(val),
            _ => {}
        }
    }

    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    Ok(Some(VariableDef {
        value: numeric_attr(value, DEFAULT_VALUE),
        min: numeric_attr(min, DEFAULT_MIN),
        max: numeric_attr(max, DEFAULT_MAX),
        step: numeric_attr(step, DEFAULT_STEP),
        kind: kind.map(|k| VariableKind::parse(&k)).unwrap_or_default(),
        attack: numeric_attr(attack, DEFAULT_ATTACK),
        decay: numeric_attr(decay, DEFAULT_DECAY),
        label: label.filter(|l| !l.is_empty()).unwrap_or_else(|| name.clone()),
        name,
    }))
}

fn numeric_attr(raw: Option<String>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(default)
}
