//! Placeholder substitution.
//!
//! Pure text transform: every `{name}` token whose name resolves in the live
//! state is replaced by that variable's current value; unresolved tokens are
//! left verbatim. No markup parsing happens here, so substitution keeps
//! working on mid-edit invalid documents.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::state::LiveState;

/// `{name}`: a single brace-delimited name, matched literally. No escaping
/// mechanism exists.
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("token pattern compiles"));

/// Replace every resolvable placeholder token in `text` with its variable's
/// current value, stringified with default numeric formatting.
///
/// The replacement is a single pass over the text, so the result is
/// order-independent across variables: a substituted value is never itself
/// rescanned for tokens.
pub fn substitute(text: &str, state: &LiveState) -> String {
    if state.is_empty() {
        return text.to_string();
    }
    TOKEN
        .replace_all(text, |caps: &Captures<'_>| match state.get(&caps[1]) {
            Some(var) => var.current_value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
