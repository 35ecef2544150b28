use editsvg_vars_core::{substitute, LiveState, VariableDef};

fn mk_state(vars: &[(&str, f64)]) -> LiveState {
    let defs = vars
        .iter()
        .map(|(name, value)| VariableDef {
            value: *value,
            ..VariableDef::new(*name)
        })
        .collect();
    LiveState::reconcile(&LiveState::new(), defs)
}

#[test]
fn replaces_token_with_current_value() {
    let state = mk_state(&[("w", 150.0)]);
    assert_eq!(substitute(r#"width="{w}""#, &state), r#"width="150""#);
}

#[test]
fn replaces_every_occurrence() {
    let state = mk_state(&[("w", 150.0)]);
    assert_eq!(
        substitute(r#"<rect width="{w}"/><circle r="{w}"/>"#, &state),
        r#"<rect width="150"/><circle r="150"/>"#
    );
}

#[test]
fn unresolved_token_left_verbatim() {
    let state = mk_state(&[("w", 150.0)]);
    assert_eq!(
        substitute(r#"width="{w}" height="{undeclared}""#, &state),
        r#"width="150" height="{undeclared}""#
    );
}

#[test]
fn substitutes_user_adjusted_value_not_declared() {
    let mut state = mk_state(&[("w", 150.0)]);
    state.set_current("w", 200.0);
    assert_eq!(substitute(r#"width="{w}""#, &state), r#"width="200""#);
}

#[test]
fn fractional_values_use_default_formatting() {
    let state = mk_state(&[("w", 17.5)]);
    assert_eq!(substitute("{w}", &state), "17.5");
}

#[test]
fn multiple_variables_are_order_independent() {
    let state = mk_state(&[("w", 1.0), ("h", 2.0)]);
    assert_eq!(substitute("{h}{w}{h}", &state), "212");
}

#[test]
fn adjacent_tokens_each_replace() {
    let state = mk_state(&[("a", 1.0), ("b", 2.0)]);
    assert_eq!(substitute("{a}{b}", &state), "12");
}

#[test]
fn works_on_invalid_markup() {
    // Mid-edit documents are routinely broken; substitution is pure text.
    let state = mk_state(&[("w", 150.0)]);
    assert_eq!(
        substitute(r#"<svg><rect width="{w}"#, &state),
        r#"<svg><rect width="150"#
    );
}

#[test]
fn empty_braces_are_not_a_token() {
    let state = mk_state(&[("w", 1.0)]);
    assert_eq!(substitute("{} {w}", &state), "{} 1");
}

#[test]
fn empty_state_leaves_text_unchanged() {
    let state = LiveState::new();
    assert_eq!(substitute("{w} stays", &state), "{w} stays");
}
