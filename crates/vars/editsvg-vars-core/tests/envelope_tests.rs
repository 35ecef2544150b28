use editsvg_vars_core::{Envelope, EnvelopePhase, VariableDef, VariableKind};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn trigger_def() -> VariableDef {
    VariableDef {
        min: 5.0,
        max: 30.0,
        attack: 0.1,
        decay: 0.8,
        kind: VariableKind::Button,
        ..VariableDef::new("strk")
    }
}

#[test]
fn value_is_min_at_trigger_instant() {
    let env = Envelope::start(&trigger_def(), 0.0);
    let s = env.advance(0.0);
    approx(s.value, 5.0, 1e-9);
    assert_eq!(s.phase, EnvelopePhase::Attack);
}

#[test]
fn mid_attack_interpolates_linearly() {
    let env = Envelope::start(&trigger_def(), 0.0);
    let s = env.advance(0.05);
    // 5 + 25 * (0.05/0.1)
    approx(s.value, 17.5, 1e-9);
    assert_eq!(s.phase, EnvelopePhase::Attack);
}

#[test]
fn mid_decay_interpolates_linearly() {
    let env = Envelope::start(&trigger_def(), 0.0);
    let s = env.advance(0.5);
    // 30 - 25 * ((0.5-0.1)/0.8)
    approx(s.value, 17.5, 1e-9);
    assert_eq!(s.phase, EnvelopePhase::Decay);
}

#[test]
fn past_both_phases_pins_min_and_completes() {
    let env = Envelope::start(&trigger_def(), 0.0);
    for now in [0.9, 1.0, 2.0, 100.0] {
        let s = env.advance(now);
        approx(s.value, 5.0, 1e-9);
        assert_eq!(s.phase, EnvelopePhase::Idle);
    }
    assert!(env.is_complete(1.0));
    assert!(!env.is_complete(0.5));
}

#[test]
fn value_strictly_increases_during_attack() {
    let env = Envelope::start(&trigger_def(), 0.0);
    let mut last = f64::NEG_INFINITY;
    for i in 0..10 {
        let v = env.advance(i as f64 * 0.01).value;
        assert!(v > last, "attack not strictly increasing at step {i}");
        last = v;
    }
}

#[test]
fn value_strictly_decreases_during_decay() {
    let env = Envelope::start(&trigger_def(), 0.0);
    let mut last = f64::INFINITY;
    for i in 0..8 {
        let v = env.advance(0.1 + i as f64 * 0.1).value;
        assert!(v < last, "decay not strictly decreasing at step {i}");
        last = v;
    }
}

#[test]
fn start_instant_offsets_the_sweep() {
    let env = Envelope::start(&trigger_def(), 10.0);
    approx(env.advance(10.05).value, 17.5, 1e-9);
    assert_eq!(env.started_at(), 10.0);
}

#[test]
fn clock_behind_start_holds_min() {
    let env = Envelope::start(&trigger_def(), 10.0);
    let s = env.advance(9.0);
    approx(s.value, 5.0, 1e-9);
    assert_eq!(s.phase, EnvelopePhase::Attack);
}

#[test]
fn zero_attack_opens_at_max() {
    let def = VariableDef {
        attack: 0.0,
        ..trigger_def()
    };
    let env = Envelope::start(&def, 0.0);
    approx(env.advance(0.0).value, 30.0, 1e-9);
    assert_eq!(env.advance(0.0).phase, EnvelopePhase::Decay);
}

#[test]
fn zero_attack_and_decay_completes_immediately() {
    let def = VariableDef {
        attack: 0.0,
        decay: 0.0,
        ..trigger_def()
    };
    let env = Envelope::start(&def, 0.0);
    let s = env.advance(0.0);
    approx(s.value, 5.0, 1e-9);
    assert_eq!(s.phase, EnvelopePhase::Idle);
}

#[test]
fn negative_durations_clamp_to_zero() {
    let def = VariableDef {
        attack: -1.0,
        decay: -1.0,
        ..trigger_def()
    };
    let env = Envelope::start(&def, 0.0);
    assert_eq!(env.advance(0.0).phase, EnvelopePhase::Idle);
}
