//! Property tests for the calculator's public API.
//!
//! Host-only; the wizard properties drive `AppService` with arbitrary
//! command sequences.

use petage::age::parse_age;
use petage::app::commands::AppCommand;
use petage::app::events::AppEvent;
use petage::app::ports::EventSink;
use petage::app::service::AppService;
use petage::config::CalculatorConfig;
use petage::conversion::convert;
use petage::life_stage::classify;
use petage::species::Species;
use petage::wizard::StepId;
use proptest::prelude::*;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fn arb_species() -> impl Strategy<Value = Species> {
    prop_oneof![
        Just(Species::Dog),
        Just(Species::Cat),
        Just(Species::Rabbit),
        Just(Species::Fish),
        Just(Species::Other),
    ]
}

fn arb_command() -> impl Strategy<Value = AppCommand> {
    prop_oneof![
        prop_oneof![Just("dog"), Just("cat"), Just("rabbit"), Just("fish"), Just("ferret"), Just("")]
            .prop_map(|s| AppCommand::SelectSpecies(s.to_string())),
        prop_oneof![Just("Poodle"), Just("Persian"), Just("Holland Lop"), Just("Goldfish"), Just("Unknown")]
            .prop_map(|b| AppCommand::SelectBreed(b.to_string())),
        prop_oneof![Just("3"), Just("0.4"), Just("-1"), Just("31"), Just("abc"), Just("")]
            .prop_map(|a| AppCommand::SetAge(a.to_string())),
        (any::<u32>(), any::<u32>()).prop_map(|(years, months)| AppCommand::SetAgeYearsMonths { years, months }),
        prop_oneof![Just("Rex"), Just(""), Just("  "), Just("R2D2")]
            .prop_map(|n| AppCommand::SetName(n.to_string())),
        Just(AppCommand::Next),
        Just(AppCommand::Next),
        Just(AppCommand::Back),
        Just(AppCommand::StartOver),
    ]
}

// ── Wizard invariants ─────────────────────────────────────────

proptest! {
    /// A result exists exactly when the session is on the Result step.
    #[test]
    fn result_exists_only_on_result_step(cmds in proptest::collection::vec(arb_command(), 0..40)) {
        let mut app = AppService::new(CalculatorConfig::default());
        let mut sink = NullSink;
        app.start(&mut sink);
        for cmd in cmds {
            let _ = app.handle_command(cmd, &mut sink);
            prop_assert_eq!(app.result().is_some(), app.step() == StepId::Result);
        }
    }

    /// Reached results always satisfy the field rules.
    #[test]
    fn results_only_from_valid_inputs(cmds in proptest::collection::vec(arb_command(), 0..40)) {
        let mut app = AppService::new(CalculatorConfig::default());
        let mut sink = NullSink;
        for cmd in cmds {
            let _ = app.handle_command(cmd, &mut sink);
        }
        if let Some(r) = app.result() {
            prop_assert!(r.species.is_supported());
            prop_assert!(r.species.has_breed(&r.breed));
            prop_assert!(r.chronological_age > 0.0 && r.chronological_age <= 30.0);
            prop_assert!(r.equivalent_age >= 0.0);
        }
    }

    /// A rejected Next never moves the session.
    #[test]
    fn rejected_next_does_not_move(cmds in proptest::collection::vec(arb_command(), 0..30)) {
        let mut app = AppService::new(CalculatorConfig::default());
        let mut sink = NullSink;
        for cmd in cmds {
            let before = app.step();
            let is_next = cmd == AppCommand::Next;
            if app.handle_command(cmd, &mut sink).is_err() {
                prop_assert!(is_next);
                prop_assert_eq!(app.step(), before);
                prop_assert!(app.session().field_error().is_some());
            }
        }
    }
}

// ── Engines ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn life_stage_never_regresses(species in arb_species(), a in 0.0f64..30.0, b in 0.0f64..30.0) {
        let (young, old) = if a <= b { (a, b) } else { (b, a) };
        for breed in ["Chihuahua", "Great Dane", "Poodle", ""] {
            prop_assert!(classify(species, breed, young).rank() <= classify(species, breed, old).rank());
        }
    }

    #[test]
    fn conversion_is_total(species in arb_species(), age in 0.0f64..=30.0) {
        let r = convert(species, "Poodle", age);
        prop_assert!(r.equivalent_age.is_finite());
        prop_assert!(!r.rationale.is_empty());
    }

    #[test]
    fn parse_age_never_panics(s in "\\PC{0,16}") {
        if let Ok(v) = parse_age(&s) {
            prop_assert!(v.is_finite());
        }
    }
}
