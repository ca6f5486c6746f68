//! End-to-end wizard flows through `AppService`.

use crate::mock_ports::{complete, make_app};

use petage::app::commands::AppCommand;
use petage::app::events::AppEvent;
use petage::error::{Field, ValidationKind};
use petage::life_stage::LifeStage;
use petage::species::Species;
use petage::wizard::StepId;

#[test]
fn poodle_three_years() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Poodle", "3", "Rex");

    assert_eq!(app.step(), StepId::Result);
    let r = app.result().unwrap();
    assert_eq!(r.equivalent_age, 29.0);
    assert_eq!(r.life_stage, LifeStage::Adult);
    assert_eq!(r.headline(), "Rex is 29 in human years");
    assert_eq!(sink.rejections(), 0);
}

#[test]
fn event_order_for_a_clean_run() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "cat", "Persian", "2", "");

    let steps: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::StepChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(
        steps,
        vec![StepId::Breed, StepId::Age, StepId::Name, StepId::Result]
    );
    assert!(matches!(sink.events.first(), Some(AppEvent::Started(StepId::Species))));
    assert!(matches!(sink.events.last(), Some(AppEvent::ResultReady(r)) if r.name.is_none()));
}

#[test]
fn bad_age_stays_on_age_step() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "rabbit", "Holland Lop", "abc", "");

    assert_eq!(app.step(), StepId::Age);
    let e = app.session().field_error().copied().unwrap();
    assert_eq!(e.field, Field::Age);
    assert_eq!(e.message(), "Age must be a number");
    assert_eq!(sink.rejections(), 1);
}

#[test]
fn age_over_limit_is_rejected() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Beagle", "31", "");
    assert_eq!(app.step(), StepId::Age);
    assert_eq!(
        app.session().field_error().map(|e| e.kind),
        Some(ValidationKind::AgeTooOld(30.0))
    );
}

#[test]
fn back_keeps_answers_and_species_change_clears_breed() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Poodle", "", "");
    assert_eq!(app.step(), StepId::Age);

    app.handle_command(AppCommand::Back, &mut sink).unwrap();
    assert_eq!(app.step(), StepId::Breed);
    assert_eq!(app.session().breed(), "Poodle");

    app.handle_command(AppCommand::Back, &mut sink).unwrap();
    app.handle_command(AppCommand::SelectSpecies("cat".into()), &mut sink)
        .unwrap();
    assert_eq!(app.session().species(), Some(Species::Cat));
    assert!(app.session().breed().is_empty());
}

#[test]
fn unsupported_species_cannot_leave_step_one() {
    let (mut app, mut sink) = make_app();
    app.handle_command(AppCommand::SelectSpecies("hamster".into()), &mut sink)
        .unwrap();
    let e = app.handle_command(AppCommand::Next, &mut sink).unwrap_err();
    assert_eq!(e.kind, ValidationKind::SpeciesUnsupported);
    assert_eq!(app.step(), StepId::Species);
}

#[test]
fn years_and_months_entry() {
    let (mut app, mut sink) = make_app();
    for cmd in [
        AppCommand::SelectSpecies("fish".into()),
        AppCommand::Next,
        AppCommand::SelectBreed("Goldfish".into()),
        AppCommand::Next,
        AppCommand::SetAgeYearsMonths { years: 1, months: 6 },
        AppCommand::Next,
        AppCommand::Next,
    ] {
        app.handle_command(cmd, &mut sink).unwrap();
    }
    assert_eq!(app.result().map(|r| r.chronological_age), Some(1.5));
}

#[test]
fn result_is_frozen_until_start_over() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Poodle", "3", "");
    let before = app.result().cloned();

    app.handle_command(AppCommand::SetAge("10".into()), &mut sink)
        .unwrap();
    assert_eq!(app.handle_command(AppCommand::Back, &mut sink), Ok(StepId::Result));
    assert_eq!(app.handle_command(AppCommand::Next, &mut sink), Ok(StepId::Result));
    assert_eq!(app.result().cloned(), before);

    app.handle_command(AppCommand::StartOver, &mut sink).unwrap();
    assert_eq!(app.step(), StepId::Species);
    assert!(app.result().is_none());
}

#[test]
fn whitespace_name_is_rejected_on_name_step() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "cat", "Siamese", "4", "   ");
    assert_eq!(app.step(), StepId::Name);
    assert_eq!(
        app.session().field_error().map(|e| e.kind),
        Some(ValidationKind::NameBlank)
    );
}

#[test]
fn huge_years_and_months_is_rejected_not_a_fault() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Beagle", "", "");
    assert_eq!(app.step(), StepId::Age);

    app.handle_command(
        AppCommand::SetAgeYearsMonths {
            years: u32::MAX,
            months: 12,
        },
        &mut sink,
    )
    .unwrap();
    let e = app.handle_command(AppCommand::Next, &mut sink).unwrap_err();
    assert_eq!(e.kind, ValidationKind::AgeTooOld(30.0));
    assert_eq!(app.step(), StepId::Age);
}
