//! Care lookup and schedule export through `AppService`.

use crate::mock_ports::{MemoryExport, complete, make_app};

use petage::adapters::schedule_writer::JsonScheduleWriter;
use petage::care::CareLookup;
use petage::error::ExportError;

#[test]
fn export_before_result_is_refused() {
    let (app, _sink) = make_app();
    let mut out = MemoryExport::default();
    assert_eq!(app.export(&mut out), Err(ExportError::NoResult));
    assert!(out.titles.is_empty());
}

#[test]
fn export_carries_profile_categories() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Labrador Retriever", "9", "Buddy");

    let Some(CareLookup::Found(profile)) = app.care() else {
        panic!("senior dog guidance must exist");
    };
    let mut out = MemoryExport::default();
    app.export(&mut out).unwrap();

    assert_eq!(out.titles, vec!["Care Schedule for Buddy".to_string()]);
    let names: Vec<_> = profile.categories.iter().map(|c| c.name.clone()).collect();
    assert_eq!(out.categories, names);
}

#[test]
fn sink_failure_propagates() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "cat", "Persian", "1", "");
    let mut out = MemoryExport {
        fail_with: Some(ExportError::Io("disk full".into())),
        ..MemoryExport::default()
    };
    assert_eq!(app.export(&mut out), Err(ExportError::Io("disk full".into())));
}

#[test]
fn json_writer_end_to_end() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "rabbit", "Holland Lop", "0.4", "");

    let mut w = JsonScheduleWriter::new(Vec::new());
    app.export(&mut w).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&w.into_inner()).unwrap();
    assert_eq!(v["species"], "rabbit");
    assert_eq!(v["life_stage"], "baby");
    assert!(v.get("pet_name").is_none());
}

#[test]
fn chart_follows_result() {
    let (mut app, mut sink) = make_app();
    complete(&mut app, &mut sink, "dog", "Chihuahua", "2", "");
    let series = app.chart().unwrap();
    assert_eq!(series.max_pet_age, 18.0);
    assert_eq!(series.points.len(), 37);
}
