//! Mock port implementations shared by the integration tests.

#![allow(dead_code)]

use petage::app::commands::AppCommand;
use petage::app::events::AppEvent;
use petage::app::ports::{EventSink, ExportSink};
use petage::app::service::AppService;
use petage::config::CalculatorConfig;
use petage::error::ExportError;
use petage::export::CareSchedule;

/// Records every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ValidationFailed(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

/// Captures the title and category names of each exported schedule.
#[derive(Default)]
pub struct MemoryExport {
    pub titles: Vec<String>,
    pub categories: Vec<String>,
    pub fail_with: Option<ExportError>,
}

impl ExportSink for MemoryExport {
    fn write_schedule(&mut self, schedule: &CareSchedule<'_>) -> Result<(), ExportError> {
        if let Some(e) = self.fail_with.clone() {
            return Err(e);
        }
        self.titles.push(schedule.title());
        self.categories
            .extend(schedule.profile.categories.iter().map(|c| c.name.clone()));
        Ok(())
    }
}

pub fn make_app() -> (AppService, RecordingSink) {
    let mut app = AppService::new(CalculatorConfig::default());
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, sink)
}

/// Answer each step and advance, stopping at the first rejection.
pub fn complete(
    app: &mut AppService,
    sink: &mut RecordingSink,
    species: &str,
    breed: &str,
    age: &str,
    name: &str,
) {
    let answers = [
        AppCommand::SelectSpecies(species.into()),
        AppCommand::SelectBreed(breed.into()),
        AppCommand::SetAge(age.into()),
        AppCommand::SetName(name.into()),
    ];
    for answer in answers {
        let _ = app.handle_command(answer, sink);
        if app.handle_command(AppCommand::Next, sink).is_err() {
            return;
        }
    }
}
