//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (stderr through the binary's subscriber).  A GUI
//! front end would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as one tagged line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// The single-line record for `event`.
pub fn render(event: &AppEvent) -> String {
    match event {
        AppEvent::Started(step) => format!("START | step={step}"),
        AppEvent::StepChanged { from, to } => format!("STEP | {from} -> {to}"),
        AppEvent::ValidationFailed(e) => format!("REJECT | {e}"),
        AppEvent::ResultReady(r) => format!(
            "RESULT | {} {} aged {} | human={} | stage={}",
            r.species, r.breed, r.chronological_age, r.equivalent_age, r.life_stage
        ),
        AppEvent::Reset => "RESET".to_string(),
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        info!("{}", render(event));
    }
}
