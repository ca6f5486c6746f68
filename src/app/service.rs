//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the wizard engine and the session it drives.  It
//! exposes a front-end-agnostic API.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  AppCommand ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//!  ExportSink ◀── │  Wizard · Session       │
//!                 └────────────────────────┘
//! ```

use log::{debug, info};

use crate::care::{CareLookup, care_table};
use crate::chart::{ChartSeries, comparison_series};
use crate::config::CalculatorConfig;
use crate::error::{ExportError, ValidationError};
use crate::export::CareSchedule;
use crate::life_stage::LifeStage;
use crate::wizard::session::{ResultSnapshot, WizardSession};
use crate::wizard::{StepId, Wizard};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{EventSink, ExportSink};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    wizard: Wizard,
    session: WizardSession,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** emit anything; call [`start`](Self::start) next.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            wizard: Wizard::with_config(config),
            session: WizardSession::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let step = self.session.current_step();
        sink.emit(&AppEvent::Started(step));
        info!("AppService started on {}", step);
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one command and return the step the session is on afterwards.
    ///
    /// Only [`AppCommand::Next`] can fail; the error is also emitted as
    /// [`AppEvent::ValidationFailed`] and remembered on the session.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        sink: &mut impl EventSink,
    ) -> Result<StepId, ValidationError> {
        let from = self.session.current_step();
        match cmd {
            AppCommand::SelectSpecies(key) => self.session.set_species_key(&key),
            AppCommand::SelectBreed(breed) => self.session.set_breed(&breed),
            AppCommand::SetAge(text) => self.session.set_age(&text),
            AppCommand::SetAgeYearsMonths { years, months } => {
                self.session.set_age_years_months(years, months)
            }
            AppCommand::SetName(name) => self.session.set_name(&name),
            AppCommand::Next => {
                let to = self.wizard.advance(&mut self.session).inspect_err(|e| {
                    sink.emit(&AppEvent::ValidationFailed(*e));
                })?;
                self.emit_moved(from, to, sink);
                if to == StepId::Result && from != StepId::Result {
                    if let Some(result) = self.session.result() {
                        sink.emit(&AppEvent::ResultReady(result.clone()));
                    }
                }
                return Ok(to);
            }
            AppCommand::Back => {
                let to = self.wizard.retreat(&mut self.session);
                self.emit_moved(from, to, sink);
                return Ok(to);
            }
            AppCommand::StartOver => {
                self.wizard.reset(&mut self.session);
                sink.emit(&AppEvent::Reset);
            }
        }
        debug!("AppService: command applied on {}", self.session.current_step());
        Ok(self.session.current_step())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn step(&self) -> StepId {
        self.session.current_step()
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.wizard.config()
    }

    pub fn result(&self) -> Option<&ResultSnapshot> {
        self.session.result()
    }

    pub fn available_breeds(&self) -> &'static [&'static str] {
        self.session.available_breeds()
    }

    pub fn life_stage(&self) -> Option<LifeStage> {
        self.result().map(|r| r.life_stage)
    }

    /// Care guidance for the completed result.  `None` before step 5.
    pub fn care(&self) -> Option<CareLookup<'static>> {
        self.result()
            .map(|r| care_table().resolve(r.species, r.life_stage))
    }

    /// Comparison series for the completed result's species and breed.
    pub fn chart(&self) -> Option<ChartSeries> {
        self.result()
            .map(|r| comparison_series(r.species, &r.breed))
    }

    /// Hand the care schedule to `sink`.  Refused before a result exists
    /// and when the result has no authored guidance.
    pub fn export(&self, sink: &mut impl ExportSink) -> Result<(), ExportError> {
        let schedule = CareSchedule::from_result(self.result(), care_table())?;
        sink.write_schedule(&schedule)?;
        info!("AppService: exported {}", schedule.title());
        Ok(())
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_moved(&self, from: StepId, to: StepId, sink: &mut impl EventSink) {
        if from != to {
            sink.emit(&AppEvent::StepChanged { from, to });
        }
    }
}
