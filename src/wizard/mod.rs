//! Step-table wizard engine.
//!
//! The same table-driven pattern as a classic embedded FSM, driven by user
//! actions instead of ticks:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  StepTable                                          │
//! │  ┌─────────┬──────────────────┬──────────────────┐  │
//! │  │ StepId  │ validate         │ on_enter         │  │
//! │  ├─────────┼──────────────────┼──────────────────┤  │
//! │  │ Species │ fn(sess, cfg)->R │ -                │  │
//! │  │ Breed   │ fn(sess, cfg)->R │ fn(sess)         │  │
//! │  │ Age     │ fn(sess, cfg)->R │ -                │  │
//! │  │ Name    │ fn(sess, cfg)->R │ -                │  │
//! │  │ Result  │ fn(sess, cfg)->R │ fn(sess)         │  │
//! │  └─────────┴──────────────────┴──────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! [`Wizard::advance`] runs `validate` for the **current** step.  On
//! success the session moves to the next step and that step's `on_enter`
//! runs; on failure the session stays put and carries the field-keyed
//! error.  [`Wizard::retreat`] moves back one step without validating or
//! running any action.  All functions receive the [`WizardSession`], which
//! is the only mutable state.

pub mod session;
pub mod steps;

use core::fmt;

use log::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::error::ValidationError;
use session::WizardSession;

// ---------------------------------------------------------------------------
// Step identity
// ---------------------------------------------------------------------------

/// The five wizard steps, numbered as shown to the user.
/// Must stay in sync with the table built in [`steps::build_step_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StepId {
    Species = 1,
    Breed = 2,
    Age = 3,
    Name = 4,
    Result = 5,
}

impl StepId {
    /// Total number of steps, used to size the table array.
    pub const COUNT: usize = 5;

    /// Convert a zero-based table index back to `StepId`.  Panics on
    /// out-of-range in debug builds; returns `Species` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Species,
            1 => Self::Breed,
            2 => Self::Age,
            3 => Self::Name,
            4 => Self::Result,
            _ => {
                debug_assert!(false, "invalid step index: {idx}");
                Self::Species
            }
        }
    }

    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// 1-based step number.
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Species => Some(Self::Breed),
            Self::Breed => Some(Self::Age),
            Self::Age => Some(Self::Name),
            Self::Name => Some(Self::Result),
            Self::Result => None,
        }
    }

    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Species => None,
            Self::Breed => Some(Self::Species),
            Self::Age => Some(Self::Breed),
            Self::Name => Some(Self::Age),
            Self::Result => Some(Self::Name),
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Species => "Species",
            Self::Breed => "Breed",
            Self::Age => "Age",
            Self::Name => "Name",
            Self::Result => "Result",
        })
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Gate checked before leaving a step.
pub type StepValidateFn = fn(&WizardSession, &CalculatorConfig) -> Result<(), ValidationError>;

/// Action run once when a step is entered by `advance`.
pub type StepActionFn = fn(&mut WizardSession);

/// Static descriptor for a single wizard step.
pub struct StepDescriptor {
    pub id: StepId,
    pub name: &'static str,
    pub validate: StepValidateFn,
    pub on_enter: Option<StepActionFn>,
}

// ---------------------------------------------------------------------------
// Wizard engine
// ---------------------------------------------------------------------------

/// The wizard engine: an immutable step table plus configuration.  Sessions
/// are passed in, so one engine can drive any number of them.
pub struct Wizard {
    table: [StepDescriptor; StepId::COUNT],
    config: CalculatorConfig,
}

impl Wizard {
    pub fn new(table: [StepDescriptor; StepId::COUNT], config: CalculatorConfig) -> Self {
        Self { table, config }
    }

    /// Engine with the standard step table.
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::new(steps::build_step_table(), config)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Descriptor for a step.
    pub fn step(&self, id: StepId) -> &StepDescriptor {
        &self.table[id.index()]
    }

    /// Validate the current step and move forward.
    ///
    /// Returns the step the session is on afterwards.  On the terminal
    /// Result step this is a no-op that returns `Ok(StepId::Result)`.
    pub fn advance(&self, session: &mut WizardSession) -> Result<StepId, ValidationError> {
        let current = session.current_step;
        let Some(next) = current.next() else {
            debug!("WIZARD: advance on terminal step ignored");
            return Ok(current);
        };

        let descriptor = self.step(current);
        if let Err(e) = (descriptor.validate)(session, &self.config) {
            warn!("WIZARD: {} rejected, {}", descriptor.name, e);
            session.field_error = Some(e);
            return Err(e);
        }

        session.field_error = None;
        self.transition(next, session);
        Ok(next)
    }

    /// Move back one step.  Fields are kept and nothing is re-validated.
    /// Step 1 has nowhere to go and the Result step is left only by
    /// [`Wizard::reset`]; both are no-ops.
    pub fn retreat(&self, session: &mut WizardSession) -> StepId {
        let current = session.current_step;
        if current == StepId::Result {
            debug!("WIZARD: retreat from result ignored, reset to start over");
            return current;
        }
        let Some(prev) = current.prev() else {
            return current;
        };
        info!("WIZARD transition: {} -> {} (back)", self.step(current).name, self.step(prev).name);
        session.field_error = None;
        session.current_step = prev;
        prev
    }

    /// Discard every answer and the result, returning to step 1.
    pub fn reset(&self, session: &mut WizardSession) {
        info!("WIZARD: reset from {}", self.step(session.current_step).name);
        *session = WizardSession::new();
    }

    fn transition(&self, next: StepId, session: &mut WizardSession) {
        info!(
            "WIZARD transition: {} -> {}",
            self.step(session.current_step).name,
            self.step(next).name
        );
        session.current_step = next;
        if let Some(enter) = self.step(next).on_enter {
            enter(session);
        }
    }
}
