//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log them, render them, record them
//! in a test.

use crate::error::ValidationError;
use crate::wizard::StepId;
use crate::wizard::session::ResultSnapshot;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the initial step).
    Started(StepId),

    /// The wizard moved between steps.
    StepChanged { from: StepId, to: StepId },

    /// A transition was rejected; the session stays on the current step.
    ValidationFailed(ValidationError),

    /// The wizard completed and computed a result.
    ResultReady(ResultSnapshot),

    /// The session was cleared back to step 1.
    Reset,
}
