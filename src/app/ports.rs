//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (event sinks, config sources, export targets) implement
//! these traits.  The [`AppService`](super::service::AppService) consumes
//! them via generics, so the domain core never touches a terminal or a
//! file directly.

use crate::config::CalculatorConfig;
use crate::error::{ConfigError, ExportError};
use crate::export::CareSchedule;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / UI)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: config file → domain)
// ───────────────────────────────────────────────────────────────

/// Loads calculator configuration.
///
/// Implementations MUST validate before returning: out-of-range values are
/// rejected with [`ConfigError::Invalid`], not silently clamped.
pub trait ConfigPort {
    /// Returns [`CalculatorConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<CalculatorConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Export port (driven adapter: domain → document sink)
// ───────────────────────────────────────────────────────────────

/// Receives a fully resolved care schedule.  The core never calls this
/// for a result without authored guidance.
pub trait ExportSink {
    fn write_schedule(&mut self, schedule: &CareSchedule<'_>) -> Result<(), ExportError>;
}
