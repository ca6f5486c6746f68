//! Application core: pure domain logic, zero I/O.
//!
//! This module ties the wizard, the care lookup and the schedule export
//! together.  All interaction with the outside world (logging, config
//! files, export targets) happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without a terminal or
//! filesystem.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
