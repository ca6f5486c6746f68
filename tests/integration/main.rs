//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one area of the
//! calculator through the public `AppService` API against mock adapters.

mod export_tests;
mod mock_ports;
mod wizard_flow_tests;
