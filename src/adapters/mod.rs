//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter           | Implements  | Connects to                 |
//! |-------------------|-------------|-----------------------------|
//! | `log_sink`        | EventSink   | `log` facade                |
//! | `json_config`     | ConfigPort  | JSON config file            |
//! | `schedule_writer` | ExportSink  | Any `io::Write` (text/JSON) |

pub mod json_config;
pub mod log_sink;
pub mod schedule_writer;
