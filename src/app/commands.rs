//! Inbound commands to the application service.
//!
//! These represent actions requested by the front end (CLI prompt, flags,
//! a future GUI) that the [`AppService`](super::service::AppService)
//! applies to the wizard session.

/// Commands that front ends can send into the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pick a species by key (`dog`, `cat`, `rabbit`, `fish`).
    SelectSpecies(String),

    /// Pick a breed from the selected species' list.
    SelectBreed(String),

    /// Enter the age as decimal text, e.g. `"1.5"`.
    SetAge(String),

    /// Enter the age as whole years and months.
    SetAgeYearsMonths { years: u32, months: u32 },

    /// Enter the optional pet name.
    SetName(String),

    /// Validate the current step and move forward.
    Next,

    /// Move back one step.
    Back,

    /// Discard every answer and return to step 1.
    StartOver,
}
