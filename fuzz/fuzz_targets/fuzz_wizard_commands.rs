//! Fuzz target: wizard command sequences
//!
//! Decodes each input byte into an `AppCommand` and drives `AppService`,
//! verifying:
//! - No panics under arbitrary sequences
//! - A result exists exactly on the Result step
//! - Only `Next` can be rejected
//!
//! cargo fuzz run fuzz_wizard_commands

#![no_main]

use libfuzzer_sys::fuzz_target;
use petage::app::commands::AppCommand;
use petage::app::events::AppEvent;
use petage::app::ports::EventSink;
use petage::app::service::AppService;
use petage::config::CalculatorConfig;
use petage::species::Species;
use petage::wizard::StepId;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

const AGES: [&str; 6] = ["3", "0.5", "-2", "31", "x", ""];
const NAMES: [&str; 4] = ["Rex", "", " ", "K9"];

fn decode(byte: u8, app: &AppService) -> AppCommand {
    let arg = usize::from(byte >> 3);
    match byte & 0x07 {
        0 => {
            let species = Species::SUPPORTED[arg % Species::SUPPORTED.len()];
            AppCommand::SelectSpecies(species.key().to_string())
        }
        1 => {
            let breeds = app.available_breeds();
            let breed = breeds.get(arg).copied().unwrap_or("Unlisted");
            AppCommand::SelectBreed(breed.to_string())
        }
        2 => AppCommand::SetAge(AGES[arg % AGES.len()].to_string()),
        3 => AppCommand::SetAgeYearsMonths {
            years: u32::from(byte >> 4) * 2,
            months: u32::from((byte >> 3) & 1) * 6,
        },
        4 => AppCommand::SetName(NAMES[arg % NAMES.len()].to_string()),
        5 => AppCommand::Back,
        6 if arg == 0 => AppCommand::StartOver,
        _ => AppCommand::Next,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut app = AppService::new(CalculatorConfig::default());
    let mut sink = NullSink;
    app.start(&mut sink);

    for &byte in data {
        let cmd = decode(byte, &app);
        let is_next = cmd == AppCommand::Next;
        if app.handle_command(cmd, &mut sink).is_err() {
            assert!(is_next);
        }
        assert_eq!(app.result().is_some(), app.step() == StepId::Result);
    }
});
