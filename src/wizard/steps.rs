//! Concrete step handlers and table builder.
//!
//! Each step is two plain `fn` pointers: a validator that gates leaving
//! the step and an optional action run on entering it.
//!
//! ```text
//!  SPECIES ──[supported]──▶ BREED ──[in list]──▶ AGE ──[0 < age <= max]──▶ NAME
//!                         (clears breed)
//!
//!  NAME ──[name ok, every answer ok]──▶ RESULT (snapshot computed, terminal)
//!
//!  BREED | AGE | NAME ──[back]──▶ previous step (answers kept)
//!  Any step ──[reset]──▶ SPECIES (answers and result cleared)
//! ```

use log::{error, info};

use super::session::{AgeEntry, ResultSnapshot, WizardSession};
use super::{StepDescriptor, StepId};
use crate::config::CalculatorConfig;
use crate::error::{ValidationError, ValidationKind};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the standard step table.
pub fn build_step_table() -> [StepDescriptor; StepId::COUNT] {
    [
        // Index 0: Species
        StepDescriptor {
            id: StepId::Species,
            name: "Species",
            validate: species_validate,
            on_enter: None,
        },
        // Index 1: Breed
        StepDescriptor {
            id: StepId::Breed,
            name: "Breed",
            validate: breed_validate,
            on_enter: Some(breed_enter),
        },
        // Index 2: Age
        StepDescriptor {
            id: StepId::Age,
            name: "Age",
            validate: age_validate,
            on_enter: None,
        },
        // Index 3: Name
        StepDescriptor {
            id: StepId::Name,
            name: "Name",
            validate: name_validate,
            on_enter: None,
        },
        // Index 4: Result
        StepDescriptor {
            id: StepId::Result,
            name: "Result",
            validate: result_validate,
            on_enter: Some(result_enter),
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Field rules
// ═══════════════════════════════════════════════════════════════════════════

fn species_validate(session: &WizardSession, _config: &CalculatorConfig) -> Result<(), ValidationError> {
    match session.species() {
        None => Err(ValidationKind::SpeciesRequired.into()),
        Some(s) if !s.is_supported() => Err(ValidationKind::SpeciesUnsupported.into()),
        Some(_) => Ok(()),
    }
}

fn breed_validate(session: &WizardSession, _config: &CalculatorConfig) -> Result<(), ValidationError> {
    let breed = session.breed();
    if breed.is_empty() {
        return Err(ValidationKind::BreedRequired.into());
    }
    match session.species() {
        Some(species) if species.has_breed(breed) => Ok(()),
        _ => Err(ValidationKind::BreedNotInList.into()),
    }
}

/// The accepted age in years, or why it is not acceptable.
pub fn checked_age(entry: &AgeEntry, config: &CalculatorConfig) -> Result<f64, ValidationKind> {
    match entry {
        AgeEntry::Unset => Err(ValidationKind::AgeRequired),
        AgeEntry::Unparsed(_) => Err(ValidationKind::AgeNotANumber),
        AgeEntry::Years(y) if !y.is_finite() => Err(ValidationKind::AgeNotANumber),
        AgeEntry::Years(y) if *y <= 0.0 => Err(ValidationKind::AgeNotPositive),
        AgeEntry::Years(y) if *y > config.max_age_years => {
            Err(ValidationKind::AgeTooOld(config.max_age_years))
        }
        AgeEntry::Years(y) => Ok(*y),
    }
}

fn age_validate(session: &WizardSession, config: &CalculatorConfig) -> Result<(), ValidationError> {
    checked_age(session.age(), config)
        .map(|_| ())
        .map_err(ValidationError::from)
}

/// Absent names pass.  A present name must be non-blank once trimmed and
/// contain only ASCII letters and spaces.
pub fn checked_name(trimmed: Option<&str>) -> Result<Option<&str>, ValidationKind> {
    match trimmed {
        None => Ok(None),
        Some("") => Err(ValidationKind::NameBlank),
        Some(name) if name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) => {
            Ok(Some(name))
        }
        Some(_) => Err(ValidationKind::NameInvalidChars),
    }
}

/// Leaving the Name step completes the wizard, so every earlier answer is
/// checked again: a species change on a later step clears the breed.
fn name_validate(session: &WizardSession, config: &CalculatorConfig) -> Result<(), ValidationError> {
    checked_name(session.trimmed_name())?;
    species_validate(session, config)?;
    breed_validate(session, config)?;
    age_validate(session, config)
}

/// Result is terminal; the engine never advances past it.
fn result_validate(_session: &WizardSession, _config: &CalculatorConfig) -> Result<(), ValidationError> {
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
//  Entry actions
// ═══════════════════════════════════════════════════════════════════════════

/// Breed lists are keyed by species, so any earlier pick is dropped.
fn breed_enter(session: &mut WizardSession) {
    if !session.breed().is_empty() {
        info!("BREED: clearing previous breed '{}'", session.breed());
    }
    session.clear_breed();
}

/// The single point where the conversion engine and classifier run.
fn result_enter(session: &mut WizardSession) {
    let (Some(species), Some(age)) = (session.species(), session.age().years()) else {
        error!("RESULT: entered without species and age, no snapshot computed");
        return;
    };
    let name = session.trimmed_name().map(str::to_string);
    let snapshot = ResultSnapshot::compute(species, session.breed(), age, name);
    info!(
        "RESULT: {} {} aged {} -> {:.1} human years ({})",
        species, snapshot.breed, age, snapshot.equivalent_age, snapshot.life_stage
    );
    session.result = Some(snapshot);
}
