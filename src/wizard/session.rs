//! The mutable record of one calculation.
//!
//! `WizardSession` is the single struct step handlers read from and write
//! to.  It holds the current step, the answers collected so far, the last
//! field-keyed validation message and, once step 5 is reached, the frozen
//! [`ResultSnapshot`].  Field setters normalise raw UI input at this
//! boundary: species keys become [`Species`], age text becomes [`AgeEntry`].

use log::debug;
use serde::Serialize;

use super::StepId;
use crate::age::{parse_age, years_months_to_age};
use crate::conversion::{convert, format_human_age};
use crate::error::{Field, ValidationError};
use crate::life_stage::{LifeStage, StageInfo, classify};
use crate::species::Species;

// ---------------------------------------------------------------------------
// Age entry
// ---------------------------------------------------------------------------

/// The age field as last entered.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AgeEntry {
    #[default]
    Unset,
    /// Text that did not parse as a number.  Rejected at the age step.
    Unparsed(String),
    /// Decimal years, not yet range-checked.
    Years(f64),
}

impl AgeEntry {
    /// Normalise raw text.  Empty text is `Unset`.
    pub fn from_input(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self::Unset;
        }
        match parse_age(input) {
            Ok(years) => Self::Years(years),
            Err(_) => Self::Unparsed(input.to_string()),
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            Self::Years(y) => Some(*y),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Result snapshot
// ---------------------------------------------------------------------------

/// Everything computed when the wizard completes.  Immutable until reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSnapshot {
    pub species: Species,
    pub breed: String,
    pub chronological_age: f64,
    pub equivalent_age: f64,
    /// Shown verbatim; never used for control flow.
    pub rationale: String,
    pub life_stage: LifeStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResultSnapshot {
    /// Run the conversion engine and the classifier over validated inputs.
    pub fn compute(species: Species, breed: &str, age: f64, name: Option<String>) -> Self {
        let conversion = convert(species, breed, age);
        Self {
            species,
            breed: breed.to_string(),
            chronological_age: age,
            equivalent_age: conversion.equivalent_age,
            rationale: conversion.rationale,
            life_stage: classify(species, breed, age),
            name,
        }
    }

    /// "Rex is 29 in human years" / "Your pet is 29 in human years".
    pub fn headline(&self) -> String {
        let subject = match &self.name {
            Some(name) => format!("{name} is"),
            None => "Your pet is".to_string(),
        };
        format!(
            "{subject} {} in human years",
            format_human_age(self.equivalent_age)
        )
    }

    pub fn stage_info(&self) -> StageInfo {
        self.life_stage.info()
    }
}

// ---------------------------------------------------------------------------
// WizardSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    pub(super) current_step: StepId,
    species: Option<Species>,
    breed: String,
    age: AgeEntry,
    /// Raw name text; trimmed when validated.
    name: String,
    pub(super) result: Option<ResultSnapshot>,
    pub(super) field_error: Option<ValidationError>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// A fresh session on step 1 with nothing answered.
    pub fn new() -> Self {
        Self {
            current_step: StepId::Species,
            species: None,
            breed: String::new(),
            age: AgeEntry::Unset,
            name: String::new(),
            result: None,
            field_error: None,
        }
    }

    // -- Queries --

    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    pub fn species(&self) -> Option<Species> {
        self.species
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn age(&self) -> &AgeEntry {
        &self.age
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result(&self) -> Option<&ResultSnapshot> {
        self.result.as_ref()
    }

    /// The message from the last rejected transition, if it is still current.
    pub fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    /// Breeds offered for the selected species (empty before a species is chosen).
    pub fn available_breeds(&self) -> &'static [&'static str] {
        match self.species {
            Some(species) => species.breeds(),
            None => &[],
        }
    }

    // -- Field setters --
    //
    // Answers are frozen once the result is shown; edits on step 5 are
    // ignored until `reset`.

    fn frozen(&self, field: Field) -> bool {
        if self.current_step == StepId::Result {
            debug!("WIZARD: ignoring {field} edit on result step");
            return true;
        }
        false
    }

    fn clear_error_for(&mut self, field: Field) {
        if self.field_error.is_some_and(|e| e.field == field) {
            self.field_error = None;
        }
    }

    /// Select a species.  Choosing a different species clears the breed,
    /// because breed lists are keyed by species.
    pub fn set_species(&mut self, species: Species) {
        if self.frozen(Field::Species) {
            return;
        }
        if self.species != Some(species) && !self.breed.is_empty() {
            debug!("WIZARD: species changed to {species}, clearing breed '{}'", self.breed);
            self.breed.clear();
        }
        self.species = Some(species);
        self.clear_error_for(Field::Species);
    }

    /// Select a species from its UI key.  Blank clears the selection; an
    /// unknown key is kept as [`Species::Other`] and rejected at step 1.
    pub fn set_species_key(&mut self, key: &str) {
        let key = key.trim();
        if key.is_empty() {
            if self.frozen(Field::Species) {
                return;
            }
            if !self.breed.is_empty() {
                debug!("WIZARD: species cleared, clearing breed '{}'", self.breed);
                self.breed.clear();
            }
            self.species = None;
            self.clear_error_for(Field::Species);
            return;
        }
        self.set_species(Species::from_key(key));
    }

    pub fn set_breed(&mut self, breed: &str) {
        if self.frozen(Field::Breed) {
            return;
        }
        self.breed = breed.to_string();
        self.clear_error_for(Field::Breed);
    }

    /// Enter the age as free text.
    pub fn set_age(&mut self, input: &str) {
        if self.frozen(Field::Age) {
            return;
        }
        self.age = AgeEntry::from_input(input);
        self.clear_error_for(Field::Age);
    }

    pub fn set_age_years(&mut self, years: f64) {
        if self.frozen(Field::Age) {
            return;
        }
        self.age = AgeEntry::Years(years);
        self.clear_error_for(Field::Age);
    }

    /// Enter the age from whole years and months.
    pub fn set_age_years_months(&mut self, years: u32, months: u32) {
        self.set_age_years(years_months_to_age(years, months));
    }

    pub fn set_name(&mut self, name: &str) {
        if self.frozen(Field::Name) {
            return;
        }
        self.name = name.to_string();
        self.clear_error_for(Field::Name);
    }

    pub(super) fn clear_breed(&mut self) {
        self.breed.clear();
    }

    /// `None` for an absent name, otherwise the trimmed text.
    pub(super) fn trimmed_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.trim())
        }
    }
}
