//! Care schedule export record.
//!
//! A [`CareSchedule`] is the flat structure handed to an
//! [`ExportSink`](crate::app::ports::ExportSink).  It can only be built
//! from a completed result whose care profile resolved: exporting against
//! "no guidance" is refused here, before any sink sees it.

use serde::Serialize;

use crate::care::{CareProfile, CareTable};
use crate::config::ExportFormat;
use crate::error::ExportError;
use crate::life_stage::LifeStage;
use crate::species::Species;
use crate::wizard::session::ResultSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareSchedule<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<&'a str>,
    pub species: Species,
    pub breed: &'a str,
    pub chronological_age: f64,
    pub life_stage: LifeStage,
    pub profile: &'a CareProfile,
}

impl<'a> CareSchedule<'a> {
    pub fn from_result(
        result: Option<&'a ResultSnapshot>,
        table: &'a CareTable,
    ) -> Result<Self, ExportError> {
        let result = result.ok_or(ExportError::NoResult)?;
        let profile = table
            .resolve(result.species, result.life_stage)
            .profile()
            .ok_or(ExportError::NoGuidance {
                species: result.species.key(),
                stage: result.life_stage.key(),
            })?;
        Ok(Self {
            pet_name: result.name.as_deref(),
            species: result.species,
            breed: &result.breed,
            chronological_age: result.chronological_age,
            life_stage: result.life_stage,
            profile,
        })
    }

    /// "Care Schedule for Rex" / "Care Schedule for Your Pet".
    pub fn title(&self) -> String {
        format!("Care Schedule for {}", self.pet_name.unwrap_or("Your Pet"))
    }

    /// "Poodle dog, 3 years old - Adult Stage".
    pub fn summary(&self) -> String {
        format!(
            "{} {}, {} years old - {} Stage",
            self.breed,
            self.species,
            self.chronological_age,
            self.life_stage.info().title
        )
    }
}

/// `rex_care_schedule.txt`, or `pet_care_schedule.json` without a name.
/// Spaces in the name become underscores.
pub fn schedule_file_name(pet_name: Option<&str>, format: ExportFormat) -> String {
    let stem = pet_name
        .map(|n| n.split_whitespace().collect::<Vec<_>>().join("_").to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "pet".to_string());
    format!("{stem}_care_schedule.{}", format.extension())
}
