//! Care recommendation resolver.
//!
//! The guidance itself is read-only reference data bundled as JSON
//! (`data/care_profiles.json`, keyed species → stage).  It is parsed once on
//! first use and shared for the rest of the process.  Looking up a pair with
//! no authored guidance yields [`CareLookup::NotFound`]: a normal outcome the
//! caller renders as "no recommendations available".

use std::collections::HashMap;
use std::sync::OnceLock;

use log::error;
use serde::{Deserialize, Serialize};

use crate::life_stage::LifeStage;
use crate::species::Species;

const BUNDLED_CARE_JSON: &str = include_str!("../data/care_profiles.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Essential,
    Recommended,
    Optional,
}

impl Importance {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareRecommendation {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub importance: Importance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareCategory {
    pub name: String,
    pub recommendations: Vec<CareRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareProfile {
    pub overview: String,
    pub categories: Vec<CareCategory>,
}

/// Result of a care lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareLookup<'a> {
    Found(&'a CareProfile),
    /// No guidance authored for this (species, stage) pair.
    NotFound,
}

impl<'a> CareLookup<'a> {
    pub fn profile(self) -> Option<&'a CareProfile> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Species key → stage key → profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CareTable {
    profiles: HashMap<String, HashMap<String, CareProfile>>,
}

impl CareTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Raw key lookup.  Keys are exact; no normalisation.
    pub fn lookup(&self, species_key: &str, stage_key: &str) -> CareLookup<'_> {
        match self
            .profiles
            .get(species_key)
            .and_then(|stages| stages.get(stage_key))
        {
            Some(profile) => CareLookup::Found(profile),
            None => CareLookup::NotFound,
        }
    }

    pub fn resolve(&self, species: Species, stage: LifeStage) -> CareLookup<'_> {
        self.lookup(species.key(), stage.key())
    }
}

/// The bundled table.  A parse failure is logged and leaves the table
/// empty, so every lookup reports `NotFound`.
pub fn care_table() -> &'static CareTable {
    static TABLE: OnceLock<CareTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        CareTable::from_json(BUNDLED_CARE_JSON).unwrap_or_else(|e| {
            error!("CARE: bundled care table failed to parse: {e}");
            CareTable::default()
        })
    })
}

/// Resolve guidance for a species and stage from the bundled table.
pub fn resolve(species: Species, stage: LifeStage) -> CareLookup<'static> {
    care_table().resolve(species, stage)
}
