//! Unified error types for the pet age calculator.
//!
//! A user-correctable validation failure is a value, never a panic: the
//! wizard hands a [`ValidationError`] back to the caller and stays on the
//! current step.  Configuration and export failures get their own enums so
//! the binary can report them through `anyhow` without string matching.

use core::fmt;

// ---------------------------------------------------------------------------
// Validation (wizard fields)
// ---------------------------------------------------------------------------

/// The wizard field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Species,
    Breed,
    Age,
    Name,
}

impl Field {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationKind {
    SpeciesRequired,
    SpeciesUnsupported,
    BreedRequired,
    BreedNotInList,
    AgeRequired,
    AgeNotANumber,
    AgeNotPositive,
    /// Carries the configured upper bound in years.
    AgeTooOld(f64),
    NameBlank,
    NameInvalidChars,
}

impl ValidationKind {
    /// The field this kind of failure is reported against.
    pub const fn field(self) -> Field {
        match self {
            Self::SpeciesRequired | Self::SpeciesUnsupported => Field::Species,
            Self::BreedRequired | Self::BreedNotInList => Field::Breed,
            Self::AgeRequired | Self::AgeNotANumber | Self::AgeNotPositive | Self::AgeTooOld(_) => {
                Field::Age
            }
            Self::NameBlank | Self::NameInvalidChars => Field::Name,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeciesRequired => write!(f, "Please select your pet type"),
            Self::SpeciesUnsupported => write!(f, "Unsupported pet type"),
            Self::BreedRequired => write!(f, "Please select your pet's breed"),
            Self::BreedNotInList => write!(f, "Please select a breed from the list"),
            Self::AgeRequired => write!(f, "Please enter your pet's age"),
            Self::AgeNotANumber => write!(f, "Age must be a number"),
            Self::AgeNotPositive => write!(f, "Age must be positive"),
            Self::AgeTooOld(max) => write!(f, "Age must be at most {max} years"),
            Self::NameBlank => write!(f, "Pet name cannot be empty or just spaces"),
            Self::NameInvalidChars => write!(f, "Pet name can only contain letters and spaces"),
        }
    }
}

/// A field-keyed, user-correctable validation failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub const fn new(kind: ValidationKind) -> Self {
        Self {
            field: kind.field(),
            kind,
        }
    }

    /// The inline message to render next to the field.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<ValidationKind> for ValidationError {
    fn from(kind: ValidationKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Io(String),
    /// The config file is not valid JSON for [`CalculatorConfig`](crate::config::CalculatorConfig).
    Parse(String),
    /// A value is outside its allowed range.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config read failed: {msg}"),
            Self::Parse(msg) => write!(f, "config parse failed: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The wizard has not produced a result yet.
    NoResult,
    /// No care guidance is authored for this species and stage.
    NoGuidance {
        species: &'static str,
        stage: &'static str,
    },
    /// Writing to the sink failed.
    Io(String),
    /// The schedule could not be encoded.
    Encode(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResult => write!(f, "no result to export yet"),
            Self::NoGuidance { species, stage } => {
                write!(f, "no care recommendations available for {species} ({stage})")
            }
            Self::Io(msg) => write!(f, "export write failed: {msg}"),
            Self::Encode(msg) => write!(f, "export encode failed: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e.to_string())
    }
}
