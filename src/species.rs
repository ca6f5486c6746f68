//! Species identity and breed reference data.
//!
//! [`Species`] is a closed variant; anything the calculator does not know
//! about lands in [`Species::Other`] and is served by the default rules.
//! Breeds stay plain strings: they are only ever used as exact-match keys
//! into the per-species reference lists and classification sets below.

use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Fish,
    /// Any species without dedicated rules.
    Other,
}

impl Species {
    /// Species the wizard lets a user pick, in display order.
    pub const SUPPORTED: [Species; 4] = [Self::Dog, Self::Cat, Self::Rabbit, Self::Fish];

    /// Map a lowercase key to a species.  Unknown keys become [`Species::Other`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "dog" => Self::Dog,
            "cat" => Self::Cat,
            "rabbit" => Self::Rabbit,
            "fish" => Self::Fish,
            _ => Self::Other,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Rabbit => "rabbit",
            Self::Fish => "fish",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rabbit => "Rabbit",
            Self::Fish => "Fish",
            Self::Other => "Pet",
        }
    }

    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// The breed reference list offered for this species.
    pub const fn breeds(self) -> &'static [&'static str] {
        match self {
            Self::Dog => DOG_BREEDS,
            Self::Cat => CAT_BREEDS,
            Self::Rabbit => RABBIT_BREEDS,
            Self::Fish => FISH_BREEDS,
            Self::Other => &[],
        }
    }

    /// Exact, case-sensitive membership in [`Species::breeds`].
    pub fn has_breed(self, breed: &str) -> bool {
        self.breeds().contains(&breed)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Breed reference lists
// ---------------------------------------------------------------------------

const DOG_BREEDS: &[&str] = &[
    "Beagle",
    "Border Collie",
    "Boxer",
    "Bulldog",
    "Chihuahua",
    "Dachshund",
    "German Shepherd",
    "Golden Retriever",
    "Great Dane",
    "Labrador Retriever",
    "Maltese",
    "Pomeranian",
    "Poodle",
    "Rottweiler",
    "Saint Bernard",
    "Shih Tzu",
    "Siberian Husky",
    "Toy Poodle",
    "Yorkshire Terrier",
    "Mixed Breed",
];

const CAT_BREEDS: &[&str] = &[
    "Abyssinian",
    "Bengal",
    "British Shorthair",
    "Burmese",
    "Domestic Shorthair",
    "Maine Coon",
    "Oriental",
    "Persian",
    "Ragdoll",
    "Siamese",
    "Sphynx",
    "Mixed Breed",
];

const RABBIT_BREEDS: &[&str] = &[
    "Dutch",
    "Flemish Giant",
    "Holland Lop",
    "Lionhead",
    "Mini Rex",
    "Netherland Dwarf",
    "Mixed Breed",
];

const FISH_BREEDS: &[&str] = &[
    "Angelfish",
    "Betta",
    "Goldfish",
    "Guppy",
    "Koi",
    "Molly",
    "Tetra",
    "Other",
];

// ---------------------------------------------------------------------------
// Breed classification sets
// ---------------------------------------------------------------------------

const SMALL_DOG_BREEDS: &[&str] = &[
    "Chihuahua",
    "Pomeranian",
    "Yorkshire Terrier",
    "Shih Tzu",
    "Maltese",
    "Toy Poodle",
];

const LARGE_DOG_BREEDS: &[&str] = &[
    "German Shepherd",
    "Labrador Retriever",
    "Golden Retriever",
    "Rottweiler",
    "Great Dane",
    "Saint Bernard",
];

const LONG_LIVED_CAT_BREEDS: &[&str] = &["Siamese", "Burmese", "Oriental"];
const SLOW_MATURING_CAT_BREEDS: &[&str] = &["Maine Coon", "Ragdoll", "Persian"];

const LONG_LIVED_FISH: &[&str] = &["Goldfish", "Koi"];
const SHORT_LIVED_FISH: &[&str] = &["Betta", "Guppy", "Tetra"];

/// Dog size class.  Drives both the post-two-year ageing rate and the
/// adult/senior boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DogSize {
    Small,
    Medium,
    Large,
}

impl DogSize {
    /// Breeds outside both fixed sets (including the empty breed) are medium.
    pub fn of(breed: &str) -> Self {
        if SMALL_DOG_BREEDS.contains(&breed) {
            Self::Small
        } else if LARGE_DOG_BREEDS.contains(&breed) {
            Self::Large
        } else {
            Self::Medium
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatLineage {
    LongLived,
    SlowMaturing,
    Standard,
}

impl CatLineage {
    pub fn of(breed: &str) -> Self {
        if LONG_LIVED_CAT_BREEDS.contains(&breed) {
            Self::LongLived
        } else if SLOW_MATURING_CAT_BREEDS.contains(&breed) {
            Self::SlowMaturing
        } else {
            Self::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishLifespan {
    LongLived,
    ShortLived,
    Standard,
}

impl FishLifespan {
    pub fn of(breed: &str) -> Self {
        if LONG_LIVED_FISH.contains(&breed) {
            Self::LongLived
        } else if SHORT_LIVED_FISH.contains(&breed) {
            Self::ShortLived
        } else {
            Self::Standard
        }
    }
}
