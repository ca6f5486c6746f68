//! Life-stage classifier.
//!
//! The one place that maps (species, breed, age) to a [`LifeStage`].  The
//! result panel, the care lookup and the chart labels all call [`classify`];
//! none of them keep their own threshold table.
//!
//! Thresholds are strict `<` comparisons evaluated youngest-first, so the
//! stage can only move forward as age increases.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::species::{DogSize, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStage {
    /// Infant dog.
    Puppy,
    /// Infant cat.
    Kitten,
    /// Infant rabbit, fish, or unknown species.
    Baby,
    Adolescent,
    Adult,
    Senior,
}

/// Display copy for a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    pub title: &'static str,
    pub description: &'static str,
}

impl LifeStage {
    /// Position in the developmental ordering infant < adolescent < adult < senior.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Puppy | Self::Kitten | Self::Baby => 0,
            Self::Adolescent => 1,
            Self::Adult => 2,
            Self::Senior => 3,
        }
    }

    /// Key used by the care table.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Puppy => "puppy",
            Self::Kitten => "kitten",
            Self::Baby => "baby",
            Self::Adolescent => "adolescent",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }

    pub const fn info(self) -> StageInfo {
        match self {
            Self::Puppy => StageInfo {
                title: "Puppy",
                description: "Your puppy is developing rapidly, learning about the world, and forming important bonds. Focus on socialization, basic training, and proper nutrition for growth.",
            },
            Self::Kitten => StageInfo {
                title: "Kitten",
                description: "Your kitten is growing quickly and developing motor skills and social behaviors. Provide plenty of play, appropriate scratching surfaces, and kitten-specific nutrition.",
            },
            Self::Baby => StageInfo {
                title: "Baby",
                description: "Your pet is in its earliest life stage, growing rapidly and learning about its environment. Provide extra care, appropriate nutrition, and gentle handling.",
            },
            Self::Adolescent => StageInfo {
                title: "Adolescent",
                description: "Your pet is like a teenager, full of energy and testing boundaries. Continue training, provide plenty of exercise, and maintain consistent rules and routines.",
            },
            Self::Adult => StageInfo {
                title: "Adult",
                description: "Your pet is in their prime years. Maintain regular exercise, mental stimulation, and preventative healthcare. Watch for subtle changes that might indicate health issues.",
            },
            Self::Senior => StageInfo {
                title: "Senior",
                description: "Your pet is in their golden years. They may need adjustments to diet, exercise, and living arrangements. Regular veterinary checkups are especially important now.",
            },
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive lower bounds (years) of the adolescent, adult and senior stages.
struct Thresholds {
    infant: LifeStage,
    adolescent_from: f64,
    adult_from: f64,
    senior_from: f64,
}

impl Thresholds {
    fn stage(&self, age: f64) -> LifeStage {
        if age < self.adolescent_from {
            self.infant
        } else if age < self.adult_from {
            LifeStage::Adolescent
        } else if age < self.senior_from {
            LifeStage::Adult
        } else {
            LifeStage::Senior
        }
    }
}

fn thresholds(species: Species, breed: &str) -> Thresholds {
    match species {
        Species::Dog => Thresholds {
            infant: LifeStage::Puppy,
            adolescent_from: 1.0,
            adult_from: 2.0,
            senior_from: match DogSize::of(breed) {
                DogSize::Small => 9.0,
                DogSize::Large => 6.0,
                DogSize::Medium => 7.0,
            },
        },
        Species::Cat => Thresholds {
            infant: LifeStage::Kitten,
            adolescent_from: 1.0,
            adult_from: 2.0,
            senior_from: 10.0,
        },
        Species::Rabbit => Thresholds {
            infant: LifeStage::Baby,
            adolescent_from: 0.5,
            adult_from: 1.0,
            senior_from: 5.0,
        },
        Species::Fish => Thresholds {
            infant: LifeStage::Baby,
            adolescent_from: 0.25,
            adult_from: 1.0,
            senior_from: 3.0,
        },
        Species::Other => Thresholds {
            infant: LifeStage::Baby,
            adolescent_from: 1.0,
            adult_from: 2.0,
            senior_from: 7.0,
        },
    }
}

/// Classify a pet into its life stage.  Breed only matters for dogs.
pub fn classify(species: Species, breed: &str, age: f64) -> LifeStage {
    thresholds(species, breed).stage(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_dog_thresholds() {
        assert_eq!(classify(Species::Dog, "Chihuahua", 0.9), LifeStage::Puppy);
        assert_eq!(classify(Species::Dog, "Chihuahua", 1.9), LifeStage::Adolescent);
        assert_eq!(classify(Species::Dog, "Chihuahua", 8.9), LifeStage::Adult);
        assert_eq!(classify(Species::Dog, "Chihuahua", 9.1), LifeStage::Senior);
    }

    #[test]
    fn large_dog_turns_senior_earlier() {
        assert_eq!(classify(Species::Dog, "Great Dane", 6.1), LifeStage::Senior);
        assert_eq!(classify(Species::Dog, "Great Dane", 5.9), LifeStage::Adult);
        assert_eq!(classify(Species::Dog, "Poodle", 6.1), LifeStage::Adult);
        assert_eq!(classify(Species::Dog, "Poodle", 7.0), LifeStage::Senior);
    }

    #[test]
    fn infant_threshold_is_size_independent() {
        for breed in ["Chihuahua", "Great Dane", "Poodle", ""] {
            assert_eq!(classify(Species::Dog, breed, 0.99), LifeStage::Puppy);
            assert_eq!(classify(Species::Dog, breed, 1.0), LifeStage::Adolescent);
        }
    }

    #[test]
    fn cat_rabbit_fish_other() {
        assert_eq!(classify(Species::Cat, "", 0.5), LifeStage::Kitten);
        assert_eq!(classify(Species::Cat, "", 10.0), LifeStage::Senior);
        assert_eq!(classify(Species::Rabbit, "", 0.4), LifeStage::Baby);
        assert_eq!(classify(Species::Rabbit, "", 0.5), LifeStage::Adolescent);
        assert_eq!(classify(Species::Rabbit, "", 4.9), LifeStage::Adult);
        assert_eq!(classify(Species::Fish, "", 0.2), LifeStage::Baby);
        assert_eq!(classify(Species::Fish, "", 0.25), LifeStage::Adolescent);
        assert_eq!(classify(Species::Fish, "", 3.0), LifeStage::Senior);
        assert_eq!(classify(Species::Other, "", 1.5), LifeStage::Adolescent);
        assert_eq!(classify(Species::Other, "", 7.0), LifeStage::Senior);
    }

    #[test]
    fn keys_match_care_table_vocabulary() {
        assert_eq!(LifeStage::Puppy.key(), "puppy");
        assert_eq!(LifeStage::Kitten.to_string(), "kitten");
        assert_eq!(LifeStage::Senior.info().title, "Senior");
    }
}
