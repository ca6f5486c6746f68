//! Age conversion engine: chronological pet age to "human years".
//!
//! Every species rule is piecewise-linear in age.  The function is total
//! over `age >= 0`: unknown species and out-of-list breeds resolve through
//! an explicit default branch, never an error.
//!
//! ```text
//!  dog/cat   ──  15/yr ──▶ 1 ── 9/yr ──▶ 2 ── rate/yr ──▶
//!  rabbit    ──  18/yr ──▶ 1 ── 8/yr ──────────────────▶
//!  fish      ──  ×5 | ×20 | ×10 (whole range) ─────────▶
//!  other     ──  ×7 (whole range) ─────────────────────▶
//! ```

use serde::{Deserialize, Serialize};

use crate::species::{CatLineage, DogSize, FishLifespan, Species};

/// Human years credited for the first year of a dog or cat.
const FIRST_YEAR: f64 = 15.0;
/// Human years credited for the second year of a dog or cat.
const SECOND_YEAR: f64 = 9.0;
/// `FIRST_YEAR + SECOND_YEAR`.
const TWO_YEAR_BASE: f64 = 24.0;

const DOG_RATE_SMALL: f64 = 4.0;
const DOG_RATE_MEDIUM: f64 = 5.0;
const DOG_RATE_LARGE: f64 = 5.5;
const CAT_RATE: f64 = 4.0;

const RABBIT_FIRST_YEAR: f64 = 18.0;
const RABBIT_RATE: f64 = 8.0;

const FISH_FACTOR_LONG_LIVED: f64 = 5.0;
const FISH_FACTOR_SHORT_LIVED: f64 = 20.0;
const FISH_FACTOR_STANDARD: f64 = 10.0;

const DEFAULT_FACTOR: f64 = 7.0;

/// Outcome of a conversion.  `rationale` is display text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub equivalent_age: f64,
    pub rationale: String,
}

impl ConversionResult {
    fn new(equivalent_age: f64, rationale: impl Into<String>) -> Self {
        Self {
            equivalent_age,
            rationale: rationale.into(),
        }
    }
}

/// Convert a chronological age (years) into its human-year equivalent.
pub fn convert(species: Species, breed: &str, age: f64) -> ConversionResult {
    match species {
        Species::Dog => convert_dog(breed, age),
        Species::Cat => convert_cat(breed, age),
        Species::Rabbit => convert_rabbit(age),
        Species::Fish => convert_fish(breed, age),
        Species::Other => ConversionResult::new(
            age * DEFAULT_FACTOR,
            "Using a standard conversion factor of 7.",
        ),
    }
}

/// Shared first-two-years curve for dogs and cats.  `None` past year two.
fn early_years(age: f64) -> Option<f64> {
    if age <= 1.0 {
        Some(age * FIRST_YEAR)
    } else if age <= 2.0 {
        Some(FIRST_YEAR + (age - 1.0) * SECOND_YEAR)
    } else {
        None
    }
}

/// `" like Beagle"`, or empty when no breed was given.
fn breed_phrase(breed: &str) -> String {
    if breed.is_empty() {
        String::new()
    } else {
        format!(" like {breed}")
    }
}

fn convert_dog(breed: &str, age: f64) -> ConversionResult {
    if let Some(human) = early_years(age) {
        let rationale = if age <= 1.0 {
            "Puppies develop quickly in their first year, equivalent to human adolescence."
        } else {
            "The second year of a dog's life is equivalent to the mid-twenties for humans."
        };
        return ConversionResult::new(human, rationale);
    }

    let like = breed_phrase(breed);
    let (rate, rationale) = match DogSize::of(breed) {
        DogSize::Small => (
            DOG_RATE_SMALL,
            format!(
                "Small breeds{like} tend to age more slowly after adulthood, but live longer overall."
            ),
        ),
        DogSize::Large => (
            DOG_RATE_LARGE,
            format!(
                "Large breeds{like} tend to age faster after adulthood and have shorter lifespans."
            ),
        ),
        DogSize::Medium => (
            DOG_RATE_MEDIUM,
            format!("Medium-sized breeds{like} age at an average rate."),
        ),
    };
    ConversionResult::new(TWO_YEAR_BASE + (age - 2.0) * rate, rationale)
}

fn convert_cat(breed: &str, age: f64) -> ConversionResult {
    if let Some(human) = early_years(age) {
        let rationale = if age <= 1.0 {
            "Kittens develop rapidly in their first year, reaching adolescence."
        } else {
            "By age two, cats have reached full adulthood, equivalent to mid-twenties in humans."
        };
        return ConversionResult::new(human, rationale);
    }

    // Lineage changes the wording only; the rate is the same for every cat.
    let rationale = match CatLineage::of(breed) {
        CatLineage::LongLived => format!(
            "{breed} cats tend to be longer-lived than average, often remaining active into their late teens."
        ),
        CatLineage::SlowMaturing => format!(
            "{breed} cats mature more slowly and can have longer lifespans with proper care."
        ),
        CatLineage::Standard => {
            "Cats age more consistently than dogs after reaching adulthood.".to_string()
        }
    };
    ConversionResult::new(TWO_YEAR_BASE + (age - 2.0) * CAT_RATE, rationale)
}

fn convert_rabbit(age: f64) -> ConversionResult {
    if age <= 1.0 {
        ConversionResult::new(
            age * RABBIT_FIRST_YEAR,
            "Rabbits mature very quickly, reaching adulthood in their first year.",
        )
    } else {
        ConversionResult::new(
            RABBIT_FIRST_YEAR + (age - 1.0) * RABBIT_RATE,
            "Each rabbit year after the first is roughly equivalent to 8 human years.",
        )
    }
}

fn convert_fish(breed: &str, age: f64) -> ConversionResult {
    match FishLifespan::of(breed) {
        FishLifespan::LongLived => ConversionResult::new(
            age * FISH_FACTOR_LONG_LIVED,
            format!(
                "{breed} can live for decades with proper care. Each year is roughly 5 human years."
            ),
        ),
        FishLifespan::ShortLived => ConversionResult::new(
            age * FISH_FACTOR_SHORT_LIVED,
            format!(
                "{breed} have shorter lifespans, with each year equivalent to about 20 human years."
            ),
        ),
        FishLifespan::Standard => ConversionResult::new(
            age * FISH_FACTOR_STANDARD,
            "Most aquarium fish age at a moderate rate compared to their maximum lifespan.",
        ),
    }
}

/// Render a human age with one decimal place, dropping a trailing `.0`.
pub fn format_human_age(human_age: f64) -> String {
    let s = format!("{human_age:.1}");
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(species: Species, breed: &str, age: f64) -> f64 {
        convert(species, breed, age).equivalent_age
    }

    #[test]
    fn dog_breakpoints_hold_for_every_breed() {
        for breed in Species::Dog.breeds().iter().chain(&[""]) {
            assert_eq!(human(Species::Dog, breed, 1.0), 15.0, "{breed} at 1");
            assert_eq!(human(Species::Dog, breed, 2.0), 24.0, "{breed} at 2");
        }
    }

    #[test]
    fn dog_rate_depends_on_size_after_two() {
        assert_eq!(human(Species::Dog, "Chihuahua", 3.0), 28.0);
        assert_eq!(human(Species::Dog, "Poodle", 3.0), 29.0);
        assert_eq!(human(Species::Dog, "Great Dane", 4.0), 35.0);
    }

    #[test]
    fn dog_second_year_is_nine_per_year() {
        assert_eq!(human(Species::Dog, "Beagle", 1.5), 19.5);
        assert_eq!(human(Species::Dog, "Beagle", 0.5), 7.5);
    }

    #[test]
    fn dog_rationale_names_size_branch() {
        let r = convert(Species::Dog, "Great Dane", 5.0);
        assert!(r.rationale.starts_with("Large breeds like Great Dane"));
        let r = convert(Species::Dog, "Chihuahua", 5.0);
        assert!(r.rationale.starts_with("Small breeds like Chihuahua"));
        let r = convert(Species::Dog, "", 5.0);
        assert_eq!(r.rationale, "Medium-sized breeds age at an average rate.");
    }

    #[test]
    fn cat_breakpoints_and_rate() {
        assert_eq!(human(Species::Cat, "Persian", 1.0), 15.0);
        assert_eq!(human(Species::Cat, "Persian", 2.0), 24.0);
        assert_eq!(human(Species::Cat, "Persian", 5.0), 36.0);
        assert_eq!(human(Species::Cat, "Siamese", 5.0), 36.0);
    }

    #[test]
    fn cat_rationale_varies_by_lineage() {
        let long = convert(Species::Cat, "Siamese", 8.0).rationale;
        let slow = convert(Species::Cat, "Ragdoll", 8.0).rationale;
        let std = convert(Species::Cat, "Bengal", 8.0).rationale;
        assert!(long.contains("longer-lived"));
        assert!(slow.contains("mature more slowly"));
        assert_eq!(std, "Cats age more consistently than dogs after reaching adulthood.");
    }

    #[test]
    fn rabbit_rules() {
        assert_eq!(human(Species::Rabbit, "", 1.0), 18.0);
        assert_eq!(human(Species::Rabbit, "Dutch", 0.5), 9.0);
        assert_eq!(human(Species::Rabbit, "Dutch", 3.0), 34.0);
    }

    #[test]
    fn fish_multipliers() {
        assert_eq!(human(Species::Fish, "Koi", 2.0), 10.0);
        assert_eq!(human(Species::Fish, "Betta", 2.0), 40.0);
        assert_eq!(human(Species::Fish, "Angelfish", 2.0), 20.0);
    }

    #[test]
    fn unknown_species_uses_factor_seven() {
        let r = convert(Species::Other, "whatever", 3.0);
        assert_eq!(r.equivalent_age, 21.0);
        assert!(r.rationale.contains("factor of 7"));
    }

    #[test]
    fn zero_age_is_zero_everywhere() {
        for s in Species::SUPPORTED.iter().chain(&[Species::Other]) {
            assert_eq!(human(*s, "", 0.0), 0.0);
        }
    }

    #[test]
    fn formats_strip_trailing_zero() {
        assert_eq!(format_human_age(29.0), "29");
        assert_eq!(format_human_age(19.5), "19.5");
        assert_eq!(format_human_age(25.26), "25.3");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_species() -> impl Strategy<Value = Species> {
        prop_oneof![
            Just(Species::Dog),
            Just(Species::Cat),
            Just(Species::Rabbit),
            Just(Species::Fish),
            Just(Species::Other),
        ]
    }

    fn arb_breed() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("Chihuahua"),
            Just("Poodle"),
            Just("Great Dane"),
            Just("Siamese"),
            Just("Maine Coon"),
            Just("Koi"),
            Just("Guppy"),
            Just(""),
        ]
    }

    proptest! {
        #[test]
        fn never_negative(species in arb_species(), breed in arb_breed(), age in 0.0f64..=30.0) {
            prop_assert!(convert(species, breed, age).equivalent_age >= 0.0);
        }

        #[test]
        fn monotonic_in_age(
            species in arb_species(),
            breed in arb_breed(),
            a in 0.0f64..=30.0,
            b in 0.0f64..=30.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let y_lo = convert(species, breed, lo).equivalent_age;
            let y_hi = convert(species, breed, hi).equivalent_age;
            prop_assert!(y_lo <= y_hi, "{species:?}/{breed}: f({lo})={y_lo} > f({hi})={y_hi}");
        }
    }
}
