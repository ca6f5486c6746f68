//! Fuzz target: age text entry
//!
//! Feeds arbitrary UTF-8 through `parse_age` and the age step and verifies:
//! - No panics on any input
//! - Parsed ages are always finite
//! - Accepted ages convert and classify for every species
//!
//! cargo fuzz run fuzz_age_input

#![no_main]

use libfuzzer_sys::fuzz_target;
use petage::age::{age_to_years_months, describe_age, parse_age};
use petage::conversion::convert;
use petage::life_stage::classify;
use petage::species::Species;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(age) = parse_age(text) else {
        return;
    };
    assert!(age.is_finite());

    let _ = age_to_years_months(age);
    let _ = describe_age(age);
    for species in Species::SUPPORTED {
        for breed in species.breeds() {
            let r = convert(species, breed, age);
            assert!(!r.rationale.is_empty());
            let _ = classify(species, breed, age);
        }
    }
});
