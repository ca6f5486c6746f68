//! Chronological age input handling.
//!
//! Ages are decimal years (1.5 = one year six months).  The UI may hand us
//! a raw string or a years + months pair; both are normalised here so the
//! rest of the crate only ever sees `f64` years.

use crate::error::ValidationKind;

/// Parse a user-entered decimal age.
///
/// Only checks that the text is a finite number; range checks belong to the
/// wizard's age step.
pub fn parse_age(input: &str) -> Result<f64, ValidationKind> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationKind::AgeRequired);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationKind::AgeNotANumber),
    }
}

/// Compose a decimal age from whole years and months.  Twelve months carry
/// into the next year.
pub fn years_months_to_age(years: u32, months: u32) -> f64 {
    let years = f64::from(years) + f64::from(months / 12);
    let months = months % 12;
    years + f64::from(months) / 12.0
}

/// Split a decimal age into whole years and rounded months.  Years
/// saturate at `u32::MAX`.
pub fn age_to_years_months(age: f64) -> (u32, u32) {
    let age = age.max(0.0);
    let mut years = age.floor() as u32;
    let mut months = ((age - age.floor()) * 12.0).round() as u32;
    if months == 12 {
        years = years.saturating_add(1);
        months = 0;
    }
    (years, months)
}

/// "1 year 6 months", "3 years", "6 months", "0 months".
pub fn describe_age(age: f64) -> String {
    let (years, months) = age_to_years_months(age);
    let unit = |n: u32, one: &str, many: &str| format!("{n} {}", if n == 1 { one } else { many });
    match (years, months) {
        (0, m) => unit(m, "month", "months"),
        (y, 0) => unit(y, "year", "years"),
        (y, m) => format!("{} {}", unit(y, "year", "years"), unit(m, "month", "months")),
    }
}
