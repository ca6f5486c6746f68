//! Age comparison series: pet age against human age over a typical lifespan.
//!
//! Points are sampled every half year from birth to the species' charted
//! maximum.  Each point carries its life stage so a renderer can colour or
//! label bands without classifying on its own.

use heapless::Vec;
use log::warn;
use serde::Serialize;

use crate::conversion::convert;
use crate::life_stage::{LifeStage, classify};
use crate::species::Species;

/// Sampling interval in years.
pub const SAMPLE_STEP_YEARS: f64 = 0.5;

/// Enough for the longest charted lifespan (20 years at half-year steps).
pub const MAX_POINTS: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub pet_age: f64,
    pub human_age: f64,
    pub stage: LifeStage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub species: Species,
    pub max_pet_age: f64,
    pub points: Vec<ChartPoint, MAX_POINTS>,
}

impl ChartSeries {
    /// Largest human age in the series, for axis scaling.
    pub fn max_human_age(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.human_age)
            .fold(0.0, f64::max)
    }

    /// The sampled point nearest to `age` (ties go to the younger point).
    pub fn nearest(&self, age: f64) -> Option<&ChartPoint> {
        self.points.iter().min_by(|a, b| {
            let da = (a.pet_age - age).abs();
            let db = (b.pet_age - age).abs();
            da.total_cmp(&db)
        })
    }
}

/// Upper end of the chart's x-axis in years.
pub fn max_pet_age(species: Species, breed: &str) -> f64 {
    match species {
        Species::Dog if breed.contains("Chihuahua") || breed.contains("Pomeranian") => 18.0,
        Species::Dog => 15.0,
        Species::Cat => 20.0,
        Species::Rabbit => 12.0,
        Species::Fish | Species::Other => 10.0,
    }
}

pub fn comparison_series(species: Species, breed: &str) -> ChartSeries {
    let max_age = max_pet_age(species, breed);
    let samples = (max_age / SAMPLE_STEP_YEARS).round() as usize;
    let mut points = Vec::new();

    // Index-based sampling keeps ages exact (no accumulated float error).
    for i in 0..=samples {
        let pet_age = i as f64 * SAMPLE_STEP_YEARS;
        let point = ChartPoint {
            pet_age,
            human_age: convert(species, breed, pet_age).equivalent_age,
            stage: classify(species, breed, pet_age),
        };
        if points.push(point).is_err() {
            warn!("CHART: series truncated at {pet_age} years ({MAX_POINTS} points)");
            break;
        }
    }

    ChartSeries {
        species,
        max_pet_age: max_age,
        points,
    }
}
