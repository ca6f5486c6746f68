//! PetAge library.
//!
//! Pet age to human age conversion, life-stage classification and care
//! guidance, driven by a five-step wizard.  The binary in `main.rs` is a
//! thin terminal front end over [`app::service::AppService`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod age;
pub mod app;
pub mod care;
pub mod chart;
pub mod config;
pub mod conversion;
pub mod error;
pub mod export;
pub mod life_stage;
pub mod species;
pub mod wizard;
