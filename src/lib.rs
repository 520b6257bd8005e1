//! Deterministic test-job generator for the sports-team photo workflow.
//!
//! Builds a self-contained job folder (camera-style images, roster CSV,
//! instructions file) that exercises the rename pipeline of the photo
//! workflow app end-to-end: varied pose counts, a seeded rename conflict,
//! and an invalid filename. Everything is driven by one seeded RNG, so a
//! run is fully reproducible.

pub mod camera;
pub mod error;
pub mod job;
pub mod manifest;
pub mod render;
pub mod roster;
pub mod seeder;

pub use error::{FixtureError, Result};
