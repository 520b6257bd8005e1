//! Placeholder image rendering.
//!
//! This module handles:
//! - Resolving a usable font (system outline font, built-in fallback)
//! - Painting the gradient-plus-caption placeholder images
//! - Encoding them as JPEG at fixed quality

pub mod canvas;
pub mod font;

pub use canvas::Renderer;
