//! Canonical text rendering for polynomials.

pub mod render;

pub use render::{render, DisplayPoly, Format, Renderer};
