//! Integration tests for the winnum crates.
//!
//! This crate contains cross-module property tests for the geometry kernel,
//! comparisons against `glam` as an independent reference, and layout /
//! serialization checks for the interop surface.

#[cfg(test)]
mod layout;
#[cfg(test)]
mod reference;
