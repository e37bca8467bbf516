//! # ri-core
//!
//! Core types, error definitions, and settings for random-integration.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace – type aliases, the error enum with its `ensure!` macro,
//! and the `Settings` value read by the demo driver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Driver settings (iteration counts, seed, padding).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for counts of steps, segments and iterations.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
