//! # random-integration
//!
//! Estimates definite integrals of non-negative one-dimensional functions
//! three ways – hit-or-miss Monte Carlo, the trapezoid rule, and Simpson's
//! rule – and compares the estimates against closed-form answers.
//!
//! This crate is a **façade** over the workspace crates plus the [`demo`]
//! module used by the `random-integration` binary.
//!
//! ## Quick start
//!
//! ```rust
//! use random_integration::math::{BoundedFunction, Integrator, SimpsonIntegral};
//!
//! let parabola = BoundedFunction::new(|x: f64| x * x, -1.0, 1.0).unwrap();
//! let area = SimpsonIntegral::new(1).integrate(&parabola).unwrap();
//! assert!((area - 2.0 / 3.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, errors, and settings.
pub use ri_core as core;

/// Bounded functions, random number generators, and integrators.
pub use ri_math as math;

/// Built-in comparison cases and their reports.
pub mod demo;

pub use demo::{run_case, IntegrationReport, TestCase};
