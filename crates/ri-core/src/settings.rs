//! Driver settings.
//!
//! [`Settings`] collects the knobs of a comparison run: how many Monte
//! Carlo trials to draw, how many quadrature segments to use, how finely
//! to sample the integrand when estimating its maximum, how much to pad
//! that estimate, and an optional seed.
//!
//! A `Settings` value is passed explicitly to whatever needs it; there is
//! no global instance. Values can be overridden from the environment with
//! [`Settings::from_env`].

use std::collections::HashMap;
use std::env::VarError;

use crate::errors::{Error, Result};
use crate::{Real, Size};

/// Environment variable overriding [`Settings::monte_carlo_iterations`].
pub const ITERATIONS_VAR: &str = "RANDOM_INTEGRATION_ITERATIONS";
/// Environment variable overriding [`Settings::segments`].
pub const SEGMENTS_VAR: &str = "RANDOM_INTEGRATION_SEGMENTS";
/// Environment variable overriding [`Settings::max_estimate_steps`].
pub const MAX_STEPS_VAR: &str = "RANDOM_INTEGRATION_MAX_STEPS";
/// Environment variable overriding [`Settings::max_padding`].
pub const MAX_PADDING_VAR: &str = "RANDOM_INTEGRATION_MAX_PADDING";
/// Environment variable setting [`Settings::seed`].
pub const SEED_VAR: &str = "RANDOM_INTEGRATION_SEED";

const ALL_VARS: [&str; 5] = [
    ITERATIONS_VAR,
    SEGMENTS_VAR,
    MAX_STEPS_VAR,
    MAX_PADDING_VAR,
    SEED_VAR,
];

/// Parameters of a comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Number of hit-or-miss trials per Monte Carlo estimate.
    pub monte_carlo_iterations: Size,
    /// Segment count for the trapezoid rule, segment-pair count for
    /// Simpson's rule.
    pub segments: Size,
    /// Grid steps used to estimate the maximum of the integrand.
    pub max_estimate_steps: Size,
    /// Relative padding applied to the estimated maximum, so that the
    /// rejection-sampling rectangle covers peaks between grid points.
    pub max_padding: Real,
    /// Seed for the Monte Carlo generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monte_carlo_iterations: 10_000_000,
            segments: 1000,
            max_estimate_steps: 1000,
            max_padding: 0.01,
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by the `RANDOM_INTEGRATION_*` environment
    /// variables that are set.
    ///
    /// A variable that is set but not valid UTF-8 is an
    /// [`Error::InvalidArgument`].
    pub fn from_env() -> Result<Self> {
        let mut vars = HashMap::new();
        for name in ALL_VARS {
            if let Some(value) = env_value(name, std::env::var(name))? {
                vars.insert(name, value);
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    /// name.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(v) = lookup(ITERATIONS_VAR) {
            settings.monte_carlo_iterations = parse_var(ITERATIONS_VAR, &v)?;
        }
        if let Some(v) = lookup(SEGMENTS_VAR) {
            settings.segments = parse_var(SEGMENTS_VAR, &v)?;
        }
        if let Some(v) = lookup(MAX_STEPS_VAR) {
            settings.max_estimate_steps = parse_var(MAX_STEPS_VAR, &v)?;
        }
        if let Some(v) = lookup(MAX_PADDING_VAR) {
            settings.max_padding = parse_var(MAX_PADDING_VAR, &v)?;
        }
        if let Some(v) = lookup(SEED_VAR) {
            settings.seed = Some(parse_var(SEED_VAR, &v)?);
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every count is positive and the padding is a finite,
    /// non-negative number.
    pub fn validate(&self) -> Result<()> {
        for (name, count) in [
            (ITERATIONS_VAR, self.monte_carlo_iterations),
            (SEGMENTS_VAR, self.segments),
            (MAX_STEPS_VAR, self.max_estimate_steps),
        ] {
            if count == 0 {
                return Err(Error::InvalidArgument(format!("{name} must be > 0")));
            }
        }
        if !self.max_padding.is_finite() || self.max_padding < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "{MAX_PADDING_VAR} must be a finite, non-negative number, got {}",
                self.max_padding
            )));
        }
        Ok(())
    }
}

fn env_value(name: &str, var: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(Error::InvalidArgument(format!(
            "{name}={raw:?}: not valid UTF-8"
        ))),
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::InvalidArgument(format!("{name}={value:?}: {e}")))
}
