//! Side-by-side comparison of the three integrators on functions with a
//! known integral.

use std::f64::consts::FRAC_PI_4;
use std::fmt;

use ri_core::{errors::Result, Real, Settings};
use ri_math::{BoundedFunction, Integrator, MonteCarloIntegral, SimpsonIntegral, TrapezoidIntegral};

/// A bounded function whose integral is known in closed form.
#[derive(Clone)]
pub struct TestCase<F = fn(Real) -> Real> {
    name: String,
    function: BoundedFunction<F>,
    expected: Real,
}

impl<F> fmt::Debug for TestCase<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("function", &self.function)
            .field("expected", &self.expected)
            .finish()
    }
}

impl<F: Fn(Real) -> Real> TestCase<F> {
    /// Pair `f` on `[lower_bound, upper_bound]` with its exact integral.
    pub fn new(
        name: impl Into<String>,
        f: F,
        lower_bound: Real,
        upper_bound: Real,
        expected: Real,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            function: BoundedFunction::new(f, lower_bound, upper_bound)?,
            expected,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The function under test.
    pub fn function(&self) -> &BoundedFunction<F> {
        &self.function
    }

    /// Exact value of the integral.
    pub fn expected(&self) -> Real {
        self.expected
    }
}

impl TestCase {
    /// `√(1 - x²)` on `[0, 1]`; the integral is `π / 4`.
    pub fn quarter_circle() -> Result<Self> {
        Self::new("quarter circle", |x| (1.0 - x * x).sqrt(), 0.0, 1.0, FRAC_PI_4)
    }

    /// `x²` on `[-1, 1]`; the integral is `2 / 3`.
    pub fn parabola() -> Result<Self> {
        Self::new("parabola", |x| x * x, -1.0, 1.0, 2.0 / 3.0)
    }

    /// Every built-in case, in reporting order.
    pub fn builtin() -> Result<Vec<Self>> {
        Ok(vec![Self::quarter_circle()?, Self::parabola()?])
    }
}

/// The three estimates for one [`TestCase`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationReport {
    /// Name of the case.
    pub name: String,
    /// Exact value of the integral.
    pub expected: Real,
    /// Height of the Monte Carlo sampling rectangle.
    pub max_value: Real,
    /// Hit-or-miss Monte Carlo estimate.
    pub monte_carlo: Real,
    /// Trapezoid-rule estimate.
    pub trapezoid: Real,
    /// Simpson's-rule estimate.
    pub simpson: Real,
}

impl IntegrationReport {
    /// `|monte_carlo - expected|`.
    pub fn monte_carlo_error(&self) -> Real {
        (self.monte_carlo - self.expected).abs()
    }

    /// `|trapezoid - expected|`.
    pub fn trapezoid_error(&self) -> Real {
        (self.trapezoid - self.expected).abs()
    }

    /// `|simpson - expected|`.
    pub fn simpson_error(&self) -> Real {
        (self.simpson - self.expected).abs()
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (max value {})", self.name, self.max_value)?;
        writeln!(f, "Expected = {}", self.expected)?;
        writeln!(f, "{}, {}, {}", self.monte_carlo, self.trapezoid, self.simpson)?;
        write!(
            f,
            "|error| = {:.3e}, {:.3e}, {:.3e}",
            self.monte_carlo_error(),
            self.trapezoid_error(),
            self.simpson_error()
        )
    }
}

/// Run all three integrators on `case`.
///
/// The Monte Carlo rectangle height is the maximum over a
/// `settings.max_estimate_steps` grid, scaled by `1 + settings.max_padding`.
/// A peak narrower than the grid spacing and taller than the padding still
/// biases the Monte Carlo estimate low. When the grid maximum is `0.0`
/// (e.g. `f ≡ 0`) the rectangle height falls back to `1.0`.
pub fn run_case<F: Fn(Real) -> Real>(
    case: &TestCase<F>,
    settings: &Settings,
) -> Result<IntegrationReport> {
    settings.validate()?;
    let bf = case.function();
    let grid_max = bf.estimate_max(settings.max_estimate_steps)?;
    let max_value = if grid_max > 0.0 {
        grid_max * (1.0 + settings.max_padding)
    } else {
        1.0
    };

    let mut monte_carlo = MonteCarloIntegral::new(settings.monte_carlo_iterations, max_value);
    if let Some(seed) = settings.seed {
        monte_carlo = monte_carlo.with_seed(seed);
    }

    Ok(IntegrationReport {
        name: case.name().to_owned(),
        expected: case.expected(),
        max_value,
        monte_carlo: monte_carlo.integrate(bf)?,
        trapezoid: TrapezoidIntegral::new(settings.segments).integrate(bf)?,
        simpson: SimpsonIntegral::new(settings.segments).integrate(bf)?,
    })
}
