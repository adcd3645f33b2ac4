// File: crates/riemann-core/src/function.rs
// Summary: Built-in function table and the PlotFunction value (evaluator + domain + cached samples).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::InputError;
use crate::geometry::Interval;
use crate::sample::sample;

/// Finite stand-in returned by `1 / x` at its pole.
pub const RECIPROCAL_AT_ZERO: f64 = 1000.0;

/// The fixed set of functions a user can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    Sin,
    Cubic,
    Gaussian,
    Abs,
    Reciprocal,
    Sinc,
}

impl BuiltinFunction {
    /// All entries in display order.
    pub const ALL: [BuiltinFunction; 6] = [
        BuiltinFunction::Sin,
        BuiltinFunction::Cubic,
        BuiltinFunction::Gaussian,
        BuiltinFunction::Abs,
        BuiltinFunction::Reciprocal,
        BuiltinFunction::Sinc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinFunction::Sin => "sin(x)",
            BuiltinFunction::Cubic => "x^3",
            BuiltinFunction::Gaussian => "exp(-x^2)",
            BuiltinFunction::Abs => "|x|",
            BuiltinFunction::Reciprocal => "1 / x",
            BuiltinFunction::Sinc => "sin(x) / x",
        }
    }

    /// Display-name lookup, exact match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            BuiltinFunction::Sin => x.sin(),
            BuiltinFunction::Cubic => 0.2 * x * x * x,
            BuiltinFunction::Gaussian => 3.0 * (-x * x).exp(),
            BuiltinFunction::Abs => x.abs(),
            BuiltinFunction::Reciprocal => {
                if x == 0.0 {
                    RECIPROCAL_AT_ZERO
                } else {
                    1.0 / x
                }
            }
            BuiltinFunction::Sinc => {
                if x == 0.0 {
                    1.0
                } else {
                    10.0 * x.sin() / x
                }
            }
        }
    }

    /// Next entry in display order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinFunction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| InputError::UnknownFunction(s.to_string()))
    }
}

type Evaluator = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A function bound to a domain, with its curve pre-sampled at a fixed step.
#[derive(Clone)]
pub struct PlotFunction {
    name: String,
    eval: Evaluator,
    domain: Interval,
    delta: f64,
    points: Vec<(f64, f64)>,
}

impl PlotFunction {
    pub fn new(
        name: impl Into<String>,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
        domain: Interval,
        delta: f64,
    ) -> Self {
        let eval: Evaluator = Arc::new(f);
        let points = sample(eval.as_ref(), domain, delta).collect();
        Self { name: name.into(), eval, domain, delta, points }
    }

    pub fn builtin(f: BuiltinFunction, domain: Interval, delta: f64) -> Self {
        Self::new(f.name(), move |x| f.eval(x), domain, delta)
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.eval)(x)
    }

    /// Borrow the evaluator for the sampler.
    pub fn evaluator(&self) -> &(dyn Fn(f64) -> f64 + Send + Sync) {
        self.eval.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> Interval {
        self.domain
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Cached `(x, f(x))` pairs over the domain.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl fmt::Debug for PlotFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotFunction")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("delta", &self.delta)
            .field("points", &self.points.len())
            .finish()
    }
}
