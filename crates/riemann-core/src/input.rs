// File: crates/riemann-core/src/input.rs
// Summary: Form-field validation producing a well-formed plot request for the core.

use crate::error::InputError;
use crate::function::BuiltinFunction;
use crate::geometry::Interval;

/// Validated user choices: function, domain (end > start) and partition count (>= 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRequest {
    pub function: BuiltinFunction,
    pub domain: Interval,
    pub partitions: usize,
}

impl PlotRequest {
    /// Parse raw text fields as typed into the form.
    pub fn parse(function: &str, start: &str, end: &str, partitions: &str) -> Result<Self, InputError> {
        let function = function.parse::<BuiltinFunction>()?;
        let start = parse_float("domain start", start)?;
        let end = parse_float("domain end", end)?;
        let partitions = parse_partitions(partitions)?;
        Self::new(function, start, end, partitions)
    }

    pub fn new(function: BuiltinFunction, start: f64, end: f64, partitions: usize) -> Result<Self, InputError> {
        if !(end > start) {
            return Err(InputError::EmptyDomain { start, end });
        }
        if partitions == 0 {
            return Err(InputError::InvalidPartition(partitions.to_string()));
        }
        Ok(Self { function, domain: Interval::new(start, end), partitions })
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, InputError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidNumber { field, value: value.to_string() }),
    }
}

fn parse_partitions(value: &str) -> Result<usize, InputError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(InputError::InvalidPartition(value.to_string())),
    }
}
