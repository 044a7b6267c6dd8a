//! Sampling-based interpolation: approximate an arbitrary scalar function
//! with a piecewise-linear lookup table over a configurable domain.
//!
//! Model:
//! - `build_table` samples `callback` at `total_iterations + 1` evenly spaced
//!   inputs across [start_value, end_value], inclusive of both ends.
//! - `InterpTable::interpolate(x)` linearly interpolates between the two
//!   bracketing samples; inputs outside the domain clamp to the boundary
//!   output.
//! - `sample` ties a table to a live `AnimatedValue`, yielding a derived
//!   read-only `Signal` that follows the source.

pub mod functions;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::value::{AnimatedValue, Signal};

/// Sampling domain for `build_table`. Defaults to [0, 1] in 50 steps; widen
/// it whenever the sampled input can leave the unit interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    pub start_value: f32,
    pub end_value: f32,
    pub total_iterations: i32,
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            start_value: 0.0,
            end_value: 1.0,
            total_iterations: 50,
        }
    }
}

impl SampleDomain {
    /// Domain [0, end_value] with the default step count.
    pub fn up_to(end_value: f32) -> Self {
        Self {
            end_value,
            ..Self::default()
        }
    }

    pub fn span(start_value: f32, end_value: f32) -> Self {
        Self {
            start_value,
            end_value,
            ..Self::default()
        }
    }
}

/// Ordered sample pairs: `output_range[i] = callback(input_range[i])`.
/// Inputs are monotonic, ascending when the domain ascends and descending
/// otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpTable {
    pub input_range: Vec<f32>,
    pub output_range: Vec<f32>,
}

/// Build the lookup table for `callback` over `domain`.
///
/// `total_iterations == 0` yields a degenerate empty table without dividing;
/// a negative count fails with `InvalidArgument` and no partial table.
pub fn build_table(
    callback: impl Fn(f32) -> f32,
    domain: &SampleDomain,
) -> Result<InterpTable, LayoutError> {
    if domain.total_iterations < 0 {
        return Err(LayoutError::InvalidArgument {
            reason: format!(
                "total_iterations must be >= 0, got {}",
                domain.total_iterations
            ),
        });
    }
    if domain.total_iterations == 0 {
        return Ok(InterpTable::default());
    }

    let steps = domain.total_iterations as usize;
    let step = (domain.end_value - domain.start_value) / domain.total_iterations as f32;
    let mut input_range = Vec::with_capacity(steps + 1);
    let mut output_range = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let input = domain.start_value + step * i as f32;
        input_range.push(input);
        output_range.push(callback(input));
    }
    Ok(InterpTable {
        input_range,
        output_range,
    })
}

impl InterpTable {
    pub fn len(&self) -> usize {
        self.input_range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_range.is_empty()
    }

    /// Piecewise-linear lookup with clamped edges. An empty table samples to
    /// a neutral 0.0 (fail-soft).
    pub fn interpolate(&self, x: f32) -> f32 {
        let n = self.input_range.len();
        match n {
            0 => 0.0,
            1 => self.output_range[0],
            _ => {
                let first = self.input_range[0];
                let last = self.input_range[n - 1];
                let ascending = first <= last;
                if (ascending && x <= first) || (!ascending && x >= first) {
                    return self.output_range[0];
                }
                if (ascending && x >= last) || (!ascending && x <= last) {
                    return self.output_range[n - 1];
                }
                for i in 0..(n - 1) {
                    let x0 = self.input_range[i];
                    let x1 = self.input_range[i + 1];
                    let inside = if ascending {
                        x >= x0 && x <= x1
                    } else {
                        x <= x0 && x >= x1
                    };
                    if inside {
                        let denom = x1 - x0;
                        if denom.abs() <= f32::EPSILON {
                            return self.output_range[i];
                        }
                        let t = (x - x0) / denom;
                        return functions::lerp_f32(
                            self.output_range[i],
                            self.output_range[i + 1],
                            t,
                        );
                    }
                }
                self.output_range[n - 1]
            }
        }
    }
}

/// Derive a read-only signal by sampling `callback` over `source`'s live
/// value. The table is built once up front; reads are lookups only.
pub fn sample(
    source: &AnimatedValue,
    callback: impl Fn(f32) -> f32,
    domain: &SampleDomain,
) -> Result<Signal, LayoutError> {
    let table = build_table(callback, domain)?;
    Ok(Signal::Mapped {
        source: source.clone(),
        table,
    })
}
