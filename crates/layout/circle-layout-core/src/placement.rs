//! Polar-to-Cartesian placement of an element on the circle, transparently
//! supporting static numbers and live animated inputs per operand.

use std::f32::consts::TAU;

use crate::error::LayoutError;
use crate::interp::{sample, SampleDomain};
use crate::value::{AnimatedValue, Signal};

/// One polar operand: a plain number or a live animated scalar.
#[derive(Clone, Debug)]
pub enum PolarInput {
    Static(f32),
    Animated(AnimatedValue),
}

/// Input to `point_on_circle`.
#[derive(Clone, Debug)]
pub struct PlacementSpec {
    pub radius: PolarInput,
    pub radians: PolarInput,
    /// Sampling domain for an animated radius. Defaults to [0, 1]; pass
    /// [0, radius] whenever the radius can exceed 1, otherwise larger values
    /// clamp to the table's edge output.
    pub radius_domain: Option<SampleDomain>,
}

/// Cartesian position signals for one element.
#[derive(Clone, Debug)]
pub struct PlacedPoint {
    pub x: Signal,
    pub y: Signal,
}

/// Converts the polar coordinates of a point on the circle to Cartesian
/// coordinate signals. The result is live when either operand is animated;
/// with both operands animated the position is a reactive product of the
/// radius and the angle lookup.
pub fn point_on_circle(spec: &PlacementSpec) -> Result<PlacedPoint, LayoutError> {
    match (&spec.radius, &spec.radians) {
        (PolarInput::Static(radius), PolarInput::Static(radians)) => Ok(PlacedPoint {
            x: Signal::Constant(radians.cos() * radius),
            y: Signal::Constant(radians.sin() * radius),
        }),
        (PolarInput::Animated(radius), PolarInput::Static(radians)) => {
            let domain = spec.radius_domain.unwrap_or_default();
            let cos_a = radians.cos();
            let sin_a = radians.sin();
            Ok(PlacedPoint {
                x: sample(radius, |r| cos_a * r, &domain)?,
                y: sample(radius, |r| sin_a * r, &domain)?,
            })
        }
        (PolarInput::Static(radius), PolarInput::Animated(radians)) => {
            let domain = SampleDomain::up_to(TAU);
            let r = *radius;
            Ok(PlacedPoint {
                x: sample(radians, |a| a.cos() * r, &domain)?,
                y: sample(radians, |a| a.sin() * r, &domain)?,
            })
        }
        (PolarInput::Animated(radius), PolarInput::Animated(radians)) => {
            let domain = SampleDomain::up_to(TAU);
            let x = Signal::product(
                Signal::Animated(radius.clone()),
                sample(radians, |a| a.cos(), &domain)?,
            );
            let y = Signal::product(
                Signal::Animated(radius.clone()),
                sample(radians, |a| a.sin(), &domain)?,
            );
            Ok(PlacedPoint { x, y })
        }
    }
}
