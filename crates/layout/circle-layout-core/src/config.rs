//! Construction-time configuration for the circle layout.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::interp::functions::Easing;

/// Which per-element property a config animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Fade-in entry and fade-out exit.
    Opacity,
    /// Radius 0 -> target: the element travels from the center outward.
    Linear,
    /// Angle start -> target: the element travels along the circumference
    /// from the first element's position.
    Circular,
}

/// Whether an element's property transitions run concurrently or strictly
/// one after another, in config array order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinationMode {
    #[default]
    Parallel,
    Sequence,
}

/// Timing for one animated property. All times are milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyAnimation {
    pub kind: AnimationKind,
    /// Stagger interval between the start of two consecutive elements.
    #[serde(default)]
    pub gap_ms: f32,
    /// Explicit delay override; when set it replaces the gap stagger.
    #[serde(default)]
    pub delay_ms: Option<f32>,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f32,
    #[serde(default)]
    pub easing: Easing,
}

pub(crate) fn default_duration_ms() -> f32 {
    500.0
}

impl PropertyAnimation {
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            gap_ms: 0.0,
            delay_ms: None,
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
        }
    }
}

/// The full animation surface for a layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationProps {
    pub configs: Vec<PropertyAnimation>,
    #[serde(default)]
    pub combination: CombinationMode,
    /// Per-element lead delay used by sequence composition, in milliseconds.
    #[serde(default)]
    pub element_gap_ms: f32,
}

/// Construction input for `CircleLayout`. Angles are radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub radius: f32,
    #[serde(default)]
    pub start_angle: f32,
    #[serde(default = "default_sweep_angle")]
    pub sweep_angle: f32,
    #[serde(default)]
    pub animation: Option<AnimationProps>,
}

fn default_sweep_angle() -> f32 {
    TAU
}

impl LayoutConfig {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            start_angle: 0.0,
            sweep_angle: TAU,
            animation: None,
        }
    }

    /// Fails when mutually exclusive movement animations are both requested.
    /// Linear (radius) and circular (angle) movement cannot be combined.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if let Some(props) = &self.animation {
            let linear = props
                .configs
                .iter()
                .any(|c| c.kind == AnimationKind::Linear);
            let circular = props
                .configs
                .iter()
                .any(|c| c.kind == AnimationKind::Circular);
            if linear && circular {
                return Err(LayoutError::Configuration {
                    reason: "linear and circular animations are mutually exclusive".into(),
                });
            }
        }
        Ok(())
    }
}
