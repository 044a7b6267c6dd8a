//! JSON configuration loading.
//!
//! Parses a stored layout configuration (camelCase property surface, string
//! animation-type tags) into the crate's canonical `LayoutConfig` (config.rs).
//!
//! Notes:
//! - Times are provided in milliseconds in the JSON and kept as milliseconds.
//! - Angles are radians.
//! - Unknown animation-type tags fail with `UnrecognizedAnimationType`; the
//!   parsed config is validated before it is returned.

use serde::Deserialize;

use crate::config::{
    default_duration_ms, AnimationKind, AnimationProps, CombinationMode, LayoutConfig,
    PropertyAnimation,
};
use crate::error::LayoutError;
use crate::interp::functions::Easing;

/// Public API: parse a stored layout configuration JSON document.
pub fn parse_layout_config_json(s: &str) -> Result<LayoutConfig, LayoutError> {
    let raw: RawLayout = serde_json::from_str(s)?;

    let animation = match raw.animation_configs {
        None => None,
        Some(raw_configs) => {
            let mut configs = Vec::with_capacity(raw_configs.len());
            for rc in raw_configs {
                configs.push(PropertyAnimation {
                    kind: to_kind(&rc.animation_type)?,
                    gap_ms: rc.animation_gap,
                    delay_ms: rc.animation_delay,
                    duration_ms: rc.animation_duration.unwrap_or_else(default_duration_ms),
                    easing: match rc.easing {
                        Some(tag) => to_easing(&tag)?,
                        None => Easing::default(),
                    },
                });
            }
            Some(AnimationProps {
                configs,
                combination: match raw.animation_combination_type {
                    Some(tag) => to_combination(&tag)?,
                    None => CombinationMode::default(),
                },
                element_gap_ms: raw.animation_gap,
            })
        }
    };

    let config = LayoutConfig {
        radius: raw.radius,
        start_angle: raw.start_from_angle,
        sweep_angle: raw.sweep_angle.unwrap_or(std::f32::consts::TAU),
        animation,
    };
    config.validate()?;
    Ok(config)
}

fn to_kind(tag: &str) -> Result<AnimationKind, LayoutError> {
    match tag {
        "opacity" => Ok(AnimationKind::Opacity),
        "linear" => Ok(AnimationKind::Linear),
        "circular" => Ok(AnimationKind::Circular),
        other => Err(LayoutError::UnrecognizedAnimationType {
            kind: other.to_string(),
        }),
    }
}

fn to_easing(tag: &str) -> Result<Easing, LayoutError> {
    match tag {
        "linear" => Ok(Easing::Linear),
        "ease" => Ok(Easing::Ease),
        "ease-in" => Ok(Easing::EaseIn),
        "ease-out" => Ok(Easing::EaseOut),
        "ease-in-out" => Ok(Easing::EaseInOut),
        other => Err(LayoutError::InvalidArgument {
            reason: format!("unknown easing: {other}"),
        }),
    }
}

fn to_combination(tag: &str) -> Result<CombinationMode, LayoutError> {
    match tag {
        "parallel" => Ok(CombinationMode::Parallel),
        "sequence" => Ok(CombinationMode::Sequence),
        other => Err(LayoutError::InvalidArgument {
            reason: format!("unknown combination type: {other}"),
        }),
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayout {
    pub radius: f32,
    #[serde(default)]
    pub start_from_angle: f32,
    pub sweep_angle: Option<f32>,
    #[serde(default)]
    pub animation_configs: Option<Vec<RawAnimationConfig>>,
    pub animation_combination_type: Option<String>,
    /// Per-element lead delay for sequence composition, milliseconds.
    #[serde(default)]
    pub animation_gap: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnimationConfig {
    pub animation_type: String,
    /// Stagger interval between consecutive elements, milliseconds.
    #[serde(default)]
    pub animation_gap: f32,
    pub animation_delay: Option<f32>,
    pub animation_duration: Option<f32>,
    pub easing: Option<String>,
}
