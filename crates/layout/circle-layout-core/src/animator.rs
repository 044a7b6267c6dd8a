//! Per-element show/hide controller.
//!
//! One `ElementAnimator` owns the animated state of a single element: up to
//! three timed values (opacity, radius, angle), the position signals derived
//! from them, and the visibility flag. `show()` and `hide()` arm a playback;
//! `tick(dt_ms)` advances it and flips the flag once the whole playback has
//! completed. Re-invoking show/hide cancels the in-flight playback first, so
//! the new one departs from the interrupted values.

use crate::config::{AnimationKind, AnimationProps, CombinationMode, PropertyAnimation};
use crate::error::LayoutError;
use crate::interp::SampleDomain;
use crate::outputs::ElementFrame;
use crate::placement::{point_on_circle, PlacedPoint, PlacementSpec, PolarInput};
use crate::transition::{Playback, TimedValue, Transition, TransitionSpec};
use crate::value::AnimatedValue;

/// Static geometry of one element within its layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementParams {
    pub index: usize,
    /// Division count of the layout, already clamped to at least 1.
    pub total_parts: usize,
    pub radius: f32,
    pub start_angle: f32,
    /// Resting angle of this element, in radians.
    pub radians: f32,
}

#[derive(Debug)]
struct ActivePlayback {
    playback: Playback,
    /// Visibility the flag flips to once the playback completes.
    target_visible: bool,
}

#[derive(Debug)]
pub struct ElementAnimator {
    params: ElementParams,
    component_visible: bool,
    opacity: Option<TimedValue>,
    radius: Option<TimedValue>,
    radians: Option<TimedValue>,
    /// Kinds in config array order; sequence composition follows it.
    order: Vec<AnimationKind>,
    combination: CombinationMode,
    element_gap_ms: f32,
    position: PlacedPoint,
    active: Option<ActivePlayback>,
}

impl ElementAnimator {
    pub fn new(
        params: ElementParams,
        animation: Option<&AnimationProps>,
    ) -> Result<Self, LayoutError> {
        let mut opacity = None;
        let mut radius = None;
        let mut radians = None;
        let mut order = Vec::new();
        let mut combination = CombinationMode::default();
        let mut element_gap_ms = 0.0;

        if let Some(props) = animation {
            combination = props.combination;
            element_gap_ms = props.element_gap_ms;
            for config in &props.configs {
                let slot = match config.kind {
                    AnimationKind::Opacity => &mut opacity,
                    AnimationKind::Linear => &mut radius,
                    AnimationKind::Circular => &mut radians,
                };
                // First config per kind wins; duplicates are ignored.
                if slot.is_some() {
                    continue;
                }
                let (entry, exit) = staggered_specs(config, &params);
                *slot = Some(match config.kind {
                    AnimationKind::Opacity => TimedValue::new(0.0, 1.0, entry, Some(exit)),
                    AnimationKind::Linear => {
                        TimedValue::new(0.0, params.radius, entry, Some(exit))
                    }
                    AnimationKind::Circular => {
                        TimedValue::new(params.start_angle, params.radians, entry, Some(exit))
                    }
                });
                order.push(config.kind);
            }
            if radius.is_some() && radians.is_some() {
                return Err(LayoutError::Configuration {
                    reason: "linear and circular animations are mutually exclusive".into(),
                });
            }
        }

        // Animated values construct at their entry origin (opacity 0, radius
        // 0, angle at the first element's position) so the first show plays
        // the full entry wave.
        let position = point_on_circle(&PlacementSpec {
            radius: polar_input(&radius, params.radius),
            radians: polar_input(&radians, params.radians),
            radius_domain: Some(SampleDomain::span(0.0, params.radius)),
        })?;

        Ok(Self {
            params,
            component_visible: true,
            opacity,
            radius,
            radians,
            order,
            combination,
            element_gap_ms,
            position,
            active: None,
        })
    }

    /// Start the entry animations; the visibility flag flips to true once
    /// they all complete. With no animations configured the flip is
    /// immediate.
    pub fn show(&mut self) {
        let items = self.collect(TimedValue::entry_animation);
        self.begin(items, true, self.entry_lead_ms());
    }

    /// Start the exit animations; the visibility flag flips to false once
    /// they all complete.
    pub fn hide(&mut self) {
        let items = self.collect(TimedValue::exit_animation);
        self.begin(items, false, self.exit_lead_ms());
    }

    /// Advance the in-flight playback, if any, and flip visibility on
    /// completion.
    pub fn tick(&mut self, dt_ms: f32) {
        let completed = self
            .active
            .as_mut()
            .and_then(|active| active.playback.advance(dt_ms).then_some(active.target_visible));
        if let Some(visible) = completed {
            self.component_visible = visible;
            self.active = None;
        }
    }

    /// Current render snapshot.
    pub fn frame(&self) -> ElementFrame {
        let opacity = match &self.opacity {
            Some(timed) => timed.value().get(),
            None if self.component_visible => 1.0,
            None => 0.0,
        };
        ElementFrame {
            x: self.position.x.get(),
            y: self.position.y.get(),
            opacity,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.component_visible
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn params(&self) -> &ElementParams {
        &self.params
    }

    /// The animated opacity cell, when an opacity animation is configured.
    pub fn opacity_value(&self) -> Option<&AnimatedValue> {
        self.opacity.as_ref().map(TimedValue::value)
    }

    /// The animated radius cell, when a linear animation is configured.
    pub fn radius_value(&self) -> Option<&AnimatedValue> {
        self.radius.as_ref().map(TimedValue::value)
    }

    /// The animated angle cell, when a circular animation is configured.
    pub fn radians_value(&self) -> Option<&AnimatedValue> {
        self.radians.as_ref().map(TimedValue::value)
    }

    fn collect(&self, build: fn(&TimedValue) -> Transition) -> Vec<Transition> {
        self.order
            .iter()
            .filter_map(|kind| match kind {
                AnimationKind::Opacity => self.opacity.as_ref(),
                AnimationKind::Linear => self.radius.as_ref(),
                AnimationKind::Circular => self.radians.as_ref(),
            })
            .map(build)
            .collect()
    }

    fn begin(&mut self, items: Vec<Transition>, target_visible: bool, lead_ms: f32) {
        if let Some(mut active) = self.active.take() {
            active.playback.stop();
        }
        if items.is_empty() {
            self.component_visible = target_visible;
            return;
        }
        let mut playback = match self.combination {
            CombinationMode::Parallel => Playback::parallel(items),
            CombinationMode::Sequence => Playback::sequence(items, lead_ms),
        };
        playback.begin();
        self.active = Some(ActivePlayback {
            playback,
            target_visible,
        });
    }

    fn entry_lead_ms(&self) -> f32 {
        self.element_gap_ms * self.params.index as f32
    }

    fn exit_lead_ms(&self) -> f32 {
        let trailing =
            (self.params.total_parts as f32 - self.params.index as f32 - 1.0).max(0.0);
        self.element_gap_ms * trailing
    }
}

fn polar_input(timed: &Option<TimedValue>, fallback: f32) -> PolarInput {
    match timed {
        Some(timed) => PolarInput::Animated(timed.value().clone()),
        None => PolarInput::Static(fallback),
    }
}

/// Per-element entry and exit timing for one property config. The stagger
/// wave uses the element's index for entries and its distance from the last
/// element for exits, so hides run back to front. An explicit delay replaces
/// the stagger for both directions.
fn staggered_specs(
    config: &PropertyAnimation,
    params: &ElementParams,
) -> (TransitionSpec, TransitionSpec) {
    let trailing = (params.total_parts as f32 - params.index as f32 - 1.0).max(0.0);
    let entry = TransitionSpec {
        delay_ms: config
            .delay_ms
            .unwrap_or(config.gap_ms * params.index as f32),
        duration_ms: config.duration_ms,
        easing: config.easing,
    };
    let exit = TransitionSpec {
        delay_ms: config.delay_ms.unwrap_or(config.gap_ms * trailing),
        ..entry
    };
    (entry, exit)
}
