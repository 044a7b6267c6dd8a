//! Layout orchestrator: places N opaque items on the circle and drives one
//! animator per item from a single `update(dt_ms)` call.

use std::f32::consts::TAU;

use crate::animator::{ElementAnimator, ElementParams};
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::outputs::ElementFrame;

const FULL_SWEEP_EPS: f32 = 1e-5;

/// Number of circle divisions for `count` elements.
///
/// A full sweep divides the circle into `count` arcs; a partial sweep places
/// the first and last element on the sweep boundaries, so it has `count - 1`
/// divisions. A zero sweep collapses every angle onto the start angle and
/// divides like a full sweep. The result is clamped to 1 so degenerate
/// geometry (a single element on a partial sweep) yields a finite angle step
/// instead of a division by zero.
pub fn total_parts(count: usize, sweep_angle: f32) -> usize {
    let full_sweep =
        sweep_angle == 0.0 || (sweep_angle.abs() - TAU).abs() <= FULL_SWEEP_EPS;
    let parts = if full_sweep {
        count
    } else {
        count.saturating_sub(1)
    };
    if parts == 0 {
        log::warn!(
            "degenerate circle geometry (count {count}, sweep {sweep_angle}); clamping divisions to 1"
        );
        1
    } else {
        parts
    }
}

/// Resting angle of every element, in radians.
pub fn compute_angles(count: usize, start_angle: f32, sweep_angle: f32) -> Vec<f32> {
    let parts = total_parts(count, sweep_angle) as f32;
    (0..count)
        .map(|i| start_angle + sweep_angle * i as f32 / parts)
        .collect()
}

/// Owns the items of a circle layout together with their animators. `T` is
/// opaque to the layout; rendering adapters pair `items()` with the frames
/// returned by `update`.
#[derive(Debug)]
pub struct CircleLayout<T> {
    items: Vec<T>,
    animators: Vec<ElementAnimator>,
    frames: Vec<ElementFrame>,
    config: LayoutConfig,
}

impl<T> CircleLayout<T> {
    pub fn new(items: Vec<T>, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let parts = total_parts(items.len(), config.sweep_angle);
        let angles = compute_angles(items.len(), config.start_angle, config.sweep_angle);
        let mut animators = Vec::with_capacity(items.len());
        for (index, radians) in angles.into_iter().enumerate() {
            let params = ElementParams {
                index,
                total_parts: parts,
                radius: config.radius,
                start_angle: config.start_angle,
                radians,
            };
            animators.push(ElementAnimator::new(params, config.animation.as_ref())?);
        }
        let frames = animators.iter().map(ElementAnimator::frame).collect();
        Ok(Self {
            items,
            animators,
            frames,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Start every element's entry animations. Fire and forget: completion is
    /// observed through `all_visible` after subsequent `update` calls.
    pub fn show_all(&mut self) {
        for animator in &mut self.animators {
            animator.show();
        }
    }

    /// Start every element's exit animations.
    pub fn hide_all(&mut self) {
        for animator in &mut self.animators {
            animator.hide();
        }
    }

    /// Point-in-time visibility join across all elements.
    pub fn all_visible(&self) -> bool {
        self.animators.iter().all(ElementAnimator::is_visible)
    }

    /// True while any element still has an in-flight playback.
    pub fn is_animating(&self) -> bool {
        self.animators.iter().any(ElementAnimator::is_animating)
    }

    /// Advance every animator by `dt_ms` and refresh the render frames. The
    /// returned slice is indexed like `items()`.
    pub fn update(&mut self, dt_ms: f32) -> &[ElementFrame] {
        for (animator, frame) in self.animators.iter_mut().zip(self.frames.iter_mut()) {
            animator.tick(dt_ms);
            *frame = animator.frame();
        }
        &self.frames
    }

    /// The frames produced by the most recent `update` (or the initial rest
    /// state before the first one).
    pub fn frames(&self) -> &[ElementFrame] {
        &self.frames
    }

    pub fn element(&self, index: usize) -> Option<&ElementAnimator> {
        self.animators.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut ElementAnimator> {
        self.animators.get_mut(index)
    }
}
