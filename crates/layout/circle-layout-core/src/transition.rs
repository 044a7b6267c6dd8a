//! Timed moves of a single scalar and composition of several moves.
//!
//! A `Transition` drives one `AnimatedValue` from its current value toward a
//! target over a delay + duration window, applying an easing curve to the
//! normalized time. Nothing advances on its own: the owner calls
//! `advance(dt_ms)` every tick, so stepping is deterministic for a given
//! sequence of deltas.
//!
//! `Playback` composes the transitions of one element, either all at once or
//! strictly one after another, and reports the join (all complete).

use serde::{Deserialize, Serialize};

use crate::config::default_duration_ms;
use crate::interp::functions::{lerp_f32, Easing};
use crate::value::AnimatedValue;

/// Timing parameters for one transition. All times are milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    #[serde(default)]
    pub delay_ms: f32,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f32,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Done,
    Stopped,
}

/// One in-flight (or not-yet-started) move of a scalar toward a target.
///
/// The starting point is captured at `start()`, not at construction, so a
/// transition that interrupts another picks up from wherever the value
/// currently is instead of jumping.
#[derive(Clone, Debug)]
pub struct Transition {
    value: AnimatedValue,
    to: f32,
    spec: TransitionSpec,
    from: f32,
    elapsed_ms: f32,
    phase: Phase,
}

impl Transition {
    pub fn new(value: AnimatedValue, to: f32, spec: TransitionSpec) -> Self {
        Self {
            value,
            to,
            spec,
            from: 0.0,
            elapsed_ms: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Arm the transition. Captures the current value as the starting point.
    pub fn start(&mut self) {
        self.from = self.value.get();
        self.elapsed_ms = 0.0;
        self.phase = Phase::Running;
    }

    /// Advance by `dt_ms`. Returns true once the transition has completed.
    /// Completion snaps the value exactly onto the target. A transition that
    /// was never started, or was stopped, does not move the value.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        match self.phase {
            Phase::Idle | Phase::Stopped => false,
            Phase::Done => true,
            Phase::Running => {
                self.elapsed_ms += dt_ms;
                let active_ms = self.elapsed_ms - self.spec.delay_ms;
                if active_ms < 0.0 {
                    return false;
                }
                if self.spec.duration_ms <= 0.0 || active_ms >= self.spec.duration_ms {
                    self.value.set(self.to);
                    self.phase = Phase::Done;
                    return true;
                }
                let t = self.spec.easing.apply(active_ms / self.spec.duration_ms);
                self.value.set(lerp_f32(self.from, self.to, t));
                false
            }
        }
    }

    /// Halt without snapping: the value keeps whatever it last held.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Stopped;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Tick time left over past the completion point, for handing to a
    /// successor in a sequence. Zero while not yet done.
    fn overshoot_ms(&self) -> f32 {
        match self.phase {
            Phase::Done => (self.elapsed_ms - self.spec.delay_ms - self.spec.duration_ms).max(0.0),
            _ => 0.0,
        }
    }
}

/// An animated scalar paired with the timing of its entry and exit moves.
///
/// Entry drives the value from its initial to its final value; exit drives it
/// back. Both run on the same underlying cell, so an exit interrupting an
/// entry departs from the interrupted position.
#[derive(Clone, Debug)]
pub struct TimedValue {
    value: AnimatedValue,
    initial: f32,
    target: f32,
    entry: TransitionSpec,
    exit: Option<TransitionSpec>,
}

impl TimedValue {
    pub fn new(initial: f32, target: f32, entry: TransitionSpec, exit: Option<TransitionSpec>) -> Self {
        Self {
            value: AnimatedValue::new(initial),
            initial,
            target,
            entry,
            exit,
        }
    }

    pub fn value(&self) -> &AnimatedValue {
        &self.value
    }

    /// A fresh (not yet started) move toward the final value.
    pub fn entry_animation(&self) -> Transition {
        Transition::new(self.value.clone(), self.target, self.entry)
    }

    /// A fresh move back to the initial value. Falls back to the entry
    /// timing when no dedicated exit timing was configured.
    pub fn exit_animation(&self) -> Transition {
        Transition::new(self.value.clone(), self.initial, self.exit.unwrap_or(self.entry))
    }

}

/// Composition of one element's transitions for a single show or hide.
///
/// `Parallel` starts every transition together; `Sequence` runs them in
/// order, each starting only when its predecessor completes, after an
/// optional per-element lead delay. Either way `advance` reports the join:
/// true only once every member has completed.
#[derive(Clone, Debug)]
pub enum Playback {
    Parallel {
        items: Vec<Transition>,
        started: bool,
    },
    Sequence {
        items: Vec<Transition>,
        lead_delay_ms: f32,
        current: usize,
        started: bool,
    },
}

impl Playback {
    pub fn parallel(items: Vec<Transition>) -> Self {
        Playback::Parallel {
            items,
            started: false,
        }
    }

    pub fn sequence(items: Vec<Transition>, lead_delay_ms: f32) -> Self {
        Playback::Sequence {
            items,
            lead_delay_ms: lead_delay_ms.max(0.0),
            current: 0,
            started: false,
        }
    }

    /// Arm the composition. Parallel starts every member now; sequence only
    /// marks itself live and starts members lazily as the lead delay and
    /// predecessors finish.
    pub fn begin(&mut self) {
        match self {
            Playback::Parallel { items, started } => {
                for item in items.iter_mut() {
                    item.start();
                }
                *started = true;
            }
            Playback::Sequence { started, .. } => {
                *started = true;
            }
        }
    }

    /// Advance every live member by `dt_ms`. Returns true once all members
    /// have completed (immediately true for an empty composition).
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        match self {
            Playback::Parallel { items, started } => {
                if !*started {
                    return false;
                }
                let mut all_done = true;
                for item in items.iter_mut() {
                    if !item.advance(dt_ms) {
                        all_done = false;
                    }
                }
                all_done
            }
            Playback::Sequence {
                items,
                lead_delay_ms,
                current,
                started,
            } => {
                if !*started {
                    return false;
                }
                let mut budget = dt_ms;
                if *lead_delay_ms > 0.0 {
                    let consumed = budget.min(*lead_delay_ms);
                    *lead_delay_ms -= consumed;
                    budget -= consumed;
                    if *lead_delay_ms > 0.0 {
                        return false;
                    }
                }
                while *current < items.len() {
                    let item = &mut items[*current];
                    if !item.is_running() && !item.is_done() {
                        item.start();
                    }
                    if item.advance(budget) {
                        // Hand the time past the completion point to the
                        // successor, like the lead delay does above.
                        budget = item.overshoot_ms();
                        *current += 1;
                    } else {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// Halt every in-flight member without snapping values.
    pub fn stop(&mut self) {
        match self {
            Playback::Parallel { items, .. } | Playback::Sequence { items, .. } => {
                for item in items.iter_mut() {
                    item.stop();
                }
            }
        }
    }

    pub fn is_started(&self) -> bool {
        match self {
            Playback::Parallel { started, .. } | Playback::Sequence { started, .. } => *started,
        }
    }
}
