//! Circle Layout Core (engine-agnostic)
//!
//! Places a set of opaque elements on the circumference of a circle and
//! animates their appearance, disappearance and movement. The crate owns the
//! interpolation/animation logic only: rendering adapters drive it with
//! `CircleLayout::update(dt_ms)` each tick and paint elements from the
//! returned `ElementFrame` values (x, y, opacity).
//!
//! Building blocks, leaf first:
//! - `value`: mutable observable scalars and read-only derived signals
//! - `interp`: sampling-based piecewise-linear interpolation tables
//! - `placement`: polar-to-Cartesian position signals
//! - `transition`: timed moves of a scalar plus parallel/sequence composition
//! - `animator`: per-element show/hide controller
//! - `layout`: the orchestrator owning one animator per element

pub mod animator;
pub mod config;
pub mod error;
pub mod interp;
pub mod layout;
pub mod outputs;
pub mod placement;
pub mod stored_config;
pub mod transition;
pub mod value;

// Re-exports for consumers (adapters)
pub use animator::{ElementAnimator, ElementParams};
pub use config::{
    AnimationKind, AnimationProps, CombinationMode, LayoutConfig, PropertyAnimation,
};
pub use error::LayoutError;
pub use interp::functions::Easing;
pub use interp::{build_table, sample, InterpTable, SampleDomain};
pub use layout::{compute_angles, total_parts, CircleLayout};
pub use outputs::ElementFrame;
pub use placement::{point_on_circle, PlacedPoint, PlacementSpec, PolarInput};
pub use stored_config::parse_layout_config_json;
pub use transition::{Playback, TimedValue, Transition, TransitionSpec};
pub use value::{AnimatedValue, Signal};
