//! Mutable observable scalars and read-only derived signals.
//!
//! `AnimatedValue` is the single writable cell a transition drives.
//! `Signal` is the read-only view the placement math exposes; it is demand
//! driven, so every `get()` recomputes from the current source value and a
//! frame read always reflects the latest transition write. The model is
//! single-threaded and cooperative: values are shared via `Rc`, never across
//! threads.

use std::cell::Cell;
use std::rc::Rc;

use crate::interp::InterpTable;

/// Shared mutable scalar. Cloning clones the handle, not the storage, so a
/// transition and a signal can observe the same cell.
#[derive(Clone, Debug, Default)]
pub struct AnimatedValue(Rc<Cell<f32>>);

impl AnimatedValue {
    pub fn new(initial: f32) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.0.set(value)
    }
}

/// Read-only scalar view over static or animated inputs.
#[derive(Clone, Debug)]
pub enum Signal {
    Constant(f32),
    Animated(AnimatedValue),
    /// Piecewise-linear lookup of the source value through a sampling table
    /// (the derived-observable case). The table is built once, not per read.
    Mapped {
        source: AnimatedValue,
        table: InterpTable,
    },
    /// Reactive multiply: recomputed whenever either side's value changes.
    Product(Box<Signal>, Box<Signal>),
}

impl Signal {
    pub fn get(&self) -> f32 {
        match self {
            Signal::Constant(v) => *v,
            Signal::Animated(value) => value.get(),
            Signal::Mapped { source, table } => table.interpolate(source.get()),
            Signal::Product(a, b) => a.get() * b.get(),
        }
    }

    pub fn product(a: Signal, b: Signal) -> Signal {
        Signal::Product(Box::new(a), Box::new(b))
    }
}
