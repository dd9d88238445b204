//! Two-finger pinch/pan gesture handling.
//!
//! The controller consumes raw touch events and mutates the view
//! transform; it never renders. The host reacts to
//! [`GestureOutcome::RedrawNeeded`](controller::GestureOutcome) by
//! triggering a full-frame render.

pub mod controller;
pub mod events;
pub mod geometry;

pub use controller::{GestureController, GestureOutcome};
pub use events::{TouchEvent, TouchPhase};
