//! Input adapters: translate host input events into view mutations.

pub mod gestures;
