//! Interfaces between the controllers and the presentation layer.

pub mod file_presenter;
pub mod frame_presenter;
