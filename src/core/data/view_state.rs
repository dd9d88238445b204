use crate::core::data::plane_point::PlanePoint;
use std::error::Error;
use std::fmt;

/// Startup zoom: 200 screen pixels per plane unit.
pub const DEFAULT_ZOOM_LEVEL: f64 = 200.0;

/// Startup view center in the fractal plane.
pub const DEFAULT_PLANE_CENTER: PlanePoint = PlanePoint { a: -0.7, b: 0.0 };

/// Floor for the zoom level. Repeated inverse pinches multiply the zoom
/// by factors below 1 and could drive it to zero; the fold clamps here
/// instead.
pub const MIN_ZOOM_LEVEL: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    NonPositiveZoom { zoom_level: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom { zoom_level } => {
                write!(f, "zoom level must be positive: {}", zoom_level)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Mutable view parameters shared by the gesture controller (offsets and
/// pending scale) and the frame renderer (zoom fold).
///
/// Invariants: `pending_scale` is folded into `zoom_level` exactly once
/// per frame and reset to 1; `zoom_level` stays positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub zoom_level: f64,
    pub pending_scale: f64,
    pub pixel_offset_x: f64,
    pub pixel_offset_y: f64,
    pub plane_center: PlanePoint,
}

impl ViewState {
    pub fn new(
        zoom_level: f64,
        pixel_offset_x: f64,
        pixel_offset_y: f64,
        plane_center: PlanePoint,
    ) -> Result<Self, ViewStateError> {
        if zoom_level <= 0.0 {
            return Err(ViewStateError::NonPositiveZoom { zoom_level });
        }

        Ok(Self {
            zoom_level,
            pending_scale: 1.0,
            pixel_offset_x,
            pixel_offset_y,
            plane_center,
        })
    }

    /// The startup state for a raster of the given size: default zoom and
    /// center, offsets placing the center in the middle of the surface.
    #[must_use]
    pub fn centered(width: u32, height: u32) -> Self {
        Self {
            zoom_level: DEFAULT_ZOOM_LEVEL,
            pending_scale: 1.0,
            pixel_offset_x: -f64::from(width) / 2.0,
            pixel_offset_y: -f64::from(height) / 2.0,
            plane_center: DEFAULT_PLANE_CENTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive_zoom() {
        let zero = ViewState::new(0.0, 0.0, 0.0, PlanePoint::default());
        let negative = ViewState::new(-5.0, 0.0, 0.0, PlanePoint::default());

        assert_eq!(zero, Err(ViewStateError::NonPositiveZoom { zoom_level: 0.0 }));
        assert_eq!(
            negative,
            Err(ViewStateError::NonPositiveZoom { zoom_level: -5.0 })
        );
    }

    #[test]
    fn test_new_starts_with_unit_pending_scale() {
        let state = ViewState::new(200.0, -400.0, -300.0, DEFAULT_PLANE_CENTER).unwrap();

        assert_eq!(state.pending_scale, 1.0);
        assert_eq!(state.zoom_level, 200.0);
    }

    #[test]
    fn test_centered_matches_startup_defaults() {
        let state = ViewState::centered(800, 600);

        assert_eq!(state.zoom_level, 200.0);
        assert_eq!(state.pending_scale, 1.0);
        assert_eq!(state.pixel_offset_x, -400.0);
        assert_eq!(state.pixel_offset_y, -300.0);
        assert_eq!(state.plane_center, PlanePoint { a: -0.7, b: 0.0 });
    }
}
