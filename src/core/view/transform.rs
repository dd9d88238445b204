use crate::core::data::plane_point::PlanePoint;
use crate::core::data::view_state::{MIN_ZOOM_LEVEL, ViewState};
use crate::core::view::snapshot::ViewSnapshot;

/// Owns the [`ViewState`] and applies every mutation to it: pans and
/// pending scale from the gesture controller, the zoom fold from the
/// frame renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    state: ViewState,
}

impl ViewTransform {
    #[must_use]
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }

    /// Startup transform for a raster of the given size.
    #[must_use]
    pub fn centered(width: u32, height: u32) -> Self {
        Self::new(ViewState::centered(width, height))
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            zoom_level: self.state.zoom_level,
            pixel_offset_x: self.state.pixel_offset_x,
            pixel_offset_y: self.state.pixel_offset_y,
            plane_center: self.state.plane_center,
        }
    }

    #[must_use]
    pub fn screen_to_plane(&self, pixel_x: f64, pixel_y: f64) -> PlanePoint {
        self.snapshot().screen_to_plane(pixel_x, pixel_y)
    }

    #[must_use]
    pub fn plane_to_screen(&self, point: PlanePoint) -> (f64, f64) {
        self.snapshot().plane_to_screen(point)
    }

    /// Shifts the view by a screen-pixel delta. Called on every
    /// two-finger move.
    pub fn apply_pan(&mut self, dx: f64, dy: f64) {
        self.state.pixel_offset_x += dx;
        self.state.pixel_offset_y += dy;
    }

    /// Replaces the pending scale factor. Only the latest gesture ratio
    /// survives until the next frame folds it.
    pub fn set_pending_scale(&mut self, scale: f64) {
        self.state.pending_scale = scale;
    }

    /// Folds the pending scale into the zoom level and resets it to 1.
    /// The sole commit point for accumulated pinch scale; called exactly
    /// once at the start of each frame render. The zoom level is clamped
    /// to [`MIN_ZOOM_LEVEL`] so inverse pinches cannot collapse it to
    /// zero.
    pub fn apply_pending_zoom(&mut self) {
        self.state.zoom_level *= self.state.pending_scale;
        self.state.pending_scale = 1.0;

        if self.state.zoom_level < MIN_ZOOM_LEVEL {
            self.state.zoom_level = MIN_ZOOM_LEVEL;
        }
    }
}
