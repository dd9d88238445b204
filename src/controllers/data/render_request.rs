use crate::core::fractals::escape_engine::EscapeEngine;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::view::snapshot::ViewSnapshot;
use crate::core::view::transform::ViewTransform;

/// Everything the render worker needs for one frame, captured on the
/// caller's thread. Taking the snapshot folds the pending zoom, so the
/// fold still happens exactly once per requested frame and the worker
/// never touches live view state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub view: ViewSnapshot,
    pub engine: EscapeEngine,
    pub kind: FractalKind,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
}

impl RenderRequest {
    #[must_use]
    pub fn capture(
        view: &mut ViewTransform,
        engine: EscapeEngine,
        kind: FractalKind,
        max_iterations: u32,
        width: u32,
        height: u32,
    ) -> Self {
        view.apply_pending_zoom();

        Self {
            view: view.snapshot(),
            engine,
            kind,
            max_iterations,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_folds_the_pending_zoom() {
        let mut view = ViewTransform::centered(800, 600);
        view.set_pending_scale(2.0);

        let request = RenderRequest::capture(
            &mut view,
            EscapeEngine::default(),
            FractalKind::Mandelbrot,
            150,
            800,
            600,
        );

        assert_eq!(request.view.zoom_level, 400.0);
        assert_eq!(view.state().pending_scale, 1.0);
    }
}
