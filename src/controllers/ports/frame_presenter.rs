use crate::controllers::events::frame_event::FrameEvent;

/// Receives completed frames (or render failures) from the scheduler's
/// worker thread.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, event: FrameEvent);
}
