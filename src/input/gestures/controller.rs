use crate::core::view::transform::ViewTransform;
use crate::input::gestures::events::{TouchEvent, TouchPhase};
use crate::input::gestures::geometry::{ScreenPoint, pinch_distance, pinch_midpoint};
use log::debug;

/// Two-finger starts closer than this are rejected: the distance is the
/// denominator of every later scale ratio.
pub const MIN_PINCH_START_DISTANCE: f64 = 1e-6;

/// What the host should do after feeding an event through the
/// controller. `RedrawNeeded` is the only outcome that requires action:
/// a full-frame render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    PinchStarted,
    RedrawNeeded,
    PinchEnded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSession {
    initial_distance: f64,
    last_midpoint: ScreenPoint,
}

/// Pinch/pan state machine. Idle until a two-finger touch starts; while
/// a session is active, every two-finger move replaces the pending scale
/// with the current-to-initial distance ratio and pans by the midpoint
/// delta. Single-touch and non-touch gestures are out of scope and fall
/// through as `Ignored`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureController {
    session: Option<GestureSession>,
}

impl GestureController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pinch_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn handle_event(&mut self, event: &TouchEvent, view: &mut ViewTransform) -> GestureOutcome {
        match event.phase {
            TouchPhase::Start => self.on_start(event),
            TouchPhase::Move => self.on_move(event, view),
            TouchPhase::End => self.on_end(event),
        }
    }

    fn on_start(&mut self, event: &TouchEvent) -> GestureOutcome {
        if event.touches.len() != 2 {
            return GestureOutcome::Ignored;
        }

        let initial_distance = pinch_distance(event.touches[0], event.touches[1]);

        if initial_distance < MIN_PINCH_START_DISTANCE {
            debug!("rejecting pinch start: touch points coincide");
            return GestureOutcome::Ignored;
        }

        self.session = Some(GestureSession {
            initial_distance,
            last_midpoint: pinch_midpoint(event.touches[0], event.touches[1]),
        });

        GestureOutcome::PinchStarted
    }

    fn on_move(&mut self, event: &TouchEvent, view: &mut ViewTransform) -> GestureOutcome {
        if event.touches.len() < 2 {
            return self.deactivate();
        }

        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };

        if event.touches.len() > 2 {
            return GestureOutcome::Ignored;
        }

        let new_distance = pinch_distance(event.touches[0], event.touches[1]);
        let new_midpoint = pinch_midpoint(event.touches[0], event.touches[1]);

        view.set_pending_scale(new_distance / session.initial_distance);
        view.apply_pan(
            session.last_midpoint.x - new_midpoint.x,
            session.last_midpoint.y - new_midpoint.y,
        );
        session.last_midpoint = new_midpoint;

        GestureOutcome::RedrawNeeded
    }

    fn on_end(&mut self, event: &TouchEvent) -> GestureOutcome {
        if event.touches.len() < 2 {
            return self.deactivate();
        }

        GestureOutcome::Ignored
    }

    fn deactivate(&mut self) -> GestureOutcome {
        if self.session.take().is_some() {
            debug!("pinch session ended");
            GestureOutcome::PinchEnded
        } else {
            GestureOutcome::Ignored
        }
    }
}
