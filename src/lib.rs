mod controllers;
mod core;
mod input;
mod presenters;

pub use self::core::actions::compute_escape_grid::compute_escape_grid;
pub use self::core::actions::render_frame::{render_frame, render_snapshot};
pub use self::core::colour_map::hue_ramp::{HueRampColourMap, HueRampError};
pub use self::core::data::colour::Colour;
pub use self::core::data::hsl::Hsl;
pub use self::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use self::core::data::plane_point::PlanePoint;
pub use self::core::data::point::Point;
pub use self::core::data::touch_point::TouchPoint;
pub use self::core::data::view_state::{MIN_ZOOM_LEVEL, ViewState, ViewStateError};
pub use self::core::fractals::escape_engine::{DEFAULT_MAX_ITERATIONS, EscapeEngine};
pub use self::core::fractals::fractal_kinds::FractalKind;
pub use self::core::ports::colour_map::ColourMap;
pub use self::core::ports::pixel_sink::PixelSink;
pub use self::core::view::snapshot::ViewSnapshot;
pub use self::core::view::transform::ViewTransform;

pub use controllers::data::frame_data::FrameData;
pub use controllers::data::render_request::RenderRequest;
pub use controllers::events::frame_event::{FrameEvent, RenderError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::ports::frame_presenter::FramePresenterPort;
pub use controllers::scheduler::RenderScheduler;
pub use controllers::snapshot::SnapshotController;

pub use input::gestures::controller::{GestureController, GestureOutcome, MIN_PINCH_START_DISTANCE};
pub use input::gestures::events::{TouchEvent, TouchPhase};
pub use input::gestures::geometry::{ScreenPoint, pinch_distance, pinch_midpoint};

pub use presenters::file::ppm::PpmFilePresenter;
