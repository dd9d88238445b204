use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::colour_map::hue_ramp::HueRampColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_engine::{DEFAULT_MAX_ITERATIONS, EscapeEngine};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::view::transform::ViewTransform;
use std::path::Path;
use std::time::Instant;

/// Headless controller for the demo binary: renders one frame of the
/// current view into an in-memory buffer and hands it to a file
/// presenter. The buffer stands in for the host raster surface.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    view: ViewTransform,
    engine: EscapeEngine,
    width: u32,
    height: u32,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, width: u32, height: u32) -> Self {
        Self {
            presenter,
            view: ViewTransform::centered(width, height),
            engine: EscapeEngine::default(),
            width,
            height,
            buffer: None,
        }
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    pub fn render(&mut self, kind: FractalKind) -> Result<(), Box<dyn std::error::Error>> {
        let colour_map = HueRampColourMap::new(DEFAULT_MAX_ITERATIONS)?;
        let mut buffer = PixelBuffer::new(self.width, self.height)?;

        println!("Rendering {}...", kind.display_name());
        println!("Image size: {}x{}", self.width, self.height);

        let start = Instant::now();
        render_frame(
            &mut self.view,
            &self.engine,
            kind,
            DEFAULT_MAX_ITERATIONS,
            &colour_map,
            &mut buffer,
        )?;
        println!("Duration:   {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }
}
