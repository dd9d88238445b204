use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::ports::pixel_sink::PixelSink;
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.data())?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_written_file_has_ppm_header_and_payload() {
        let mut buffer = PixelBuffer::new(2, 2).unwrap();
        buffer.set_pixel(Point { x: 0, y: 0 }, Colour { r: 255, g: 0, b: 0 });

        let path = std::env::temp_dir().join("fractal_viewer_ppm_test.ppm");
        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&written[..header.len()], header);
        assert_eq!(written.len(), header.len() + 12); // 2 * 2 * 3 payload bytes
        assert_eq!(&written[header.len()..header.len() + 3], &[255, 0, 0]);
    }
}
