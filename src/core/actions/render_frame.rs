use crate::core::actions::compute_escape_grid::compute_escape_grid;
use crate::core::data::point::Point;
use crate::core::fractals::escape_engine::EscapeEngine;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::ports::colour_map::ColourMap;
use crate::core::ports::pixel_sink::PixelSink;
use crate::core::view::snapshot::ViewSnapshot;
use crate::core::view::transform::ViewTransform;

/// One full-frame redraw: clear the sink, fold the pending pinch scale
/// into the zoom level, then map / iterate / colour every pixel.
///
/// The fold is the only place gesture scale is committed, and it happens
/// before any pixel is mapped. Colour failures (an iteration count above
/// the map's bound, i.e. mismatched `max_iterations` between engine and
/// map) abort the frame.
pub fn render_frame<CMap, Sink>(
    view: &mut ViewTransform,
    engine: &EscapeEngine,
    kind: FractalKind,
    max_iterations: u32,
    colour_map: &CMap,
    sink: &mut Sink,
) -> Result<(), CMap::Failure>
where
    CMap: ColourMap<T = u32>,
    Sink: PixelSink,
{
    sink.clear();
    view.apply_pending_zoom();

    render_snapshot(view.snapshot(), engine, kind, max_iterations, colour_map, sink)
}

/// The pixel loop of [`render_frame`], starting from an already-folded
/// snapshot. The render scheduler calls this directly because its
/// requests capture the snapshot on the caller's thread.
pub fn render_snapshot<CMap, Sink>(
    view: ViewSnapshot,
    engine: &EscapeEngine,
    kind: FractalKind,
    max_iterations: u32,
    colour_map: &CMap,
    sink: &mut Sink,
) -> Result<(), CMap::Failure>
where
    CMap: ColourMap<T = u32>,
    Sink: PixelSink,
{
    let width = sink.width();
    let height = sink.height();
    let grid = compute_escape_grid(view, engine, kind, max_iterations, width, height);

    for (index, &iterations) in grid.iter().enumerate() {
        let colour = colour_map.map(iterations)?;
        let x = (index % width as usize) as i32;
        let y = (index / width as usize) as i32;

        sink.set_pixel(Point { x, y }, colour);
    }

    Ok(())
}
