use fractal_viewer::{
    FractalKind, GestureController, GestureOutcome, PpmFilePresenter, SnapshotController,
    TouchEvent, TouchPhase, TouchPoint,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("output")?;

    for &kind in FractalKind::ALL {
        let mut controller = SnapshotController::new(PpmFilePresenter::new(), WIDTH, HEIGHT);
        controller.render(kind)?;
        controller.write(format!(
            "output/{}.ppm",
            kind.display_name().to_lowercase()
        ))?;
    }

    // Replay a pinch that doubles the finger distance about the canvas
    // center, then render the resulting view.
    let mut controller = SnapshotController::new(PpmFilePresenter::new(), WIDTH, HEIGHT);
    let mut gestures = GestureController::new();

    let spread = |offset: f64| {
        vec![
            TouchPoint {
                id: 0,
                client_x: 400.0 - offset,
                client_y: 300.0,
            },
            TouchPoint {
                id: 1,
                client_x: 400.0 + offset,
                client_y: 300.0,
            },
        ]
    };

    let events = [
        TouchEvent::new(TouchPhase::Start, spread(50.0)),
        TouchEvent::new(TouchPhase::Move, spread(100.0)),
        TouchEvent::new(TouchPhase::End, vec![]),
    ];

    for event in &events {
        let outcome = gestures.handle_event(event, controller.view_mut());

        if outcome == GestureOutcome::RedrawNeeded {
            controller.render(FractalKind::Mandelbrot)?;
        }
    }

    controller.write("output/mandelbrot_zoomed.ppm")?;

    Ok(())
}
