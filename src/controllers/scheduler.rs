use crate::controllers::data::frame_data::FrameData;
use crate::controllers::data::render_request::RenderRequest;
use crate::controllers::events::frame_event::{FrameEvent, RenderError};
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_snapshot;
use crate::core::colour_map::hue_ramp::HueRampColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter: Arc<dyn FramePresenterPort>,
}

/// Serializes full-frame renders on one worker thread and coalesces
/// bursts of requests: only the most recent pending request is rendered,
/// older ones are dropped before any work starts on them. A frame that
/// has begun always runs to completion; superseded results are discarded
/// instead of presented.
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(presenter: Arc<dyn FramePresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a frame, replacing any not-yet-started request. Returns
    /// the request's generation number.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();

            if let Some((dropped, _)) = guard.replace((generation, request)) {
                debug!("coalescing render request: dropped generation {}", dropped);
            }
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let start = Instant::now();
            let result = Self::render_request(&request);
            let render_duration = start.elapsed();

            // A newer request may have arrived while this frame was
            // rendering; its result supersedes this one.
            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!("discarding stale frame generation {}", job_generation);
                shared
                    .last_completed_generation
                    .store(job_generation, Ordering::Release);
                continue;
            }

            match result {
                Ok(pixel_buffer) => {
                    shared.presenter.present(FrameEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));
                }
                Err(message) => {
                    shared.presenter.present(FrameEvent::Error(RenderError {
                        generation: job_generation,
                        message,
                    }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request(request: &RenderRequest) -> Result<PixelBuffer, String> {
        let mut buffer =
            PixelBuffer::new(request.width, request.height).map_err(|e| e.to_string())?;
        let colour_map =
            HueRampColourMap::new(request.max_iterations).map_err(|e| e.to_string())?;

        render_snapshot(
            request.view,
            &request.engine,
            request.kind,
            request.max_iterations,
            &colour_map,
            &mut buffer,
        )
        .map_err(|e| e.to_string())?;

        Ok(buffer)
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_engine::EscapeEngine;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use crate::core::view::transform::ViewTransform;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingPresenter {
        events: Mutex<Vec<FrameEvent>>,
    }

    impl FramePresenterPort for RecordingPresenter {
        fn present(&self, event: FrameEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn request(width: u32, height: u32, max_iterations: u32) -> RenderRequest {
        let mut view = ViewTransform::centered(width, height);

        RenderRequest::capture(
            &mut view,
            EscapeEngine::default(),
            FractalKind::Mandelbrot,
            max_iterations,
            width,
            height,
        )
    }

    fn wait_for_generation(scheduler: &RenderScheduler, generation: u64) {
        let deadline = Instant::now() + Duration::from_secs(10);

        while scheduler.last_completed_generation() < generation {
            assert!(Instant::now() < deadline, "scheduler did not catch up");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_submitted_request_is_rendered_and_presented() {
        let presenter = Arc::new(RecordingPresenter::default());
        let scheduler = RenderScheduler::new(Arc::clone(&presenter) as Arc<dyn FramePresenterPort>);

        let generation = scheduler.submit_request(request(32, 24, 50));
        wait_for_generation(&scheduler, generation);

        let events = presenter.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            FrameEvent::Frame(frame) => {
                assert_eq!(frame.generation, generation);
                assert_eq!(frame.pixel_buffer.data().len(), 32 * 24 * 3);
            }
            FrameEvent::Error(error) => panic!("unexpected render error: {}", error.message),
        }
    }

    #[test]
    fn test_generations_are_monotonic() {
        let presenter = Arc::new(RecordingPresenter::default());
        let scheduler = RenderScheduler::new(Arc::clone(&presenter) as Arc<dyn FramePresenterPort>);

        let mut last = 0;
        for _ in 0..3 {
            let generation = scheduler.submit_request(request(16, 16, 30));
            assert!(generation > last);
            last = generation;
        }

        wait_for_generation(&scheduler, last);

        let events = presenter.events.lock().unwrap();
        let mut presented = 0;
        for event in events.iter() {
            if let FrameEvent::Frame(frame) = event {
                assert!(frame.generation > presented);
                presented = frame.generation;
            }
        }
        // The last request of the burst is never dropped.
        assert_eq!(presented, last);
    }

    #[test]
    fn test_invalid_request_presents_an_error_event() {
        let presenter = Arc::new(RecordingPresenter::default());
        let scheduler = RenderScheduler::new(Arc::clone(&presenter) as Arc<dyn FramePresenterPort>);

        // Zero max iterations cannot build a colour map.
        let generation = scheduler.submit_request(request(16, 16, 0));
        wait_for_generation(&scheduler, generation);

        let events = presenter.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], FrameEvent::Error(error) if error.generation == generation));
    }

    #[test]
    fn test_shutdown_is_idempotent_and_joins_the_worker() {
        let presenter = Arc::new(RecordingPresenter::default());
        let mut scheduler =
            RenderScheduler::new(Arc::clone(&presenter) as Arc<dyn FramePresenterPort>);

        scheduler.shutdown();
        scheduler.shutdown();
    }
}
