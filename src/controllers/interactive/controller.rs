use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_request};
use crate::core::data::render_request::RenderRequest;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace, warn};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Renders the newest submitted request on a worker thread.
///
/// Each submission bumps a generation counter. The worker cancels a render as soon as a newer
/// generation exists, and never presents a result that has been superseded.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
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

    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
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
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            debug!(
                generation = job_generation,
                width = request.pixel_rect.width(),
                height = request.pixel_rect.height(),
                resolution_scale = request.transform.resolution_scale(),
                "render job picked up"
            );

            if request.pixel_rect.is_empty() {
                trace!(generation = job_generation, "skipping empty render");
                shared
                    .last_completed_generation
                    .store(job_generation, Ordering::Release);
                continue;
            }

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(pixel_buffer) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        trace!(generation = job_generation, "dropping superseded frame");
                        continue;
                    }

                    debug!(
                        generation = job_generation,
                        duration_ms = render_duration.as_secs_f64() * 1000.0,
                        "frame rendered"
                    );

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        transform: request.transform,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderFrameError::Cancelled(_)) => {
                    trace!(generation = job_generation, "render cancelled");
                    continue;
                }
                Err(error) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    warn!(generation = job_generation, %error, "render failed");

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message: error.to_string(),
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::core::data::colour_params::ColourParams;
    use crate::core::data::fractal_params::FractalParams;
    use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::viewport_transform::ViewportTransform;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(sink: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() {
                return events;
            }
            if start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn new_controller() -> (InteractiveController, Arc<MockPresenterPort>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>
        );

        (controller, presenter_port)
    }

    fn create_test_request(pixel_rect: PixelRect) -> RenderRequest {
        RenderRequest::new(
            ViewportTransform::default(),
            pixel_rect,
            FractalParams::default(),
            ColourParams::default(),
        )
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let (mut controller, presenter_port) = new_controller();

        let pixel_rect = PixelRect::new(4, 4);
        let request = Arc::new(create_test_request(pixel_rect));

        let generation = controller.submit_request(Arc::clone(&request));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        let mut saw_frame = false;
        for event in events {
            match event {
                RenderEvent::Frame(frame) => {
                    assert_eq!(frame.generation, generation);
                    assert!(generation > 0, "generation should be non-zero");
                    assert_eq!(frame.pixel_buffer.pixel_rect(), pixel_rect);
                    assert_eq!(frame.transform, request.transform);
                    assert_eq!(
                        frame.pixel_buffer.buffer().len(),
                        (pixel_rect.width() * pixel_rect.height()) as usize * BYTES_PER_PIXEL
                    );
                    saw_frame = true;
                }
                RenderEvent::Error(error) => {
                    panic!("unexpected render error: {}", error.message);
                }
            }
        }

        assert!(saw_frame, "expected a frame event");
        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (mut controller, presenter_port) = new_controller();
        let request = Arc::new(create_test_request(PixelRect::new(4, 4)));

        controller.submit_request(Arc::clone(&request));
        let events_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from request A");
        let gen_a = events_a[0].generation();

        controller.submit_request(Arc::clone(&request));
        let events_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from request B");
        let gen_b = events_b[0].generation();

        assert!(
            gen_b > gen_a,
            "Generation B ({}) should be greater than A ({})",
            gen_b,
            gen_a
        );

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (mut controller, _presenter_port) = new_controller();

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame_completion() {
        let (mut controller, presenter_port) = new_controller();
        let request = Arc::new(create_test_request(PixelRect::new(4, 4)));

        let submitted_generation = controller.submit_request(request);
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        assert_eq!(events[0].generation(), submitted_generation);
        assert_eq!(controller.last_completed_generation(), submitted_generation);

        controller.shutdown();
    }

    #[test]
    fn test_empty_request_completes_without_event() {
        let (mut controller, presenter_port) = new_controller();

        let request = create_test_request(PixelRect::new(0, 10));
        let generation = controller.submit_request(Arc::new(request));

        let start = Instant::now();
        while controller.last_completed_generation() < generation
            && start.elapsed() < Duration::from_secs(2)
        {
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(controller.last_completed_generation(), generation);
        assert!(presenter_port.take_events().is_empty());

        controller.shutdown();
    }

    #[test]
    fn test_rapid_requests_do_not_emit_cancellation_errors() {
        let (mut controller, presenter_port) = new_controller();
        let request = Arc::new(create_test_request(PixelRect::new(64, 64)));

        for _ in 0..5 {
            controller.submit_request(Arc::clone(&request));
        }

        thread::sleep(Duration::from_millis(500));
        let events = presenter_port.take_events();

        for event in &events {
            if let RenderEvent::Error(err) = event {
                panic!(
                    "Unexpected error event - cancellation should not emit errors: {}",
                    err.message
                );
            }
        }

        let frame_count = events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Frame(_)))
            .count();
        assert!(
            frame_count >= 1,
            "Expected at least one frame event, got {}",
            frame_count
        );

        controller.shutdown();
    }

    #[test]
    fn test_newest_request_yields_emitted_frame() {
        let (mut controller, presenter_port) = new_controller();
        let request = Arc::new(create_test_request(PixelRect::new(32, 32)));

        let mut last_gen = 0;
        for _ in 0..5 {
            last_gen = controller.submit_request(Arc::clone(&request));
        }

        let start = Instant::now();
        while controller.last_completed_generation() < last_gen
            && start.elapsed() < Duration::from_secs(2)
        {
            thread::sleep(Duration::from_millis(5));
        }

        let events = presenter_port.take_events();
        let max_emitted_gen = events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(_) => None,
            })
            .max()
            .unwrap_or(0);

        assert_eq!(max_emitted_gen, last_gen);

        controller.shutdown();
    }

    #[test]
    fn test_frames_are_whole() {
        let (mut controller, presenter_port) = new_controller();
        let pixel_rect = PixelRect::new(48, 32);
        let request = create_test_request(pixel_rect);
        let expected =
            render_request(&request, &crate::core::actions::cancellation::NeverCancel).unwrap();

        controller.submit_request(Arc::new(request));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        for event in events {
            if let RenderEvent::Frame(frame) = event {
                assert_eq!(frame.pixel_buffer, expected);
            }
        }

        controller.shutdown();
    }

    #[test]
    fn test_drop_joins_worker() {
        let (controller, _presenter_port) = new_controller();
        controller.submit_request(Arc::new(create_test_request(PixelRect::new(8, 8))));

        drop(controller);
    }
}
