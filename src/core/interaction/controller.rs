use std::time::Instant;

use tracing::{debug, trace};

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport_transform::{
    MIN_RESOLUTION_SCALE, ViewportTransform, clamp_resolution_scale,
};
use crate::core::interaction::clock::{Clock, SystemClock};
use crate::core::interaction::debounce::DebounceTimer;
use crate::core::interaction::limits::InteractionLimits;
use crate::core::interaction::session::{InteractionSession, InteractionState};

/// What the caller should render after an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewUpdate {
    /// The view is moving. Render this transform at motion quality.
    Motion(ViewportTransform),
    /// The interaction ended. Render this transform as the final frame.
    Settled(ViewportTransform),
}

impl ViewUpdate {
    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        match self {
            Self::Motion(transform) | Self::Settled(transform) => *transform,
        }
    }
}

/// Turns pointer and wheel input into viewport updates.
///
/// The controller never sleeps or spawns timers. Callers drive the debounce by calling
/// [`poll`](Self::poll) at or after [`next_deadline`](Self::next_deadline).
///
/// While the view moves with motion blur enabled, the resolution scale drops to
/// [`InteractionLimits::motion_resolution_scale`]. The scale in effect before the first
/// motion is remembered once and restored when the interaction settles.
#[derive(Debug)]
pub struct InteractionController<C: Clock = SystemClock> {
    clock: C,
    limits: InteractionLimits,
    transform: ViewportTransform,
    surface: PixelRect,
    motion_blur: bool,
    resting_resolution_scale: Option<f64>,
    state: InteractionState,
    session: Option<InteractionSession>,
    debounce: DebounceTimer,
}

impl InteractionController<SystemClock> {
    #[must_use]
    pub fn with_system_clock(
        surface: PixelRect,
        transform: ViewportTransform,
        limits: InteractionLimits,
        motion_blur: bool,
    ) -> Self {
        Self::new(surface, transform, limits, motion_blur, SystemClock)
    }
}

impl<C: Clock> InteractionController<C> {
    #[must_use]
    pub fn new(
        surface: PixelRect,
        transform: ViewportTransform,
        limits: InteractionLimits,
        motion_blur: bool,
        clock: C,
    ) -> Self {
        Self {
            clock,
            limits,
            transform,
            surface,
            motion_blur,
            resting_resolution_scale: None,
            state: InteractionState::Idle,
            session: None,
            debounce: DebounceTimer::new(limits.settle_delay),
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        trace!(x, y, "pointer down");

        self.debounce.cancel();
        self.session = Some(InteractionSession::new([x, y], self.transform.offset()));
        self.transition(InteractionState::Dragging);
    }

    /// Proposes a panned transform while dragging. The stored transform is not modified.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<ViewUpdate> {
        if self.state != InteractionState::Dragging {
            return None;
        }

        let mut session = self.session?;
        session.last_position = [x, y];
        self.session = Some(session);

        trace!(x, y, "pointer move");

        self.begin_motion();
        Some(ViewUpdate::Motion(self.drag_candidate(&session)))
    }

    /// Commits the drag and starts the settle countdown.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        if self.state != InteractionState::Dragging {
            return;
        }

        trace!(x, y, "pointer up");

        if let Some(session) = self.session.take() {
            let offset = self.drag_offset(&session, [x, y]);
            self.transform.set_offset(offset);
        }

        self.debounce.arm(self.clock.now());
        self.transition(InteractionState::Settling);
    }

    /// Zooms by one notch in the direction of `delta`: positive zooms out, negative zooms in.
    ///
    /// During a drag the zoom applies underneath it and the countdown waits for pointer-up.
    pub fn wheel(&mut self, delta: f64) -> Option<ViewUpdate> {
        trace!(delta, "wheel");

        self.begin_motion();
        self.transform
            .apply_wheel(delta, self.limits.zoom_step, self.limits.zoom_speed);

        if self.state == InteractionState::Dragging {
            let session = self.session?;
            return Some(ViewUpdate::Motion(self.drag_candidate(&session)));
        }

        self.transition(InteractionState::Zooming);
        self.debounce.arm(self.clock.now());
        self.transition(InteractionState::Settling);

        Some(ViewUpdate::Motion(self.transform))
    }

    /// Ends the interaction once the settle delay has passed with no further motion.
    ///
    /// Returns [`ViewUpdate::Settled`] exactly once per interaction.
    pub fn poll(&mut self) -> Option<ViewUpdate> {
        if !self.debounce.fire_if_due(self.clock.now()) {
            return None;
        }

        self.end_motion();
        self.transition(InteractionState::Idle);

        Some(ViewUpdate::Settled(self.transform))
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "surface resized");

        self.surface = PixelRect::new(width, height);
    }

    pub fn set_motion_blur(&mut self, enabled: bool) {
        self.motion_blur = enabled;

        if !enabled {
            self.end_motion();
        }
    }

    /// Sets the resting resolution scale. While the view is degraded for motion the new
    /// scale takes effect when the interaction settles.
    pub fn set_resolution_scale(&mut self, scale: f64) {
        let scale = clamp_resolution_scale(scale);

        match self.resting_resolution_scale.as_mut() {
            Some(resting) => *resting = scale,
            None => self.transform.set_resolution_scale(scale),
        }
    }

    pub fn set_zoom_speed(&mut self, zoom_speed: f64) {
        self.limits.set_zoom_speed(zoom_speed);
    }

    /// Returns to the default zoom and offset, abandoning any interaction in progress.
    pub fn reset_view(&mut self) -> ViewportTransform {
        self.debounce.cancel();
        self.session = None;
        self.end_motion();
        self.transform.reset_view();
        self.transition(InteractionState::Idle);

        self.transform
    }

    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn surface(&self) -> PixelRect {
        self.surface
    }

    #[must_use]
    pub fn limits(&self) -> InteractionLimits {
        self.limits
    }

    #[must_use]
    pub fn motion_blur(&self) -> bool {
        self.motion_blur
    }

    /// The scale the view returns to when the interaction settles.
    #[must_use]
    pub fn resting_resolution_scale(&self) -> f64 {
        self.resting_resolution_scale
            .unwrap_or_else(|| self.transform.resolution_scale())
    }

    /// Width of the rendered frame in pixels at the current resolution scale.
    #[must_use]
    pub fn element_width(&self) -> f64 {
        f64::from(self.surface.width()) * self.transform.resolution_scale()
    }

    fn drag_offset(&self, session: &InteractionSession, position: [f64; 2]) -> [f64; 2] {
        let element_width = self.element_width();

        // Nothing to pan against on an empty surface.
        if element_width <= 0.0 {
            return session.base_offset;
        }

        let factor = self.transform.resolution_scale() * self.transform.zoom() / element_width;
        session.offset_at(position, factor)
    }

    fn drag_candidate(&self, session: &InteractionSession) -> ViewportTransform {
        let offset = self.drag_offset(session, session.last_position);
        self.transform.with_offset(offset)
    }

    fn begin_motion(&mut self) {
        if !self.motion_blur {
            return;
        }

        let resting = match self.resting_resolution_scale {
            Some(resting) => resting,
            None => {
                let resting = self.transform.resolution_scale();
                self.resting_resolution_scale = Some(resting);

                debug!(
                    resting,
                    motion = self.motion_resolution_scale(resting),
                    "degrading resolution for motion"
                );

                resting
            }
        };

        self.transform
            .set_resolution_scale(self.motion_resolution_scale(resting));
    }

    /// Scale used while moving: the configured motion scale, or half the resting scale when
    /// that is already at or below it. Never below [`MIN_RESOLUTION_SCALE`].
    fn motion_resolution_scale(&self, resting: f64) -> f64 {
        let motion = self.limits.motion_resolution_scale;

        if motion < resting {
            motion
        } else {
            (resting / 2.0).max(MIN_RESOLUTION_SCALE)
        }
    }

    fn end_motion(&mut self) {
        if let Some(resting) = self.resting_resolution_scale.take() {
            self.transform.set_resolution_scale(resting);

            debug!(resting, "restored resolution");
        }
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "interaction state");
            self.state = next;
        }
    }
}
