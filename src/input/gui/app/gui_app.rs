use std::path::PathBuf;
use std::sync::Arc;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, error, info, warn};
use winit::error::EventLoopError;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopProxy};
use winit::window::Window;

use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::export::ExportJob;
use crate::controllers::interactive::InteractiveController;
use crate::core::data::colour_params::{ColourParams, MAX_CONTRAST};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport_transform::{MAX_RESOLUTION_SCALE, MIN_RESOLUTION_SCALE};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::interaction::{InteractionController, InteractionState, ViewUpdate};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;
use crate::presenters::file::png::PngFilePresenter;

pub const DEFAULT_EXPORT_PATH: &str = "fractal.png";

/// Changes requested from the panel, applied once the egui frame has finished.
#[derive(Debug, Default)]
struct PanelActions {
    resolution_scale: Option<f64>,
    motion_blur: Option<bool>,
    zoom_speed: Option<f64>,
    reset_view: bool,
    export: bool,
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    interaction: InteractionController,
    ui_state: GuiAppState,
    cursor_position: Option<[f64; 2]>,
    export_path: PathBuf,
    export_job: Option<ExportJob>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
    redraw_pending: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        config: &ExplorerConfig,
    ) -> Result<Self, ConfigError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let ui_state = GuiAppState::from_config(config)?;
        let interaction = InteractionController::with_system_clock(
            PixelRect::new(size.width, size.height),
            ui_state.view,
            config.interaction_limits(),
            config.motion_blur,
        );

        Ok(Self {
            window,
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            interaction,
            ui_state,
            cursor_position: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            export_job: None,
            event_loop_proxy: event_loop.create_proxy(),
            redraw_pending: true,
            egui_ctx,
            egui_state,
        })
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                self.poll_export();
                self.redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // egui sees every event first
                let (egui_consumed, egui_repaint) = self.handle_window_event(event);

                if egui_repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        self.redraw_pending = false;

                        let mut egui_output = self.update_ui();
                        self.submit_render_request_if_needed();

                        let platform_output = std::mem::take(&mut egui_output.platform_output);
                        self.egui_state
                            .handle_platform_output(window, platform_output);

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            self.redraw_pending = true;
                        }

                        if let Err(error) = self.render(egui_output) {
                            error!(%error, "failed to draw frame");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.resize(size.width, size.height);
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.scale_factor = *scale_factor;
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    _ => self.handle_input(event, egui_consumed),
                }
            }
            Event::AboutToWait => {
                self.poll_interaction();
                self.poll_export();

                if self.redraw_pending {
                    window.request_redraw();
                }

                elwt.set_control_flow(match self.interaction.next_deadline() {
                    Some(deadline) => ControlFlow::WaitUntil(deadline),
                    None => ControlFlow::Wait,
                });
            }
            _ => {}
        })
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.redraw_pending = true;
        self.interaction.resize(width, height);

        if let Err(error) = self.presenter.resize(width, height) {
            error!(%error, width, height, "failed to resize surface");
        }
    }

    fn surface(&self) -> PixelRect {
        PixelRect::new(self.width, self.height)
    }

    pub fn submit_render_request_if_needed(&mut self) {
        let surface = self.surface();

        if surface.is_empty() {
            return;
        }

        let request = self.ui_state.build_render_request(surface);

        if self.ui_state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            self.ui_state.record_submission(request, generation);
        }
    }

    fn handle_input(&mut self, event: &WindowEvent, egui_consumed: bool) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some([position.x, position.y]);
                self.ui_state
                    .track_cursor(self.surface(), position.x, position.y);
                self.redraw_pending = true;

                if let Some(update) = self.interaction.pointer_move(position.x, position.y) {
                    self.apply_view_update(update);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.ui_state.cursor = None;
                self.redraw_pending = true;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !egui_consumed => {
                if let Some([x, y]) = self.cursor_position {
                    self.interaction.pointer_down(x, y);
                }
            }
            // Released even over the panel, so a drag cannot get stuck.
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                if let Some([x, y]) = self.cursor_position {
                    self.interaction.pointer_up(x, y);
                    self.sync_view();
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                if let Some(update) = self.interaction.wheel(wheel_delta(*delta)) {
                    self.apply_view_update(update);
                }
            }
            _ => {}
        }
    }

    fn poll_interaction(&mut self) {
        if let Some(update) = self.interaction.poll() {
            self.apply_view_update(update);
        }
    }

    fn apply_view_update(&mut self, update: ViewUpdate) {
        if let ViewUpdate::Settled(transform) = update {
            debug!(
                zoom = transform.zoom(),
                resolution_scale = transform.resolution_scale(),
                "view settled"
            );
        }

        self.ui_state.view = update.transform();
        self.redraw_pending = true;
    }

    /// Copies the committed transform unless a drag is showing an uncommitted one.
    fn sync_view(&mut self) {
        if self.interaction.state() != InteractionState::Dragging {
            self.ui_state.view = self.interaction.transform();
            self.redraw_pending = true;
        }
    }

    fn export_png(&mut self) {
        if let Some(job) = &self.export_job {
            self.ui_state.status_message =
                Some(format!("Still exporting {}", job.path().display()));
            return;
        }

        let transform = self.interaction.transform().with_resolution_scale(1.0);
        let request = RenderRequest::for_surface(
            transform,
            self.surface(),
            self.ui_state.fractal,
            self.ui_state.colour,
        );
        let proxy = self.event_loop_proxy.clone();

        let spawned = ExportJob::spawn(
            PngFilePresenter::new(),
            request,
            self.export_path.clone(),
            move || {
                // the loop may already be gone on shutdown
                let _ = proxy.send_event(GuiEvent::Wake);
            },
        );

        self.ui_state.status_message = Some(match spawned {
            Ok(job) => {
                info!(path = %job.path().display(), "export started");
                let message = format!("Exporting {}", job.path().display());
                self.export_job = Some(job);
                message
            }
            Err(error) => {
                warn!(%error, "failed to start export");
                format!("Export failed: {error}")
            }
        });
    }

    /// Reports a finished export, leaving a running one alone.
    fn poll_export(&mut self) {
        if !self.export_job.as_ref().is_some_and(ExportJob::is_finished) {
            return;
        }
        let Some(job) = self.export_job.take() else {
            return;
        };

        let path = job.path().to_path_buf();
        self.ui_state.status_message = Some(match job.join() {
            Ok(()) => format!("Saved {}", path.display()),
            Err(error) => {
                warn!(%error, path = %path.display(), "export failed");
                format!("Export failed: {error}")
            }
        });
        self.redraw_pending = true;
    }

    fn apply_panel_actions(&mut self, actions: PanelActions) {
        if let Some(scale) = actions.resolution_scale {
            self.interaction.set_resolution_scale(scale);
            self.sync_view();
        }

        if let Some(enabled) = actions.motion_blur {
            self.interaction.set_motion_blur(enabled);
            self.sync_view();
        }

        if let Some(zoom_speed) = actions.zoom_speed {
            self.interaction.set_zoom_speed(zoom_speed);
        }

        if actions.reset_view {
            info!("view reset");
            self.ui_state.view = self.interaction.reset_view();
            self.redraw_pending = true;
        }

        if actions.export {
            self.export_png();
        }
    }

    pub fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let ctx = self.egui_ctx.clone();
        let mut actions = PanelActions::default();

        let output = ctx.run(raw_input, |ctx| self.draw_panel(ctx, &mut actions));
        self.apply_panel_actions(actions);

        output
    }

    fn draw_panel(&mut self, ctx: &Context, actions: &mut PanelActions) {
        egui::Window::new("Explorer")
            .default_pos([10.0, 10.0])
            .default_width(280.0)
            .show(ctx, |ui| {
                self.fractal_controls(ui);
                ui.separator();
                self.colour_controls(ui);
                ui.separator();
                self.view_controls(ui, actions);
                ui.separator();
                self.status_lines(ui);
            });
    }

    fn fractal_controls(&mut self, ui: &mut egui::Ui) {
        let fractal = &mut self.ui_state.fractal;
        let mut kind = fractal.kind();

        egui::ComboBox::from_label("Fractal")
            .selected_text(kind.display_name())
            .show_ui(ui, |ui| {
                for &option in FractalKinds::ALL {
                    ui.selectable_value(&mut kind, option, option.display_name());
                }
            });
        fractal.set_kind(kind);

        let mut max_iterations = fractal.max_iterations();
        if ui
            .add(egui::Slider::new(&mut max_iterations, 1..=1000).text("Max iterations"))
            .changed()
        {
            report(fractal.set_max_iterations(max_iterations));
        }

        if kind.uses_exponent() {
            let mut exponent = fractal.exponent();
            if ui
                .add(egui::Slider::new(&mut exponent, -8.0..=8.0).text("Exponent"))
                .changed()
            {
                report(fractal.set_exponent(exponent));
            }
        }

        if kind.uses_julia_constant() {
            let constant = fractal.julia_constant();
            let (mut real, mut imag) = (constant.real, constant.imag);

            let changed = ui
                .horizontal(|ui| {
                    ui.label("c =");
                    let real_changed = ui
                        .add(egui::DragValue::new(&mut real).speed(0.001).clamp_range(-2.0..=2.0))
                        .changed();
                    ui.label("+");
                    let imag_changed = ui
                        .add(egui::DragValue::new(&mut imag).speed(0.001).clamp_range(-2.0..=2.0))
                        .changed();
                    ui.label("i");
                    real_changed || imag_changed
                })
                .inner;

            if changed {
                report(fractal.set_julia_constant(Complex::new(real, imag)));
            }
        }
    }

    fn colour_controls(&mut self, ui: &mut egui::Ui) {
        let mut contrast = self.ui_state.colour.contrast();
        let mut brightness = self.ui_state.colour.brightness();

        let contrast_changed = ui
            .add(egui::Slider::new(&mut contrast, -MAX_CONTRAST..=MAX_CONTRAST).text("Contrast"))
            .changed();
        let brightness_changed = ui
            .add(egui::Slider::new(&mut brightness, -255.0..=255.0).text("Brightness"))
            .changed();

        if contrast_changed || brightness_changed {
            match ColourParams::new(contrast, brightness) {
                Ok(colour) => self.ui_state.colour = colour,
                Err(error) => warn!(%error, "colour settings rejected"),
            }
        }
    }

    fn view_controls(&mut self, ui: &mut egui::Ui, actions: &mut PanelActions) {
        let mut resolution = self.interaction.resting_resolution_scale();
        if ui
            .add(
                egui::Slider::new(&mut resolution, MIN_RESOLUTION_SCALE..=MAX_RESOLUTION_SCALE)
                    .text("Resolution"),
            )
            .changed()
        {
            actions.resolution_scale = Some(resolution);
        }

        let mut motion_blur = self.interaction.motion_blur();
        if ui.checkbox(&mut motion_blur, "Motion blur").changed() {
            actions.motion_blur = Some(motion_blur);
        }

        let mut zoom_speed = self.interaction.limits().zoom_speed;
        if ui
            .add(egui::Slider::new(&mut zoom_speed, 0.0..=5.0).text("Zoom speed"))
            .changed()
        {
            actions.zoom_speed = Some(zoom_speed);
        }

        ui.horizontal(|ui| {
            actions.reset_view = ui.button("Reset view").clicked();
            actions.export = ui.button("Export PNG").clicked();
        });
    }

    fn status_lines(&self, ui: &mut egui::Ui) {
        let view = self.ui_state.view;
        let [offset_x, offset_y] = view.offset();

        ui.label(format!("Zoom: {:.6}", view.zoom()));
        ui.label(format!("Offset: ({offset_x:.6}, {offset_y:.6})"));

        if let Some(cursor) = self.ui_state.cursor {
            ui.label(format!("Cursor: {:.6} {:+.6}i", cursor.real, cursor.imag));
        }

        let status = self.presenter.status();
        ui.label(format!(
            "Window {}x{}, generation {}",
            self.width, self.height, self.ui_state.latest_submitted_generation
        ));

        if let Some(render_duration) = status.last_render_duration {
            ui.label(format!("Last render: {} ms", render_duration.as_millis()));
        }

        if let Some(message) = &status.last_error_message {
            ui.colored_label(egui::Color32::LIGHT_RED, message);
        }

        if let Some(message) = &self.ui_state.status_message {
            ui.label(message);
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(self.window, event);
        (response.consumed, response.repaint)
    }
}

/// Browser-style wheel delta: positive scrolls down and zooms out.
fn wheel_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}

fn report<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(error) = result {
        warn!(%error, "setting rejected");
    }
}
