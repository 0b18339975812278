use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use tracing::debug;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::{FrameData, InteractiveControllerPresenterPort, RenderEvent};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, PresenterStatus};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    /// Newest accepted frame, kept so a resize can redraw it without waiting for a render.
    current_frame: Option<PixelBuffer>,
    status: PresenterStatus,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            current_frame: None,
            status: PresenterStatus::default(),
        })
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.accept_render_event();
        self.draw_current_frame();

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the fractal underneath the panel.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        Ok(())
    }

    fn status(&self) -> &PresenterStatus {
        &self.status
    }
}

impl PixelsPresenter {
    fn accept_render_event(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation > self.status.last_presented_generation {
                    self.accept_frame(frame);
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.status.last_presented_generation {
                    self.status.last_error_message = Some(error.message);
                }
            }
        }
    }

    fn accept_frame(&mut self, frame: FrameData) {
        debug!(
            generation = frame.generation,
            resolution_scale = frame.transform.resolution_scale(),
            duration = ?frame.render_duration,
            "presenting frame"
        );

        self.status.last_presented_generation = frame.generation;
        self.status.last_render_duration = Some(frame.render_duration);
        self.status.last_error_message = None;
        self.current_frame = Some(frame.pixel_buffer);
    }

    fn draw_current_frame(&mut self) {
        let (width, height) = (self.width, self.height);
        let dest = self.pixels.frame_mut();

        match &self.current_frame {
            Some(source) => upscale_nearest(source, dest, width, height),
            None => {
                for pixel in dest.chunks_exact_mut(BYTES_PER_PIXEL) {
                    pixel.copy_from_slice(&[0, 0, 0, 255]);
                }
            }
        }
    }
}

/// Stretches `source` over a `width` x `height` RGBA frame, sampling the nearest source pixel.
///
/// An empty source leaves `dest` untouched.
pub fn upscale_nearest(source: &PixelBuffer, dest: &mut [u8], width: u32, height: u32) {
    let source_rect = source.pixel_rect();

    if source_rect.is_empty() || width == 0 || height == 0 {
        return;
    }

    let source_width = u64::from(source_rect.width());
    let source_height = u64::from(source_rect.height());
    let stride = source.stride();
    let data = source.buffer();
    let dest_stride = width as usize * BYTES_PER_PIXEL;

    for (y, dest_row) in dest.chunks_exact_mut(dest_stride).take(height as usize).enumerate() {
        let source_y = (y as u64 * source_height / u64::from(height)) as usize;
        let source_row = &data[source_y * stride..(source_y + 1) * stride];

        for (x, pixel) in dest_row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let source_x = (x as u64 * source_width / u64::from(width)) as usize;
            let start = source_x * BYTES_PER_PIXEL;
            pixel.copy_from_slice(&source_row[start..start + BYTES_PER_PIXEL]);
        }
    }
}
