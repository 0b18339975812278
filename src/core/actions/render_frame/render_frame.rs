use rayon::prelude::*;
use thiserror::Error;
use tracing::trace;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport_transform::ViewportTransform;
use crate::core::fractals::colour_mapping::contrast_brightness::ContrastBrightnessMap;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use crate::core::fractals::evaluator::evaluator_factory;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderFrameError {
    /// A newer request superseded this one. Not a failure to show to users.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
}

/// Renders `request` into a freshly allocated buffer of its dimensions.
pub fn render_request<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    let evaluator = evaluator_factory(&request.fractal);
    let colour_map = ContrastBrightnessMap::new(request.colour, request.fractal.max_iterations())?;
    let mut pixel_buffer = PixelBuffer::new(request.pixel_rect);

    trace!(
        fractal = %request.fractal.kind(),
        colour_map = colour_map.display_name(),
        width = request.pixel_rect.width(),
        height = request.pixel_rect.height(),
        "rendering frame"
    );

    render_frame_cancelable(
        &evaluator,
        &colour_map,
        &request.transform,
        &mut pixel_buffer,
        cancel,
    )?;

    Ok(pixel_buffer)
}

/// Fills `pixel_buffer` in parallel, one rayon task per row.
pub fn render_frame<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    transform: &ViewportTransform,
    pixel_buffer: &mut PixelBuffer,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
{
    match render_frame_cancelable(algorithm, colour_map, transform, pixel_buffer, &NeverCancel) {
        Ok(()) | Err(Cancelled) => {}
    }
}

/// Fills `pixel_buffer` in parallel, checking `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
///
/// On cancellation the buffer holds a partial frame and should be discarded.
pub fn render_frame_cancelable<Alg, CMap, C>(
    algorithm: &Alg,
    colour_map: &CMap,
    transform: &ViewportTransform,
    pixel_buffer: &mut PixelBuffer,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
    C: CancelToken,
{
    let pixel_rect = pixel_buffer.pixel_rect();

    if pixel_rect.is_empty() {
        return Ok(());
    }

    let mapping = PlaneMapping::new(pixel_rect, transform);
    let stride = pixel_buffer.stride();

    pixel_buffer
        .buffer_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            render_row(y as u32, row, &mapping, algorithm, colour_map, cancel)
        })
}

/// Single-threaded equivalent of [`render_frame`], producing identical bytes.
pub fn render_frame_serial<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    transform: &ViewportTransform,
    pixel_buffer: &mut PixelBuffer,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    let pixel_rect = pixel_buffer.pixel_rect();

    if pixel_rect.is_empty() {
        return;
    }

    let mapping = PlaneMapping::new(pixel_rect, transform);
    let stride = pixel_buffer.stride();

    for (y, row) in pixel_buffer.buffer_mut().chunks_mut(stride).enumerate() {
        match render_row(y as u32, row, &mapping, algorithm, colour_map, &NeverCancel) {
            Ok(()) | Err(Cancelled) => {}
        }
    }
}

fn render_row<Alg, CMap, C>(
    y: u32,
    row: &mut [u8],
    mapping: &PlaneMapping,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
    C: CancelToken,
{
    let imag = mapping.imag(y);

    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let point = Complex::new(mapping.real(x as u32), imag);
        let colour = Colour::from_sample(colour_map.map(algorithm.compute(point)));
        pixel.copy_from_slice(&colour.to_array());
    }

    Ok(())
}
