// Canvas → PNG.
//
// Maps canvas values to 8-bit pixels and writes them with the `image`
// crate. By default the canvas value range is stretched to 0..=255 (the
// way an auto-scaling image viewer displays it); with `normalize` off,
// values are clamped to [0, 1]. Either way the background 1.0 of a [0, 1]
// canvas comes out white.
//
// Channel count selects the pixel format: 1 → gray, 2 → gray + alpha,
// 3 → RGB, 4 → RGBA. Upscaling duplicates pixels into `scale × scale`
// blocks with no interpolation.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, LumaA, Pixel, Rgb, Rgba};
use ndarray::ArrayView2;
use tessera_mosaic::Canvas;

use crate::config::RenderConfig;
use crate::error::RenderError;

/// Linear map from canvas values to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Intensity {
    offset: f64,
    span: f64,
}

impl Intensity {
    fn for_canvas(canvas: &Canvas, normalize: bool) -> Self {
        match canvas.value_range() {
            Some((lo, hi)) if normalize && hi > lo => Intensity {
                offset: lo,
                span: hi - lo,
            },
            _ => Intensity {
                offset: 0.0,
                span: 1.0,
            },
        }
    }

    fn to_u8(self, value: f64) -> u8 {
        let unit = ((value - self.offset) / self.span).clamp(0.0, 1.0);
        (unit * 255.0).round() as u8
    }
}

/// Convert a canvas into an in-memory image.
pub fn to_image(canvas: &Canvas, config: &RenderConfig) -> Result<DynamicImage, RenderError> {
    config.validate()?;
    let (height, width) = canvas.dims();
    let scale = config.scale;
    let too_large = || RenderError::TooLarge {
        width: width.saturating_mul(scale as usize),
        height: height.saturating_mul(scale as usize),
    };
    let out_width = u32::try_from(width)
        .ok()
        .and_then(|w| w.checked_mul(scale))
        .ok_or_else(too_large)?;
    let out_height = u32::try_from(height)
        .ok()
        .and_then(|h| h.checked_mul(scale))
        .ok_or_else(too_large)?;

    let intensity = Intensity::for_canvas(canvas, config.normalize);
    let planes: Vec<ArrayView2<'_, f64>> = (0..canvas.channel_count())
        .filter_map(|c| canvas.channel(c))
        .collect();
    let frame = Frame {
        planes: &planes,
        intensity,
        scale,
        width: out_width,
        height: out_height,
    };

    let image = match planes.len() {
        1 => DynamicImage::ImageLuma8(frame.build::<Luma<u8>>()),
        2 => DynamicImage::ImageLumaA8(frame.build::<LumaA<u8>>()),
        3 => DynamicImage::ImageRgb8(frame.build::<Rgb<u8>>()),
        4 => DynamicImage::ImageRgba8(frame.build::<Rgba<u8>>()),
        n => return Err(RenderError::UnsupportedChannels(n)),
    };
    Ok(image)
}

/// Render a canvas and write it as PNG.
pub fn save_png(
    canvas: &Canvas,
    path: &Path,
    config: &RenderConfig,
) -> Result<(u32, u32), RenderError> {
    let image = to_image(canvas, config)?;
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok((image.width(), image.height()))
}

/// Canvas planes plus the output geometry, shared by every pixel format.
struct Frame<'a> {
    planes: &'a [ArrayView2<'a, f64>],
    intensity: Intensity,
    scale: u32,
    width: u32,
    height: u32,
}

impl Frame<'_> {
    fn build<P: Pixel<Subpixel = u8>>(&self) -> ImageBuffer<P, Vec<u8>> {
        let mut buffer = ImageBuffer::<P, Vec<u8>>::new(self.width, self.height);
        for (x, y, pixel) in buffer.enumerate_pixels_mut() {
            let row = (y / self.scale) as usize;
            let col = (x / self.scale) as usize;
            for (channel, plane) in pixel.channels_mut().iter_mut().zip(self.planes) {
                *channel = self.intensity.to_u8(plane[[row, col]]);
            }
        }
        buffer
    }
}
