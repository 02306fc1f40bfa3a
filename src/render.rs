use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;
use log::trace;
use std::path::Path;
use vector_common::LineSurface;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const STROKE: Rgba<u8> = Rgba([24, 24, 128, 255]);

/// A [`LineSurface`] backed by an RGBA image buffer.
///
/// Field coordinates `[0, field_w) x [0, field_h)` are mapped linearly onto
/// the full pixel area; segments that leave the field are clipped by the
/// rasterizer.
pub struct ImageSurface {
    image: RgbaImage,
    scale_x: f64,
    scale_y: f64,
}

impl ImageSurface {
    /// Creates a blank canvas of the given pixel size for a field of the
    /// given dimensions.
    pub fn new(width_px: u32, height_px: u32, field_w: f64, field_h: f64) -> Self {
        let image = RgbaImage::from_pixel(width_px, height_px, BACKGROUND);
        ImageSurface {
            image,
            scale_x: width_px as f64 / field_w,
            scale_y: height_px as f64 / field_h,
        }
    }

    /// Writes the canvas out as a PNG file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        self.image
            .save(path_ref)
            .with_context(|| format!("Failed to write image '{}'", path_ref.display()))
    }
}

impl LineSurface for ImageSurface {
    fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64)) {
        let start = (
            (from.0 * self.scale_x) as f32,
            (from.1 * self.scale_y) as f32,
        );
        let end = ((to.0 * self.scale_x) as f32, (to.1 * self.scale_y) as f32);
        trace!(
            "segment ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            start.0,
            start.1,
            end.0,
            end.1
        );
        draw_line_segment_mut(&mut self.image, start, end, STROKE);
    }
}
