//! Raster surface backed by tiny-skia.

use std::path::Path;

use glam::{DVec2, dvec2};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::Canvas;
use super::geometry::{bottle_outline, triangle_outline};
use crate::config::WindowSize;
use crate::errors::RenderError;
use crate::log;
use crate::types::{Color, Size};

/// Draws into an in-memory pixmap the size of the window.
///
/// The device frame has y growing upwards; pixmap rows grow downwards, so
/// every point is flipped against the pixmap height.
pub struct RasterCanvas {
    pixmap: Pixmap,
}

impl RasterCanvas {
    /// A white surface covering the whole window.
    pub fn new(window: WindowSize) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(window.width, window.height).ok_or(RenderError::Surface {
            width: window.width,
            height: window.height,
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(RasterCanvas { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap.encode_png().map_err(|e| RenderError::Encode {
            message: e.to_string(),
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        log::debug!(path = %path.display(), "writing png");
        self.pixmap.save_png(path).map_err(|e| RenderError::Encode {
            message: format!("{}: {}", path.display(), e),
        })
    }

    fn polygon(&mut self, points: &[DVec2], fill: Color, stroke: Color) {
        // Zero-sized items have nothing to paint.
        let min = points.iter().fold(DVec2::INFINITY, |acc, p| acc.min(*p));
        let max = points.iter().fold(DVec2::NEG_INFINITY, |acc, p| acc.max(*p));
        let extent = max - min;
        if !(extent.x > 0.0 && extent.y > 0.0) {
            return;
        }

        let height = self.pixmap.height() as f64;
        let mut pb = PathBuilder::new();
        for (i, p) in points.iter().enumerate() {
            let (x, y) = (p.x as f32, (height - p.y) as f32);
            if i == 0 {
                pb.move_to(x, y);
            } else {
                pb.line_to(x, y);
            }
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        self.pixmap.stroke_path(
            &path,
            &paint(stroke),
            &Stroke::default(),
            Transform::identity(),
            None,
        );
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

impl Canvas for RasterCanvas {
    fn rectangle(&mut self, origin: DVec2, size: Size, fill: Color, stroke: Color) {
        let corners = [
            origin,
            origin + dvec2(0.0, size.h),
            origin + dvec2(size.w, size.h),
            origin + dvec2(size.w, 0.0),
        ];
        self.polygon(&corners, fill, stroke);
    }

    fn triangle(&mut self, origin: DVec2, side: f64, fill: Color, stroke: Color) {
        self.polygon(&triangle_outline(origin, side), fill, stroke);
    }

    fn bottle(&mut self, origin: DVec2, size: Size, fill: Color, stroke: Color) {
        self.polygon(&bottle_outline(origin, size), fill, stroke);
    }
}
