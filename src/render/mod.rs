//! Render surfaces for generated scenes
//!
//! This module is organized into submodules:
//! - `geometry`: Outlines of triangles and bottles
//! - `raster`: tiny-skia surface with PNG output
//!
//! Scene nodes only talk to the [`Canvas`] trait. Every call carries its full
//! fill and stroke state; a surface never relies on what a previous call set.

pub mod geometry;
pub mod raster;

use std::fmt;

use glam::DVec2;

use crate::types::{Color, Size};

pub use raster::RasterCanvas;

/// Primitive drawing operations consumed by scene nodes.
///
/// Origins are left-bottom corners in the device frame (pixels from the
/// window's left-bottom corner, y up).
pub trait Canvas {
    fn rectangle(&mut self, origin: DVec2, size: Size, fill: Color, stroke: Color);

    /// Equilateral, apex-up triangle with its base starting at `origin`.
    fn triangle(&mut self, origin: DVec2, side: f64, fill: Color, stroke: Color);

    /// Bottle silhouette filling `size`, see [`geometry::bottle_outline`].
    fn bottle(&mut self, origin: DVec2, size: Size, fill: Color, stroke: Color);
}

/// One recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rectangle {
        origin: DVec2,
        size: Size,
        fill: Color,
        stroke: Color,
    },
    Triangle {
        origin: DVec2,
        side: f64,
        fill: Color,
        stroke: Color,
    },
    Bottle {
        origin: DVec2,
        size: Size,
        fill: Color,
        stroke: Color,
    },
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCall::Rectangle { origin, size, fill, stroke } => write!(
                f,
                "rect {},{} {}x{} fill={} stroke={}",
                origin.x, origin.y, size.w, size.h, fill, stroke
            ),
            DrawCall::Triangle { origin, side, fill, stroke } => write!(
                f,
                "triangle {},{} side={} fill={} stroke={}",
                origin.x, origin.y, side, fill, stroke
            ),
            DrawCall::Bottle { origin, size, fill, stroke } => write!(
                f,
                "bottle {},{} {}x{} fill={} stroke={}",
                origin.x, origin.y, size.w, size.h, fill, stroke
            ),
        }
    }
}

/// Canvas that keeps every call in order instead of drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for Recorder {
    fn rectangle(&mut self, origin: DVec2, size: Size, fill: Color, stroke: Color) {
        self.calls.push(DrawCall::Rectangle { origin, size, fill, stroke });
    }

    fn triangle(&mut self, origin: DVec2, side: f64, fill: Color, stroke: Color) {
        self.calls.push(DrawCall::Triangle { origin, side, fill, stroke });
    }

    fn bottle(&mut self, origin: DVec2, size: Size, fill: Color, stroke: Color) {
        self.calls.push(DrawCall::Bottle { origin, size, fill, stroke });
    }
}

impl fmt::Display for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for call in &self.calls {
            writeln!(f, "{call}")?;
        }
        Ok(())
    }
}
