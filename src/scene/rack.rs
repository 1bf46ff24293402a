//! A rack: two side bars holding a stack of shelves.

use rand::Rng;

use super::shelf::Shelf;
use crate::config::LayoutConfig;
use crate::coords::{Coordinate, Frame};
use crate::log;
use crate::render::Canvas;
use crate::types::{Color, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct Rack {
    origin: Coordinate,
    width: u32,
    height: u32,
    color: Color,
    shelves: Vec<Shelf>,
}

impl Rack {
    /// Stacks a random number of shelves bottom to top.
    ///
    /// With `k` shelves the pitch is `height / k`. The stack starts half a
    /// pitch up, and the topmost shelf is a cap of half a pitch, so the
    /// stack stays inside the rack.
    pub fn build<R: Rng + ?Sized>(
        origin: Coordinate,
        width: u32,
        height: u32,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Self {
        let frame = config.frame();
        let thickness = config.rack_thickness();
        let count = config.bounds().shelves.sample(rng);
        let color = Color::random(rng);

        let pitch = height / count;
        let shelf_width = width - 2 * thickness;
        let base = origin.offset(
            frame,
            thickness as f64,
            (pitch / 2).saturating_sub(thickness / 2) as f64,
        );

        let shelves = (0..count)
            .map(|j| {
                let shelf_height = if j + 1 == count { pitch / 2 } else { pitch };
                let at = base.offset(frame, 0.0, (j * pitch) as f64);
                Shelf::build(at, shelf_width, shelf_height, color, config, rng)
            })
            .collect();

        log::debug!(width, height, shelves = count, %color, "rack built");

        Rack {
            origin,
            width,
            height,
            color,
            shelves,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    fn draw_side_bars(&self, frame: &Frame, thickness: u32, canvas: &mut dyn Canvas) {
        let size = Size::from((thickness, self.height));
        let right = self.origin.offset(frame, (self.width - thickness) as f64, 0.0);
        canvas.rectangle(frame.to_device(self.origin), size, self.color, self.color);
        canvas.rectangle(frame.to_device(right), size, self.color, self.color);
    }

    /// Side bars, shelves, then the side bars again so they cover the edges
    /// of items pressed against them.
    pub fn draw(&self, frame: &Frame, thickness: u32, canvas: &mut dyn Canvas) {
        self.draw_side_bars(frame, thickness, canvas);
        for shelf in &self.shelves {
            shelf.draw(frame, thickness, canvas);
        }
        self.draw_side_bars(frame, thickness, canvas);
    }
}
