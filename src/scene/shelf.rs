//! A shelf: one plank plus the items standing on it.

use rand::Rng;

use super::items::{Item, Slot};
use crate::config::LayoutConfig;
use crate::coords::{Coordinate, Frame};
use crate::log;
use crate::partition::partition;
use crate::render::Canvas;
use crate::types::{Color, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct Shelf {
    origin: Coordinate,
    width: u32,
    /// Room from the bottom of the plank to the next shelf
    height: u32,
    color: Color,
    items: Vec<Item>,
}

impl Shelf {
    /// Fills the shelf left to right with randomly sized slots and items.
    pub fn build<R: Rng + ?Sized>(
        origin: Coordinate,
        width: u32,
        height: u32,
        color: Color,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Self {
        let frame = config.frame();
        let thickness = config.rack_thickness();
        let intervals = partition(rng, 0.0, 1.0, config.item_width());

        let items: Vec<Item> = intervals
            .iter()
            .map(|interval| {
                let (x, w) = interval.to_pixels(width);
                let slot = Slot {
                    origin: origin.offset(frame, x as f64, thickness as f64),
                    width: w,
                    height: height.saturating_sub(thickness),
                };
                Item::generate(slot, frame, rng)
            })
            .collect();

        log::debug!(width, height, items = items.len(), "shelf built");

        Shelf {
            origin,
            width,
            height,
            color,
            items,
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

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draw(&self, frame: &Frame, thickness: u32, canvas: &mut dyn Canvas) {
        canvas.rectangle(
            frame.to_device(self.origin),
            Size::from((self.width, thickness)),
            self.color,
            self.color,
        );
        for item in &self.items {
            item.draw(frame, canvas);
        }
    }
}
