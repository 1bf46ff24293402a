//! The scene graph: screen → racks → shelves → items.
//!
//! The whole tree is built once from a [`LayoutConfig`] and one random
//! source, then drawn once. Construction and drawing both walk the tree
//! depth first, left to right and bottom to top; every random decision is
//! taken in that order, so the same seed always yields the same scene.

pub mod items;
pub mod rack;
pub mod shelf;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::coords::Coordinate;
use crate::log;
use crate::render::Canvas;
use crate::types::{Color, Size};

pub use items::{Beer, Item, ItemKind, Jar, Salt, Slot};
pub use rack::Rack;
pub use shelf::Shelf;

/// The padded drawable area and the racks tiling it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    config: LayoutConfig,
    origin: Coordinate,
    width: u32,
    height: u32,
    racks: Vec<Rack>,
}

impl Scene {
    /// Builds every rack, shelf and item.
    ///
    /// Racks are `width / n` pixels wide and placed edge to edge from the
    /// left padding; the remainder of that division stays empty at the right.
    pub fn build<R: Rng + ?Sized>(config: LayoutConfig, rng: &mut R) -> Self {
        let frame = *config.frame();
        let padding = config.padding();
        let bounds = *config.bounds();
        let (width, height) = (bounds.drawable_width, bounds.drawable_height);
        let origin = frame.from_device(padding.left as f64, padding.bottom as f64);

        let count = config.rack_count();
        let rack_width = width / count;
        let racks: Vec<Rack> = (0..count)
            .map(|i| {
                let at = origin.offset(&frame, (i * rack_width) as f64, 0.0);
                Rack::build(at, rack_width, height, &config, rng)
            })
            .collect();

        log::info!(
            racks = racks.len(),
            rack_width,
            slack = width - count * rack_width,
            "scene built"
        );

        Scene {
            config,
            origin,
            width,
            height,
            racks,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Left-bottom corner of the drawable area.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    /// Iterates over every item, rack by rack and shelf by shelf.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.racks
            .iter()
            .flat_map(|rack| rack.shelves())
            .flat_map(|shelf| shelf.items())
    }

    /// Background first, then each rack in turn.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let frame = self.config.frame();
        let thickness = self.config.rack_thickness();
        canvas.rectangle(
            frame.to_device(self.origin),
            Size::from((self.width, self.height)),
            Color::BACKGROUND,
            Color::BACKGROUND,
        );
        for rack in &self.racks {
            rack.draw(frame, thickness, canvas);
        }
    }
}
