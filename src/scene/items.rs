//! Items standing on shelves.
//!
//! Each variant owns its own sizing policy: it receives a [`Slot`] (the
//! space its shelf set aside for it) and shrinks itself to fit. All colors
//! and sizes are fixed at construction.

use rand::Rng;

use crate::coords::{Coordinate, Frame};
use crate::defaults;
use crate::render::Canvas;
use crate::render::geometry::{triangle_fits, triangle_height, widest_triangle};
use crate::types::{Color, Size};

/// Space reserved for one item: left-bottom corner plus a size budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub origin: Coordinate,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Jar,
    Salt,
    Beer,
}

/// Draw table for item kinds; the repeats weight jars and beer 2:1 over salt.
const ITEM_TABLE: [ItemKind; 5] = [
    ItemKind::Jar,
    ItemKind::Jar,
    ItemKind::Salt,
    ItemKind::Beer,
    ItemKind::Beer,
];

#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Jar(Jar),
    Salt(Salt),
    Beer(Beer),
}

impl Item {
    /// Picks a kind at random and sizes it to `slot`.
    pub fn generate<R: Rng + ?Sized>(slot: Slot, frame: &Frame, rng: &mut R) -> Item {
        match ITEM_TABLE[rng.random_range(0..ITEM_TABLE.len())] {
            ItemKind::Jar => Item::Jar(Jar::new(slot, rng)),
            ItemKind::Salt => Item::Salt(Salt::new(slot, frame, rng)),
            ItemKind::Beer => Item::Beer(Beer::new(slot, frame, rng)),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Jar(_) => ItemKind::Jar,
            Item::Salt(_) => ItemKind::Salt,
            Item::Beer(_) => ItemKind::Beer,
        }
    }

    pub fn slot(&self) -> Slot {
        match self {
            Item::Jar(jar) => jar.slot,
            Item::Salt(salt) => salt.slot,
            Item::Beer(beer) => beer.slot,
        }
    }

    /// Left-bottom corner after any re-centering inside the slot.
    pub fn origin(&self) -> Coordinate {
        match self {
            Item::Jar(jar) => jar.slot.origin,
            Item::Salt(salt) => salt.origin,
            Item::Beer(beer) => beer.origin,
        }
    }

    /// Effective width and height after clamping, rounded up to whole pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Item::Jar(jar) => (jar.slot.width, jar.height),
            Item::Salt(salt) => (salt.side, triangle_height(salt.side as f64).ceil() as u32),
            Item::Beer(beer) => (beer.width, beer.height),
        }
    }

    pub fn draw(&self, frame: &Frame, canvas: &mut dyn Canvas) {
        match self {
            Item::Jar(jar) => jar.draw(frame, canvas),
            Item::Salt(salt) => salt.draw(frame, canvas),
            Item::Beer(beer) => beer.draw(frame, canvas),
        }
    }
}

/// Draws a rectangle `(dx, dy)` away from `origin`.
fn part(
    canvas: &mut dyn Canvas,
    frame: &Frame,
    origin: Coordinate,
    (dx, dy): (u32, u32),
    (w, h): (u32, u32),
    fill: Color,
    stroke: Color,
) {
    let at = origin.offset(frame, dx as f64, dy as f64);
    canvas.rectangle(frame.to_device(at), Size::from((w, h)), fill, stroke);
}

// ============================================================================
// Jar
// ============================================================================

/// Glass jar with a lid, colored contents and a label.
#[derive(Clone, Debug, PartialEq)]
pub struct Jar {
    pub slot: Slot,
    /// Somewhere between half and all of the slot height
    pub height: u32,
    pub contents: Color,
}

impl Jar {
    pub fn new<R: Rng + ?Sized>(slot: Slot, rng: &mut R) -> Self {
        let contents = Color::random(rng);
        let height = rng.random_range(slot.height / 2..=slot.height);
        Jar { slot, height, contents }
    }

    fn draw(&self, frame: &Frame, canvas: &mut dyn Canvas) {
        let (w, h) = (self.slot.width, self.height);
        let origin = self.slot.origin;

        // glass
        part(canvas, frame, origin, (0, 0), (w, h * 6 / 7), Color::WHITE, Color::BLACK);
        // lid, never rising above the jar's own height
        let lid_bottom = 6 * h / 7;
        let lid = (h / 7).max(defaults::MIN_LID_HEIGHT).min(h - lid_bottom);
        part(
            canvas,
            frame,
            origin,
            (w / 10, lid_bottom),
            (4 * w / 5, lid),
            Color::DARK_GRAY,
            Color::DARK_GRAY,
        );
        // contents
        part(canvas, frame, origin, (0, 0), (w, 54 * h / 70), self.contents, Color::BLACK);
        // label
        part(
            canvas,
            frame,
            origin,
            (w / 4, 3 * h / 14),
            (w / 2, 3 * h / 7),
            Color::YELLOW,
            Color::BLACK,
        );
    }
}

// ============================================================================
// Salt
// ============================================================================

/// A heap of salt drawn as an equilateral triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Salt {
    pub slot: Slot,
    pub origin: Coordinate,
    pub side: u32,
    pub color: Color,
}

impl Salt {
    pub fn new<R: Rng + ?Sized>(slot: Slot, frame: &Frame, rng: &mut R) -> Self {
        let color = Color::random_gray(rng);
        let mut side = slot.width;
        let mut origin = slot.origin;
        // Too wide a heap would poke through the shelf above: narrow it until
        // its height fits and keep it centered in the slot.
        if !triangle_fits(side, slot.height) {
            side = widest_triangle(slot.height);
            origin = origin.offset(frame, ((slot.width - side) / 2) as f64, 0.0);
        }
        Salt { slot, origin, side, color }
    }

    fn draw(&self, frame: &Frame, canvas: &mut dyn Canvas) {
        canvas.triangle(
            frame.to_device(self.origin),
            self.side as f64,
            self.color,
            Color::BLACK,
        );
    }
}

// ============================================================================
// Beer
// ============================================================================

/// Beer bottle with a label and a cap.
#[derive(Clone, Debug, PartialEq)]
pub struct Beer {
    pub slot: Slot,
    pub origin: Coordinate,
    pub width: u32,
    pub height: u32,
    pub glass: Color,
    pub label: Color,
    /// Usually the label color; occasionally its own.
    pub cap: Color,
}

impl Beer {
    pub fn new<R: Rng + ?Sized>(slot: Slot, frame: &Frame, rng: &mut R) -> Self {
        let glass = Color::random_bottle(rng);
        let label = Color::random(rng);
        let odd_cap = Color::random(rng);

        let (mut width, mut height, mut origin) = (slot.width, slot.height, slot.origin);
        if height > 2 * width {
            height = rng.random_range(2 * width..=height);
        } else {
            // Bottles are at least twice as tall as wide.
            width = height / 2;
            origin = origin.offset(frame, ((slot.width - width) / 2) as f64, 0.0);
        }

        let (numerator, denominator) = defaults::ODD_CAP_RATIO;
        let cap = if rng.random_ratio(numerator, denominator) {
            odd_cap
        } else {
            label
        };

        Beer {
            slot,
            origin,
            width,
            height,
            glass,
            label,
            cap,
        }
    }

    fn draw(&self, frame: &Frame, canvas: &mut dyn Canvas) {
        let (w, h) = (self.width, self.height);

        canvas.bottle(
            frame.to_device(self.origin),
            Size::from((w, h)),
            self.glass,
            Color::BLACK,
        );
        part(canvas, frame, self.origin, (0, h / 6), (w, h / 4), self.label, Color::BLACK);
        part(
            canvas,
            frame,
            self.origin,
            (w / 3, 11 * h / 12),
            (w / 3, h / 12),
            self.cap,
            self.cap,
        );
    }
}
