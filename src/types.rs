//! Small value types shared by the layout and the render surfaces.

use std::fmt;

use rand::Rng;

/// 2D size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }
}

impl From<(u32, u32)> for Size {
    fn from((w, h): (u32, u32)) -> Self {
        Size::new(w as f64, h as f64)
    }
}

/// Opaque RGB color. Generated once and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::rgb(0xD3, 0xD3, 0xD3);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_GRAY: Color = Color::rgb(0xA2, 0xA2, 0xA2);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xE5, 0x7C);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Any color from the whole RGB cube.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::rgb(rng.random(), rng.random(), rng.random())
    }

    /// A light gray with every channel in `[0xCC, 0xFF]`.
    pub fn random_gray<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let v = rng.random_range(0xCC..=0xFF);
        Color::rgb(v, v, v)
    }

    /// Bottle glass: a slightly varied dark green or brown, evenly split.
    pub fn random_bottle<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Color::rgb(
                rng.random_range(0x00..=0x10),
                rng.random_range(0x70..=0x90),
                rng.random_range(0x00..=0x10),
            )
        } else {
            Color::rgb(
                rng.random_range(0x49..=0x69),
                rng.random_range(0x2C..=0x4C),
                rng.random_range(0x00..=0x2F),
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn color_display() {
        assert_eq!(Color::YELLOW.to_string(), "rgb(255,229,124)");
        assert_eq!(Color::BLACK.to_string(), "rgb(0,0,0)");
    }

    #[test]
    fn random_gray_is_light_and_neutral() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let c = Color::random_gray(&mut rng);
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
            assert!(c.r >= 0xCC);
        }
    }

    #[test]
    fn random_bottle_is_green_or_brown() {
        let mut rng = StdRng::seed_from_u64(2);
        let (mut green, mut brown) = (0, 0);
        for _ in 0..500 {
            let c = Color::random_bottle(&mut rng);
            if (0x70..=0x90).contains(&c.g) && c.r <= 0x10 && c.b <= 0x10 {
                green += 1;
            } else {
                assert!((0x49..=0x69).contains(&c.r), "unexpected glass {c}");
                assert!((0x2C..=0x4C).contains(&c.g), "unexpected glass {c}");
                assert!(c.b <= 0x2F, "unexpected glass {c}");
                brown += 1;
            }
        }
        assert!(green > 0 && brown > 0);
    }

    #[test]
    fn size_from_pixels() {
        assert_eq!(Size::from((3, 4)), Size::new(3.0, 4.0));
    }
}
