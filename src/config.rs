//! Layout configuration derived from the window size.
//!
//! [`LayoutBounds::derive`] is the pure part: padding, drawable area and the
//! count ranges. [`LayoutConfig::new`] validates the result, samples the
//! number of racks and picks the item width regime. Nothing here knows about
//! geometry beyond these numbers.

use std::str::FromStr;

use rand::Rng;

use crate::coords::Frame;
use crate::defaults;
use crate::errors::ConfigError;
use crate::log;

/// Window dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let size = WindowSize { width, height };
        size.validate()?;
        Ok(size)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::NonPositiveWindow {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Fails when the window does not fit on a detected screen.
    pub fn check_fits(&self, screen: Option<(u32, u32)>) -> Result<(), ConfigError> {
        match screen {
            Some((screen_width, screen_height))
                if self.width > screen_width || self.height > screen_height =>
            {
                Err(ConfigError::ExceedsScreen {
                    width: self.width,
                    height: self.height,
                    screen_width,
                    screen_height,
                })
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for WindowSize {
    type Err = ConfigError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1600x900`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || ConfigError::WindowSyntax { input: s.to_string() };
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(syntax)?;
        let width = w.trim().parse::<u32>().map_err(|_| syntax())?;
        let height = h.trim().parse::<u32>().map_err(|_| syntax())?;
        WindowSize::new(width, height)
    }
}

/// Four-sided padding in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Padding {
    /// The same fraction of the window on every side, floored to whole pixels.
    pub fn from_fraction(window: WindowSize, fraction: f64) -> Result<Self, ConfigError> {
        if !fraction.is_finite() || !(0.0..0.5).contains(&fraction) {
            return Err(ConfigError::InvalidPadding { fraction });
        }
        let horizontal = (fraction * window.width as f64) as u32;
        let vertical = (fraction * window.height as f64) as u32;
        Ok(Padding {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        })
    }
}

/// Inclusive range of counts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }

    pub fn contains(&self, n: u32) -> bool {
        (self.min..=self.max).contains(&n)
    }
}

/// Item width bounds as fractions of a shelf's width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthBounds {
    pub min: f64,
    pub max: f64,
}

impl WidthBounds {
    /// Used when there are few racks, so each shelf is wide.
    pub const SPARSE: WidthBounds = WidthBounds { min: 0.08, max: 0.18 };
    /// Used when racks are dense, so items would otherwise look tiny.
    pub const DENSE: WidthBounds = WidthBounds { min: 0.12, max: 0.27 };
}

/// Everything that follows from window size and padding alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBounds {
    pub drawable_width: u32,
    pub drawable_height: u32,
    pub racks: CountRange,
    pub shelves: CountRange,
    /// Rack counts below this get [`WidthBounds::SPARSE`].
    pub rack_threshold: u32,
}

impl LayoutBounds {
    pub fn derive(window: WindowSize, padding: Padding) -> Result<Self, ConfigError> {
        let width = window.width as i64 - padding.left as i64 - padding.right as i64;
        let height = window.height as i64 - padding.top as i64 - padding.bottom as i64;
        if width < 1 || height < 1 {
            return Err(ConfigError::PaddingTooLarge { width, height });
        }
        let (drawable_width, drawable_height) = (width as u32, height as u32);

        let racks = CountRange {
            min: (drawable_width / 250).max(2),
            max: (drawable_width / 100).max(2),
        };
        let shelves = CountRange {
            min: (drawable_height / 90).max(3),
            max: (drawable_height / 40).max(3),
        };

        Ok(LayoutBounds {
            drawable_width,
            drawable_height,
            racks,
            shelves,
            rack_threshold: (racks.min + racks.max) / 2,
        })
    }
}

/// Immutable layout parameters for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    window: WindowSize,
    frame: Frame,
    padding: Padding,
    rack_thickness: u32,
    bounds: LayoutBounds,
    rack_count: u32,
    item_width: WidthBounds,
}

impl LayoutConfig {
    /// Validates the window and samples the rack count.
    ///
    /// Rack and shelf sizes are checked for the worst case (most racks, most
    /// shelves), before the count is drawn, so the outcome never depends on
    /// the seed.
    ///
    /// `screen` is the detected physical resolution, if any; the size check
    /// is skipped when it is `None`.
    pub fn new<R: Rng + ?Sized>(
        window: WindowSize,
        padding: Padding,
        rack_thickness: u32,
        screen: Option<(u32, u32)>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        window.validate()?;
        window.check_fits(screen)?;
        let bounds = LayoutBounds::derive(window, padding)?;

        // Even the densest rack count must leave room between the side bars,
        // and the cap shelf of the tallest stack must rise above its plank.
        let narrowest = bounds.drawable_width / bounds.racks.max;
        if narrowest <= 2 * rack_thickness {
            return Err(ConfigError::RackTooNarrow {
                rack_width: narrowest,
                rack_thickness,
            });
        }
        let shortest = bounds.drawable_height / bounds.shelves.max / 2;
        if shortest <= rack_thickness {
            return Err(ConfigError::ShelfTooShort {
                shelf_height: shortest,
                rack_thickness,
            });
        }

        let rack_count = bounds.racks.sample(rng);
        let item_width = if rack_count < bounds.rack_threshold {
            WidthBounds::SPARSE
        } else {
            WidthBounds::DENSE
        };

        log::info!(
            drawable_width = bounds.drawable_width,
            drawable_height = bounds.drawable_height,
            rack_count,
            rack_threshold = bounds.rack_threshold,
            item_min = item_width.min,
            item_max = item_width.max,
            "layout configured"
        );

        Ok(LayoutConfig {
            window,
            frame: Frame::new(window),
            padding,
            rack_thickness,
            bounds,
            rack_count,
            item_width,
        })
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn rack_thickness(&self) -> u32 {
        self.rack_thickness
    }

    pub fn bounds(&self) -> &LayoutBounds {
        &self.bounds
    }

    pub fn rack_count(&self) -> u32 {
        self.rack_count
    }

    pub fn item_width(&self) -> WidthBounds {
        self.item_width
    }
}

/// Top-level knobs for one generated scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    pub window: WindowSize,
    /// Fraction of the window kept empty on each side
    pub padding: f64,
    pub seed: u64,
    pub rack_thickness: u32,
    /// Compare the window against the detected screen resolution
    pub check_screen: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        SceneOptions {
            window: defaults::WINDOW,
            padding: defaults::PADDING,
            seed: defaults::SEED,
            rack_thickness: defaults::RACK_THICKNESS,
            check_screen: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn window(width: u32, height: u32) -> WindowSize {
        WindowSize::new(width, height).unwrap()
    }

    #[test]
    fn default_window_bounds() {
        let w = window(1600, 900);
        let padding = Padding::from_fraction(w, 0.15).unwrap();
        assert_eq!(
            padding,
            Padding { left: 240, right: 240, top: 135, bottom: 135 }
        );

        let bounds = LayoutBounds::derive(w, padding).unwrap();
        assert_eq!(bounds.drawable_width, 1120);
        assert_eq!(bounds.drawable_height, 630);
        assert_eq!(bounds.racks, CountRange { min: 4, max: 11 });
        assert_eq!(bounds.shelves, CountRange { min: 7, max: 15 });
        assert_eq!(bounds.rack_threshold, 7);
    }

    #[test]
    fn small_window_clamps_counts() {
        let w = window(300, 200);
        let bounds = LayoutBounds::derive(w, Padding::default()).unwrap();
        assert_eq!(bounds.racks, CountRange { min: 2, max: 3 });
        assert_eq!(bounds.shelves, CountRange { min: 3, max: 5 });
        assert_eq!(bounds.rack_threshold, 2);
    }

    #[test]
    fn regime_follows_rack_count() {
        let w = window(1600, 900);
        let padding = Padding::from_fraction(w, 0.15).unwrap();
        let mut seen_sparse = false;
        let mut seen_dense = false;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = LayoutConfig::new(w, padding, 5, None, &mut rng).unwrap();
            assert!(config.bounds().racks.contains(config.rack_count()));
            if config.rack_count() < 7 {
                assert_eq!(config.item_width(), WidthBounds::SPARSE);
                seen_sparse = true;
            } else {
                assert_eq!(config.item_width(), WidthBounds::DENSE);
                seen_dense = true;
            }
        }
        assert!(seen_sparse && seen_dense);
    }

    #[test]
    fn both_regimes_can_split() {
        for bounds in [WidthBounds::SPARSE, WidthBounds::DENSE] {
            assert!(bounds.max >= 2.0 * bounds.min);
        }
    }

    #[test]
    fn parse_window_size() {
        assert_eq!("1600x900".parse::<WindowSize>().unwrap(), window(1600, 900));
        assert_eq!(" 640X480 ".parse::<WindowSize>().unwrap(), window(640, 480));
        assert!(matches!(
            "1600.5x900".parse::<WindowSize>(),
            Err(ConfigError::WindowSyntax { .. })
        ));
        assert!(matches!(
            "-3x900".parse::<WindowSize>(),
            Err(ConfigError::WindowSyntax { .. })
        ));
        assert!(matches!(
            "1600".parse::<WindowSize>(),
            Err(ConfigError::WindowSyntax { .. })
        ));
        assert_eq!(
            "0x900".parse::<WindowSize>(),
            Err(ConfigError::NonPositiveWindow { width: 0, height: 900 })
        );
    }

    #[test]
    fn window_larger_than_screen() {
        let w = window(1600, 900);
        let padding = Padding::from_fraction(w, 0.15).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = LayoutConfig::new(w, padding, 5, Some((1280, 1024)), &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ExceedsScreen {
                width: 1600,
                height: 900,
                screen_width: 1280,
                screen_height: 1024
            }
        );
        assert!(LayoutConfig::new(w, padding, 5, Some((1920, 1080)), &mut rng).is_ok());
        assert!(LayoutConfig::new(w, padding, 5, None, &mut rng).is_ok());
    }

    #[test]
    fn padding_out_of_range() {
        let w = window(1600, 900);
        assert!(matches!(
            Padding::from_fraction(w, 0.5),
            Err(ConfigError::InvalidPadding { .. })
        ));
        assert!(matches!(
            Padding::from_fraction(w, -0.1),
            Err(ConfigError::InvalidPadding { .. })
        ));
        assert!(matches!(
            Padding::from_fraction(w, f64::NAN),
            Err(ConfigError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn padding_swallowing_the_window() {
        let w = window(100, 100);
        let padding = Padding { left: 60, right: 40, top: 0, bottom: 0 };
        assert_eq!(
            LayoutBounds::derive(w, padding),
            Err(ConfigError::PaddingTooLarge { width: 0, height: 100 })
        );
    }

    #[test]
    fn racks_too_narrow_for_thickness() {
        let w = window(1600, 900);
        let padding = Padding::from_fraction(w, 0.15).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        // 1120 / 11 racks = 101px, not enough for two 60px bars
        let err = LayoutConfig::new(w, padding, 60, None, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RackTooNarrow { rack_width: 101, rack_thickness: 60 }
        );
    }

    #[test]
    fn narrow_racks_rejected_for_every_seed() {
        let w = window(1600, 900);
        let padding = Padding::from_fraction(w, 0.15).unwrap();
        // Four racks would be 280px wide, but eleven are possible
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(matches!(
                LayoutConfig::new(w, padding, 60, None, &mut rng),
                Err(ConfigError::RackTooNarrow { rack_width: 101, .. })
            ));
        }
    }

    #[test]
    fn cap_shelf_too_short_for_thickness() {
        let w = window(1600, 900);
        let padding = Padding::from_fraction(w, 0.15).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        // 630 / 15 shelves = 42px pitch, cap shelf 21px
        let err = LayoutConfig::new(w, padding, 25, None, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ShelfTooShort { shelf_height: 21, rack_thickness: 25 }
        );
    }
}
