//! Procedurally generated cellar scenes.
//!
//! A scene is a row of racks, each holding a stack of shelves filled with
//! jars, salt heaps and beer bottles. Every size, count and color is drawn
//! from one seeded random source, so a seed and a window size fully
//! determine the picture.
//!
//! ```no_run
//! let options = cellar::SceneOptions::default();
//! let scene = cellar::generate(&options)?;
//! cellar::rasterize(&scene)?.save_png("cellar.png")?;
//! # Ok::<(), miette::Report>(())
//! ```

pub mod config;
pub mod coords;
pub mod defaults;
pub mod display;
pub mod errors;
pub mod log;
pub mod partition;
pub mod render;
pub mod scene;
pub mod types;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use config::{LayoutConfig, Padding, SceneOptions, WindowSize};
pub use errors::{ConfigError, RenderError};
pub use render::{Canvas, RasterCanvas, Recorder};
pub use scene::Scene;

/// Validate `options` and build the scene they describe.
///
/// Fails with a [`ConfigError`] before anything is built; there is no
/// partial scene.
pub fn generate(options: &SceneOptions) -> Result<Scene, miette::Report> {
    let window = options.window;
    let padding = Padding::from_fraction(window, options.padding)?;
    let screen = if options.check_screen {
        display::detect_physical_resolution()
    } else {
        None
    };

    let mut rng = StdRng::seed_from_u64(options.seed);
    log::debug!(seed = options.seed, ?window, "generating scene");
    let config = LayoutConfig::new(window, padding, options.rack_thickness, screen, &mut rng)?;
    Ok(Scene::build(config, &mut rng))
}

/// Draw `scene` onto a fresh raster surface the size of its window.
pub fn rasterize(scene: &Scene) -> Result<RasterCanvas, miette::Report> {
    let mut canvas = RasterCanvas::new(scene.config().window())?;
    scene.draw(&mut canvas);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(seed: u64) -> SceneOptions {
        SceneOptions {
            seed,
            check_screen: false,
            ..SceneOptions::default()
        }
    }

    #[test]
    fn generate_default_scene() {
        let scene = generate(&options(677)).unwrap();
        assert_eq!(scene.width(), 1120);
        assert_eq!(scene.height(), 630);
        assert!(scene.racks().len() >= 4 && scene.racks().len() <= 11);
    }

    #[test]
    fn generate_reports_bad_padding() {
        let err = generate(&SceneOptions {
            padding: 0.75,
            ..options(1)
        })
        .unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(config_err, &ConfigError::InvalidPadding { fraction: 0.75 });
    }

    #[test]
    fn generate_reports_tiny_window() {
        let err = generate(&SceneOptions {
            // 3px padding per side leaves 18px for two racks of 9px
            window: WindowSize { width: 24, height: 900 },
            ..options(1)
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::RackTooNarrow { .. })
        ));
    }
}
