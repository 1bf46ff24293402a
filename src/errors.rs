//! Error types with diagnostics using miette
//!
//! Every configuration problem is detected before the first rack is built, so
//! a run either produces a complete scene or nothing at all.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while turning window dimensions into a layout
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("window dimensions must be positive, got {width}x{height}")]
    #[diagnostic(code(cellar::config::non_positive_window))]
    NonPositiveWindow { width: u32, height: u32 },

    #[error("invalid window size: {input:?}")]
    #[diagnostic(
        code(cellar::config::window_syntax),
        help("window size is two positive integers separated by 'x', e.g. 1600x900")
    )]
    WindowSyntax { input: String },

    #[error("window {width}x{height} is larger than the screen ({screen_width}x{screen_height})")]
    #[diagnostic(
        code(cellar::config::exceeds_screen),
        help("pick a smaller --size or pass --no-screen-check")
    )]
    ExceedsScreen {
        width: u32,
        height: u32,
        screen_width: u32,
        screen_height: u32,
    },

    #[error("padding fraction {fraction} is out of range")]
    #[diagnostic(
        code(cellar::config::invalid_padding),
        help("padding is a fraction of each side in [0, 0.5)")
    )]
    InvalidPadding { fraction: f64 },

    #[error("padding leaves no drawable area ({width}x{height})")]
    #[diagnostic(code(cellar::config::padding_too_large))]
    PaddingTooLarge { width: i64, height: i64 },

    #[error("rack width {rack_width}px leaves no room between its {rack_thickness}px side bars")]
    #[diagnostic(
        code(cellar::config::rack_too_narrow),
        help("use a wider window, less padding or thinner racks")
    )]
    RackTooNarrow { rack_width: u32, rack_thickness: u32 },

    #[error("shelf height {shelf_height}px leaves no room above its {rack_thickness}px plank")]
    #[diagnostic(
        code(cellar::config::shelf_too_short),
        help("use a taller window, less padding or thinner racks")
    )]
    ShelfTooShort { shelf_height: u32, rack_thickness: u32 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors from the raster surface
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} surface")]
    #[diagnostic(code(cellar::render::surface))]
    Surface { width: u32, height: u32 },

    #[error("PNG encoding failed: {message}")]
    #[diagnostic(code(cellar::render::encode))]
    Encode { message: String },
}
