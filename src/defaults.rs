//! Default settings, matching the hand-tuned look of the reference scene.

use crate::config::WindowSize;

pub const WINDOW: WindowSize = WindowSize { width: 1600, height: 900 };
pub const PADDING: f64 = 0.15;
pub const SEED: u64 = 677;
pub const RACK_THICKNESS: u32 = 5;
/// Chance that a bottle cap gets its own color instead of the label's.
pub const ODD_CAP_RATIO: (u32, u32) = (1, 10);
/// Lid height floor for very short jars.
pub const MIN_LID_HEIGHT: u32 = 3;
