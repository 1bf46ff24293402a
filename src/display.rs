//! Best-effort physical screen resolution detection.

use std::process::Command;

use crate::log;

/// Asks `xrandr` for the current mode. `None` when it is missing, fails, or
/// prints something unexpected; callers then skip the screen size check.
pub fn detect_physical_resolution() -> Option<(u32, u32)> {
    let output = match Command::new("xrandr").output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            log::warn!(status = %output.status, "xrandr failed, skipping screen check");
            return None;
        }
        Err(e) => {
            log::warn!(error = %e, "xrandr unavailable, skipping screen check");
            return None;
        }
    };
    let resolution = parse_current_mode(&String::from_utf8_lossy(&output.stdout));
    log::debug!(?resolution, "screen resolution");
    resolution
}

/// Finds the mode line marked with `*` and reads its `WxH` column.
fn parse_current_mode(xrandr: &str) -> Option<(u32, u32)> {
    let line = xrandr.lines().find(|line| line.contains('*'))?;
    let mode = line.split_whitespace().next()?;
    let (w, h) = mode.split_once('x')?;
    // Interlaced modes carry a suffix, e.g. `1920x1080i`
    let h = h.trim_end_matches(|c: char| !c.is_ascii_digit());
    Some((w.parse().ok()?, h.parse().ok()?))
}
