//! Random subdivision of a span into width-bounded intervals.

use rand::Rng;

use crate::config::WidthBounds;

/// Fractional slice `[begin, end)` of a shelf's usable width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub begin: f64,
    pub end: f64,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.end - self.begin
    }

    /// Pixel column and width of this interval on a span of `width` pixels.
    ///
    /// Both edges are rounded, so consecutive intervals share an edge and the
    /// widths of a full partition add up to exactly `width`.
    pub fn to_pixels(&self, width: u32) -> (u32, u32) {
        let left = (self.begin * width as f64).round() as u32;
        let right = (self.end * width as f64).round() as u32;
        (left, right.saturating_sub(left))
    }
}

/// Splits `[begin, end]` into intervals no longer than `bounds.max` and no
/// shorter than `bounds.min`, in left-to-right order.
///
/// A span longer than the maximum is cut at a uniformly random point that
/// keeps at least `bounds.min` on either side, and both halves are split
/// again. The result is not uniform over all valid partitions; scenes are
/// tuned to the distribution this produces.
///
/// # Panics
///
/// If `bounds.max < 2 * bounds.min`, since a too-long span could then have
/// no valid cut.
pub fn partition<R: Rng + ?Sized>(
    rng: &mut R,
    begin: f64,
    end: f64,
    bounds: WidthBounds,
) -> Vec<Interval> {
    assert!(
        bounds.max >= 2.0 * bounds.min,
        "max width {} must be at least twice the min width {}",
        bounds.max,
        bounds.min
    );
    let mut out = Vec::new();
    split(rng, begin, end, bounds, &mut out);
    out
}

fn split<R: Rng + ?Sized>(
    rng: &mut R,
    begin: f64,
    end: f64,
    bounds: WidthBounds,
    out: &mut Vec<Interval>,
) {
    if end - begin > bounds.max {
        let cut = rng.random_range(begin + bounds.min..=end - bounds.min);
        split(rng, begin, cut, bounds, out);
        split(rng, cut, end, bounds, out);
    } else {
        out.push(Interval { begin, end });
    }
}
