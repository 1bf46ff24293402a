//! Outlines of the non-rectangular primitives, in device coordinates.

use glam::{DVec2, dvec2};

use crate::types::Size;

/// Height of an equilateral triangle with the given side.
pub fn triangle_height(side: f64) -> f64 {
    side * 3f64.sqrt() / 2.0
}

/// Whether a triangle with a whole-pixel `side` is no taller than `height`.
///
/// Compared exactly as `3·side² ≤ 4·height²`.
pub fn triangle_fits(side: u32, height: u32) -> bool {
    let (side, height) = (side as u128, height as u128);
    3 * side * side <= 4 * height * height
}

/// Widest whole-pixel side whose triangle fits under `height`.
pub fn widest_triangle(height: u32) -> u32 {
    let mut side = (height as f64 / triangle_height(1.0)) as u32;
    while !triangle_fits(side, height) {
        side -= 1;
    }
    while side < u32::MAX && triangle_fits(side + 1, height) {
        side += 1;
    }
    side
}

/// Apex-up equilateral triangle anchored at its left-bottom corner.
pub fn triangle_outline(origin: DVec2, side: f64) -> [DVec2; 3] {
    [
        origin,
        origin + dvec2(side / 2.0, triangle_height(side)),
        origin + dvec2(side, 0.0),
    ]
}

/// Bottle silhouette anchored at its left-bottom corner.
///
/// The body is full width up to half height, the shoulders slope in to the
/// neck over `w/3`, and the neck spans the middle third up to `11h/12`.
/// Break points land on whole pixels.
pub fn bottle_outline(origin: DVec2, size: Size) -> [DVec2; 8] {
    let Size { w, h } = size;
    let belly = (h / 2.0).floor();
    let neck_left = (w / 3.0).floor();
    let neck_right = (2.0 * w / 3.0).floor();
    let shoulder = belly + neck_left;
    let lip = (11.0 * h / 12.0).floor();
    [
        origin,
        origin + dvec2(0.0, belly),
        origin + dvec2(neck_left, shoulder),
        origin + dvec2(neck_left, lip),
        origin + dvec2(neck_right, lip),
        origin + dvec2(neck_right, shoulder),
        origin + dvec2(w, belly),
        origin + dvec2(w, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_equilateral() {
        let [a, b, c] = triangle_outline(dvec2(10.0, 20.0), 30.0);
        assert!((a.distance(b) - 30.0).abs() < 1e-9);
        assert!((b.distance(c) - 30.0).abs() < 1e-9);
        assert!((c.distance(a) - 30.0).abs() < 1e-9);
        assert_eq!(a.y, c.y);
        assert!(b.y > a.y);
    }

    #[test]
    fn widest_triangle_is_tight() {
        for height in 0..500 {
            let side = widest_triangle(height);
            assert!(triangle_fits(side, height));
            assert!(!triangle_fits(side + 1, height));
            assert!(triangle_height(side as f64) <= height as f64);
        }
        assert_eq!(widest_triangle(20), 23);
        assert!(!triangle_fits(24, 20));
    }

    #[test]
    fn bottle_stays_inside_its_box() {
        let origin = dvec2(5.0, 5.0);
        let size = Size::new(24.0, 60.0);
        for p in bottle_outline(origin, size) {
            assert!(p.x >= origin.x && p.x <= origin.x + size.w);
            assert!(p.y >= origin.y && p.y <= origin.y + size.h);
        }
        let outline = bottle_outline(origin, size);
        assert_eq!(outline[3], dvec2(13.0, 60.0));
        assert_eq!(outline[4], dvec2(21.0, 60.0));
    }
}
