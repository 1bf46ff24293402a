//! Authoring and device coordinate frames.
//!
//! Scene nodes store their left-bottom corners as [`Coordinate`]s in the
//! authoring frame, whose origin is the window's visual center. Render
//! surfaces consume the device frame, whose origin is the window's
//! left-bottom corner (y grows upwards in both).
//!
//! Summing two authoring-frame values subtracts the half-window offset twice.
//! The sum is therefore a [`Shifted`] value which has to be recentered before
//! it can be drawn or composed again; forgetting that step would move every
//! nested shape by half a window.

use std::ops::Add;

use glam::{DVec2, dvec2};

use crate::config::WindowSize;

/// Converts between the center-based authoring frame and the corner-based
/// device frame of one window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    half: DVec2,
}

impl Frame {
    pub fn new(window: WindowSize) -> Self {
        Frame {
            half: dvec2((window.width / 2) as f64, (window.height / 2) as f64),
        }
    }

    /// Authoring-frame value of a device-frame point.
    pub fn from_device(&self, x: f64, y: f64) -> Coordinate {
        Coordinate(dvec2(x, y) - self.half)
    }

    /// Device-frame position handed to render surfaces.
    pub fn to_device(&self, c: Coordinate) -> DVec2 {
        c.0 + self.half
    }
}

/// A point in the authoring frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate(DVec2);

impl Coordinate {
    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Moves this point by a device-space displacement.
    ///
    /// Equivalent to adding `frame.from_device(dx, dy)` and recentering.
    pub fn offset(self, frame: &Frame, dx: f64, dy: f64) -> Coordinate {
        (self + frame.from_device(dx, dy)).recenter(frame)
    }
}

/// The sum of two authoring-frame values, shifted by one extra half window.
///
/// Deliberately has no accessors: the only way out is [`Shifted::recenter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use = "a shifted coordinate is off by half a window until recentered"]
pub struct Shifted(DVec2);

impl Shifted {
    pub fn recenter(self, frame: &Frame) -> Coordinate {
        Coordinate(self.0 + frame.half)
    }
}

impl Add for Coordinate {
    type Output = Shifted;

    fn add(self, rhs: Coordinate) -> Shifted {
        Shifted(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(WindowSize { width: 1600, height: 900 })
    }

    #[test]
    fn device_round_trip() {
        let f = frame();
        let c = f.from_device(240.0, 135.0);
        assert_eq!(c.x(), -560.0);
        assert_eq!(c.y(), -315.0);
        assert_eq!(f.to_device(c), dvec2(240.0, 135.0));
    }

    #[test]
    fn recentered_sum_matches_device_sum() {
        let f = frame();
        let a = f.from_device(100.0, 50.0);
        let b = f.from_device(30.0, 7.0);
        let sum = (a + b).recenter(&f);
        assert_eq!(f.to_device(sum), dvec2(130.0, 57.0));
    }

    #[test]
    fn offset_composes_without_drift() {
        let f = frame();
        let origin = f.from_device(240.0, 135.0);
        let nested = origin
            .offset(&f, 10.0, 0.0)
            .offset(&f, 5.0, 20.0)
            .offset(&f, 0.0, 3.0);
        assert_eq!(f.to_device(nested), dvec2(255.0, 158.0));
    }

    #[test]
    fn odd_window_uses_integer_half() {
        let f = Frame::new(WindowSize { width: 101, height: 51 });
        let c = f.from_device(0.0, 0.0);
        assert_eq!(c.x(), -50.0);
        assert_eq!(c.y(), -25.0);
    }
}
