//! Basic geometric types used by the layout engine and exporters.
//!
//! All layout coordinates are offsets from the canvas center. Absolute
//! canvas coordinates are only produced at the presentation boundary via
//! [`Size::center`].

use serde::{Deserialize, Serialize};

/// A 2D point, also used as a displacement vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both coordinates are finite (neither NaN nor infinite)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Squared length, avoiding the square root
    pub fn length_squared(self) -> f32 {
        self.x.mul_add(self.x, self.y * self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the absolute center point of an area of this size
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns true if both dimensions are finite and strictly positive
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Bounds of an area of the given size anchored at the origin
    pub fn from_size(size: Size) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: size.width,
            max_y: size.height,
        }
    }

    /// Bounds of a circle with the given center and radius
    pub fn from_circle(center: Point, radius: f32) -> Self {
        Self {
            min_x: center.x - radius,
            min_y: center.y - radius,
            max_x: center.x + radius,
            max_y: center.y + radius,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges this bounds with another, returning the smallest bounds containing both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds by `margin` on every side
    pub fn inflate(self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_hypot_and_distance() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.hypot(), 5.0);
        assert_eq!(point.length_squared(), 25.0);
        assert_eq!(Point::new(1.0, 1.0).distance(Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_size_center() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(size.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_size_is_valid() {
        assert!(Size::new(1.0, 1.0).is_valid());
        assert!(!Size::new(0.0, 10.0).is_valid());
        assert!(!Size::new(10.0, -1.0).is_valid());
        assert!(!Size::new(f32::NAN, 10.0).is_valid());
    }

    #[test]
    fn test_bounds_merge_and_inflate() {
        let a = Bounds::from_circle(Point::new(0.0, 0.0), 10.0);
        let b = Bounds::from_circle(Point::new(50.0, -20.0), 5.0);
        let merged = a.merge(&b).inflate(2.0);

        assert_eq!(merged.min_x(), -12.0);
        assert_eq!(merged.min_y(), -27.0);
        assert_eq!(merged.max_x(), 57.0);
        assert_eq!(merged.max_y(), 12.0);
        assert_eq!(merged.width(), 69.0);
        assert_eq!(merged.height(), 39.0);
    }

    #[test]
    fn test_bounds_from_size() {
        let bounds = Bounds::from_size(Size::new(800.0, 600.0));
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_y(), 600.0);
        assert_eq!(bounds.width(), 800.0);
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert!(approx_eq!(f32, a.distance(b), b.distance(a), epsilon = 1e-3));
        }

        #[test]
        fn prop_scale_scales_length(x in -100.0f32..100.0, y in -100.0f32..100.0, k in 0.0f32..10.0) {
            let p = Point::new(x, y);
            prop_assert!(approx_eq!(f32, p.scale(k).hypot(), p.hypot() * k, epsilon = 1e-2));
        }
    }
}
