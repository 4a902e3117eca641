use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate. `x` is the row and `y` the column.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotates a quarter turn clockwise around the origin.
    pub fn rotate_cw(self) -> Self {
        Self::new(self.y, self.x.wrapping_neg())
    }

    pub fn checked_rotate_cw(self) -> Option<Self> {
        Some(Self::new(self.y, self.x.checked_neg()?))
    }

    pub fn checked_add(self, other: Point) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }

    pub fn checked_sub(self, other: Point) -> Option<Self> {
        Some(Self::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
        ))
    }
}

// The operators wrap; bounds-sensitive callers use the checked forms.

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
