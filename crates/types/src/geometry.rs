//! Grid geometry: integer points and the discrete rays between them.
//!
//! [`Ray`] is the only distance primitive the simulation uses. Two cells are
//! neighbours when the ray between them has exactly two points.

use std::fmt;

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Largest absolute coordinate delta to `other`.
    pub fn chebyshev(self, other: Point) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Discrete line from a start point to an end point, both inclusive.
///
/// The ray steps diagonally while both axes still need to move, then runs
/// straight along whichever axis has distance left. Points are materialised
/// on construction, so a ray can be walked any number of times.
///
/// `Ray::new(a, a)` is empty; otherwise `len() == a.chebyshev(b) + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ray {
    points: Vec<Point>,
}

impl Ray {
    pub fn new(a: Point, b: Point) -> Self {
        if a == b {
            return Self::default();
        }

        let x_dir = (b.x - a.x).signum();
        let y_dir = (b.y - a.y).signum();

        let mut points = Vec::with_capacity(a.chebyshev(b) as usize + 1);
        let mut at = a;
        loop {
            points.push(at);
            if at == b {
                break;
            }
            if at.x != b.x {
                at.x += x_dir;
            }
            if at.y != b.y {
                at.y += y_dir;
            }
        }

        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Ray {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// True when `a` and `b` are distinct and touch, diagonals included.
pub fn adjacent(a: Point, b: Point) -> bool {
    Ray::new(a, b).len() == 2
}
