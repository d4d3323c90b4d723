use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox<T> {
    pub xmin: T,
    pub xmax: T,
    pub ymin: T,
    pub ymax: T,
}

impl<T: Coord> BBox<T> {
    pub fn new(xmin: T, xmax: T, ymin: T, ymax: T) -> Self {
        BBox { xmin, xmax, ymin, ymax }
    }

    pub fn width(&self) -> T {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> T {
        self.ymax - self.ymin
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn union(&self, other: &BBox<T>) -> BBox<T> {
        BBox {
            xmin: min(self.xmin, other.xmin),
            xmax: max(self.xmax, other.xmax),
            ymin: min(self.ymin, other.ymin),
            ymax: max(self.ymax, other.ymax),
        }
    }

    /// Closed-interval containment (edges count as inside).
    pub fn contains(&self, x: T, y: T) -> bool {
        self.xmin <= x && x <= self.xmax && self.ymin <= y && y <= self.ymax
    }
}

// `PartialOrd` only, so no `Ord::min`/`max`.
fn min<T: Coord>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

fn max<T: Coord>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
