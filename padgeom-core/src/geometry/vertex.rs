use std::{ops::Mul, fmt::{Display, Formatter, self}};
use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Add, Sub, Serialize, Deserialize)]
pub struct Vertex<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vertex<T> {
    pub fn new(x: T, y: T) -> Self {
        Vertex { x, y }
    }
}

impl<T> From<(T, T)> for Vertex<T> {
    fn from((x, y): (T, T)) -> Self {
        Vertex { x, y }
    }
}

impl<T: Display> Display for Vertex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl AbsDiffEq for Vertex<f64> {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vertex<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T: Mul<Output = T>> Vertex<T> {
    /// Multiplies x by `s.x` and y by `s.y`.
    pub fn scale_by(self, s: Vertex<T>) -> Self {
        Vertex::new(self.x * s.x, self.y * s.y)
    }
}
