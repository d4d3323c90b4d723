use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast};

/// Numeric type usable as a polygon coordinate.
///
/// Integer coordinates describe contours on the unit pad grid, floating ones describe placed contours in
/// physical units.
pub trait Coord: Copy + Debug + Display + PartialOrd + Num + NumCast {
    fn as_f64(self) -> f64;
}

impl Coord for i32 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Coord for i64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Coord for f32 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Coord for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}
