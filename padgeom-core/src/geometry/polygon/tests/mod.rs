mod basic;

use crate::geometry::polygon::Polygon;

pub(crate) fn counter_clockwise_square() -> Polygon<i32> {
    Polygon::from_iter([(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)])
}

pub(crate) fn clockwise_square() -> Polygon<i32> {
    Polygon::from_iter([(0, 0), (0, 1), (1, 1), (1, 0), (0, 0)])
}

/// Two unit-offset 1x2 blocks forming a staircase, area 4.
pub(crate) fn staircase() -> Polygon<f64> {
    Polygon::from_iter([
        (0.1, 0.1),
        (1.1, 0.1),
        (1.1, 1.1),
        (2.1, 1.1),
        (2.1, 3.1),
        (1.1, 3.1),
        (1.1, 2.1),
        (0.1, 2.1),
        (0.1, 0.1),
    ])
}

/// Six corners, x in [-5, 5], y in [-10, 10], notch at the lower left.
pub(crate) fn notched() -> Polygon<f64> {
    Polygon::from_iter([
        (-5., 10.),
        (-5., -2.),
        (0., -2.),
        (0., -10.),
        (5., -10.),
        (5., 10.),
        (-5., 10.),
    ])
}
