use super::*;
use crate::geometry::{bbox::BBox, polygon::bbox};

#[test]
fn counter_clockwise_orientation() {
    let p = counter_clockwise_square();
    assert!(p.is_counter_clockwise_oriented());
    assert_relative_eq!(p.signed_area(), 1.0);
}

#[test]
fn clockwise_orientation() {
    let p = clockwise_square();
    assert!(!p.is_counter_clockwise_oriented());
    assert_relative_eq!(p.signed_area(), -1.0);
    assert_relative_eq!(p.signed_area().abs(), 1.0);
}

#[test]
fn clockwise_orientation_double() {
    let p: Polygon<f64> = Polygon::from_iter([(0., 0.), (0., 1.), (1., 1.), (1., 0.), (0., 0.)]);
    assert!(!p.is_counter_clockwise_oriented());
}

#[test]
fn orientation_agrees_with_signed_area() {
    for p in [staircase(), notched(), clockwise_square().convert(1.).unwrap()] {
        assert_eq!(p.is_counter_clockwise_oriented(), p.signed_area() > 0.);
    }
}

#[test]
fn signed_area() {
    assert_relative_eq!(staircase().signed_area(), 4.0, epsilon = 1e-9);
}

#[test]
fn closed_when_last_vertex_repeats_first() {
    assert!(clockwise_square().is_closed());
    let open: Polygon<i32> = Polygon::from_iter([(0, 0), (0, 1), (1, 1), (1, 0)]);
    assert!(!open.is_closed());
    assert!(!Polygon::<i32>::default().is_closed());
}

#[test]
fn bbox_creation() {
    assert_eq!(bbox(&notched()), Some(BBox::new(-5., 5., -10., 10.)));
}

#[test]
fn bbox_ignores_closure() {
    let open: Polygon<i32> = Polygon::from_iter([(3, 1), (7, 1), (7, -2)]);
    assert_eq!(open.bbox(), Some(BBox::new(3, 7, -2, 1)));
    assert_eq!(Polygon::<i32>::default().bbox(), None);
}

#[test]
fn display() {
    assert_eq!(
        counter_clockwise_square().to_string(),
        "Polygon[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)]"
    );
}
