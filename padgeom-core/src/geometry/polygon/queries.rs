use itertools::Itertools;

use crate::{
    error::{ContourError, Result},
    geometry::{bbox::BBox, coord::Coord, vertex::Vertex},
};

use super::Polygon;

impl<T: Coord> Polygon<T> {
    /// Shoelace area; positive for counter-clockwise walks, negative for clockwise ones.
    pub fn signed_area(&self) -> f64 {
        let sum: f64 = self
            .vertices
            .iter()
            .copied()
            .circular_tuple_windows()
            .map(|(v0, v1)| v0.x.as_f64() * v1.y.as_f64() - v1.x.as_f64() * v0.y.as_f64())
            .sum();
        sum / 2.
    }

    pub fn is_counter_clockwise_oriented(&self) -> bool {
        self.signed_area() > 0.
    }

    /// Point-in-polygon by ray casting (odd number of crossings is inside).
    ///
    /// Points on the boundary, vertices included, are outside.
    pub fn is_inside(&self, x: f64, y: f64) -> Result<bool> {
        if !self.is_closed() {
            return Err(ContourError::OpenPolygon);
        }
        let mut crossings = 0;
        for (v0, v1) in self.edges() {
            let (x0, y0, x1, y1) = (v0.x.as_f64(), v0.y.as_f64(), v1.x.as_f64(), v1.y.as_f64());
            if on_segment(x, y, x0, y0, x1, y1) {
                return Ok(false);
            }

            // Half-open [y_min, y_max) so a vertex shared by two edges is counted once; skips horizontal edges.
            let (y_min, y_max) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
            if y < y_min || y >= y_max {
                continue;
            }
            let t = (y - y0) / (y1 - y0);
            let x_crossing = x0 + t * (x1 - x0);
            if x_crossing > x {
                crossings += 1;
            }
        }
        Ok(crossings % 2 == 1)
    }

    /// Min/max over all vertices; closure is not required.
    pub fn bbox(&self) -> Option<BBox<T>> {
        let (first, rest) = self.vertices.split_first()?;
        let init = BBox::new(first.x, first.x, first.y, first.y);
        Some(rest.iter().fold(init, |bbox, &Vertex { x, y }| bbox.union(&BBox::new(x, x, y, y))))
    }
}

fn on_segment(x: f64, y: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
    let cross = (x1 - x0) * (y - y0) - (y1 - y0) * (x - x0);
    cross == 0.
        && x0.min(x1) <= x
        && x <= x0.max(x1)
        && y0.min(y1) <= y
        && y <= y0.max(y1)
}
