use log::debug;

use crate::{
    error::{ContourError, Result},
    geometry::{coord::Coord, vertex::Vertex},
};

use super::Polygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn axis<T: Coord>(index: usize, v0: Vertex<T>, v1: Vertex<T>) -> Result<Axis> {
    match (v0.x == v1.x, v0.y == v1.y) {
        (true, true) => Err(ContourError::DegenerateEdge { index }),
        (false, true) => Ok(Axis::Horizontal),
        (true, false) => Ok(Axis::Vertical),
        (false, false) => Err(ContourError::DiagonalEdge { index }),
    }
}

impl<T: Coord> Polygon<T> {
    /// Returns a closed copy of this polygon.
    ///
    /// An already-closed polygon is returned as is, without revalidation. Otherwise the first vertex is
    /// appended and the whole cycle must alternate strictly between horizontal and vertical edges.
    pub fn close(&self) -> Result<Polygon<T>> {
        if self.is_closed() {
            return Ok(self.clone());
        }
        let first = *self.vertices.first().ok_or(ContourError::EmptyPolygon)?;
        let mut vertices = self.vertices.clone();
        vertices.push(first);
        let closed = Polygon { vertices };
        closed.check_manhattan()?;
        Ok(closed)
    }

    /// Every edge axis-aligned and non-degenerate, and no two consecutive edges (wrapping around) on the
    /// same axis.
    fn check_manhattan(&self) -> Result<()> {
        let axes = self
            .edges()
            .enumerate()
            .map(|(index, (v0, v1))| axis(index, v0, v1))
            .collect::<Result<Vec<_>>>()?;
        let n = axes.len();
        for index in 0..n {
            if axes[index] == axes[(index + 1) % n] {
                debug!("close: edges {} and {} of {} are both {:?}", index, (index + 1) % n, self, axes[index]);
                return Err(ContourError::ConsecutiveParallelEdges { index });
            }
        }
        Ok(())
    }
}
