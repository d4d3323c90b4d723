mod close;
mod queries;
mod transforms;

pub use transforms::Transform;

use std::fmt::Display;

use derive_more::From;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    geometry::{bbox::BBox, coord::Coord, vertex::Vertex},
};

/// Ordered sequence of 2D vertices; insertion order is the boundary walk direction.
///
/// A polygon is *closed* when its last vertex repeats its first one, *open* otherwise. Only closed
/// polygons answer containment queries; see [`Polygon::close`].
#[derive(Debug, Clone, Default, From, Serialize, Deserialize)]
pub struct Polygon<T> {
    pub vertices: Vec<Vertex<T>>,
}

impl<T> Polygon<T> {
    pub fn new(vertices: Vec<Vertex<T>>) -> Self {
        Polygon { vertices }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<T> FromIterator<(T, T)> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Polygon { vertices: iter.into_iter().map(Vertex::from).collect() }
    }
}

impl<T: PartialEq> Polygon<T> {
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Vertices of the boundary cycle, without the repeated closing vertex.
    fn cycle(&self) -> &[Vertex<T>] {
        if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }
}

impl<T: Copy> Polygon<T> {
    /// Consecutive vertex pairs, in walk order. For a closed polygon this covers the full boundary.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex<T>, Vertex<T>)> + '_ {
        self.vertices.iter().copied().tuple_windows()
    }
}

/// Same closure state, and vertex cycles related by a rotation (any start vertex, same direction).
impl<T: PartialEq> PartialEq for Polygon<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_closed() != other.is_closed() {
            return false;
        }
        let (a, b) = (self.cycle(), other.cycle());
        if a.len() != b.len() {
            return false;
        }
        if a.is_empty() {
            return true;
        }
        let n = a.len();
        (0..n).any(|shift| a.iter().cycle().skip(shift).take(n).eq(b.iter()))
    }
}

impl<T: Display> Display for Polygon<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Polygon[{}]", self.vertices.iter().join(", "))
    }
}

/// Closed copy of `polygon`; see [`Polygon::close`].
pub fn close<T: Coord>(polygon: &Polygon<T>) -> Result<Polygon<T>> {
    polygon.close()
}

/// Bounding box of `polygon`, `None` if it has no vertices.
pub fn bbox<T: Coord>(polygon: &Polygon<T>) -> Option<BBox<T>> {
    polygon.bbox()
}

#[cfg(test)]
mod tests;
