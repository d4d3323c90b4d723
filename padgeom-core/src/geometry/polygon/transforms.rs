use num_traits::NumCast;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ContourError, Result},
    geometry::{coord::Coord, vertex::Vertex},
};

use super::Polygon;

/// Affine placement step applied vertex by vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform<T> {
    /// Offset added to every vertex.
    Translate(Vertex<T>),
    /// Independent x and y factors.
    ScaleXY(Vertex<T>),
}

impl<T: Coord> Polygon<T> {
    pub fn transform(self, transform: &Transform<T>) -> Polygon<T> {
        let vertices = match *transform {
            Transform::Translate(v) => self.vertices.into_iter().map(|p| p + v).collect(),
            Transform::ScaleXY(s) => self.vertices.into_iter().map(|p| p.scale_by(s)).collect(),
        };
        Polygon { vertices }
    }

    pub fn scale(self, dx: T, dy: T) -> Polygon<T> {
        self.transform(&Transform::ScaleXY(Vertex::new(dx, dy)))
    }

    pub fn translate(self, x: T, y: T) -> Polygon<T> {
        self.transform(&Transform::Translate(Vertex::new(x, y)))
    }

    /// Casts every coordinate to `U`, then multiplies it by `factor`.
    pub fn convert<U: Coord>(&self, factor: U) -> Result<Polygon<U>> {
        let cast = |c: T| -> Result<U> {
            <U as NumCast>::from(c).ok_or_else(|| ContourError::CoordinateCast(c.to_string()))
        };
        let vertices = self
            .vertices
            .iter()
            .map(|v| Ok(Vertex::new(cast(v.x)? * factor, cast(v.y)? * factor)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon { vertices })
    }
}
