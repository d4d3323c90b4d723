//! Outline of a union of unit grid cells.
//!
//! Each cell contributes its four edges, walked counter-clockwise. An edge shared by two cells is
//! interior and cancels out; the remaining boundary edges chain into a single closed walk, which is then
//! stripped of collinear vertices.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{
    error::{ContourError, Result},
    geometry::{polygon::Polygon, vertex::Vertex},
    mapping::pad::{PadCell, PadGroupType},
};

type V = Vertex<i32>;

/// Accumulates the cells of one footprint, then computes its contour.
#[derive(Debug, Clone, Default)]
pub struct ContourBuilder {
    cells: BTreeSet<PadCell>,
}

impl ContourBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells<C: Into<PadCell>>(cells: impl IntoIterator<Item = C>) -> Self {
        ContourBuilder {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, cell: PadCell) -> &mut Self {
        self.cells.insert(cell);
        self
    }

    /// Closed, counter-clockwise outline of the union of the cells, with the fewest possible vertices.
    ///
    /// Fails if the footprint is empty, if cells touch only at a corner, or if the boundary is made of
    /// several walks (disconnected cells, or a hole).
    pub fn build(&self) -> Result<Polygon<i32>> {
        if self.cells.is_empty() {
            return Err(ContourError::EmptyFootprint);
        }
        let boundary = self.boundary_edges()?;
        let walk = walk(&boundary)?;
        let vertices = merge_collinear(&walk);
        let mut contour = Polygon::new(vertices);
        if contour.signed_area() < 0. {
            contour.vertices.reverse();
        }
        let contour = contour.close()?;
        debug!(
            "ContourBuilder: {} cells, {} boundary edges, {} vertices",
            self.cells.len(),
            boundary.len(),
            contour.num_vertices() - 1,
        );
        Ok(contour)
    }

    /// Edges touched by exactly one cell, keeping each cell's counter-clockwise direction.
    fn boundary_edges(&self) -> Result<Vec<(V, V)>> {
        let mut tally: BTreeMap<(V, V), (usize, (V, V))> = BTreeMap::new();
        for cell in &self.cells {
            for (from, to) in unit_edges(cell)? {
                let key = if from < to { (from, to) } else { (to, from) };
                tally.entry(key).or_insert((0, (from, to))).0 += 1;
            }
        }
        Ok(tally
            .into_values()
            .filter(|(count, _)| *count == 1)
            .map(|(_, edge)| edge)
            .collect())
    }
}

/// Contour of a pad group type's connected cells.
pub fn build_contour(pad_group_type: &PadGroupType) -> Result<Polygon<i32>> {
    ContourBuilder::from_cells(pad_group_type.cells()).build()
}

fn unit_edges(&PadCell { ix, iy }: &PadCell) -> Result<[(V, V); 4]> {
    // The far corner must stay representable.
    let (ix1, iy1) = match (ix.checked_add(1), iy.checked_add(1)) {
        (Some(ix1), Some(iy1)) => (ix1, iy1),
        _ => return Err(ContourError::CellOutOfRange { ix, iy }),
    };
    let (v00, v10, v11, v01) = (
        Vertex::new(ix, iy),
        Vertex::new(ix1, iy),
        Vertex::new(ix1, iy1),
        Vertex::new(ix, iy1),
    );
    Ok([(v00, v10), (v10, v11), (v11, v01), (v01, v00)])
}

/// Chains directed edges end to start, from the smallest vertex, until back at the start.
fn walk(edges: &[(V, V)]) -> Result<Vec<V>> {
    let mut next: BTreeMap<V, V> = BTreeMap::new();
    for &(from, to) in edges {
        if next.insert(from, to).is_some() {
            return Err(ContourError::BranchingBoundary { x: from.x, y: from.y });
        }
    }
    let total = edges.len();
    let (&start, _) = next.first_key_value().ok_or(ContourError::EmptyFootprint)?;
    let mut vertices = vec![start];
    let mut current = start;
    loop {
        current = *next
            .get(&current)
            .ok_or(ContourError::DisconnectedBoundary { walked: vertices.len(), total })?;
        if current == start {
            break;
        }
        vertices.push(current);
        if vertices.len() > total {
            return Err(ContourError::DisconnectedBoundary { walked: vertices.len(), total });
        }
    }
    if vertices.len() != total {
        return Err(ContourError::DisconnectedBoundary { walked: vertices.len(), total });
    }
    Ok(vertices)
}

/// Drops every vertex whose incoming and outgoing edges point the same way.
fn merge_collinear(cycle: &[V]) -> Vec<V> {
    let n = cycle.len();
    (0..n)
        .filter(|&i| {
            let prev = cycle[(i + n - 1) % n];
            let cur = cycle[i];
            let next = cycle[(i + 1) % n];
            cur - prev != next - cur
        })
        .map(|i| cycle[i])
        .collect()
}
