use crate::mapping::pad::{DualSampaId, PadGroupTypeId, PadSizeId};

/// Broad failure category of a [`ContourError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The geometry itself is unsupported: non-Manhattan boundary, hole, disconnected footprint.
    StructuralViolation,
    /// The operation is undefined for the value's current state (e.g. containment on an open polygon).
    InvalidState,
    /// An id with no registered definition.
    LookupFailure,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContourError {
    #[error("Cannot close an empty polygon")]
    EmptyPolygon,

    #[error("Zero-length edge at index {index} (repeated consecutive vertex)")]
    DegenerateEdge { index: usize },

    #[error("Edge {index} is not axis-aligned")]
    DiagonalEdge { index: usize },

    #[error("Edge {index} and the edge after it share an axis")]
    ConsecutiveParallelEdges { index: usize },

    #[error("Coordinate {0} is not representable in the target type")]
    CoordinateCast(String),

    #[error("Cell ({ix}, {iy}) has a corner outside the coordinate range")]
    CellOutOfRange { ix: i32, iy: i32 },

    #[error("Pad group type footprint has no cells")]
    EmptyFootprint,

    #[error("Boundary branches at vertex ({x}, {y}): cells touch only at a corner")]
    BranchingBoundary { x: i32, y: i32 },

    #[error("Boundary does not reduce to a single closed walk: walked {walked} of {total} boundary edges")]
    DisconnectedBoundary { walked: usize, total: usize },

    #[error("Containment query on an open polygon")]
    OpenPolygon,

    #[error("Unknown pad group type id: {0}")]
    UnknownPadGroupType(PadGroupTypeId),

    #[error("Unknown pad size id: {0}")]
    UnknownPadSize(PadSizeId),

    #[error("Unknown dual SAMPA id: {0}")]
    UnknownDualSampa(DualSampaId),

    #[error("Channel {0} out of range [0, 64)")]
    ChannelOutOfRange(usize),
}

impl ContourError {
    pub fn kind(&self) -> ErrorKind {
        use ContourError::*;
        match self {
            EmptyPolygon
            | DegenerateEdge { .. }
            | DiagonalEdge { .. }
            | ConsecutiveParallelEdges { .. }
            | CoordinateCast(_)
            | CellOutOfRange { .. }
            | EmptyFootprint
            | BranchingBoundary { .. }
            | DisconnectedBoundary { .. } => ErrorKind::StructuralViolation,
            OpenPolygon => ErrorKind::InvalidState,
            UnknownPadGroupType(_)
            | UnknownPadSize(_)
            | UnknownDualSampa(_)
            | ChannelOutOfRange(_) => ErrorKind::LookupFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContourError>;
