use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};

pub type PadGroupTypeId = u32;
pub type PadSizeId = u32;
pub type DualSampaId = u32;

/// Number of readout channels of one dual SAMPA front-end chip.
pub const NOF_CHANNELS: usize = 64;

/// Unit grid cell of a pad group type footprint, by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PadCell {
    pub ix: i32,
    pub iy: i32,
}

impl PadCell {
    pub fn new(ix: i32, iy: i32) -> Self {
        PadCell { ix, iy }
    }
}

impl From<(i32, i32)> for PadCell {
    fn from((ix, iy): (i32, i32)) -> Self {
        PadCell { ix, iy }
    }
}

/// Reusable footprint shared by every pad group of this type.
///
/// `channels[ch]` is the cell read out by channel `ch`, `None` for an unconnected channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PadGroupType {
    pub id: PadGroupTypeId,
    pub channels: Vec<Option<PadCell>>,
}

impl PadGroupType {
    pub fn new(id: PadGroupTypeId, channels: Vec<Option<PadCell>>) -> Self {
        PadGroupType { id, channels }
    }

    /// Every cell connected, channel `i` reading `cells[i]`.
    pub fn from_cells<C: Into<PadCell>>(id: PadGroupTypeId, cells: impl IntoIterator<Item = C>) -> Self {
        PadGroupType {
            id,
            channels: cells.into_iter().map(|c| Some(c.into())).collect(),
        }
    }

    /// Connected cells, in channel order.
    pub fn cells(&self) -> impl Iterator<Item = PadCell> + '_ {
        self.channels.iter().flatten().copied()
    }

    pub fn nof_pads(&self) -> usize {
        self.cells().count()
    }

    pub fn has_pad_by_channel(&self, channel: usize) -> Result<bool> {
        if channel >= NOF_CHANNELS {
            return Err(ContourError::ChannelOutOfRange(channel));
        }
        Ok(matches!(self.channels.get(channel), Some(Some(_))))
    }
}

/// Physical width and height of one pad cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadSize {
    pub id: PadSizeId,
    pub width: f64,
    pub height: f64,
}

impl PadSize {
    pub fn new(id: PadSizeId, width: f64, height: f64) -> Self {
        PadSize { id, width, height }
    }
}

/// Placed instance of a pad group type, read out by one dual SAMPA chip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PadGroup {
    pub fec_id: DualSampaId,
    pub pad_group_type_id: PadGroupTypeId,
    pub pad_size_id: PadSizeId,
    pub x: f64,
    pub y: f64,
}
