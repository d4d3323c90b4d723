use std::collections::BTreeMap;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};

use super::pad::{PadGroupType, PadGroupTypeId, PadSize, PadSizeId};

/// Definitions of the pad group types and pad sizes a segmentation may reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pad_group_types: BTreeMap<PadGroupTypeId, PadGroupType>,
    pad_sizes: BTreeMap<PadSizeId, PadSize>,
}

/// On-disk layout: plain lists, ids inside each entry.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSpec {
    #[serde(default)]
    pad_group_types: Vec<PadGroupType>,
    #[serde(default)]
    pad_sizes: Vec<PadSize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a pad group type.
    pub fn with_pad_group_type(mut self, pad_group_type: PadGroupType) -> Self {
        self.pad_group_types.insert(pad_group_type.id, pad_group_type);
        self
    }

    /// Adds (or replaces) a pad size.
    pub fn with_pad_size(mut self, pad_size: PadSize) -> Self {
        self.pad_sizes.insert(pad_size.id, pad_size);
        self
    }

    /// Parses `{"padGroupTypes": [...], "padSizes": [...]}`. Duplicate ids are rejected.
    pub fn from_json(json: &str) -> anyhow::Result<Catalog> {
        let spec: CatalogSpec = serde_json::from_str(json).context("parsing pad geometry catalog")?;
        let mut catalog = Catalog::new();
        for pgt in spec.pad_group_types {
            if catalog.pad_group_types.contains_key(&pgt.id) {
                bail!("duplicate pad group type id {}", pgt.id);
            }
            catalog.pad_group_types.insert(pgt.id, pgt);
        }
        for size in spec.pad_sizes {
            if catalog.pad_sizes.contains_key(&size.id) {
                bail!("duplicate pad size id {}", size.id);
            }
            catalog.pad_sizes.insert(size.id, size);
        }
        Ok(catalog)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let spec = CatalogSpec {
            pad_group_types: self.pad_group_types.values().cloned().collect(),
            pad_sizes: self.pad_sizes.values().copied().collect(),
        };
        Ok(serde_json::to_string(&spec)?)
    }

    pub fn pad_group_type(&self, id: PadGroupTypeId) -> Result<&PadGroupType> {
        self.pad_group_types.get(&id).ok_or(ContourError::UnknownPadGroupType(id))
    }

    pub fn pad_size(&self, id: PadSizeId) -> Result<&PadSize> {
        self.pad_sizes.get(&id).ok_or(ContourError::UnknownPadSize(id))
    }

    pub fn pad_group_types(&self) -> impl Iterator<Item = &PadGroupType> {
        self.pad_group_types.values()
    }

    pub fn pad_sizes(&self) -> impl Iterator<Item = &PadSize> {
        self.pad_sizes.values()
    }
}
