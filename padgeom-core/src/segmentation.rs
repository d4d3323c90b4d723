//! Placed pad group contours of one detector segmentation.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    contour::cache::ContourCache,
    error::{ContourError, Result},
    geometry::{bbox::BBox, polygon::Polygon},
    mapping::{
        catalog::Catalog,
        pad::{DualSampaId, PadGroup, PadGroupType, PadGroupTypeId, PadSize, PadSizeId, NOF_CHANNELS},
    },
};

/// Pad groups making up one segmentation (one plane of one detection element type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationDef {
    pub seg_type: u32,
    pub is_bending_plane: bool,
    pub pad_groups: Vec<PadGroup>,
}

/// Unit-grid contour scaled to physical pad size, then moved to `(x, y)`.
pub fn place_contour(contour: &Polygon<i32>, pad_size: &PadSize, x: f64, y: f64) -> Result<Polygon<f64>> {
    Ok(contour.convert(1.)?.scale(pad_size.width, pad_size.height).translate(x, y))
}

/// One placed contour per pad group, in pad group order.
///
/// Any unknown pad group type or pad size fails the whole assembly.
pub fn assemble_contours(pad_groups: &[PadGroup], catalog: &Catalog, cache: &ContourCache) -> Result<Vec<Polygon<f64>>> {
    pad_groups
        .iter()
        .map(|pg| {
            let pad_group_type = catalog.pad_group_type(pg.pad_group_type_id)?;
            let pad_size = catalog.pad_size(pg.pad_size_id)?;
            let contour = cache.contour(pad_group_type)?;
            place_contour(&contour, pad_size, pg.x, pg.y)
        })
        .collect()
}

/// Self-contained segmentation: keeps copies of the pad group types and pad sizes it uses, so it does not
/// depend on the [`Catalog`] it was built from.
#[derive(Debug, Clone)]
pub struct Segmentation {
    seg_type: u32,
    is_bending_plane: bool,
    pad_groups: Vec<PadGroup>,
    contours: Vec<Polygon<f64>>,
    pad_group_types: BTreeMap<PadGroupTypeId, PadGroupType>,
    pad_sizes: BTreeMap<PadSizeId, PadSize>,
    dual_sampa_ids: BTreeSet<DualSampaId>,
}

impl Segmentation {
    pub fn new(def: SegmentationDef, catalog: &Catalog, cache: &ContourCache) -> Result<Segmentation> {
        let SegmentationDef { seg_type, is_bending_plane, pad_groups } = def;
        let contours = assemble_contours(&pad_groups, catalog, cache)?;

        let mut pad_group_types = BTreeMap::new();
        let mut pad_sizes = BTreeMap::new();
        for pg in &pad_groups {
            pad_group_types
                .entry(pg.pad_group_type_id)
                .or_insert(catalog.pad_group_type(pg.pad_group_type_id)?.clone());
            pad_sizes.entry(pg.pad_size_id).or_insert(*catalog.pad_size(pg.pad_size_id)?);
        }
        let dual_sampa_ids = pad_groups.iter().map(|pg| pg.fec_id).collect();

        debug!(
            "Segmentation {} ({}): {} pad groups, {} pad group types, {} pad sizes",
            seg_type,
            if is_bending_plane { "bending" } else { "non-bending" },
            pad_groups.len(),
            pad_group_types.len(),
            pad_sizes.len(),
        );
        Ok(Segmentation {
            seg_type,
            is_bending_plane,
            pad_groups,
            contours,
            pad_group_types,
            pad_sizes,
            dual_sampa_ids,
        })
    }

    pub fn seg_type(&self) -> u32 {
        self.seg_type
    }

    pub fn is_bending_plane(&self) -> bool {
        self.is_bending_plane
    }

    /// Number of pad groups.
    pub fn len(&self) -> usize {
        self.pad_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pad_groups.is_empty()
    }

    pub fn pad_groups(&self) -> &[PadGroup] {
        &self.pad_groups
    }

    pub fn pad_group(&self, index: usize) -> Option<&PadGroup> {
        self.pad_groups.get(index)
    }

    /// Placed contours; `contours()[i]` outlines `pad_groups()[i]`.
    pub fn contours(&self) -> &[Polygon<f64>] {
        &self.contours
    }

    pub fn contour(&self, index: usize) -> Option<&Polygon<f64>> {
        self.contours.get(index)
    }

    pub fn pad_size(&self, id: PadSizeId) -> Option<&PadSize> {
        self.pad_sizes.get(&id)
    }

    pub fn dual_sampa_ids(&self) -> &BTreeSet<DualSampaId> {
        &self.dual_sampa_ids
    }

    pub fn nof_dual_sampas(&self) -> usize {
        self.dual_sampa_ids.len()
    }

    /// Indices of the pad groups read out by one dual SAMPA.
    pub fn pad_group_indices(&self, dual_sampa_id: DualSampaId) -> Vec<usize> {
        self.pad_groups
            .iter()
            .enumerate()
            .filter(|(_, pg)| pg.fec_id == dual_sampa_id)
            .map(|(i, _)| i)
            .collect()
    }

    fn pad_group_type(&self, pg: &PadGroup) -> &PadGroupType {
        // Every referenced type was copied in `new`.
        &self.pad_group_types[&pg.pad_group_type_id]
    }

    pub fn nof_pads(&self) -> usize {
        self.pad_groups.iter().map(|pg| self.pad_group_type(pg).nof_pads()).sum()
    }

    /// Whether `channel` of `dual_sampa_id` is connected to a pad.
    pub fn has_pad_by_fee(&self, dual_sampa_id: DualSampaId, channel: usize) -> Result<bool> {
        if channel >= NOF_CHANNELS {
            return Err(ContourError::ChannelOutOfRange(channel));
        }
        if !self.dual_sampa_ids.contains(&dual_sampa_id) {
            return Err(ContourError::UnknownDualSampa(dual_sampa_id));
        }
        for index in self.pad_group_indices(dual_sampa_id) {
            if self.pad_group_type(&self.pad_groups[index]).has_pad_by_channel(channel)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Index of the first pad group whose contour strictly contains `(x, y)`.
    pub fn find_pad_group_by_position(&self, x: f64, y: f64) -> Option<usize> {
        self.contours
            .iter()
            .position(|contour| matches!(contour.is_inside(x, y), Ok(true)))
    }

    pub fn has_pad_by_position(&self, x: f64, y: f64) -> bool {
        self.find_pad_group_by_position(x, y).is_some()
    }

    /// Union of all contour bounding boxes, `None` for an empty segmentation.
    pub fn bbox(&self) -> Option<BBox<f64>> {
        self.contours
            .iter()
            .filter_map(|contour| contour.bbox())
            .reduce(|a, b| a.union(&b))
    }
}

/// Builds several segmentations in parallel, sharing `cache`.
///
/// All or nothing: the first failing definition fails the batch.
pub fn build_segmentations(defs: &[SegmentationDef], catalog: &Catalog, cache: &ContourCache) -> Result<Vec<Segmentation>> {
    let segmentations = defs
        .par_iter()
        .map(|def| Segmentation::new(def.clone(), catalog, cache))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "Built {} segmentations, {} pad groups, {} distinct contours",
        segmentations.len(),
        segmentations.iter().map(Segmentation::len).sum::<usize>(),
        cache.len(),
    );
    Ok(segmentations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        geometry::vertex::Vertex,
        mapping::pad::PadCell,
    };
    use test_log::test;

    const RECT: PadGroupTypeId = 0;
    const L: PadGroupTypeId = 1;
    const SPARSE: PadGroupTypeId = 2;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_pad_group_type(PadGroupType::from_cells(RECT, [(0, 0), (1, 0)]))
            .with_pad_group_type(PadGroupType::from_cells(L, [(0, 0), (1, 0), (0, 1)]))
            .with_pad_group_type(PadGroupType::new(
                SPARSE,
                vec![Some(PadCell::new(0, 0)), None, Some(PadCell::new(0, 1))],
            ))
            .with_pad_size(PadSize::new(0, 0.5, 0.5))
            .with_pad_size(PadSize::new(1, 1., 2.))
    }

    fn pad_group(fec_id: DualSampaId, pad_group_type_id: PadGroupTypeId, pad_size_id: PadSizeId, x: f64, y: f64) -> PadGroup {
        PadGroup { fec_id, pad_group_type_id, pad_size_id, x, y }
    }

    fn def() -> SegmentationDef {
        SegmentationDef {
            seg_type: 3,
            is_bending_plane: true,
            pad_groups: vec![
                pad_group(102, RECT, 0, 10., 20.),
                pad_group(102, L, 1, 0., 0.),
                pad_group(214, SPARSE, 1, -5., 0.),
                pad_group(300, RECT, 1, 20., 0.),
            ],
        }
    }

    fn segmentation() -> Segmentation {
        Segmentation::new(def(), &catalog(), &ContourCache::new()).unwrap()
    }

    #[test]
    fn place_rectangle() {
        let contour = ContourCache::new()
            .contour(&PadGroupType::from_cells(RECT, [(0, 0), (1, 0)]))
            .unwrap();
        let placed = place_contour(&contour, &PadSize::new(0, 0.5, 0.5), 10., 20.).unwrap();
        let expected: Polygon<f64> =
            Polygon::from_iter([(10., 20.), (11., 20.), (11., 20.5), (10., 20.5), (10., 20.)]);
        assert_eq!(placed, expected);
        assert!(placed.is_counter_clockwise_oriented());
    }

    #[test]
    fn contours_follow_pad_group_order() {
        let seg = segmentation();
        assert_eq!(seg.len(), 4);
        assert_eq!(seg.contours().len(), seg.pad_groups().len());
        let first = seg.contour(0).unwrap();
        assert_eq!(first.bbox(), Some(BBox::new(10., 11., 20., 20.5)));
        let l = seg.contour(1).unwrap();
        assert_eq!(l.num_vertices(), 7);
        assert_relative_eq!(l.signed_area(), 6.);
        let last = seg.contour(3).unwrap();
        assert_eq!(last.vertices[0], Vertex::new(20., 0.));
        assert_eq!(last.bbox(), Some(BBox::new(20., 22., 0., 2.)));
        assert!(seg.contour(4).is_none());
    }

    #[test]
    fn contour_computed_once_per_type() {
        let cache = ContourCache::new();
        Segmentation::new(def(), &catalog(), &cache).unwrap();
        assert_eq!(cache.builds(), 3);
        Segmentation::new(def(), &catalog(), &cache).unwrap();
        assert_eq!(cache.builds(), 3);
    }

    #[test]
    fn find_by_position() {
        let seg = segmentation();
        assert_eq!(seg.find_pad_group_by_position(10.5, 20.25), Some(0));
        assert_eq!(seg.find_pad_group_by_position(0.5, 3.), Some(1));
        assert_eq!(seg.find_pad_group_by_position(1.5, 3.), None);
        assert_eq!(seg.find_pad_group_by_position(21., 1.), Some(3));
        // Shared edge of nothing: exactly on the rectangle's boundary.
        assert_eq!(seg.find_pad_group_by_position(11., 20.25), None);
        assert!(seg.has_pad_by_position(-4.5, 3.5));
        assert!(!seg.has_pad_by_position(100., 100.));
    }

    #[test]
    fn dual_sampas() {
        let seg = segmentation();
        assert_eq!(seg.dual_sampa_ids().iter().copied().collect::<Vec<_>>(), vec![102, 214, 300]);
        assert_eq!(seg.nof_dual_sampas(), 3);
        assert_eq!(seg.pad_group_indices(102), vec![0, 1]);
        assert_eq!(seg.pad_group_indices(214), vec![2]);
        assert!(seg.pad_group_indices(999).is_empty());
    }

    #[test]
    fn nof_pads() {
        assert_eq!(segmentation().nof_pads(), 2 + 3 + 2 + 2);
    }

    #[test]
    fn has_pad_by_fee() {
        let seg = segmentation();
        assert!(seg.has_pad_by_fee(102, 2).unwrap());
        assert!(!seg.has_pad_by_fee(102, 3).unwrap());
        assert!(seg.has_pad_by_fee(214, 2).unwrap());
        assert!(!seg.has_pad_by_fee(214, 1).unwrap());
        assert_eq!(seg.has_pad_by_fee(102, 64), Err(ContourError::ChannelOutOfRange(64)));
        assert_eq!(seg.has_pad_by_fee(1000, 0), Err(ContourError::UnknownDualSampa(1000)));
    }

    #[test]
    fn bbox() {
        assert_eq!(segmentation().bbox(), Some(BBox::new(-5., 22., 0., 20.5)));
        let empty = SegmentationDef { seg_type: 0, is_bending_plane: false, pad_groups: vec![] };
        let seg = Segmentation::new(empty, &catalog(), &ContourCache::new()).unwrap();
        assert!(seg.is_empty());
        assert_eq!(seg.bbox(), None);
    }

    #[test]
    fn keeps_only_referenced_definitions() {
        let seg = segmentation();
        assert_eq!(seg.pad_size(1), Some(&PadSize::new(1, 1., 2.)));
        let only_rect = SegmentationDef { pad_groups: vec![pad_group(1, RECT, 0, 0., 0.)], ..def() };
        let seg = Segmentation::new(only_rect, &catalog(), &ContourCache::new()).unwrap();
        assert!(seg.pad_size(1).is_none());
        assert_eq!(seg.seg_type(), 3);
        assert!(seg.is_bending_plane());
    }

    #[test]
    fn unknown_pad_group_type_fails_whole_segmentation() {
        let mut bad = def();
        bad.pad_groups.push(pad_group(1, 42, 0, 0., 0.));
        let err = Segmentation::new(bad, &catalog(), &ContourCache::new()).unwrap_err();
        assert_eq!(err, ContourError::UnknownPadGroupType(42));
        assert_eq!(err.kind(), ErrorKind::LookupFailure);
    }

    #[test]
    fn unknown_pad_size_fails_whole_segmentation() {
        let mut bad = def();
        bad.pad_groups[2].pad_size_id = 7;
        let err = Segmentation::new(bad, &catalog(), &ContourCache::new()).unwrap_err();
        assert_eq!(err, ContourError::UnknownPadSize(7));
    }

    #[test]
    fn structural_error_propagates() {
        let catalog = catalog().with_pad_group_type(PadGroupType::from_cells(9, [(0, 0), (1, 1)]));
        let mut bad = def();
        bad.pad_groups.push(pad_group(1, 9, 0, 0., 0.));
        let err = Segmentation::new(bad, &catalog, &ContourCache::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
    }

    #[test]
    fn cell_at_coordinate_limit_is_rejected() {
        let json = r#"{
            "padGroupTypes": [{"id": 0, "channels": [{"ix": 2147483647, "iy": 0}]}],
            "padSizes": [{"id": 0, "width": 1, "height": 1}]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let def = SegmentationDef { seg_type: 0, is_bending_plane: false, pad_groups: vec![pad_group(1, 0, 0, 0., 0.)] };
        let err = Segmentation::new(def, &catalog, &ContourCache::new()).unwrap_err();
        assert_eq!(err, ContourError::CellOutOfRange { ix: i32::MAX, iy: 0 });
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
    }

    #[test]
    fn parallel_build_shares_cache() {
        let defs: Vec<SegmentationDef> = (0..32)
            .map(|i| SegmentationDef { seg_type: i, is_bending_plane: i % 2 == 0, ..def() })
            .collect();
        let cache = ContourCache::new();
        let segs = build_segmentations(&defs, &catalog(), &cache).unwrap();
        assert_eq!(segs.len(), 32);
        assert!(segs.iter().enumerate().all(|(i, s)| s.seg_type() == i as u32));
        assert_eq!(cache.builds(), 3);
        assert_eq!(segs[7].contours(), segmentation().contours());
    }

    #[test]
    fn parallel_build_is_all_or_nothing() {
        let mut defs = vec![def(); 8];
        defs[5].pad_groups[0].pad_group_type_id = 77;
        let err = build_segmentations(&defs, &catalog(), &ContourCache::new()).unwrap_err();
        assert_eq!(err, ContourError::UnknownPadGroupType(77));
    }

    #[test]
    fn def_from_json() {
        let json = r#"{
            "segType": 1,
            "isBendingPlane": false,
            "padGroups": [{"fecId": 5, "padGroupTypeId": 0, "padSizeId": 1, "x": 1.5, "y": -2}]
        }"#;
        let def: SegmentationDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.pad_groups, vec![pad_group(5, RECT, 1, 1.5, -2.)]);
        let seg = Segmentation::new(def, &catalog(), &ContourCache::new()).unwrap();
        assert_eq!(seg.contour(0).unwrap().bbox(), Some(BBox::new(1.5, 3.5, -2., 0.)));
    }
}
