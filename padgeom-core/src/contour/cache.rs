use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, MutexGuard, OnceLock,
    },
};

use log::debug;

use crate::{
    error::Result,
    geometry::polygon::Polygon,
    mapping::pad::{PadGroupType, PadGroupTypeId},
};

use super::builder::build_contour;

pub type Contour = Arc<Polygon<i32>>;

type Slot = Arc<OnceLock<Result<Contour>>>;

/// One contour per pad group type id, built on first request.
///
/// Safe to share between threads: concurrent requests for the same id wait for a single build. Failed
/// builds are cached too, the computation being deterministic.
///
/// Entries are keyed by id alone, so a cache belongs to a single [`Catalog`](crate::Catalog): a later
/// request with a different definition under an already cached id gets the first contour back.
#[derive(Debug, Default)]
pub struct ContourCache {
    slots: Mutex<HashMap<PadGroupTypeId, Slot>>,
    builds: AtomicUsize,
}

impl ContourCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contour(&self, pad_group_type: &PadGroupType) -> Result<Contour> {
        let slot = self.slot(pad_group_type.id);
        slot.get_or_init(|| {
            debug!("ContourCache: building contour for pad group type {}", pad_group_type.id);
            self.builds.fetch_add(1, Ordering::Relaxed);
            build_contour(pad_group_type).map(Arc::new)
        })
        .clone()
    }

    // Only the map lookup happens under the lock; builds for distinct ids proceed in parallel.
    fn slot(&self, id: PadGroupTypeId) -> Slot {
        self.slots().entry(id).or_default().clone()
    }

    // A panic while holding the lock cannot leave the map half-updated.
    fn slots(&self) -> MutexGuard<'_, HashMap<PadGroupTypeId, Slot>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of ids with a computed (or in-progress) contour.
    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: PadGroupTypeId) -> bool {
        self.slots().get(&id).is_some_and(|slot| slot.get().is_some())
    }

    /// Number of contour builds performed so far.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
