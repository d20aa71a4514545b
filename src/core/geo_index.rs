use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::core::distance::{calculate_bounding_box, haversine_distance};

/// Grid cell edge in degrees (~28km of latitude per cell)
const CELL_SIZE_DEG: f64 = 0.25;

/// The 111km/degree bounding-box approximation runs slightly tight at high
/// latitudes, so the cell sweep pads the radius to never skip a boundary cell.
/// The haversine check on each entry keeps membership exact.
const BBOX_PAD_FACTOR: f64 = 1.01;
const BBOX_PAD_KM: f64 = 0.1;

#[derive(Debug, Default)]
struct GridState {
    /// Cell -> property id -> (lat, lon)
    cells: HashMap<(i32, i32), HashMap<Uuid, (f64, f64)>>,
    /// Property id -> occupied cell, for O(1) upsert/remove
    positions: HashMap<Uuid, (i32, i32)>,
}

/// In-memory spatial index over property coordinates
///
/// Properties are bucketed into a fixed-size lat/lon grid. A radius query
/// sweeps only the cells overlapping the query's bounding box and verifies
/// each candidate with a true great-circle distance, so membership is
/// identical to a brute-force haversine filter while touching a fraction of
/// the entries.
///
/// The index holds interior mutability so it can be shared as
/// `Arc<PropertyGeoIndex>` across request handlers. It is a cache over the
/// property table and is rebuilt from it at startup.
#[derive(Debug, Default)]
pub struct PropertyGeoIndex {
    state: RwLock<GridState>,
}

#[inline]
fn cell_of(lat: f64, lon: f64) -> (i32, i32) {
    (
        (lat / CELL_SIZE_DEG).floor() as i32,
        (lon / CELL_SIZE_DEG).floor() as i32,
    )
}

impl PropertyGeoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, GridState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the indexed position for a property
    ///
    /// Idempotent under repeated calls with identical coordinates; moves the
    /// entry between cells when the coordinates changed.
    pub fn upsert(&self, id: Uuid, lat: f64, lon: f64) {
        let cell = cell_of(lat, lon);
        let mut state = self.write();

        if let Some(previous) = state.positions.insert(id, cell) {
            if previous != cell {
                if let Some(bucket) = state.cells.get_mut(&previous) {
                    bucket.remove(&id);
                    if bucket.is_empty() {
                        state.cells.remove(&previous);
                    }
                }
            }
        }

        state.cells.entry(cell).or_default().insert(id, (lat, lon));
    }

    /// Remove a property from the index; no-op if absent
    pub fn remove(&self, id: Uuid) {
        let mut state = self.write();
        if let Some(cell) = state.positions.remove(&id) {
            if let Some(bucket) = state.cells.get_mut(&cell) {
                bucket.remove(&id);
                if bucket.is_empty() {
                    state.cells.remove(&cell);
                }
            }
        }
    }

    /// All indexed properties within `radius_km` of the center, inclusive
    pub fn query_radius(&self, center_lat: f64, center_lon: f64, radius_km: f64) -> Vec<Uuid> {
        let bbox = calculate_bounding_box(
            center_lat,
            center_lon,
            radius_km * BBOX_PAD_FACTOR + BBOX_PAD_KM,
        );
        let (min_cell_lat, min_cell_lon) = cell_of(bbox.min_lat, bbox.min_lon);
        let (max_cell_lat, max_cell_lon) = cell_of(bbox.max_lat, bbox.max_lon);

        let state = self.read();
        let mut result = Vec::new();

        for cell_lat in min_cell_lat..=max_cell_lat {
            for cell_lon in min_cell_lon..=max_cell_lon {
                if let Some(bucket) = state.cells.get(&(cell_lat, cell_lon)) {
                    for (id, &(lat, lon)) in bucket {
                        if haversine_distance(center_lat, center_lon, lat, lon) <= radius_km {
                            result.push(*id);
                        }
                    }
                }
            }
        }

        result
    }

    /// Whether a property is currently indexed
    pub fn contains(&self, id: Uuid) -> bool {
        self.read().positions.contains_key(&id)
    }

    /// Number of indexed properties
    pub fn len(&self) -> usize {
        self.read().positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().positions.is_empty()
    }
}
