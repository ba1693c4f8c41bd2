// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial grid clustering of boundary candidates.
//!
//! Buckets candidates into fixed-size plan-view cells so the wall
//! analyzer only runs against locally relevant groups, avoiding a
//! global O(n²) search. Cells are ephemeral and recomputed on every
//! detection pass.

use roomscan_core::{Aabb, BoundaryCandidate};
use rustc_hash::FxHashMap;

/// Plan-view grid cell key.
pub type CellKey = (i64, i64);

/// Bucket candidate indices by the grid cell containing their bounding
/// box center. `cell_size_m` is in world units (meters).
pub fn cluster_by_cell(
    candidates: &[BoundaryCandidate],
    indices: &[usize],
    cell_size_m: f64,
) -> FxHashMap<CellKey, Vec<usize>> {
    let mut cells: FxHashMap<CellKey, Vec<usize>> = FxHashMap::default();
    for &idx in indices {
        let center = candidates[idx].aabb.center();
        let key = cell_key(center.x, center.z, cell_size_m);
        cells.entry(key).or_default().push(idx);
    }
    cells
}

#[inline]
fn cell_key(x: f64, z: f64, cell_size_m: f64) -> CellKey {
    (
        (x / cell_size_m).floor() as i64,
        (z / cell_size_m).floor() as i64,
    )
}

/// Overall plan footprint of a cluster: the union of its members'
/// bounding boxes.
pub fn cluster_footprint(candidates: &[BoundaryCandidate], members: &[usize]) -> Option<Aabb> {
    let mut iter = members.iter();
    let first = *iter.next()?;
    let mut footprint = candidates[first].aabb;
    for &idx in iter {
        footprint = footprint.union(&candidates[idx].aabb);
    }
    Some(footprint)
}
