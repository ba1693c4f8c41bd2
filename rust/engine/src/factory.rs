// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room construction from an accepted footprint.
//!
//! The accepted footprint is always an axis-aligned rectangle in the
//! current design; the polygon is its four plan corners. Derivation
//! failures (degenerate polygons, non-finite areas) skip the candidate
//! rather than aborting the pass.

use roomscan_core::{
    m2_to_ft2, m_to_ft, polygon, room, Aabb, BoundaryCandidate, CandidateId, DetectedRoom,
    EnclosureVerdict, PlanPoint, RoomId, RoomMetadata,
};
use std::time::SystemTime;
use tracing::warn;

/// Height assigned when no boundary object contributed one, feet.
const DEFAULT_ROOM_HEIGHT_FT: f64 = 8.0;

/// Four plan corners of a footprint, counter-clockwise.
pub fn footprint_polygon(footprint: &Aabb) -> Vec<PlanPoint> {
    vec![
        PlanPoint::new(footprint.min.x, footprint.min.z),
        PlanPoint::new(footprint.max.x, footprint.min.z),
        PlanPoint::new(footprint.max.x, footprint.max.z),
        PlanPoint::new(footprint.min.x, footprint.max.z),
    ]
}

/// Floor area of a footprint in square feet, via the shoelace formula
/// on its plan polygon.
pub fn footprint_area_ft2(footprint: &Aabb) -> f64 {
    m2_to_ft2(polygon::shoelace_area(&footprint_polygon(footprint)).abs())
}

/// A rectangle footprint as `(min_x, min_z, max_x, max_z)` for overlap
/// checks.
pub fn footprint_rect(footprint: &Aabb) -> (f64, f64, f64, f64) {
    (
        footprint.min.x,
        footprint.min.z,
        footprint.max.x,
        footprint.max.z,
    )
}

/// Assemble the room entity. Returns `None` when derived fields cannot
/// be computed; the caller skips the candidate.
pub fn build_room(
    id: RoomId,
    footprint: &Aabb,
    verdict: EnclosureVerdict,
    candidates: &[BoundaryCandidate],
) -> Option<DetectedRoom> {
    let polygon_pts = footprint_polygon(footprint);
    let area_m2 = polygon::shoelace_area(&polygon_pts).abs();
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        warn!(room = id.0, "skipping room with degenerate footprint polygon");
        return None;
    }
    let area_ft2 = m2_to_ft2(area_m2);
    let centroid = polygon::vertex_centroid(&polygon_pts);

    let boundary_objects = contributing_candidates(&verdict);
    let estimated_height_ft = estimate_height_ft(&boundary_objects, candidates);

    Some(DetectedRoom {
        id,
        polygon: polygon_pts,
        area_ft2,
        centroid,
        suggested_name: room::suggest_name(area_ft2).to_string(),
        boundary_objects,
        access_points: Vec::new(),
        adjacent_rooms: Vec::new(),
        metadata: RoomMetadata {
            confidence: verdict.confidence,
            boundary_complete: verdict.is_fully_enclosed,
            estimated_height_ft,
            detected_at: SystemTime::now(),
            enclosure: verdict,
        },
    })
}

/// Deduplicated set of candidates that contributed a boundary hit, in
/// stable id order.
fn contributing_candidates(verdict: &EnclosureVerdict) -> Vec<CandidateId> {
    let mut ids: Vec<CandidateId> = verdict
        .per_direction
        .iter()
        .flat_map(|d| d.boundaries.iter())
        .map(|hit| hit.candidate)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Mean contributor height: explicit height hint when present, bounding
/// box height otherwise, default when no contributors.
fn estimate_height_ft(ids: &[CandidateId], candidates: &[BoundaryCandidate]) -> f64 {
    let heights: Vec<f64> = ids
        .iter()
        .filter_map(|id| candidates.iter().find(|c| c.id == *id))
        .map(|c| {
            c.tags
                .height_hint_ft
                .unwrap_or_else(|| m_to_ft(c.aabb.height()))
        })
        .collect();
    if heights.is_empty() {
        return DEFAULT_ROOM_HEIGHT_FT;
    }
    heights.iter().sum::<f64>() / heights.len() as f64
}
