// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary candidate classification.
//!
//! A pure predicate over a candidate's bounding box and tags. Any one
//! rule qualifies an object: wall-like proportions, a large furniture
//! footprint, a designated blocking mass, or an explicit boundary flag.

use roomscan_core::BoundaryCandidate;

/// Maximum thin dimension for wall-like proportions, meters.
const WALL_MAX_THICKNESS_M: f64 = 1.0;

/// Minimum footprint for large furniture to count as a boundary, m².
const FURNITURE_MIN_FOOTPRINT_M2: f64 = 4.0;

/// Scene tag marking an object as a room-blocking mass.
const ROOM_MASS_KIND: &str = "room_mass";

/// Whether a scene object can contribute to a room enclosure.
pub fn is_potential_boundary(candidate: &BoundaryCandidate) -> bool {
    is_wall_like(candidate)
        || is_large_furniture(candidate)
        || is_blocking_mass(candidate)
        || candidate.tags.is_boundary
}

/// Thin and tall: taller than both plan extents, with at least one plan
/// extent under a meter.
fn is_wall_like(candidate: &BoundaryCandidate) -> bool {
    let width = candidate.aabb.width();
    let depth = candidate.aabb.depth();
    let height = candidate.aabb.height();
    height > width.max(depth) && width.min(depth) < WALL_MAX_THICKNESS_M
}

fn is_large_furniture(candidate: &BoundaryCandidate) -> bool {
    candidate.aabb.width() * candidate.aabb.depth() >= FURNITURE_MIN_FOOTPRINT_M2
}

fn is_blocking_mass(candidate: &BoundaryCandidate) -> bool {
    candidate.tags.is_blocking_mass
        || candidate.tags.kind.as_deref() == Some(ROOM_MASS_KIND)
}
