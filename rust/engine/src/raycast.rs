// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ray casting against candidate bounding boxes.
//!
//! Slab-method ray/AABB intersection with a nearest-hit search over the
//! candidate set. A ray whose origin lies inside a box reports the exit
//! face, matching what a scene raycaster returns for embedded origins.

use nalgebra::{Point3, Vector3};
use roomscan_core::{Aabb, BoundaryCandidate};

/// Result of a nearest-hit ray query.
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    /// Index of the hit candidate in the query set.
    pub index: usize,
    /// Ray travel distance, meters.
    pub distance_m: f64,
    /// World-space hit point.
    pub point: Point3<f64>,
}

/// Find the nearest candidate intersected by the ray within
/// `max_distance_m`. Returns `None` when nothing is hit.
pub fn nearest_hit(
    origin: Point3<f64>,
    direction: Vector3<f64>,
    max_distance_m: f64,
    candidates: &[BoundaryCandidate],
) -> Option<RayHit> {
    let mut closest: Option<RayHit> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(t) = ray_aabb(&origin, &direction, &candidate.aabb) {
            if t <= max_distance_m && closest.as_ref().map_or(true, |c| t < c.distance_m) {
                closest = Some(RayHit {
                    index,
                    distance_m: t,
                    point: origin + direction * t,
                });
            }
        }
    }
    closest
}

/// Slab-method intersection distance. `direction` must be normalized.
/// Returns the entry distance, or the exit distance when the origin is
/// inside the box; `None` when the ray misses or the box is behind it.
fn ray_aabb(origin: &Point3<f64>, direction: &Vector3<f64>, aabb: &Aabb) -> Option<f64> {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for axis in 0..3 {
        let o = origin.coords[axis];
        let d = direction[axis];
        let lo = aabb.min.coords[axis];
        let hi = aabb.max.coords[axis];

        if d.abs() < 1e-12 {
            // Ray parallel to this slab; must already be within it.
            if o < lo || o > hi {
                return None;
            }
        } else {
            let mut t1 = (lo - o) / d;
            let mut t2 = (hi - o) / d;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
    }

    if t_max < 0.0 {
        // Entirely behind the origin.
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}
