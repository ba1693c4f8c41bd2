// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Directional wall analysis.
//!
//! For a candidate footprint, four independent scan passes (north,
//! south, east, west) measure wall coverage and locate gaps. Each pass
//! generates a line of sample points across the footprint, casts a ray
//! per sample toward the direction under test, and marks hits plus a
//! configurable radius of neighboring samples as covered. Maximal
//! uncovered runs become gaps, sized in feet directly from the sample
//! step.

use crate::raycast;
use nalgebra::{Point3, Vector3};
use roomscan_core::{
    ft_to_m, Aabb, BoundaryCandidate, BoundaryHit, Cardinal, DetectionSettings, Gap, PlanPoint,
    WallDirectionResult,
};
use smallvec::SmallVec;

/// Fraction of the footprint's smaller plan extent by which ray origins
/// are offset from the center toward the scanned direction.
const ORIGIN_OFFSET_FACTOR: f64 = 0.4;

/// Scans a footprint's four cardinal directions against the global
/// candidate set.
pub struct WallScanner<'a> {
    /// Ray-cast targets: the full candidate list, not just the cluster
    /// under test.
    targets: &'a [BoundaryCandidate],
    settings: &'a DetectionSettings,
}

impl<'a> WallScanner<'a> {
    pub fn new(targets: &'a [BoundaryCandidate], settings: &'a DetectionSettings) -> Self {
        Self { targets, settings }
    }

    /// Run all four directional scans. Results are in `Cardinal::ALL`
    /// order.
    pub fn analyze(&self, footprint: &Aabb) -> [WallDirectionResult; 4] {
        Cardinal::ALL.map(|direction| self.scan_direction(footprint, direction))
    }

    /// Scan one direction: sample line perpendicular to the ray, one
    /// nearest-hit cast per sample.
    pub fn scan_direction(&self, footprint: &Aabb, direction: Cardinal) -> WallDirectionResult {
        let step_m = ft_to_m(self.settings.grid_resolution_ft);
        let max_distance_m = ft_to_m(self.settings.max_ray_distance_ft);
        let scan_height_m =
            ft_to_m(self.settings.floor_level_ft + self.settings.wall_analysis_height_ft);

        let center = footprint.center();
        let (dx, dz) = direction.plan_vector();
        let ray_dir = Vector3::new(dx, 0.0, dz);
        let origin_offset = ORIGIN_OFFSET_FACTOR * footprint.width().min(footprint.depth());

        let (span_min, span_max) = if direction.scans_along_x() {
            (footprint.min.x, footprint.max.x)
        } else {
            (footprint.min.z, footprint.max.z)
        };
        let span = (span_max - span_min).max(0.0);
        let sample_count = (span / step_m).ceil() as usize + 1;

        // The final sample clamps to the footprint edge so a sub-step
        // sliver at the far end is still scanned.
        let sample_s = move |i: usize| (span_min + i as f64 * step_m).min(span_max);

        let sample_origin = |i: usize| -> Point3<f64> {
            let s = sample_s(i);
            if direction.scans_along_x() {
                Point3::new(s, scan_height_m, center.z + dz * origin_offset)
            } else {
                Point3::new(center.x + dx * origin_offset, scan_height_m, s)
            }
        };

        // Gap endpoints report the wall plane under test, not the
        // interior ray-origin line.
        let edge = match direction {
            Cardinal::North => footprint.min.z,
            Cardinal::South => footprint.max.z,
            Cardinal::East => footprint.max.x,
            Cardinal::West => footprint.min.x,
        };
        let gap_point = |i: usize| -> PlanPoint {
            let s = sample_s(i);
            if direction.scans_along_x() {
                PlanPoint::new(s, edge)
            } else {
                PlanPoint::new(edge, s)
            }
        };

        let mut covered = vec![false; sample_count];
        let mut boundaries: SmallVec<[BoundaryHit; 8]> = SmallVec::new();
        let mark_radius = self.settings.coverage_mark_radius;

        for i in 0..sample_count {
            let origin = sample_origin(i);
            if let Some(hit) = raycast::nearest_hit(origin, ray_dir, max_distance_m, self.targets)
            {
                boundaries.push(BoundaryHit {
                    point: hit.point,
                    candidate: self.targets[hit.index].id,
                    distance_m: hit.distance_m,
                });
                let lo = i.saturating_sub(mark_radius);
                let hi = (i + mark_radius).min(sample_count - 1);
                for slot in &mut covered[lo..=hi] {
                    *slot = true;
                }
            }
        }

        let gaps = extract_gaps(&covered, self.settings.grid_resolution_ft, &gap_point);
        let covered_count = covered.iter().filter(|&&c| c).count();
        let total_coverage = covered_count as f64 / sample_count as f64;

        WallDirectionResult {
            direction,
            has_coverage: total_coverage > self.settings.coverage_threshold,
            boundaries,
            gaps,
            total_coverage,
        }
    }
}

/// Convert maximal uncovered runs into gaps. Gap size is derived
/// directly in feet from the run length and the sample step.
fn extract_gaps(
    covered: &[bool],
    grid_resolution_ft: f64,
    gap_point: &dyn Fn(usize) -> PlanPoint,
) -> Vec<Gap> {
    let mut gaps = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &is_covered) in covered.iter().enumerate() {
        if !is_covered {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            gaps.push(make_gap(start, i - 1, grid_resolution_ft, gap_point));
        }
    }
    if let Some(start) = run_start {
        gaps.push(make_gap(
            start,
            covered.len() - 1,
            grid_resolution_ft,
            gap_point,
        ));
    }
    gaps
}

fn make_gap(
    start: usize,
    end: usize,
    grid_resolution_ft: f64,
    gap_point: &dyn Fn(usize) -> PlanPoint,
) -> Gap {
    let run_len = end - start + 1;
    Gap {
        start: gap_point(start),
        end: gap_point(end),
        size_ft: run_len as f64 * grid_resolution_ft,
    }
}
