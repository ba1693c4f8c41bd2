// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan-view polygon math: signed area, centroid, containment, and
//! rectangle overlap.

use crate::room::PlanPoint;

/// Signed shoelace area of a plan polygon, in the polygon's own units
/// squared (m² for world polygons). Positive for counter-clockwise
/// winding in the XZ plane.
pub fn shoelace_area(polygon: &[PlanPoint]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..polygon.len() {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % polygon.len()];
        sum += a.x * b.z - b.x * a.z;
    }
    sum / 2.0
}

/// Arithmetic mean of the polygon vertices.
pub fn vertex_centroid(polygon: &[PlanPoint]) -> PlanPoint {
    if polygon.is_empty() {
        return PlanPoint::new(0.0, 0.0);
    }
    let n = polygon.len() as f64;
    let (sx, sz) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sz), p| (sx + p.x, sz + p.z));
    PlanPoint::new(sx / n, sz / n)
}

/// Ray-parity point-in-polygon test in the plan view.
pub fn contains_point(polygon: &[PlanPoint], x: f64, z: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.z > z) != (pj.z > z)
            && x < (pj.x - pi.x) * (z - pi.z) / (pj.z - pi.z) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Intersection-over-union of two axis-aligned plan rectangles given as
/// `(min_x, min_z, max_x, max_z)`.
pub fn rect_iou(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> f64 {
    let ix = (a.2.min(b.2) - a.0.max(b.0)).max(0.0);
    let iz = (a.3.min(b.3) - a.1.max(b.1)).max(0.0);
    let inter = ix * iz;
    let area_a = (a.2 - a.0) * (a.3 - a.1);
    let area_b = (b.2 - b.0) * (b.3 - b.1);
    let union = area_a + area_b - inter;
    if union <= 0.0 {
        return 0.0;
    }
    inter / union
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(w: f64, d: f64) -> Vec<PlanPoint> {
        vec![
            PlanPoint::new(0.0, 0.0),
            PlanPoint::new(w, 0.0),
            PlanPoint::new(w, d),
            PlanPoint::new(0.0, d),
        ]
    }

    #[test]
    fn test_shoelace_rectangle() {
        assert_relative_eq!(shoelace_area(&rect(3.0, 4.0)).abs(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shoelace_winding_sign() {
        let mut reversed = rect(3.0, 4.0);
        reversed.reverse();
        assert_relative_eq!(
            shoelace_area(&reversed),
            -shoelace_area(&rect(3.0, 4.0)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_polygon_zero_area() {
        assert_eq!(shoelace_area(&[PlanPoint::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_centroid() {
        let c = vertex_centroid(&rect(4.0, 2.0));
        assert_relative_eq!(c.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_containment() {
        let poly = rect(4.0, 2.0);
        assert!(contains_point(&poly, 2.0, 1.0));
        assert!(!contains_point(&poly, 5.0, 1.0));
        assert!(!contains_point(&poly, 2.0, -0.5));
    }

    #[test]
    fn test_rect_iou() {
        let a = (0.0, 0.0, 2.0, 2.0);
        assert_relative_eq!(rect_iou(a, a), 1.0, epsilon = 1e-12);
        assert_eq!(rect_iou(a, (3.0, 3.0, 4.0, 4.0)), 0.0);
        // Half overlap: 2x2 vs 2x2 shifted by 1 on x => inter 2, union 6
        assert_relative_eq!(rect_iou(a, (1.0, 0.0, 3.0, 2.0)), 2.0 / 6.0, epsilon = 1e-12);
    }
}
