// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Experimental edge-chaining polygon tracer.
//!
//! Builds arbitrary closed plan polygons by chaining object edges whose
//! endpoints meet within a tolerance. This is the extension point for
//! concave and non-rectangular rooms; the main pipeline does not invoke
//! it and always uses the axis-aligned footprint rectangle.

use roomscan_core::PlanPoint;

/// A plan-view edge contributed by an object footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanEdge {
    pub start: PlanPoint,
    pub end: PlanPoint,
}

impl PlanEdge {
    pub fn new(start: PlanPoint, end: PlanPoint) -> Self {
        Self { start, end }
    }

    fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

fn points_meet(a: &PlanPoint, b: &PlanPoint, tolerance: f64) -> bool {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz <= tolerance * tolerance
}

/// Find an unused edge connecting to `endpoint`, reversing it when its
/// far end is the one that meets. Returns the edge index and the edge
/// oriented to continue the chain.
pub fn find_connecting_edge(
    endpoint: &PlanPoint,
    edges: &[PlanEdge],
    used: &[bool],
    tolerance: f64,
) -> Option<(usize, PlanEdge)> {
    for (i, edge) in edges.iter().enumerate() {
        if used[i] {
            continue;
        }
        if points_meet(&edge.start, endpoint, tolerance) {
            return Some((i, *edge));
        }
        if points_meet(&edge.end, endpoint, tolerance) {
            return Some((i, edge.reversed()));
        }
    }
    None
}

/// Chain edges into a closed polygon starting from the first edge.
/// Returns `None` when the chain cannot be closed or closes with fewer
/// than 3 vertices.
pub fn trace_polygon(edges: &[PlanEdge], tolerance: f64) -> Option<Vec<PlanPoint>> {
    if edges.len() < 3 {
        return None;
    }

    let mut used = vec![false; edges.len()];
    used[0] = true;
    let origin = edges[0].start;
    let mut polygon = vec![origin];
    let mut endpoint = edges[0].end;

    loop {
        if polygon.len() >= 3 && points_meet(&endpoint, &origin, tolerance) {
            return Some(polygon);
        }
        let (idx, edge) = find_connecting_edge(&endpoint, edges, &used, tolerance)?;
        used[idx] = true;
        polygon.push(edge.start);
        endpoint = edge.end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomscan_core::polygon::shoelace_area;

    fn edge(x0: f64, z0: f64, x1: f64, z1: f64) -> PlanEdge {
        PlanEdge::new(PlanPoint::new(x0, z0), PlanPoint::new(x1, z1))
    }

    #[test]
    fn test_traces_rectangle() {
        // Four edges of a 4 x 3 rectangle, given out of order and with
        // one reversed.
        let edges = vec![
            edge(0.0, 0.0, 4.0, 0.0),
            edge(0.0, 3.0, 0.0, 0.0),
            edge(4.0, 0.0, 4.0, 3.0),
            edge(0.0, 3.0, 4.0, 3.0), // reversed relative to the loop
        ];
        let polygon = trace_polygon(&edges, 0.01).unwrap();
        assert_eq!(polygon.len(), 4);
        assert!((shoelace_area(&polygon).abs() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_tolerates_endpoint_slop() {
        let edges = vec![
            edge(0.0, 0.0, 4.0, 0.02), // slightly off
            edge(4.0, 0.0, 4.0, 3.0),
            edge(4.0, 3.01, 0.0, 3.0),
            edge(0.0, 3.0, 0.0, 0.01),
        ];
        assert!(trace_polygon(&edges, 0.05).is_some());
        // With a tolerance tighter than the slop, the chain breaks.
        assert!(trace_polygon(&edges, 0.001).is_none());
    }

    #[test]
    fn test_open_chain_fails() {
        let edges = vec![
            edge(0.0, 0.0, 4.0, 0.0),
            edge(4.0, 0.0, 4.0, 3.0),
            edge(4.0, 3.0, 0.0, 3.0),
            // Missing the closing west edge.
        ];
        assert!(trace_polygon(&edges, 0.01).is_none());
    }

    #[test]
    fn test_too_few_edges() {
        let edges = vec![edge(0.0, 0.0, 1.0, 0.0), edge(1.0, 0.0, 0.0, 0.0)];
        assert!(trace_polygon(&edges, 0.01).is_none());
    }
}
