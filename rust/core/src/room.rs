// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection result types: per-direction wall analysis, enclosure
//! verdicts, and the `DetectedRoom` entity handed to collaborators.
//!
//! A `DetectedRoom` is a plain record (serde-serializable) so UI and
//! persistence layers can consume it without touching the engine.

use crate::candidate::CandidateId;
use crate::polygon;
use crate::settings::DetectionSettings;
use crate::units::m2_to_ft2;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::SystemTime;

/// Plan-view point on the floor plane (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub x: f64,
    pub z: f64,
}

impl PlanPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// Cardinal scan directions in the plan view. North is −Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::South,
        Cardinal::East,
        Cardinal::West,
    ];

    /// Unit ray direction in the plan view as `(dx, dz)`.
    pub fn plan_vector(&self) -> (f64, f64) {
        match self {
            Cardinal::North => (0.0, -1.0),
            Cardinal::South => (0.0, 1.0),
            Cardinal::East => (1.0, 0.0),
            Cardinal::West => (-1.0, 0.0),
        }
    }

    /// True when the ray runs along Z and samples span the X extent.
    pub fn scans_along_x(&self) -> bool {
        matches!(self, Cardinal::North | Cardinal::South)
    }
}

/// A single ray hit against a boundary candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryHit {
    /// World-space hit point, meters.
    pub point: Point3<f64>,
    /// The candidate that was hit.
    pub candidate: CandidateId,
    /// Ray travel distance, meters.
    pub distance_m: f64,
}

/// A contiguous uncovered span along one directional scan line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Plan position of the first uncovered sample, projected onto the
    /// scanned footprint edge.
    pub start: PlanPoint,
    /// Plan position of the last uncovered sample, projected onto the
    /// scanned footprint edge.
    pub end: PlanPoint,
    /// Gap size in feet (`run length * grid resolution`).
    pub size_ft: f64,
}

/// Wall coverage measured along one cardinal direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDirectionResult {
    pub direction: Cardinal,
    /// Coverage exceeded the configured threshold.
    pub has_coverage: bool,
    /// All boundary hits recorded along the scan line.
    pub boundaries: SmallVec<[BoundaryHit; 8]>,
    /// Maximal uncovered runs.
    pub gaps: Vec<Gap>,
    /// Fraction of samples covered, 0..1.
    pub total_coverage: f64,
}

/// Aggregated enclosure result for one candidate footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureVerdict {
    /// All four directions reported coverage.
    pub is_fully_enclosed: bool,
    /// Largest gap above the noise tolerance, feet. Zero when none.
    pub max_gap_size_ft: f64,
    /// Combined coverage/gap score, 0..1.
    pub confidence: f64,
    /// North, south, east, west results in `Cardinal::ALL` order.
    pub per_direction: [WallDirectionResult; 4],
}

/// Average coverage over directions that saw any boundary at all.
/// Directions with zero coverage are excluded from the mean, not
/// counted as zero, so one missing wall cannot statistically drown out
/// three good ones.
pub fn average_coverage(directions: &[WallDirectionResult]) -> f64 {
    let covered: Vec<f64> = directions
        .iter()
        .filter(|d| d.total_coverage > 0.0)
        .map(|d| d.total_coverage)
        .collect();
    if covered.is_empty() {
        return 0.0;
    }
    covered.iter().sum::<f64>() / covered.len() as f64
}

/// Confidence score: average coverage attenuated by the largest gap,
/// clamped to [0, 1].
pub fn enclosure_confidence(
    directions: &[WallDirectionResult],
    max_gap_ft: f64,
    gap_threshold_ft: f64,
) -> f64 {
    let avg = average_coverage(directions);
    let gap_ratio = if gap_threshold_ft > 0.0 {
        (max_gap_ft / gap_threshold_ft).min(1.0)
    } else {
        1.0
    };
    (avg * (1.0 - 0.5 * gap_ratio)).clamp(0.0, 1.0)
}

/// Unique room identifier, monotonic within a detector. Ids are
/// reassigned on every detection pass; do not hold them across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u64);

/// Doorway-like opening on a room boundary. Reserved: the detection
/// pipeline leaves `DetectedRoom::access_points` empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub position: PlanPoint,
    pub width_ft: f64,
}

/// Derived metadata snapshot for one detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMetadata {
    /// Enclosure confidence, 0..1.
    pub confidence: f64,
    /// Whether all four directions were covered.
    pub boundary_complete: bool,
    /// Averaged contributor height, feet.
    pub estimated_height_ft: f64,
    /// Wall-clock time of the detection pass.
    pub detected_at: SystemTime,
    /// Full enclosure analysis snapshot.
    pub enclosure: EnclosureVerdict,
}

/// An enclosed room inferred as negative space between boundary
/// candidates. Lives in the detector registry until the next pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRoom {
    pub id: RoomId,
    /// Plan polygon, meters, at least 3 vertices. Currently always the
    /// 4-corner rectangle of the tested footprint.
    pub polygon: Vec<PlanPoint>,
    /// Deduplicated candidates that contributed a boundary hit.
    pub boundary_objects: Vec<CandidateId>,
    /// Floor area, square feet.
    pub area_ft2: f64,
    /// Mean of polygon vertices, meters.
    pub centroid: PlanPoint,
    /// Name heuristic derived from area.
    pub suggested_name: String,
    /// Reserved; always empty in the current pipeline.
    pub access_points: Vec<AccessPoint>,
    /// Reserved; always empty in the current pipeline.
    pub adjacent_rooms: Vec<RoomId>,
    pub metadata: RoomMetadata,
}

impl DetectedRoom {
    /// Whether the given plan point lies inside the room polygon.
    pub fn contains_point(&self, x: f64, z: f64) -> bool {
        polygon::contains_point(&self.polygon, x, z)
    }

    /// Re-derive `area`, `centroid`, and `confidence` from the stored
    /// polygon and enclosure snapshot. A cheap refresh for callers that
    /// do not want a full re-scan.
    pub fn recalculate(&mut self, settings: &DetectionSettings) {
        self.area_ft2 = m2_to_ft2(polygon::shoelace_area(&self.polygon).abs());
        self.centroid = polygon::vertex_centroid(&self.polygon);
        let confidence = enclosure_confidence(
            &self.metadata.enclosure.per_direction,
            self.metadata.enclosure.max_gap_size_ft,
            settings.max_gap_size_ft,
        );
        self.metadata.confidence = confidence;
        self.metadata.enclosure.confidence = confidence;
    }
}

/// Name band lookup on floor area in square feet.
pub fn suggest_name(area_ft2: f64) -> &'static str {
    if area_ft2 < 50.0 {
        "Closet"
    } else if area_ft2 < 100.0 {
        "Small Office"
    } else if area_ft2 < 200.0 {
        "Office"
    } else if area_ft2 < 400.0 {
        "Large Office"
    } else if area_ft2 < 800.0 {
        "Conference Room"
    } else {
        "Large Space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use smallvec::smallvec;

    fn direction(dir: Cardinal, coverage: f64) -> WallDirectionResult {
        WallDirectionResult {
            direction: dir,
            has_coverage: coverage > 0.7,
            boundaries: smallvec![],
            gaps: Vec::new(),
            total_coverage: coverage,
        }
    }

    #[test]
    fn test_average_excludes_empty_directions() {
        let dirs = [
            direction(Cardinal::North, 0.0),
            direction(Cardinal::South, 0.9),
            direction(Cardinal::East, 0.9),
            direction(Cardinal::West, 0.9),
        ];
        // Zero-coverage north is excluded from the mean, not averaged in.
        assert_relative_eq!(average_coverage(&dirs), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_confidence_bounds() {
        let dirs = [
            direction(Cardinal::North, 1.0),
            direction(Cardinal::South, 1.0),
            direction(Cardinal::East, 1.0),
            direction(Cardinal::West, 1.0),
        ];
        for gap in [0.0, 0.5, 1.0, 2.0, 100.0] {
            let c = enclosure_confidence(&dirs, gap, 2.0);
            assert!((0.0..=1.0).contains(&c), "confidence {c} out of range");
        }
        // No gap: confidence equals average coverage.
        assert_relative_eq!(enclosure_confidence(&dirs, 0.0, 2.0), 1.0, epsilon = 1e-12);
        // Gap at threshold halves the score; beyond it the penalty saturates.
        assert_relative_eq!(enclosure_confidence(&dirs, 2.0, 2.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(enclosure_confidence(&dirs, 50.0, 2.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_room_record_round_trips_through_json() {
        let room = DetectedRoom {
            id: RoomId(3),
            polygon: vec![
                PlanPoint::new(0.0, 0.0),
                PlanPoint::new(3.0, 0.0),
                PlanPoint::new(3.0, 4.0),
                PlanPoint::new(0.0, 4.0),
            ],
            boundary_objects: vec![CandidateId(1), CandidateId(2)],
            area_ft2: 129.2,
            centroid: PlanPoint::new(1.5, 2.0),
            suggested_name: "Office".to_string(),
            access_points: Vec::new(),
            adjacent_rooms: Vec::new(),
            metadata: RoomMetadata {
                confidence: 0.9,
                boundary_complete: true,
                estimated_height_ft: 8.0,
                detected_at: SystemTime::UNIX_EPOCH,
                enclosure: EnclosureVerdict {
                    is_fully_enclosed: true,
                    max_gap_size_ft: 0.0,
                    confidence: 0.9,
                    per_direction: [
                        direction(Cardinal::North, 0.9),
                        direction(Cardinal::South, 0.9),
                        direction(Cardinal::East, 0.9),
                        direction(Cardinal::West, 0.9),
                    ],
                },
            },
        };

        let json = serde_json::to_string(&room).unwrap();
        let back: DetectedRoom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }

    #[test]
    fn test_name_bands() {
        assert_eq!(suggest_name(30.0), "Closet");
        assert_eq!(suggest_name(75.0), "Small Office");
        assert_eq!(suggest_name(120.0), "Office");
        assert_eq!(suggest_name(250.0), "Large Office");
        assert_eq!(suggest_name(500.0), "Conference Room");
        assert_eq!(suggest_name(5000.0), "Large Space");
    }
}
