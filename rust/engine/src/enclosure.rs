// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enclosure evaluation.
//!
//! Aggregates the four directional wall results into a single verdict
//! and gates acceptance. Rejection is an expected, frequent outcome,
//! not a failure; reasons are surfaced for diagnostics only.

use roomscan_core::{
    enclosure_confidence, DetectionSettings, EnclosureVerdict, WallDirectionResult,
};
use std::fmt;

/// Why a candidate footprint was dropped. Evaluated in gate order:
/// enclosure, gap size, confidence, area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectionReason {
    /// At least one direction lacked wall coverage.
    IncompleteWalls,
    /// The largest gap exceeded the configured maximum.
    GapTooLarge { gap_ft: f64, max_ft: f64 },
    /// Combined coverage/gap score below the acceptance threshold.
    LowConfidence { confidence: f64, min: f64 },
    /// Footprint area outside the configured room size range.
    AreaOutOfBounds { area_ft2: f64, min: f64, max: f64 },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::IncompleteWalls => write!(f, "incomplete walls"),
            RejectionReason::GapTooLarge { gap_ft, max_ft } => {
                write!(f, "gap too large ({gap_ft:.2} ft > {max_ft:.2} ft)")
            }
            RejectionReason::LowConfidence { confidence, min } => {
                write!(f, "low confidence ({confidence:.2} <= {min:.2})")
            }
            RejectionReason::AreaOutOfBounds { area_ft2, min, max } => {
                write!(f, "area out of bounds ({area_ft2:.1} ft² not in {min:.1}..{max:.1})")
            }
        }
    }
}

/// Evaluates directional scans against the acceptance gates.
pub struct EnclosureEvaluator<'a> {
    settings: &'a DetectionSettings,
}

impl<'a> EnclosureEvaluator<'a> {
    pub fn new(settings: &'a DetectionSettings) -> Self {
        Self { settings }
    }

    /// Combine four directional results into a verdict. Gaps at or
    /// below the boundary tolerance are treated as noise and do not
    /// contribute to the maximum gap.
    pub fn evaluate(&self, per_direction: [WallDirectionResult; 4]) -> EnclosureVerdict {
        let is_fully_enclosed = per_direction.iter().all(|d| d.has_coverage);

        let max_gap_size_ft = per_direction
            .iter()
            .flat_map(|d| d.gaps.iter())
            .map(|g| g.size_ft)
            .filter(|&size| size > self.settings.boundary_tolerance_ft)
            .fold(0.0, f64::max);

        let confidence = enclosure_confidence(
            &per_direction,
            max_gap_size_ft,
            self.settings.max_gap_size_ft,
        );

        EnclosureVerdict {
            is_fully_enclosed,
            max_gap_size_ft,
            confidence,
            per_direction,
        }
    }

    /// The four hard gates, in early-exit order.
    pub fn check_acceptance(
        &self,
        verdict: &EnclosureVerdict,
        area_ft2: f64,
    ) -> Result<(), RejectionReason> {
        if !verdict.is_fully_enclosed {
            return Err(RejectionReason::IncompleteWalls);
        }
        if verdict.max_gap_size_ft > self.settings.max_gap_size_ft {
            return Err(RejectionReason::GapTooLarge {
                gap_ft: verdict.max_gap_size_ft,
                max_ft: self.settings.max_gap_size_ft,
            });
        }
        if verdict.confidence <= self.settings.confidence_threshold {
            return Err(RejectionReason::LowConfidence {
                confidence: verdict.confidence,
                min: self.settings.confidence_threshold,
            });
        }
        if area_ft2 < self.settings.min_room_area_ft2 || area_ft2 > self.settings.max_room_area_ft2
        {
            return Err(RejectionReason::AreaOutOfBounds {
                area_ft2,
                min: self.settings.min_room_area_ft2,
                max: self.settings.max_room_area_ft2,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use roomscan_core::{Cardinal, Gap, PlanPoint};
    use smallvec::smallvec;

    fn direction(dir: Cardinal, coverage: f64, gaps: Vec<f64>) -> WallDirectionResult {
        WallDirectionResult {
            direction: dir,
            has_coverage: coverage > 0.7,
            boundaries: smallvec![],
            gaps: gaps
                .into_iter()
                .map(|size_ft| Gap {
                    start: PlanPoint::new(0.0, 0.0),
                    end: PlanPoint::new(0.0, 0.0),
                    size_ft,
                })
                .collect(),
            total_coverage: coverage,
        }
    }

    fn full_enclosure() -> [WallDirectionResult; 4] {
        [
            direction(Cardinal::North, 0.95, vec![]),
            direction(Cardinal::South, 0.95, vec![]),
            direction(Cardinal::East, 0.95, vec![]),
            direction(Cardinal::West, 0.95, vec![]),
        ]
    }

    #[test]
    fn test_fully_enclosed_accepted() {
        let settings = DetectionSettings::default();
        let evaluator = EnclosureEvaluator::new(&settings);
        let verdict = evaluator.evaluate(full_enclosure());

        assert!(verdict.is_fully_enclosed);
        assert_eq!(verdict.max_gap_size_ft, 0.0);
        assert_relative_eq!(verdict.confidence, 0.95, epsilon = 1e-12);
        assert!(evaluator.check_acceptance(&verdict, 120.0).is_ok());
    }

    #[test]
    fn test_one_direction_uncovered_rejected() {
        let settings = DetectionSettings::default();
        let evaluator = EnclosureEvaluator::new(&settings);
        let mut dirs = full_enclosure();
        dirs[0] = direction(Cardinal::North, 0.2, vec![]);
        let verdict = evaluator.evaluate(dirs);

        assert!(!verdict.is_fully_enclosed);
        assert_eq!(
            evaluator.check_acceptance(&verdict, 120.0),
            Err(RejectionReason::IncompleteWalls)
        );
    }

    #[test]
    fn test_sub_tolerance_gaps_ignored() {
        let settings = DetectionSettings::default();
        let evaluator = EnclosureEvaluator::new(&settings);
        let mut dirs = full_enclosure();
        // Both gaps at or below the 0.5 ft tolerance: noise.
        dirs[1] = direction(Cardinal::South, 0.9, vec![0.5, 0.25]);
        let verdict = evaluator.evaluate(dirs);

        assert_eq!(verdict.max_gap_size_ft, 0.0);
    }

    #[test]
    fn test_gap_gate() {
        let mut settings = DetectionSettings::default();
        settings.max_gap_size_ft = 1.0;
        let evaluator = EnclosureEvaluator::new(&settings);
        let mut dirs = full_enclosure();
        dirs[0] = direction(Cardinal::North, 0.85, vec![1.5]);
        let verdict = evaluator.evaluate(dirs);

        assert_relative_eq!(verdict.max_gap_size_ft, 1.5, epsilon = 1e-12);
        assert!(matches!(
            evaluator.check_acceptance(&verdict, 120.0),
            Err(RejectionReason::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_confidence_gate() {
        let settings = DetectionSettings::default();
        let evaluator = EnclosureEvaluator::new(&settings);
        // Barely-covered directions with a near-threshold gap drag the
        // score under 0.6.
        let dirs = [
            direction(Cardinal::North, 0.72, vec![1.9]),
            direction(Cardinal::South, 0.72, vec![]),
            direction(Cardinal::East, 0.72, vec![]),
            direction(Cardinal::West, 0.72, vec![]),
        ];
        let verdict = evaluator.evaluate(dirs);

        assert!(verdict.is_fully_enclosed);
        assert!(verdict.max_gap_size_ft <= settings.max_gap_size_ft);
        assert!(matches!(
            evaluator.check_acceptance(&verdict, 120.0),
            Err(RejectionReason::LowConfidence { .. })
        ));
    }

    #[test]
    fn test_area_gates() {
        let settings = DetectionSettings::default();
        let evaluator = EnclosureEvaluator::new(&settings);
        let verdict = evaluator.evaluate(full_enclosure());

        // Oversized: all other gates pass, area alone rejects.
        assert!(matches!(
            evaluator.check_acceptance(&verdict, 15_000.0),
            Err(RejectionReason::AreaOutOfBounds { .. })
        ));
        // Undersized.
        assert!(matches!(
            evaluator.check_acceptance(&verdict, 4.0),
            Err(RejectionReason::AreaOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_confidence_within_bounds() {
        let settings = DetectionSettings::default();
        let evaluator = EnclosureEvaluator::new(&settings);
        for coverage in [0.0, 0.3, 0.7, 1.0] {
            for gap in [0.0, 1.0, 2.0, 10.0] {
                let dirs = [
                    direction(Cardinal::North, coverage, vec![gap]),
                    direction(Cardinal::South, coverage, vec![]),
                    direction(Cardinal::East, coverage, vec![]),
                    direction(Cardinal::West, coverage, vec![]),
                ];
                let verdict = evaluator.evaluate(dirs);
                assert!(
                    (0.0..=1.0).contains(&verdict.confidence),
                    "confidence {} out of bounds for coverage {coverage}, gap {gap}",
                    verdict.confidence
                );
            }
        }
    }
}
