// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable configuration for a detection pass.
//!
//! Distances are in feet except where the field name says meters; raw
//! world geometry is always meters. Thresholds that shape the scan
//! (coverage ratio, mark radius) are configuration, not constants.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Detection configuration. Construct with `Default` and adjust fields
/// before handing the struct to the detector; the detector validates on
/// construction and the settings are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// World floor elevation, feet.
    pub floor_level_ft: f64,
    /// Height above the floor at which wall scans run, feet.
    pub wall_analysis_height_ft: f64,
    /// Largest tolerated boundary gap before a footprint is rejected, feet.
    pub max_gap_size_ft: f64,
    /// Smallest acceptable room area, square feet.
    pub min_room_area_ft2: f64,
    /// Largest acceptable room area, square feet.
    pub max_room_area_ft2: f64,
    /// Gaps at or below this size are treated as noise, feet.
    pub boundary_tolerance_ft: f64,
    /// Narrowest opening considered a doorway candidate, feet.
    pub doorway_min_width_ft: f64,
    /// Widest opening considered a doorway candidate, feet.
    pub doorway_max_width_ft: f64,
    /// Scan sample step, feet.
    pub grid_resolution_ft: f64,
    /// Nominal wall thickness, feet. Informational only.
    pub wall_thickness_ft: f64,
    /// Fraction of scan samples that must be covered for a direction to
    /// count as walled.
    pub coverage_threshold: f64,
    /// Each boundary hit marks this many neighboring samples on either
    /// side as covered, absorbing small wall misalignments.
    pub coverage_mark_radius: usize,
    /// Minimum enclosure confidence for acceptance.
    pub confidence_threshold: f64,
    /// Maximum ray search distance, feet.
    pub max_ray_distance_ft: f64,
    /// Plan-view margin added around a cluster footprint before
    /// scanning, feet.
    pub footprint_margin_ft: f64,
    /// Spatial clustering cell size, meters (world units).
    pub cell_size_m: f64,
    /// Clusters with fewer members are skipped; a room needs one
    /// boundary contribution per cardinal side.
    pub min_cluster_size: usize,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            floor_level_ft: 0.0,
            wall_analysis_height_ft: 3.0,
            max_gap_size_ft: 2.0,
            min_room_area_ft2: 15.0,
            max_room_area_ft2: 10_000.0,
            boundary_tolerance_ft: 0.5,
            doorway_min_width_ft: 2.0,
            doorway_max_width_ft: 6.0,
            grid_resolution_ft: 0.5,
            wall_thickness_ft: 0.5,
            coverage_threshold: 0.7,
            coverage_mark_radius: 2,
            confidence_threshold: 0.6,
            max_ray_distance_ft: 10.0,
            footprint_margin_ft: 0.5,
            cell_size_m: 5.0,
            min_cluster_size: 4,
        }
    }
}

impl DetectionSettings {
    /// Validate settings that would otherwise produce nonsense scans.
    pub fn validate(&self) -> Result<()> {
        if !(self.grid_resolution_ft > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "grid_resolution_ft must be positive, got {}",
                self.grid_resolution_ft
            )));
        }
        if !(self.max_gap_size_ft > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "max_gap_size_ft must be positive, got {}",
                self.max_gap_size_ft
            )));
        }
        if self.min_room_area_ft2 > self.max_room_area_ft2 {
            return Err(Error::InvalidSettings(format!(
                "min_room_area_ft2 ({}) exceeds max_room_area_ft2 ({})",
                self.min_room_area_ft2, self.max_room_area_ft2
            )));
        }
        if !(self.cell_size_m > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "cell_size_m must be positive, got {}",
                self.cell_size_m
            )));
        }
        if !(self.coverage_threshold > 0.0 && self.coverage_threshold <= 1.0) {
            return Err(Error::InvalidSettings(format!(
                "coverage_threshold must be in (0, 1], got {}",
                self.coverage_threshold
            )));
        }
        if !(self.max_ray_distance_ft > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "max_ray_distance_ft must be positive, got {}",
                self.max_ray_distance_ft
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(DetectionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_resolution() {
        let mut s = DetectionSettings::default();
        s.grid_resolution_ft = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_inverted_area_bounds() {
        let mut s = DetectionSettings::default();
        s.min_room_area_ft2 = 500.0;
        s.max_room_area_ft2 = 100.0;
        assert!(s.validate().is_err());
    }
}
