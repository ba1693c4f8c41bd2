// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Doorway candidates from wall gaps.
//!
//! A separate, opt-in pass over the gap data the wall analyzer already
//! computed: gaps whose width falls in the configured doorway range are
//! natural doorway candidates. The detection pipeline does not invoke
//! this pass; `DetectedRoom::access_points` stays empty. Inter-room
//! adjacency resolution remains unimplemented.

use roomscan_core::{Cardinal, DetectionSettings, EnclosureVerdict, PlanPoint, RoomId};
use tracing::debug;

/// A gap sized like a doorway on one side of a footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorwayCandidate {
    /// Plan midpoint of the gap, on the footprint edge under test.
    pub position: PlanPoint,
    /// Gap width, feet.
    pub width_ft: f64,
    /// Which side of the footprint the gap was found on.
    pub direction: Cardinal,
}

/// Filter analyzer gaps down to doorway-sized openings.
pub fn doorway_candidates(
    verdict: &EnclosureVerdict,
    settings: &DetectionSettings,
) -> Vec<DoorwayCandidate> {
    let mut doorways = Vec::new();
    for dir in &verdict.per_direction {
        for gap in &dir.gaps {
            if gap.size_ft >= settings.doorway_min_width_ft
                && gap.size_ft <= settings.doorway_max_width_ft
            {
                doorways.push(DoorwayCandidate {
                    position: PlanPoint::new(
                        (gap.start.x + gap.end.x) / 2.0,
                        (gap.start.z + gap.end.z) / 2.0,
                    ),
                    width_ft: gap.size_ft,
                    direction: dir.direction,
                });
            }
        }
    }
    doorways
}

/// Room-to-room adjacency from shared doorways. Not yet implemented;
/// always returns an empty list.
pub fn resolve_adjacency(_rooms_with_doorways: &[(RoomId, Vec<DoorwayCandidate>)]) -> Vec<(RoomId, RoomId)> {
    debug!("room adjacency resolution not yet implemented");
    Vec::new()
}
