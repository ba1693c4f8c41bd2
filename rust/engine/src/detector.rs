// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The room detector: owns the registry of detected rooms and runs the
//! full pipeline as one synchronous pass.
//!
//! Every pass clears the registry and reassigns monotonically
//! increasing ids before repopulating; consumers must not hold stale
//! ids across passes. The detector is single-threaded by design and
//! safe to drive from one UI/render thread without locks. Re-scans can
//! be coalesced through a cooperative debounce: `request_update` arms
//! (or re-arms, last-call-wins) a deadline, and the host's loop calls
//! `poll_update` until the quiet period elapses.

use crate::classify::is_potential_boundary;
use crate::cluster::{cluster_by_cell, cluster_footprint};
use crate::enclosure::EnclosureEvaluator;
use crate::factory;
use crate::scan::WallScanner;
use roomscan_core::{
    ft_to_m, polygon, Aabb, BoundaryCandidate, DetectedRoom, DetectionSettings, EnclosureVerdict,
    Result, RoomId,
};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Quiet period for coalescing scene-change notifications.
const UPDATE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Footprints overlapping beyond this IoU are considered duplicate
/// detections of the same physical room.
const DUPLICATE_IOU_THRESHOLD: f64 = 0.5;

/// An accepted footprint awaiting room construction.
struct AcceptedFootprint {
    footprint: Aabb,
    verdict: EnclosureVerdict,
}

/// Cooperative debounce: a stored deadline acts as the cancellable
/// timer handle; re-arming replaces it.
#[derive(Debug)]
struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm or re-arm. A pending deadline is replaced, never queued.
    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Take the deadline if it has elapsed.
    fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Detects enclosed rooms from boundary candidates and owns the result
/// set until the next pass.
pub struct RoomDetector {
    settings: DetectionSettings,
    rooms: Vec<DetectedRoom>,
    next_room_id: u64,
    debounce: Debouncer,
}

impl RoomDetector {
    /// Create a detector. Settings are validated once here and
    /// immutable afterwards.
    pub fn new(settings: DetectionSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            rooms: Vec::new(),
            next_room_id: 1,
            debounce: Debouncer::new(UPDATE_DEBOUNCE),
        })
    }

    pub fn settings(&self) -> &DetectionSettings {
        &self.settings
    }

    /// Run the full detection pipeline synchronously. The registry is
    /// cleared and rebuilt; returns the new room list.
    pub fn detect_rooms(&mut self, candidates: &[BoundaryCandidate]) -> &[DetectedRoom] {
        self.rooms.clear();

        let boundary_indices: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| is_potential_boundary(c))
            .map(|(i, _)| i)
            .collect();

        if boundary_indices.len() < self.settings.min_cluster_size {
            info!(
                candidates = candidates.len(),
                boundaries = boundary_indices.len(),
                "too few boundary candidates, skipping detection"
            );
            return &self.rooms;
        }

        let cells = cluster_by_cell(candidates, &boundary_indices, self.settings.cell_size_m);
        let mut keys: Vec<_> = cells.keys().copied().collect();
        keys.sort_unstable();

        // Ray casting runs against the global candidate list, not just
        // the cluster under test.
        let scanner = WallScanner::new(candidates, &self.settings);
        let evaluator = EnclosureEvaluator::new(&self.settings);
        let margin_m = ft_to_m(self.settings.footprint_margin_ft);

        let mut accepted: Vec<AcceptedFootprint> = Vec::new();
        for key in keys {
            let members = &cells[&key];
            if members.len() < self.settings.min_cluster_size {
                debug!(cell = ?key, members = members.len(), "cluster too small, skipped");
                continue;
            }
            let Some(base) = cluster_footprint(candidates, members) else {
                continue;
            };
            let footprint = base.expanded_plan(margin_m);

            let per_direction = scanner.analyze(&footprint);
            let verdict = evaluator.evaluate(per_direction);
            let area_ft2 = factory::footprint_area_ft2(&footprint);

            match evaluator.check_acceptance(&verdict, area_ft2) {
                Ok(()) => accepted.push(AcceptedFootprint { footprint, verdict }),
                Err(reason) => {
                    debug!(cell = ?key, area_ft2, %reason, "footprint rejected");
                }
            }
        }

        for kept in merge_duplicates(accepted) {
            let id = RoomId(self.next_room_id);
            if let Some(room) =
                factory::build_room(id, &kept.footprint, kept.verdict, candidates)
            {
                self.next_room_id += 1;
                self.rooms.push(room);
            }
        }

        info!(rooms = self.rooms.len(), "detection pass complete");
        &self.rooms
    }

    /// Rooms from the latest pass, without re-scanning.
    pub fn detected_rooms(&self) -> &[DetectedRoom] {
        &self.rooms
    }

    /// First room whose polygon contains the plan point, if any.
    pub fn room_containing_point(&self, x: f64, z: f64) -> Option<&DetectedRoom> {
        self.rooms
            .iter()
            .find(|room| polygon::contains_point(&room.polygon, x, z))
    }

    /// Drop all detected rooms without running a pass.
    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    /// Request a debounced re-scan. Calling again before the quiet
    /// period elapses replaces the pending deadline (last-call-wins).
    pub fn request_update(&mut self) {
        self.debounce.arm(Instant::now());
    }

    /// Whether a re-scan request is pending.
    pub fn update_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Run the pending re-scan if its quiet period has elapsed. Returns
    /// `true` when a detection pass ran.
    pub fn poll_update(&mut self, candidates: &[BoundaryCandidate]) -> bool {
        if self.debounce.fire_if_due(Instant::now()) {
            self.detect_rooms(candidates);
            return true;
        }
        false
    }
}

/// Drop duplicate detections from physically overlapping clusters: of
/// two footprints with IoU above the threshold, only the
/// higher-confidence one survives. Order is deterministic (confidence,
/// then footprint position) so repeated passes on an unchanged scene
/// yield identical rooms.
fn merge_duplicates(mut accepted: Vec<AcceptedFootprint>) -> Vec<AcceptedFootprint> {
    accepted.sort_by(|a, b| {
        b.verdict
            .confidence
            .total_cmp(&a.verdict.confidence)
            .then(a.footprint.min.x.total_cmp(&b.footprint.min.x))
            .then(a.footprint.min.z.total_cmp(&b.footprint.min.z))
    });

    let mut kept: Vec<AcceptedFootprint> = Vec::new();
    for candidate in accepted {
        let rect = factory::footprint_rect(&candidate.footprint);
        let duplicate = kept.iter().any(|k| {
            polygon::rect_iou(rect, factory::footprint_rect(&k.footprint))
                > DUPLICATE_IOU_THRESHOLD
        });
        if duplicate {
            debug!(?rect, "duplicate footprint merged away");
        } else {
            kept.push(candidate);
        }
    }
    kept
}
