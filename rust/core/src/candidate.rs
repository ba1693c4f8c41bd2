// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only views onto scene objects that may act as room boundaries.
//!
//! The engine never mutates a candidate; the scene collaborator supplies
//! the bounding box and optional metadata tags, and keeps internal/debug
//! helper objects out of the list.

use crate::bounds::Aabb;
use serde::{Deserialize, Serialize};

/// Opaque handle identifying a scene object across a detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub u64);

/// Optional metadata tags supplied by the scene collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateTags {
    /// Object kind as tagged in the scene (e.g. `"room_mass"`).
    pub kind: Option<String>,
    /// Object was placed specifically to block room space.
    pub is_blocking_mass: bool,
    /// Object is explicitly designated as a room boundary.
    pub is_boundary: bool,
    /// Explicit object height in feet, when the scene knows better
    /// than the bounding box.
    pub height_hint_ft: Option<f64>,
}

/// A scene object eligible for boundary classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCandidate {
    pub id: CandidateId,
    pub aabb: Aabb,
    pub tags: CandidateTags,
}

impl BoundaryCandidate {
    /// Create a candidate view. Returns `None` when the bounding box is
    /// degenerate; such objects are silently excluded rather than
    /// reported as errors.
    pub fn new(id: CandidateId, aabb: Aabb, tags: CandidateTags) -> Option<Self> {
        if aabb.is_degenerate() {
            return None;
        }
        Some(Self { id, aabb, tags })
    }

    /// Untagged candidate, convenient for plain geometry.
    pub fn untagged(id: CandidateId, aabb: Aabb) -> Option<Self> {
        Self::new(id, aabb, CandidateTags::default())
    }
}
