// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! World-space axis-aligned bounding boxes.
//!
//! All coordinates are in meters, Y-up. The plan view used by room
//! detection is the XZ plane.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space (meters, Y-up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point3<f64>,
    /// Maximum corner
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a box from its two corners.
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Extent along X (plan width)
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y (world height)
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z (plan depth)
    #[inline]
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Center of the box
    #[inline]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// A box is degenerate when any coordinate is non-finite or any
    /// extent is negative. Degenerate boxes are excluded from both
    /// classification and ray casting.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.min.coords.iter().all(|c| c.is_finite())
            && self.max.coords.iter().all(|c| c.is_finite());
        if !finite {
            return true;
        }
        self.width() < 0.0 || self.height() < 0.0 || self.depth() < 0.0
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Grow the box in the plan (XZ) directions by `margin` meters.
    /// Height is left unchanged.
    pub fn expanded_plan(&self, margin: f64) -> Aabb {
        Aabb {
            min: Point3::new(self.min.x - margin, self.min.y, self.min.z - margin),
            max: Point3::new(self.max.x + margin, self.max.y, self.max.z + margin),
        }
    }
}
