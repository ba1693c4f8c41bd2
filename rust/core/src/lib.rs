//! Roomscan Core
//!
//! Data model for room boundary detection: world-space bounding boxes,
//! boundary-candidate views, detection settings, and the `DetectedRoom`
//! entity produced by the engine.

pub mod bounds;
pub mod candidate;
pub mod error;
pub mod polygon;
pub mod room;
pub mod settings;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use bounds::Aabb;
pub use candidate::{BoundaryCandidate, CandidateId, CandidateTags};
pub use error::{Error, Result};
pub use room::{
    average_coverage, enclosure_confidence, suggest_name, AccessPoint, BoundaryHit, Cardinal,
    DetectedRoom, EnclosureVerdict, Gap, PlanPoint, RoomId, RoomMetadata, WallDirectionResult,
};
pub use settings::DetectionSettings;
pub use units::{ft_to_m, m2_to_ft2, m_to_ft, METERS_TO_FEET};
