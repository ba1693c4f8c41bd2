//! Roomscan Engine
//!
//! Infers enclosed rooms as negative space bounded by arbitrary scene
//! objects, without any object being explicitly tagged as a room
//! boundary. Pipeline: classifier → spatial grid clusterer → directional
//! wall analyzer → enclosure evaluator → room factory → registry.
//!
//! The pipeline is purely functional per invocation; a full re-scan is
//! the unit of work and the detector rebuilds its registry wholesale on
//! each pass.

pub mod access;
pub mod classify;
pub mod cluster;
pub mod detector;
pub mod enclosure;
pub mod factory;
pub mod raycast;
pub mod scan;
pub mod trace;

pub use access::{doorway_candidates, DoorwayCandidate};
pub use classify::is_potential_boundary;
pub use detector::RoomDetector;
pub use enclosure::{EnclosureEvaluator, RejectionReason};
pub use factory::build_room;
pub use raycast::RayHit;
pub use scan::WallScanner;
pub use trace::{trace_polygon, PlanEdge};
