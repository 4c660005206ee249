// crates/scenefit-core/src/lib.rs
//
// Contracts and pure logic. No decoders, no host bindings. Everything runs
// through the SceneEdit trait, so the same code drives a live host and the
// in-memory scene the tests use.

pub mod adjust;
pub mod edit;
pub mod extract;
pub mod media_types;
pub mod memory;
pub mod scan;

// Re-export the main public API so downstream imports stay flat.
pub use adjust::{AdjustPhase, AspectAdjuster, ResetInbox, TickOutcome};
pub use edit::{Dimensions, EditHandle, ObjectId, Placement, SceneEdit};
pub use extract::{extract_media_source, MediaCandidate, DEFAULT_CANDIDATES};
pub use media_types::{MediaKind, MediaProbe, MediaSource, ProbeError};
pub use memory::MemoryScene;
pub use scan::find_first_object;
