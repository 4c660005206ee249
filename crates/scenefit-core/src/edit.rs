// crates/scenefit-core/src/edit.rs
//
// Project-surface contracts. The host owns the project; everything here only
// reads the timeline and writes the canvas size. Hosts implement these two
// traits, tests use the in-memory scene in `memory.rs`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel size of the project canvas, and of probed media frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width:  u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Opaque handle to a timeline object. Only valid for the edit section it
/// was obtained in; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

/// Where an object sits on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub layer: u32,
    /// Start frame. The host decides the unit; ordering is all that matters.
    pub start: i64,
}

/// The open project, as seen from inside the host's synchronized edit
/// section.
pub trait SceneEdit {
    fn canvas(&self) -> Dimensions;
    fn set_canvas(&mut self, size: Dimensions);

    /// Highest occupied layer index. `None` when the timeline is empty.
    fn max_layer(&self) -> Option<u32>;
    /// The object in `slot` of `layer`, slots counted in start order.
    fn find_object(&self, layer: u32, slot: u32) -> Option<ObjectId>;
    fn placement(&self, object: ObjectId) -> Option<Placement>;
    /// Resolve the named effect parameter of `object` to its string value.
    fn effect_value(&self, object: ObjectId, effect: &str, item: &str) -> Option<String>;

    /// Append one line to the host's plugin log.
    fn log(&mut self, line: &str);
}

/// Entry into the host's synchronized edit section. The host guarantees `f`
/// never runs concurrently with its own editing.
pub trait EditHandle: Send + Sync {
    fn with_edit(&self, f: &mut dyn FnMut(&mut dyn SceneEdit));
}
