// crates/scenefit-media/src/lib.rs
//
// Decoder-facing side: the FFmpeg runtime gate and the system probe. No host
// bindings here; scenefit-plugin does the wiring.

pub mod probe;
pub mod runtime;

pub use probe::SystemProbe;
