// crates/scenefit-media/src/runtime.rs
//
// Process-wide FFmpeg runtime gate. Starts at most once, shuts down at most
// once; once shut down (or failed to start) every later video probe fails
// fast instead of touching FFmpeg.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Once;

use ffmpeg_the_third as ffmpeg;

const IDLE:   u8 = 0;
const UP:     u8 = 1;
const FAILED: u8 = 2;
const DOWN:   u8 = 3;

/// Start/stop bookkeeping for a process-wide subsystem, kept as its own type
/// so the ordering rules stay testable without touching the real runtime.
pub struct Gate {
    state: AtomicU8,
    init:  Once,
}

impl Gate {
    pub const fn new() -> Self {
        Self { state: AtomicU8::new(IDLE), init: Once::new() }
    }

    /// Run `start` on the first call and cache the result. After `shutdown`
    /// the gate stays closed and `start` never runs.
    pub fn ensure_started(&self, start: impl FnOnce() -> bool) -> bool {
        self.init.call_once(|| {
            if self.state.load(Ordering::Acquire) != IDLE {
                return; // shut down before first use
            }
            let next = if start() { UP } else { FAILED };
            // A shutdown that raced the start wins; DOWN stays DOWN.
            let _ = self.state.compare_exchange(IDLE, next, Ordering::AcqRel, Ordering::Acquire);
        });
        self.state.load(Ordering::Acquire) == UP
    }

    /// Close the gate. `stop` runs only for the caller that actually brings
    /// a running subsystem down.
    pub fn shutdown(&self, stop: impl FnOnce()) -> bool {
        let prev = self.state.swap(DOWN, Ordering::AcqRel);
        if prev == UP {
            stop();
            true
        } else {
            false
        }
    }

    pub fn is_up(&self) -> bool {
        self.state.load(Ordering::Acquire) == UP
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

// ── Process-wide runtime ──────────────────────────────────────────────────────

static GATE: Gate = Gate::new();

/// Bring the FFmpeg runtime up if it has not started yet. Idempotent and
/// safe from any thread. Returns whether video probing is available.
pub fn ensure_started() -> bool {
    GATE.ensure_started(|| match ffmpeg::init() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("ffmpeg init failed: {e}");
            false
        }
    })
}

/// Tear the runtime down. Only the first call acts; afterwards the gate
/// stays closed and `ensure_started` reports unavailable.
pub fn shutdown() {
    GATE.shutdown(|| log::debug!("media runtime shut down"));
}
