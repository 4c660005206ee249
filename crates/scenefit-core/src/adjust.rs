// crates/scenefit-core/src/adjust.rs
//
// The once-per-load canvas adjustment. One AspectAdjuster instance lives on
// the poll thread; the host's project-load callback only ever touches the
// ResetInbox.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::edit::{Dimensions, SceneEdit};
use crate::extract::{extract_media_source, MediaCandidate, DEFAULT_CANDIDATES};
use crate::media_types::MediaProbe;
use crate::scan::find_first_object;

// ── Reset inbox ───────────────────────────────────────────────────────────────

/// One-slot mailbox from the host's project-load callback to the poll
/// thread. `request` may run on any thread; `take` hands the request to
/// exactly one caller.
pub struct ResetInbox {
    pending: AtomicBool,
}

impl ResetInbox {
    /// Born armed: the project already open when the plugin comes up gets
    /// adjusted without waiting for a load event.
    pub fn new() -> Self {
        Self { pending: AtomicBool::new(true) }
    }

    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for ResetInbox {
    fn default() -> Self {
        Self::new()
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

/// Where the adjuster stands within the current project load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjustPhase {
    /// Reset consumed, timeline not scanned yet.
    Armed,
    /// Scanned at least once without finding a usable media object.
    WaitingForMedia,
    /// Adjustment applied, skipped, or abandoned. Idle until the next reset.
    Done,
}

/// What one poll tick did. Observational: the worker forwards these over a
/// channel, nothing steers on them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Done,
    NoObject,
    NoMedia,
    ProbeFailed { path: PathBuf },
    Resized     { from: Dimensions, to: Dimensions },
    Unchanged   { size: Dimensions },
}

pub struct AspectAdjuster {
    phase:      AdjustPhase,
    reset:      Arc<ResetInbox>,
    probe:      Arc<dyn MediaProbe>,
    candidates: &'static [MediaCandidate],
}

impl AspectAdjuster {
    pub fn new(reset: Arc<ResetInbox>, probe: Arc<dyn MediaProbe>) -> Self {
        Self {
            phase: AdjustPhase::Armed,
            reset,
            probe,
            candidates: &DEFAULT_CANDIDATES,
        }
    }

    /// Swap in a different parameter table, for hosts whose media effects go
    /// by other names.
    pub fn with_candidates(mut self, candidates: &'static [MediaCandidate]) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn phase(&self) -> AdjustPhase {
        self.phase
    }

    /// One poll tick. Must run inside the host's synchronized edit section.
    pub fn run_once(&mut self, edit: &mut dyn SceneEdit) -> TickOutcome {
        if self.reset.take() {
            self.phase = AdjustPhase::Armed;
        }
        if self.phase == AdjustPhase::Done {
            return TickOutcome::Done;
        }

        let Some(object) = find_first_object(&*edit) else {
            self.phase = AdjustPhase::WaitingForMedia;
            return TickOutcome::NoObject;
        };
        let Some(media) = extract_media_source(&*edit, object, self.candidates) else {
            // Not a media object. It does not count as "seen"; a media file
            // placed later in this load can still win.
            self.phase = AdjustPhase::WaitingForMedia;
            return TickOutcome::NoMedia;
        };

        // First media object of this load. Success, mismatch, or failure,
        // the adjuster is finished until the next reset.
        self.phase = AdjustPhase::Done;

        let native = match self.probe.probe(media.kind, &media.path) {
            Ok(d)  => d,
            Err(_) => {
                edit.log(&format!(
                    "[scenefit] could not read media size from {}",
                    media.path.display()
                ));
                return TickOutcome::ProbeFailed { path: media.path };
            }
        };

        let canvas = edit.canvas();
        if canvas == native {
            edit.log(&format!("[scenefit] scene resolution already matches {native}"));
            return TickOutcome::Unchanged { size: native };
        }

        edit.set_canvas(native);
        edit.log(&format!("[scenefit] scene resolution set to {native}"));
        TickOutcome::Resized { from: canvas, to: native }
    }
}
