// crates/scenefit-plugin/src/worker.rs
//
// PollWorker: the one background thread driving AspectAdjuster through the
// host's synchronized edit section on a fixed period.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};

use scenefit_core::{AspectAdjuster, EditHandle, TickOutcome};

/// Stop-flag check period while sleeping between ticks. Bounds shutdown
/// latency no matter how long the configured poll period is.
const STOP_CHECK_SLICE: Duration = Duration::from_millis(100);

pub struct PollWorker {
    /// Tick outcomes, oldest first. Observational; dropped when full.
    pub events: Receiver<TickOutcome>,
    stop:       Arc<AtomicBool>,
    handle:     Option<JoinHandle<()>>,
}

impl PollWorker {
    /// Spawn the poll thread. It ticks immediately, then every `period`.
    pub fn spawn(
        edit:     Arc<dyn EditHandle>,
        adjuster: AspectAdjuster,
        period:   Duration,
    ) -> Self {
        let (tx, events) = bounded(64);
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut adjuster = adjuster;
            while !flag.load(Ordering::Relaxed) {
                let mut outcome = None;
                edit.with_edit(&mut |scene| {
                    outcome = Some(adjuster.run_once(scene));
                });
                if let Some(o) = outcome {
                    let _ = tx.try_send(o);
                }
                sleep_sliced(period, &flag);
            }
        });

        Self { events, stop, handle: Some(handle) }
    }

    /// Signal the thread and join it. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PollWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn sleep_sliced(period: Duration, stop: &AtomicBool) {
    let mut left = period;
    while !stop.load(Ordering::Relaxed) && !left.is_zero() {
        let slice = left.min(STOP_CHECK_SLICE);
        thread::sleep(slice);
        left -= slice;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Instant;

    use scenefit_core::{
        Dimensions, MediaKind, MediaProbe, MemoryScene, ProbeError, ResetInbox, SceneEdit,
    };

    use crate::host::SharedScene;

    struct FixedProbe(Dimensions);

    impl MediaProbe for FixedProbe {
        fn probe(&self, _: MediaKind, _: &Path) -> Result<Dimensions, ProbeError> {
            Ok(self.0)
        }
    }

    fn worker_over(scene: SharedScene, period: Duration) -> PollWorker {
        let adjuster = AspectAdjuster::new(
            Arc::new(ResetInbox::new()),
            Arc::new(FixedProbe(Dimensions::new(1920, 1080))),
        );
        PollWorker::spawn(Arc::new(scene), adjuster, period)
    }

    #[test]
    fn first_tick_runs_immediately() {
        let scene = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        let mut worker = worker_over(scene, Duration::from_secs(30));
        let got = worker.events.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(got, TickOutcome::NoObject);
        worker.stop();
    }

    #[test]
    fn stop_returns_quickly_despite_a_long_period() {
        let scene = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        let mut worker = worker_over(scene, Duration::from_secs(30));
        // Let the first tick land so the thread is inside its sleep.
        let _ = worker.events.recv_timeout(Duration::from_secs(2));
        let begun = Instant::now();
        worker.stop();
        assert!(begun.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn worker_adjusts_the_scene() {
        let scene = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        scene.with(|s| {
            s.add_media_object(0, 0, "ImageFile", "File", "a.png");
        });
        let mut worker = worker_over(scene.clone(), Duration::from_millis(10));

        let deadline = Instant::now() + Duration::from_secs(2);
        while scene.with(|s| s.canvas()) != Dimensions::new(1920, 1080) {
            assert!(Instant::now() < deadline, "canvas never adjusted");
            thread::sleep(Duration::from_millis(5));
        }
        worker.stop();
        assert_eq!(scene.with(|s| s.log_lines().len()), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let scene = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        let mut worker = worker_over(scene, Duration::from_millis(10));
        worker.stop();
        worker.stop();
    }

    #[test]
    fn drop_joins_the_thread() {
        let scene = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        let worker = worker_over(scene, Duration::from_millis(10));
        drop(worker); // would hang here if the thread never exited
    }
}
