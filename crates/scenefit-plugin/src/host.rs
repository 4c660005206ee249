// crates/scenefit-plugin/src/host.rs
//
// What a host must expose for the plugin to register, plus a lock-wrapped
// in-memory scene that serves as the EditHandle for tests and headless
// embedding.

use std::sync::Arc;

use parking_lot::Mutex;

use scenefit_core::{EditHandle, MemoryScene, SceneEdit};

/// Host registration surface. Each capability can be refused; registration
/// aborts on the first refusal.
pub trait HostApp {
    /// Human-readable name/version shown in the host's plugin list.
    fn set_plugin_information(&self, info: &str);
    /// Synchronized access to the open project. `None` when the host
    /// refuses to hand one out.
    fn create_edit_handle(&self) -> Option<Arc<dyn EditHandle>>;
    /// Subscribe to project-load events. `false` when unsupported.
    fn register_project_load_handler(&self, handler: Box<dyn Fn() + Send + Sync>) -> bool;
}

/// An in-memory scene behind a lock. The lock plays the role of the host's
/// edit section: the poll thread and the outside world never see the scene
/// concurrently.
#[derive(Clone)]
pub struct SharedScene {
    inner: Arc<Mutex<MemoryScene>>,
}

impl SharedScene {
    pub fn new(scene: MemoryScene) -> Self {
        Self { inner: Arc::new(Mutex::new(scene)) }
    }

    /// Inspect or mutate the scene outside the poll loop. Tests stage
    /// timelines and read logs through this.
    pub fn with<R>(&self, f: impl FnOnce(&mut MemoryScene) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl EditHandle for SharedScene {
    fn with_edit(&self, f: &mut dyn FnMut(&mut dyn SceneEdit)) {
        let mut scene = self.inner.lock();
        f(&mut *scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenefit_core::Dimensions;

    #[test]
    fn with_edit_sees_staged_state() {
        let shared = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        shared.with(|s| {
            s.add_media_object(0, 0, "ImageFile", "File", "a.png");
        });

        let mut seen = None;
        shared.with_edit(&mut |edit| {
            seen = Some(edit.canvas());
            edit.log("[scenefit] hello");
        });
        assert_eq!(seen, Some(Dimensions::new(640, 480)));
        assert_eq!(shared.with(|s| s.log_lines().len()), 1);
    }

    #[test]
    fn clones_share_one_scene() {
        let a = SharedScene::new(MemoryScene::new(Dimensions::new(640, 480)));
        let b = a.clone();
        a.with(|s| s.set_canvas(Dimensions::new(1920, 1080)));
        assert_eq!(b.with(|s| s.canvas()), Dimensions::new(1920, 1080));
    }
}
