// crates/scenefit-plugin/src/lib.rs
//
// Plugin lifecycle: bring the media runtime up, register against a host,
// poll, tear down in order. The host-ABI shim that exports the C entry
// points lives outside this crate and calls straight through.

pub mod host;
pub mod settings;
pub mod worker;

use std::sync::Arc;

use crossbeam_channel::Receiver;
use thiserror::Error;

pub use host::{HostApp, SharedScene};
pub use settings::PluginSettings;
pub use worker::PollWorker;

// Re-export the core surface so embedders import from one place.
pub use scenefit_core::{
    AdjustPhase, AspectAdjuster, Dimensions, EditHandle, MediaKind, MediaProbe,
    MemoryScene, ResetInbox, SceneEdit, TickOutcome,
};
pub use scenefit_media::SystemProbe;

/// What can go wrong while bringing the plugin up.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("media runtime failed to start")]
    MediaRuntime,
    #[error("host did not provide an edit handle")]
    EditHandleUnavailable,
    #[error("host did not accept the project-load handler")]
    LoadEventsUnavailable,
}

pub struct ScenefitPlugin {
    settings: PluginSettings,
    probe:    Arc<dyn MediaProbe>,
    reset:    Arc<ResetInbox>,
    worker:   Option<PollWorker>,
}

impl ScenefitPlugin {
    pub fn new(settings: PluginSettings) -> Self {
        Self::with_probe(settings, Arc::new(SystemProbe))
    }

    /// Probe injection seam for tests and unusual hosts.
    pub fn with_probe(settings: PluginSettings, probe: Arc<dyn MediaProbe>) -> Self {
        Self {
            settings,
            probe,
            reset:  Arc::new(ResetInbox::new()),
            worker: None,
        }
    }

    /// Warm the media runtime. Failure is fatal to plugin load: a plugin
    /// that cannot probe video cannot keep its one promise. The probe also
    /// starts the runtime lazily, so a host may skip this and pay on the
    /// first video file instead.
    pub fn initialize(&self) -> Result<(), PluginError> {
        if scenefit_media::runtime::ensure_started() {
            Ok(())
        } else {
            Err(PluginError::MediaRuntime)
        }
    }

    /// Wire up against `host` and start polling. A refused host capability
    /// aborts registration and nothing stays running. Registering twice is
    /// a no-op.
    pub fn register(&mut self, host: &dyn HostApp) -> Result<(), PluginError> {
        if self.worker.is_some() {
            return Ok(());
        }

        host.set_plugin_information(concat!("Scenefit ", env!("CARGO_PKG_VERSION")));

        let Some(edit) = host.create_edit_handle() else {
            return Err(PluginError::EditHandleUnavailable);
        };

        if !self.settings.enabled {
            edit.with_edit(&mut |scene| scene.log("[scenefit] disabled by settings"));
            return Ok(());
        }

        let reset = Arc::clone(&self.reset);
        if !host.register_project_load_handler(Box::new(move || reset.request())) {
            return Err(PluginError::LoadEventsUnavailable);
        }

        // The project that is already open counts as loaded.
        self.reset.request();
        edit.with_edit(&mut |scene| scene.log("[scenefit] loaded"));

        let adjuster = AspectAdjuster::new(Arc::clone(&self.reset), Arc::clone(&self.probe));
        self.worker = Some(PollWorker::spawn(edit, adjuster, self.settings.poll_interval()));
        Ok(())
    }

    /// Outcome stream of the poll worker; present once registered.
    pub fn events(&self) -> Option<&Receiver<TickOutcome>> {
        self.worker.as_ref().map(|w| &w.events)
    }

    /// Stop polling, then close the media runtime. Safe to call twice; the
    /// runtime itself shuts down at most once, and only after the worker
    /// has joined.
    pub fn uninitialize(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.stop();
        }
        scenefit_media::runtime::shutdown();
    }
}
