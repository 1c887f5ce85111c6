//! Human-readable progress reporting.

use std::path::Path;
use std::sync::Mutex;

use crate::error::ScaffoldError;

/// A stage of the scaffolding pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Directories,
    Files,
    Dependencies,
    Generate,
}

impl Stage {
    pub fn describe(&self) -> &'static str {
        match self {
            Stage::Directories => "Creating directory structure",
            Stage::Files => "Creating boilerplate files",
            Stage::Dependencies => "Installing dependencies",
            Stage::Generate => "Generating dependency injection code",
        }
    }
}

/// What a failed run did with the partial project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// The project root was removed.
    Removed,
    /// Partial output stays on disk.
    Kept,
    /// Removal was attempted and failed; whatever remains stays on disk.
    RemovalFailed,
}

/// Sink for progress events emitted by the engine.
///
/// Progress is meant for the person running the tool. Diagnostics go
/// through `tracing`.
pub trait Progress {
    fn stage(&self, stage: Stage);

    fn directory(&self, _path: &Path) {}

    fn file(&self, _path: &Path) {}

    fn step(&self, name: &str);

    fn stage_done(&self, _stage: Stage) {}

    /// The run failed at `error.step()`; `root` was handled as `cleanup` says.
    fn aborted(&self, _error: &ScaffoldError, _root: &Path, _cleanup: Cleanup) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn stage(&self, _stage: Stage) {}

    fn step(&self, _name: &str) {}
}

/// Records events as strings, for assertions in tests.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, event: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Progress for Recorder {
    fn stage(&self, stage: Stage) {
        self.push(format!("stage:{stage:?}"));
    }

    fn directory(&self, path: &Path) {
        self.push(format!("dir:{}", path.display()));
    }

    fn file(&self, path: &Path) {
        self.push(format!("file:{}", path.display()));
    }

    fn step(&self, name: &str) {
        self.push(format!("step:{name}"));
    }

    fn stage_done(&self, stage: Stage) {
        self.push(format!("done:{stage:?}"));
    }

    fn aborted(&self, error: &ScaffoldError, _root: &Path, cleanup: Cleanup) {
        self.push(format!("aborted:{}:{cleanup:?}", error.step()));
    }
}
