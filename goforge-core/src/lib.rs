//! # goforge-core
//!
//! Scaffolding engine for goforge: turns a project name, a Go module path and
//! a database choice into a ready-to-run Go service skeleton.
//!
//! The engine is a linear, synchronous pipeline with fail-fast abort:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Context resolution | [`context`] | [`TemplateContext`] |
//! | Directory planning | [`planner`] | directory skeleton |
//! | Materialization | [`materializer`], [`render`], [`bundle`] | rendered files |
//! | Build orchestration | [`orchestrator`] | fetched dependencies, generated code |
//!
//! [`pipeline::Scaffolder`] ties the stages together. Nothing is rolled back
//! on failure unless the caller opts into [`RunOptions::clean_on_failure`].
//!
//! ```ignore
//! use goforge_core::prelude::*;
//! use std::path::Path;
//!
//! let ctx = TemplateContext::resolve(Path::new("."), "demo", "example.com/demo", "PostgreSQL")?;
//! let report = Scaffolder::new(TemplateRegistry::embedded())
//!     .run(&ctx, Path::new("."), &RunOptions::default(), &Silent)?;
//! ```

pub mod bundle;
pub mod catalog;
pub mod context;
pub mod error;
pub mod materializer;
pub mod orchestrator;
pub mod pipeline;
pub mod planner;
pub mod progress;
pub mod render;

pub use bundle::{EmbeddedTemplates, MemoryTemplates, TemplateBundle, TemplateRegistry};
pub use catalog::{DirectoryCatalog, TemplateCatalog, TemplateCatalogEntry};
pub use context::{Database, TemplateContext};
pub use error::ScaffoldError;
pub use orchestrator::{CommandRunner, DependencySpec, GenerationStep, SystemRunner, ToolOutput};
pub use pipeline::{Plan, RunOptions, ScaffoldReport, Scaffolder};
pub use progress::{Cleanup, Progress, Recorder, Silent, Stage};

pub mod prelude {
    //! Re-exports of the types needed to drive a scaffolding run.
    pub use crate::bundle::TemplateRegistry;
    pub use crate::context::{Database, TemplateContext};
    pub use crate::error::ScaffoldError;
    pub use crate::pipeline::{RunOptions, ScaffoldReport, Scaffolder};
    pub use crate::progress::{Cleanup, Progress, Silent, Stage};
}
