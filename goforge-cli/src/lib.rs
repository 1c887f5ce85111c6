//! # goforge-cli
//!
//! Command-line tool for scaffolding Go modular services.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `goforge init <name>` | Create a new project, install its dependencies and generate DI wiring |
//!
//! ## Architecture
//!
//! - [`commands::init`] — project scaffolding (`goforge init`)
//! - [`settings`] — optional `goforge.yaml` user settings
//! - [`console`] — colored progress output and the tracing subscriber
//!
//! The scaffolding engine itself lives in `goforge-core`.

pub mod commands;
pub mod console;
pub mod settings;
