//! Command implementations for the `goforge` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Project scaffolding — `goforge init <name>`.
///
/// Prompts for the Go module path and database backend, then runs the
/// `goforge-core` pipeline: directory skeleton, rendered templates,
/// `go get` for every dependency and `go generate ./...`.
pub mod init;
