//! Crate root: compile-and-run orchestration for C++ source files.
//!
//! The pieces are intentionally small and injected at seams so the command
//! handler can be driven with fakes:
//! - `host` defines the capability traits (active document, terminal session)
//!   and their production shell-backed implementation.
//! - `script` renders the disposable run script and installs it on disk.
//! - `handlers` holds the single user-facing command.
//! - `cli` and `config` resolve compiler and shell settings.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod host;
pub mod script;
