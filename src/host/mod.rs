//! Host capabilities consumed by the command handler.
//!
//! The editor-style ambient state (active document, active terminal) is
//! modeled as an explicit capability surface so the handler can be exercised
//! with fakes instead of a live shell.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub mod shell;

/// Content-type tag accepted by the run command.
pub const CPP_LANGUAGE_ID: &str = "cpp";

/// The currently focused source file.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub language_id: String,
    pub dirty: bool,
}

/// An interactive terminal session owned by the host.
pub trait Terminal {
    /// Bring the session into view.
    fn show(&mut self);

    /// Send one line of input; the trailing newline is implicit.
    fn send_text(&mut self, line: &str) -> Result<()>;
}

/// Ambient host state, injected into the handler at call time.
#[allow(async_fn_in_trait)]
pub trait Host {
    type Term: Terminal;

    fn active_document(&self) -> Option<Document>;

    /// Persist the document to disk. The command's one suspension point.
    async fn save_document(&mut self, document: &Document) -> Result<()>;

    /// Reuse the active terminal session or create a new one.
    fn acquire_terminal(&mut self) -> Result<&mut Self::Term>;

    /// Surface a user-visible error outside the terminal.
    fn notify_error(&self, message: &str);
}

/// Map a file extension to the content-type tag the host would assign.
pub fn language_id_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "cpp" | "cc" | "cxx" | "c++" => CPP_LANGUAGE_ID.to_string(),
        "c" => "c".to_string(),
        "rs" => "rust".to_string(),
        "py" => "python".to_string(),
        other => other.to_string(),
    }
}

/// Directory, file name, and base name derived from a document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub dir: PathBuf,
    pub file_name: String,
    pub base_name: String,
}

impl SourcePaths {
    pub fn derive(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("source path has no file name: {}", path.display()))?
            .to_string();
        let base_name = path
            .file_stem()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("source path has no base name: {}", path.display()))?
            .to_string();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            dir,
            file_name,
            base_name,
        })
    }
}
