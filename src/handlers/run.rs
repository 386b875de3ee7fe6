//! The compile-and-run command.
//!
//! Strictly linear: validate the active document, persist it if dirty, render
//! and install the run script, dispatch it to a terminal. Every failure class
//! surfaces as exactly one fixed-message notification and aborts; the
//! compile/run outcome itself is reported inside the terminal by the script.

use anyhow::Result;

use crate::host::{Host, SourcePaths, Terminal, CPP_LANGUAGE_ID};
use crate::script::{self, install::ScriptFile, ScriptParams};

/// Compiler settings resolved by `main` from config and CLI flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub compiler: String,
    pub flags: Vec<String>,
}

pub async fn run<H: Host>(host: &mut H, opts: &RunOptions) -> Result<()> {
    let Some(document) = host.active_document() else {
        host.notify_error("No active editor found.");
        return Ok(());
    };
    if document.language_id != CPP_LANGUAGE_ID {
        host.notify_error("The current file is not a C++ file.");
        return Ok(());
    }

    if document.dirty && host.save_document(&document).await.is_err() {
        host.notify_error("Failed to save the document.");
        return Ok(());
    }

    let source = SourcePaths::derive(&document.path)?;

    let installed = ScriptFile::create(&source.dir, &source.base_name).and_then(|script| {
        let params = ScriptParams {
            dir: &source.dir,
            file_name: &source.file_name,
            base_name: &source.base_name,
            compiler: &opts.compiler,
            flags: &opts.flags,
        };
        let text = script::render(&params, script.path());
        script.persist(&text)
    });
    let script_path = match installed {
        Ok(path) => path,
        Err(_) => {
            host.notify_error("Failed to write the run script.");
            return Ok(());
        }
    };

    let terminal = host.acquire_terminal()?;
    terminal.show();
    terminal.send_text(&format!("bash \"{}\"", script_path.display()))
}
