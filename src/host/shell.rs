//! Shell-backed host: the production implementation of the capability traits.
//!
//! The "active document" is the file named on the command line and the
//! "terminal session" is a shell process attached to the invoking terminal,
//! or a freshly spawned interactive login shell when there is none to reuse.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tokio::process::Command;

use crate::config::Config;
use crate::host::{language_id_for, Document, Host, Terminal};

pub struct ShellHost {
    document: Option<Document>,
    shell: String,
    force_new_terminal: bool,
    terminal: Option<ShellTerminal>,
}

impl ShellHost {
    pub fn from_config(cfg: &Config, file: Option<PathBuf>, force_new_terminal: bool) -> Result<Self> {
        if cfg!(windows) {
            bail!("cpprun drives a bash run script through a Unix shell; Windows is not supported");
        }
        let shell = resolve_shell(cfg);
        let document = file.filter(|p| p.is_file()).map(|path| {
            let language_id = language_id_for(&path);
            Document {
                path,
                language_id,
                // Files named on a command line are already persisted.
                dirty: false,
            }
        });
        Ok(Self {
            document,
            shell,
            force_new_terminal,
            terminal: None,
        })
    }
}

impl Host for ShellHost {
    type Term = ShellTerminal;

    fn active_document(&self) -> Option<Document> {
        self.document.clone()
    }

    async fn save_document(&mut self, _document: &Document) -> Result<()> {
        Ok(())
    }

    fn acquire_terminal(&mut self) -> Result<&mut ShellTerminal> {
        let reuse = !self.force_new_terminal && io::stdout().is_terminal();
        let shell = self.shell.clone();
        Ok(self.terminal.get_or_insert_with(|| {
            if reuse {
                ShellTerminal::current(shell)
            } else {
                ShellTerminal::login(shell)
            }
        }))
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

fn resolve_shell(cfg: &Config) -> String {
    match cfg.get("SHELL_NAME").as_deref() {
        None | Some("") | Some("auto") => {
            std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".into())
        }
        Some(name) => name.to_string(),
    }
}

/// One interactive shell session. A reused session runs without `--login`
/// on the inherited tty; a created one is an interactive login shell.
pub struct ShellTerminal {
    program: String,
    login: bool,
}

impl ShellTerminal {
    fn current(program: String) -> Self {
        Self { program, login: false }
    }

    fn login(program: String) -> Self {
        Self { program, login: true }
    }
}

impl Terminal for ShellTerminal {
    fn show(&mut self) {
        // The session shares the invoking tty; there is nothing to raise.
    }

    fn send_text(&mut self, line: &str) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        if self.login {
            cmd.arg("--login");
        }
        cmd.arg("-c").arg(line);
        // Fire and forget: the child keeps running after the handle drops,
        // and the compile/run sequence reports its own outcome on the tty.
        cmd.spawn()
            .with_context(|| format!("spawning terminal shell {}", self.program))?;
        Ok(())
    }
}
