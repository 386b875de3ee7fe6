//! On-disk installation of the generated run script.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tempfile::{Builder, NamedTempFile};

/// A reserved location for one run script.
///
/// The path keeps the hidden-dot marker and `_run.sh` convention but carries
/// a random component, so two invocations against same-named sources in the
/// same directory never race on a single path. Dropping the value without
/// calling [`ScriptFile::persist`] removes the reservation from disk.
pub struct ScriptFile {
    file: NamedTempFile,
}

impl ScriptFile {
    /// Reserve a unique hidden script path next to the source file.
    pub fn create(dir: &Path, base_name: &str) -> Result<Self> {
        let file = Builder::new()
            .prefix(&format!(".{base_name}_run_"))
            .suffix(".sh")
            .tempfile_in(dir)
            .with_context(|| format!("reserving run script in {}", dir.display()))?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Write the script text, mark it owner-executable, and keep it on disk.
    pub fn persist(mut self, text: &str) -> Result<PathBuf> {
        self.file
            .write_all(text.as_bytes())
            .with_context(|| format!("writing run script {}", self.file.path().display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            self.file
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o755))
                .with_context(|| format!("marking {} executable", self.file.path().display()))?;
        }
        let (_file, path) = self
            .file
            .keep()
            .map_err(|e| anyhow!("keeping run script: {e}"))?;
        Ok(path)
    }
}
