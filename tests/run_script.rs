//! End-to-end checks for the generated run script, driven under bash with a
//! stub compiler so no real C++ toolchain is needed.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use cpprun::script::{self, install::ScriptFile, ScriptParams};

// Scans for -o and fakes a successful compile by emitting a tiny runnable
// "binary" at the requested output path.
const OK_COMPILER: &str = r#"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
    if [ "$1" = "-o" ]; then
        out="$2"
        shift 2
    else
        shift
    fi
done
printf '#!/bin/sh\necho hi\n' > "$out"
chmod +x "$out"
"#;

const FAILING_COMPILER: &str = "#!/bin/sh\nexit 1\n";

fn bash_available() -> bool {
    Command::new("bash")
        .arg("-c")
        .arg("true")
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn write_stub_compiler(dir: &Path, body: &str) -> Result<String> {
    let path = dir.join("stubcc");
    fs::write(&path, body)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path.to_string_lossy().into_owned())
}

fn install_script(dir: &Path, compiler: &str) -> Result<PathBuf> {
    let script = ScriptFile::create(dir, "hello")?;
    let params = ScriptParams {
        dir,
        file_name: "hello.cpp",
        base_name: "hello",
        compiler,
        flags: &[],
    };
    let text = script::render(&params, script.path());
    script.persist(&text)
}

#[test]
fn successful_compile_runs_binary_and_removes_script() -> Result<()> {
    if !bash_available() {
        println!("bash not available; skipping");
        return Ok(());
    }
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("hello.cpp"), "int main() { return 0; }\n")?;
    let compiler = write_stub_compiler(dir.path(), OK_COMPILER)?;
    let script_path = install_script(dir.path(), &compiler)?;

    let out = Command::new("bash").arg(&script_path).output()?;
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.ends_with("hi\n\n"), "stdout: {stdout:?}");
    assert!(!stdout.contains("Compilation failed."));
    assert!(dir.path().join("hello").exists(), "binary left behind");
    assert!(!script_path.exists(), "script removed itself");
    Ok(())
}

#[test]
fn failed_compile_reports_and_leaves_no_binary() -> Result<()> {
    if !bash_available() {
        println!("bash not available; skipping");
        return Ok(());
    }
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("hello.cpp"), "int main( {\n")?;
    let compiler = write_stub_compiler(dir.path(), FAILING_COMPILER)?;
    let script_path = install_script(dir.path(), &compiler)?;

    let out = Command::new("bash").arg(&script_path).output()?;
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.ends_with("Compilation failed.\n\n"), "stdout: {stdout:?}");
    assert!(!dir.path().join("hello").exists(), "no binary from this run");
    assert!(!script_path.exists(), "script removed itself even on failure");
    Ok(())
}

#[test]
fn stale_binary_is_clobbered_before_compiling() -> Result<()> {
    if !bash_available() {
        println!("bash not available; skipping");
        return Ok(());
    }
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("hello.cpp"), "int main( {\n")?;
    let stale = dir.path().join("hello");
    fs::write(&stale, "#!/bin/sh\necho stale\n")?;
    fs::set_permissions(&stale, fs::Permissions::from_mode(0o755))?;
    let compiler = write_stub_compiler(dir.path(), FAILING_COMPILER)?;
    let script_path = install_script(dir.path(), &compiler)?;

    let out = Command::new("bash").arg(&script_path).output()?;
    let stdout = String::from_utf8_lossy(&out.stdout);

    // The stale binary must not run after a failed compile.
    assert!(!stdout.contains("stale"), "stdout: {stdout:?}");
    assert!(!stale.exists(), "stale binary clobbered");
    Ok(())
}
