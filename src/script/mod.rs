//! Script generation for the compile-and-run sequence.

use std::path::Path;

pub mod install;

/// Inputs for one generated run script.
#[derive(Debug, Clone)]
pub struct ScriptParams<'a> {
    pub dir: &'a Path,
    pub file_name: &'a str,
    pub base_name: &'a str,
    pub compiler: &'a str,
    pub flags: &'a [String],
}

/// Render the run script.
///
/// The script clears the terminal, enters the source directory, removes any
/// stale binary (a failed compile must not silently re-execute an old one),
/// compiles, runs the fresh binary on success or prints `Compilation failed.`
/// on a non-zero compiler exit, and removes itself as its unconditional last
/// statement.
pub fn render(params: &ScriptParams<'_>, script_path: &Path) -> String {
    format!(
        r#"#!/bin/bash
clear
cd "{dir}"
if [ -f "{base}" ]; then
    rm "{base}"
fi
{compile}
if [ $? -eq 0 ]; then
    ./"{base}"
else
    echo "Compilation failed."
fi
echo ""
rm "{script}"
"#,
        dir = params.dir.display(),
        base = params.base_name,
        compile = compile_line(params),
        script = script_path.display(),
    )
}

fn compile_line(params: &ScriptParams<'_>) -> String {
    let mut line = String::from(params.compiler);
    for flag in params.flags {
        line.push(' ');
        line.push_str(flag);
    }
    line.push_str(&format!(
        " -o \"{}\" \"{}\"",
        params.base_name, params.file_name
    ));
    line
}
