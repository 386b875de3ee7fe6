use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cpprun", about = "Compile and run a C++ source file in a terminal", version)]
pub struct Cli {
    /// Source file to compile and run (the active document).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Compiler to invoke (overrides CXX from config).
    #[arg(long)]
    pub compiler: Option<String>,

    /// Extra compiler flag, may repeat: --flag -O2 --flag -Wall
    #[arg(long = "flag", value_name = "FLAG", action = clap::ArgAction::Append, allow_hyphen_values = true)]
    pub flags: Vec<String>,

    /// Override the shell hosting the terminal session (auto|bash|zsh|sh).
    #[arg(long = "target-shell")]
    pub target_shell: Option<String>,

    /// Always create a fresh login-shell session instead of reusing the current terminal.
    #[arg(long = "new-terminal")]
    pub new_terminal: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
