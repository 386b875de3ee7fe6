use anyhow::Result;
use cpprun::config::Config;
use cpprun::handlers::run::{self, RunOptions};
use cpprun::host::shell::ShellHost;
use cpprun::cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Optional: override target shell via CLI before loading config
    if let Some(ts) = args.target_shell.as_deref() {
        std::env::set_var("SHELL_NAME", ts.to_ascii_lowercase());
    }

    // Load config
    let cfg = Config::load();

    // Resolve compiler: CLI overrides config; fall back to g++
    let compiler = args
        .compiler
        .clone()
        .or_else(|| cfg.get("CXX"))
        .unwrap_or_else(|| "g++".to_string());
    let flags = if args.flags.is_empty() {
        cfg.get_words("CXXFLAGS")
    } else {
        args.flags.clone()
    };

    let mut host = ShellHost::from_config(&cfg, args.file, args.new_terminal)?;
    run::run(&mut host, &RunOptions { compiler, flags }).await
}
