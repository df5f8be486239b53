use clap::Parser;

/// Interactive scaffolder for a Roblox Studio style project tree.
///
/// The destination is asked for on standard input; there are no options
/// beyond `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "roblox-scaffold", version, about)]
pub struct Cli {}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
