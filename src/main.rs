use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use webui_embed::Config;

/// Generate a compressed, source-embeddable C++ header from a web UI asset.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Source HTML asset. Defaults to the web UI asset next to the tool.
    source: Option<PathBuf>,
    /// Destination header path. Defaults to the generated header alongside
    /// the web UI sources.
    dest: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(source) = cli.source {
        config = config.source(source);
    }
    if let Some(dest) = cli.dest {
        config = config.dest(dest);
    }

    match config.run() {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
