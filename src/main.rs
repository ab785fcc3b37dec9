use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use inf2theme::{Config, Severity, convert_descriptor};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Convert a Windows cursor scheme installer (Install.inf) into a Cursor.toml theme manifest"
)]
struct Cli {
    /// Path to the Install.inf file
    #[arg(short, long)]
    input: PathBuf,

    /// Write the manifest here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Theme name, overriding the one in the scheme entry
    #[arg(short, long)]
    theme: Option<String>,

    /// Directory searched for cursor files [default: current directory]
    #[arg(long)]
    search_root: Option<PathBuf>,

    /// Use verbose output (or `-vv` for more verbose output)
    #[arg(short, long, action = ArgAction::Count, overrides_with = "quiet")]
    verbose: u8,

    /// Use quiet output (or `-qq` for silent output)
    #[arg(short, long, action = ArgAction::Count, overrides_with = "verbose")]
    quiet: u8,
}

impl Cli {
    /// Most verbose severity to print, `None` for silence.
    fn threshold(&self) -> Option<Severity> {
        match (self.quiet, self.verbose) {
            (0, 0) => Some(Severity::Warn),
            (0, 1) => Some(Severity::Info),
            (0, _) => Some(Severity::Debug),
            (1, _) => Some(Severity::Error),
            _ => None,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("  Cause: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let threshold = cli.threshold();

    let mut config = Config::new();
    if let Some(root) = &cli.search_root {
        config = config.with_search_root(root);
    }
    if let Some(name) = &cli.theme {
        config = config.with_theme_name(name);
    }

    let theme = convert_descriptor(&cli.input, &config, &mut |severity: Severity, message: String| {
        if threshold.is_some_and(|max| severity <= max) {
            eprintln!("{severity}: {message}");
        }
    })?;

    match &cli.output {
        Some(path) => theme
            .save_to_file(path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", theme.to_toml_string()?),
    }

    Ok(())
}
