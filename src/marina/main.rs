use clap::Parser;
use directories::ProjectDirs;
use marina::api::{CmdMessage, MarinaApi};
use marina::config::MarinaConfig;
use marina::error::Result;
use marina::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::Cli;
use cli::menu::Session;
use cli::print::print_messages;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match config_dir(&cli) {
        Some(dir) => MarinaConfig::load(dir)?,
        None => MarinaConfig::default(),
    };
    let data_file = cli
        .data_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_file));

    let (mut api, report) = MarinaApi::open(FileStore::new(&data_file))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !report.skipped.is_empty() {
        print_messages(
            &mut out,
            &[CmdMessage::warning(format!(
                "Skipped {} unreadable line(s) in {}",
                report.skipped.len(),
                data_file.display()
            ))],
        )?;
    }

    let stdin = io::stdin();
    Session::new(&mut api, stdin.lock(), out, config.name_width).run()
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "marina", "marina").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

/// Logs go to stderr so they never mix with the menu. `MARINA_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MARINA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("marina={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
