//! bookstack CLI
//!
//! Interactive terminal front end for the in-memory book catalog. The
//! catalog lives for the session and is discarded on exit.

mod error;
mod prompt;
mod render;
mod session;

use clap::Parser;

use bookstack_catalog::Catalog;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bookstack")]
#[command(about = "Manage an in-memory book catalog from the terminal", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let mut catalog = Catalog::new();
    match session::run(&mut catalog) {
        Ok(()) => {}
        Err(CliError::InputClosed) => {
            log::debug!("stdin closed, ending session");
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
