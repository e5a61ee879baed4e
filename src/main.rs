use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ministore::app::App;
use ministore::config::Config;
use ministore::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "ministore", about = "Counter driven by a reducer-based store")]
struct Cli {
    /// Config file (default: ~/.config/ministore/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Click the button N times, print the result, and exit
    #[arg(long, value_name = "N")]
    clicks: Option<u64>,

    /// Only print the final state
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.log);
    tracing::debug!(?config, "Configuration loaded");

    let mut app = App::new(&config.view, !cli.quiet, io::stdout());
    match cli.clicks {
        Some(times) => app.click(times)?,
        None => app.run(io::stdin().lock())?,
    }
    app.print_state()?;

    Ok(())
}
