mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::parse_cli;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in sift::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    sift::logging::initialize().context("failed to initialize logging")?;

    sift::app::run(resolved.into_options()?)
}
