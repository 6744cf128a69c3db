use clap::Parser;
use provider_gen::cli::{run_cli, Cli};
use provider_gen::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;
    run_cli(cli)
}
