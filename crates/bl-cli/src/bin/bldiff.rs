use bl_cli::cli::DiffCli;
use bl_cli::{commands, logging};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = DiffCli::parse();
    logging::init(cli.verbose);
    commands::run_diff(cli)
}
