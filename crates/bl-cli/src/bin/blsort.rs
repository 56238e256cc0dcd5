use bl_cli::cli::SortCli;
use bl_cli::{commands, logging};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = SortCli::parse();
    logging::init(cli.verbose);
    commands::run_sort(cli)
}
