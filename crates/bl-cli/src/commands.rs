use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::Context;
use bl_diff::{diff_logs, write_report, ReportFormat, ReportOptions};
use bl_sort::{read_sorted, write_blocks};
use tracing::info;

use crate::cli::{ColorChoice, DiffCli, OutputFormat, SortCli};

/// Sort one log. The input is fully read before the output is opened.
pub fn run_sort(cli: SortCli) -> anyhow::Result<()> {
    let blocks = match &cli.input {
        Some(path) => read_sorted(open_input(path)?)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => read_sorted(io::stdin().lock()).context("failed to read standard input")?,
    };

    let mut out = open_output(cli.output.as_deref())?;
    let stats = write_blocks(&blocks, &mut out).context("failed to write sorted log")?;
    info!(blocks = stats.blocks, lines = stats.lines, "log sorted");
    Ok(())
}

/// Diff two logs and write the report.
pub fn run_diff(cli: DiffCli) -> anyhow::Result<()> {
    let old = open_input(&cli.old)?;
    let new = open_input(&cli.new)?;
    let diff = diff_logs(old, new).context("failed to diff logs")?;
    info!(
        removed = diff.removals(),
        added = diff.additions(),
        "logs compared"
    );

    let options = ReportOptions {
        format: match cli.format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        },
        color: use_color(cli.color, cli.output.is_none()),
    };
    let mut out = open_output(cli.output.as_deref())?;
    write_report(
        &diff,
        &cli.old.display().to_string(),
        &cli.new.display().to_string(),
        &options,
        &mut out,
    )
    .context("failed to write report")?;
    Ok(())
}

fn open_input(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn use_color(choice: ColorChoice, to_stdout: bool) -> bool {
    match choice {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        }
        ColorChoice::Never => false,
        ColorChoice::Auto => to_stdout && io::stdout().is_terminal(),
    }
}
