use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "blsort",
    about = "Sort a build log block-wise so it can be compared with another build's log",
    version
)]
pub struct SortCli {
    /// Input log file (default: standard input)
    pub input: Option<PathBuf>,
    /// Sorted log file (default: standard output)
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "bldiff",
    about = "Compare two build logs block-wise, ignoring the order of parallel build output",
    version
)]
pub struct DiffCli {
    /// First (old) log file
    pub old: PathBuf,
    /// Second (new) log file
    pub new: PathBuf,
    /// Report file (default: standard output)
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_stdio() {
        let cli = SortCli::try_parse_from(["blsort"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn sort_with_paths() {
        let cli = SortCli::try_parse_from(["blsort", "build.log", "sorted.log"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("build.log")));
        assert_eq!(cli.output, Some(PathBuf::from("sorted.log")));
    }

    #[test]
    fn sort_rejects_extra_arguments() {
        assert!(SortCli::try_parse_from(["blsort", "a", "b", "c"]).is_err());
    }

    #[test]
    fn sort_help_is_displayed() {
        let err = SortCli::try_parse_from(["blsort", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn diff_requires_two_logs() {
        assert!(DiffCli::try_parse_from(["bldiff"]).is_err());
        assert!(DiffCli::try_parse_from(["bldiff", "one.log"]).is_err());
    }

    #[test]
    fn diff_with_output() {
        let cli = DiffCli::try_parse_from(["bldiff", "a.log", "b.log", "out.diff"]).unwrap();
        assert_eq!(cli.old, PathBuf::from("a.log"));
        assert_eq!(cli.new, PathBuf::from("b.log"));
        assert_eq!(cli.output, Some(PathBuf::from("out.diff")));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn diff_json_format() {
        let cli =
            DiffCli::try_parse_from(["bldiff", "--format", "json", "a.log", "b.log"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn diff_color_never_and_verbose() {
        let cli =
            DiffCli::try_parse_from(["bldiff", "-v", "--color", "never", "a.log", "b.log"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
    }

    #[test]
    fn diff_help_is_displayed() {
        let err = DiffCli::try_parse_from(["bldiff", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
