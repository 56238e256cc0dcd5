//! Rendering a [`BlockDiff`] as a unified-style or JSON report.
//!
//! The text form is
//!
//! ```text
//! --- <old>
//! +++ <new>
//! @@ @@
//! -<line>
//! @@ @@
//! +<line>
//! ```
//!
//! with one `@@ @@` marker per surviving block, in block order. An empty
//! diff produces no text output at all.

use std::io::Write;

use bl_types::{Block, Sign};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::block_diff::{BlockDiff, DiffEntry};
use crate::error::{DiffError, DiffResult};

const HUNK_MARKER: &[u8] = b"@@ @@\n";

/// Output format of a diff report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// How a report is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Text or JSON.
    pub format: ReportFormat,
    /// Emit ANSI colours in the text format.
    pub color: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    old: &'a str,
    new: &'a str,
    blocks: Vec<DiffEntry>,
}

/// Write the report for `diff` between the logs labelled `old` and `new`.
pub fn write_report<W: Write + ?Sized>(
    diff: &BlockDiff,
    old: &str,
    new: &str,
    options: &ReportOptions,
    out: &mut W,
) -> DiffResult<()> {
    match options.format {
        ReportFormat::Text if options.color => write_colored(diff, old, new, out)?,
        ReportFormat::Text => write_text(diff, old, new, out)?,
        ReportFormat::Json => write_json(diff, old, new, out)?,
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write + ?Sized>(diff: &BlockDiff, old: &str, new: &str, out: &mut W) -> DiffResult<()> {
    if diff.is_empty() {
        return Ok(());
    }
    writeln!(out, "--- {old}")?;
    writeln!(out, "+++ {new}")?;
    for (block, sign) in diff.iter() {
        write_block(block, sign, out)?;
    }
    Ok(())
}

fn write_block<W: Write + ?Sized>(block: &Block, sign: Sign, out: &mut W) -> DiffResult<()> {
    out.write_all(HUNK_MARKER)?;
    for line in block {
        out.write_all(&[sign.marker()])?;
        out.write_all(line.as_bytes())?;
        if !line.is_terminated() {
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn write_colored<W: Write + ?Sized>(diff: &BlockDiff, old: &str, new: &str, out: &mut W) -> DiffResult<()> {
    if diff.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", format!("--- {old}").bold())?;
    writeln!(out, "{}", format!("+++ {new}").bold())?;
    for (block, sign) in diff.iter() {
        writeln!(out, "{}", "@@ @@".cyan())?;
        for line in block {
            let text = format!(
                "{}{}",
                sign.marker() as char,
                String::from_utf8_lossy(line.content())
            );
            let painted = match sign {
                Sign::Removed => text.red(),
                Sign::Added => text.green(),
            };
            writeln!(out, "{painted}")?;
        }
    }
    Ok(())
}

fn write_json<W: Write + ?Sized>(diff: &BlockDiff, old: &str, new: &str, out: &mut W) -> DiffResult<()> {
    let report = JsonReport {
        old,
        new,
        blocks: diff.clone().into_entries(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)
        .map_err(|e| DiffError::Serialization(e.to_string()))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lockstep::diff_logs;

    fn render(old: &str, new: &str, options: ReportOptions) -> String {
        let diff = diff_logs(old.as_bytes(), new.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_report(&diff, "old.log", "new.log", &options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_diff_writes_nothing() {
        assert_eq!(render("a\n", "a\n", ReportOptions::default()), "");
    }

    #[test]
    fn unified_layout() {
        let text = render(
            "foo.c:1: warning: x\nfoo.c:2: warning: y\n",
            "foo.c:1: warning: x\nbar.c:5: warning: z\n",
            ReportOptions::default(),
        );
        assert_eq!(
            text,
            "--- old.log\n+++ new.log\n\
             @@ @@\n+bar.c:5: warning: z\n\
             @@ @@\n-foo.c:2: warning: y\n"
        );
    }

    #[test]
    fn multiline_block_gets_one_marker() {
        let text = render("", "a/b.c:1: w\na/b.c:2: w\n", ReportOptions::default());
        assert_eq!(
            text,
            "--- old.log\n+++ new.log\n@@ @@\n+a/b.c:1: w\n+a/b.c:2: w\n"
        );
    }

    #[test]
    fn unterminated_line_is_terminated_in_report() {
        let text = render("", "tail", ReportOptions::default());
        assert!(text.ends_with("@@ @@\n+tail\n"));
    }

    #[test]
    fn crlf_is_kept_verbatim() {
        let text = render("x\r\n", "", ReportOptions::default());
        assert!(text.ends_with("-x\r\n"));
    }

    #[test]
    fn json_report() {
        let options = ReportOptions {
            format: ReportFormat::Json,
            color: false,
        };
        let text = render("a\n", "b\n", options);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["old"], "old.log");
        assert_eq!(value["new"], "new.log");
        assert_eq!(value["blocks"][0]["sign"], "removed");
        assert_eq!(value["blocks"][0]["lines"][0], "a\n");
        assert_eq!(value["blocks"][1]["sign"], "added");
    }

    #[test]
    fn json_report_for_empty_diff_has_empty_list() {
        let options = ReportOptions {
            format: ReportFormat::Json,
            color: false,
        };
        let value: serde_json::Value = serde_json::from_str(&render("a\n", "a\n", options)).unwrap();
        assert_eq!(value["blocks"], serde_json::json!([]));
    }

    #[test]
    fn colored_report_keeps_markers() {
        colored::control::set_override(true);
        let options = ReportOptions {
            format: ReportFormat::Text,
            color: true,
        };
        let text = render("a\n", "", options);
        assert!(text.contains("@@ @@"));
        assert!(text.contains("-a"));
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn colored_empty_diff_writes_nothing() {
        let options = ReportOptions {
            format: ReportFormat::Text,
            color: true,
        };
        assert_eq!(render("a\n", "a\n", options), "");
    }
}
