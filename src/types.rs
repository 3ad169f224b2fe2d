use crate::options::RenderOptions;
use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;

/// Width of the rule that closes the report header.
pub const HEADER_RULE_WIDTH: usize = 70;

/// Metadata written once at the top of a report, before any tree line.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    /// When the report was generated.
    pub generated: DateTime<Local>,
    /// Absolute path of the rendered root.
    pub path: PathBuf,
    /// Name of the user who generated the report, or `unknown`.
    pub user: String,
    /// Options the tree was rendered with.
    pub options: RenderOptions,
}

impl ReportHeader {
    /// Captures the current time and user for `path`.
    pub fn capture(path: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self {
            generated: Local::now(),
            path: path.into(),
            user: current_user(),
            options,
        }
    }
}

impl fmt::Display for ReportHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Directory Structure")?;
        writeln!(f, "Generated: {}", self.generated.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Path: {}", self.path.display())?;
        writeln!(f, "User: {}", self.user)?;
        writeln!(f, "Mode: {}", self.options.mode_description())?;
        writeln!(f, "Hidden items: {}", self.options.hidden_description())?;
        writeln!(f, "{}", "=".repeat(HEADER_RULE_WIDTH))?;
        writeln!(f)
    }
}

/// Outcome of a completed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Absolute path of the rendered root.
    pub root: PathBuf,
    /// The report path as it was requested.
    pub report_name: PathBuf,
    /// Absolute path of the written report.
    pub report_path: PathBuf,
}

impl ReportSummary {
    /// The console-only completion message printed after the tree.
    pub fn confirmation(&self) -> String {
        format!(
            "\n\n✓ Tree structure saved to '{}'\n✓ Total path: {}\n",
            self.report_name.display(),
            self.report_path.display()
        )
    }
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
