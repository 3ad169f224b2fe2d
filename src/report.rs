use crate::error::TreeviewError;
use crate::options::RenderOptions;
use crate::output::LineSink;
use crate::tree::TreeRenderer;
use crate::types::{ReportHeader, ReportSummary};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
pub const DEFAULT_REPORT_NAME: &str = "directory_structure.txt";
/// Turns user input into a root directory: empty input is the current directory and a
/// leading `~` is the home directory. Fails if the result is missing or not a directory.
pub fn resolve_root(input: &str) -> Result<PathBuf, TreeviewError> {
    let input = input.trim();
    let path = if input.is_empty() {
        env::current_dir().map_err(|e| TreeviewError::io(".", e))?
    } else {
        expand_home(input)
    };
    validate_root(&path)?;
    Ok(path)
}
pub fn validate_root(path: &Path) -> Result<(), TreeviewError> {
    if !path.exists() {
        return Err(TreeviewError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(TreeviewError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
fn expand_home(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(input),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(input),
    }
}
/// Absolute form of `path` with `.` and `..` folded away lexically; symlinks are kept.
fn absolute(path: &Path) -> Result<PathBuf, TreeviewError> {
    let path = std::path::absolute(path).map_err(|e| TreeviewError::io(path, e))?;
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
/// Renders `root` to `console` and to a new report file at `report_path`.
///
/// The root is validated before the report file is created, so a validation error
/// leaves no file behind.
pub fn generate_report(
    root: &Path,
    options: RenderOptions,
    report_path: &Path,
    console: &mut dyn Write,
) -> Result<ReportSummary, TreeviewError> {
    validate_root(root)?;
    let abs_root = absolute(root)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Generating report for {} into {}",
        abs_root.display(),
        report_path.display()
    );
    let header = ReportHeader::capture(&abs_root, options);
    let file = File::create(report_path).map_err(|e| TreeviewError::io(report_path, e))?;
    let mut report = BufWriter::new(file);
    {
        let mut sink = LineSink::new().with(&mut *console).with(&mut report);
        sink.emit(&header.to_string())?;
        TreeRenderer::new(options).render_root(&abs_root, &mut sink)?;
        sink.flush()?;
    }
    let summary = ReportSummary {
        root: abs_root,
        report_name: report_path.to_path_buf(),
        report_path: absolute(report_path)?,
    };
    console
        .write_all(summary.confirmation().as_bytes())
        .map_err(TreeviewError::Write)?;
    console.flush().map_err(TreeviewError::Write)?;
    Ok(summary)
}
