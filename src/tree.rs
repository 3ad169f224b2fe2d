//! Depth-first rendering of a directory into box-drawing tree lines.

use crate::error::TreeviewError;
use crate::options::RenderOptions;
use crate::output::LineSink;
use crate::size::format_size;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";
const DENIED: &str = "[Permission Denied]";

fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// A listed child, tagged with the partition it was sorted into.
enum Entry {
    Dir(OsString),
    File(OsString),
}

/// Renders directory trees according to a fixed set of [`RenderOptions`].
///
/// Every node produces its own line before any of its children, and each line is
/// written to the [`LineSink`] as soon as it is formatted.
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders `root` as the single top-level node of the tree.
    pub fn render_root(&self, root: &Path, sink: &mut LineSink<'_>) -> Result<(), TreeviewError> {
        self.render(root, "", true, sink)
    }

    /// Renders `root` into a string instead of external writers.
    pub fn render_to_string(&self, root: &Path) -> Result<String, TreeviewError> {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut sink = LineSink::new().with(&mut buf);
            self.render_root(root, &mut sink)?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Emits the line for the directory at `path`, then recurses into its children.
    ///
    /// `prefix` is the indentation accumulated from the ancestors and `is_last` tells
    /// whether this directory is the final sibling in its parent's listing.
    ///
    /// An unreadable listing due to missing permissions is rendered as an annotated
    /// child line and is not an error. Any other failure to read the listing is returned.
    pub fn render(
        &self,
        path: &Path,
        prefix: &str,
        is_last: bool,
        sink: &mut LineSink<'_>,
    ) -> Result<(), TreeviewError> {
        sink.emit(&format!(
            "{}{}{}/\n",
            prefix,
            connector(is_last),
            display_name(path)
        ))?;
        let child_prefix = format!(
            "{}{}",
            prefix,
            if is_last { BLANK_INDENT } else { PIPE_INDENT }
        );
        let entries = match self.list(path) {
            Ok(entries) => entries,
            Err(e) => return sink.emit(&listing_failure(path, &child_prefix, e)?),
        };
        let count = entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            let last = index + 1 == count;
            match entry {
                Entry::Dir(name) => self.render(&path.join(name), &child_prefix, last, sink)?,
                Entry::File(name) => {
                    let line = file_line(&path.join(&name), &name, &child_prefix, last);
                    sink.emit(&line)?;
                }
            }
        }
        Ok(())
    }

    /// Lists the children of `path` in emission order: directories first, then files,
    /// each sorted byte-wise. Files are left out entirely in dirs-only mode.
    fn list(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let name = entry?.file_name();
            if self.options.show_hidden || !is_hidden(&name) {
                names.push(name);
            }
        }
        names.sort();
        let (dirs, files): (Vec<_>, Vec<_>) =
            names.into_iter().partition(|name| path.join(name).is_dir());
        let mut entries: Vec<Entry> = dirs.into_iter().map(Entry::Dir).collect();
        if !self.options.dirs_only {
            entries.extend(files.into_iter().map(Entry::File));
        }
        Ok(entries)
    }
}

/// Turns a failed listing into the annotated line rendered in its place. Only missing
/// permissions are recovered; every other error is returned.
fn listing_failure(path: &Path, child_prefix: &str, err: io::Error) -> Result<String, TreeviewError> {
    if err.kind() != io::ErrorKind::PermissionDenied {
        return Err(TreeviewError::io(path, err));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Permission denied listing {}", path.display());
    Ok(format!("{}{}\n", child_prefix, DENIED))
}

fn file_line(path: &Path, name: &OsStr, prefix: &str, is_last: bool) -> String {
    let name = name.to_string_lossy();
    match fs::metadata(path) {
        Ok(meta) => format!(
            "{}{}{} ({})\n",
            prefix,
            connector(is_last),
            name,
            format_size(meta.len())
        ),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Size lookup failed for {} ({:?})", path.display(), _e.kind());
            format!("{}{}{} {}\n", prefix, connector(is_last), name, DENIED)
        }
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// The last path component, or the path as given when it has none (`/`, `.`, `..`).
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
