//! # Treeview
//!
//! `treeview` walks a directory depth-first and renders it as a box-drawing tree, one line
//! per entry, with directories listed before files and file sizes in binary units.
//!
//! Lines are streamed to every writer attached to a [`LineSink`] as they are produced.
//! [`generate_report`] uses that to mirror the tree to the console while saving it to a
//! text report that starts with a metadata header.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treeview::{RenderOptionsBuilder, TreeRenderer};
//!
//! let options = RenderOptionsBuilder::new()
//!     .show_hidden(false)
//!     .dirs_only(false)
//!     .build();
//!
//! let tree = TreeRenderer::new(options)
//!     .render_to_string(std::path::Path::new("."))
//!     .expect("Failed to render directory");
//!
//! print!("{}", tree);
//! ```

mod error;
mod options;
mod output;
mod report;
mod size;
mod tree;
mod types;

pub use error::TreeviewError;
pub use options::{RenderOptions, RenderOptionsBuilder};
pub use output::LineSink;
pub use report::{DEFAULT_REPORT_NAME, generate_report, resolve_root, validate_root};
pub use size::format_size;
pub use tree::TreeRenderer;
pub use types::{HEADER_RULE_WIDTH, ReportHeader, ReportSummary};
