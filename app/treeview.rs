//! Command-line interface for treeview.
//!
//! Renders a directory tree to the console and saves the same text, under a metadata
//! header, to a report file. Run without a path from a terminal to be prompted for the
//! directory and options.

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::exit;
use treeview::{
    DEFAULT_REPORT_NAME, RenderOptions, RenderOptionsBuilder, TreeviewError, generate_report,
    resolve_root,
};

/// treeview — directory tree report generator
#[derive(Parser)]
#[command(name = "treeview", version, about, long_about = None)]
struct Cli {
    /// Root directory (prompted for when omitted on a terminal, otherwise the current dir)
    root: Option<String>,

    /// What to list
    #[arg(long, value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Include hidden files and folders
    #[arg(long)]
    hidden: bool,

    /// Ask for the directory and options on stdin even when stdin is not a terminal
    #[arg(short, long, conflicts_with_all = ["root", "mode", "hidden"])]
    interactive: bool,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_REPORT_NAME)]
    output: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Directories and files
    All,
    /// Directories only
    DirsOnly,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        RenderOptionsBuilder::new()
            .dirs_only(self.mode == Mode::DirsOnly)
            .show_hidden(self.hidden)
            .build()
    }
}

fn main() {
    let cli = Cli::parse();
    let interactive = cli.interactive || (cli.root.is_none() && io::stdin().is_terminal());

    let (root, options) = if interactive {
        prompt_session()
    } else {
        let input = cli.root.clone().unwrap_or_default();
        (resolve_or_fail(&input), cli.options())
    };

    println!("\nGenerating tree structure for: {}", root.display());
    println!("Output will be saved to: {}\n", cli.output.display());

    let stdout = io::stdout();
    let mut console = stdout.lock();
    if let Err(e) = generate_report(&root, options, &cli.output, &mut console) {
        fail(e);
    }
}

fn fail(e: TreeviewError) -> ! {
    eprintln!("Error: {}", e);
    exit(1);
}

/// Resolves the root directory, exiting before any further question or output on failure.
fn resolve_or_fail(input: &str) -> PathBuf {
    match resolve_root(input) {
        Ok(root) => root,
        Err(e) => fail(e),
    }
}

/// Asks for the directory, the mode and hidden-item visibility on stdin.
fn prompt_session() -> (PathBuf, RenderOptions) {
    println!("Directory Tree Generator");
    println!("{}", "=".repeat(50));

    let root = resolve_or_fail(&prompt(
        "Enter directory path (press Enter for current directory): ",
    ));

    println!("\nWhat would you like to show?");
    println!("1. Only directories");
    println!("2. Both directories and files (default)");
    let dirs_only = prompt("Enter your choice (1/2, default=2): ") == "1";

    let show_hidden = prompt("Show hidden files/folders? (y/n, default=n): ").to_lowercase() == "y";

    let options = RenderOptionsBuilder::new()
        .dirs_only(dirs_only)
        .show_hidden(show_hidden)
        .build();
    (root, options)
}

/// Prints `message` and reads one trimmed line. End of input reads as an empty answer.
fn prompt(message: &str) -> String {
    print!("{}", message);
    if io::stdout().flush().is_err() {
        eprintln!("Failed to write to stdout");
        exit(1);
    }
    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        eprintln!("Error: failed to read input: {}", e);
        exit(1);
    }
    line.trim().to_string()
}
