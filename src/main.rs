//! dirmap CLI - deterministic directory-tree snapshots.
//!
//! One end-to-end run:
//!
//! 1. Resolve the scan root (the current working directory by default)
//! 2. Render the filtered tree depth-first
//! 3. Write it to `project_structure.txt` in the current directory
//! 4. Echo the full tree to the console as a preview
//!
//! A subdirectory that vanishes mid-walk is silently skipped; every other
//! failure prints a single diagnostic line and ends the run.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use dirmap::{IgnoreSet, TreeRenderer, OUTPUT_FILENAME};

/// Snapshot a directory tree to a text file
///
/// dirmap walks the root depth-first, drops a fixed set of ignored names
/// (version control, dependency and build directories, editor settings, its
/// own output file), and writes the remaining structure as a Unicode tree
/// diagram. The same text is echoed to the console.
///
/// Examples:
///   dirmap                     # Snapshot the current directory
///   dirmap --root ../project   # Snapshot another directory
///   dirmap -v                  # Show timing on stderr
#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    ///
    /// Defaults to the current working directory. The output file is
    /// always written to the current working directory regardless of the
    /// root being scanned.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Verbose output
    ///
    /// Shows progress on stderr: resolved root, entry count, elapsed time.
    /// The normal console protocol on stdout is unaffected.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        println!("❌  An error occurred: {:#}", e);
        std::process::exit(1);
    }
}

/// Execute one scan-render-write cycle.
fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let root = cli.root.canonicalize().map_err(|e| {
        anyhow::anyhow!("Failed to resolve root path '{}': {}", cli.root.display(), e)
    })?;

    if cli.verbose {
        eprintln!("🗺️  dirmap v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Scanning: {}", root.display());
    }

    let project_name = root
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    println!("🔍  Scanning project structure for '{}'...", project_name);

    let renderer = TreeRenderer::new(IgnoreSet::default());
    let lines = renderer.render_lines(&root)?;
    let tree = lines.join("\n");

    if cli.verbose {
        eprintln!(
            "✓ Rendered {} entries ({:.2?})",
            lines.len() - 1,
            start.elapsed()
        );
    }

    fs::write(OUTPUT_FILENAME, &tree)
        .with_context(|| format!("failed to write '{}'", OUTPUT_FILENAME))?;

    println!("✅  Success! Project structure saved to '{}'", OUTPUT_FILENAME);
    println!("\n--- File Preview ---");
    println!("{}", tree);
    println!("--------------------");

    Ok(())
}
