//! toml-overlay CLI
//!
//! Entry point for the `toml-overlay` command-line tool.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use toml_overlay::{merge_documents, write_document, MergeReport, SourceDocument};

#[derive(Parser)]
#[command(name = "toml-overlay")]
#[command(about = "Merge overlay TOML sections into a base document", version)]
struct Cli {
    /// Base document to update
    base: PathBuf,

    /// Overlay document providing new and replacement values
    overlay: PathBuf,

    /// Output path (default: <BASE>.merged)
    #[arg(long, short = 'o', conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the base document instead of writing a sidecar
    #[arg(long)]
    in_place: bool,

    /// Emit the merge report as JSON instead of per-change lines
    #[arg(long)]
    json: bool,

    /// Compute and report changes without writing the output
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    let base = load_or_exit(&cli.base);
    let overlay = load_or_exit(&cli.overlay);

    let output_path = match (&cli.output, cli.in_place) {
        (Some(path), _) => path.clone(),
        (None, true) => cli.base.clone(),
        (None, false) => sidecar_path(&cli.base),
    };

    let outcome = merge_documents(&base.table, &overlay.table);
    let report = MergeReport::new(&base, &overlay, &output_path, &outcome.changes);

    if !cli.dry_run {
        if let Err(e) = write_document(&output_path, &outcome.merged) {
            eprintln!("Error writing merged document: {}", e);
            process::exit(1);
        }
    }

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        for change in &outcome.changes {
            println!("{}", change);
        }
        if outcome.changes.is_empty() {
            println!("No changes: {} already contains the overlay", cli.base.display());
        } else if cli.dry_run {
            println!("Dry run: {} change(s) not written", outcome.changes.len());
        } else {
            println!(
                "Merged {} into {} -> {}",
                cli.overlay.display(),
                cli.base.display(),
                output_path.display()
            );
        }
    }
}

fn load_or_exit(path: &PathBuf) -> SourceDocument {
    match SourceDocument::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error loading document: {}", e);
            process::exit(1);
        }
    }
}

/// Default output path: the base path with `.merged` appended.
fn sidecar_path(base: &PathBuf) -> PathBuf {
    let mut os = base.clone().into_os_string();
    os.push(".merged");
    PathBuf::from(os)
}
