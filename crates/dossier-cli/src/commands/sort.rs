//! Sort command - order validated records by a numeric field.

use std::path::PathBuf;

use colored::Colorize;
use dossier::persistence::{self, OutputSet};
use dossier::{Dossier, DossierConfig, DossierError, Field};

use super::sibling_path;

pub fn run(
    file: PathBuf,
    key: Field,
    output: Option<PathBuf>,
    blob: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {} by {}",
        "Sorting".cyan().bold(),
        file.display().to_string().white(),
        key.to_string().yellow()
    );

    let dossier = Dossier::with_config(DossierConfig::default().with_sort_key(key));
    let sorted = dossier.sort_file(&file)?;

    let output_path = output.unwrap_or_else(|| sibling_path(&file, "sorted.json"));
    let blob_path = blob.unwrap_or_else(|| sibling_path(&file, "sorted.bin"));

    let mut outputs = OutputSet::new();
    outputs.stage_text(&output_path, &sorted)?;
    let staged_blob = outputs.stage_blob(&blob_path, &sorted)?.to_path_buf();

    // Reload the blob to confirm it reproduces what was sorted.
    let reloaded = persistence::load_blob(&staged_blob)?;
    if reloaded != sorted {
        return Err(DossierError::RoundTrip { path: blob_path }.into());
    }
    outputs.commit()?;

    println!(
        "Sorted {} records",
        sorted.len().to_string().white().bold()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        blob_path.display().to_string().white()
    );

    if verbose {
        println!(
            "  {} blob reloaded with {} records",
            "✓".green(),
            reloaded.len()
        );
    }

    Ok(())
}
