//! Validate command - split a record file into valid and invalid records.

use std::path::PathBuf;

use colored::Colorize;
use dossier::persistence::{self, OutputSet};
use dossier::{Dossier, DossierConfig, NationalIdMatch, Partition};
use indicatif::{ProgressBar, ProgressStyle};

use super::sibling_path;

pub fn run(
    file: PathBuf,
    valid: Option<PathBuf>,
    invalid: Option<PathBuf>,
    json: bool,
    strict_national_id: bool,
    no_progress: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let records = persistence::load(&file)?;

    let mut config = DossierConfig::default();
    if strict_national_id {
        config = config.with_national_id_match(NationalIdMatch::Exact);
    }
    let dossier = Dossier::with_config(config);

    let partition = if no_progress || json {
        dossier.validate(&records)
    } else {
        let bar = progress_bar(records.len() as u64);
        let partition =
            dossier.validate_with_progress(&records, |p| bar.set_position(p.processed as u64));
        bar.finish_and_clear();
        partition
    };

    // Outputs are written only after every record has been classified.
    let valid_path = valid.unwrap_or_else(|| sibling_path(&file, "valid.json"));
    let invalid_path = invalid.unwrap_or_else(|| sibling_path(&file, "invalid.json"));
    let mut outputs = OutputSet::new();
    outputs.stage_text(&valid_path, &partition.valid)?;
    outputs.stage_text(&invalid_path, &partition.invalid)?;
    outputs.commit()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&partition.summary())?);
        return Ok(());
    }

    print_summary(&partition);

    if verbose {
        println!();
        println!(
            "{} {}",
            "Saved valid records to".green().bold(),
            valid_path.display().to_string().white()
        );
        println!(
            "{} {}",
            "Saved invalid records to".green().bold(),
            invalid_path.display().to_string().white()
        );
    }

    Ok(())
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar.set_message("Validating records");
    bar
}

fn print_summary(partition: &Partition) {
    println!(
        "Valid records:   {}",
        partition.valid_count().to_string().green().bold()
    );
    println!(
        "Invalid records: {}",
        partition.invalid_count().to_string().red().bold()
    );
    println!("{}", "Invalid entries by field:".yellow().bold());
    for (field, count) in partition.tally.iter() {
        let count = if count > 0 {
            count.to_string().red()
        } else {
            count.to_string().dimmed()
        };
        println!("    {:16} {}", format!("{}:", field), count);
    }
}
