use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::Config;
use crate::notebook::Notebook;
use crate::report;

pub fn run(path: &str, json: bool, config_path: Option<String>, no_naming: bool) -> Result<()> {
    let file = Path::new(path);
    if !file.exists() {
        bail!("File not found: {}", path);
    }
    if !file.is_file() {
        bail!("Path is not a file: {}", path);
    }

    let config = Config::load_with_path(config_path)?;
    let check_naming = config.review.check_naming && !no_naming;

    if let Some(dir) = &config.review.save_dir {
        save_copy(file, dir)?;
    }

    let notebook = Notebook::from_path(file)?;
    let report = report::review(&notebook, check_naming);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_report(&report);
    }

    if !report.is_clean() {
        bail!("{} review error(s) found", report.error_count());
    }

    Ok(())
}

fn save_copy(file: &Path, dir: &str) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create save dir {dir}"))?;
    let name = file
        .file_name()
        .with_context(|| format!("no file name in {}", file.display()))?;
    let target = Path::new(dir).join(name);
    fs::copy(file, &target)
        .with_context(|| format!("failed to save a copy to {}", target.display()))?;
    info!("saved a copy to {}", target.display());
    Ok(())
}
