use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::DigestItem;
use crate::digest::render_report_at;
use crate::errors::DigestError;

/// Write the HTML report and the JSON item list into `output_dir`.
///
/// Both files share a run timestamp; returns `(html_path, json_path)`.
pub fn write_outputs(
    output_dir: &Path,
    items: &[DigestItem],
) -> Result<(PathBuf, PathBuf), DigestError> {
    write_outputs_at(output_dir, items, &Local::now())
}

pub fn write_outputs_at(
    output_dir: &Path,
    items: &[DigestItem],
    now: &DateTime<Local>,
) -> Result<(PathBuf, PathBuf), DigestError> {
    fs::create_dir_all(output_dir)?;

    let timestamp = now.format("%Y%m%d_%H%M%S");
    let html_path = output_dir.join(format!("digest_{timestamp}.html"));
    let json_path = output_dir.join(format!("digest_{timestamp}.json"));

    fs::write(&html_path, render_report_at(items, now))?;
    fs::write(&json_path, serde_json::to_string_pretty(items)?)?;

    Ok((html_path, json_path))
}
