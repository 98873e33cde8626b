// src/store.rs
//
// Dataset persistence. One JSON file at a fixed relative path, written by
// the scraper, read once per session by the browser.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{DATA_DIR, DATASET_FILE};
use crate::data::ManuscriptRecord;

pub fn dataset_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(DATASET_FILE)
}

pub fn load_dataset() -> Result<Vec<ManuscriptRecord>, Box<dyn std::error::Error>> {
    load_dataset_from(&dataset_path())
}

pub fn load_dataset_from(path: &Path) -> Result<Vec<ManuscriptRecord>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let records: Vec<ManuscriptRecord> = serde_json::from_str(&text)?;
    Ok(records)
}

pub fn save_dataset(records: &[ManuscriptRecord]) -> io::Result<PathBuf> {
    save_dataset_to(&dataset_path(), records)
}

pub fn save_dataset_to(path: &Path, records: &[ManuscriptRecord]) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(path.to_path_buf())
}

/// Upsert newly scraped records into the stored set by jonas_id.
/// Existing order is preserved; unseen ids append in scrape order.
/// This is the only mutation path for the dataset.
pub fn merge_records(existing: &mut Vec<ManuscriptRecord>, new: Vec<ManuscriptRecord>) {
    for record in new {
        match existing.iter_mut().find(|r| r.jonas_id == record.jonas_id) {
            Some(slot) => *slot = record,
            None => existing.push(record),
        }
    }
}
