// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

/// Which manuscript ids a scrape run covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdSelector {
    /// The built-in list from consts.
    Defaults,
    Ids(Vec<u64>),
}

impl IdSelector {
    pub fn resolve(&self) -> Vec<u64> {
        match self {
            IdSelector::Defaults => DEFAULT_MANUSCRIPT_IDS.to_vec(),
            IdSelector::Ids(v) => v.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub ids: IdSelector,
    /// Replace the stored dataset instead of merging by jonas_id.
    pub replace: bool,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            ids: IdSelector::Defaults,
            replace: false,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Html,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Html => "HTML",
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Html => "html",
        }
    }

    /// Cell separator for the delimited formats. Html has none.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Html => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Full output file path: dir + stem + extension from the format.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self.format.ext();
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse GUI/CLI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

/// CLI parameters, parsed in src/cli.rs.
#[derive(Clone, Debug)]
pub struct Params {
    pub scrape: ScrapeOptions,
    /// Dataset path override (-o); defaults to the fixed relative path.
    pub dataset_path: Option<PathBuf>,
    pub list_saints: bool,
    /// When set, export the table instead of scraping.
    pub export_path: Option<String>,
    pub format: ExportFormat,
}

impl Params {
    pub fn new() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            dataset_path: None,
            list_saints: false,
            export_path: None,
            format: ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
        }
    }
}
