// src/config/consts.rs

// Net config
pub const BASE_URL: &str =
    "https://jonas.irht.cnrs.fr/consulter/manuscrit/detail_manuscrit.php?projet=";
pub const OEUVRE_URL: &str =
    "https://jonas.irht.cnrs.fr/consulter/oeuvre/detail_oeuvre.php?oeuvre=";

// Identify the bot politely
pub const USER_AGENT: &str =
    "jonas_scrape/0.4 hagiography-project (contact: contact@hagiography-project.org)";
pub const ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en;q=0.8";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Dataset location (fixed relative path, shared by scraper and browser)
pub const DATA_DIR: &str = "docs/data";
pub const DATASET_FILE: &str = "manuscripts.json";

// Per-saint index pages live next to the dataset
pub const SAINTS_SUBDIR: &str = "saints";

// Manuscripts scraped when no --ids is given.
// Find ids by browsing Jonas: the number after 'projet=' in the URL.
pub const DEFAULT_MANUSCRIPT_IDS: &[u64] = &[
    71291, // Paris, BnF, fr. 23112 (XIIIe s., 62 texts, Picardie)
];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "manuscrits";

// Concurrency — Jonas is a small research service, stay gentle
pub const WORKERS: usize = 2;
pub const REQUEST_PAUSE_MS: u64 = 2500;
pub const JITTER_MS: u64 = 400; // extra 0..400 ms
