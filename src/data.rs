// src/data.rs
//
// Canonical dataset shapes, as stored in docs/data/manuscripts.json.
//
// Only `shelfmark` and `jonas_url` are trusted to be present; every other
// field deserializes to its empty value when absent, and unknown fields in
// the JSON are ignored. The loaded dataset is read-only for the lifetime of
// the session — the view layer (src/view.rs) only ever derives from it.

use serde::{Deserialize, Serialize};

/// One work contained in a manuscript (an entry of the Contenu section).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub raw_title: String,
    pub jonas_oeuvre_url: String,
    #[serde(default)]
    pub folio: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub incipit: String,
    #[serde(default)]
    pub explicit: String,
}

/// One manuscript record, one row of the index table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ManuscriptRecord {
    #[serde(default)]
    pub jonas_id: u64,
    pub jonas_url: String,
    pub shelfmark: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_short: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub support: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub folios: String,
    #[serde(default)]
    pub columns: String,
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub provenance: String,
    #[serde(default)]
    pub saints: Vec<String>,
    #[serde(default)]
    pub contents: Vec<Work>,
    #[serde(default)]
    pub transcription_file: String,
}

impl ManuscriptRecord {
    /// Date label for display and sorting: date_short, else date, else empty.
    pub fn date_label(&self) -> &str {
        if !self.date_short.is_empty() {
            &self.date_short
        } else {
            &self.date
        }
    }

    /// Free-text search haystack: shelfmark, origin, language, script,
    /// space-joined. Empty fields contribute nothing. `support` and
    /// `saints` are facets, not search fields.
    pub fn search_haystack(&self) -> String {
        let mut hay = s!();
        for part in [
            self.shelfmark.as_str(),
            self.origin.as_str(),
            self.language.as_str(),
            self.script.as_str(),
        ] {
            if part.is_empty() {
                continue;
            }
            if !hay.is_empty() {
                hay.push(' ');
            }
            hay.push_str(part);
        }
        hay
    }
}
