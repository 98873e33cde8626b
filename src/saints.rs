// src/saints.rs
//
// Static saint tables. Keys must match the saint page filenames under
// docs/saints/ (without .html).

use crate::config::consts::SAINTS_SUBDIR;
use crate::core::collate;
use crate::data::Work;

/// Saint key → display label.
pub static SAINT_LABELS: &[(&str, &str)] = &[
    ("saint-martin", "Saint Martin"),
    ("saint-catherine", "Sainte Catherine"),
    ("saint-nicholas", "Saint Nicolas"),
    ("saint-margaret", "Sainte Marguerite"),
];

/// Saint key → substrings searched in work titles during scraping.
pub static SAINT_KEYWORDS: &[(&str, &[&str])] = &[
    ("saint-martin", &["martin"]),
    ("saint-catherine", &["catherine", "katherina"]),
    ("saint-nicholas", &["nicolas", "nicholas", "nicolai"]),
    ("saint-margaret", &["marguerite", "margaret", "margareta"]),
];

/// Display label for a saint key. Unknown keys fall back to the raw key.
pub fn label_for(key: &str) -> &str {
    SAINT_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// Relative path of the per-saint index page.
pub fn page_for(key: &str) -> String {
    format!("{}/{}.html", SAINTS_SUBDIR, key)
}

/// Saint keys whose keywords appear in any work title, in table order.
pub fn identify(contents: &[Work]) -> Vec<String> {
    let mut found = Vec::new();
    for (key, keywords) in SAINT_KEYWORDS {
        let hit = contents.iter().any(|work| {
            keywords.iter().any(|kw| collate::contains(&work.title, kw))
        });
        if hit {
            found.push(s!(*key));
        }
    }
    found
}
