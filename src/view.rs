// src/view.rs
//
// The table controller: single source of truth for turning
// (dataset, ViewState) into a rendered row set.
//
// - The dataset is loaded once and never mutated; filter and sort only
//   derive views over it.
// - ViewState lives for the session, is reset on restart, and is never
//   persisted.
// - Filter and sort are pure functions of (records, ViewState). Rendering
//   is the only side-effecting step and goes through the RowRenderer
//   capability, so everything here is testable without a display surface.

use std::path::Path;

use crate::core::collate;
use crate::data::ManuscriptRecord;
use crate::saints;
use crate::store;

/// Shown for every absent optional field. Never the empty string, never a
/// literal "null".
pub const PLACEHOLDER: &str = "—";

/// Body message when the dataset cannot be loaded. Names the usual local
/// cause: the scraper has not been run yet.
pub const DATASET_ERROR: &str =
    "Impossible de charger les données des manuscrits. Si le fichier \
     docs/data/manuscripts.json n'existe pas encore, lancez d'abord le \
     scraper (bin « cli ») pour le générer.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Shelfmark,
    Date,
    Support,
    Origin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Session-only view state. Empty string = no filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub support: String,
    pub saint: String,
    pub sort_col: SortColumn,
    pub sort_dir: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: s!(),
            support: s!(),
            saint: s!(),
            sort_col: SortColumn::Shelfmark,
            sort_dir: SortDirection::Asc,
        }
    }
}

/// One display cell: text plus an optional link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub link: Option<String>,
}

impl Cell {
    fn plain(text: &str) -> Self {
        if text.is_empty() {
            Self { text: s!(PLACEHOLDER), link: None }
        } else {
            Self { text: s!(text), link: None }
        }
    }

    fn linked(text: &str, link: String) -> Self {
        Self { text: s!(text), link: Some(link) }
    }
}

/// One visual row, display-ready. Cell text is raw dataset text — inert on
/// the egui surface; the HTML export path escapes it (src/file.rs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// Links to the transcription when one exists.
    pub shelfmark: Cell,
    pub date: Cell,
    pub support: Cell,
    pub origin: Cell,
    /// One cell per saint key, each linking to its index page.
    pub saints: Vec<Cell>,
    /// External catalog notice, opened in a new browsing context.
    pub record_url: String,
}

impl RowView {
    /// Flat text cells for export; saint labels joined with "; ".
    pub fn export_cells(&self) -> Vec<String> {
        let saints = if self.saints.is_empty() {
            s!(PLACEHOLDER)
        } else {
            self.saints
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        vec![
            self.shelfmark.text.clone(),
            self.date.text.clone(),
            self.support.text.clone(),
            self.origin.text.clone(),
            saints,
            self.record_url.clone(),
        ]
    }
}

/// Display surface capability. The controller never touches a widget or a
/// file; frontends implement this (GUI buffer, export sink, test collector).
pub trait RowRenderer {
    fn render_rows(&mut self, rows: &[RowView]);
    fn render_count(&mut self, text: &str);
    fn render_error(&mut self, message: &str);
}

/* ---------------- pure steps ---------------- */

/// Filter predicate: free-text search, then the support facet, then the
/// saint facet. All three must pass.
pub fn matches_filters(record: &ManuscriptRecord, state: &ViewState) -> bool {
    let needle = state.search.trim();
    if !needle.is_empty() {
        let hay = record.search_haystack().to_lowercase();
        if !hay.contains(&needle.to_lowercase()) {
            return false;
        }
    }
    // Absent support never matches a non-empty filter.
    if !state.support.is_empty() && record.support != state.support {
        return false;
    }
    if !state.saint.is_empty() && !record.saints.iter().any(|k| *k == state.saint) {
        return false;
    }
    true
}

pub fn filter_records<'a>(
    records: &'a [ManuscriptRecord],
    state: &ViewState,
) -> Vec<&'a ManuscriptRecord> {
    records.iter().filter(|r| matches_filters(r, state)).collect()
}

/// The value a column sorts by. Explicit per-column fallback order:
/// Date = date_short → date; everything else is the field itself.
/// Absent → empty string, which collates first.
pub fn sort_value<'a>(record: &'a ManuscriptRecord, col: SortColumn) -> &'a str {
    match col {
        SortColumn::Shelfmark => &record.shelfmark,
        SortColumn::Date => record.date_label(),
        SortColumn::Support => &record.support,
        SortColumn::Origin => &record.origin,
    }
}

/// French primary collation on the chosen column, shelfmark as the explicit
/// tie-break, whole comparison inverted when descending. Total and
/// deterministic, so sorting twice is an exact reversal.
pub fn sort_records(kept: &mut [&ManuscriptRecord], col: SortColumn, dir: SortDirection) {
    kept.sort_by(|a, b| {
        let ord = collate::cmp(sort_value(a, col), sort_value(b, col))
            .then_with(|| collate::cmp(&a.shelfmark, &b.shelfmark));
        match dir {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Build the display row for one record.
pub fn row_view(record: &ManuscriptRecord) -> RowView {
    let shelfmark = if record.transcription_file.is_empty() {
        Cell::plain(&record.shelfmark)
    } else {
        Cell::linked(&record.shelfmark, record.transcription_file.clone())
    };
    let saints = record
        .saints
        .iter()
        .map(|key| Cell::linked(saints::label_for(key), saints::page_for(key)))
        .collect();
    RowView {
        shelfmark,
        date: Cell::plain(record.date_label()),
        support: Cell::plain(&record.support),
        origin: Cell::plain(&record.origin),
        saints,
        record_url: record.jonas_url.clone(),
    }
}

/// Count line with French pluralization. Zero, one, and many are distinct
/// wordings.
pub fn count_summary(n: usize) -> String {
    match n {
        0 => s!("Aucun manuscrit ne correspond aux critères"),
        1 => s!("1 manuscrit affiché"),
        n => format!("{n} manuscrits affichés"),
    }
}

/* ---------------- facet option helpers (GUI selectors) ---------------- */

/// Distinct support values present in the dataset, collated.
pub fn support_values(records: &[ManuscriptRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !r.support.is_empty() && !out.iter().any(|v| *v == r.support) {
            out.push(r.support.clone());
        }
    }
    out.sort_by(|a, b| collate::cmp(a, b));
    out
}

/// Distinct saint keys present in the dataset, collated by display label.
pub fn saint_values(records: &[ManuscriptRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        for key in &r.saints {
            if !out.iter().any(|v| v == key) {
                out.push(key.clone());
            }
        }
    }
    out.sort_by(|a, b| collate::cmp(saints::label_for(a), saints::label_for(b)));
    out
}

/* ---------------- controller ---------------- */

/// Owns the immutable working set and the session ViewState.
#[derive(Default)]
pub struct TableController {
    records: Vec<ManuscriptRecord>,
    pub state: ViewState,
}

impl TableController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the working set.
    pub fn records(&self) -> &[ManuscriptRecord] {
        &self.records
    }

    /// Load the dataset from its fixed relative path and render. On failure
    /// the error message is rendered in place of the body, the working set
    /// stays empty, and the count line is left untouched. No retry; a manual
    /// reload is the only recovery path.
    pub fn load(&mut self, renderer: &mut dyn RowRenderer) {
        self.load_from(&store::dataset_path(), renderer);
    }

    pub fn load_from(&mut self, path: &Path, renderer: &mut dyn RowRenderer) {
        match store::load_dataset_from(path) {
            Ok(records) => {
                logf!("Dataset: loaded {} record(s) from {}", records.len(), path.display());
                self.records = records;
                self.recompute(renderer);
            }
            Err(e) => {
                loge!("Dataset: load failed {}: {}", path.display(), e);
                self.records = Vec::new();
                renderer.render_error(DATASET_ERROR);
            }
        }
    }

    /// Adopt an already-loaded working set (tests, previews).
    pub fn set_records(&mut self, records: Vec<ManuscriptRecord>, renderer: &mut dyn RowRenderer) {
        self.records = records;
        self.recompute(renderer);
    }

    pub fn set_search(&mut self, text: &str, renderer: &mut dyn RowRenderer) {
        self.state.search = s!(text);
        self.recompute(renderer);
    }

    pub fn set_support_filter(&mut self, value: &str, renderer: &mut dyn RowRenderer) {
        self.state.support = s!(value);
        self.recompute(renderer);
    }

    pub fn set_saint_filter(&mut self, value: &str, renderer: &mut dyn RowRenderer) {
        self.state.saint = s!(value);
        self.recompute(renderer);
    }

    /// Same column flips direction; a new column resets to ascending.
    pub fn set_sort(&mut self, col: SortColumn, renderer: &mut dyn RowRenderer) {
        if self.state.sort_col == col {
            self.state.sort_dir = match self.state.sort_dir {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.state.sort_col = col;
            self.state.sort_dir = SortDirection::Asc;
        }
        self.recompute(renderer);
    }

    /// Derive and render the visible row set: filter, sort, render —
    /// always in that order.
    fn recompute(&self, renderer: &mut dyn RowRenderer) {
        let mut kept = filter_records(&self.records, &self.state);
        sort_records(&mut kept, self.state.sort_col, self.state.sort_dir);
        let rows: Vec<RowView> = kept.iter().map(|r| row_view(r)).collect();
        renderer.render_rows(&rows);
        renderer.render_count(&count_summary(rows.len()));
    }
}
