// src/specs/manuscript.rs
//
// Spec for the manuscript detail page:
//   detail_manuscrit.php?projet=<id>
//
// Field values sit next to their French labels in dt/dd, th/td, or td/td
// pairs depending on the page section; the Contenu section lists one
// work per "temoin" block with a detail_oeuvre.php link.

use std::error::Error;

use crate::config::consts::{BASE_URL, OEUVRE_URL};
use crate::core::html::{attr_value, block_text, next_tag_block_ci, sibling_pair_value};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::data::{ManuscriptRecord, Work};
use crate::saints;

pub fn fetch_and_extract(project_id: u64) -> Result<ManuscriptRecord, Box<dyn Error>> {
    let url = join!(BASE_URL, &project_id.to_string());
    let doc = net::http_get(&url)?;
    let record = parse_document(&doc, project_id, &url);
    if record.shelfmark.is_empty() {
        return Err(format!("no shelfmark on detail page, projet={}", project_id).into());
    }
    Ok(record)
}

/// Pure parse over the page text. Missing sections yield empty fields,
/// never errors — a sparse notice is still a valid record.
pub fn parse_document(doc: &str, project_id: u64, url: &str) -> ManuscriptRecord {
    let date = field(doc, &["Datation détaillée", "Datation", "Date"]);
    let contents = parse_contents(doc);
    let saints = saints::identify(&contents);

    ManuscriptRecord {
        jonas_id: project_id,
        jonas_url: s!(url),
        shelfmark: parse_shelfmark(doc),
        date_short: short_date(&date),
        date,
        language: field(doc, &["Langue principale", "Langue"]),
        support: field(doc, &["Type support", "Support"]),
        dimensions: dimensions(doc),
        folios: field(doc, &["Nombre de feuillets"]),
        columns: field(doc, &["Nombre de colonnes"]),
        script: field(doc, &["Type d'écriture", "Écriture"]),
        // "Origine géographique" is a section header; the value usually
        // hangs off the "Localisation par la langue" sub-label.
        origin: field(
            doc,
            &["Localisation par la langue", "Localisation", "Origine géographique"],
        ),
        provenance: field(doc, &["Possesseur", "Provenance ancienne"]),
        saints,
        contents,
        // Filled in by hand once a transcription page exists.
        transcription_file: s!(),
    }
}

/// First label that yields a value wins.
fn field(doc: &str, labels: &[&str]) -> String {
    labels
        .iter()
        .find_map(|label| field_value(doc, label))
        .unwrap_or_default()
}

/// One label, three strategies in order: dt/dd, th/td, then td/td
/// (short label cells only, so prose cells cannot pose as labels).
fn field_value(doc: &str, label: &str) -> Option<String> {
    sibling_pair_value(doc, "dt", "dd", label, 120)
        .or_else(|| sibling_pair_value(doc, "th", "td", label, 120))
        .or_else(|| sibling_pair_value(doc, "td", "td", label, 80))
}

/// Full shelfmark from the first <h1>, falling back to <title>.
fn parse_shelfmark(doc: &str) -> String {
    for tag in [("<h1", "</h1>"), ("<title", "</title>")] {
        if let Some((s_, e_)) = next_tag_block_ci(doc, tag.0, tag.1, 0) {
            let text = block_text(&doc[s_..e_]);
            if !text.is_empty() {
                return text;
            }
        }
    }
    s!()
}

/// "Hauteur page" + "Largeur page" → "H × W mm"; empty if either missing.
fn dimensions(doc: &str) -> String {
    let h = field_value(doc, "Hauteur page").as_deref().and_then(first_int);
    let w = field_value(doc, "Largeur page").as_deref().and_then(first_int);
    match (h, w) {
        (Some(h), Some(w)) => format!("{h} × {w} mm"),
        _ => s!(),
    }
}

fn first_int(s: &str) -> Option<String> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

/// Century-only short form: the leading "13e s." pattern when present,
/// otherwise the first 12 characters of the full label.
fn short_date(date: &str) -> String {
    let b: Vec<char> = date.chars().collect();
    let mut i = 0usize;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i > 0 && i < b.len() && b[i] == 'e' {
        let mut j = i + 1;
        while j < b.len() && b[j] == ' ' {
            j += 1;
        }
        if j < b.len() && b[j] == 's' {
            j += 1;
            if j < b.len() && b[j] == '.' {
                j += 1;
            }
            return b[..j].iter().collect();
        }
    }
    b.iter().take(12).collect::<String>().trim_end().to_string()
}

/* ---------------- Contenu section ---------------- */

/// Works from the Contenu section: one per detail_oeuvre.php link,
/// deduplicated by oeuvre id. Per-work metadata (folio, date, incipit,
/// explicit) is read from the td pairs that follow the link, up to the
/// next work link.
fn parse_contents(doc: &str) -> Vec<Work> {
    let mut out: Vec<Work> = Vec::new();
    let mut seen_ids: Vec<String> = Vec::new();

    let links = work_links(doc);
    for (idx, &(ls, le)) in links.iter().enumerate() {
        let block = &doc[ls..le];
        let href = match attr_value(block, "href") {
            Some(h) => normalize_entities(&h),
            None => continue,
        };
        let Some(oeuvre_id) = id_after(&href, "oeuvre=") else {
            continue;
        };
        if seen_ids.iter().any(|seen| *seen == oeuvre_id) {
            continue;
        }
        seen_ids.push(oeuvre_id.clone());

        let raw_title = block_text(block);
        let (author, title) = clean_title(&raw_title);

        // Metadata window: from this link to the next one (or 4 KiB).
        let window_end = match links.get(idx + 1) {
            Some(&(next_s, _)) => next_s,
            None => {
                let mut cap = doc.len().min(le + 4096);
                while !doc.is_char_boundary(cap) {
                    cap -= 1;
                }
                cap
            }
        };
        let window = &doc[le..window_end];

        let folio = match sibling_pair_value(window, "td", "td", "folio", 40) {
            Some(v) => clip(&v, 100),
            None => folio_range(&block_text_of_window(window)).unwrap_or_default(),
        };

        out.push(Work {
            author,
            title,
            raw_title,
            jonas_oeuvre_url: join!(OEUVRE_URL, &oeuvre_id),
            folio,
            date: sibling_pair_value(window, "td", "td", "datation", 40)
                .map(|v| clip(&v, 100))
                .unwrap_or_default(),
            incipit: sibling_pair_value(window, "td", "td", "incipit", 50)
                .map(|v| clip(&v, 400))
                .unwrap_or_default(),
            explicit: sibling_pair_value(window, "td", "td", "explicit", 50)
                .map(|v| clip(&v, 400))
                .unwrap_or_default(),
        });
    }
    out
}

/// Byte ranges of every <a> block whose href points at a work notice.
fn work_links(doc: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((ls, le)) = next_tag_block_ci(doc, "<a ", "</a>", pos) {
        pos = le;
        let block = &doc[ls..le];
        if let Some(href) = attr_value(block, "href") {
            if href.contains("detail_oeuvre.php") {
                out.push((ls, le));
            }
        }
    }
    out
}

fn block_text_of_window(window: &str) -> String {
    crate::core::html::strip_tags(normalize_entities(window))
}

/// Digits immediately following `key` in a URL, if any.
fn id_after(href: &str, key: &str) -> Option<String> {
    let at = href.find(key)? + key.len();
    let digits: String = href[at..].chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// Jonas work titles read "Author|Title|Incipit référence de l'oeuvre: …".
/// Returns (author, title); the incipit segment is dropped.
fn clean_title(raw: &str) -> (String, String) {
    let parts: Vec<&str> = raw
        .split('|')
        .map(str::trim)
        .filter(|p| !p.starts_with("Incipit référence"))
        .collect();
    match parts.len() {
        0 => (s!(), s!(raw)),
        1 => (s!(), s!(parts[0])),
        _ => (s!(parts[0]), s!(parts[1])),
    }
}

/// Char-safe truncation, trimmed.
fn clip(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect::<String>().trim().to_string()
}

/// Scan free text for a folio range like "f. 3r - 12v" or "ff. 1 - 20".
fn folio_range(text: &str) -> Option<String> {
    let b: Vec<char> = text.chars().collect();
    for (i, &c) in b.iter().enumerate() {
        if c == 'f' || c == 'F' {
            if let Some(end) = try_folio_range(&b, i) {
                let found: String = b[i..end].iter().collect();
                return Some(found.trim().to_string());
            }
        }
    }
    None
}

fn try_folio_range(b: &[char], start: usize) -> Option<usize> {
    let n = b.len();
    let mut i = start + 1;

    let eat = |i: &mut usize, pred: &dyn Fn(char) -> bool| {
        while *i < n && pred(b[*i]) {
            *i += 1;
        }
    };

    if i < n && (b[i] == 'f' || b[i] == 'F') { i += 1; } // "ff"
    if i < n && b[i] == '.' { i += 1; }
    eat(&mut i, &|c| c == ' ');

    let d0 = i;
    eat(&mut i, &|c: char| c.is_ascii_digit());
    if i == d0 { return None; }
    if i < n && matches!(b[i], 'r' | 'v') { i += 1; }
    if i < n && matches!(b[i], 'a' | 'b') { i += 1; }
    eat(&mut i, &|c| c == ' ');

    if i >= n || !matches!(b[i], '-' | '–' | '—') { return None; }
    i += 1;
    eat(&mut i, &|c| c == ' ');

    if i < n && (b[i] == 'f' || b[i] == 'F') {
        i += 1;
        if i < n && (b[i] == 'f' || b[i] == 'F') { i += 1; }
        if i < n && b[i] == '.' { i += 1; }
        eat(&mut i, &|c| c == ' ');
    }

    let d1 = i;
    eat(&mut i, &|c: char| c.is_ascii_digit());
    if i == d1 { return None; }
    if i < n && matches!(b[i], 'r' | 'v') { i += 1; }
    if i < n && matches!(b[i], 'a' | 'b') { i += 1; }
    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_title_variants() {
        assert_eq!(
            clean_title("Wauchier de Denain|Vie de saint Martin|Incipit référence de l'oeuvre: Au tans que"),
            (s!("Wauchier de Denain"), s!("Vie de saint Martin"))
        );
        assert_eq!(clean_title("Vie de sainte Catherine"), (s!(), s!("Vie de sainte Catherine")));
        assert_eq!(clean_title(""), (s!(), s!("")));
    }

    #[test]
    fn short_date_century_pattern() {
        assert_eq!(short_date("13e s. (deuxième moitié)"), "13e s.");
        assert_eq!(short_date("14e  s"), "14e  s");
        assert_eq!(short_date("vers 1250, Picardie"), "vers 1250, P");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn folio_range_scan() {
        assert_eq!(folio_range("blah f. 3r - 12v blah").as_deref(), Some("f. 3r - 12v"));
        assert_eq!(folio_range("ff. 1 - f. 20").as_deref(), Some("ff. 1 - f. 20"));
        assert_eq!(folio_range("no folios here"), None);
    }

    #[test]
    fn labelled_fields_three_strategies() {
        let doc = r#"
            <h1>Paris, BnF, fr. 23112</h1>
            <dl><dt>Datation détaillée</dt><dd>13e s. (fin)</dd></dl>
            <table><tr><th>Langue principale</th><td>Picard</td></tr></table>
            <table><tr><td>Type support</td><td>parchemin</td></tr></table>
        "#;
        let rec = parse_document(doc, 71291, "https://example.test/?projet=71291");
        assert_eq!(rec.shelfmark, "Paris, BnF, fr. 23112");
        assert_eq!(rec.date, "13e s. (fin)");
        assert_eq!(rec.date_short, "13e s.");
        assert_eq!(rec.language, "Picard");
        assert_eq!(rec.support, "parchemin");
        assert_eq!(rec.origin, "");
    }

    #[test]
    fn dimensions_need_both_sides() {
        let doc = r#"
            <table>
            <tr><td>Hauteur page</td><td>310 mm</td></tr>
            <tr><td>Largeur page</td><td>215</td></tr>
            </table>
        "#;
        assert_eq!(dimensions(doc), "310 × 215 mm");

        let half = r#"<table><tr><td>Hauteur page</td><td>310</td></tr></table>"#;
        assert_eq!(dimensions(half), "");
    }

    #[test]
    fn contents_dedup_and_saints() {
        let doc = r#"
            <h1>Test</h1>
            <div class="temoin">
              <a href="../../consulter/oeuvre/detail_oeuvre.php?oeuvre=5678">
                Anon|Vie de saint Martin|Incipit référence de l'oeuvre: x
              </a>
              <table>
                <tr><td>Folios</td><td>1r - 12v</td></tr>
                <tr><td>Incipit</td><td>Au tans que</td></tr>
              </table>
            </div>
            <div class="temoin">
              <a href="/consulter/oeuvre/detail_oeuvre.php?oeuvre=5678">Anon|Vie de saint Martin</a>
            </div>
            <div class="temoin">
              <a href="/consulter/oeuvre/detail_oeuvre.php?oeuvre=9999">Vie de sainte Katherina</a>
            </div>
        "#;
        let works = parse_contents(doc);
        assert_eq!(works.len(), 2);
        assert_eq!(works[0].title, "Vie de saint Martin");
        assert_eq!(works[0].author, "Anon");
        assert_eq!(works[0].folio, "1r - 12v");
        assert_eq!(works[0].incipit, "Au tans que");
        assert!(works[0].jonas_oeuvre_url.ends_with("oeuvre=5678"));

        let found = saints::identify(&works);
        assert_eq!(found, vec![s!("saint-martin"), s!("saint-catherine")]);
    }
}
