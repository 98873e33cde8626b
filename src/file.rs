// src/file.rs
//
// Export of the visible row set: CSV/TSV with quote-aware cells, or a
// static HTML table fragment with every cell entity-escaped. Copy and
// file export share the same serialization.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::escape_html;
use crate::view::RowView;

/// Column headers of the exported table.
pub static EXPORT_HEADERS: &[&str] =
    &["Cote", "Date", "Support", "Origine", "Saints", "Notice Jonas"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

fn delimited_string(rows: &[RowView], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if include_headers {
        let headers: Vec<String> = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
        let _ = write_row(&mut buf, &headers, sep);
    }
    for row in rows {
        let _ = write_row(&mut buf, &row.export_cells(), sep);
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// HTML table fragment. All cell text comes from the untrusted dataset and
/// is escaped; link targets are escaped attribute-side too.
fn html_string(rows: &[RowView], include_headers: bool) -> String {
    let mut out = s!("<table>\n");
    if include_headers {
        out.push_str("  <tr>");
        for h in EXPORT_HEADERS {
            out.push_str(&format!("<th>{}</th>", escape_html(h)));
        }
        out.push_str("</tr>\n");
    }
    for row in rows {
        out.push_str("  <tr>");
        push_cell(&mut out, &row.shelfmark.text, row.shelfmark.link.as_deref());
        push_cell(&mut out, &row.date.text, None);
        push_cell(&mut out, &row.support.text, None);
        push_cell(&mut out, &row.origin.text, None);

        out.push_str("<td>");
        for (i, saint) in row.saints.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            push_link(&mut out, &saint.text, saint.link.as_deref());
        }
        if row.saints.is_empty() {
            out.push_str(&escape_html(crate::view::PLACEHOLDER));
        }
        out.push_str("</td>");

        out.push_str("<td>");
        push_link(&mut out, "Jonas", Some(&row.record_url));
        out.push_str("</td>");
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

fn push_cell(out: &mut String, text: &str, link: Option<&str>) {
    out.push_str("<td>");
    push_link(out, text, link);
    out.push_str("</td>");
}

fn push_link(out: &mut String, text: &str, link: Option<&str>) {
    match link {
        Some(href) => out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape_html(href),
            escape_html(text)
        )),
        None => out.push_str(&escape_html(text)),
    }
}

/// Serialize the visible rows per the selected format.
pub fn to_export_string(rows: &[RowView], options: &ExportOptions) -> String {
    match options.format.delim() {
        Some(sep) => delimited_string(rows, options.include_headers, sep),
        None => html_string(rows, options.include_headers),
    }
}

/// Write a single export file based on ExportOptions (path, headers policy,
/// format). Returns the final path written to.
pub fn write_export(
    options: &ExportOptions,
    rows: &[RowView],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = options.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, to_export_string(rows, options))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
