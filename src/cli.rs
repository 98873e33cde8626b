// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{ExportFormat, ExportOptions, IdSelector, Params};
use crate::progress::Progress;
use crate::view::RowView;
use crate::{file, saints, scrape, store, view};

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    if params.list_saints {
        for (key, label) in saints::SAINT_LABELS {
            println!("{},{}", key, label);
        }
        return Ok(());
    }

    if let Some(text) = params.export_path.clone() {
        return export_table(&params, &text);
    }

    run_scrape(&params)
}

/* ---------------- scrape ---------------- */

struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, id: u64, shelfmark: &str) {
        self.done += 1;
        println!("  ✓ {} [projet={}] ({}/{})", shelfmark, id, self.done, self.total);
    }
    fn item_failed(&mut self, id: u64) {
        self.failed += 1;
        eprintln!("  ✗ projet={} (voir .store/debug.log)", id);
    }
    fn finish(&mut self) {
        println!("Fetch complete ({}/{})", self.done, self.total);
    }
}

fn run_scrape(params: &Params) -> Result<(), Box<dyn Error>> {
    let path = params
        .dataset_path
        .clone()
        .unwrap_or_else(store::dataset_path);
    let requested = params.scrape.ids.resolve().len();

    println!("Scraping {} manuscrit(s) depuis Jonas IRHT-CNRS…", requested);
    println!("Output: {}\n", path.display());

    let mut progress = ConsoleProgress { done: 0, failed: 0, total: 0 };
    let new = scrape::collect_manuscripts(&params.scrape, Some(&mut progress))?;

    // Merge into the stored set unless a full replace was asked for.
    let mut records = if params.scrape.replace {
        Vec::new()
    } else {
        store::load_dataset_from(&path).unwrap_or_default()
    };
    store::merge_records(&mut records, new);
    let written = store::save_dataset_to(&path, &records)?;

    println!("\nDone. Wrote {} record(s) to {}", records.len(), written.display());
    if progress.failed > 0 {
        eprintln!("WARNING: {} manuscript(s) failed to scrape.", progress.failed);
    }
    Ok(())
}

/* ---------------- export ---------------- */

/// Dump the full table (empty ViewState: everything, shelfmark ascending)
/// without the GUI.
fn export_table(params: &Params, out_text: &str) -> Result<(), Box<dyn Error>> {
    let path = params
        .dataset_path
        .clone()
        .unwrap_or_else(store::dataset_path);
    let records = store::load_dataset_from(&path)?;

    let state = view::ViewState::default();
    let mut kept = view::filter_records(&records, &state);
    view::sort_records(&mut kept, state.sort_col, state.sort_dir);
    let rows: Vec<RowView> = kept.into_iter().map(view::row_view).collect();

    let mut export = ExportOptions::default();
    export.format = params.format.clone();
    export.set_path(out_text);

    let written = file::write_export(&export, &rows)?;
    println!("Exported {} row(s) to {}", rows.len(), written.display());
    Ok(())
}

/* ---------------- args ---------------- */

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--ids" => {
                let v = args.next().ok_or("Missing value for --ids")?;
                params.scrape.ids = IdSelector::Ids(parse_ids_list(&v)?);}
            "--replace" => params.scrape.replace = true,
            "--delay-ms" => {
                let v: u64 = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
                params.scrape.pause_ms = v;}
            "-o" | "--out" => {
                params.dataset_path =
                    Some(PathBuf::from(args.next().ok_or("Missing dataset path")?));}
            "--list-saints" => params.list_saints = true,
            "--export" => {
                params.export_path = Some(args.next().ok_or("Missing export path")?);}
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "html" => ExportFormat::Html,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/// "71291,71300-71305" → sorted, deduplicated id list.
fn parse_ids_list(s: &str) -> Result<Vec<u64>, Box<dyn Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a: u64 = part[..dash].trim().parse()?;
            let b: u64 = part[dash + 1..].trim().parse()?;
            if a > b { return Err(format!("Invalid range: {}", part).into()); }
            out.extend(a..=b);
        } else {
            out.push(part.parse()?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}
