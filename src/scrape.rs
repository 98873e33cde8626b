// src/scrape.rs
//
// Collection orchestration: fetch each requested manuscript id through the
// detail-page spec, politely, and aggregate in requested order. Individual
// failures are reported and skipped; only an empty id list short-circuits.

use std::{
    error::Error,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, WORKERS},
    config::options::ScrapeOptions,
    data::ManuscriptRecord,
    progress::Progress,
    specs,
};

pub fn collect_manuscripts(
    options: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ManuscriptRecord>, Box<dyn Error>> {
    let ids = options.ids.resolve();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
        p.log("Interrogation de Jonas…");
    }

    // Concurrency
    type FetchOk = (u64, ManuscriptRecord);
    type FetchErr = (u64, String);

    let ids_arc = Arc::new(ids.clone());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(ids.len()).max(1);
    let pause_ms = options.pause_ms;

    // Spawn workers
    for _ in 0..workers {
        let ids = Arc::clone(&ids_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= ids.len() {
                    break;
                }
                let ms_id = ids[i];
                let result = match specs::manuscript::fetch_and_extract(ms_id) {
                    Ok(record) => Ok((ms_id, record)),
                    Err(e) => Err((ms_id, e.to_string())),
                };
                let _ = tx.send(result);
                let jitter = ms_id % JITTER_MS.max(1);
                thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut fetched: Vec<(u64, ManuscriptRecord)> = Vec::new();

    for _ in 0..ids_arc.len() {
        match res_rx.recv() {
            Ok(Ok((id, record))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, &record.shelfmark);
                }
                fetched.push((id, record));
            }
            Ok(Err((id, msg))) => {
                loge!("Manuscrit {id}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id);
                }
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Deterministic output: requested order, failures dropped
    fetched.sort_by_key(|(id, _)| {
        ids_arc.iter().position(|x| x == id).unwrap_or(usize::MAX)
    });
    Ok(fetched.into_iter().map(|(_, record)| record).collect())
}
