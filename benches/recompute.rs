// benches/recompute.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use jonas_scrape::data::ManuscriptRecord;
use jonas_scrape::view::{
    SortColumn, SortDirection, ViewState, filter_records, row_view, sort_records,
};

fn synthetic(n: usize) -> Vec<ManuscriptRecord> {
    let origins = ["Picardie", "Champagne", "Île-de-France", "Artois", ""];
    let supports = ["parchemin", "papier", ""];
    (0..n)
        .map(|i| ManuscriptRecord {
            jonas_id: i as u64,
            jonas_url: format!("https://jonas.irht.cnrs.fr/?projet={i}"),
            shelfmark: format!("BnF fr. {}", 20000 + i),
            origin: origins[i % origins.len()].to_string(),
            support: supports[i % supports.len()].to_string(),
            saints: if i % 4 == 0 {
                vec!["saint-martin".to_string()]
            } else {
                Vec::new()
            },
            ..Default::default()
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let records = synthetic(2_000);

    let mut state = ViewState::default();
    state.search = "picardie".to_string();

    c.bench_function("filter_2000", |b| {
        b.iter(|| {
            let kept = filter_records(black_box(&records), black_box(&state));
            black_box(kept.len())
        })
    });

    c.bench_function("filter_sort_2000", |b| {
        b.iter(|| {
            let mut kept = filter_records(black_box(&records), black_box(&state));
            sort_records(&mut kept, SortColumn::Origin, SortDirection::Desc);
            black_box(kept.len())
        })
    });

    c.bench_function("full_recompute_2000", |b| {
        let empty = ViewState::default();
        b.iter(|| {
            let mut kept = filter_records(black_box(&records), &empty);
            sort_records(&mut kept, SortColumn::Shelfmark, SortDirection::Asc);
            let rows: Vec<_> = kept.into_iter().map(row_view).collect();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
