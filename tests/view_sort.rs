// tests/view_sort.rs
//
// Sort step properties: French primary collation, per-column sort values,
// explicit shelfmark tie-break, exact reversal on direction flip.
//
use jonas_scrape::data::ManuscriptRecord;
use jonas_scrape::view::{SortColumn, SortDirection, sort_records, sort_value};

fn rec(shelfmark: &str, origin: &str) -> ManuscriptRecord {
    ManuscriptRecord {
        jonas_url: "https://jonas.irht.cnrs.fr/x".into(),
        shelfmark: shelfmark.into(),
        origin: origin.into(),
        ..Default::default()
    }
}

fn order<'a>(kept: &[&'a ManuscriptRecord]) -> Vec<&'a str> {
    kept.iter().map(|r| r.shelfmark.as_str()).collect()
}

#[test]
fn collation_ignores_case_and_accents() {
    let ds = vec![
        rec("M1", "Évreux"),
        rec("M2", "auxerre"),
        rec("M3", "Avignon"),
    ];
    let mut kept: Vec<&ManuscriptRecord> = ds.iter().collect();
    sort_records(&mut kept, SortColumn::Origin, SortDirection::Asc);
    assert_eq!(order(&kept), vec!["M2", "M3", "M1"]);
}

#[test]
fn descending_is_exact_reverse_of_ascending() {
    let ds = vec![
        rec("M1", "Picardie"),
        rec("M2", "Champagne"),
        rec("M3", "Picardie"),
        rec("M4", ""),
    ];
    let mut asc: Vec<&ManuscriptRecord> = ds.iter().collect();
    sort_records(&mut asc, SortColumn::Origin, SortDirection::Asc);

    let mut desc: Vec<&ManuscriptRecord> = ds.iter().collect();
    sort_records(&mut desc, SortColumn::Origin, SortDirection::Desc);

    let mut reversed = order(&asc);
    reversed.reverse();
    assert_eq!(order(&desc), reversed);
}

#[test]
fn absent_value_collates_first() {
    let ds = vec![rec("M1", "Artois"), rec("M2", "")];
    let mut kept: Vec<&ManuscriptRecord> = ds.iter().collect();
    sort_records(&mut kept, SortColumn::Origin, SortDirection::Asc);
    assert_eq!(order(&kept), vec!["M2", "M1"]);
}

#[test]
fn ties_break_on_shelfmark() {
    let ds = vec![
        rec("BnF fr. 9", "Picardie"),
        rec("Arsenal 2", "Picardie"),
        rec("BnF fr. 1", "Picardie"),
    ];
    let mut kept: Vec<&ManuscriptRecord> = ds.iter().collect();
    sort_records(&mut kept, SortColumn::Origin, SortDirection::Asc);
    assert_eq!(order(&kept), vec!["Arsenal 2", "BnF fr. 1", "BnF fr. 9"]);
}

#[test]
fn sort_is_idempotent() {
    let ds = vec![rec("M3", "c"), rec("M1", "a"), rec("M2", "b")];
    let mut once: Vec<&ManuscriptRecord> = ds.iter().collect();
    sort_records(&mut once, SortColumn::Origin, SortDirection::Desc);
    let mut twice = once.clone();
    sort_records(&mut twice, SortColumn::Origin, SortDirection::Desc);
    assert_eq!(order(&once), order(&twice));
}

#[test]
fn date_column_sorts_by_short_form_first() {
    let mut a = rec("M1", "");
    a.date_short = "13e s.".into();
    a.date = "13e s. (fin)".into();
    assert_eq!(sort_value(&a, SortColumn::Date), "13e s.");

    let mut b = rec("M2", "");
    b.date = "vers 1250".into();
    assert_eq!(sort_value(&b, SortColumn::Date), "vers 1250");

    let c = rec("M3", "");
    assert_eq!(sort_value(&c, SortColumn::Date), "");
}

#[test]
fn sort_value_per_column() {
    let mut r = rec("BnF fr. 412", "Picardie");
    r.support = "parchemin".into();
    assert_eq!(sort_value(&r, SortColumn::Shelfmark), "BnF fr. 412");
    assert_eq!(sort_value(&r, SortColumn::Support), "parchemin");
    assert_eq!(sort_value(&r, SortColumn::Origin), "Picardie");
}
