// tests/view_filter.rs
//
// Filter step properties: free-text search over the searchable fields,
// support and saint facets, and their conjunction.
//
use jonas_scrape::data::ManuscriptRecord;
use jonas_scrape::view::{ViewState, filter_records, matches_filters};

fn rec(shelfmark: &str) -> ManuscriptRecord {
    ManuscriptRecord {
        jonas_url: "https://jonas.irht.cnrs.fr/x".into(),
        shelfmark: shelfmark.into(),
        ..Default::default()
    }
}

fn dataset() -> Vec<ManuscriptRecord> {
    let mut a = rec("BnF fr. 412");
    a.support = "parchemin".into();
    a.origin = "Picardie".into();
    a.saints = vec!["saint-martin".into()];

    let mut b = rec("BnF fr. 23112");
    b.support = "papier".into();
    b.language = "Picard".into();
    b.saints = vec!["saint-martin".into(), "saint-catherine".into()];

    let mut c = rec("Arsenal 3516");
    c.script = "gothique".into();

    vec![a, b, c]
}

fn marks<'a>(kept: &[&'a ManuscriptRecord]) -> Vec<&'a str> {
    kept.iter().map(|r| r.shelfmark.as_str()).collect()
}

#[test]
fn empty_state_keeps_every_record_once() {
    let ds = dataset();
    let kept = filter_records(&ds, &ViewState::default());
    assert_eq!(marks(&kept), vec!["BnF fr. 412", "BnF fr. 23112", "Arsenal 3516"]);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let ds = dataset();
    let mut state = ViewState::default();
    state.search = "  ARSENAL  ".into();
    let kept = filter_records(&ds, &state);
    assert_eq!(marks(&kept), vec!["Arsenal 3516"]);
}

#[test]
fn search_covers_origin_language_and_script() {
    let ds = dataset();
    let mut state = ViewState::default();

    // origin (Picardie) and language (Picard) both match
    state.search = "picard".into();
    assert_eq!(marks(&filter_records(&ds, &state)), vec!["BnF fr. 412", "BnF fr. 23112"]);

    // script
    state.search = "gothique".into();
    assert_eq!(marks(&filter_records(&ds, &state)), vec!["Arsenal 3516"]);
}

#[test]
fn search_does_not_cover_the_support_facet() {
    // "parchemin" appears only in `support`, which is a facet, not a
    // searched field — zero rows.
    let ds = dataset();
    let mut state = ViewState::default();
    state.search = "parchemin".into();
    assert!(filter_records(&ds, &state).is_empty());
}

#[test]
fn support_facet_is_exact_and_absent_never_matches() {
    let ds = dataset();
    let mut state = ViewState::default();
    state.support = "parchemin".into();
    let kept = filter_records(&ds, &state);
    assert_eq!(marks(&kept), vec!["BnF fr. 412"]);
    for r in kept {
        assert_eq!(r.support, "parchemin");
    }

    // "Arsenal 3516" has no support at all; it must not slip through any
    // non-empty support filter.
    state.support = "gothique".into();
    assert!(filter_records(&ds, &state).is_empty());
}

#[test]
fn saint_facet_is_membership() {
    let ds = dataset();
    let mut state = ViewState::default();
    state.saint = "saint-catherine".into();
    assert_eq!(marks(&filter_records(&ds, &state)), vec!["BnF fr. 23112"]);

    state.saint = "saint-martin".into();
    assert_eq!(marks(&filter_records(&ds, &state)), vec!["BnF fr. 412", "BnF fr. 23112"]);
}

#[test]
fn filters_are_conjunctive() {
    let ds = dataset();
    let mut state = ViewState::default();
    state.saint = "saint-martin".into();
    state.support = "papier".into();
    state.search = "picard".into();
    assert_eq!(marks(&filter_records(&ds, &state)), vec!["BnF fr. 23112"]);

    state.support = "parchemin".into();
    state.search = "23112".into();
    assert!(filter_records(&ds, &state).is_empty());
}

#[test]
fn predicate_matches_filter_results() {
    let ds = dataset();
    let mut state = ViewState::default();
    state.search = "picard".into();
    for r in &ds {
        let kept = filter_records(std::slice::from_ref(r), &state).len() == 1;
        assert_eq!(matches_filters(r, &state), kept);
    }
}
