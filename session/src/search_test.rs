use super::*;

fn names(s: &Suggestions) -> Vec<&'static str> {
    s.floats().iter().map(|f| f.name).collect()
}

#[test]
fn empty_query_is_idle() {
    let s = filter("");
    assert_eq!(s, Suggestions::Idle);
    assert!(!s.is_visible());
}

#[test]
fn no_match_is_empty_not_idle() {
    let s = filter("pacific");
    assert_eq!(s, Suggestions::Empty);
    assert_ne!(s, Suggestions::Idle);
    assert!(!s.is_visible());
}

#[test]
fn lowercase_query_matches_mixed_case_name() {
    let s = filter("konkan");
    assert_eq!(names(&s), vec!["Konkan Coast Float"]);
    assert!(s.is_visible());
}

#[test]
fn uppercase_query_matches() {
    assert_eq!(names(&filter("ANDAMAN")), vec!["Andaman Sea Float"]);
}

#[test]
fn substring_anywhere_in_name() {
    assert_eq!(names(&filter("del")), vec!["Coromandel Coast Float"]);
}

#[test]
fn shared_substring_keeps_catalog_order() {
    assert_eq!(
        names(&filter("coast")),
        vec![
            "Gujarat Coast Float",
            "Konkan Coast Float",
            "Malabar Coast Float",
            "Coromandel Coast Float",
        ]
    );
}

#[test]
fn every_float_matches_common_suffix() {
    assert_eq!(filter("float").floats().len(), 5);
}

#[test]
fn whitespace_query_is_not_idle() {
    // Every name contains a space, so a lone space matches all of them.
    assert_eq!(filter(" ").floats().len(), 5);
}
