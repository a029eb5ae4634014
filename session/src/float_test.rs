use super::*;

#[test]
fn catalog_has_five_floats_in_display_order() {
    let names = catalog().iter().map(|f| f.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "Gujarat Coast Float",
            "Konkan Coast Float",
            "Malabar Coast Float",
            "Coromandel Coast Float",
            "Andaman Sea Float",
        ]
    );
}

#[test]
fn catalog_names_are_unique() {
    for (i, a) in FLOATS.iter().enumerate() {
        for b in &FLOATS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn find_returns_coordinates() {
    let float = find("Andaman Sea Float").expect("andaman should exist");
    assert_eq!(float.coordinates, Coordinates::new(12.0, 94.0));
}

#[test]
fn find_is_exact() {
    assert!(find("andaman sea float").is_none());
    assert!(find("Andaman").is_none());
}

#[test]
fn find_loose_ignores_case_and_whitespace() {
    let float = find_loose("  malabar COAST float ").expect("malabar should match");
    assert_eq!(float.name, "Malabar Coast Float");
}

#[test]
fn float_serializes_name_and_coordinates() {
    let json = serde_json::to_value(FLOATS[0]).expect("float should serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Gujarat Coast Float",
            "coordinates": { "lat": 21.0, "lon": 67.5 }
        })
    );
}
