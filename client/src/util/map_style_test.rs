use super::*;

#[test]
fn zoom_control_moves_to_bottom_left() {
    assert_eq!(map_options()["zoomControl"], json!(false));
    assert_eq!(zoom_control_options()["position"], "bottomleft");
}

#[test]
fn tiles_cap_zoom_and_credit_osm() {
    let opts = tile_options();
    assert_eq!(opts["maxZoom"], 18);
    assert!(opts["attribution"].as_str().is_some_and(|a| a.contains("OpenStreetMap")));
}

#[test]
fn area_circle_is_200km_translucent() {
    let opts = area_options();
    assert_eq!(opts["radius"], 200_000.0);
    assert_eq!(opts["fillOpacity"], 0.15);
}

#[test]
fn point_is_opaque_with_white_ring() {
    let opts = point_options();
    assert_eq!(opts["color"], "#ffffff");
    assert_eq!(opts["fillOpacity"], 1);
}

#[test]
fn popup_bolds_name() {
    assert_eq!(popup_html("Andaman Sea Float"), "<b>Andaman Sea Float</b>");
}
