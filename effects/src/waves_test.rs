use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn six_layers_back_to_front() {
    assert_eq!(OCEAN_LAYERS.len(), 6);
    let offsets = OCEAN_LAYERS.iter().map(|l| l.offset).collect::<Vec<_>>();
    assert_eq!(offsets, vec![0.0, 40.0, 80.0, 120.0, 160.0, 200.0]);
}

#[test]
fn adjacent_layers_drift_in_opposite_directions() {
    for pair in OCEAN_LAYERS.windows(2) {
        assert!(pair[0].speed.signum() != pair[1].speed.signum());
    }
}

#[test]
fn baseline_adds_offset_to_fifth_of_height() {
    let layer = OCEAN_LAYERS[2];
    assert!(approx(layer.baseline(500.0), 180.0));
}

#[test]
fn phase_advances_with_time() {
    let layer = OCEAN_LAYERS[0];
    assert!(approx(layer.phase(0.0), 1.0));
    assert!(approx(layer.phase(1000.0), 2.0));
}

#[test]
fn crest_stays_within_amplitude_of_baseline() {
    let layer = OCEAN_LAYERS[3];
    for x in 0..400 {
        let y = layer.y_at(f64::from(x), 300.0, 12_345.0);
        assert!((y - layer.baseline(300.0)).abs() <= layer.amplitude + 1e-9);
    }
}

#[test]
fn outline_covers_every_column_and_closes_along_bottom() {
    let layer = OCEAN_LAYERS[0];
    let points = layer.outline(10, 100, 0.0);

    // start + 11 crest columns + 2 bottom corners
    assert_eq!(points.len(), 14);
    assert_eq!(points[0], Point::new(0.0, 20.0));
    assert!(approx(points[1].y, layer.y_at(0.0, 100.0, 0.0)));
    assert_eq!(points[11].x, 10.0);
    assert_eq!(points[12], Point::new(10.0, 100.0));
    assert_eq!(points[13], Point::new(0.0, 100.0));
}

#[test]
fn zero_width_canvas_still_closes() {
    let points = OCEAN_LAYERS[5].outline(0, 50, 0.0);
    assert_eq!(points.len(), 4);
}
