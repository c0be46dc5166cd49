use super::*;

#[test]
fn degenerate_inputs_map_to_zero() {
    let m = EdgeTimeMap::new(&BoundarySpec::new(0.0, 0.0, 0.0), 10.0);
    assert_eq!(m.piece_count(), 0);
    assert_eq!(m.distance_at(0.4), 0.0);

    let m = EdgeTimeMap::new(&BoundarySpec::new(10.0, 10.0, 0.0), 0.0);
    assert_eq!(m.piece_count(), 0);
}

#[test]
fn each_piece_gets_an_equal_time_slice() {
    // 100x20 sharp rectangle: long edges 100, short edges 20, four pieces.
    let m = EdgeTimeMap::new(&BoundarySpec::new(100.0, 20.0, 0.0), 240.0);
    assert_eq!(m.piece_count(), 4);
    assert_eq!(m.distance_at(0.0), 0.0);
    assert!((m.distance_at(0.25) - 100.0).abs() < 1e-9);
    assert!((m.distance_at(0.375) - 110.0).abs() < 1e-9);
    assert!((m.distance_at(0.5) - 120.0).abs() < 1e-9);
    assert!((m.distance_at(0.75) - 220.0).abs() < 1e-9);
    assert!((m.distance_at(1.25) - 100.0).abs() < 1e-9);
}

#[test]
fn rounded_outline_uses_eight_pieces_scaled_to_total() {
    let spec = BoundarySpec::new(200.0, 100.0, 22.0);
    let total = spec.perimeter() * 0.999;
    let m = EdgeTimeMap::new(&spec, total);
    assert_eq!(m.piece_count(), 8);
    assert!((m.distance_at(1.0 - 1e-12) - total).abs() < 1e-6);
    let mut prev = -1.0;
    for i in 0..100 {
        let d = m.distance_at(i as f64 / 100.0);
        assert!(d > prev);
        prev = d;
    }
}

#[test]
fn progress_at_inverts_distance_at() {
    let m = EdgeTimeMap::new(&BoundarySpec::new(100.0, 20.0, 0.0), 240.0);
    assert_eq!(m.progress_at(0.0), 0.0);
    assert!((m.progress_at(50.0) - 0.125).abs() < 1e-12);
    assert!((m.progress_at(100.0) - 0.25).abs() < 1e-12);
    assert!((m.progress_at(110.0) - 0.375).abs() < 1e-12);
    assert!((m.progress_at(350.0) - 0.375).abs() < 1e-12);
    assert!(m.progress_at(240.0) < 1e-12);

    let rounded = EdgeTimeMap::new(&BoundarySpec::new(200.0, 100.0, 22.0), 561.0);
    for i in 0..200 {
        let p = i as f64 / 200.0;
        assert!((rounded.progress_at(rounded.distance_at(p)) - p).abs() < 1e-9);
    }

    assert_eq!(EdgeTimeMap::default().progress_at(12.0), 0.0);
}
