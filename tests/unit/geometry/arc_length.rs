use super::*;

fn square_index() -> ArcLengthIndex {
    // Unit-spaced closed square of side 2, perimeter 8.
    ArcLengthIndex::new(&[
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
        Point::new(0.0, 1.0),
        Point::new(0.0, 0.0),
    ])
}

fn boundary_index() -> ArcLengthIndex {
    ArcLengthIndex::from_boundary(&BoundarySpec::new(200.0, 100.0, 22.0), 0.2, 1.0)
}

#[test]
fn empty_and_single_point_inputs_are_not_ready() {
    assert!(ArcLengthIndex::new(&[]).is_empty());
    let single = ArcLengthIndex::new(&[Point::new(3.0, 4.0), Point::new(3.0, 4.0)]);
    assert!(single.is_empty());
    assert_eq!(single.total_length(), 0.0);
    assert!(single.points_in_range(0.0, 1.0).is_empty());
    assert!(ArcLengthIndex::from_boundary(&BoundarySpec::new(0.0, 0.0, 0.0), 0.2, 1.0).is_empty());
}

#[test]
fn zero_length_segments_are_skipped_and_arrays_stay_parallel() {
    let idx = ArcLengthIndex::new(&[
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 2.0),
    ]);
    assert_eq!(idx.points().len(), 3);
    assert_eq!(idx.segment_lengths(), &[1.0, 2.0]);
    assert_eq!(idx.cumulative(), &[1.0, 3.0]);
    assert_eq!(idx.total_length(), 3.0);
}

#[test]
fn total_length_equals_sum_of_point_distances_and_is_stable() {
    let a = boundary_index();
    let sum: f64 = a.points().windows(2).map(|w| w[0].distance(w[1])).sum();
    assert!((a.total_length() - sum).abs() < 1e-9);

    let b = boundary_index();
    assert!((a.total_length() - b.total_length()).abs() < 0.2);
    assert!(a.cumulative().windows(2).all(|w| w[1] > w[0]));
    let (first, last) = (a.points()[0], a.points()[a.points().len() - 1]);
    assert!(first.distance(last) <= 0.01 + 1e-9);
}

#[test]
fn point_at_distance_interpolates_and_clamps() {
    let idx = square_index();
    assert_eq!(idx.point_at_distance(0.0), (Point::new(0.0, 0.0), 0));
    let (p, seg) = idx.point_at_distance(2.5);
    assert!(p.distance(Point::new(2.0, 0.5)) < 1e-12);
    assert_eq!(seg, 2);

    // Segment boundaries resolve to the segment that ends there.
    assert_eq!(idx.point_at_distance(1.0).1, 0);

    let (p, seg) = idx.point_at_distance(8.0 + 1.0);
    assert_eq!(p, Point::new(0.0, 0.0));
    assert_eq!(seg, 7);
    assert_eq!(idx.point_at_distance(f64::NAN).1, 7);
    assert_eq!(idx.point_at_distance(-1.0).0, Point::new(0.0, 0.0));
}

#[test]
fn point_near_end_is_close_to_last_point_before_closure() {
    let idx = boundary_index();
    let eps = 1e-3;
    let (p, _) = idx.point_at_distance(idx.total_length() - eps);
    let last = idx.points()[idx.points().len() - 1];
    assert!(p.distance(last) <= eps + 1e-9);
}

#[test]
fn points_in_range_keeps_interior_samples() {
    let idx = square_index();
    let pts = idx.points_in_range(0.5, 3.5);
    assert_eq!(
        pts,
        vec![
            Point::new(0.5, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 1.5),
        ]
    );
    assert!(idx.points_in_range(3.0, 3.0).is_empty());
    assert!(idx.points_in_range(4.0, 1.0).is_empty());
}

#[test]
fn range_on_sample_boundaries_has_no_duplicates() {
    let idx = square_index();
    let pts = idx.points_in_range(1.0, 3.0);
    assert_eq!(
        pts,
        vec![
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0)
        ]
    );
}

#[test]
fn wrapped_window_emits_seam_point_once() {
    let idx = square_index();
    let w = Window::trailing(1.5, 8.0, 0.25).unwrap();
    assert!(w.is_wrapped());
    assert_eq!(w.tail, 7.5);
    let pts = idx.window_points(&w);
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.5),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.5, 0.0),
        ]
    );
}

#[test]
fn window_span_is_fraction_of_total() {
    let total = 8.0;
    for &f in &[0.1, 0.25, 0.32, 0.5, 0.99, 1.0] {
        for &head in &[0.0, 0.3, 1.9, 4.0, 7.99] {
            let w = Window::trailing(head, total, f).unwrap();
            assert!((w.span(total) - f * total).abs() < 1e-9, "f={f} head={head}");
        }
    }
    assert!(Window::trailing(1.0, 0.0, 0.3).is_none());
}

#[test]
fn full_loop_window_covers_the_whole_path() {
    let idx = square_index();
    let w = Window::trailing(2.0, 8.0, 1.0).unwrap();
    assert!(w.is_wrapped());
    let pts = idx.window_points(&w);
    assert_eq!(pts.first(), Some(&Point::new(2.0, 0.0)));
    assert_eq!(pts.last(), Some(&Point::new(2.0, 0.0)));
    let len: f64 = pts.windows(2).map(|p| p[0].distance(p[1])).sum();
    assert!((len - 8.0).abs() < 1e-9);
}
