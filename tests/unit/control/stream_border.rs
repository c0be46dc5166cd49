use super::*;
use crate::animation::snake::AnimatorState;

fn control() -> StreamBorder {
    let mut c = StreamBorder::new(StreamBorderConfig {
        snake_fraction: 0.3,
        period_seconds: 10.0,
        ..StreamBorderConfig::default()
    })
    .unwrap();
    c.set_boundary(200.0, 100.0, 22.0);
    c
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let err = StreamBorder::new(StreamBorderConfig {
        snake_fraction: 0.0,
        ..StreamBorderConfig::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("snake_fraction"));
}

#[test]
fn frames_before_any_boundary_draw_nothing() {
    let mut c = StreamBorder::new(StreamBorderConfig::default()).unwrap();
    assert!(!c.is_ready());
    let out = c.on_frame(1.0);
    assert!(out.polygon.is_none());
    assert_eq!(out.opacity, 1.0);
    assert_eq!(c.animator().state(), AnimatorState::Idle);
}

#[test]
fn rebuild_resets_animation_state() {
    let mut c = control();
    c.on_frame(0.0);
    c.on_frame(1.0);
    assert!(c.head_position() > 0.0);

    c.set_boundary(300.0, 120.0, 22.0);
    assert_eq!(c.head_position(), 0.0);
    assert_eq!(c.animator().state(), AnimatorState::Idle);
    assert!((c.boundary().unwrap().width() - 300.0).abs() < 1e-12);
}

#[test]
fn unchanged_boundary_does_not_reset() {
    let mut c = control();
    c.on_frame(0.0);
    c.on_frame(1.0);
    let head = c.head_position();
    let before = c.geometry();
    c.set_boundary(200.0, 100.0, 22.0);
    assert_eq!(c.head_position(), head);
    assert!(Arc::ptr_eq(&before, &c.geometry()));
}

#[test]
fn old_geometry_handles_survive_a_swap() {
    let mut c = control();
    let old = c.geometry();
    let old_total = old.index().total_length();
    c.set_boundary(50.0, 50.0, 5.0);
    assert_eq!(old.index().total_length(), old_total);
    assert!(c.index().total_length() < old_total);
}

#[test]
fn degenerate_radius_input_clamps_to_zero() {
    let mut c = control();
    c.set_boundary(200.0, 100.0, -4.0);
    assert_eq!(c.boundary().unwrap().corner_radius(), 0.0);
    assert_eq!(c.config().corner_radius, 0.0);
}

#[test]
fn frame_window_matches_fraction_and_builds_polygon() {
    let mut c = control();
    c.on_frame(0.0);
    let out = c.on_frame(0.5);
    let total = c.index().total_length();
    let w = out.window.unwrap();
    assert!((w.span(total) - 0.3 * total).abs() < 1e-9);
    let poly = out.polygon.unwrap();
    assert_eq!(poly.centerline_len(), out.centerline.len());
    assert_eq!(c.window(), Some(w));
}

#[test]
fn visual_setters_validate_and_apply() {
    let mut c = control();
    assert!(c.set_snake_fraction(1.2).is_err());
    assert_eq!(c.config().snake_fraction, 0.3);
    c.set_snake_fraction(0.5).unwrap();
    assert!(c.set_thickness(6.0, 2.0).is_err());
    c.set_thickness(2.0, 8.0).unwrap();
    c.set_profile(ThicknessProfile::Uniform).unwrap();
    c.set_period_seconds(3.0).unwrap();
    c.set_speed_policy(SpeedPolicy::EqualTimePerEdge).unwrap();

    c.on_frame(0.0);
    let out = c.on_frame(0.25);
    let total = c.index().total_length();
    assert!((out.window.unwrap().span(total) - 0.5 * total).abs() < 1e-9);
}

#[test]
fn geometry_setters_rebuild() {
    let mut c = control();
    let coarse_points = c.index().points().len();
    c.set_resample_step(0.5).unwrap();
    assert!(c.index().points().len() > coarse_points);
    assert!(c.set_resample_step(0.0).is_err());

    let before = c.index().total_length();
    c.set_corner_radius(0.0).unwrap();
    assert!(c.index().total_length() > before);
    c.set_flatten_tolerance(0.05).unwrap();
    assert!(c.is_ready());
}

#[test]
fn fade_runs_only_when_enabled() {
    let mut c = control();
    assert_eq!(c.fade_phase(), None);
    c.set_fade_cycle_seconds(Some(2.0)).unwrap();
    c.on_frame(0.0);
    let out = c.on_frame(1.0);
    assert!((c.fade_phase().unwrap() - 0.5).abs() < 1e-12);
    assert!(out.opacity.abs() < 1e-12);

    c.set_boundary(120.0, 60.0, 10.0);
    assert_eq!(c.fade_phase(), Some(0.0));

    c.set_fade_cycle_seconds(None).unwrap();
    c.on_frame(0.0);
    assert_eq!(c.on_frame(1.0).opacity, 1.0);
}

#[test]
fn speed_policy_switch_mid_run_keeps_the_head_moving_smoothly() {
    let mut c = control();
    c.on_frame(0.0);
    c.on_frame(1.0);
    let before = c.head_position();

    c.set_speed_policy(SpeedPolicy::EqualTimePerEdge).unwrap();
    let dt = 1.0 / 60.0;
    c.on_frame(1.0 + dt);
    let after = c.head_position();

    // Still on the top edge, which gets an eighth of the period.
    let b = c.boundary().copied().unwrap();
    let top = b.pieces()[0].length() * c.index().total_length() / b.perimeter();
    let expected = top / (c.config().period_seconds / 8.0) * dt;
    assert!(
        (after - before - expected).abs() < 1e-6,
        "before {before} after {after} expected step {expected}"
    );
}
