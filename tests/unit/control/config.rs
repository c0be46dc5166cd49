use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = StreamBorderConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.snake_fraction, 0.32);
    assert_eq!(cfg.period_seconds, 7.0);
    assert_eq!(cfg.fade_cycle_seconds, None);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = StreamBorderConfig::from_json_str(
        r#"{ "snake_fraction": 0.3, "period_seconds": 10, "speed_policy": "equal_time_per_edge", "profile": "uniform" }"#,
    )
    .unwrap();
    assert_eq!(cfg.snake_fraction, 0.3);
    assert_eq!(cfg.period_seconds, 10.0);
    assert_eq!(cfg.speed_policy, SpeedPolicy::EqualTimePerEdge);
    assert_eq!(cfg.profile, ThicknessProfile::Uniform);
    assert_eq!(cfg.min_thickness, 4.0);
}

#[test]
fn unknown_fields_and_bad_ranges_are_rejected() {
    let err = StreamBorderConfig::from_json_str(r#"{ "snake": 0.3 }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));

    for json in [
        r#"{ "snake_fraction": 0.0 }"#,
        r#"{ "snake_fraction": 1.5 }"#,
        r#"{ "period_seconds": 0 }"#,
        r#"{ "resample_step": -1 }"#,
        r#"{ "min_thickness": 5, "max_thickness": 4 }"#,
        r#"{ "corner_radius": -2 }"#,
        r#"{ "fade_cycle_seconds": 0 }"#,
        r#"{ "flatten_tolerance": 1e-17 }"#,
    ] {
        let err = StreamBorderConfig::from_json_str(json).unwrap_err();
        assert!(
            err.to_string().contains("validation error:"),
            "{json} -> {err}"
        );
    }
}

#[test]
fn missing_file_reports_path() {
    let err = StreamBorderConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
