use super::*;

#[test]
fn style_json_round_trips_through_hex() {
    let style: StreamBorderStyle =
        serde_json::from_str(r##"{ "outer_color": "#112233", "border_stroke_thickness": 2 }"##)
            .unwrap();
    assert_eq!(style.outer_color, Rgba8::rgb(0x11, 0x22, 0x33));
    assert_eq!(style.border_stroke_thickness, 2.0);
    assert_eq!(style.center_color, StreamBorderStyle::default().center_color);
}

#[test]
fn negative_border_width_is_invalid() {
    let style = StreamBorderStyle {
        border_stroke_thickness: -1.0,
        ..StreamBorderStyle::default()
    };
    assert!(style.validate().is_err());
}
