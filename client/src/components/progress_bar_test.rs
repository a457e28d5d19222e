use super::*;

#[test]
fn clamp_percent_bounds_value() {
    assert_eq!(clamp_percent(-5.0), 0.0);
    assert_eq!(clamp_percent(42.5), 42.5);
    assert_eq!(clamp_percent(140.0), 100.0);
    assert_eq!(clamp_percent(f64::NAN), 0.0);
}

#[test]
fn fill_style_uses_clamped_width() {
    assert_eq!(fill_style(60.0), "width: 60%;");
    assert_eq!(fill_style(250.0), "width: 100%;");
}
