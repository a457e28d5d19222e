use super::*;

const VB: Viewbox = Viewbox::new(100.0, 50.0, 0.0);

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn scale_maps_linearly_and_handles_flat_ranges() {
    assert!(approx(scale(5.0, 0.0, 10.0, 0.0, 100.0), 50.0));
    assert!(approx(scale(0.0, 0.0, 10.0, 50.0, 0.0), 50.0));
    assert!(approx(scale(3.0, 3.0, 3.0, 0.0, 100.0), 50.0));
}

#[test]
fn bounds_skips_non_finite_values() {
    assert_eq!(bounds(&[]), None);
    assert_eq!(bounds(&[2.0, f64::NAN, -1.0, 4.0]), Some((-1.0, 4.0)));
}

#[test]
fn polyline_spans_viewbox_with_max_at_top() {
    assert_eq!(polyline(&[0.0, 10.0], VB), "0.00,50.00 100.00,0.00");
}

#[test]
fn polyline_of_empty_series_is_empty() {
    assert_eq!(polyline(&[], VB), "");
    assert_eq!(area_path(&[], VB), "");
}

#[test]
fn single_point_is_centered() {
    let points = series_points(&[7.0], (7.0, 7.0), VB);
    assert_eq!(points.len(), 1);
    assert!(approx(points[0].0, 50.0));
    assert!(approx(points[0].1, 25.0));
}

#[test]
fn area_path_closes_to_baseline() {
    let d = area_path(&[1.0, 2.0, 3.0], VB);
    assert!(d.starts_with("M0.00,50.00"));
    assert!(d.ends_with("L100.00,50.00 Z"));
}

#[test]
fn bars_grow_from_zero_baseline() {
    let rects = bar_rects(&[5.0, 10.0], VB, 10.0);
    assert_eq!(rects.len(), 2);
    assert!(approx(rects[1].y, 0.0));
    assert!(approx(rects[1].height, 50.0));
    assert!(approx(rects[0].height, 25.0));
    assert!(approx(rects[0].width, 40.0));
    assert!(rects[0].x < rects[1].x);
}

#[test]
fn negative_bars_are_flat() {
    let rects = bar_rects(&[-3.0, 6.0], VB, 0.0);
    assert!(approx(rects[0].height, 0.0));
}

#[test]
fn all_zero_bars_sit_on_the_baseline() {
    let rects = bar_rects(&[0.0, 0.0, 0.0], VB, 0.0);
    assert_eq!(rects.len(), 3);
    for rect in &rects {
        assert!(approx(rect.height, 0.0));
        assert!(approx(rect.y, 50.0));
    }
    let negative = bar_rects(&[-2.0, -5.0], VB, 0.0);
    assert!(negative.iter().all(|r| approx(r.height, 0.0)));
}

#[test]
fn scatter_uses_independent_axes() {
    let points = scatter(&[10.0, 20.0], &[1.0, 3.0], VB);
    assert_eq!(points, vec![(0.0, 50.0), (100.0, 0.0)]);
    assert!(scatter(&[], &[], VB).is_empty());
}

#[test]
fn donut_has_one_path_per_share_and_skips_empty_slices() {
    let arcs = donut_arcs(&[50.0, 0.0, 50.0], 50.0, 50.0, 40.0, 25.0);
    assert_eq!(arcs.len(), 3);
    assert!(arcs[0].starts_with("M50.00,10.00"));
    assert!(arcs[1].is_empty());
    assert!(arcs[2].ends_with('Z'));
}

#[test]
fn donut_with_no_positive_shares_is_blank() {
    let arcs = donut_arcs(&[0.0, 0.0], 50.0, 50.0, 40.0, 25.0);
    assert!(arcs.iter().all(String::is_empty));
}

#[test]
fn full_circle_donut_uses_large_arc_flag() {
    let arcs = donut_arcs(&[100.0], 0.0, 0.0, 10.0, 5.0);
    assert!(arcs[0].contains(" 0 1 1 "));
}

#[test]
fn radar_first_vertex_points_up_and_scores_are_clamped() {
    let points = radar_points(&[100.0, 50.0, 150.0, 0.0], 100.0, 50.0, 50.0, 40.0);
    assert_eq!(points.len(), 4);
    assert!(approx(points[0].0, 50.0));
    assert!(approx(points[0].1, 10.0));
    assert!(approx(points[1].0, 70.0));
    assert!(approx(points[2].1, 90.0));
    assert!(approx(points[3].0, 50.0));
}

#[test]
fn join_points_formats_two_decimals() {
    assert_eq!(join_points(&[(1.0, 2.5), (3.333, 4.0)]), "1.00,2.50 3.33,4.00");
}
