//! Geometry for the inline SVG charts.
//!
//! All functions are pure: they map data series into viewbox coordinates
//! and return SVG attribute strings. Empty input yields empty output so the
//! chart components can render a blank "no data" frame.

use std::f64::consts::{FRAC_PI_2, TAU};

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

/// Drawable area inside an SVG `viewBox`, with uniform padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewbox {
    pub width: f64,
    pub height: f64,
    pub pad: f64,
}

impl Viewbox {
    pub const fn new(width: f64, height: f64, pad: f64) -> Self {
        Self { width, height, pad }
    }

    #[must_use]
    pub fn attr(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn left(&self) -> f64 {
        self.pad
    }

    fn right(&self) -> f64 {
        self.width - self.pad
    }

    fn top(&self) -> f64 {
        self.pad
    }

    fn bottom(&self) -> f64 {
        self.height - self.pad
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Linear map of `value` from `[min, max]` to `[out_min, out_max]`.
/// A degenerate input range maps to the output midpoint.
#[must_use]
pub fn scale(value: f64, min: f64, max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = max - min;
    if span.abs() < f64::EPSILON || !span.is_finite() {
        return (out_min + out_max) / 2.0;
    }
    out_min + (value - min) / span * (out_max - out_min)
}

/// Min and max of a series, ignoring non-finite values.
#[must_use]
pub fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Evenly spaced x positions for `count` samples.
fn x_positions(count: usize, vb: Viewbox) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if count == 1 {
            (vb.left() + vb.right()) / 2.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / (count - 1) as f64;
            vb.left() + t * (vb.right() - vb.left())
        }
    })
}

/// Points of one series scaled against `range` (usually the series bounds).
#[must_use]
pub fn series_points(values: &[f64], range: (f64, f64), vb: Viewbox) -> Vec<(f64, f64)> {
    x_positions(values.len(), vb)
        .zip(values)
        .map(|(x, v)| (x, scale(*v, range.0, range.1, vb.bottom(), vb.top())))
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
#[must_use]
pub fn polyline(values: &[f64], vb: Viewbox) -> String {
    let Some(range) = bounds(values) else {
        return String::new();
    };
    join_points(&series_points(values, range, vb))
}

/// Closed `d` path filling the area between the series and the baseline.
#[must_use]
pub fn area_path(values: &[f64], vb: Viewbox) -> String {
    let Some(range) = bounds(values) else {
        return String::new();
    };
    let points = series_points(values, range, vb);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = format!("M{:.2},{:.2}", first.0, vb.bottom());
    for (x, y) in &points {
        d.push_str(&format!(" L{x:.2},{y:.2}"));
    }
    d.push_str(&format!(" L{:.2},{:.2} Z", last.0, vb.bottom()));
    d
}

/// Vertical bars from a zero baseline, one slot per value.
#[must_use]
pub fn bar_rects(values: &[f64], vb: Viewbox, gap: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let slot = (vb.right() - vb.left()) / values.len() as f64;
    let width = (slot - gap).max(1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let top = if max > 0.0 {
                scale(v.max(0.0), 0.0, max, vb.bottom(), vb.top())
            } else {
                vb.bottom()
            };
            #[allow(clippy::cast_precision_loss)]
            let x = vb.left() + slot * i as f64 + (slot - width) / 2.0;
            Rect { x, y: top, width, height: vb.bottom() - top }
        })
        .collect()
}

/// Points of a scatter plot, each axis scaled to its own bounds.
#[must_use]
pub fn scatter(xs: &[f64], ys: &[f64], vb: Viewbox) -> Vec<(f64, f64)> {
    let (Some(xr), Some(yr)) = (bounds(xs), bounds(ys)) else {
        return Vec::new();
    };
    xs.iter()
        .zip(ys)
        .map(|(x, y)| (scale(*x, xr.0, xr.1, vb.left(), vb.right()), scale(*y, yr.0, yr.1, vb.bottom(), vb.top())))
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Ring segment `d` paths, one per share, clockwise from twelve o'clock.
/// Shares are normalized by their sum; non-positive shares get no segment
/// but keep their slot in the output so colors stay aligned.
#[must_use]
pub fn donut_arcs(shares: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<String> {
    let total: f64 = shares.iter().copied().filter(|s| *s > 0.0).sum();
    if total <= 0.0 {
        return vec![String::new(); shares.len()];
    }
    let max_sweep = TAU - 1e-4;
    let mut start = -FRAC_PI_2;
    shares
        .iter()
        .map(|share| {
            if *share <= 0.0 {
                return String::new();
            }
            let sweep = (share / total * TAU).min(max_sweep);
            let end = start + sweep;
            let large = u8::from(sweep > std::f64::consts::PI);
            let (ox0, oy0) = polar(cx, cy, outer, start);
            let (ox1, oy1) = polar(cx, cy, outer, end);
            let (ix1, iy1) = polar(cx, cy, inner, end);
            let (ix0, iy0) = polar(cx, cy, inner, start);
            start = end;
            format!(
                "M{ox0:.2},{oy0:.2} A{outer},{outer} 0 {large} 1 {ox1:.2},{oy1:.2} \
                 L{ix1:.2},{iy1:.2} A{inner},{inner} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
            )
        })
        .collect()
}

/// Radar polygon vertices for `scores` out of `full`, first axis pointing up.
#[must_use]
pub fn radar_points(scores: &[f64], full: f64, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    if scores.is_empty() || full <= 0.0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / scores.len() as f64;
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = -FRAC_PI_2 + step * i as f64;
            polar(cx, cy, radius * (s / full).clamp(0.0, 1.0), angle)
        })
        .collect()
}

/// Space separated `x,y` pairs for `points` attributes.
#[must_use]
pub fn join_points(points: &[(f64, f64)]) -> String {
    points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect::<Vec<_>>().join(" ")
}
