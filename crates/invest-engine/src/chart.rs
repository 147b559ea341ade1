//! Chart geometry derived from projection output.
//!
//! Pure state-to-points transforms; the renderer only joins the points.

use crate::ProjectionPoint;
use serde::{Deserialize, Serialize};

/// A single vertex of a polyline, in renderer coordinates (y grows down).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Fraction of the chart height the curve may rise into; the rest is
/// headroom above the final value.
const RISE_FRACTION: f64 = 0.9;

/// Geometry for the valuation chart: the series normalized between its
/// year-0 baseline and its peak, scaled into a `width` x `height` box.
///
/// A flat series (zero appreciation) sits on the baseline instead of
/// dividing by a zero range. Returns `None` for an empty series or
/// non-finite values.
pub fn value_polyline(
    series: &[ProjectionPoint],
    width: f64,
    height: f64,
) -> Option<Vec<ChartPoint>> {
    if series.is_empty() || !(width.is_finite() && height.is_finite()) {
        return None;
    }
    let baseline = series[0].projected_value;
    let mut peak = baseline;
    for p in series {
        if !p.projected_value.is_finite() {
            return None;
        }
        peak = peak.max(p.projected_value);
    }
    let range = peak - baseline;
    let len = series.len() as f64;
    let points = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let rise = if range > 0.0 {
                (p.projected_value - baseline) / range
            } else {
                0.0
            };
            ChartPoint {
                x: (i as f64 / len) * width,
                y: height - rise * RISE_FRACTION * height,
            }
        })
        .collect();
    Some(points)
}

/// Geometry for a min/max-normalized trend sparkline (analytics cards,
/// momentum clock). The first sample sits at x = 0 and the last at
/// x = `width`; a flat trend draws as a midline.
pub fn sparkline(values: &[f64], width: f64, height: f64) -> Option<Vec<ChartPoint>> {
    if values.is_empty() || !(width.is_finite() && height.is_finite()) {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            return None;
        }
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;
    let last = (values.len() - 1).max(1) as f64;
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let rise = if range > 0.0 { (v - min) / range } else { 0.5 };
            ChartPoint {
                x: (i as f64 / last) * width,
                y: height - rise * height,
            }
        })
        .collect();
    Some(points)
}
