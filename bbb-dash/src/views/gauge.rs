//! Washing-frequency gauge
//!
//! The dial is the upper half of a pie: nine equal bands for 0-9 scrubs per
//! week, plus a transparent lower half. The needle is drawn as an SVG path
//! from the centre to a point on a circle of radius [`NEEDLE_RADIUS`].

use serde::Serialize;

/// Dial degrees per scrub per week (9 bands across 180°)
pub const DEGREES_PER_SCRUB: i64 = 20;

pub const NEEDLE_RADIUS: f64 = 0.5;

/// Needle base, a short vertical segment through the centre
const NEEDLE_BASE: &str = "M -.0 -0.05 L .0 0.05 L ";

/// Band labels, clockwise from the left end of the dial; the last is the hidden half
const BAND_LABELS: [&str; 10] = [
    "8-9", "7-8", "6-7", "5-6", "4-5", "3-4", "2-3", "1-2", "0-1", "",
];

const BAND_COLORS: [&str; 10] = [
    "#add8e6", "#b7dde5", "#c0e1e5", "#cae5e4", "#d3e9e4",
    "#dceee3", "#e4f2e2", "#eef7e1", "#f6fae1", "#ffffff",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Needle {
    pub x: f64,
    pub y: f64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub label: &'static str,
    /// Share of the full pie
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub frequency: i64,
    pub level: i64,
    pub degrees: f64,
    pub needle: Needle,
    pub bands: Vec<GaugeBand>,
}

pub fn gauge_view(frequency: i64) -> GaugeView {
    let level = frequency.saturating_mul(DEGREES_PER_SCRUB);
    let degrees = 180.0 - level as f64;
    let radians = degrees.to_radians();

    let x = NEEDLE_RADIUS * radians.cos();
    let y = NEEDLE_RADIUS * radians.sin();

    let bands = BAND_LABELS
        .iter()
        .zip(BAND_COLORS.iter())
        .enumerate()
        .map(|(i, (&label, &color))| GaugeBand {
            label,
            value: if i < 9 { 50.0 / 9.0 } else { 50.0 },
            color,
        })
        .collect();

    GaugeView {
        frequency,
        level,
        degrees,
        needle: Needle {
            x,
            y,
            path: format!("{}{} {} Z", NEEDLE_BASE, x, y),
        },
        bands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_gauge_zero_points_left() {
        let gauge = gauge_view(0);

        assert_eq!(gauge.level, 0);
        assert_eq!(gauge.degrees, 180.0);
        assert!((gauge.needle.x + 0.5).abs() < EPS);
        assert!(gauge.needle.y.abs() < EPS);
    }

    #[test]
    fn test_gauge_midpoint() {
        // 4.5 scrubs would be vertical; 9 points right
        let gauge = gauge_view(9);

        assert_eq!(gauge.level, 180);
        assert_eq!(gauge.degrees, 0.0);
        assert!((gauge.needle.x - 0.5).abs() < EPS);
        assert!(gauge.needle.y.abs() < EPS);
        assert_eq!(gauge.needle.path, "M -.0 -0.05 L .0 0.05 L 0.5 0 Z");
    }

    #[test]
    fn test_gauge_two_scrubs() {
        let gauge = gauge_view(2);

        assert_eq!(gauge.frequency, 2);
        assert_eq!(gauge.level, 40);
        assert_eq!(gauge.degrees, 140.0);

        let expected = 140f64.to_radians();
        assert!((gauge.needle.x - 0.5 * expected.cos()).abs() < EPS);
        assert!((gauge.needle.y - 0.5 * expected.sin()).abs() < EPS);
        assert!(gauge.needle.path.starts_with("M -.0 -0.05 L .0 0.05 L -0.383"));
        assert!(gauge.needle.path.ends_with(" Z"));
    }

    #[test]
    fn test_gauge_bands_cover_full_pie() {
        let gauge = gauge_view(3);

        assert_eq!(gauge.bands.len(), 10);
        assert_eq!(gauge.bands[0].label, "8-9");
        assert_eq!(gauge.bands[8].label, "0-1");
        assert_eq!(gauge.bands[9].label, "");

        let total: f64 = gauge.bands.iter().map(|b| b.value).sum();
        assert!((total - 100.0).abs() < EPS);
    }
}
