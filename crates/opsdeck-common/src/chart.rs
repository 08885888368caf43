//! OpsDeck Chart - SVG Chart Geometry
//!
//! Turns numeric series into SVG path data for the inline charts. Values are
//! scaled against the series maximum, or a ceiling shared by several series,
//! with the y axis inverted; an all-zero or empty series is scaled against 1.
//!
//! Key Features:
//! - Line and area path data for time series
//! - Evenly spaced bar rectangles
//! - Shared ceilings for series drawn on one axis
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Drawing area of a chart in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// A bar of a bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartFrame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Y coordinate of the baseline.
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Largest value of the series, or 1 when nothing is positive.
    pub fn ceiling(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        if max > 0.0 {
            max
        } else {
            1.0
        }
    }

    /// Points of the series in drawing coordinates.
    pub fn points(&self, values: &[f64]) -> Vec<(f64, f64)> {
        self.points_within(values, Self::ceiling(values))
    }

    /// Points of the series scaled against an explicit ceiling, so that
    /// several series can share one y axis.
    pub fn points_within(&self, values: &[f64], ceiling: f64) -> Vec<(f64, f64)> {
        let ceiling = if ceiling > 0.0 { ceiling } else { 1.0 };
        let n = values.len();

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = if n > 1 {
                    self.padding + self.plot_width() * i as f64 / (n - 1) as f64
                } else {
                    self.width / 2.0
                };
                let y = self.baseline() - self.plot_height() * (v / ceiling);
                (x, y)
            })
            .collect()
    }

    /// `d` attribute of a polyline through the series.
    pub fn line_path(&self, values: &[f64]) -> String {
        self.line_path_within(values, Self::ceiling(values))
    }

    /// Polyline scaled against an explicit ceiling.
    pub fn line_path_within(&self, values: &[f64], ceiling: f64) -> String {
        let mut path = String::new();
        for (i, (x, y)) in self.points_within(values, ceiling).into_iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                path.push(' ');
            }
            let _ = write!(path, "{}{:.1},{:.1}", cmd, x, y);
        }
        path
    }

    /// `d` attribute of the line closed down to the baseline.
    pub fn area_path(&self, values: &[f64]) -> String {
        self.area_path_within(values, Self::ceiling(values))
    }

    /// Area scaled against an explicit ceiling.
    pub fn area_path_within(&self, values: &[f64], ceiling: f64) -> String {
        let points = self.points_within(values, ceiling);
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return String::new();
        };

        format!(
            "{} L{:.1},{:.1} L{:.1},{:.1} Z",
            self.line_path_within(values, ceiling),
            last.0,
            self.baseline(),
            first.0,
            self.baseline()
        )
    }

    /// Evenly spaced bars, each taking `fill` of its slot width.
    pub fn bars(&self, values: &[f64], fill: f64) -> Vec<BarRect> {
        if values.is_empty() {
            return Vec::new();
        }

        let ceiling = Self::ceiling(values);
        let slot = self.plot_width() / values.len() as f64;
        let width = slot * fill.clamp(0.0, 1.0);

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let height = self.plot_height() * (v / ceiling);
                BarRect {
                    x: self.padding + slot * i as f64 + (slot - width) / 2.0,
                    y: self.baseline() - height,
                    width,
                    height,
                }
            })
            .collect()
    }
}

/// `HH:MM` axis label for a timestamp.
pub fn time_label(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FRAME: ChartFrame = ChartFrame::new(100.0, 50.0, 5.0);

    #[test]
    fn test_line_path() {
        assert_eq!(FRAME.line_path(&[0.0, 10.0]), "M5.0,45.0 L95.0,5.0");
        assert_eq!(FRAME.line_path(&[]), "");
        assert_eq!(FRAME.line_path(&[0.0, 0.0]), "M5.0,45.0 L95.0,45.0");
    }

    #[test]
    fn test_single_point_centered() {
        assert_eq!(FRAME.points(&[4.0]), vec![(50.0, 5.0)]);
    }

    #[test]
    fn test_area_path() {
        assert_eq!(
            FRAME.area_path(&[10.0, 5.0]),
            "M5.0,5.0 L95.0,25.0 L95.0,45.0 L5.0,45.0 Z"
        );
        assert_eq!(FRAME.area_path(&[]), "");
    }

    #[test]
    fn test_shared_ceiling() {
        let requests = [1000.0, 500.0];
        let errors = [10.0, 5.0];
        let ceiling = ChartFrame::ceiling(&requests).max(ChartFrame::ceiling(&errors));

        assert_eq!(FRAME.line_path_within(&requests, ceiling), "M5.0,5.0 L95.0,25.0");
        assert_eq!(FRAME.line_path_within(&errors, ceiling), "M5.0,44.6 L95.0,44.8");
        assert_eq!(
            FRAME.area_path_within(&requests, ceiling),
            FRAME.area_path(&requests)
        );

        // On its own scale the small series would reach the top.
        assert_eq!(FRAME.line_path(&errors), "M5.0,5.0 L95.0,25.0");
        assert_eq!(FRAME.line_path_within(&[0.0], 0.0), "M50.0,45.0");
    }

    #[test]
    fn test_bars() {
        let bars = FRAME.bars(&[2.0, 1.0], 0.5);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].width, 22.5);
        assert_eq!(bars[0].height, 40.0);
        assert_eq!(bars[1].height, 20.0);
        assert_eq!(bars[1].y, 25.0);
        assert!(FRAME.bars(&[], 0.5).is_empty());
    }

    #[test]
    fn test_time_label() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 7, 5, 59).unwrap();
        assert_eq!(time_label(&ts), "07:05");
    }
}
