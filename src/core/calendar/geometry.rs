//! Normalized placement of a laid-out segment inside its day column.

use super::segments::Segment;
use crate::utils::time::{MINUTES_PER_DAY, minutes_between};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fractions of the day column: `top`/`height` along the 24h axis,
/// `left`/`width` across the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub top_fraction: f64,
    pub height_fraction: f64,
    pub left_fraction: f64,
    pub width_fraction: f64,
}

pub fn to_geometry(segment: &Segment<'_>, day_start: NaiveDateTime, min_height_fraction: f64) -> Geometry {
    let day = MINUTES_PER_DAY as f64;
    let top = minutes_between(day_start, segment.start) as f64;
    let duration = minutes_between(segment.start, segment.end).max(1) as f64;
    let cols = segment.col_count.max(1) as f64;

    Geometry {
        top_fraction: top / day,
        height_fraction: (duration / day).max(min_height_fraction),
        left_fraction: segment.col_index as f64 / cols,
        width_fraction: 1.0 / cols,
    }
}

/// Pixel sizes of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub hour_height_px: f64,
    pub min_event_height_px: f64,
    pub gutter_px: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            hour_height_px: 56.0,
            min_event_height_px: 18.0,
            gutter_px: 2.0,
        }
    }
}

/// Absolute placement of a block; horizontal values are percentages of the
/// column width, the consumer offsets by `gutter_px` on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelBox {
    pub top_px: f64,
    pub height_px: f64,
    pub left_percent: f64,
    pub width_percent: f64,
    pub gutter_px: f64,
}

impl GridMetrics {
    pub fn day_height_px(&self) -> f64 {
        self.hour_height_px * 24.0
    }

    pub fn min_height_fraction(&self) -> f64 {
        let day = self.day_height_px();
        if day <= 0.0 {
            return 0.0;
        }
        self.min_event_height_px / day
    }

    pub fn to_pixels(&self, g: &Geometry) -> PixelBox {
        let day = self.day_height_px();
        PixelBox {
            top_px: g.top_fraction * day,
            height_px: g.height_fraction * day,
            left_percent: g.left_fraction * 100.0,
            width_percent: g.width_fraction * 100.0,
            gutter_px: self.gutter_px,
        }
    }
}
