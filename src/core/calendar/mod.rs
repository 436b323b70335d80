//! Weekly calendar layout: clip tasks to days, resolve overlaps, compute geometry.
//!
//! The whole pipeline is pure. Callers re-run [`render_week`] after every
//! change to the task list or to the displayed week.

pub mod geometry;
pub mod layout;
pub mod segments;

pub use geometry::{Geometry, GridMetrics, PixelBox, to_geometry};
pub use layout::layout_columns;
pub use segments::{Segment, build_segments};

use crate::models::task::Task;
use crate::models::week::{DAYS_PER_WEEK, WeekWindow};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment<'a> {
    pub segment: Segment<'a>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout<'a> {
    pub date: NaiveDate,
    pub entries: Vec<PlacedSegment<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout<'a> {
    pub window: WeekWindow,
    pub days: [DayLayout<'a>; DAYS_PER_WEEK],
}

impl WeekLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.entries.is_empty())
    }

    pub fn segment_count(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }
}

/// Lay out `tasks` on the seven days of `window`.
pub fn render_week<'a>(window: &WeekWindow, tasks: &'a [Task], metrics: &GridMetrics) -> WeekLayout<'a> {
    let window = *window;
    let min_height = metrics.min_height_fraction();
    let mut buckets = build_segments(tasks, &window);

    let days: [DayLayout<'a>; DAYS_PER_WEEK] = std::array::from_fn(|i| {
        let day_start = window.day_start(i);
        let entries = layout_columns(std::mem::take(&mut buckets[i]))
            .into_iter()
            .map(|segment| {
                let geometry = to_geometry(&segment, day_start, min_height);
                PlacedSegment { segment, geometry }
            })
            .collect();
        DayLayout {
            date: window.days[i],
            entries,
        }
    });

    WeekLayout { window, days }
}
