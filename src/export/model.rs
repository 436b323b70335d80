use crate::core::calendar::{GridMetrics, WeekLayout};
use crate::utils::date::{to_datetime_local, to_ymd, weekday_short};
use serde::Serialize;

/// Flat row describing one placed segment.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentExport {
    pub date: String,
    pub weekday: String,
    pub day_index: usize,
    pub task_id: String,
    pub title: String,
    pub status: String,
    pub start: String,
    pub end: String,
    pub col_index: usize,
    pub col_count: usize,
    pub top_fraction: f64,
    pub height_fraction: f64,
    pub left_fraction: f64,
    pub width_fraction: f64,
    pub top_px: f64,
    pub height_px: f64,
}

/// Document written by the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct WeekExport {
    pub week_start: String,
    pub week_end: String,
    pub segments: Vec<SegmentExport>,
}

pub(crate) fn flatten(layout: &WeekLayout<'_>, metrics: &GridMetrics) -> Vec<SegmentExport> {
    layout
        .days
        .iter()
        .flat_map(|day| {
            day.entries.iter().map(move |placed| {
                let seg = &placed.segment;
                let g = &placed.geometry;
                let px = metrics.to_pixels(g);
                SegmentExport {
                    date: to_ymd(day.date),
                    weekday: weekday_short(day.date),
                    day_index: seg.day_index,
                    task_id: seg.task.id.clone(),
                    title: seg.task.title.clone(),
                    status: seg.task.status.code().to_string(),
                    start: to_datetime_local(seg.start),
                    end: to_datetime_local(seg.end),
                    col_index: seg.col_index,
                    col_count: seg.col_count,
                    top_fraction: g.top_fraction,
                    height_fraction: g.height_fraction,
                    left_fraction: g.left_fraction,
                    width_fraction: g.width_fraction,
                    top_px: px.top_px,
                    height_px: px.height_px,
                }
            })
        })
        .collect()
}

pub(crate) fn week_document(layout: &WeekLayout<'_>, metrics: &GridMetrics) -> WeekExport {
    WeekExport {
        week_start: to_ymd(layout.window.first_day()),
        week_end: to_ymd(layout.window.last_day()),
        segments: flatten(layout, metrics),
    }
}
