//! Clipping of tasks to the days of a week window.

use crate::models::task::Task;
use crate::models::week::{DAYS_PER_WEEK, WeekWindow};
use chrono::NaiveDateTime;
use log::debug;

/// The part of one task that falls inside one calendar day.
///
/// `col_index` / `col_count` are placeholders (0 / 1) until the segment goes
/// through [`super::layout::layout_columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub task: &'a Task,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub day_index: usize,
    pub col_index: usize,
    pub col_count: usize,
}

impl<'a> Segment<'a> {
    pub fn new(task: &'a Task, start: NaiveDateTime, end: NaiveDateTime, day_index: usize) -> Self {
        Self {
            task,
            start,
            end,
            day_index,
            col_index: 0,
            col_count: 1,
        }
    }

    /// Half-open overlap test: touching ranges do not overlap.
    pub fn overlaps(&self, other: &Segment<'_>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One bucket of segments per day of `week`, in task input order.
pub fn build_segments<'a>(tasks: &'a [Task], week: &WeekWindow) -> [Vec<Segment<'a>>; DAYS_PER_WEEK] {
    let mut buckets: [Vec<Segment<'a>>; DAYS_PER_WEEK] = Default::default();
    let week_start = week.start();
    let week_end = week.end_exclusive();

    for task in tasks {
        if task.end < task.start {
            debug!("skipping task {}: end precedes start", task.id);
            continue;
        }

        if task.end < week_start || task.start > week_end {
            continue;
        }

        for (day_index, bucket) in buckets.iter_mut().enumerate() {
            let day_start = week.day_start(day_index);
            let day_end = week.day_start(day_index + 1);

            let seg_start = task.start.max(day_start);
            let seg_end = task.end.min(day_end);

            if seg_end <= seg_start {
                continue;
            }

            bucket.push(Segment::new(task, seg_start, seg_end, day_index));
        }
    }

    buckets
}
