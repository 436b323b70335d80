//! Side-by-side placement of overlapping segments within one day.
//!
//! Segments are sorted by `(start, end)`, split into maximal overlap groups,
//! and each group is coloured greedily: a segment takes the first column whose
//! previous occupant has already ended. Greedy-by-start is optimal for
//! interval graphs, so a group uses exactly as many columns as its peak
//! concurrency.

use super::segments::Segment;
use chrono::NaiveDateTime;
use std::ops::Range;

/// Sort `segments` and stamp `col_index` / `col_count` on each of them.
///
/// The sort is stable, so segments with equal `(start, end)` keep their
/// input order and the result is deterministic.
pub fn layout_columns(mut segments: Vec<Segment<'_>>) -> Vec<Segment<'_>> {
    segments.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));

    for group in overlap_groups(&segments) {
        assign_columns(&mut segments[group]);
    }

    segments
}

/// Index ranges of the maximal overlap groups of an already sorted slice.
///
/// A segment starting at or after the furthest end seen so far opens a new
/// group, so touching segments (`end == start`) never share a group.
fn overlap_groups(sorted: &[Segment<'_>]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut group_start = 0;
    let mut group_end: Option<NaiveDateTime> = None;

    for (i, seg) in sorted.iter().enumerate() {
        match group_end {
            Some(end) if seg.start < end => {
                group_end = Some(end.max(seg.end));
            }
            Some(_) => {
                groups.push(group_start..i);
                group_start = i;
                group_end = Some(seg.end);
            }
            None => group_end = Some(seg.end),
        }
    }

    if group_end.is_some() {
        groups.push(group_start..sorted.len());
    }

    groups
}

fn assign_columns(group: &mut [Segment<'_>]) {
    let mut col_ends: Vec<NaiveDateTime> = Vec::new();

    for seg in group.iter_mut() {
        match col_ends.iter().position(|&end| end <= seg.start) {
            Some(col) => {
                col_ends[col] = seg.end;
                seg.col_index = col;
            }
            None => {
                seg.col_index = col_ends.len();
                col_ends.push(seg.end);
            }
        }
    }

    let col_count = col_ends.len().max(1);
    for seg in group.iter_mut() {
        seg.col_count = col_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::TaskStatus;
    use crate::models::task::Task;
    use crate::utils::date::parse_datetime;
    use proptest::prelude::*;

    fn at(hm: &str) -> NaiveDateTime {
        parse_datetime(&format!("2024-01-01T{hm}")).unwrap()
    }

    fn task(id: &str) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            start: at("00:00"),
            end: at("23:59"),
            status: TaskStatus::Backlog,
        }
    }

    fn seg<'a>(t: &'a Task, start: &str, end: &str) -> Segment<'a> {
        Segment::new(t, at(start), at(end), 0)
    }

    fn placement(out: &[Segment<'_>], id: &str) -> (usize, usize) {
        let s = out.iter().find(|s| s.task.id == id).unwrap();
        (s.col_index, s.col_count)
    }

    #[test]
    fn two_overlapping_tasks_share_two_columns() {
        let (t1, t2) = (task("t1"), task("t2"));
        let out = layout_columns(vec![seg(&t2, "09:30", "10:30"), seg(&t1, "09:00", "10:00")]);
        assert_eq!(placement(&out, "t1"), (0, 2));
        assert_eq!(placement(&out, "t2"), (1, 2));
        assert_eq!(out[0].task.id, "t1");
    }

    #[test]
    fn adjacent_tasks_do_not_overlap() {
        let (t1, t2) = (task("t1"), task("t2"));
        let out = layout_columns(vec![seg(&t1, "09:00", "10:00"), seg(&t2, "10:00", "11:00")]);
        assert_eq!(placement(&out, "t1"), (0, 1));
        assert_eq!(placement(&out, "t2"), (0, 1));
    }

    #[test]
    fn three_pairwise_overlapping_tasks_need_three_columns() {
        let (a, b, c) = (task("a"), task("b"), task("c"));
        let out = layout_columns(vec![
            seg(&a, "09:00", "09:30"),
            seg(&b, "09:00", "09:30"),
            seg(&c, "09:00", "09:30"),
        ]);
        assert_eq!(placement(&out, "a"), (0, 3));
        assert_eq!(placement(&out, "b"), (1, 3));
        assert_eq!(placement(&out, "c"), (2, 3));
    }

    #[test]
    fn chained_overlaps_form_one_group_and_reuse_columns() {
        // a overlaps b, b overlaps c, a and c are disjoint
        let (a, b, c) = (task("a"), task("b"), task("c"));
        let out = layout_columns(vec![
            seg(&a, "09:00", "10:00"),
            seg(&b, "09:30", "11:00"),
            seg(&c, "10:30", "12:00"),
        ]);
        assert_eq!(placement(&out, "a"), (0, 2));
        assert_eq!(placement(&out, "b"), (1, 2));
        assert_eq!(placement(&out, "c"), (0, 2));
    }

    #[test]
    fn separate_groups_keep_their_own_column_count() {
        let (a, b, c) = (task("a"), task("b"), task("c"));
        let out = layout_columns(vec![
            seg(&a, "09:00", "10:00"),
            seg(&b, "09:15", "09:45"),
            seg(&c, "13:00", "14:00"),
        ]);
        assert_eq!(placement(&out, "a").1, 2);
        assert_eq!(placement(&out, "b").1, 2);
        assert_eq!(placement(&out, "c"), (0, 1));
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let (a, b) = (task("a"), task("b"));
        let out = layout_columns(vec![seg(&b, "09:00", "10:00"), seg(&a, "09:00", "10:00")]);
        assert_eq!(out[0].task.id, "b");
        assert_eq!(placement(&out, "b"), (0, 2));
        assert_eq!(placement(&out, "a"), (1, 2));
    }

    #[test]
    fn shorter_segment_sorts_first_on_equal_start() {
        let (a, b) = (task("a"), task("b"));
        let out = layout_columns(vec![seg(&a, "09:00", "11:00"), seg(&b, "09:00", "10:00")]);
        assert_eq!(out[0].task.id, "b");
        assert_eq!(placement(&out, "b"), (0, 2));
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(layout_columns(Vec::new()).is_empty());
    }

    fn peak_concurrency(group: &[&Segment<'_>]) -> usize {
        let mut events: Vec<(NaiveDateTime, i32)> = Vec::new();
        for s in group {
            events.push((s.start, 1));
            events.push((s.end, -1));
        }
        // ends before starts at the same instant
        events.sort();
        let (mut cur, mut peak) = (0i32, 0i32);
        for (_, delta) in events {
            cur += delta;
            peak = peak.max(cur);
        }
        peak as usize
    }

    proptest! {
        #[test]
        fn layout_properties_hold(ranges in prop::collection::vec((0u32..1380, 1u32..240), 0..40)) {
            let tasks: Vec<Task> = (0..ranges.len()).map(|i| task(&format!("t{i}"))).collect();
            let day = at("00:00");
            let segments: Vec<Segment<'_>> = ranges
                .iter()
                .zip(&tasks)
                .map(|(&(start, len), t)| {
                    let s = day + chrono::Duration::minutes(start as i64);
                    let e = (s + chrono::Duration::minutes(len as i64)).min(day + chrono::Duration::days(1));
                    Segment::new(t, s, e, 0)
                })
                .collect();

            let out = layout_columns(segments.clone());
            prop_assert_eq!(out.len(), segments.len());

            for s in &out {
                prop_assert!(s.col_index < s.col_count);
            }
            for (i, a) in out.iter().enumerate() {
                for b in &out[i + 1..] {
                    if a.overlaps(b) {
                        prop_assert_ne!(a.col_index, b.col_index);
                        prop_assert_eq!(a.col_count, b.col_count);
                    }
                }
            }

            for range in overlap_groups(&out) {
                let group: Vec<&Segment<'_>> = out[range].iter().collect();
                let count = group[0].col_count;
                prop_assert!(group.iter().all(|s| s.col_count == count));
                prop_assert_eq!(count, peak_concurrency(&group));
            }

            let mut reversed = segments.clone();
            reversed.reverse();
            let again = layout_columns(out.clone());
            prop_assert_eq!(&again, &out);
            let from_reversed = layout_columns(reversed);
            let cols = |v: &[Segment<'_>]| v.iter().map(|s| (s.start, s.end, s.col_count)).collect::<Vec<_>>();
            prop_assert_eq!(cols(&from_reversed), cols(&out));
        }
    }
}
