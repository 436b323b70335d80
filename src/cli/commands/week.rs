use super::{open_store, resolve_week};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{DayLayout, GridMetrics, WeekLayout, render_week};
use crate::errors::AppResult;
use crate::utils::date::{format_date, format_datetime, today, weekday_short};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, minutes_between};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week {
        date,
        offset,
        details,
    } = cmd
    {
        let window = resolve_week(date.as_ref(), *offset)?;
        let tasks = open_store(cfg).load()?;
        let metrics = cfg.grid_metrics();
        let layout = render_week(&window, &tasks, &metrics);

        print!("{}", render_text(&layout, &metrics, *details));
    }
    Ok(())
}

/// Plain-text week view: a label line, then one table per non-empty day.
pub fn render_text(layout: &WeekLayout<'_>, metrics: &GridMetrics, details: bool) -> String {
    let mut out = format!(
        "{} - {}\n",
        format_date(layout.window.first_day()),
        format_date(layout.window.last_day())
    );

    if layout.is_empty() {
        out.push_str("No events in this week.\n");
        return out;
    }

    let now = today();
    for day in &layout.days {
        let marker = if day.date == now { " (today)" } else { "" };
        out.push_str(&format!(
            "\n{} {}{}\n",
            weekday_short(day.date),
            format_date(day.date),
            marker
        ));
        if day.entries.is_empty() {
            out.push_str("  -\n");
            continue;
        }
        out.push_str(&day_table(day, metrics, details));
    }
    out
}

fn day_table(day: &DayLayout<'_>, metrics: &GridMetrics, details: bool) -> String {
    let mut columns = vec![
        Column::new("Time", 11),
        Column::new("Dur", 5),
        Column::new("Lane", 4),
        Column::new("Status", 11),
        Column::new("Title", 40),
    ];
    if details {
        columns.push(Column::new("Top/Height px", 13));
        columns.push(Column::new("Task range", 46));
    }

    let mut table = Table::new(columns);
    for placed in &day.entries {
        let seg = &placed.segment;
        let mut row = vec![
            format!("{}-{}", seg.start.format("%H:%M"), end_label(seg.end, day)),
            format_minutes(minutes_between(seg.start, seg.end)),
            format!("{}/{}", seg.col_index + 1, seg.col_count),
            seg.task.status.label().to_string(),
            seg.task.title.clone(),
        ];
        if details {
            let px = metrics.to_pixels(&placed.geometry);
            row.push(format!("{:.0}/{:.0}", px.top_px, px.height_px));
            row.push(format!(
                "{} - {}",
                format_datetime(seg.task.start),
                format_datetime(seg.task.end)
            ));
        }
        table.add_row(row);

        if details && !seg.task.description.is_empty() {
            table.add_row(vec![
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                seg.task.description.clone(),
            ]);
        }
    }

    let rendered = table.render();
    rendered
        .lines()
        .map(|l| format!("  {}\n", l.trim_end()))
        .collect()
}

/// A segment clipped at midnight ends at `24:00` of its own day.
fn end_label(end: chrono::NaiveDateTime, day: &DayLayout<'_>) -> String {
    if end.date() != day.date {
        "24:00".to_string()
    } else {
        end.format("%H:%M").to_string()
    }
}
