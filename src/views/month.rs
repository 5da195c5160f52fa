use chrono::{Datelike as _, NaiveDate};

use crate::calendar::{Event, GridService, GRID_COLS, GRID_ROWS};

const DAY_NAMES: [&str; GRID_COLS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const CELL_WIDTH: usize = 9;

/// Renders the month grid around `date` with per-day event counts,
/// followed by the bucket of the selected day.
pub fn render(events: &[Event], date: NaiveDate) -> String {
    let service = GridService::new(date);
    let grid = service.generate_grid(events);

    let mut out = String::new();

    out.push_str(&format!(
        "{:^width$}\n",
        date.format("%B %Y").to_string(),
        width = GRID_COLS * CELL_WIDTH
    ));

    for name in DAY_NAMES {
        out.push_str(&format!("{name:>width$}", width = CELL_WIDTH));
    }
    out.push('\n');

    for row_idx in 0..GRID_ROWS {
        for (col_idx, day) in service.row(row_idx).into_iter().enumerate() {
            let count = grid[row_idx * GRID_COLS + col_idx].len();

            let mut cell = format!("{:>2}", day.day());
            if count > 0 {
                cell.push_str(&format!(" ({count})"));
            }
            if day == service.current() {
                cell.push('<');
            }

            out.push_str(&format!("{cell:>width$}", width = CELL_WIDTH));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("{}\n", service.current().format("%A, %e %B %Y")));

    let bucket = &grid[service.current_idx()];
    if bucket.is_empty() {
        out.push_str("  (no events)\n");
    }

    for event in bucket {
        out.push_str(&format!("  {}\n", summary_line(event)));
    }

    out
}

fn summary_line(event: &Event) -> String {
    if event.all_day {
        return format!("all day  {}", event.title);
    }

    match event.resolved_start() {
        Some(start) => format!("{}    {}", start.format("%H:%M"), event.title),
        None => format!("--:--    {}", event.title),
    }
}
