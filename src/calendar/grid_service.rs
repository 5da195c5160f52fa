use chrono::{Datelike as _, Days, Months, NaiveDate, Weekday};

use super::bucket;
use super::event::Event;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_LENGTH: usize = GRID_ROWS * GRID_COLS;

/// A 6x7 grid of days laid over the month of the current date, rows
/// starting on Monday.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridService {
    start: NaiveDate,
    end: NaiveDate,
    current: NaiveDate,
}

impl GridService {
    pub fn new(current: NaiveDate) -> Self {
        let start = Self::start_grid_date(current);
        let end = Self::end_grid_date(start);

        Self {
            start,
            end,
            current,
        }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub const fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn current_idx(&self) -> usize {
        self.date_to_idx(self.current)
    }

    pub fn row(&self, row_idx: usize) -> [NaiveDate; GRID_COLS] {
        self.idx_to_date(row_idx * GRID_COLS)
            .iter_days()
            .take(GRID_COLS)
            .collect::<Vec<_>>()
            .try_into()
            .expect("Row is always correct length")
    }

    /// Set the date of the grid.
    /// Returns the index of the date in the month grid, if the month has changed.
    pub fn set_date(&mut self, date: NaiveDate) -> Option<usize> {
        if self.current.month() == date.month() && self.current.year() == date.year() {
            self.current = date;

            None
        } else {
            self.current = date;
            self.start = Self::start_grid_date(date);
            self.end = Self::end_grid_date(self.start);

            Some(self.current_idx())
        }
    }

    pub fn next_month(&mut self) -> NaiveDate {
        let new_date = self.current + Months::new(1);

        self.set_date(new_date);

        new_date
    }

    pub fn prev_month(&mut self) -> NaiveDate {
        let new_date = self.current - Months::new(1);

        self.set_date(new_date);

        new_date
    }

    /// Buckets the events into the grid. Each cell holds every event
    /// touching that day, multi-day events first, then by start.
    pub fn generate_grid<'a>(&self, events: &'a [Event]) -> [Vec<&'a Event>; GRID_LENGTH] {
        let mut grid = [(); GRID_LENGTH].map(|_| Vec::new());

        for (idx, day) in self.start.iter_days().take(GRID_LENGTH).enumerate() {
            let mut cell = bucket::events_touching(events, day);
            cell.sort_by(|a, b| bucket::compare_events(a, b));

            grid[idx] = cell;
        }

        grid
    }

    fn idx_to_date(&self, idx: usize) -> NaiveDate {
        (self.start + Days::new(idx as u64)).clamp(self.start, self.end)
    }

    fn date_to_idx(&self, date: NaiveDate) -> usize {
        ((date - self.start).num_days().max(0) as usize).clamp(0, GRID_LENGTH - 1)
    }

    fn start_grid_date(date: NaiveDate) -> NaiveDate {
        let mut first = date.with_day(1).unwrap_or(date);

        while first.weekday() != Weekday::Mon {
            first = first.pred_opt().unwrap_or(first);
        }

        first
    }

    fn end_grid_date(start: NaiveDate) -> NaiveDate {
        start + Days::new(GRID_LENGTH as u64 - 1)
    }
}
