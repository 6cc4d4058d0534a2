//! Pure completion statistics over a set of todos. Nothing in here touches
//! the record store; callers feed in whatever slice they are displaying.

use chrono::{Duration, Local, NaiveDate, TimeZone};
use serde::Serialize;

use crate::domain::todo::Todo;

/// Aggregate counters for an arbitrary set of todos. `completion_rate` is
/// kept unrounded; rounding happens only at display time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoStats {
    pub total_todos: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
}

impl TodoStats {
    pub fn compute(todos: &[Todo]) -> Self {
        let total_tasks = todos.iter().map(|todo| todo.tasks.len()).sum();
        let completed_tasks = todos.iter().map(Todo::completed_task_count).sum();
        Self {
            total_todos: todos.len(),
            total_tasks,
            completed_tasks,
            completion_rate: rate(completed_tasks, total_tasks),
        }
    }

    /// Number of fully completed entries in the set.
    pub fn fully_completed(todos: &[Todo]) -> usize {
        todos.iter().filter(|todo| todo.is_fully_completed()).count()
    }

    /// Display form of the rate, rounded to the nearest whole percent.
    pub fn rounded_rate(&self) -> u32 {
        self.completion_rate.round() as u32
    }
}

/// One calendar day inside a weekly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub todos: usize,
    pub completed: usize,
    pub total: usize,
}

impl DayStats {
    pub fn completion_rate(&self) -> f64 {
        rate(self.completed, self.total)
    }
}

/// A 7-day window starting at `week_start`, with per-day buckets and the
/// window-level aggregate over exactly the bucketed todos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub stats: TodoStats,
    pub days: Vec<DayStats>,
}

/// Buckets `todos` into the seven calendar days starting at `week_start`.
/// Membership is calendar-date equality of `created_at` in `tz`, not a
/// timestamp range, so every entry lands in exactly one bucket or none.
pub fn weekly_report<Tz: TimeZone>(todos: &[Todo], week_start: NaiveDate, tz: &Tz) -> WeeklyReport {
    let mut days: Vec<DayStats> = (0..7)
        .map(|offset| DayStats {
            date: week_start + Duration::days(offset),
            todos: 0,
            completed: 0,
            total: 0,
        })
        .collect();

    let mut total_todos = 0;
    let mut total_tasks = 0;
    let mut completed_tasks = 0;

    for todo in todos {
        let date = todo.created_at.with_timezone(tz).date_naive();
        let offset = date.signed_duration_since(week_start).num_days();
        if !(0..7).contains(&offset) {
            continue;
        }

        let completed = todo.completed_task_count();
        let day = &mut days[offset as usize];
        day.todos += 1;
        day.total += todo.tasks.len();
        day.completed += completed;

        total_todos += 1;
        total_tasks += todo.tasks.len();
        completed_tasks += completed;
    }

    WeeklyReport {
        week_start,
        stats: TodoStats {
            total_todos,
            total_tasks,
            completed_tasks,
            completion_rate: rate(completed_tasks, total_tasks),
        },
        days,
    }
}

/// [`weekly_report`] in the viewer's local time zone, the canonical choice
/// for display.
pub fn weekly_report_local(todos: &[Todo], week_start: NaiveDate) -> WeeklyReport {
    weekly_report(todos, week_start, &Local)
}

fn rate(completed: usize, total: usize) -> f64 {
    if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
