//! The grouping engine: turns a flat task collection into date-titled,
//! newest-day-first sections for display.

use chrono::NaiveDate;

use crate::models::section::Section;
use crate::models::task::Task;

/// Filter tasks by an optional calendar date and partition the remainder
/// into day-titled sections.
///
/// Tasks keep the relative order they had in the input. Two tasks share a
/// section iff they fall on the same local calendar day; time-of-day and
/// time zone offsets play no part beyond deriving that day. Sections are
/// sorted descending by the `created_at` of their first task, so a
/// newest-first input yields newest-day-first sections.
///
/// Pure and referentially transparent; safe to call on every render.
pub fn group_tasks_by_date(tasks: &[Task], filter_date: Option<NaiveDate>) -> Vec<Section> {
    let mut buckets: Vec<(NaiveDate, Section)> = Vec::new();

    for task in tasks {
        let day = task.local_day();
        if let Some(wanted) = filter_date {
            if day != wanted {
                continue;
            }
        }

        match buckets.iter_mut().find(|(d, _)| *d == day) {
            Some((_, section)) => section.items.push(task.clone()),
            None => buckets.push((
                day,
                Section {
                    title: task.day_title(),
                    items: vec![task.clone()],
                },
            )),
        }
    }

    // Each bucket is represented by its first task in current order.
    buckets.sort_by(|(_, a), (_, b)| b.items[0].created_at.cmp(&a.items[0].created_at));

    buckets.into_iter().map(|(_, section)| section).collect()
}
