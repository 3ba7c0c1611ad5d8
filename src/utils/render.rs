//! Terminal rendering for grouped task sections and the widget view.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::section::Section;
use crate::models::task::Task;
use crate::ui::theme::Palette;

/// Maximum text width for a widget row.
const WIDGET_TEXT_WIDTH: usize = 40;

/// Render date-titled sections, one checkbox row per task.
pub fn render_sections(sections: &[Section], palette: &Palette) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!(
            "{}{}{}\n",
            palette.section_title, section.title, palette.reset
        ));
        for task in &section.items {
            out.push_str(&render_task_row(task, palette));
        }
        out.push('\n');
    }
    out
}

fn render_task_row(task: &Task, palette: &Palette) -> String {
    if task.is_complete {
        format!(
            "  {}[x]{} #{:<4} {}{}{}\n",
            palette.accent, palette.reset, task.id, palette.done, task.task, palette.reset
        )
    } else {
        format!(
            "  [ ] #{:<4} {}{}{}\n",
            task.id, palette.pending, task.task, palette.reset
        )
    }
}

/// Read-only widget rows: at most `limit` tasks, in the order given
/// (the snapshot is stored newest first), plain text only.
pub fn render_widget(tasks: &[Task], limit: usize) -> String {
    let mut out = String::new();
    for task in tasks.iter().take(limit) {
        let check = if task.is_complete { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{} {}\n",
            check,
            truncate_to_width(&task.task, WIDGET_TEXT_WIDTH)
        ));
    }
    out
}

/// Truncate to a display width, appending an ellipsis when text is cut.
/// Width is measured in terminal columns, not chars.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + cw > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += cw;
    }
    out.push('…');
    out
}
