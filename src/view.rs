// Terminal rendering of the task list and footer

use crate::filter::FilterState;
use crate::store::TaskStore;
use crate::task::Task;
use colored::*;

/// Format a timer as `mm:ss`, growing to `h:mm:ss` past an hour
pub fn format_timer(seconds: u64) -> String {
    let (hours, minutes, secs) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// One task row
pub fn render_task(task: &Task) -> String {
    let check = if task.is_done { "[x]".green() } else { "[ ]".normal() };
    let description = if task.is_done {
        task.description.strikethrough().dimmed()
    } else {
        task.description.normal()
    };
    let editing = if task.is_editing { " (editing)".yellow().to_string() } else { String::new() };

    format!(
        "{} {:>3}  {}  {}{}",
        check,
        task.id.to_string().cyan(),
        description,
        format_timer(task.seconds).dimmed(),
        editing
    )
}

/// Footer text: remaining count and the filter bar
pub fn render_footer(store: &TaskStore) -> String {
    let active = store.count_active();
    let noun = if active == 1 { "item" } else { "items" };

    let filters: Vec<String> = FilterState::ALL
        .iter()
        .map(|filter| {
            if *filter == store.filter() {
                filter.to_string().bold().underline().to_string()
            } else {
                filter.to_string()
            }
        })
        .collect();

    format!("{} {} left   {}", active, noun, filters.join(" | "))
}

/// Visible rows followed by the footer
pub fn render(store: &TaskStore) -> String {
    let mut lines: Vec<String> = store.visible().map(render_task).collect();
    if lines.is_empty() {
        lines.push("(no tasks)".dimmed().to_string());
    }
    lines.push(render_footer(store));
    lines.join("\n")
}
