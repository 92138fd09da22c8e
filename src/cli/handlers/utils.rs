use crate::model::{Priority, TodoItem};
use colored::{Color, ColoredString, Colorize};
use std::io::{self, Write};

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Blue,
        Priority::Low => Color::BrightBlack,
    }
}

fn paint(text: &str, priority: Priority) -> ColoredString {
    let painted = text.color(priority_color(priority));
    if priority == Priority::High {
        painted.bold()
    } else {
        painted
    }
}

/// Priority badge: High red, Medium blue, Low gray.
pub fn format_priority(priority: Priority) -> ColoredString {
    paint(priority.as_str(), priority)
}

pub fn print_todo_list(out: &mut dyn Write, items: &[TodoItem], numbered: bool) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "No todos. Add one with `add <text>`.")?;
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        let badge = paint(&format!("[{:<6}]", item.priority().as_str()), item.priority());
        if numbered {
            writeln!(out, "{:>3}. {} {}", i + 1, badge, item.text())?;
        } else {
            writeln!(out, "  - {} {}", badge, item.text())?;
        }
    }
    writeln!(out, "{}", "Use `done <n>` to complete a task".dimmed())?;
    Ok(())
}
