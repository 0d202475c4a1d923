//! Derived, view-only values: status badges, priority glyphs and colors,
//! and due-date urgency. Nothing here is stored on a task.

use chrono::NaiveDate;
use ratatui::style::{Color, Modifier, Style};

use crate::task::{Priority, Status};

pub const ORANGE: Color = Color::Rgb(255, 165, 0);
pub const PRIORITY_HIGH: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
pub const PRIORITY_MEDIUM: Color = Color::Rgb(0xFF, 0xD9, 0x3D);
pub const PRIORITY_LOW: Color = Color::Rgb(0x6B, 0xCF, 0x7F);

/// Badge style for a status. Status is a closed enum, so this match is
/// exhaustive; unknown labels are rejected when tasks are decoded.
pub fn status_badge(status: Status) -> Style {
    let (fg, bg) = match status {
        Status::Pending => (Color::Rgb(0xD6, 0x33, 0x84), Color::Rgb(0xFF, 0xE4, 0xE4)),
        Status::InProgress => (Color::Rgb(0xB4, 0x53, 0x09), Color::Rgb(0xFF, 0xF3, 0xCD)),
        Status::Completed => (Color::Rgb(0x0F, 0x51, 0x32), Color::Rgb(0xD4, 0xF6, 0xDD)),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Emoji and accent color used in the status breakdown.
pub fn status_indicator(status: Status) -> (&'static str, Color) {
    match status {
        Status::Completed => ("✅", PRIORITY_LOW),
        Status::InProgress => ("🔄", PRIORITY_MEDIUM),
        Status::Pending => ("⏳", PRIORITY_HIGH),
    }
}

pub fn priority_glyph(priority: &Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
        Priority::Other(_) => "⚪",
    }
}

pub fn priority_color(priority: &Priority) -> Color {
    match priority {
        Priority::High => PRIORITY_HIGH,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::Low => PRIORITY_LOW,
        Priority::Other(_) => Color::Gray,
    }
}

/// How close a task is to its due date, relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Number of days past the due date.
    Overdue(i64),
    DueToday,
    /// Due in one or two days.
    DueSoon(i64),
    DueLater(i64),
}

impl Urgency {
    pub fn classify(due_date: NaiveDate, today: NaiveDate) -> Self {
        let days_left = due_date.signed_duration_since(today).num_days();
        match days_left {
            d if d < 0 => Urgency::Overdue(-d),
            0 => Urgency::DueToday,
            d if d <= 2 => Urgency::DueSoon(d),
            d => Urgency::DueLater(d),
        }
    }

    pub fn text(self) -> String {
        match self {
            Urgency::Overdue(days) => format!("⚠️ Overdue by {} days", days),
            Urgency::DueToday => "🔥 Due Today!".to_string(),
            Urgency::DueSoon(days) => format!("⏰ Due in {} days", days),
            Urgency::DueLater(days) => format!("📅 Due in {} days", days),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Urgency::Overdue(_) => Color::Red,
            Urgency::DueToday | Urgency::DueSoon(_) => ORANGE,
            Urgency::DueLater(_) => Color::Green,
        }
    }
}
