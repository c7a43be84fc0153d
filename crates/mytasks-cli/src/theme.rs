/*
[INPUT]:  Task priority and status values
[OUTPUT]: Badge colours (hex and terminal) and styled badge text
[POS]:    Presentation layer - colour palette
[UPDATE]: When the palette or the set of statuses/priorities changes
*/

use console::{Color, style};
use mytasks_adapter::{Priority, TaskStatus};

/// A palette entry: the app's hex colour and its nearest 256-colour code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub hex: &'static str,
    pub term: u8,
}

impl Swatch {
    const fn new(hex: &'static str, term: u8) -> Self {
        Self { hex, term }
    }

    pub fn color(&self) -> Color {
        Color::Color256(self.term)
    }
}

pub const FALLBACK: Swatch = Swatch::new("#8E8E93", 245);
pub const ACCENT: Swatch = Swatch::new("#A29BFE", 147);

pub fn priority_swatch(priority: Priority) -> Swatch {
    match priority {
        Priority::Urgent => Swatch::new("#FF6B6B", 203),
        Priority::High => Swatch::new("#FF9F43", 215),
        Priority::Medium => Swatch::new("#4ECDC4", 80),
        Priority::Low => Swatch::new("#95E1D3", 115),
    }
}

pub fn status_swatch(status: TaskStatus) -> Swatch {
    match status {
        TaskStatus::Completed => Swatch::new("#26DE81", 42),
        TaskStatus::InProgress => Swatch::new("#FD79A8", 211),
        TaskStatus::Todo => Swatch::new("#A29BFE", 147),
        TaskStatus::Cancelled => Swatch::new("#636E72", 243),
    }
}

/// `[label]` in the swatch colour
pub fn badge(label: &str, swatch: Swatch) -> String {
    style(format!("[{}]", label)).fg(swatch.color()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_palette() {
        assert_eq!(priority_swatch(Priority::Urgent).hex, "#FF6B6B");
        assert_eq!(priority_swatch(Priority::High).hex, "#FF9F43");
        assert_eq!(priority_swatch(Priority::Medium).hex, "#4ECDC4");
        assert_eq!(priority_swatch(Priority::Low).hex, "#95E1D3");
    }

    #[test]
    fn test_status_palette() {
        assert_eq!(status_swatch(TaskStatus::Completed).hex, "#26DE81");
        assert_eq!(status_swatch(TaskStatus::InProgress).hex, "#FD79A8");
        assert_eq!(status_swatch(TaskStatus::Todo).hex, "#A29BFE");
        assert_eq!(status_swatch(TaskStatus::Cancelled).hex, "#636E72");
    }

    #[test]
    fn test_badge_text() {
        console::set_colors_enabled(false);
        assert_eq!(badge("todo", ACCENT), "[todo]");
    }
}
