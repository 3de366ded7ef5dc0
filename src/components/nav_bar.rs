//! Bottom navigation bar listing the active keybindings.

use super::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Single-line keybinding hint bar
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Spans for the bar, `[Key] Label` pairs separated by spaces
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.items.len() * 2);
        for item in &self.items {
            spans.push(Span::styled(format!(" [{}] ", item.key_display), Styles::nav_key()));
            spans.push(Span::styled(format!("{} ", item.action_label), Styles::nav_hint()));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_every_item() {
        let bar = NavBar::new(vec![
            NavBarItem {
                key_display: "Enter".to_string(),
                action_label: "Answer".to_string(),
            },
            NavBarItem {
                key_display: "Q".to_string(),
                action_label: "Quit".to_string(),
            },
        ]);
        let text: String = bar.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[Enter] Answer"));
        assert!(text.contains("[Q] Quit"));
    }
}
