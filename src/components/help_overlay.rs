//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::ScreenKind;
use crate::theme::{Colors, UiConstants, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given screen
    pub fn new(screen: ScreenKind, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(screen);
        Self {
            content: Self::build_content(&sections, screen),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], screen: ScreenKind) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            format!("  {} Help  ", UiText::APP_TITLE),
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        let screen_name = match screen {
            ScreenKind::Choice => "Question",
            ScreenKind::Checklist => "Infrastructure checklist",
            ScreenKind::Result => "Result",
        };
        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(screen_name, Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Number of content lines (without borders)
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(
            UiConstants::DIALOG_WIDTH_PCT,
            UiConstants::DIALOG_HEIGHT_PCT,
            UiConstants::DIALOG_MIN_WIDTH,
            parent,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_bottom(
                Line::from(format!(" {} ", UiText::PRESS_ESC)).alignment(Alignment::Center),
            )
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
            .style(Style::default().bg(Colors::BG_PRIMARY));

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

/// Rectangle of the given percentage size centered in `parent`
pub fn centered_rect(width_pct: u16, height_pct: u16, min_width: u16, parent: Rect) -> Rect {
    let scale = |len: u16, pct: u16| (u32::from(len) * u32::from(pct) / 100) as u16;
    let width = scale(parent.width, width_pct).max(min_width).min(parent.width);
    let height = scale(parent.height, height_pct).min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}
