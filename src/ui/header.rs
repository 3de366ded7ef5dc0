//! Header and common widget rendering
//!
//! Banner, step progress gauge and the status line.

use crate::app::AppState;
use crate::theme::{Colors, Styles, UiText};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Header renderer containing the banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the banner
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "█▄ █ █ █▀ ▀█",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "█ ▀█ █ ▄█ █▄",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(UiText::APP_TITLE, Styles::title())]),
        ]
    }
}

/// Progress label and percentage for a step.
///
/// Question steps count 1-4; the result step shows a full bar.
pub fn progress_for(step: WizardStep) -> (String, u16) {
    if step.is_terminal() {
        return ("Complete".to_string(), 100);
    }
    let done = u16::from(step.number() - 1);
    let total = u16::from(WizardStep::QUESTION_STEPS);
    (
        format!("Question {} of {}", step.number(), WizardStep::QUESTION_STEPS),
        done * 100 / total,
    )
}

/// Render the step progress bar
pub fn render_progress_bar(f: &mut Frame, area: Rect, step: WizardStep) {
    let (label, percent) = progress_for(step);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Styles::progress())
        .label(label)
        .percent(percent);
    f.render_widget(gauge, area);
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.status_is_error {
        Styles::error()
    } else {
        Styles::text_secondary()
    };
    let status = Paragraph::new(format!(" {}", state.status_message)).style(style);
    f.render_widget(status, area);
}
