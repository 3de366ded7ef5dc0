//! Wizard screens.
//!
//! One renderer per screen kind:
//! - single-choice questions (steps 1, 2, 4)
//! - the infrastructure checklist (step 3)
//! - the result (step 5)

use crate::scoring::{Assessment, Tier};
use crate::theme::{Colors, Styles, Theme, UiText};
use crate::tiers::TierProfile;
use crate::types::{ChoiceOption, Infrastructure, InfrastructureFlag};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::rc::Rc;

fn render_title(f: &mut Frame, area: Rect, step: WizardStep) {
    let title = Paragraph::new(step.title())
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

// ============================================================================
// Single-choice screen
// ============================================================================

/// List rows for a single-choice question: numbered label plus hint.
pub fn choice_items<T: ChoiceOption>(cursor: usize, chosen: Option<T>) -> Vec<ListItem<'static>> {
    T::options()
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let is_chosen = chosen == Some(option);
            let marker = if is_chosen { "(*)" } else { "( )" };

            let label_style = if i == cursor {
                Styles::selected()
            } else if is_chosen {
                Styles::chosen()
            } else {
                Styles::text()
            };

            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(" {} {}. {}", marker, i + 1, option.label()),
                    label_style,
                )),
                Line::from(Span::styled(format!("       {}", option.hint()), Styles::text_muted())),
            ])
        })
        .collect()
}

/// Render a single-choice question.
pub fn render_choice_screen<T: ChoiceOption>(
    f: &mut Frame,
    area: Rect,
    step: WizardStep,
    cursor: usize,
    chosen: Option<T>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    render_title(f, chunks[0], step);

    let list = List::new(choice_items(cursor, chosen)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Choose one ")
            .title_style(Style::default().fg(Colors::SECONDARY)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(cursor));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

// ============================================================================
// Infrastructure checklist screen
// ============================================================================

/// Checkbox rows for the infrastructure step.
pub fn checklist_lines(draft: &Infrastructure, cursor: usize) -> Vec<Line<'static>> {
    InfrastructureFlag::all()
        .into_iter()
        .enumerate()
        .map(|(i, flag)| {
            let style = if i == cursor {
                Styles::selected()
            } else {
                Styles::text()
            };
            Line::from(Span::styled(
                format!(" {} {}", Theme::checkbox(draft.get(flag)), flag.label()),
                style,
            ))
        })
        .collect()
}

/// Render the infrastructure checklist.
pub fn render_infrastructure_screen(
    f: &mut Frame,
    area: Rect,
    draft: &Infrastructure,
    cursor: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    render_title(f, chunks[0], WizardStep::Infrastructure);

    let checklist = Paragraph::new(checklist_lines(draft, cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Select all that apply ")
            .title_style(Style::default().fg(Colors::SECONDARY)),
    );
    f.render_widget(checklist, chunks[1]);

    let hint = Paragraph::new("Leaving every box unticked is a valid answer.")
        .style(Styles::text_muted())
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[2]);
}

// ============================================================================
// Result screen
// ============================================================================

/// Full result text as styled lines
pub fn result_lines(assessment: &Assessment, profile: &TierProfile) -> Vec<Line<'static>> {
    let section = |title: &str| Line::from(Span::styled(title.to_string(), Styles::section()));
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", profile.label),
            Theme::tier_style(assessment.tier),
        )),
        Line::from(""),
        Line::from(Span::styled(
            profile.title.to_string(),
            Style::default()
                .fg(Theme::tier_color(assessment.tier))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Score: {}", assessment.breakdown),
            Styles::text_secondary(),
        )),
        Line::from(""),
        section("What this means"),
        Line::from(profile.implications.to_string()),
        Line::from(""),
        section("Key obligations"),
    ];
    lines.extend(
        profile
            .obligations
            .iter()
            .enumerate()
            .map(|(i, o)| Line::from(format!("  {}. {}", i + 1, o))),
    );
    lines.extend([
        Line::from(""),
        section("Timeline"),
        Line::from(profile.timeline.to_string()),
        Line::from(""),
        section("Accountability"),
        Line::from(profile.accountability.to_string()),
        Line::from(""),
        section("Positioning"),
        Line::from(profile.positioning.to_string()),
        Line::from(""),
        Line::from(Span::styled(UiText::DISCLAIMER, Styles::text_muted())),
    ]);
    lines
}

fn result_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area)
}

fn result_block(tier: Tier) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::tier_color(tier)))
}

/// Rows the lines occupy once word-wrapped to `width` columns.
///
/// Greedy wrapping at spaces; a word longer than the width is split across
/// rows.
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            let mut rows = 1;
            let mut current = 0;
            for word in text.split(' ') {
                let w = Span::raw(word).width();
                if current > 0 && current + 1 + w <= width {
                    current += 1 + w;
                    continue;
                }
                if current > 0 {
                    rows += 1;
                }
                rows += w.saturating_sub(1) / width;
                current = if w == 0 { 0 } else { (w - 1) % width + 1 };
            }
            rows
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Largest useful scroll offset for the result text in `area`.
pub fn result_scroll_limit(area: Rect, assessment: &Assessment, profile: &TierProfile) -> u16 {
    let inner = result_block(assessment.tier).inner(result_layout(area)[1]);
    wrapped_height(&result_lines(assessment, profile), inner.width).saturating_sub(inner.height)
}

/// Render the result screen.
pub fn render_result_screen(
    f: &mut Frame,
    area: Rect,
    assessment: &Assessment,
    profile: &TierProfile,
    scroll: u16,
) {
    let chunks = result_layout(area);

    render_title(f, chunks[0], WizardStep::Result);

    let body = Paragraph::new(result_lines(assessment, profile))
        .block(result_block(assessment.tier))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(body, chunks[1]);
}
