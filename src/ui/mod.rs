//! User interface rendering module
//!
//! - `header` - Banner, progress gauge and status line
//! - `screens` - One renderer per wizard screen

mod header;
pub mod screens;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::UiConstants;
use crate::types::{EntitySize, GovernanceMaturity, ServiceSensitivity};
use crate::wizard::{WizardController, WizardStep};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::rc::Rc;

pub use header::{progress_for, HeaderRenderer};

fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                 // Banner
            Constraint::Length(UiConstants::HEADER_HEIGHT - 3),    // Progress
            Constraint::Min(6),                                    // Screen
            Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),    // Status
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT),       // Nav bar
        ])
        .split(area)
}

/// UI renderer for the application
///
/// Main entry point for rendering; delegates to the submodules.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current wizard state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        wizard: &WizardController,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = main_layout(f.area());

        self.header.render_header(f, chunks[0]);
        header::render_progress_bar(f, chunks[1], state.step);
        self.render_screen(f, chunks[2], state, wizard);
        header::render_status(f, chunks[3], state);

        NavBar::new(keybinding_ctx.get_nav_items(state.screen())).render(f, chunks[4]);

        if state.help_visible {
            let area = f.area();
            HelpOverlay::new(state.screen(), keybinding_ctx).render(f, area);
        }
    }

    /// How far the result text can scroll in a terminal of `area`.
    ///
    /// Zero until the wizard holds an assessment.
    pub fn result_scroll_limit(&self, area: Rect, wizard: &WizardController) -> u16 {
        match (wizard.assessment(), wizard.result_profile()) {
            (Some(assessment), Some(profile)) => {
                screens::result_scroll_limit(main_layout(area)[2], assessment, profile)
            }
            _ => 0,
        }
    }

    fn render_screen(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        wizard: &WizardController,
    ) {
        let answers = wizard.answers();
        match state.step {
            WizardStep::OrganizationSize => screens::render_choice_screen::<EntitySize>(
                f,
                area,
                state.step,
                state.cursor,
                answers.entity_size,
            ),
            WizardStep::ServiceSensitivity => screens::render_choice_screen::<ServiceSensitivity>(
                f,
                area,
                state.step,
                state.cursor,
                answers.service_sensitivity,
            ),
            WizardStep::Infrastructure => screens::render_infrastructure_screen(
                f,
                area,
                &state.infrastructure_draft,
                state.cursor,
            ),
            WizardStep::Governance => screens::render_choice_screen::<GovernanceMaturity>(
                f,
                area,
                state.step,
                state.cursor,
                answers.governance_maturity,
            ),
            WizardStep::Result => {
                if let (Some(assessment), Some(profile)) =
                    (wizard.assessment(), wizard.result_profile())
                {
                    screens::render_result_screen(
                        f,
                        area,
                        assessment,
                        profile,
                        state.result_scroll,
                    );
                }
            }
        }
    }
}
