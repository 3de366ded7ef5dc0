//! Application state definitions
//!
//! UI-only state: cursor positions, the infrastructure checklist draft,
//! scroll offset and status line. The answers themselves live in the
//! [`WizardController`](crate::wizard::WizardController).

use crate::answers::Answers;
use crate::types::{
    ChoiceOption, EntitySize, GovernanceMaturity, Infrastructure, InfrastructureFlag,
    ServiceSensitivity,
};
use crate::wizard::WizardStep;

/// Kind of screen shown for a step; keybindings are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Single-choice list (steps 1, 2, 4)
    Choice,
    /// Checkbox list (step 3)
    Checklist,
    /// Result text (step 5)
    Result,
}

impl From<WizardStep> for ScreenKind {
    fn from(step: WizardStep) -> Self {
        match step {
            WizardStep::OrganizationSize
            | WizardStep::ServiceSensitivity
            | WizardStep::Governance => Self::Choice,
            WizardStep::Infrastructure => Self::Checklist,
            WizardStep::Result => Self::Result,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Step currently displayed (mirrors the controller)
    pub step: WizardStep,
    /// Cursor position in the current option or checkbox list
    pub cursor: usize,
    /// Checklist values being edited on step 3, committed on Enter
    pub infrastructure_draft: Infrastructure,
    /// Vertical scroll offset of the result text
    pub result_scroll: u16,
    /// Largest offset that still shows text, from the last layout
    pub result_scroll_limit: u16,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the last status message reports an error
    pub status_is_error: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            step: WizardStep::OrganizationSize,
            cursor: 0,
            infrastructure_draft: Infrastructure::default(),
            result_scroll: 0,
            result_scroll_limit: 0,
            status_message: "Answer four questions to estimate your NIS2 exposure".to_string(),
            status_is_error: false,
            help_visible: false,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Screen kind for the displayed step
    pub fn screen(&self) -> ScreenKind {
        ScreenKind::from(self.step)
    }

    /// Number of selectable rows on the current screen
    pub fn item_count(&self) -> usize {
        match self.step {
            WizardStep::OrganizationSize => EntitySize::options().len(),
            WizardStep::ServiceSensitivity => ServiceSensitivity::options().len(),
            WizardStep::Infrastructure => InfrastructureFlag::all().len(),
            WizardStep::Governance => GovernanceMaturity::options().len(),
            WizardStep::Result => 0,
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 && self.cursor < count - 1 {
            self.cursor += 1;
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.result_scroll = self
            .result_scroll
            .saturating_add(lines)
            .min(self.result_scroll_limit);
    }

    /// Record how far the result text can scroll, pulling the offset back
    /// when the viewport grew.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.result_scroll_limit = limit;
        self.result_scroll = self.result_scroll.min(limit);
    }

    /// Flip the checkbox under the cursor (step 3 only)
    pub fn toggle_current_flag(&mut self) {
        if self.step != WizardStep::Infrastructure {
            return;
        }
        if let Some(flag) = InfrastructureFlag::all().get(self.cursor) {
            self.infrastructure_draft.toggle(*flag);
        }
    }

    /// Align cursor, draft and scroll with a newly displayed step.
    ///
    /// The cursor lands on the previously chosen answer when going back, so
    /// the user sees what they picked.
    pub fn enter_step(&mut self, step: WizardStep, answers: &Answers) {
        self.step = step;
        self.result_scroll = 0;
        self.cursor = match step {
            WizardStep::OrganizationSize => position_of(answers.entity_size),
            WizardStep::ServiceSensitivity => position_of(answers.service_sensitivity),
            WizardStep::Governance => position_of(answers.governance_maturity),
            WizardStep::Infrastructure | WizardStep::Result => 0,
        };
        if step == WizardStep::Infrastructure {
            self.infrastructure_draft = answers.infrastructure;
        }
    }

    /// Show an informational status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = false;
    }

    /// Show an error status message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = true;
    }
}

fn position_of<T: ChoiceOption>(value: Option<T>) -> usize {
    value
        .and_then(|v| T::options().iter().position(|o| *o == v))
        .unwrap_or(0)
}
