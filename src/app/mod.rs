//! Application module
//!
//! Contains the TUI application: state, the event loop and the mapping from
//! key actions to wizard operations.
//!
//! # Module Structure
//! - `state` - UI state types (AppState, ScreenKind)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, ScreenKind};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file::AnswersFile;
use crate::error::{Result, WizardError};
use crate::scoring::{ScoreBreakdown, Tier};
use crate::theme::UiConstants;
use crate::tiers::TierProfile;
use crate::types::{ChoiceOption, EntitySize, GovernanceMaturity, ServiceSensitivity};
use crate::ui::UiRenderer;
use crate::wizard::{
    StepAnswer, TracingObserver, WizardController, WizardObserver, WizardStep,
};
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Notifications sent from the wizard controller to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMessage {
    /// The controller moved to a new step
    StepChanged(WizardStep),
    /// A result was computed
    Result { tier: Tier, score: i32 },
}

/// Observer that forwards controller notifications over a channel
pub struct ChannelObserver {
    tx: Sender<WizardMessage>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<WizardMessage>) -> Self {
        Self { tx }
    }
}

impl WizardObserver for ChannelObserver {
    fn on_step_changed(&mut self, step: WizardStep) {
        // The receiver lives as long as the App; a send error means shutdown
        let _ = self.tx.send(WizardMessage::StepChanged(step));
    }

    fn on_result(
        &mut self,
        tier: Tier,
        _profile: &'static TierProfile,
        breakdown: &ScoreBreakdown,
    ) {
        let _ = self.tx.send(WizardMessage::Result {
            tier,
            score: breakdown.total(),
        });
    }
}

/// Main application struct
pub struct App {
    wizard: WizardController,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints and key resolution
    keybinding_context: KeybindingContext,
    /// Where to write the answers file when a result is reached
    save_path: Option<PathBuf>,
    /// Channel receiver for wizard notifications (polled in main loop)
    wizard_rx: Receiver<WizardMessage>,
    /// Terminal area the last frame was laid out in
    viewport: Rect,
}

impl App {
    /// Create a new application instance
    pub fn new(save_path: Option<PathBuf>) -> Self {
        info!("Creating new App instance");
        let (tx, wizard_rx) = mpsc::channel();

        let mut wizard = WizardController::new();
        wizard.subscribe(Box::new(TracingObserver));
        wizard.subscribe(Box::new(ChannelObserver::new(tx)));

        Self {
            wizard,
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            save_path,
            wizard_rx,
            viewport: Rect::new(0, 0, 80, 24),
        }
    }

    /// Current UI state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The wizard controller driven by this app
    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// Lay out against a new terminal size and re-clamp the result scroll.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.refresh_scroll_limit();
    }

    fn refresh_scroll_limit(&mut self) {
        let limit = self.ui_renderer.result_scroll_limit(self.viewport, &self.wizard);
        self.state.set_scroll_limit(limit);
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.should_quit {
            let size = terminal.size()?;
            self.set_viewport(Rect::new(0, 0, size.width, size.height));

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.wizard, &self.keybinding_context)
            })?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                match crossterm::event::read()? {
                    // Windows reports both press and release
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Handle one key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Help overlay swallows everything except its own close keys
        if self.state.help_visible {
            if matches!(key.code, crossterm::event::KeyCode::Esc)
                || self.keybinding_context.resolve(self.state.screen(), &key)
                    == Some(KeyAction::Help)
            {
                self.state.help_visible = false;
            }
            return;
        }

        let Some(action) = self.keybinding_context.resolve(self.state.screen(), &key) else {
            return;
        };
        self.handle_action(action);
    }

    /// Apply a resolved key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        debug!(?action, step = self.state.step.number(), "key action");
        match action {
            KeyAction::NavigateUp => self.state.select_previous(),
            KeyAction::NavigateDown => self.state.select_next(),
            KeyAction::ScrollUp => self.state.scroll_up(1),
            KeyAction::ScrollDown => self.state.scroll_down(1),
            KeyAction::PageUp => self.state.scroll_up(UiConstants::PAGE_SCROLL_SIZE),
            KeyAction::PageDown => self.state.scroll_down(UiConstants::PAGE_SCROLL_SIZE),
            KeyAction::Toggle => self.state.toggle_current_flag(),
            KeyAction::Choose(n) => {
                if n >= 1 && n <= self.state.item_count() {
                    self.state.cursor = n - 1;
                    self.submit_current();
                }
            }
            KeyAction::Select => self.submit_current(),
            KeyAction::Back => {
                let result = self.wizard.go_back();
                self.apply(result);
            }
            KeyAction::Restart => {
                self.wizard.reset();
                self.drain_messages();
                self.state.set_status("Answers cleared");
            }
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Quit => self.state.should_quit = true,
        }
    }

    /// Commit the selection on the current screen to the controller.
    fn submit_current(&mut self) {
        let result = match self.state.step {
            WizardStep::OrganizationSize => self.answer_from_cursor::<EntitySize>(StepAnswer::Size),
            WizardStep::ServiceSensitivity => {
                self.answer_from_cursor::<ServiceSensitivity>(StepAnswer::Sensitivity)
            }
            WizardStep::Governance => {
                self.answer_from_cursor::<GovernanceMaturity>(StepAnswer::Governance)
            }
            WizardStep::Infrastructure => {
                let flags = self.state.infrastructure_draft;
                self.wizard.set_infrastructure(flags)
            }
            WizardStep::Result => return,
        };
        self.apply(result);
    }

    fn answer_from_cursor<T: ChoiceOption>(
        &mut self,
        wrap: fn(T) -> StepAnswer,
    ) -> Result<WizardStep> {
        let options = T::options();
        let chosen = options
            .get(self.state.cursor)
            .or_else(|| options.last())
            .copied()
            .ok_or_else(|| {
                WizardError::invalid_transition(self.state.step.number(), "answer without options")
            })?;
        self.wizard.set_answer(wrap(chosen))
    }

    /// Surface the outcome of a controller call in the UI.
    fn apply(&mut self, result: Result<WizardStep>) {
        match result {
            Ok(_) => self.drain_messages(),
            Err(e) => {
                warn!("Wizard operation rejected: {}", e);
                self.state.set_error(e.to_string());
            }
        }
    }

    /// Process pending controller notifications.
    fn drain_messages(&mut self) {
        while let Ok(message) = self.wizard_rx.try_recv() {
            match message {
                WizardMessage::StepChanged(step) => {
                    self.state.enter_step(step, self.wizard.answers());
                    if !step.is_terminal() {
                        self.state.set_status(format!(
                            "Question {} of {}",
                            step.number(),
                            WizardStep::QUESTION_STEPS
                        ));
                    }
                }
                WizardMessage::Result { tier, score } => {
                    self.state
                        .set_status(format!("Score {} - tier {} ({})", score, tier.level(), tier));
                    self.save_answers();
                }
            }
        }
        self.refresh_scroll_limit();
    }

    fn save_answers(&mut self) {
        let Some(path) = self.save_path.clone() else {
            return;
        };
        match AnswersFile::new(*self.wizard.answers()).save_to_file(&path) {
            Ok(()) => {
                info!("Answers saved to {}", path.display());
                let status = format!(
                    "{} - answers saved to {}",
                    self.state.status_message,
                    path.display()
                );
                self.state.set_status(status);
            }
            Err(e) => {
                warn!("Failed to save answers: {:#}", e);
                self.state.set_error(format!("Failed to save answers: {:#}", e));
            }
        }
    }
}
