//! Wizard State Machine
//!
//! The controller is the single source of truth for questionnaire progress.
//! It owns the current step, the collected answers and the last assessment,
//! and it only moves along validated transitions.
//!
//! # Step Flow
//!
//! ```text
//! OrganizationSize -> ServiceSensitivity -> Infrastructure -> Governance -> Result
//!        ^                                                                  |
//!        +----------------------------- reset() ----------------------------+
//! ```
//!
//! - Forward moves happen only by answering the current step
//! - `go_back()` moves back one step from steps 2-4
//! - `Result` is reached only through `submit_final()` and left only
//!   through `reset()`
//! - Rejected operations return an error and leave the state unchanged

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::answers::Answers;
use crate::error::{Result, WizardError};
use crate::scoring::{self, Assessment, ScoreBreakdown, Tier};
use crate::tiers::{self, TierProfile};
use crate::types::{
    ChoiceOption, EntitySize, GovernanceMaturity, Infrastructure, ServiceSensitivity,
};

/// Wizard steps in sequential order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WizardStep {
    /// Step 1: organization size
    #[default]
    OrganizationSize = 1,
    /// Step 2: service sensitivity
    ServiceSensitivity = 2,
    /// Step 3: digital infrastructure checklist
    Infrastructure = 3,
    /// Step 4: governance maturity
    Governance = 4,
    /// Step 5: result display (terminal)
    Result = 5,
}

impl WizardStep {
    /// Total number of steps, including the result screen.
    pub const TOTAL_STEPS: u8 = 5;

    /// Number of steps that ask a question.
    pub const QUESTION_STEPS: u8 = 4;

    /// Step number (1-indexed for display)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Step for a 1-indexed number
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::OrganizationSize),
            2 => Some(Self::ServiceSensitivity),
            3 => Some(Self::Infrastructure),
            4 => Some(Self::Governance),
            5 => Some(Self::Result),
            _ => None,
        }
    }

    /// Get the next step in sequence, `None` at the result step.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::OrganizationSize => Some(Self::ServiceSensitivity),
            Self::ServiceSensitivity => Some(Self::Infrastructure),
            Self::Infrastructure => Some(Self::Governance),
            Self::Governance => Some(Self::Result),
            Self::Result => None,
        }
    }

    /// Get the previous step, `None` where going back is not allowed.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::OrganizationSize => None,
            Self::ServiceSensitivity => Some(Self::OrganizationSize),
            Self::Infrastructure => Some(Self::ServiceSensitivity),
            Self::Governance => Some(Self::Infrastructure),
            // The result can only be left through reset()
            Self::Result => None,
        }
    }

    /// Check if the current step allows going back.
    pub const fn can_go_back(self) -> bool {
        self.previous().is_some()
    }

    /// Whether this is the display-only result step
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Result)
    }

    /// Get the display title for this step.
    pub const fn title(self) -> &'static str {
        match self {
            Self::OrganizationSize => "How large is your organization?",
            Self::ServiceSensitivity => "How sensitive are the services you provide?",
            Self::Infrastructure => "Which statements describe your digital infrastructure?",
            Self::Governance => "How mature is your security governance?",
            Self::Result => "Your NIS2 exposure",
        }
    }

    /// All steps in order
    pub const fn all() -> &'static [Self] {
        &[
            Self::OrganizationSize,
            Self::ServiceSensitivity,
            Self::Infrastructure,
            Self::Governance,
            Self::Result,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// An answer for one of the single-choice steps (1, 2 and 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAnswer {
    Size(EntitySize),
    Sensitivity(ServiceSensitivity),
    Governance(GovernanceMaturity),
}

impl StepAnswer {
    /// The step this answer belongs to
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::Size(_) => WizardStep::OrganizationSize,
            Self::Sensitivity(_) => WizardStep::ServiceSensitivity,
            Self::Governance(_) => WizardStep::Governance,
        }
    }

    /// Parse a raw value against the enumeration of a single-choice step.
    ///
    /// # Errors
    ///
    /// - `UnknownValue` if the value is not part of the step's enumeration
    /// - `InvalidTransition` if the step does not take a single choice
    pub fn parse(step: WizardStep, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        match step {
            WizardStep::OrganizationSize => parse_choice(raw).map(Self::Size),
            WizardStep::ServiceSensitivity => parse_choice(raw).map(Self::Sensitivity),
            WizardStep::Governance => parse_choice(raw).map(Self::Governance),
            WizardStep::Infrastructure | WizardStep::Result => {
                Err(WizardError::invalid_transition(step.number(), "set a single answer"))
            }
        }
    }
}

fn parse_choice<T: ChoiceOption + FromStr>(raw: &str) -> Result<T> {
    T::from_str(raw).map_err(|_| WizardError::unknown_value(T::FIELD, raw, T::expected_values()))
}

/// Receives wizard notifications.
///
/// This is the seam to the presentation layer: the terminal UI, the headless
/// CLI and tests all bind to the controller through it.
pub trait WizardObserver {
    /// Called after every successful step change, including resets.
    fn on_step_changed(&mut self, step: WizardStep);

    /// Called when the result step is reached.
    fn on_result(&mut self, tier: Tier, profile: &'static TierProfile, breakdown: &ScoreBreakdown) {
        let _ = (tier, profile, breakdown);
    }
}

/// Observer that records transitions in the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl WizardObserver for TracingObserver {
    fn on_step_changed(&mut self, step: WizardStep) {
        debug!(step = step.number(), title = step.title(), "wizard step changed");
    }

    fn on_result(
        &mut self,
        tier: Tier,
        _profile: &'static TierProfile,
        breakdown: &ScoreBreakdown,
    ) {
        info!(tier = %tier, score = breakdown.total(), "assessment complete");
    }
}

/// Session-scoped wizard controller.
///
/// # Example
///
/// ```
/// use nis2tui::wizard::{StepAnswer, WizardController, WizardStep};
/// use nis2tui::types::{EntitySize, GovernanceMaturity, Infrastructure, ServiceSensitivity};
/// use nis2tui::scoring::Tier;
///
/// let mut wizard = WizardController::new();
/// wizard.set_answer(StepAnswer::Size(EntitySize::Large)).unwrap();
/// wizard.set_answer(StepAnswer::Sensitivity(ServiceSensitivity::High)).unwrap();
/// wizard.set_infrastructure(Infrastructure::default()).unwrap();
/// wizard.set_answer(StepAnswer::Governance(GovernanceMaturity::None)).unwrap();
///
/// assert_eq!(wizard.current_step(), WizardStep::Result);
/// assert_eq!(wizard.assessment().unwrap().tier, Tier::Critical);
/// ```
#[derive(Default)]
pub struct WizardController {
    step: WizardStep,
    answers: Answers,
    assessment: Option<Assessment>,
    observers: Vec<Box<dyn WizardObserver>>,
}

impl fmt::Debug for WizardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardController")
            .field("step", &self.step)
            .field("answers", &self.answers)
            .field("assessment", &self.assessment)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl WizardController {
    /// Create a controller at step 1 with all answers unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it is notified of every later change.
    pub fn subscribe(&mut self, observer: Box<dyn WizardObserver>) {
        self.observers.push(observer);
    }

    /// Current step
    #[inline]
    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Answers collected so far
    #[inline]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Result of the last `submit_final`, present only on the result step
    #[inline]
    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    /// Text bundle for the current result, if any
    pub fn result_profile(&self) -> Option<&'static TierProfile> {
        self.assessment.map(|a| tiers::profile(a.tier))
    }

    /// Store a single-choice answer and move forward.
    ///
    /// Answering steps 1 and 2 advances by one step. Answering step 4 stores
    /// the governance value and then runs [`submit_final`](Self::submit_final).
    ///
    /// # Errors
    ///
    /// `InvalidTransition` if the answer is not for the current step.
    pub fn set_answer(&mut self, answer: StepAnswer) -> Result<WizardStep> {
        if answer.step() != self.step {
            return Err(WizardError::invalid_transition(
                self.step.number(),
                "answer a different step",
            ));
        }

        match answer {
            StepAnswer::Size(size) => self.answers.entity_size = Some(size),
            StepAnswer::Sensitivity(sensitivity) => {
                self.answers.service_sensitivity = Some(sensitivity)
            }
            StepAnswer::Governance(governance) => {
                let previous = self.answers.governance_maturity.replace(governance);
                debug!(%governance, "governance answered, submitting");
                return self.submit_final().inspect_err(|_| {
                    self.answers.governance_maturity = previous;
                });
            }
        }
        debug!(step = self.step.number(), ?answer, "answer stored");

        self.advance()
    }

    /// Parse a raw value for the current step and store it.
    ///
    /// # Errors
    ///
    /// `UnknownValue` for values outside the step's enumeration, otherwise as
    /// [`set_answer`](Self::set_answer).
    pub fn set_answer_str(&mut self, raw: &str) -> Result<WizardStep> {
        let answer = StepAnswer::parse(self.step, raw)?;
        self.set_answer(answer)
    }

    /// Store all four infrastructure flags at once and move to step 4.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless the wizard is on step 3.
    pub fn set_infrastructure(&mut self, flags: Infrastructure) -> Result<WizardStep> {
        if self.step != WizardStep::Infrastructure {
            return Err(WizardError::invalid_transition(
                self.step.number(),
                "set infrastructure",
            ));
        }
        self.answers.infrastructure = flags;
        debug!(?flags, "infrastructure stored");
        self.advance()
    }

    /// Move back one step, keeping the answers already given.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` on step 1 and on the result step.
    pub fn go_back(&mut self) -> Result<WizardStep> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| WizardError::invalid_transition(self.step.number(), "go back"))?;
        self.move_to(previous);
        Ok(previous)
    }

    /// Forget every answer and the result, and return to step 1.
    pub fn reset(&mut self) {
        self.answers = Answers::default();
        self.assessment = None;
        info!("wizard reset");
        self.move_to(WizardStep::OrganizationSize);
    }

    /// Compute the tier from the collected answers and show the result.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the wizard is on step 4
    /// - `IncompleteAnswers` if steps 1, 2 or 4 are unanswered
    pub fn submit_final(&mut self) -> Result<WizardStep> {
        if self.step != WizardStep::Governance {
            return Err(WizardError::invalid_transition(self.step.number(), "submit"));
        }

        let assessment = scoring::assess(&self.answers)?;
        self.assessment = Some(assessment);
        self.move_to(WizardStep::Result);

        let profile = tiers::profile(assessment.tier);
        for observer in &mut self.observers {
            observer.on_result(assessment.tier, profile, &assessment.breakdown);
        }

        Ok(WizardStep::Result)
    }

    fn advance(&mut self) -> Result<WizardStep> {
        // Only reached from steps 1-3, which always have a successor
        let next = self
            .step
            .next()
            .ok_or_else(|| WizardError::invalid_transition(self.step.number(), "advance"))?;
        self.move_to(next);
        Ok(next)
    }

    fn move_to(&mut self, step: WizardStep) {
        self.step = step;
        for observer in &mut self.observers {
            observer.on_step_changed(step);
        }
    }
}
