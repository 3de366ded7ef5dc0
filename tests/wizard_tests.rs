//! Tests for the Wizard Controller
//!
//! These tests verify:
//! - End-to-end questionnaire runs and their tiers
//! - Back navigation keeps answers
//! - Reset clears everything
//! - Observers see every step change in order

use std::cell::RefCell;
use std::rc::Rc;

use nis2tui::scoring::{ScoreBreakdown, Tier};
use nis2tui::tiers::{self, TierProfile};
use nis2tui::types::{EntitySize, GovernanceMaturity, Infrastructure, ServiceSensitivity};
use nis2tui::wizard::{StepAnswer, WizardController, WizardObserver, WizardStep};
use nis2tui::WizardError;

/// Observer that records what it is told
#[derive(Default)]
struct Recorder {
    steps: Rc<RefCell<Vec<WizardStep>>>,
    results: Rc<RefCell<Vec<(Tier, i32)>>>,
}

impl WizardObserver for Recorder {
    fn on_step_changed(&mut self, step: WizardStep) {
        self.steps.borrow_mut().push(step);
    }

    fn on_result(&mut self, tier: Tier, profile: &'static TierProfile, breakdown: &ScoreBreakdown) {
        assert_eq!(profile, tiers::profile(tier));
        self.results.borrow_mut().push((tier, breakdown.total()));
    }
}

fn recorded() -> (
    WizardController,
    Rc<RefCell<Vec<WizardStep>>>,
    Rc<RefCell<Vec<(Tier, i32)>>>,
) {
    let recorder = Recorder::default();
    let steps = Rc::clone(&recorder.steps);
    let results = Rc::clone(&recorder.results);
    let mut wizard = WizardController::new();
    wizard.subscribe(Box::new(recorder));
    (wizard, steps, results)
}

fn run(
    wizard: &mut WizardController,
    size: EntitySize,
    sensitivity: ServiceSensitivity,
    infrastructure: Infrastructure,
    governance: GovernanceMaturity,
) {
    wizard.set_answer(StepAnswer::Size(size)).unwrap();
    wizard
        .set_answer(StepAnswer::Sensitivity(sensitivity))
        .unwrap();
    wizard.set_infrastructure(infrastructure).unwrap();
    wizard
        .set_answer(StepAnswer::Governance(governance))
        .unwrap();
}

// =============================================================================
// End-to-end runs
// =============================================================================

#[test]
fn test_new_controller_starts_empty() {
    let wizard = WizardController::new();
    assert_eq!(wizard.current_step(), WizardStep::OrganizationSize);
    assert!(wizard.answers().entity_size.is_none());
    assert!(wizard.answers().service_sensitivity.is_none());
    assert!(wizard.answers().governance_maturity.is_none());
    assert_eq!(wizard.answers().infrastructure, Infrastructure::default());
    assert!(wizard.assessment().is_none());
}

#[test]
fn test_worst_case_is_critical() {
    let (mut wizard, _, results) = recorded();
    run(
        &mut wizard,
        EntitySize::Large,
        ServiceSensitivity::High,
        Infrastructure::default(),
        GovernanceMaturity::None,
    );
    assert_eq!(wizard.current_step(), WizardStep::Result);
    assert_eq!(results.borrow().as_slice(), &[(Tier::Critical, 11)]);
}

#[test]
fn test_best_case_is_limited() {
    let (mut wizard, _, results) = recorded();
    run(
        &mut wizard,
        EntitySize::Small,
        ServiceSensitivity::Low,
        Infrastructure {
            mfa: true,
            incident_process: true,
            ..Default::default()
        },
        GovernanceMaturity::Iso,
    );
    assert_eq!(results.borrow().as_slice(), &[(Tier::Limited, 0)]);
    assert_eq!(
        wizard.result_profile().map(|p| p.label),
        Some(tiers::profile(Tier::Limited).label)
    );
}

#[test]
fn test_structured_governance_lands_in_important() {
    // 2 + 2 + min(2, 3) - 1 = 5
    let (mut wizard, _, results) = recorded();
    run(
        &mut wizard,
        EntitySize::Medium,
        ServiceSensitivity::Medium,
        Infrastructure {
            mfa: false,
            incident_process: true,
            ..Default::default()
        },
        GovernanceMaturity::Structured,
    );
    assert_eq!(results.borrow().as_slice(), &[(Tier::Important, 5)]);

    let profile = wizard.result_profile().unwrap();
    assert!(profile.obligations[0].starts_with("Register"));
    assert!(profile.obligations[profile.obligations.len() - 1].starts_with("Train"));
}

#[test]
fn test_all_risky_infrastructure_is_capped() {
    let (mut wizard, _, _) = recorded();
    run(
        &mut wizard,
        EntitySize::Small,
        ServiceSensitivity::Low,
        Infrastructure {
            cloud: true,
            mfa: false,
            incident_process: false,
            supply_chain: true,
        },
        GovernanceMaturity::Structured,
    );
    let breakdown = wizard.assessment().unwrap().breakdown;
    assert_eq!(breakdown.infrastructure_raw, 6);
    assert_eq!(breakdown.infrastructure, 3);
    assert_eq!(breakdown.total(), 4);
    assert_eq!(wizard.assessment().unwrap().tier, Tier::Important);
}

#[test]
fn test_string_answers_drive_the_controller() {
    let mut wizard = WizardController::new();
    wizard.set_answer_str("Large").unwrap();
    wizard.set_answer_str("high").unwrap();
    wizard.set_infrastructure(Infrastructure::default()).unwrap();

    let err = wizard.set_answer_str("perfect").unwrap_err();
    assert!(matches!(err, WizardError::UnknownValue { .. }));
    assert!(err.to_string().contains("none, basic, structured, iso"));
    assert_eq!(wizard.current_step(), WizardStep::Governance);

    assert_eq!(wizard.set_answer_str("iso").unwrap(), WizardStep::Result);
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_back_keeps_answers_and_allows_changes() {
    let mut wizard = WizardController::new();
    wizard.set_answer(StepAnswer::Size(EntitySize::Small)).unwrap();
    wizard
        .set_answer(StepAnswer::Sensitivity(ServiceSensitivity::High))
        .unwrap();

    assert_eq!(wizard.go_back().unwrap(), WizardStep::ServiceSensitivity);
    assert_eq!(wizard.go_back().unwrap(), WizardStep::OrganizationSize);
    assert_eq!(wizard.answers().entity_size, Some(EntitySize::Small));
    assert_eq!(
        wizard.answers().service_sensitivity,
        Some(ServiceSensitivity::High)
    );

    wizard.set_answer(StepAnswer::Size(EntitySize::Large)).unwrap();
    assert_eq!(wizard.answers().entity_size, Some(EntitySize::Large));
    assert_eq!(wizard.current_step(), WizardStep::ServiceSensitivity);
}

#[test]
fn test_back_is_rejected_on_first_and_result_steps() {
    let mut wizard = WizardController::new();
    let err = wizard.go_back().unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(wizard.current_step(), WizardStep::OrganizationSize);

    run(
        &mut wizard,
        EntitySize::Small,
        ServiceSensitivity::Low,
        Infrastructure::default(),
        GovernanceMaturity::Basic,
    );
    assert!(matches!(
        wizard.go_back(),
        Err(WizardError::InvalidTransition { from: 5, .. })
    ));
    assert_eq!(wizard.current_step(), WizardStep::Result);
}

#[test]
fn test_infrastructure_only_on_step_three() {
    let mut wizard = WizardController::new();
    assert!(wizard.set_infrastructure(Infrastructure::default()).is_err());
    assert_eq!(wizard.current_step(), WizardStep::OrganizationSize);
}

#[test]
fn test_reset_clears_everything() {
    let (mut wizard, steps, _) = recorded();
    run(
        &mut wizard,
        EntitySize::Large,
        ServiceSensitivity::High,
        Infrastructure {
            cloud: true,
            ..Default::default()
        },
        GovernanceMaturity::None,
    );
    wizard.reset();

    assert_eq!(wizard.current_step(), WizardStep::OrganizationSize);
    assert_eq!(*wizard.answers(), nis2tui::Answers::default());
    assert!(wizard.assessment().is_none());
    assert!(wizard.result_profile().is_none());
    assert_eq!(steps.borrow().last(), Some(&WizardStep::OrganizationSize));
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn test_observers_see_every_step_in_order() {
    let (mut wizard, steps, results) = recorded();
    wizard.set_answer(StepAnswer::Size(EntitySize::Medium)).unwrap();
    wizard.go_back().unwrap();
    // Rejected operations are not reported
    assert!(wizard.go_back().is_err());
    run(
        &mut wizard,
        EntitySize::Medium,
        ServiceSensitivity::Low,
        Infrastructure::default(),
        GovernanceMaturity::Basic,
    );

    assert_eq!(
        steps.borrow().as_slice(),
        &[
            WizardStep::ServiceSensitivity,
            WizardStep::OrganizationSize,
            WizardStep::ServiceSensitivity,
            WizardStep::Infrastructure,
            WizardStep::Governance,
            WizardStep::Result,
        ]
    );
    assert_eq!(results.borrow().len(), 1);
}

#[test]
fn test_multiple_observers_are_all_notified() {
    let first = Recorder::default();
    let second = Recorder::default();
    let first_steps = Rc::clone(&first.steps);
    let second_steps = Rc::clone(&second.steps);

    let mut wizard = WizardController::new();
    wizard.subscribe(Box::new(first));
    wizard.subscribe(Box::new(second));
    wizard.set_answer(StepAnswer::Size(EntitySize::Small)).unwrap();

    assert_eq!(*first_steps.borrow(), vec![WizardStep::ServiceSensitivity]);
    assert_eq!(*first_steps.borrow(), *second_steps.borrow());
}
