//! Exposure scoring
//!
//! Turns an answer set into a weighted score and maps the score to one of
//! three exposure tiers. Everything here is pure: identical answers always
//! produce the identical breakdown and tier.
//!
//! # Score
//!
//! ```text
//! total = size + sensitivity + min(infra_raw, 3) + governance
//! ```
//!
//! | term        | values                                                   |
//! |-------------|----------------------------------------------------------|
//! | size        | large 3, medium 2, small/unset 1                         |
//! | sensitivity | high 3, medium 2, low/unset 1                            |
//! | infra_raw   | cloud +1, no MFA +2, no incident process +2, supply +1   |
//! | governance  | none +2, basic +1, structured -1, iso -2, unset 0        |
//!
//! # Tiers
//!
//! First match wins: `total >= 6` Critical, `total >= 4` Important,
//! otherwise Limited.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::answers::Answers;
use crate::error::Result;
use crate::types::{EntitySize, GovernanceMaturity, Infrastructure, ServiceSensitivity};

/// Upper bound applied to the infrastructure risk term
pub const INFRA_RISK_CAP: i32 = 3;

/// Lowest score a complete answer set can reach
pub const SCORE_MIN: i32 = 0;

/// Highest score a complete answer set can reach
pub const SCORE_MAX: i32 = 11;

/// Minimum total for the Critical tier
pub const CRITICAL_THRESHOLD: i32 = 6;

/// Minimum total for the Important tier
pub const IMPORTANT_THRESHOLD: i32 = 4;

/// Exposure tier, ordered from least to most exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Tier 1: limited / low exposure
    Limited,
    /// Tier 2: important / medium exposure
    Important,
    /// Tier 3: critical / high exposure
    Critical,
}

impl Tier {
    /// Classify a total score.
    pub const fn from_score(total: i32) -> Self {
        if total >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if total >= IMPORTANT_THRESHOLD {
            Self::Important
        } else {
            Self::Limited
        }
    }

    /// Ordinal tier number (1-3)
    pub const fn level(self) -> u8 {
        match self {
            Self::Limited => 1,
            Self::Important => 2,
            Self::Critical => 3,
        }
    }
}

/// Each term of the score, kept so the result screen can explain itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub size: i32,
    pub sensitivity: i32,
    /// Infrastructure risk before the cap
    pub infrastructure_raw: i32,
    /// Infrastructure risk after the cap; this is what counts
    pub infrastructure: i32,
    pub governance: i32,
}

impl ScoreBreakdown {
    /// Sum of the counted terms
    pub const fn total(&self) -> i32 {
        self.size + self.sensitivity + self.infrastructure + self.governance
    }

    /// Tier for this breakdown's total
    pub const fn tier(&self) -> Tier {
        Tier::from_score(self.total())
    }
}

/// One-line explanation of the terms, e.g.
/// `size 1 + sensitivity 1 + infrastructure 3 (capped from 6) + governance +0 = 5`
impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size {} + sensitivity {} + infrastructure {}",
            self.size, self.sensitivity, self.infrastructure
        )?;
        if self.infrastructure_raw > self.infrastructure {
            write!(f, " (capped from {})", self.infrastructure_raw)?;
        }
        write!(f, " + governance {:+} = {}", self.governance, self.total())
    }
}

/// The outcome of a completed questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub tier: Tier,
    pub breakdown: ScoreBreakdown,
}

fn size_points(size: Option<EntitySize>) -> i32 {
    match size {
        Some(EntitySize::Large) => 3,
        Some(EntitySize::Medium) => 2,
        _ => 1,
    }
}

fn sensitivity_points(sensitivity: Option<ServiceSensitivity>) -> i32 {
    match sensitivity {
        Some(ServiceSensitivity::High) => 3,
        Some(ServiceSensitivity::Medium) => 2,
        _ => 1,
    }
}

/// Uncapped infrastructure risk
pub fn infrastructure_risk(infra: &Infrastructure) -> i32 {
    let mut risk = 0;
    if infra.cloud {
        risk += 1;
    }
    if !infra.mfa {
        risk += 2;
    }
    if !infra.incident_process {
        risk += 2;
    }
    if infra.supply_chain {
        risk += 1;
    }
    risk
}

fn governance_modifier(governance: Option<GovernanceMaturity>) -> i32 {
    match governance {
        Some(GovernanceMaturity::None) => 2,
        Some(GovernanceMaturity::Basic) => 1,
        Some(GovernanceMaturity::Structured) => -1,
        Some(GovernanceMaturity::Iso) => -2,
        None => 0,
    }
}

/// Score an answer set.
///
/// Unset fields fall back to their neutral contribution (1, 1 and 0); use
/// [`assess`] when a tier must only be produced from complete answers.
pub fn score(answers: &Answers) -> ScoreBreakdown {
    let infrastructure_raw = infrastructure_risk(&answers.infrastructure);
    ScoreBreakdown {
        size: size_points(answers.entity_size),
        sensitivity: sensitivity_points(answers.service_sensitivity),
        infrastructure_raw,
        infrastructure: infrastructure_raw.min(INFRA_RISK_CAP),
        governance: governance_modifier(answers.governance_maturity),
    }
}

/// Score and classify a complete answer set.
///
/// # Errors
///
/// `IncompleteAnswers` if entity size, service sensitivity or governance
/// maturity is unset.
pub fn assess(answers: &Answers) -> Result<Assessment> {
    answers.ensure_complete()?;
    let breakdown = score(answers);
    Ok(Assessment {
        tier: breakdown.tier(),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WizardError;

    fn answers(
        size: EntitySize,
        sensitivity: ServiceSensitivity,
        infrastructure: Infrastructure,
        governance: GovernanceMaturity,
    ) -> Answers {
        Answers {
            entity_size: Some(size),
            service_sensitivity: Some(sensitivity),
            infrastructure,
            governance_maturity: Some(governance),
        }
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(Tier::from_score(6), Tier::Critical);
        assert_eq!(Tier::from_score(5), Tier::Important);
        assert_eq!(Tier::from_score(4), Tier::Important);
        assert_eq!(Tier::from_score(3), Tier::Limited);
        assert_eq!(Tier::from_score(0), Tier::Limited);
    }

    #[test]
    fn test_infrastructure_risk_is_capped() {
        let infra = Infrastructure {
            cloud: true,
            mfa: false,
            incident_process: false,
            supply_chain: true,
        };
        assert_eq!(infrastructure_risk(&infra), 6);

        let breakdown = score(&Answers {
            infrastructure: infra,
            ..Default::default()
        });
        assert_eq!(breakdown.infrastructure_raw, 6);
        assert_eq!(breakdown.infrastructure, INFRA_RISK_CAP);
    }

    #[test]
    fn test_worst_case_scores_eleven() {
        let result = assess(&answers(
            EntitySize::Large,
            ServiceSensitivity::High,
            Infrastructure::default(),
            GovernanceMaturity::None,
        ))
        .unwrap();
        assert_eq!(result.breakdown.infrastructure_raw, 4);
        assert_eq!(result.breakdown.total(), 11);
        assert_eq!(result.tier, Tier::Critical);
    }

    #[test]
    fn test_best_case_scores_zero() {
        let infra = Infrastructure {
            mfa: true,
            incident_process: true,
            ..Default::default()
        };
        let result = assess(&answers(
            EntitySize::Small,
            ServiceSensitivity::Low,
            infra,
            GovernanceMaturity::Iso,
        ))
        .unwrap();
        assert_eq!(result.breakdown.total(), 0);
        assert_eq!(result.tier, Tier::Limited);
    }

    #[test]
    fn test_medium_profile_without_mfa_is_critical() {
        let infra = Infrastructure {
            mfa: false,
            incident_process: true,
            ..Default::default()
        };
        let result = assess(&answers(
            EntitySize::Medium,
            ServiceSensitivity::Medium,
            infra,
            GovernanceMaturity::Basic,
        ))
        .unwrap();
        assert_eq!(result.breakdown.infrastructure, 2);
        assert_eq!(result.breakdown.total(), 7);
        assert_eq!(result.tier, Tier::Critical);
    }

    #[test]
    fn test_governance_modifiers() {
        let base = Answers::default();
        let cases = [
            (GovernanceMaturity::None, 2),
            (GovernanceMaturity::Basic, 1),
            (GovernanceMaturity::Structured, -1),
            (GovernanceMaturity::Iso, -2),
        ];
        for (governance, expected) in cases {
            let breakdown = score(&Answers {
                governance_maturity: Some(governance),
                ..base
            });
            assert_eq!(breakdown.governance, expected, "{governance}");
        }
        assert_eq!(score(&base).governance, 0);
    }

    #[test]
    fn test_unset_answers_use_neutral_points() {
        let breakdown = score(&Answers::default());
        assert_eq!(breakdown.size, 1);
        assert_eq!(breakdown.sensitivity, 1);
        assert_eq!(breakdown.governance, 0);
    }

    #[test]
    fn test_assess_rejects_incomplete_answers() {
        let partial = Answers {
            entity_size: Some(EntitySize::Large),
            ..Default::default()
        };
        assert!(matches!(
            assess(&partial),
            Err(WizardError::IncompleteAnswers { .. })
        ));
    }

    #[test]
    fn test_breakdown_display_mentions_cap() {
        let breakdown = score(&Answers {
            infrastructure: Infrastructure {
                cloud: true,
                supply_chain: true,
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(
            breakdown.to_string(),
            "size 1 + sensitivity 1 + infrastructure 3 (capped from 6) + governance +0 = 5"
        );
    }

    #[test]
    fn test_breakdown_display_signs_governance() {
        let breakdown = score(&Answers {
            governance_maturity: Some(GovernanceMaturity::Iso),
            ..Default::default()
        });
        let text = breakdown.to_string();
        assert!(text.contains("governance -2"));
        assert!(!text.contains("capped"));
    }

    #[test]
    fn test_tier_ordering_and_level() {
        assert!(Tier::Limited < Tier::Important);
        assert!(Tier::Important < Tier::Critical);
        assert_eq!(Tier::Critical.level(), 3);
        assert_eq!(Tier::Limited.to_string(), "limited");
    }
}
