//! The answer set collected by the wizard.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
use crate::types::{EntitySize, GovernanceMaturity, Infrastructure, ServiceSensitivity};

/// Answers accumulated across steps 1-4.
///
/// Single-choice answers start as `None`; the infrastructure flags start as
/// all-false, which is itself a complete answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Answers {
    /// Step 1
    #[serde(default)]
    pub entity_size: Option<EntitySize>,
    /// Step 2
    #[serde(default)]
    pub service_sensitivity: Option<ServiceSensitivity>,
    /// Step 3
    #[serde(default)]
    pub infrastructure: Infrastructure,
    /// Step 4
    #[serde(default)]
    pub governance_maturity: Option<GovernanceMaturity>,
}

impl Answers {
    /// Names of the required fields that are still unset, in step order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.entity_size.is_none() {
            missing.push("entity size");
        }
        if self.service_sensitivity.is_none() {
            missing.push("service sensitivity");
        }
        if self.governance_maturity.is_none() {
            missing.push("governance maturity");
        }
        missing
    }

    /// Check if every required field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fail with `IncompleteAnswers` unless all required fields are set.
    pub fn ensure_complete(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::incomplete(missing))
        }
    }
}
