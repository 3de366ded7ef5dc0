//! Answers file handling for saving and loading questionnaire answers.
//!
//! The file is pretty-printed JSON of [`Answers`] with the canonical
//! lowercase enum values:
//!
//! ```json
//! {
//!   "entity_size": "medium",
//!   "service_sensitivity": "high",
//!   "infrastructure": { "cloud": true, "mfa": true, "incident_process": false, "supply_chain": false },
//!   "governance_maturity": "basic"
//! }
//! ```
//!
//! Missing fields load as unset; `validate` reports them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::answers::Answers;
use crate::scoring::Assessment;
use crate::tiers::{self, TierProfile};

/// Answers file contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswersFile {
    #[serde(flatten)]
    pub answers: Answers,
}

impl AnswersFile {
    /// Wrap an answer set for saving
    pub fn new(answers: Answers) -> Self {
        Self { answers }
    }

    /// Save answers to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize answers to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write answers to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load answers from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read answers from {:?}", path.as_ref()))?;

        let file: Self =
            serde_json::from_str(&content).context("Failed to parse answers JSON")?;

        Ok(file)
    }

    /// Validate that every required answer is present
    pub fn validate(&self) -> Result<()> {
        self.answers
            .ensure_complete()
            .context("Answers file is incomplete")
    }
}

/// Machine-readable result written by `assess --json`
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub answers: Answers,
    pub score: i32,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub profile: &'static TierProfile,
}

impl AssessmentReport {
    /// Build a report for a computed assessment
    pub fn new(answers: Answers, assessment: Assessment) -> Self {
        Self {
            answers,
            score: assessment.breakdown.total(),
            assessment,
            profile: tiers::profile(assessment.tier),
        }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize assessment report")
    }
}
