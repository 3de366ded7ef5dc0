//! NIS2 TUI Library
//!
//! Core of the NIS2 exposure questionnaire: the wizard controller, scoring,
//! tier reference text and the terminal front end built on top of them.

pub mod answers;
pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod report;
pub mod scoring;
pub mod theme;
pub mod tiers;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use answers::Answers;
pub use config_file::{AnswersFile, AssessmentReport};
pub use error::WizardError;
pub use scoring::{Assessment, ScoreBreakdown, Tier, assess, score};
pub use tiers::TierProfile;
pub use types::{
    EntitySize, GovernanceMaturity, Infrastructure, InfrastructureFlag, ServiceSensitivity,
};
pub use wizard::{StepAnswer, TracingObserver, WizardController, WizardObserver, WizardStep};
