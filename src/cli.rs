use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::answers::Answers;
use crate::config_file::AnswersFile;
use crate::error::WizardError;
use crate::scoring::Assessment;
use crate::wizard::WizardController;

/// NIS2 TUI - estimate your exposure to the NIS2 directive
#[derive(Parser)]
#[command(name = "nis2tui")]
#[command(about = "A four-question NIS2 exposure self-assessment with TUI interface")]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (logs are discarded in TUI mode otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive questionnaire
    Run {
        /// Save the answers to this file when a result is reached
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Assess answers given on the command line or in a file
    Assess(AssessArgs),
    /// Validate an answers file
    Validate {
        /// Path to answers file to validate
        file: PathBuf,
    },
    /// Print the reference text for every tier
    Tiers {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// Organization size (small, medium, large)
    #[arg(long)]
    pub size: Option<String>,

    /// Service sensitivity (low, medium, high)
    #[arg(long)]
    pub sensitivity: Option<String>,

    /// Governance maturity (none, basic, structured, iso)
    #[arg(long)]
    pub governance: Option<String>,

    /// Services run on public cloud (`--cloud=false` clears it)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub cloud: Option<bool>,

    /// Multi-factor authentication is enforced (`--mfa=false` clears it)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub mfa: Option<bool>,

    /// A documented incident response process exists
    /// (`--incident-process=false` clears it)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub incident_process: Option<bool>,

    /// Critical suppliers have access to your systems
    /// (`--supply-chain=false` clears it)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub supply_chain: Option<bool>,

    /// Answers file to start from; flags override its values
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl AssessArgs {
    /// Answers from the file (if any), flags given on the command line win.
    ///
    /// Single-choice values stay raw strings here; they are checked when the
    /// controller parses them.
    fn raw_answers(&self) -> anyhow::Result<(Answers, [Option<String>; 3])> {
        let base = match &self.from {
            Some(path) => AnswersFile::load_from_file(path)?.answers,
            None => Answers::default(),
        };

        let mut infrastructure = base.infrastructure;
        let flags = [
            (&mut infrastructure.cloud, self.cloud),
            (&mut infrastructure.mfa, self.mfa),
            (&mut infrastructure.incident_process, self.incident_process),
            (&mut infrastructure.supply_chain, self.supply_chain),
        ];
        for (slot, given) in flags {
            if let Some(value) = given {
                *slot = value;
            }
        }

        let raw = [
            self.size
                .clone()
                .or_else(|| base.entity_size.map(|v| v.to_string())),
            self.sensitivity
                .clone()
                .or_else(|| base.service_sensitivity.map(|v| v.to_string())),
            self.governance
                .clone()
                .or_else(|| base.governance_maturity.map(|v| v.to_string())),
        ];

        Ok((
            Answers {
                infrastructure,
                ..base
            },
            raw,
        ))
    }

    /// Drive a fresh controller through all four steps.
    ///
    /// # Errors
    ///
    /// `IncompleteAnswers` when a required value is missing, `UnknownValue`
    /// for values outside an enumeration, and file errors for `--from`.
    pub fn run_wizard(&self) -> anyhow::Result<(Answers, Assessment)> {
        let (answers, raw) = self.raw_answers()?;

        let fields = ["entity size", "service sensitivity", "governance maturity"];
        let missing: Vec<&'static str> = fields
            .into_iter()
            .zip(&raw)
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect();
        let [Some(size), Some(sensitivity), Some(governance)] = raw else {
            return Err(WizardError::incomplete(missing).into());
        };

        let mut wizard = WizardController::new();
        wizard.subscribe(Box::new(crate::wizard::TracingObserver));
        wizard.set_answer_str(&size)?;
        wizard.set_answer_str(&sensitivity)?;
        wizard.set_infrastructure(answers.infrastructure)?;
        wizard.set_answer_str(&governance)?;

        let assessment = wizard
            .assessment()
            .copied()
            .context("Wizard finished without an assessment")?;
        Ok((*wizard.answers(), assessment))
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Tier;
    use crate::types::{EntitySize, GovernanceMaturity, Infrastructure, ServiceSensitivity};
    use clap::Parser;
    use tempfile::NamedTempFile;

    fn parse_assess(args: &[&str]) -> AssessArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Assess(args)) => args,
            _ => panic!("expected assess"),
        }
    }

    #[test]
    fn test_no_command_launches_tui() {
        let cli = Cli::try_parse_from(["nis2tui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_global_log_file_after_subcommand() {
        let cli = Cli::try_parse_from(["nis2tui", "run", "--log-file", "/tmp/nis2.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/nis2.log")));
        assert!(matches!(cli.command, Some(Commands::Run { save: None })));
    }

    #[test]
    fn test_assess_from_flags() {
        let args = parse_assess(&[
            "nis2tui",
            "assess",
            "--size",
            "medium",
            "--sensitivity",
            "medium",
            "--incident-process",
            "--governance",
            "basic",
        ]);
        let (answers, assessment) = args.run_wizard().unwrap();
        assert_eq!(answers.entity_size, Some(EntitySize::Medium));
        assert!(!answers.infrastructure.mfa);
        assert_eq!(assessment.breakdown.total(), 7);
        assert_eq!(assessment.tier, Tier::Critical);
    }

    #[test]
    fn test_assess_missing_values_lists_fields() {
        let args = parse_assess(&["nis2tui", "assess", "--size", "large"]);
        let err = args.run_wizard().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("service sensitivity"));
        assert!(msg.contains("governance maturity"));
        assert!(!msg.contains("entity size"));
    }

    #[test]
    fn test_assess_rejects_unknown_value() {
        let args = parse_assess(&[
            "nis2tui",
            "assess",
            "--size",
            "huge",
            "--sensitivity",
            "low",
            "--governance",
            "iso",
        ]);
        let err = args.run_wizard().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WizardError>(),
            Some(WizardError::UnknownValue { .. })
        ));
    }

    #[test]
    fn test_assess_flags_override_file() {
        let file = NamedTempFile::new().unwrap();
        AnswersFile::new(Answers {
            entity_size: Some(EntitySize::Small),
            service_sensitivity: Some(ServiceSensitivity::Low),
            infrastructure: Infrastructure {
                mfa: true,
                ..Default::default()
            },
            governance_maturity: Some(GovernanceMaturity::Iso),
        })
        .save_to_file(file.path())
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args =
            parse_assess(&["nis2tui", "assess", "--from", &path, "--size", "large", "--cloud"]);
        let (answers, _) = args.run_wizard().unwrap();
        assert_eq!(answers.entity_size, Some(EntitySize::Large));
        assert_eq!(answers.service_sensitivity, Some(ServiceSensitivity::Low));
        assert!(answers.infrastructure.cloud);
        assert!(answers.infrastructure.mfa);
    }

    #[test]
    fn test_assess_false_flag_clears_file_value() {
        let file = NamedTempFile::new().unwrap();
        AnswersFile::new(Answers {
            entity_size: Some(EntitySize::Medium),
            service_sensitivity: Some(ServiceSensitivity::Medium),
            infrastructure: Infrastructure {
                mfa: true,
                incident_process: true,
                ..Default::default()
            },
            governance_maturity: Some(GovernanceMaturity::Basic),
        })
        .save_to_file(file.path())
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = parse_assess(&["nis2tui", "assess", "--from", &path, "--mfa=false"]);
        assert_eq!(args.mfa, Some(false));
        assert_eq!(args.incident_process, None);

        // 2 + 2 + 2 (no MFA) + 1 = 7
        let (answers, assessment) = args.run_wizard().unwrap();
        assert!(!answers.infrastructure.mfa);
        assert!(answers.infrastructure.incident_process);
        assert_eq!(assessment.breakdown.total(), 7);
        assert_eq!(assessment.tier, Tier::Critical);
    }

    #[test]
    fn test_bare_flag_means_true() {
        let args = parse_assess(&["nis2tui", "assess", "--cloud", "--supply-chain=true"]);
        assert_eq!(args.cloud, Some(true));
        assert_eq!(args.supply_chain, Some(true));
        assert_eq!(args.mfa, None);
    }
}
