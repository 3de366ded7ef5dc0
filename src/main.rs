//! NIS2 TUI - Main entry point
//!
//! Launches the interactive questionnaire or runs one of the headless
//! commands.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use strum::IntoEnumIterator;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use nis2tui::app::App;
use nis2tui::cli::{AssessArgs, Cli, Commands};
use nis2tui::config_file::{AnswersFile, AssessmentReport};
use nis2tui::report;
use nis2tui::scoring::{self, Tier};
use nis2tui::tiers;

/// Initialize tracing.
///
/// RUST_LOG overrides the default `warn` level. Logs go to `log_file` when
/// given; otherwise the TUI discards them and headless commands use stderr.
fn init_logging(log_file: Option<&Path>, tui: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // Anything written to the terminal would corrupt the alternate screen
        None if tui => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let tui = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logging(cli.log_file.as_deref(), tui)?;
    info!("NIS2 TUI starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Run { save }) => {
            info!("Running questionnaire with save path: {:?}", save);
            run_tui(save)?;
        }
        Some(Commands::Assess(args)) => run_assess(&args)?,
        Some(Commands::Validate { file }) => run_validate(&file),
        Some(Commands::Tiers { json }) => run_tiers(json)?,
        None => {
            info!("No command specified, launching questionnaire");
            run_tui(None)?;
        }
    }

    Ok(())
}

/// Run the interactive questionnaire
fn run_tui(save: Option<PathBuf>) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let result = (|| -> anyhow::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        let mut app = App::new(save);
        app.run(&mut terminal)?;
        Ok(())
    })();

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

/// Assess answers without the TUI
fn run_assess(args: &AssessArgs) -> anyhow::Result<()> {
    let (answers, assessment) = match args.run_wizard() {
        Ok(result) => result,
        Err(e) => {
            error!("Assessment failed: {:#}", e);
            eprintln!("✗ {:#}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", AssessmentReport::new(answers, assessment).to_json()?);
    } else {
        print!("{}", report::render_text(&assessment));
    }
    Ok(())
}

/// Validate an answers file
fn run_validate(file: &Path) {
    info!("Validating answers file: {:?}", file);
    let result = AnswersFile::load_from_file(file).and_then(|answers| {
        answers.validate()?;
        Ok(scoring::assess(&answers.answers)?)
    });

    match result {
        Ok(assessment) => {
            info!("Answers file validation successful");
            println!(
                "✓ Answers file is valid: {:?} (tier {}, {})",
                file,
                assessment.tier.level(),
                assessment.tier
            );
        }
        Err(e) => {
            error!("Answers file validation failed: {:#}", e);
            eprintln!("✗ Answers file validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Print the tier reference text
fn run_tiers(json: bool) -> anyhow::Result<()> {
    if json {
        let bundle: Vec<_> = Tier::iter()
            .map(|tier| serde_json::json!({ "tier": tier, "profile": tiers::profile(tier) }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&bundle).context("Failed to serialize tiers")?
        );
    } else {
        print!("{}", report::render_tiers());
    }
    Ok(())
}
