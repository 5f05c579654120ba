//! Calcu Later - Unified CLI
//!
//! Generates practice problems, derives their hints, and manages settings.

mod cli;

use anyhow::{Context, Result};
use calcu_later::{
    HintView, PracticeSession, Problem, Settings, SettingsStore, digits_from_text, generate,
};
use clap::Parser;
use cli::{Cli, Command, DEFAULT_SETTINGS_PATH, SettingsAction};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings_path = resolve_settings_path(cli.settings);

    match cli.command {
        Command::Generate { count, seed } => run_generate(&settings_path, count, seed),
        Command::Hint {
            operand1,
            operator,
            operand2,
            view,
        } => {
            let problem = Problem::new(operand1, operand2, operator)?;
            print_json(&HintView::derive(&problem, view.into()))
        }
        Command::Settings { action } => run_settings(&settings_path, action),
        Command::Practice { seed } => run_practice(&settings_path, seed),
    }
}

/// Picks the settings file: flag, then `CALCU_SETTINGS`, then the default.
fn resolve_settings_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("CALCU_SETTINGS").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Generate problems from saved settings
#[instrument]
fn run_generate(settings_path: &Path, count: usize, seed: Option<u64>) -> Result<()> {
    let store = SettingsStore::load(settings_path)?;
    let mut rng = rng_from(seed);

    for _ in 0..count {
        let problem = generate(&store.settings().generation, &mut rng)?;
        print_json(&problem)?;
    }
    Ok(())
}

/// Show or change settings
#[instrument]
fn run_settings(settings_path: &Path, action: SettingsAction) -> Result<()> {
    let mut store = SettingsStore::load(settings_path)?;

    match action {
        SettingsAction::Show => {
            print!("{}", toml::to_string_pretty(store.settings())?);
        }
        SettingsAction::Set {
            digits1,
            digits2,
            allow_negative,
            operations,
            hint_answer,
            hint_standard,
            hint_multi_layer,
        } => {
            let changed = store.update(|settings: &mut Settings| {
                let generation = &mut settings.generation;
                if let Some(text) = digits1 {
                    let digits = digits_from_text(&text, *generation.digits_operand1());
                    *generation = generation.clone().with_digits_operand1(digits);
                }
                if let Some(text) = digits2 {
                    let digits = digits_from_text(&text, *generation.digits_operand2());
                    *generation = generation.clone().with_digits_operand2(digits);
                }
                if let Some(allow) = allow_negative {
                    *generation = generation.clone().with_allow_negative_results(allow);
                }
                if let Some(ops) = operations {
                    *generation = generation
                        .clone()
                        .with_enabled_operations(ops.into_iter().collect());
                }
                if let Some(enabled) = hint_answer {
                    settings.hints.show_answer = enabled;
                }
                if let Some(enabled) = hint_standard {
                    settings.hints.standard = enabled;
                }
                if let Some(enabled) = hint_multi_layer {
                    settings.hints.multi_layer = enabled;
                }
            })?;
            info!(changed, "Settings update applied");
            print!("{}", toml::to_string_pretty(store.settings())?);
        }
    }
    Ok(())
}

/// Run an interactive practice session over stdin
#[instrument]
fn run_practice(settings_path: &Path, seed: Option<u64>) -> Result<()> {
    let store = SettingsStore::load(settings_path)?;
    let mut session = PracticeSession::new(store.settings(), rng_from(seed))?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{} = ?", session.problem())?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        debug!(input = %line.trim(), "Practice command");
        match line.trim() {
            "n" => {
                let problem = *session.new_problem()?;
                writeln!(stdout, "{} = ?", problem)?;
            }
            "h" => {
                session.cycle_hint();
                writeln!(stdout, "{}", serde_json::to_string(&session.hint_view())?)?;
            }
            "q" => break,
            "" => {}
            other => writeln!(stdout, "Unknown command {:?} (n = new, h = hint, q = quit)", other)?,
        }
    }
    Ok(())
}
