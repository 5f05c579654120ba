//! Command-line interface for calcu_later.

use calcu_later::{HintState, Operator};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Settings file used when neither `--settings` nor `CALCU_SETTINGS` is given.
pub const DEFAULT_SETTINGS_PATH: &str = "calcu_later.toml";

/// Calcu Later - arithmetic practice with carry and borrow hints
#[derive(Parser, Debug)]
#[command(name = "calcu_later")]
#[command(about = "Arithmetic practice problems with step-by-step hints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to $CALCU_SETTINGS, then calcu_later.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate problems from the saved settings, one JSON object per line
    Generate {
        /// Number of problems
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show a hint view for a given problem as JSON
    Hint {
        /// First operand
        operand1: u64,

        /// Operator: + - * / (also x, ×, ÷)
        #[arg(allow_hyphen_values = true)]
        operator: Operator,

        /// Second operand
        operand2: u64,

        /// Which hint view to show
        #[arg(long, value_enum, default_value = "standard")]
        view: ViewArg,
    },

    /// Show or change saved settings
    Settings {
        /// Settings action
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Practice interactively: n = new problem, h = next hint, q = quit
    Practice {
        /// Seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the current settings as TOML
    Show,

    /// Change settings; invalid digit counts keep the saved value
    Set {
        /// Digits of the first operand
        #[arg(long)]
        digits1: Option<String>,

        /// Digits of the second operand
        #[arg(long)]
        digits2: Option<String>,

        /// Allow negative subtraction results
        #[arg(long)]
        allow_negative: Option<bool>,

        /// Enabled operations, comma separated (e.g. "+,-,*")
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        operations: Option<Vec<Operator>>,

        /// Enable the show-answer hint level
        #[arg(long)]
        hint_answer: Option<bool>,

        /// Enable the standard hint level
        #[arg(long)]
        hint_standard: Option<bool>,

        /// Enable the multi-layer hint level
        #[arg(long)]
        hint_multi_layer: Option<bool>,
    },
}

/// Hint view selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// The answer only
    Answer,
    /// Carries or borrows
    Standard,
    /// Partial sums (addition)
    MultiLayer,
}

impl From<ViewArg> for HintState {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Answer => HintState::ShowAnswer,
            ViewArg::Standard => HintState::Standard,
            ViewArg::MultiLayer => HintState::MultiLayer,
        }
    }
}
