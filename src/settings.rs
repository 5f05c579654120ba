//! Persisted user settings: the key-value store behind the configuration.
//!
//! The core never touches this file: the host loads [`Settings`] at startup,
//! hands the [`Configuration`] to the generator, and writes changes back
//! through [`SettingsStore::update`].

use calcu_core::{Configuration, HintState};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Which hint views the learner wants to step through.
///
/// All views are enabled by default. Disabled views are skipped when cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintPreferences {
    /// Reveal the answer.
    pub show_answer: bool,
    /// Column working (carries or borrows).
    pub standard: bool,
    /// Partial sums for addition.
    pub multi_layer: bool,
}

impl HintPreferences {
    /// Returns true if the given state may be shown. `None` is always allowed.
    #[instrument]
    pub fn allows(self, state: HintState) -> bool {
        match state {
            HintState::None => true,
            HintState::ShowAnswer => self.show_answer,
            HintState::Standard => self.standard,
            HintState::MultiLayer => self.multi_layer,
        }
    }
}

impl Default for HintPreferences {
    fn default() -> Self {
        Self {
            show_answer: true,
            standard: true,
            multi_layer: true,
        }
    }
}

/// Everything the user can configure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Problem generation parameters.
    pub generation: Configuration,
    /// Hint view toggles.
    pub hints: HintPreferences,
}

/// Settings persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// TOML-backed settings store.
///
/// Every successful [`update`](Self::update) that changes something is saved
/// immediately and bumps [`revision`](Self::revision), so observers can poll
/// for changes.
#[derive(Debug, Clone, Getters)]
pub struct SettingsStore {
    /// File the settings are read from and written to.
    path: PathBuf,
    /// Current settings.
    settings: Settings,
    /// Number of saved changes since the store was opened.
    revision: u64,
}

impl SettingsStore {
    /// Opens the store at `path`, using defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();

        let settings = if path.exists() {
            debug!("Loading settings from file");
            let content = std::fs::read_to_string(&path)
                .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
            toml::from_str(&content)
                .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?
        } else {
            info!("No settings file, using defaults");
            Settings::default()
        };

        Ok(Self {
            path,
            settings,
            revision: 0,
        })
    }

    /// Writes the current settings to disk.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::new(format!("Failed to create settings directory: {}", e))
            })?;
        }

        std::fs::write(&self.path, content)
            .map_err(|e| SettingsError::new(format!("Failed to write settings file: {}", e)))?;
        info!("Settings saved");
        Ok(())
    }

    /// Applies `change` and saves if anything differs.
    ///
    /// Returns whether the settings changed. On a failed save the in-memory
    /// settings are left as they were.
    #[instrument(skip(self, change), fields(revision = self.revision))]
    pub fn update<F>(&mut self, change: F) -> Result<bool, SettingsError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = self.settings.clone();
        change(&mut next);
        if next == self.settings {
            debug!("Settings unchanged");
            return Ok(false);
        }

        let previous = std::mem::replace(&mut self.settings, next);
        if let Err(e) = self.save() {
            self.settings = previous;
            return Err(e);
        }
        self.revision += 1;
        Ok(true)
    }
}

/// Parses a digit count typed into a text field.
///
/// Text that is not a whole number keeps `last_valid`. Out-of-range values are
/// accepted here; the generator coerces them.
#[instrument]
pub fn digits_from_text(text: &str, last_valid: u32) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(digits) => digits,
        Err(_) => {
            warn!(text, last_valid, "Invalid digit count, keeping last valid value");
            last_valid
        }
    }
}
