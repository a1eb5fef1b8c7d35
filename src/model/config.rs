//! Configuration for a simulation run.
//!
//! Maps to `config.toml`. Every field has a default, so a partial file only
//! overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [automaton]
//! rule = 110
//! size = 200
//! boundary = "periodic"
//!
//! [seed]
//! initial = "single"
//!
//! [display]
//! generations = 100
//! delay_ms = 0
//! ```

use anyhow::{Context, Result};
use elementary_core::{RowGlyphs, MIN_SIZE};
use elementary_data::{BoundaryMode, InitialState, RuleCode};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AutomatonConfig {
    pub rule: RuleCode,
    pub size: usize,
    pub boundary: BoundaryMode,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            rule: RuleCode::new(54),
            size: 640,
            boundary: BoundaryMode::Cyclic,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    pub initial: InitialState,
    pub seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            initial: InitialState::Random,
            seed: 190,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Generations to run; 0 means until stopped (headless) or until the
    /// screen is full (terminal UI).
    pub generations: u64,
    pub delay_ms: u64,
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Scroll the terminal view instead of stopping when it fills up.
    pub scroll: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            generations: 0,
            delay_ms: 5,
            alive_glyph: '*',
            dead_glyph: ' ',
            scroll: false,
        }
    }
}

impl DisplayConfig {
    pub fn glyphs(&self) -> RowGlyphs {
        RowGlyphs::new(self.alive_glyph, self.dead_glyph)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub automaton: AutomatonConfig,
    pub seed: SeedConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("serializing configuration")
    }

    /// Loads `path`, writing the defaults there first if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let default = Self::default();
            match default.to_toml().and_then(|s| {
                std::fs::write(path, s).with_context(|| format!("writing {}", path.display()))
            }) {
                Ok(()) => tracing::info!(path = %path.display(), "Wrote default configuration"),
                Err(e) => tracing::warn!("Could not write default configuration: {e:#}"),
            }
            return Ok(default);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("loading {}", path.display()))
    }

    /// Checks the values serde cannot express as types.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.automaton.size >= MIN_SIZE,
            "Automaton size must be at least {MIN_SIZE} (got {})",
            self.automaton.size
        );
        anyhow::ensure!(
            self.automaton.size <= 1_000_000,
            "Automaton size too large (max 1000000)"
        );
        anyhow::ensure!(
            self.display.alive_glyph != self.display.dead_glyph,
            "Alive and dead glyphs must differ"
        );
        anyhow::ensure!(
            self.display.delay_ms <= 60_000,
            "Delay too large (max 60000 ms)"
        );
        Ok(())
    }
}
