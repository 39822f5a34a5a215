//! # Settings Module
//!
//! ## Purpose
//! Configuration of the game: the quantity ceiling, how challenge sets are generated and, for every
//! level, its recipe pool, the hidden side, the set size and the visibility flags handed to the front end.
//!
//! ## Architecture
//! - **GameConfig**: serializable configuration structure with defaults
//! - **LevelConfig**: one entry per level, index 0 is "Level 1"
//! - **GameSettings**: loads the configuration from a JSON file (game_config.json by default),
//!   falls back to defaults when the file is absent or unreadable, validates edits and saves on request
//!
//! ## Configuration Format
//! ```json
//! {
//!   "max_quantity": 8,
//!   "generation_mode": "Random",
//!   "levels": [
//!     { "recipes": ["water", "ammonia"], "hidden": "Before", "number_of_challenges": 5,
//!       "options": { "molecules_visible": true, "numbers_visible": true } }
//!   ]
//! }
//! ```
//!
//! ## Usage
//! ```rust, ignore
//! let mut settings = GameSettings::with_config_file("my_game.json");
//! settings.set_max_quantity(6)?;
//! settings.save_config()?;
//! ```
use crate::Game::challenge::PlayOptions;
use crate::Game::guess::GuessSide;
use crate::Stoichiometry::recipes::{ONE_PRODUCT_RECIPES, TWO_PRODUCT_RECIPES, recipe_ids};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "game_config.json";
pub const DEFAULT_MAX_QUANTITY: u32 = 8;
pub const DEFAULT_CHALLENGES_PER_LEVEL: usize = 5;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    InvalidValue(String),
}

/// how a challenge set is put together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    /// `number_of_challenges` random recipes, exactly one of them with zero products
    Random,
    /// every recipe of the level's pool once, in pool order; for checking content
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// recipe ids drawn from when generating challenges
    pub recipes: Vec<String>,
    pub hidden: GuessSide,
    pub number_of_challenges: usize,
    pub options: PlayOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_quantity: u32,
    pub generation_mode: GenerationMode,
    pub levels: Vec<LevelConfig>,
}

impl Default for GameConfig {
    /// Level 1 draws from both game pools and hides the reactants,
    /// Level 2 (one product) and Level 3 (two products) hide products and leftovers.
    fn default() -> Self {
        let one_product = recipe_ids(ONE_PRODUCT_RECIPES);
        let two_products = recipe_ids(TWO_PRODUCT_RECIPES);
        let all: Vec<String> = one_product.iter().chain(two_products.iter()).cloned().collect();
        Self {
            max_quantity: DEFAULT_MAX_QUANTITY,
            generation_mode: GenerationMode::Random,
            levels: vec![
                LevelConfig {
                    recipes: all,
                    hidden: GuessSide::Before,
                    number_of_challenges: DEFAULT_CHALLENGES_PER_LEVEL,
                    options: PlayOptions::default(),
                },
                LevelConfig {
                    recipes: one_product,
                    hidden: GuessSide::After,
                    number_of_challenges: DEFAULT_CHALLENGES_PER_LEVEL,
                    options: PlayOptions::default(),
                },
                LevelConfig {
                    recipes: two_products,
                    hidden: GuessSide::After,
                    number_of_challenges: DEFAULT_CHALLENGES_PER_LEVEL,
                    options: PlayOptions {
                        molecules_visible: false,
                        numbers_visible: true,
                    },
                },
            ],
        }
    }
}

/// Game configuration together with the file it is saved to.
#[derive(Debug, Clone)]
pub struct GameSettings {
    config: GameConfig,
    config_file: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
        }
    }
}

impl GameSettings {
    /// Loads game_config.json from the working directory, or defaults if there is none.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Loads the given file; a missing or broken file gives the default configuration.
    pub fn with_config_file(config_file: &str) -> Self {
        let config = match Self::load_config(config_file) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default game settings, {} could not be loaded: {}", config_file, e);
                GameConfig::default()
            }
        };
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    /// settings from an in-memory configuration
    pub fn from_config(config: GameConfig, config_file: &str) -> Result<Self, SettingsError> {
        validate(&config)?;
        Ok(Self {
            config,
            config_file: config_file.to_string(),
        })
    }

    /// Reads and validates `config_file`. A file that does not exist is not an error: defaults are returned.
    pub fn load_config(config_file: &str) -> Result<GameConfig, SettingsError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: GameConfig = serde_json::from_str(&content)?;
            validate(&config)?;
            info!("game settings loaded from {}", config_file);
            Ok(config)
        } else {
            Ok(GameConfig::default())
        }
    }

    pub fn save_config(&self) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        info!("game settings saved to {}", self.config_file);
        Ok(())
    }

    pub fn get_config(&self) -> &GameConfig {
        &self.config
    }
    pub fn config_file(&self) -> &str {
        &self.config_file
    }
    pub fn max_quantity(&self) -> u32 {
        self.config.max_quantity
    }
    pub fn generation_mode(&self) -> GenerationMode {
        self.config.generation_mode
    }
    pub fn number_of_levels(&self) -> usize {
        self.config.levels.len()
    }
    /// `level` is 0-based
    pub fn level(&self, level: usize) -> Option<&LevelConfig> {
        self.config.levels.get(level)
    }

    pub fn set_max_quantity(&mut self, max_quantity: u32) -> Result<(), SettingsError> {
        if max_quantity == 0 {
            return Err(SettingsError::InvalidValue(
                "max_quantity must be positive".to_string(),
            ));
        }
        self.config.max_quantity = max_quantity;
        Ok(())
    }

    pub fn set_generation_mode(&mut self, mode: GenerationMode) {
        self.config.generation_mode = mode;
    }

    pub fn set_level(&mut self, level: usize, level_config: LevelConfig) -> Result<(), SettingsError> {
        validate_level(level, &level_config)?;
        match self.config.levels.get_mut(level) {
            Some(slot) => {
                *slot = level_config;
                Ok(())
            }
            None => Err(SettingsError::InvalidValue(format!("no level {}", level))),
        }
    }

    pub fn reset_to_defaults(&mut self) {
        self.config = GameConfig::default();
    }
}

fn validate_level(level: usize, level_config: &LevelConfig) -> Result<(), SettingsError> {
    if level_config.recipes.is_empty() {
        return Err(SettingsError::InvalidValue(format!("level {} has no recipes", level)));
    }
    if level_config.number_of_challenges == 0 {
        return Err(SettingsError::InvalidValue(format!(
            "level {} has no challenges",
            level
        )));
    }
    Ok(())
}

fn validate(config: &GameConfig) -> Result<(), SettingsError> {
    if config.max_quantity == 0 {
        return Err(SettingsError::InvalidValue(
            "max_quantity must be positive".to_string(),
        ));
    }
    if config.levels.is_empty() {
        return Err(SettingsError::InvalidValue("no levels configured".to_string()));
    }
    for (level, level_config) in config.levels.iter().enumerate() {
        validate_level(level, level_config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_levels() {
        let settings = GameSettings::default();
        assert_eq!(settings.number_of_levels(), 3);
        assert_eq!(settings.max_quantity(), 8);
        let level1 = settings.level(0).unwrap();
        let level2 = settings.level(1).unwrap();
        let level3 = settings.level(2).unwrap();
        assert_eq!(level1.hidden, GuessSide::Before);
        assert_eq!(level2.hidden, GuessSide::After);
        assert_eq!(level3.hidden, GuessSide::After);
        assert_eq!(
            level1.recipes.len(),
            level2.recipes.len() + level3.recipes.len()
        );
        assert!(settings.level(3).is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = GameSettings::with_config_file("surely_not_here_game_config.json");
        assert_eq!(settings.get_config(), &GameConfig::default());
        assert_eq!(settings.config_file(), "surely_not_here_game_config.json");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_config = NamedTempFile::new().unwrap();
        let path = temp_config.path().to_str().unwrap();
        let mut settings = GameSettings::from_config(GameConfig::default(), path).unwrap();
        settings.set_max_quantity(6).unwrap();
        settings.set_generation_mode(GenerationMode::Exhaustive);
        settings.save_config().unwrap();

        let loaded = GameSettings::with_config_file(path);
        assert_eq!(loaded.max_quantity(), 6);
        assert_eq!(loaded.generation_mode(), GenerationMode::Exhaustive);
        assert_eq!(loaded.get_config(), settings.get_config());
    }

    #[test]
    fn test_broken_file() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config.write_all(b"{ not json").unwrap();
        let path = temp_config.path().to_str().unwrap();
        assert!(matches!(
            GameSettings::load_config(path),
            Err(SettingsError::Json(_))
        ));
        let settings = GameSettings::with_config_file(path);
        assert_eq!(settings.max_quantity(), DEFAULT_MAX_QUANTITY);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut settings = GameSettings::default();
        assert!(settings.set_max_quantity(0).is_err());
        let mut level = settings.level(1).unwrap().clone();
        level.recipes.clear();
        assert!(settings.set_level(1, level).is_err());
        let level = settings.level(1).unwrap().clone();
        assert!(settings.set_level(7, level.clone()).is_err());
        let mut config = GameConfig::default();
        config.max_quantity = 0;
        assert!(GameSettings::from_config(config, "x.json").is_err());
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut settings = GameSettings::default();
        settings.set_max_quantity(3).unwrap();
        settings.reset_to_defaults();
        assert_eq!(settings.max_quantity(), DEFAULT_MAX_QUANTITY);
    }
}
