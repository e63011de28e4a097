use crate::cli::savegame::load_game;
use crate::cli::session::Session;
use crate::game::{GameConfig, GameController};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "VOIDMATE_CONFIG_DIR";

/// How the board is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seconds each player has per turn; absent disables the clock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u64>,
    /// Square removals allowed per player; absent means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removals_per_player: Option<u32>,
    #[serde(default)]
    pub board_style: BoardStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_limit_secs: Some(60),
            removals_per_player: Some(3),
            board_style: BoardStyle::Unicode,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        ProjectDirs::from("dev", "voidmate", "voidmate")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Get the default config file path
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create_default() -> Result<Self> {
        let config_file = Self::default_config_file()?;

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            debug!("No configuration at {}, writing defaults", config_file.display());
            let config = Config::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    /// Load configuration, falling back to defaults if the file cannot be used
    pub fn load_or_default() -> Self {
        match Self::load_or_create_default() {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {:#}", e);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context("Failed to read configuration file")?;
        let config: Config =
            toml::from_str(&content).context("Failed to parse configuration file")?;
        Ok(config)
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_config_file()?)
    }

    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(parent) = config_file.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(config_file, content).context("Failed to write configuration file")?;

        Ok(())
    }

    /// Rules configuration handed to the game controller
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            removals_per_player: self.removals_per_player,
            turn_time_limit: self
                .time_limit_secs
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// Command-line overrides for a single game
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub time_limit_secs: Option<u64>,
    pub removals_per_player: Option<u32>,
    pub unlimited_removals: bool,
    pub ascii: bool,
    pub resume: Option<PathBuf>,
}

/// Main application state
pub struct App {
    /// Application configuration
    pub config: Config,
}

impl App {
    pub fn new() -> Result<Self> {
        let config =
            Config::load_or_create_default().context("Failed to initialize configuration")?;
        Ok(App { config })
    }

    pub fn with_config(config: Config) -> Self {
        App { config }
    }

    /// Configuration for one game: file values with command-line overrides applied
    pub fn effective_config(&self, options: &PlayOptions) -> Config {
        let mut config = self.config.clone();
        if let Some(secs) = options.time_limit_secs {
            config.time_limit_secs = Some(secs);
        }
        if options.unlimited_removals {
            config.removals_per_player = None;
        } else if let Some(removals) = options.removals_per_player {
            config.removals_per_player = Some(removals);
        }
        if options.ascii {
            config.board_style = BoardStyle::Ascii;
        }
        config
    }

    /// Play one game on this terminal
    pub async fn play(&self, options: PlayOptions) -> Result<()> {
        let config = self.effective_config(&options);
        let game_config = config.game_config();

        let controller = match &options.resume {
            Some(path) => {
                let state = load_game(path)?;
                info!(ply = state.ply(), "Resuming game from {}", path.display());
                GameController::with_state(state, game_config)
            }
            None => GameController::new(game_config),
        };

        if controller.state().is_game_over() {
            anyhow::bail!("That game has already finished");
        }

        Session::new(controller, config.board_style).run().await
    }
}
