use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use crate::game::GameMode;

const WINNER_PLACEHOLDER: &str = "{player}";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub seed: Option<u64>,
    #[serde(default)]
    pub messages: MessageConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MessageConfig {
    pub winner: String,
    pub draw: String,
}

impl MessageConfig {
    pub fn winner_text(&self, player: char) -> String {
        self.winner.replace(WINNER_PLACEHOLDER, &player.to_string())
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.messages.validate()
    }
}

impl Validate for MessageConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.winner.contains(WINNER_PLACEHOLDER) {
            return Err(format!(
                "winner message must contain the {} placeholder",
                WINNER_PLACEHOLDER
            ));
        }
        if self.draw.is_empty() {
            return Err("draw message must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayers,
            seed: None,
            messages: MessageConfig::default(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            winner: "{player} wins!".to_string(),
            draw: "It's a draw".to_string(),
        }
    }
}

pub fn load_config(file_path: &str) -> Result<GameConfig, String> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(GameConfig::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: GameConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config(file_path: &str, config: &GameConfig) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(file_path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
