use crate::game::GameState;
use anyhow::{Context, Result};
use std::path::Path;

/// Write the game state as pretty-printed JSON
pub fn save_game(path: &Path, state: &GameState) -> Result<()> {
    let content = serde_json::to_string_pretty(state).context("Failed to serialize game")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write saved game: {}", path.display()))?;
    Ok(())
}

pub fn load_game(path: &Path) -> Result<GameState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read saved game: {}", path.display()))?;
    let state: GameState = serde_json::from_str(&content)
        .with_context(|| format!("Saved game is corrupted: {}", path.display()))?;
    state
        .check_consistency()
        .with_context(|| format!("Saved game is inconsistent: {}", path.display()))?;
    Ok(state)
}
