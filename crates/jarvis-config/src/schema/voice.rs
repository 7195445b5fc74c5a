//! Simulated voice capture configuration types.

use serde::{Deserialize, Serialize};

/// Voice capture settings.
///
/// Capture is simulated: the level meter shows random bar heights and the
/// capture ends with a fixed recognized phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Level meter refresh cadence (valid range: 10-1000).
    pub sample_interval_ms: u32,
    /// How long a capture runs before it stops on its own (valid range: 100-60000).
    pub capture_duration_ms: u32,
    /// Number of bars in the level meter (valid range: 1-64).
    pub bar_count: u32,
    /// Lowest bar height, inclusive.
    pub min_level: u32,
    /// Highest bar height, exclusive. Must be greater than `min_level` and at most 255.
    pub max_level: u32,
    /// Text placed in the draft when a capture completes.
    pub recognized_phrase: String,
    /// Fixed RNG seed for the level meter. Random when unset.
    pub seed: Option<u64>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 100,
            capture_duration_ms: 3000,
            bar_count: 15,
            min_level: 5,
            max_level: 35,
            recognized_phrase: "What is the weather like today?".into(),
            seed: None,
        }
    }
}
