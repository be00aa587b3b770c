//! Best score
//!
//! A single numeric personal best, persisted to LocalStorage on the web,
//! plus the last few final scores (kept in memory only).

use std::collections::VecDeque;

/// Number of recent final scores kept for display
pub const HISTORY_LEN: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct BestScore {
    best: u32,
    history: VecDeque<u32>,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy-craft-highscore";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best,
            history: VecDeque::new(),
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Most recent first
    pub fn history(&self) -> impl Iterator<Item = u32> + '_ {
        self.history.iter().copied()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, final_score: u32) -> bool {
        self.history.push_front(final_score);
        self.history.truncate(HISTORY_LEN);
        if final_score > self.best {
            self.best = final_score;
            true
        } else {
            false
        }
    }

    /// Parse the stored value; anything unparsable counts as no best yet
    pub fn parse_stored(raw: &str) -> u32 {
        raw.trim().parse().unwrap_or(0)
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                let best = Self::parse_stored(&raw);
                log::info!("Loaded best score {}", best);
                return Self::with_best(best);
            }
        }

        log::info!("No best score found, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.best.to_string());
            log::info!("Best score saved ({})", self.best);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Brag text for the share button
pub fn share_text(score: u32, best: u32) -> String {
    format!(
        "⛏️ I just scored {} in Flappy Craft! 🐦\nMy personal best is {}. Can you beat me?\n#FlappyCraft #Minecraft",
        score, best
    )
}
