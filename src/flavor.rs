//! Flavor text boundary
//!
//! Death messages and biome lore come from an external text service. The
//! host calls it in response to engine events, never from inside a tick.
//! [`StaticFlavor`] supplies the offline lines used when the service is
//! unavailable.

use crate::consts::{BOSS_WINDOW_END, BOSS_WINDOW_START};
use crate::sim::{Biome, FrameSnapshot, Skin, resolve};

/// Source of flavor strings
pub trait FlavorText {
    fn death_message(&self, score: u32) -> String;
    fn biome_lore(&self, biome: Biome) -> String;
}

/// Fixed offline lines
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticFlavor;

impl FlavorText for StaticFlavor {
    fn death_message(&self, score: u32) -> String {
        if score == 0 {
            "You fell out of the world!".to_string()
        } else {
            "You hit the ground too hard!".to_string()
        }
    }

    fn biome_lore(&self, biome: Biome) -> String {
        format!("Welcome to the {}!", biome.as_str())
    }
}

/// Prompt sent to the text service for a death message
pub fn death_prompt(score: u32) -> String {
    format!(
        "Generate a short, funny Minecraft-style death message for a player who died in a \
         Flappy Bird game with a score of {}. Keep it under 60 characters.",
        score
    )
}

/// Prompt sent to the text service for biome lore
pub fn lore_prompt(biome: Biome) -> String {
    format!(
        "Write a 1-sentence funny Minecraft lore about the {} biome for a bird flying through it.",
        biome.as_str()
    )
}

/// Fixed line shown when the boss window opens or closes
pub fn boss_announcement(score: u32) -> Option<&'static str> {
    match score {
        BOSS_WINDOW_START => Some("HEROBRINE HAS JOINED THE GAME. YOU ARE UNSTOPPABLE."),
        BOSS_WINDOW_END => Some("HEROBRINE HAS LEFT THE GAME. GOOD LUCK."),
        _ => None,
    }
}

/// Whether a biome change should fetch new lore (not during the boss window)
pub fn wants_lore(snapshot: &FrameSnapshot) -> bool {
    !snapshot.invincible
}

/// HUD banner describing the active modifier, if any
pub fn status_banner(snapshot: &FrameSnapshot) -> Option<&'static str> {
    let policy = resolve(snapshot.skin, snapshot.biome, snapshot.score);
    if policy.boss_invincible {
        Some("HEROBRINE INVINCIBILITY ACTIVE")
    } else if policy.ceiling_floats && policy.ground_floats {
        Some("STEAK: GROUND/CEILING INVINCIBLE!")
    } else if policy.obstacle_pass_through {
        Some("CLIPPING & FLOATING ACTIVE")
    } else if snapshot.skin == Skin::Chicken && snapshot.options.autopilot {
        Some("CHICKEN AUTOPILOT ENGAGED")
    } else if snapshot.options.biome_locked {
        Some("BIOME LOCKED")
    } else if policy.explodes_obstacles {
        Some("CREEPER EXPLOSION ACTIVE")
    } else {
        None
    }
}
