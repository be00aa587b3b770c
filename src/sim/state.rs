//! Game state and core simulation types
//!
//! Everything the engine mutates per tick lives here. Rendering reads it
//! through [`FrameSnapshot`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::DifficultyConfig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::{Layout, rgb};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start, or after a finished run was acknowledged
    #[default]
    Inactive,
    /// Ticking
    Active,
    /// A fatal collision ended the run; state is frozen at the moment of death
    Terminated,
}

/// Visual/rule theme, rotates every few points unless locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Plains,
    Desert,
    Nether,
    Ocean,
}

/// Biome palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeTheme {
    pub background: [f32; 4],
    pub ground: [f32; 4],
    pub ground_dark: [f32; 4],
    pub pipe: [f32; 4],
    pub pipe_border: [f32; 4],
}

impl Biome {
    /// Rotation order
    pub const ALL: [Biome; 4] = [Biome::Plains, Biome::Desert, Biome::Nether, Biome::Ocean];

    /// Next biome in the fixed cycle (wraps)
    pub fn next(self) -> Biome {
        let idx = Self::ALL.iter().position(|b| *b == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Biome::Plains => "PLAINS",
            Biome::Desert => "DESERT",
            Biome::Nether => "NETHER",
            Biome::Ocean => "OCEAN",
        }
    }

    pub fn theme(&self) -> BiomeTheme {
        match self {
            Biome::Plains => BiomeTheme {
                background: rgb(0x70c5ce),
                ground: rgb(0x7cfc00),
                ground_dark: rgb(0x55a630),
                pipe: rgb(0x2ecc71),
                pipe_border: rgb(0x27ae60),
            },
            Biome::Desert => BiomeTheme {
                background: rgb(0xf4a460),
                ground: rgb(0xedc9af),
                ground_dark: rgb(0xc2b280),
                pipe: rgb(0xf1c40f),
                pipe_border: rgb(0xd4ac0d),
            },
            Biome::Nether => BiomeTheme {
                background: rgb(0x4a0e0e),
                ground: rgb(0x8b0000),
                ground_dark: rgb(0x5c0000),
                pipe: rgb(0xe67e22),
                pipe_border: rgb(0xd35400),
            },
            Biome::Ocean => BiomeTheme {
                background: rgb(0x005f73),
                ground: rgb(0x00d2ff),
                ground_dark: rgb(0x0077be),
                pipe: rgb(0x3498db),
                pipe_border: rgb(0x2980b9),
            },
        }
    }
}

impl std::str::FromStr for Biome {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plains" => Ok(Biome::Plains),
            "desert" => Ok(Biome::Desert),
            "nether" => Ok(Biome::Nether),
            "ocean" => Ok(Biome::Ocean),
            _ => Err(ConfigError::UnknownBiome(s.to_string())),
        }
    }
}

/// Cosmetic choice that also feeds the modifier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Skin {
    #[default]
    Creeper,
    Chicken,
    Duck,
}

/// Skin palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinColors {
    pub body: [f32; 4],
    pub head: [f32; 4],
    pub detail: [f32; 4],
}

impl Skin {
    pub const ALL: [Skin; 3] = [Skin::Creeper, Skin::Chicken, Skin::Duck];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Creeper => "CREEPER",
            Skin::Chicken => "CHICKEN",
            Skin::Duck => "DUCK",
        }
    }

    pub fn colors(&self) -> SkinColors {
        match self {
            Skin::Creeper => SkinColors {
                body: rgb(0x45a049),
                head: rgb(0x000000),
                detail: rgb(0x000000),
            },
            Skin::Chicken => SkinColors {
                body: rgb(0xffffff),
                head: rgb(0xffffff),
                detail: rgb(0xff0000),
            },
            Skin::Duck => SkinColors {
                body: rgb(0xffff00),
                head: rgb(0xffff00),
                detail: rgb(0xffa500),
            },
        }
    }
}

impl std::str::FromStr for Skin {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "creeper" => Ok(Skin::Creeper),
            "chicken" => Ok(Skin::Chicken),
            "duck" => Ok(Skin::Duck),
            _ => Err(ConfigError::UnknownSkin(s.to_string())),
        }
    }
}

/// The controlled entity. Only vertical motion; x is fixed at [`BIRD_X`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub y: f32,
    pub vel: f32,
}

impl Bird {
    pub fn new(playfield_height: f32) -> Self {
        Self {
            y: playfield_height / 2.0,
            vel: 0.0,
        }
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + BIRD_SIZE
    }
}

/// A barrier pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the top barrier; the gap starts here
    pub top: f32,
    /// Already scored
    pub passed: bool,
    /// Destroyed by an explosion; skipped by collision and rendering
    pub exploded: bool,
}

impl Obstacle {
    pub fn new(x: f32, top: f32) -> Self {
        Self {
            x,
            top,
            passed: false,
            exploded: false,
        }
    }

    /// Top of the bottom barrier
    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.top + gap_height
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Center of the gap, where explosions originate
    pub fn gap_center(&self, gap_height: f32) -> Vec2 {
        Vec2::new(self.x + PIPE_WIDTH / 2.0, self.top + gap_height / 2.0)
    }
}

/// A visual-only particle (jump trail or explosion debris)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: [f32; 4],
    /// Remaining ticks
    pub lifetime: u32,
}

/// Per-run switches chosen in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunOptions {
    /// Biome never rotates during the run
    pub biome_locked: bool,
    /// Reactive autopilot (only honoured for skins that offer one)
    pub autopilot: bool,
}

/// Score, biome and tick counter for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    pub biome: Biome,
    pub frame_counter: u64,
}

impl RunState {
    pub fn new(biome: Biome) -> Self {
        Self {
            score: 0,
            biome,
            frame_counter: 0,
        }
    }

    /// Boss window: derived from score, never stored
    #[inline]
    pub fn invincible(&self) -> bool {
        is_boss_window(self.score)
    }
}

/// True while `score` lies in the fixed boss interval
#[inline]
pub fn is_boss_window(score: u32) -> bool {
    (BOSS_WINDOW_START..BOSS_WINDOW_END).contains(&score)
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState {
    pub layout: Layout,
    pub config: DifficultyConfig,
    pub skin: Skin,
    pub options: RunOptions,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Ordered by x (append at the right edge, shift left)
    pub obstacles: Vec<Obstacle>,
    pub jump_particles: Vec<Particle>,
    pub explosion_particles: Vec<Particle>,
    pub run: RunState,
    /// Seed of the current run, for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create an inactive state
    pub fn new(layout: Layout, seed: u64) -> Self {
        Self {
            layout,
            config: DifficultyConfig::EASY,
            skin: Skin::default(),
            options: RunOptions::default(),
            phase: GamePhase::Inactive,
            bird: Bird::new(layout.height()),
            obstacles: Vec::new(),
            jump_particles: Vec::new(),
            explosion_particles: Vec::new(),
            run: RunState::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset every per-run field and enter Active
    pub fn reset(
        &mut self,
        config: DifficultyConfig,
        skin: Skin,
        biome: Biome,
        options: RunOptions,
        seed: u64,
    ) {
        self.config = config;
        self.skin = skin;
        self.options = options;
        self.bird = Bird::new(self.layout.height());
        self.obstacles.clear();
        self.jump_particles.clear();
        self.explosion_particles.clear();
        self.run = RunState::new(biome);
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.phase = GamePhase::Active;
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            layout: self.layout,
            phase: self.phase,
            skin: self.skin,
            options: self.options,
            gap_height: self.config.gap_height,
            bird: self.bird,
            obstacles: self.obstacles.clone(),
            jump_particles: self.jump_particles.clone(),
            explosion_particles: self.explosion_particles.clone(),
            score: self.run.score,
            biome: self.run.biome,
            invincible: self.run.invincible(),
            frame_counter: self.run.frame_counter,
        }
    }
}

/// Frame state handed to the external renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub layout: Layout,
    pub phase: GamePhase,
    pub skin: Skin,
    pub options: RunOptions,
    pub gap_height: f32,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub jump_particles: Vec<Particle>,
    pub explosion_particles: Vec<Particle>,
    pub score: u32,
    pub biome: Biome,
    pub invincible: bool,
    pub frame_counter: u64,
}
