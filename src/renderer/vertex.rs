//! Quad instance type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Axis-aligned colored rectangle, optionally rotated about its center.
/// Laid out for direct upload as a GPU instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Quad {
    /// Top-left corner in playfield pixels
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// Radians, about the quad center
    pub rotation: f32,
}

impl Quad {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            size: [w, h],
            color,
            rotation: 0.0,
        }
    }

    /// Rotate as part of a larger sprite: the quad's center orbits `pivot`
    /// and the quad itself turns by the same angle
    pub fn rotated_about(self, rotation: f32, pivot: [f32; 2]) -> Self {
        let [w, h] = self.size;
        let dx = self.position[0] + w / 2.0 - pivot[0];
        let dy = self.position[1] + h / 2.0 - pivot[1];
        let (sin, cos) = rotation.sin_cos();
        let cx = pivot[0] + dx * cos - dy * sin;
        let cy = pivot[1] + dx * sin + dy * cos;
        Self {
            position: [cx - w / 2.0, cy - h / 2.0],
            rotation,
            ..self
        }
    }

    /// Same quad with its alpha scaled
    pub const fn faded(mut self, alpha: f32) -> Self {
        self.color[3] *= alpha;
        self
    }
}

/// Raw bytes of a quad list for buffer upload
pub fn as_bytes(quads: &[Quad]) -> &[u8] {
    bytemuck::cast_slice(quads)
}

/// Colors not tied to a biome or skin
pub mod colors {
    use crate::rgb;

    pub const SUN: [f32; 4] = rgb(0xffffff);
    pub const SUN_GLOW: [f32; 4] = [1.0, 1.0, 1.0, 0.2];
    pub const BOSS_SUN: [f32; 4] = rgb(0xff0000);
    pub const BOSS_SUN_GLOW: [f32; 4] = [1.0, 0.0, 0.0, 0.3];
    pub const BOSS_FLASH: [f32; 4] = rgb(0x111111);
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.1];
    pub const EYE: [f32; 4] = rgb(0x000000);
    pub const GLOW_EYE: [f32; 4] = rgb(0xffffff);
    pub const STEAK_BODY: [f32; 4] = rgb(0x8b4513);
    pub const STEAK_DETAIL: [f32; 4] = rgb(0xcd5c5c);
    pub const BAR_TRACK: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const BAR_PROGRESS: [f32; 4] = rgb(0x7cfc00);
    pub const BAR_ALMOST: [f32; 4] = rgb(0xffcc00);
    pub const BAR_BOSS: [f32; 4] = rgb(0xff0000);
}
