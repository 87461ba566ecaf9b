//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex moved by (dx, dy)
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.position[0] + dx, self.position[1] + dy, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// 8-bit RGB to a normalized color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const BLACK: [f32; 4] = rgb(0, 0, 0);
    pub const BLUE: [f32; 4] = rgb(0, 0, 255);
    pub const LIGHT_BLUE: [f32; 4] = rgb(173, 216, 230);
    pub const ORANGE: [f32; 4] = rgb(255, 165, 0);
    pub const DARK_ORANGE: [f32; 4] = rgb(255, 140, 0);
    pub const GRAY: [f32; 4] = rgb(128, 128, 128);

    pub const BACKGROUND: [f32; 4] = WHITE;
    pub const CLOUD: [f32; 4] = GRAY;
    pub const RAINDROP: [f32; 4] = LIGHT_BLUE;
    pub const WATER: [f32; 4] = LIGHT_BLUE;
    pub const HUD_TEXT: [f32; 4] = BLACK;
    pub const HUD_WATER: [f32; 4] = BLUE;
}
