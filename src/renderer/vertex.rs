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

/// Convert an 8-bit sRGB triple to a float color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(255, 235, 245); // Blush
    pub const UI_BAR: [f32; 4] = rgb(255, 190, 210); // Soft pink
    pub const BUBBLE_MAIN: [f32; 4] = rgb(255, 135, 170); // Candy pink
    pub const BUBBLE_ALT: [f32; 4] = rgb(255, 248, 250); // Cream
    pub const TEXT: [f32; 4] = rgb(40, 40, 40); // Charcoal
    pub const SUMMARY_OVERLAY: [f32; 4] = [1.0, 200.0 / 255.0, 220.0 / 255.0, 0.75];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = Vertex::new(1.0, 2.0, colors::TEXT);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(255, 0, 0), [1.0, 0.0, 0.0, 1.0]);
    }
}
