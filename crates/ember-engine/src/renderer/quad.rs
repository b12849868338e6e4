use bytemuck::{Pod, Zeroable};

/// Vertex layout shared by the sprite quad and meshes:
/// position, normal, texture coordinates. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal: [0.0, 0.0, 0.0],
            uv,
        }
    }
}

/// Unit quad centered on the origin; sprites scale it by texture size.
pub const SPRITE_QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new([-0.5, 0.5, 0.0], [0.0, 0.0]),  // top left
    Vertex::new([0.5, 0.5, 0.0], [1.0, 0.0]),   // top right
    Vertex::new([0.5, -0.5, 0.0], [1.0, 1.0]),  // bottom right
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0]), // bottom left
];

pub const SPRITE_QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_8_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), Vertex::STRIDE_BYTES);
    }

    #[test]
    fn quad_bytes_match_stride() {
        let bytes: &[u8] = bytemuck::cast_slice(&SPRITE_QUAD_VERTICES);
        assert_eq!(bytes.len(), 4 * Vertex::STRIDE_BYTES);
        assert!(SPRITE_QUAD_INDICES.iter().all(|&i| (i as usize) < SPRITE_QUAD_VERTICES.len()));
    }
}
