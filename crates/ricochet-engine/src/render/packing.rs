//! CPU-side serialization of polygon vertices into GPU buffer layouts.

use bytemuck::{Pod, Zeroable};

use crate::coords::ColorRgba;
use crate::geometry::Vertex;

// ── vertex layout ─────────────────────────────────────────────────────────

/// Tightly packed vertex as the shader sees it.
///
/// `position.z` is a constant 0 pad; the geometry is strictly 2D.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Serializes `vertices` in order into `out`, reusing its allocation.
///
/// Vertices without a color get `fill`.
pub fn pack_vertices(vertices: &[Vertex], fill: ColorRgba, out: &mut Vec<GpuVertex>) {
    out.clear();
    out.extend(vertices.iter().map(|v| GpuVertex {
        position: [v.position.x, v.position.y, 0.0],
        color: v.color.unwrap_or(fill).to_array(),
    }));
}

// ── triangulation ─────────────────────────────────────────────────────────

/// Triangle-list indices for a convex polygon with `n` vertices, as a fan
/// around vertex 0: `(0, 1, 2), (0, 2, 3), ...`.
///
/// Winding follows the vertex order. Returns nothing for `n < 3`, or when
/// some vertex index would not fit in 16 bits.
pub fn fan_indices(n: usize) -> Vec<u16> {
    if n < 3 || n > MAX_FAN_VERTICES {
        return Vec::new();
    }
    (1..n - 1)
        .flat_map(|i| [0, i as u16, (i + 1) as u16])
        .collect()
}

/// Largest vertex count whose indices all fit in a `u16`.
pub const MAX_FAN_VERTICES: usize = u16::MAX as usize + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 28);
        assert_eq!(GpuVertex::layout().array_stride, 28);
    }

    #[test]
    fn pack_keeps_order_and_pads_z() {
        let verts = [Vertex::new(-0.1, -0.1), Vertex::new(0.1, -0.1), Vertex::new(0.0, 0.1)];
        let mut out = Vec::new();
        pack_vertices(&verts, ColorRgba::purple(), &mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].position, [-0.1, -0.1, 0.0]);
        assert_eq!(out[1].position, [0.1, -0.1, 0.0]);
        assert_eq!(out[2].position, [0.0, 0.1, 0.0]);
        assert!(out.iter().all(|v| v.color == ColorRgba::purple().to_array()));
    }

    #[test]
    fn pack_uses_vertex_color_when_present() {
        let red = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
        let verts = [Vertex::colored(0.0, 0.0, red), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)];
        let mut out = Vec::new();
        pack_vertices(&verts, ColorRgba::white(), &mut out);
        assert_eq!(out[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(out[1].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn pack_reuses_buffer() {
        let verts = [Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)];
        let mut out = vec![GpuVertex::zeroed(); 10];
        pack_vertices(&verts, ColorRgba::white(), &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn packed_bytes_match_layout() {
        let verts = [Vertex::new(0.5, -0.5), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)];
        let mut out = Vec::new();
        pack_vertices(&verts, ColorRgba::black(), &mut out);
        let bytes: &[u8] = bytemuck::cast_slice(&out);
        assert_eq!(bytes.len(), 3 * 28);
        assert_eq!(&bytes[0..4], &0.5f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &(-0.5f32).to_ne_bytes());
    }

    #[test]
    fn triangle_fan_is_single_triangle() {
        assert_eq!(fan_indices(3), vec![0, 1, 2]);
    }

    #[test]
    fn pentagon_fan() {
        assert_eq!(fan_indices(5), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn largest_fan_ends_at_last_16_bit_index() {
        let idx = fan_indices(MAX_FAN_VERTICES);
        assert_eq!(idx.len(), (MAX_FAN_VERTICES - 2) * 3);
        assert_eq!(&idx[idx.len() - 3..], &[0, u16::MAX - 1, u16::MAX]);
    }

    #[test]
    fn fan_too_large_for_16_bit_indices_is_empty() {
        assert!(fan_indices(MAX_FAN_VERTICES + 1).is_empty());
        assert!(fan_indices(200_000).is_empty());
    }

    #[test]
    fn degenerate_fan_is_empty() {
        assert!(fan_indices(0).is_empty());
        assert!(fan_indices(2).is_empty());
    }
}
