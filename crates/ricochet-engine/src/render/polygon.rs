use crate::coords::ColorRgba;
use crate::engine::VertexSink;
use crate::geometry::Vertex;
use crate::render::{RenderCtx, RenderTarget};

use super::packing::{fan_indices, pack_vertices, GpuVertex, MAX_FAN_VERTICES};

/// Draws one convex polygon as a triangle list.
///
/// Acts as the engine's vertex sink: [`VertexSink::upload`] serializes the
/// tick's vertices into a CPU staging buffer that the renderer owns; `render`
/// copies the staged bytes into a dynamic GPU vertex buffer and issues the
/// draw. The engine never aliases GPU memory.
pub struct PolygonRenderer {
    fill: ColorRgba,

    staged: Vec<GpuVertex>,
    indices: Vec<u16>,
    dirty: bool,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    ibo_len: usize,
}

impl PolygonRenderer {
    pub fn new(fill: ColorRgba) -> Self {
        Self {
            fill,
            staged: Vec::new(),
            indices: Vec::new(),
            dirty: false,
            pipeline_format: None,
            pipeline: None,
            vbo: None,
            vbo_capacity: 0,
            ibo: None,
            ibo_len: 0,
        }
    }

    /// Vertices staged by the last upload, in upload order.
    pub fn staged(&self) -> &[GpuVertex] {
        &self.staged
    }

    /// Draws the last uploaded polygon into `target`. No-op before the first upload.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.staged.is_empty() || self.indices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);

        let Some(vbo) = self.vbo.as_ref() else { return };
        if self.dirty {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.staged));
            self.dirty = false;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ricochet polygon pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.indices.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ricochet polygon shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/polygon.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ricochet polygon pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ricochet polygon pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Either winding is accepted.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("polygon pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.staged.len() > self.vbo_capacity || self.vbo.is_none() {
            let cap = self.staged.len().next_power_of_two().max(4);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("ricochet polygon vbo"),
                size: (cap * std::mem::size_of::<GpuVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vbo_capacity = cap;
            self.dirty = true;
        }

        if self.ibo_len != self.indices.len() || self.ibo.is_none() {
            use wgpu::util::DeviceExt;

            self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("ricochet polygon ibo"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            }));
            self.ibo_len = self.indices.len();
        }
    }
}

impl VertexSink for PolygonRenderer {
    fn upload(&mut self, vertices: &[Vertex]) -> anyhow::Result<()> {
        anyhow::ensure!(
            vertices.len() <= MAX_FAN_VERTICES,
            "polygon has {} vertices; at most {} fit 16-bit indices",
            vertices.len(),
            MAX_FAN_VERTICES,
        );

        pack_vertices(vertices, self.fill, &mut self.staged);
        if self.indices.len() != vertices.len().saturating_sub(2) * 3 {
            self.indices = fan_indices(vertices.len());
        }
        self.dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> [Vertex; 3] {
        [Vertex::new(-0.1, -0.1), Vertex::new(0.1, -0.1), Vertex::new(0.0, 0.1)]
    }

    #[test]
    fn upload_stages_packed_vertices() {
        let mut r = PolygonRenderer::new(ColorRgba::purple());
        r.upload(&triangle()).unwrap();
        assert_eq!(r.staged().len(), 3);
        assert_eq!(r.staged()[2].position, [0.0, 0.1, 0.0]);
        assert_eq!(r.indices, vec![0, 1, 2]);
        assert!(r.dirty);
    }

    #[test]
    fn later_upload_replaces_earlier_one() {
        let mut r = PolygonRenderer::new(ColorRgba::purple());
        r.upload(&triangle()).unwrap();
        let moved = triangle().map(|mut v| {
            v.position.x += 0.5;
            v
        });
        r.upload(&moved).unwrap();
        assert_eq!(r.staged().len(), 3);
        assert_eq!(r.staged()[0].position[0], -0.1 + 0.5);
    }

    #[test]
    fn oversized_polygon_is_rejected() {
        let mut r = PolygonRenderer::new(ColorRgba::purple());
        let many = vec![Vertex::new(0.0, 0.0); MAX_FAN_VERTICES + 1];
        assert!(r.upload(&many).is_err());
        assert!(r.staged().is_empty());
    }

    #[test]
    fn quad_upload_builds_two_triangles() {
        let mut r = PolygonRenderer::new(ColorRgba::purple());
        let quad = [
            Vertex::new(-0.1, -0.1),
            Vertex::new(0.1, -0.1),
            Vertex::new(0.1, 0.1),
            Vertex::new(-0.1, 0.1),
        ];
        r.upload(&quad).unwrap();
        assert_eq!(r.indices, vec![0, 1, 2, 0, 2, 3]);
    }
}
