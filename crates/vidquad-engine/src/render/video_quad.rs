use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Size;
use crate::geometry::{AspectMode, QuadGeometry};
use crate::render::RenderCtx;

use super::shader::{LOCATION_POSITION, LOCATION_TEX_COORD};

/// Interleaved vertex for the video quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct VideoVertex {
    pub position: [f32; 2], // NDC
    pub tex_coord: [f32; 2], // 0..1, top-left origin
}

impl VideoVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: LOCATION_POSITION,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: std::mem::size_of::<[f32; 2]>() as u64,
            shader_location: LOCATION_TEX_COORD,
        },
    ];

    /// Buffer layout for the inputs of [`VIDEO_QUAD_WGSL`](super::VIDEO_QUAD_WGSL).
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VideoVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Interleaves both quads in strip order: bottom-left, bottom-right, top-left,
    /// top-right.
    pub fn from_geometry(geometry: &QuadGeometry) -> [VideoVertex; 4] {
        let positions = geometry.vertices.corners();
        let tex_coords = geometry.tex_coords.corners();
        std::array::from_fn(|i| VideoVertex {
            position: positions[i].to_array(),
            tex_coord: tex_coords[i].to_array(),
        })
    }
}

/// GPU vertex buffer holding the current video quad.
///
/// The buffer is created on first use and rewritten only when the mapped geometry
/// changes (viewport resize, new frame size, or mode switch).
#[derive(Default)]
pub struct VideoQuadBuffer {
    vbo: Option<wgpu::Buffer>,
    geometry: Option<QuadGeometry>,
}

impl VideoQuadBuffer {
    /// Draw with `TriangleStrip` topology and this many vertices.
    pub const VERTEX_COUNT: u32 = 4;
    pub const TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::TriangleStrip;

    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `frame` into the context viewport and uploads the result.
    pub fn update(
        &mut self,
        ctx: &RenderCtx<'_>,
        mode: AspectMode,
        frame: Size,
    ) -> Result<&wgpu::Buffer> {
        let geometry = mode
            .map(ctx.viewport, frame)
            .with_context(|| format!("failed to map {mode} geometry for video quad"))?;
        let vertices = VideoVertex::from_geometry(&geometry);

        let vbo = match self.vbo.take() {
            Some(vbo) => {
                if self.geometry != Some(geometry) {
                    ctx.queue
                        .write_buffer(&vbo, 0, bytemuck::cast_slice(&vertices));
                }
                vbo
            }
            None => {
                log::debug!("creating video quad vertex buffer");
                ctx.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("vidquad video quad vbo"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    })
            }
        };

        self.geometry = Some(geometry);
        let vbo: &wgpu::Buffer = self.vbo.insert(vbo);
        Ok(vbo)
    }

    /// Geometry of the last successful upload.
    pub fn geometry(&self) -> Option<&QuadGeometry> {
        self.geometry.as_ref()
    }

    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.vbo.as_ref()
    }
}
