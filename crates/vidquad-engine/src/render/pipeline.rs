use anyhow::{Context, Result};

use crate::render::{RenderCtx, RenderTarget};

use super::shader::{BINDING_FRAME, BINDING_SAMPLER, FS_ENTRY, VIDEO_QUAD_WGSL, VS_ENTRY};
use super::video_quad::{VideoQuadBuffer, VideoVertex};

struct Pipeline {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

/// Draws an uploaded [`VideoQuadBuffer`] sampling a host-supplied frame texture.
///
/// The pipeline is built lazily and rebuilt when the surface format changes.
#[derive(Default)]
pub struct VideoQuadRenderer {
    pipeline: Option<Pipeline>,
}

impl VideoQuadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears `target` to black and draws the quad textured with `frame`.
    ///
    /// Black shows through wherever a fit quad leaves borders.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        quad: &VideoQuadBuffer,
        frame: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> Result<()> {
        let vbo = quad
            .buffer()
            .context("video quad drawn before its first upload")?;
        let pipeline = self.ensure_pipeline(ctx);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vidquad video frame bind group"),
            layout: &pipeline.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: BINDING_FRAME,
                    resource: wgpu::BindingResource::TextureView(frame),
                },
                wgpu::BindGroupEntry {
                    binding: BINDING_SAMPLER,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vidquad video pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&pipeline.pipeline);
        rpass.set_bind_group(0, &bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..VideoQuadBuffer::VERTEX_COUNT, 0..1);
        Ok(())
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) -> &Pipeline {
        if self
            .pipeline
            .as_ref()
            .is_some_and(|p| p.format != ctx.surface_format)
        {
            self.pipeline = None;
        }
        self.pipeline.get_or_insert_with(|| {
            log::debug!("building video quad pipeline for {:?}", ctx.surface_format);
            create_pipeline(ctx)
        })
    }
}

fn create_pipeline(ctx: &RenderCtx<'_>) -> Pipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("vidquad video quad shader"),
        source: wgpu::ShaderSource::Wgsl(VIDEO_QUAD_WGSL.into()),
    });

    let bind_group_layout = ctx
        .device
        .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vidquad video frame bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: BINDING_FRAME,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: BINDING_SAMPLER,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vidquad video pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

    let pipeline = ctx
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vidquad video pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VS_ENTRY),
                compilation_options: Default::default(),
                buffers: &[VideoVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FS_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: VideoQuadBuffer::TOPOLOGY,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
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

    Pipeline {
        format: ctx.surface_format,
        pipeline,
        bind_group_layout,
    }
}
