use super::helpers;
use ripple_core::WaveInstance;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RippleUniforms {
    pub(crate) half_extent: [f32; 2],
    pub(crate) brush_size: f32,
    pub(crate) _pad: f32,
}

/// Per-wave instance data: xy = centered position, z = rotation, w = scale.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RippleInstance {
    pub(crate) offset_rot_scale: [f32; 4],
    pub(crate) opacity: f32,
}

impl From<&WaveInstance> for RippleInstance {
    fn from(w: &WaveInstance) -> Self {
        Self {
            offset_rot_scale: [w.position.x, w.position.y, w.rotation, w.scale],
            opacity: w.opacity,
        }
    }
}

pub(crate) struct RippleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    // reused every frame; sized to the pool capacity
    pub(crate) staging: Vec<RippleInstance>,
    pub(crate) max_instances: usize,
}

impl RippleResources {
    /// Copy the visible waves into the instance buffer; returns how many to draw.
    pub(crate) fn upload<'w>(
        &mut self,
        queue: &wgpu::Queue,
        waves: impl Iterator<Item = &'w WaveInstance>,
    ) -> u32 {
        self.staging.clear();
        self.staging
            .extend(waves.take(self.max_instances).map(RippleInstance::from));
        if !self.staging.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.staging));
        }
        self.staging.len() as u32
    }
}

pub(crate) fn create_ripple_resources(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
    max_instances: usize,
) -> RippleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("ripples_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::RIPPLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ripples_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ripples_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("ripples_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_ripple"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<RippleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 0,
                        shader_location: 0,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 16,
                        shader_location: 1,
                    },
                ],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_ripple"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState {
                    color: additive,
                    alpha: additive,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::uniform_buffer::<RippleUniforms>(device, "ripples_uniforms");
    let max_instances = max_instances.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ripples_instances"),
        size: (std::mem::size_of::<RippleInstance>() * max_instances) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("ripples_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    RippleResources {
        pipeline,
        uniform_buffer,
        instance_buffer,
        bind_group,
        staging: Vec::with_capacity(max_instances),
        max_instances,
    }
}
