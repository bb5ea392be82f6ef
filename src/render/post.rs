use super::helpers;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) progress: f32,
    pub(crate) scale: f32,
    pub(crate) displacement: f32,
    pub(crate) _pad: [f32; 2],
}

pub(crate) struct PostResources {
    pub(crate) bgl: wgpu::BindGroupLayout, // scene tex + ripple tex + sampler + uniform
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::POST_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl"),
        entries: &[
            texture_entry(0),
            texture_entry(1),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            helpers::uniform_layout_entry(3, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let uniform_buffer = helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let composite_pipeline = helpers::make_fullscreen_pipeline(
        device,
        "composite_pipeline",
        &pl,
        &shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl,
        uniform_buffer,
        composite_pipeline,
    }
}

pub(crate) fn create_bind_group(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    scene_view: &wgpu::TextureView,
    ripple_view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("post_bg"),
        layout: &post.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(scene_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(ripple_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: post.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}
