use super::helpers;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) rotation: f32,
    pub(crate) half_extent: [f32; 2],
    pub(crate) noise_freq: f32,
    pub(crate) noise_amp: f32,
    pub(crate) plane_half: [f32; 2],
    pub(crate) plane_spacing: f32,
    pub(crate) _pad: f32,
}

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::FRAGMENT)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_fullscreen_pipeline(
        device,
        "scene_pipeline",
        &pl,
        &shader,
        "fs_scene",
        target_format,
        Some(wgpu::BlendState::REPLACE),
    );
    let uniform_buffer = helpers::uniform_buffer::<SceneUniforms>(device, "scene_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    SceneResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
