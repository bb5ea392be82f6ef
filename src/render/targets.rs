use super::helpers;
use wgpu;

pub(crate) const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen color targets for the render pipeline.
///
/// - `scene_*` hold the plane row in Rgba16Float, sampled by the composite.
/// - `ripple_*` accumulate the additive ripple brushes; the composite reads
///   the red channel as a displacement field.
pub(crate) struct RenderTargets {
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) ripple_tex: wgpu::Texture,
    pub(crate) ripple_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (scene_tex, scene_view) =
            helpers::create_color_texture(device, "scene_tex", width, height, TARGET_FORMAT, usage);
        let (ripple_tex, ripple_view) =
            helpers::create_color_texture(device, "ripple_tex", width, height, TARGET_FORMAT, usage);
        Self {
            scene_tex,
            scene_view,
            ripple_tex,
            ripple_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.scene_tex.destroy();
        self.ripple_tex.destroy();
        *self = Self::new(device, width, height);
    }
}
