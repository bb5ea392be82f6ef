use crate::camera::visible_half_extent;
use crate::constants::*;
use ripple_core::{DistortionSettings, Viewport, WaveInstance};
use web_sys as web;

mod helpers;
mod post;
mod ripples;
mod scene;
mod targets;

use post::{PostResources, PostUniforms};
use ripples::{RippleResources, RippleUniforms};
use scene::{SceneResources, SceneUniforms};
use targets::{RenderTargets, TARGET_FORMAT};

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Plane row drawn into the scene target
    scene: SceneResources,
    // Pooled ripple brushes drawn into the displacement target
    ripples: RippleResources,
    // Displacement + distortion composite to the swapchain
    post: PostResources,
    post_bind_group: wgpu::BindGroup,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, max_waves: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = scene::create_scene_resources(&device, TARGET_FORMAT);
        let ripples = ripples::create_ripple_resources(&device, TARGET_FORMAT, max_waves);
        let post = post::create_post_resources(&device, format);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post_bind_group = post::create_bind_group(
            &device,
            &post,
            &linear_sampler,
            &targets.scene_view,
            &targets.ripple_view,
        );
        log::info!(
            "[gpu] ready {}x{} format={:?} max_waves={}",
            width,
            height,
            format,
            max_waves
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            ripples,
            post,
            post_bind_group,
            targets,
            linear_sampler,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and the composite bind group reading them
            self.targets.recreate(&self.device, width, height);
            self.post_bind_group = post::create_bind_group(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.scene_view,
                &self.targets.ripple_view,
            );
        }
    }

    /// Reconfigure the swapchain at its current size after it was lost or outdated.
    pub fn reconfigure_surface(&mut self) {
        self.surface.configure(&self.device, &self.config);
        log::info!("[gpu] surface reconfigured {}x{}", self.width, self.height);
    }

    /// Draw one frame: scene, ripple displacement, then the distortion composite.
    ///
    /// `viewport` is the CSS-pixel space the wave positions live in.
    pub fn render<'w>(
        &mut self,
        settings: &DistortionSettings,
        viewport: Viewport,
        waves: impl Iterator<Item = &'w WaveInstance>,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let resolution = [self.width as f32, self.height as f32];

        // Pass 1: plane row -> scene target
        let half = visible_half_extent(CAMERA_FOV_DEG, CAMERA_Z, viewport.aspect());
        let su = SceneUniforms {
            resolution,
            time: settings.time(),
            rotation: settings.plane_rotation(),
            half_extent: half.to_array(),
            noise_freq: NOISE_FREQ,
            noise_amp: NOISE_AMP,
            plane_half: [PLANE_SIZE[0] * 0.5, PLANE_SIZE[1] * 0.5],
            plane_spacing: PLANE_SPACING,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&su));
        {
            let mut rpass = helpers::begin_pass(
                &mut encoder,
                "scene_pass",
                &self.targets.scene_view,
                self.clear_color,
            );
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        // Pass 2: active waves -> ripple target (additive)
        let ru = RippleUniforms {
            half_extent: viewport.half_extent().to_array(),
            brush_size: BRUSH_SIZE_PX,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.ripples.uniform_buffer, 0, bytemuck::bytes_of(&ru));
        let wave_count = self.ripples.upload(&self.queue, waves);
        {
            let mut rpass = helpers::begin_pass(
                &mut encoder,
                "ripple_pass",
                &self.targets.ripple_view,
                wgpu::Color::TRANSPARENT,
            );
            if wave_count > 0 {
                rpass.set_pipeline(&self.ripples.pipeline);
                rpass.set_bind_group(0, &self.ripples.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.ripples.instance_buffer.slice(..));
                rpass.draw(0..6, 0..wave_count);
            }
        }

        // Pass 3: displacement + distortion composite to swapchain
        let pu = PostUniforms {
            resolution,
            time: settings.time(),
            progress: settings.progress(),
            scale: settings.scale(),
            displacement: RIPPLE_DISPLACEMENT,
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&pu));
        {
            let mut rpass =
                helpers::begin_pass(&mut encoder, "composite", &view, self.clear_color);
            rpass.set_pipeline(&self.post.composite_pipeline);
            rpass.set_bind_group(0, &self.post_bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
