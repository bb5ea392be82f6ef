/// Whether a failed frame should reconfigure the swapchain and try again on
/// the next frame. Lost and outdated surfaces recover that way; the rest are
/// only logged.
#[inline]
pub fn should_reconfigure(err: &wgpu::SurfaceError) -> bool {
    matches!(err, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
}
