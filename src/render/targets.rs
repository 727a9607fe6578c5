use super::helpers;

pub(crate) const MSAA_SAMPLES: u32 = 4;

/// Multisampled colour target resolved into the swapchain each frame.
pub(crate) struct RenderTargets {
    pub(crate) format: wgpu::TextureFormat,
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_color_texture_device(
            device,
            "msaa_color",
            width,
            height,
            format,
            MSAA_SAMPLES,
        );
        Self {
            format,
            msaa_tex,
            msaa_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.msaa_tex, self.msaa_view) = helpers::create_color_texture_device(
            device,
            "msaa_color",
            width,
            height,
            self.format,
            MSAA_SAMPLES,
        );
    }
}
