//! wgpu Context
//!
//! The [`GpuContext`] holds core GPU handles: device, queue, surface, and
//! config. It is responsible for window surface management and resize
//! handling.
//!
//! The surface is configured with an alpha compositing mode that lets the
//! desktop show through — the window itself is borderless and transparent,
//! and everything visible is drawn by [`ChromeRenderer`](super::ChromeRenderer).

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::errors::{CasementError, Result};

/// Core wgpu context holding GPU handles.
///
/// Owns the fundamental wgpu resources needed for presentation:
/// - `device`: GPU device for resource creation
/// - `queue`: Command submission queue
/// - `surface`: Window surface for presentation
/// - `config`: Surface configuration (format, alpha mode, present mode)
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
}

impl GpuContext {
    pub async fn new<W>(window: W, width: u32, height: u32) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(|e| CasementError::SurfaceCreateFailed(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| CasementError::AdapterRequestFailed(e.to_string()))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or_else(|| {
                CasementError::SurfaceCreateFailed("Surface not supported by adapter".to_string())
            })?;

        config.alpha_mode = Self::pick_alpha_mode(&caps);
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&device, &config);

        log::info!(
            "Surface configured: {:?}, alpha mode {:?}",
            config.format,
            config.alpha_mode
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Picks the compositing mode that preserves per-pixel transparency.
    ///
    /// The shader emits premultiplied alpha, so `PreMultiplied` is exact;
    /// `PostMultiplied` is close enough for a soft shadow. `Auto` is the
    /// last resort and may composite opaquely on some platforms.
    fn pick_alpha_mode(caps: &wgpu::SurfaceCapabilities) -> wgpu::CompositeAlphaMode {
        for mode in [
            wgpu::CompositeAlphaMode::PreMultiplied,
            wgpu::CompositeAlphaMode::PostMultiplied,
        ] {
            if caps.alpha_modes.contains(&mode) {
                return mode;
            }
        }
        log::warn!("No transparent composite alpha mode available; shadow may render opaquely");
        wgpu::CompositeAlphaMode::Auto
    }

    /// Reconfigures the surface for a new pixel size. Zero sizes are ignored
    /// (the surface keeps its previous configuration while minimized).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reapplies the current configuration after a lost/outdated surface.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Returns the surface color format.
    #[must_use]
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current surface dimensions.
    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
