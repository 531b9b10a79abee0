//! Chrome Renderer
//!
//! Composites the window each frame, back to front: the soft drop shadow
//! (three bitmaps mirrored into eight pieces), then the background rect in
//! the border color, then the title bar and client rects. The surface is
//! cleared to transparent black so the desktop shows through the shadow.
//!
//! Quad composition ([`compose_chrome`]) is kept pure — a function of the
//! layout, palette, and shadow dimensions — so its geometry is testable
//! without a GPU. [`ChromeRenderer`] turns the quad list into one instanced
//! draw pass.

pub mod context;
pub mod quad;

use std::sync::Arc;

use winit::window::Window;

use crate::assets::{SHADOW_ALPHA, ShadowAssets};
use crate::errors::Result;
use crate::layout::{Layout, Rect, ShadowMargins};
use crate::theme::Palette;

pub use context::GpuContext;
use quad::{Globals, QuadInstance, QuadTexture};

/// Which shadow bitmap a quad samples, or a solid fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadSource {
    Corner,
    Bottom,
    Left,
    Solid,
}

/// One composed quad: a rect, a texture source, optional mirroring, a tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub source: QuadSource,
    pub rect: Rect,
    pub flip_h: bool,
    pub flip_v: bool,
    pub tint: [f32; 4],
}

/// Builds the full quad list for one frame, in draw order.
///
/// The shadow geometry derives from the assets' intrinsic sizes:
/// `corner_span` is the corner tile's side length, and the strip
/// thicknesses come from `margins`. The corner bitmap is authored in
/// bottom-right orientation; the other corners mirror it. Edge strips run
/// between the corner tiles and stretch along their long axis.
///
/// Quads sharing a texture are consecutive, so the renderer draws the list
/// as four instance ranges.
#[must_use]
pub fn compose_chrome(
    layout: &Layout,
    palette: &Palette,
    margins: ShadowMargins,
    corner_span: f32,
) -> Vec<Quad> {
    let (w, h) = (layout.window.w, layout.window.h);
    let c = corner_span;
    let shadow_tint = [1.0, 1.0, 1.0, SHADOW_ALPHA];

    let shadow = |source, rect, flip_h, flip_v| Quad {
        source,
        rect,
        flip_h,
        flip_v,
        tint: shadow_tint,
    };
    let solid = |rect, color: crate::theme::Color| Quad {
        source: QuadSource::Solid,
        rect,
        flip_h: false,
        flip_v: false,
        tint: color.to_linear(),
    };

    vec![
        // Corners
        shadow(QuadSource::Corner, Rect::new(0.0, 0.0, c, c), true, true),
        shadow(QuadSource::Corner, Rect::new(w - c, 0.0, c, c), false, true),
        shadow(QuadSource::Corner, Rect::new(0.0, h - c, c, c), true, false),
        shadow(QuadSource::Corner, Rect::new(w - c, h - c, c, c), false, false),
        // Top and bottom strips
        shadow(
            QuadSource::Bottom,
            Rect::new(c, 0.0, w - 2.0 * c, margins.vertical),
            false,
            true,
        ),
        shadow(
            QuadSource::Bottom,
            Rect::new(c, h - margins.vertical, w - 2.0 * c, margins.vertical),
            false,
            false,
        ),
        // Left and right strips
        shadow(
            QuadSource::Left,
            Rect::new(0.0, c, margins.horizontal, h - 2.0 * c),
            false,
            false,
        ),
        shadow(
            QuadSource::Left,
            Rect::new(w - margins.horizontal, c, margins.horizontal, h - 2.0 * c),
            true,
            false,
        ),
        // Chrome fills: the background shows through the gaps as the border.
        solid(layout.background, palette.border),
        solid(layout.title_bar, palette.title_bar),
        solid(layout.client, palette.background),
    ]
}

/// GPU renderer for the window chrome.
pub struct ChromeRenderer {
    ctx: GpuContext,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,

    corner: QuadTexture,
    bottom: QuadTexture,
    left: QuadTexture,
    white: QuadTexture,

    margins: ShadowMargins,
    corner_span: f32,
}

/// Upper bound on instances per frame: 8 shadow pieces + 3 fills.
const MAX_QUADS: usize = 16;

impl ChromeRenderer {
    /// Creates the GPU context over `window` and uploads the shadow bitmaps.
    pub async fn new(window: Arc<Window>, assets: &ShadowAssets) -> Result<Self> {
        let size = window.inner_size();
        let ctx = GpuContext::new(window, size.width.max(1), size.height.max(1)).await?;
        let device = &ctx.device;

        let globals_layout = quad::globals_bind_group_layout(device);
        let texture_layout = quad::texture_bind_group_layout(device);
        let pipeline =
            quad::create_pipeline(device, ctx.color_format(), &globals_layout, &texture_layout);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad instances"),
            size: (MAX_QUADS * std::mem::size_of::<QuadInstance>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let queue = &ctx.queue;
        let corner = QuadTexture::from_image(device, queue, &texture_layout, "shadow corner", &assets.corner);
        let bottom = QuadTexture::from_image(device, queue, &texture_layout, "shadow bottom", &assets.bottom);
        let left = QuadTexture::from_image(device, queue, &texture_layout, "shadow left", &assets.left);
        let white = QuadTexture::white(device, queue, &texture_layout);

        Ok(Self {
            ctx,
            pipeline,
            globals_buffer,
            globals_bind_group,
            instance_buffer,
            corner,
            bottom,
            left,
            white,
            margins: assets.margins(),
            corner_span: assets.corner_span(),
        })
    }

    /// Shadow margins of the uploaded assets, for layout computation.
    #[must_use]
    pub fn margins(&self) -> ShadowMargins {
        self.margins
    }

    /// Reconfigures the surface for a new window pixel size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Renders one frame. Returns whether a frame was actually presented.
    ///
    /// Surface acquisition failures are not fatal: a lost or outdated
    /// surface is reconfigured, and `false` tells the caller the frame is
    /// still owed so it can retry on the next redraw opportunity.
    pub fn render(&mut self, layout: &Layout, palette: &Palette) -> bool {
        let frame = match self.ctx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.ctx.reconfigure();
                return false;
            }
            Err(e) => {
                log::error!("Failed to acquire surface frame: {e}");
                return false;
            }
        };

        let (w, h) = self.ctx.size();
        self.ctx.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                surface_size: [w as f32, h as f32],
                _pad: [0.0, 0.0],
            }),
        );

        let quads = compose_chrome(layout, palette, self.margins, self.corner_span);
        let instances: Vec<QuadInstance> = quads
            .iter()
            .map(|q| QuadInstance::new(q.rect, q.flip_h, q.flip_v, q.tint))
            .collect();
        self.ctx
            .queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("chrome"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("chrome"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);
            pass.set_vertex_buffer(0, self.instance_buffer.slice(..));

            // Quads sharing a texture are consecutive; draw each run as one
            // instance range.
            let mut start = 0usize;
            while start < quads.len() {
                let source = quads[start].source;
                let end = start
                    + quads[start..]
                        .iter()
                        .take_while(|q| q.source == source)
                        .count();
                let texture = match source {
                    QuadSource::Corner => &self.corner,
                    QuadSource::Bottom => &self.bottom,
                    QuadSource::Left => &self.left,
                    QuadSource::Solid => &self.white,
                };
                pass.set_bind_group(1, &texture.bind_group, &[]);
                pass.draw(0..6, start as u32..end as u32);
                start = end;
            }
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        true
    }
}
