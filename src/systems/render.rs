//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The recording canvas and the wire pipeline that presents it
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use wire4d_render::{
    context::{ContextError, RenderContext},
    pipeline::WirePipeline,
    AngleState, CanvasStyle, DrawList, FrameRenderer, FrameStats, Projector, Wireframe,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WirePipeline,
    canvas: DrawList,
    projector: Projector,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(
        window: Arc<Window>,
        style: CanvasStyle,
        projector: Projector,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = WirePipeline::new(&context.device, context.config.format, style);
        let canvas = DrawList::new(context.config.width as f32, context.config.height as f32);

        log::info!(
            "Canvas {}x{} ({:?})",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            context,
            pipeline,
            canvas,
            projector,
        })
    }

    /// Handle window resize
    ///
    /// The canvas follows the surface, so screen mapping always uses the
    /// current drawing area.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.canvas = DrawList::new(
            self.context.config.width as f32,
            self.context.config.height as f32,
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        shape: &dyn Wireframe,
        angles: &AngleState,
    ) -> Result<FrameStats, RenderError> {
        let renderer = FrameRenderer::for_canvas(&self.canvas, self.projector);
        let stats = renderer.render(shape, angles, &mut self.canvas);

        let geometry = self
            .pipeline
            .upload(&self.context.device, &self.context.queue, &self.canvas);
        if geometry.skipped > 0 {
            log::trace!("Skipped {} non-finite primitives", geometry.skipped);
        }

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(stats)
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
