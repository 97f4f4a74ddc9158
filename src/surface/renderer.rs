use super::{GlContext, Size, SurfaceConfig};
use crate::gpu::GpuBinding;
use log::debug;
use std::marker::PhantomData;

/// Callbacks for the surface lifecycle events.
pub trait SurfaceRenderer<B: GpuBinding> {
    fn on_surface_created(&mut self, ctx: &GlContext<'_, B>, config: &SurfaceConfig);

    /// Called after creation and whenever the surface is resized.
    fn on_surface_changed(&mut self, ctx: &GlContext<'_, B>, size: Size);

    fn on_draw_frame(&mut self, ctx: &GlContext<'_, B>);

    /// Called once when the surface is torn down, while the context is still
    /// current. Delete GPU objects here.
    fn on_surface_released(&mut self, _ctx: &GlContext<'_, B>) {}
}

/// A [`SurfaceRenderer`] assembled from three closures.
pub struct FnRenderer<B, C, S, D> {
    on_created: C,
    on_changed: S,
    on_draw: D,
    _binding: PhantomData<fn(&B)>,
}

impl<B, C, S, D> FnRenderer<B, C, S, D>
where
    B: GpuBinding,
    C: FnMut(&GlContext<'_, B>, &SurfaceConfig),
    S: FnMut(&GlContext<'_, B>, Size),
    D: FnMut(&GlContext<'_, B>),
{
    pub fn new(on_created: C, on_changed: S, on_draw: D) -> Self {
        Self {
            on_created,
            on_changed,
            on_draw,
            _binding: PhantomData,
        }
    }
}

impl<B, C, S, D> SurfaceRenderer<B> for FnRenderer<B, C, S, D>
where
    B: GpuBinding,
    C: FnMut(&GlContext<'_, B>, &SurfaceConfig),
    S: FnMut(&GlContext<'_, B>, Size),
    D: FnMut(&GlContext<'_, B>),
{
    fn on_surface_created(&mut self, ctx: &GlContext<'_, B>, config: &SurfaceConfig) {
        (self.on_created)(ctx, config)
    }

    fn on_surface_changed(&mut self, ctx: &GlContext<'_, B>, size: Size) {
        (self.on_changed)(ctx, size)
    }

    fn on_draw_frame(&mut self, ctx: &GlContext<'_, B>) {
        (self.on_draw)(ctx)
    }
}

/// Forwards lifecycle events from the windowing system to a renderer.
///
/// Events are passed on as they arrive; ordering and threading are the
/// caller's responsibility.
pub struct GlesSurface<B: GpuBinding, R: SurfaceRenderer<B>> {
    binding: B,
    config: SurfaceConfig,
    renderer: R,
    size: Option<Size>,
}

impl<B: GpuBinding, R: SurfaceRenderer<B>> GlesSurface<B, R> {
    pub fn new(binding: B, config: SurfaceConfig, renderer: R) -> Self {
        Self {
            binding,
            config,
            renderer,
            size: None,
        }
    }

    pub fn surface_created(&mut self) {
        debug!(
            "Surface created (client version {})",
            self.config.client_version
        );
        let ctx = GlContext::new(&self.binding);
        self.renderer.on_surface_created(&ctx, &self.config);
    }

    pub fn surface_changed(&mut self, width: u32, height: u32) {
        let size = Size::new(width, height);
        debug!("Surface changed to {}", size);
        self.size = Some(size);
        let ctx = GlContext::new(&self.binding);
        self.renderer.on_surface_changed(&ctx, size);
    }

    pub fn draw_frame(&mut self) {
        let ctx = GlContext::new(&self.binding);
        self.renderer.on_draw_frame(&ctx);
    }

    /// Last size reported through [`surface_changed`](Self::surface_changed).
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tears the surface down, letting the renderer release its GPU objects.
    pub fn release(mut self) -> (B, R) {
        debug!("Surface released");
        let ctx = GlContext::new(&self.binding);
        self.renderer.on_surface_released(&ctx);
        self.into_parts()
    }

    pub fn into_parts(self) -> (B, R) {
        (self.binding, self.renderer)
    }
}
