//! Rendering-surface lifecycle forwarding.
//!
//! The windowing system owns the surface and its context; it reports
//! creation, resizes and frame requests, and [`GlesSurface`] hands each one to
//! a [`SurfaceRenderer`] together with a [`GlContext`] for the current thread.

pub mod context;
pub mod renderer;

pub use context::GlContext;
pub use renderer::{FnRenderer, GlesSurface, SurfaceRenderer};

use crate::graphics::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for a zero-height surface.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height != 0).then(|| self.width as f32 / self.height as f32)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Surface settings passed to [`SurfaceRenderer::on_surface_created`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// OpenGL ES client version requested for the context.
    pub client_version: u32,
    pub clear_color: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            client_version: 2,
            clear_color: Color::BLACK,
        }
    }
}
