//! The GPU binding capability.
//!
//! Shader compilation never talks to a global GL symbol table directly: it is
//! handed a [`GpuBinding`] and calls through it. [`GlowBinding`] and
//! [`GlBinding`] cover the two OpenGL loaders in use; tests substitute a
//! binding that only records calls.

pub mod gl_binding;
pub mod glow_binding;
#[cfg(test)]
pub(crate) mod recording;

pub use gl_binding::GlBinding;
pub use glow_binding::GlowBinding;

use crate::graphics::shader::ShaderStage;
use std::fmt;

pub trait GpuBinding {
    /// Opaque shader object name.
    type Handle: Copy + fmt::Debug;

    const VERTEX_SHADER: u32;
    const FRAGMENT_SHADER: u32;

    fn stage_type(&self, stage: ShaderStage) -> u32 {
        match stage {
            ShaderStage::Vertex => Self::VERTEX_SHADER,
            ShaderStage::Fragment => Self::FRAGMENT_SHADER,
        }
    }

    fn create_shader(&self, shader_type: u32) -> Result<Self::Handle, String>;

    fn shader_source(&self, shader: Self::Handle, source: &str);

    fn compile_shader(&self, shader: Self::Handle);

    fn compile_status(&self, shader: Self::Handle) -> bool;

    fn shader_info_log(&self, shader: Self::Handle) -> String;

    fn delete_shader(&self, shader: Self::Handle);
}

impl<B: GpuBinding + ?Sized> GpuBinding for &B {
    type Handle = B::Handle;

    const VERTEX_SHADER: u32 = B::VERTEX_SHADER;
    const FRAGMENT_SHADER: u32 = B::FRAGMENT_SHADER;

    fn create_shader(&self, shader_type: u32) -> Result<Self::Handle, String> {
        (**self).create_shader(shader_type)
    }

    fn shader_source(&self, shader: Self::Handle, source: &str) {
        (**self).shader_source(shader, source)
    }

    fn compile_shader(&self, shader: Self::Handle) {
        (**self).compile_shader(shader)
    }

    fn compile_status(&self, shader: Self::Handle) -> bool {
        (**self).compile_status(shader)
    }

    fn shader_info_log(&self, shader: Self::Handle) -> String {
        (**self).shader_info_log(shader)
    }

    fn delete_shader(&self, shader: Self::Handle) {
        (**self).delete_shader(shader)
    }
}
