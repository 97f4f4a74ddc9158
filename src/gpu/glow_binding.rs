use super::GpuBinding;
use glow::HasContext;
use std::sync::Arc;

/// Binding over a shared [`glow::Context`].
pub struct GlowBinding {
    gl: Arc<glow::Context>,
}

impl GlowBinding {
    /// # Safety
    ///
    /// `gl` must be current on every thread this binding is used from, for as
    /// long as the binding lives.
    pub unsafe fn new(gl: Arc<glow::Context>) -> Self {
        Self { gl }
    }

    pub fn context(&self) -> &Arc<glow::Context> {
        &self.gl
    }
}

impl GpuBinding for GlowBinding {
    type Handle = <glow::Context as HasContext>::Shader;

    const VERTEX_SHADER: u32 = glow::VERTEX_SHADER;
    const FRAGMENT_SHADER: u32 = glow::FRAGMENT_SHADER;

    fn create_shader(&self, shader_type: u32) -> Result<Self::Handle, String> {
        unsafe { self.gl.create_shader(shader_type) }
    }

    fn shader_source(&self, shader: Self::Handle, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Handle) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn compile_status(&self, shader: Self::Handle) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Handle) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Handle) {
        unsafe { self.gl.delete_shader(shader) }
    }
}
