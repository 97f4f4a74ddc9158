use crate::gpu::GpuBinding;
use crate::graphics::shader::{Shader, ShaderCompiler, ShaderError, ShaderSource};

/// The scope handed to renderer callbacks while the context is current.
pub struct GlContext<'a, B: GpuBinding> {
    binding: &'a B,
}

impl<'a, B: GpuBinding> GlContext<'a, B> {
    pub fn new(binding: &'a B) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &'a B {
        self.binding
    }

    pub fn compiler(&self) -> ShaderCompiler<&'a B> {
        ShaderCompiler::new(self.binding)
    }

    pub fn compile(&self, source: ShaderSource) -> Result<Shader<B::Handle>, ShaderError> {
        self.compiler().compile(source)
    }
}
