use super::GpuBinding;
use gl::types::*;

/// Binding over the process-wide `gl` function pointers.
#[derive(Debug)]
pub struct GlBinding {
    _loaded: (),
}

impl GlBinding {
    /// # Safety
    ///
    /// `gl::load_with` must already have run against a context that is current
    /// on every thread this binding is used from.
    pub unsafe fn new() -> Self {
        Self { _loaded: () }
    }
}

impl GpuBinding for GlBinding {
    type Handle = GLuint;

    const VERTEX_SHADER: u32 = gl::VERTEX_SHADER;
    const FRAGMENT_SHADER: u32 = gl::FRAGMENT_SHADER;

    fn create_shader(&self, shader_type: u32) -> Result<GLuint, String> {
        let shader = unsafe { gl::CreateShader(shader_type) };
        if shader == 0 {
            let error = unsafe { gl::GetError() };
            return Err(format!("glCreateShader failed (error 0x{:04x})", error));
        }
        Ok(shader)
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        // Explicit length, so the text needs no nul terminator.
        let string = source.as_ptr() as *const GLchar;
        let length = source.len() as GLint;
        unsafe {
            gl::ShaderSource(shader, 1, &string, &length);
        }
    }

    fn compile_shader(&self, shader: GLuint) {
        unsafe {
            gl::CompileShader(shader);
        }
    }

    fn compile_status(&self, shader: GLuint) -> bool {
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }
        success != 0
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        }
        if len <= 0 {
            return String::new();
        }

        let mut buffer = vec![0u8; len as usize];
        let mut written = 0;
        unsafe {
            gl::GetShaderInfoLog(shader, len, &mut written, buffer.as_mut_ptr() as *mut GLchar);
        }
        buffer.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe {
            gl::DeleteShader(shader);
        }
    }
}
