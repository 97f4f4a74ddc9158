use super::{Shader, ShaderError, ShaderSource, ShaderStage};
use crate::gpu::GpuBinding;
use log::{debug, warn};

/// Turns [`ShaderSource`]s into shader objects through a [`GpuBinding`].
///
/// All calls must happen on the thread where the binding's context is current.
pub struct ShaderCompiler<B: GpuBinding> {
    binding: B,
}

impl<B: GpuBinding> ShaderCompiler<B> {
    pub fn new(binding: B) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn into_binding(self) -> B {
        self.binding
    }

    /// Creates, sources and compiles one shader object.
    pub fn load_shader(&self, stage: ShaderStage, code: &str) -> Result<B::Handle, ShaderError> {
        let shader = self
            .binding
            .create_shader(self.binding.stage_type(stage))
            .map_err(|message| ShaderError::Creation { stage, message })?;
        self.binding.shader_source(shader, code);
        self.binding.compile_shader(shader);
        debug!("Dispatched {} shader {:?}", stage, shader);
        Ok(shader)
    }

    /// Compiles both stages, vertex first, consuming the source.
    ///
    /// Compile status is not queried: errors in the source text only show up
    /// later, through the binding, when the shaders are linked or used. Use
    /// [`compile_checked`](Self::compile_checked) to fail here instead.
    pub fn compile(&self, source: ShaderSource) -> Result<Shader<B::Handle>, ShaderError> {
        let vertex = self.load_shader(ShaderStage::Vertex, source.vertex_code())?;
        let fragment = match self.load_shader(ShaderStage::Fragment, source.fragment_code()) {
            Ok(fragment) => fragment,
            Err(err) => {
                self.binding.delete_shader(vertex);
                return Err(err);
            }
        };
        Ok(Shader { vertex, fragment })
    }

    /// Like [`compile`](Self::compile), then checks each stage's compile
    /// status and returns its info log on failure.
    ///
    /// Both shader objects are deleted when either stage fails.
    pub fn compile_checked(&self, source: ShaderSource) -> Result<Shader<B::Handle>, ShaderError> {
        let shader = self.compile(source)?;

        for stage in ShaderStage::ALL {
            let handle = shader.handle(stage);
            if self.binding.compile_status(handle) {
                continue;
            }

            let log = self.binding.shader_info_log(handle);
            warn!("The {} shader failed to compile: {}", stage, log.trim_end());
            self.binding.delete_shader(shader.vertex);
            self.binding.delete_shader(shader.fragment);
            return Err(ShaderError::Compilation { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::recording::{GpuCall, RecordingBinding};
    use crate::graphics::shader::ShaderSourceLoader;
    use std::fs;

    fn source() -> ShaderSource {
        ShaderSource::new("attribute vec4 pos;", "void main(){}").unwrap()
    }

    #[test]
    fn test_compile_dispatches_once_per_stage() {
        let compiler = ShaderCompiler::new(RecordingBinding::new());
        let shader = compiler.compile(source()).unwrap();

        assert_eq!(shader, Shader { vertex: 1, fragment: 2 });
        assert_eq!(
            compiler.binding().calls(),
            vec![
                GpuCall::Create(RecordingBinding::VERTEX),
                GpuCall::Source(1, "attribute vec4 pos;".to_string()),
                GpuCall::Compile(1),
                GpuCall::Create(RecordingBinding::FRAGMENT),
                GpuCall::Source(2, "void main(){}".to_string()),
                GpuCall::Compile(2),
            ]
        );
    }

    #[test]
    fn test_compile_ignores_compile_status() {
        let binding = RecordingBinding::new().fail_compile_on(1);
        let compiler = ShaderCompiler::new(&binding);

        assert!(compiler.compile(source()).is_ok());
        assert!(!binding
            .calls()
            .iter()
            .any(|call| matches!(call, GpuCall::Status(_) | GpuCall::InfoLog(_))));
    }

    #[test]
    fn test_creation_failure_releases_vertex() {
        let binding = RecordingBinding::new().fail_create(RecordingBinding::FRAGMENT);
        let compiler = ShaderCompiler::new(&binding);

        let err = compiler.compile(source()).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Creation { stage: ShaderStage::Fragment, .. }
        ));
        assert_eq!(binding.calls().last(), Some(&GpuCall::Delete(1)));
    }

    #[test]
    fn test_compile_checked_reports_info_log() {
        let binding = RecordingBinding::new().fail_compile_on(2);
        let compiler = ShaderCompiler::new(&binding);

        match compiler.compile_checked(source()) {
            Err(ShaderError::Compilation { stage, log }) => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert!(log.contains("shader 2"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let calls = binding.calls();
        assert!(calls.contains(&GpuCall::Delete(1)));
        assert!(calls.contains(&GpuCall::Delete(2)));
    }

    #[test]
    fn test_compile_checked_success() {
        let compiler = ShaderCompiler::new(RecordingBinding::new());
        let shader = compiler.compile_checked(source()).unwrap();

        let calls = compiler.into_binding().calls();
        assert!(calls.contains(&GpuCall::Status(shader.vertex)));
        assert!(calls.contains(&GpuCall::Status(shader.fragment)));
        assert!(!calls.iter().any(|call| matches!(call, GpuCall::Delete(_))));
    }

    #[test]
    fn test_load_and_compile_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let vertex = dir.path().join("vertex.vert");
        let fragment = dir.path().join("fragment.frag");
        fs::write(&vertex, "attribute vec4 pos;").unwrap();
        fs::write(&fragment, "void main(){}").unwrap();

        let source = ShaderSourceLoader::from_files(&vertex, &fragment).unwrap();
        let compiler = ShaderCompiler::new(RecordingBinding::new());
        compiler.compile(source).unwrap();

        let creates: Vec<_> = compiler
            .binding()
            .calls()
            .into_iter()
            .filter(|call| matches!(call, GpuCall::Create(_)))
            .collect();
        assert_eq!(
            creates,
            vec![
                GpuCall::Create(RecordingBinding::VERTEX),
                GpuCall::Create(RecordingBinding::FRAGMENT),
            ]
        );
    }
}
