use super::GpuBinding;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuCall {
    Create(u32),
    Source(u32, String),
    Compile(u32),
    Status(u32),
    InfoLog(u32),
    Delete(u32),
}

/// Fake binding that hands out sequential handles and records every call.
#[derive(Default)]
pub struct RecordingBinding {
    calls: RefCell<Vec<GpuCall>>,
    next_handle: Cell<u32>,
    failing_create: HashSet<u32>,
    failing_compile: HashSet<u32>,
}

impl RecordingBinding {
    pub const VERTEX: u32 = 0x8B31;
    pub const FRAGMENT: u32 = 0x8B30;

    pub fn new() -> Self {
        Self::default()
    }

    /// `create_shader` fails for this shader type.
    pub fn fail_create(mut self, shader_type: u32) -> Self {
        self.failing_create.insert(shader_type);
        self
    }

    /// The shader with this handle reports a failed compile.
    pub fn fail_compile_on(mut self, handle: u32) -> Self {
        self.failing_compile.insert(handle);
        self
    }

    pub fn calls(&self) -> Vec<GpuCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: GpuCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl GpuBinding for RecordingBinding {
    type Handle = u32;

    const VERTEX_SHADER: u32 = Self::VERTEX;
    const FRAGMENT_SHADER: u32 = Self::FRAGMENT;

    fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        self.record(GpuCall::Create(shader_type));
        if self.failing_create.contains(&shader_type) {
            return Err("out of shader objects".to_string());
        }
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(GpuCall::Source(shader, source.to_string()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(GpuCall::Compile(shader));
    }

    fn compile_status(&self, shader: u32) -> bool {
        self.record(GpuCall::Status(shader));
        !self.failing_compile.contains(&shader)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.record(GpuCall::InfoLog(shader));
        format!("0:1(1): error: syntax error in shader {}", shader)
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GpuCall::Delete(shader));
    }
}
