//! Shader compilation and linking
//!
//! Compiles a vertex/fragment pair and links them into one program. Compile
//! and link failures are logged and reported as diagnostics, never as errors:
//! the returned program may be unusable but the caller keeps running.

use glow::HasContext;

/// Embedded vertex stage for the triangle.
pub const TRIANGLE_VERTEX_SHADER: &str = include_str!("../shaders/triangle.vert");
/// Embedded fragment stage for the triangle.
pub const TRIANGLE_FRAGMENT_SHADER: &str = include_str!("../shaders/triangle.frag");

/// Programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// GL enum for `glCreateShader`.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure to allocate a shader or program object.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to create {stage} shader: {message}")]
    CreateShader { stage: ShaderStage, message: String },
    #[error("failed to create shader program: {0}")]
    CreateProgram(String),
}

/// Where a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSource {
    Compile(ShaderStage),
    Link,
}

/// Info log of a failed compile or link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDiagnostic {
    pub source: DiagnosticSource,
    /// Driver info log. Never empty.
    pub log: String,
}

/// The GL calls the compile/link sequence needs.
pub trait ShaderBackend {
    type Shader: Copy;
    type Program: Copy;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
}

impl ShaderBackend for glow::Context {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_type()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }
}

/// A linked program plus whatever the driver complained about on the way.
#[derive(Debug)]
pub struct ShaderProgram<P> {
    handle: P,
    diagnostics: Vec<ShaderDiagnostic>,
}

impl<P: Copy> ShaderProgram<P> {
    /// The program object.
    pub fn handle(&self) -> P {
        self.handle
    }

    /// Compile and link diagnostics, in the order they were produced.
    pub fn diagnostics(&self) -> &[ShaderDiagnostic] {
        &self.diagnostics
    }

    /// Whether every stage compiled and the program linked.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compile one stage.
///
/// On failure the info log is logged and returned next to the shader object.
pub fn compile_shader<B: ShaderBackend>(
    backend: &B,
    stage: ShaderStage,
    source: &str,
) -> Result<(B::Shader, Option<ShaderDiagnostic>), ShaderError> {
    let shader = backend
        .create_shader(stage)
        .map_err(|message| ShaderError::CreateShader { stage, message })?;
    backend.shader_source(shader, source);
    backend.compile_shader(shader);

    if backend.compile_status(shader) {
        return Ok((shader, None));
    }

    let log = non_empty_log(backend.shader_info_log(shader), || {
        format!("{} shader failed to compile", stage)
    });
    tracing::error!("{} shader compilation failed:\n{}", stage, log);
    Ok((
        shader,
        Some(ShaderDiagnostic {
            source: DiagnosticSource::Compile(stage),
            log,
        }),
    ))
}

/// Compile both stages and link them into a program.
///
/// The stage objects are deleted after linking whether or not anything failed.
pub fn create_program<B: ShaderBackend>(
    backend: &B,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<ShaderProgram<B::Program>, ShaderError> {
    let mut diagnostics = Vec::new();

    let (vertex, diagnostic) = compile_shader(backend, ShaderStage::Vertex, vertex_source)?;
    diagnostics.extend(diagnostic);

    let (fragment, diagnostic) =
        match compile_shader(backend, ShaderStage::Fragment, fragment_source) {
            Ok(compiled) => compiled,
            Err(e) => {
                backend.delete_shader(vertex);
                return Err(e);
            }
        };
    diagnostics.extend(diagnostic);

    let program = match backend.create_program() {
        Ok(program) => program,
        Err(message) => {
            backend.delete_shader(vertex);
            backend.delete_shader(fragment);
            return Err(ShaderError::CreateProgram(message));
        }
    };

    backend.attach_shader(program, vertex);
    backend.attach_shader(program, fragment);
    backend.link_program(program);

    if !backend.link_status(program) {
        let log = non_empty_log(backend.program_info_log(program), || {
            "program failed to link".to_string()
        });
        tracing::error!("shader program linking failed:\n{}", log);
        diagnostics.push(ShaderDiagnostic {
            source: DiagnosticSource::Link,
            log,
        });
    }

    backend.delete_shader(vertex);
    backend.delete_shader(fragment);

    Ok(ShaderProgram {
        handle: program,
        diagnostics,
    })
}

fn non_empty_log(log: String, fallback: impl FnOnce() -> String) -> String {
    let trimmed = log.trim_end();
    if trimmed.is_empty() {
        fallback()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        CreateShader(ShaderStage, u32),
        Compile(u32),
        DeleteShader(u32),
        CreateProgram(u32),
        Attach(u32, u32),
        Link(u32),
    }

    /// Records calls and fails compilation of any source containing `BROKEN`.
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<Call>>,
        sources: RefCell<Vec<(u32, String)>>,
        next_id: RefCell<u32>,
        fail_link: bool,
        empty_logs: bool,
    }

    impl RecordingBackend {
        fn next(&self) -> u32 {
            let mut id = self.next_id.borrow_mut();
            *id += 1;
            *id
        }

        fn source_of(&self, shader: u32) -> String {
            self.sources
                .borrow()
                .iter()
                .find(|(id, _)| *id == shader)
                .map(|(_, src)| src.clone())
                .unwrap_or_default()
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl ShaderBackend for RecordingBackend {
        type Shader = u32;
        type Program = u32;

        fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
            let id = self.next();
            self.calls.borrow_mut().push(Call::CreateShader(stage, id));
            Ok(id)
        }

        fn shader_source(&self, shader: u32, source: &str) {
            self.sources.borrow_mut().push((shader, source.to_string()));
        }

        fn compile_shader(&self, shader: u32) {
            self.calls.borrow_mut().push(Call::Compile(shader));
        }

        fn compile_status(&self, shader: u32) -> bool {
            !self.source_of(shader).contains("BROKEN")
        }

        fn shader_info_log(&self, _shader: u32) -> String {
            if self.empty_logs {
                String::new()
            } else {
                "0:1(1): error: syntax error, unexpected IDENTIFIER\n".to_string()
            }
        }

        fn delete_shader(&self, shader: u32) {
            self.calls.borrow_mut().push(Call::DeleteShader(shader));
        }

        fn create_program(&self) -> Result<u32, String> {
            let id = self.next();
            self.calls.borrow_mut().push(Call::CreateProgram(id));
            Ok(id)
        }

        fn attach_shader(&self, program: u32, shader: u32) {
            self.calls.borrow_mut().push(Call::Attach(program, shader));
        }

        fn link_program(&self, program: u32) {
            self.calls.borrow_mut().push(Call::Link(program));
        }

        fn link_status(&self, _program: u32) -> bool {
            !self.fail_link
        }

        fn program_info_log(&self, _program: u32) -> String {
            if self.empty_logs {
                String::new()
            } else {
                "error: vertex shader output not consumed".to_string()
            }
        }
    }

    #[test]
    fn test_valid_sources_link_cleanly() {
        let backend = RecordingBackend::default();
        let program =
            create_program(&backend, TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER).unwrap();

        assert!(program.is_valid());
        assert_eq!(program.handle(), 3);
        assert_eq!(
            backend.calls(),
            vec![
                Call::CreateShader(ShaderStage::Vertex, 1),
                Call::Compile(1),
                Call::CreateShader(ShaderStage::Fragment, 2),
                Call::Compile(2),
                Call::CreateProgram(3),
                Call::Attach(3, 1),
                Call::Attach(3, 2),
                Call::Link(3),
                Call::DeleteShader(1),
                Call::DeleteShader(2),
            ]
        );
    }

    #[test]
    fn test_invalid_source_reports_diagnostic_and_continues() {
        let backend = RecordingBackend::default();
        let program = create_program(&backend, "BROKEN garbage", TRIANGLE_FRAGMENT_SHADER).unwrap();

        assert!(!program.is_valid());
        let diagnostics = program.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].source,
            DiagnosticSource::Compile(ShaderStage::Vertex)
        );
        assert!(!diagnostics[0].log.is_empty());
        // Linking still happened
        assert!(backend.calls().contains(&Call::Link(program.handle())));
    }

    #[test]
    fn test_empty_driver_log_gets_fallback() {
        let backend = RecordingBackend {
            empty_logs: true,
            ..Default::default()
        };
        let (_, diagnostic) =
            compile_shader(&backend, ShaderStage::Fragment, "BROKEN").unwrap();
        let diagnostic = diagnostic.unwrap();
        assert_eq!(diagnostic.log, "fragment shader failed to compile");
    }

    #[test]
    fn test_link_failure_still_deletes_stages() {
        let backend = RecordingBackend {
            fail_link: true,
            ..Default::default()
        };
        let program =
            create_program(&backend, TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER).unwrap();

        assert_eq!(program.diagnostics().len(), 1);
        assert_eq!(program.diagnostics()[0].source, DiagnosticSource::Link);
        assert!(!program.diagnostics()[0].log.is_empty());

        let calls = backend.calls();
        assert!(calls.contains(&Call::DeleteShader(1)));
        assert!(calls.contains(&Call::DeleteShader(2)));
    }

    #[test]
    fn test_both_stages_broken() {
        let backend = RecordingBackend::default();
        let program = create_program(&backend, "BROKEN", "BROKEN").unwrap();
        let sources: Vec<_> = program.diagnostics().iter().map(|d| d.source).collect();
        assert_eq!(
            sources,
            vec![
                DiagnosticSource::Compile(ShaderStage::Vertex),
                DiagnosticSource::Compile(ShaderStage::Fragment),
            ]
        );
    }

    #[test]
    fn test_embedded_sources_declare_uniforms() {
        assert!(TRIANGLE_VERTEX_SHADER.starts_with("#version 330 core"));
        for name in ["model", "view", "projection"] {
            assert!(TRIANGLE_VERTEX_SHADER.contains(&format!("uniform mat4 {};", name)));
        }
        assert!(TRIANGLE_VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos"));
        assert!(TRIANGLE_FRAGMENT_SHADER.contains("vec4(1.0, 0.5, 0.2, 1.0)"));
    }
}
