use std::ffi::{c_char, CString, NulError};
use std::fmt::{Display, Formatter};

use gl::types::{GLenum, GLint, GLuint};
use thiserror::Error;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    /// Compiles both stages and links them.
    ///
    /// A stage that fails to compile aborts the build before linking, so the
    /// caller only ever sees the first failure.
    pub fn build(self) -> Result<Program, ProgramError> {
        let vert = compile(ShaderStage::Vertex, self.vert)?;

        let frag = match compile(ShaderStage::Fragment, self.frag) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: GLint = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            // stages are flagged for deletion, the program keeps them alive
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE as GLint {
                let log = info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog);
                gl::DeleteProgram(program);

                return Err(ProgramError::Linking(log));
            }

            tracing::debug!(program, "linked shader program");

            Ok(Program { id: program })
        }
    }
}

fn compile(stage: ShaderStage, src: &str) -> Result<GLuint, ProgramError> {
    let src = CString::new(src).map_err(|e| ProgramError::InvalidSource(stage, e))?;
    let mut success: GLint = 0;

    unsafe {
        let shader = gl::CreateShader(stage.gl_enum());

        gl::ShaderSource(shader, 1, &src.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        if success != gl::TRUE as GLint {
            let log = info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog);
            gl::DeleteShader(shader);

            return Err(ProgramError::Compilation { stage, log });
        }

        Ok(shader)
    }
}

type GetParam = unsafe fn(GLuint, GLenum, *mut GLint);
type GetLog = unsafe fn(GLuint, GLint, *mut GLint, *mut c_char);

/// Reads the driver's info log of a shader or program object.
unsafe fn info_log(id: GLuint, get_param: GetParam, get_log: GetLog) -> String {
    let mut len: GLint = 0;
    get_param(id, gl::INFO_LOG_LENGTH, &mut len);

    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0_u8; len as usize];
    let mut written: GLint = 0;
    get_log(id, len, &mut written, buf.as_mut_ptr() as *mut c_char);

    buf.truncate(written.max(0) as usize);
    trim_log(&buf)
}

fn trim_log(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(&self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("{0} shader source contains a NUL byte")]
    InvalidSource(ShaderStage, #[source] NulError),
    #[error("{stage} shader failed to compile: {log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("program failed to link: {0}")]
    Linking(String),
    #[error("attribute `{0}` is not active in the program")]
    MissingAttribute(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Location of an active vertex attribute. Look it up once and keep it.
    pub fn attribute_location(&self, name: &str) -> Result<GLuint, ProgramError> {
        let c_name =
            CString::new(name).map_err(|_| ProgramError::MissingAttribute(name.to_owned()))?;

        let location = unsafe { gl::GetAttribLocation(self.id, c_name.as_ptr()) };

        if location < 0 {
            return Err(ProgramError::MissingAttribute(name.to_owned()));
        }

        Ok(location as GLuint)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
