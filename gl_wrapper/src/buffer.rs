use std::ffi::c_void;

use gl::types::{GLsizeiptr, GLuint};

/// Layout of the single float attribute a [`VertexBuffer`] feeds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
            VertexAttribute::Vec4 => 4,
        }
    }

    /// Whole vertices contained in `scalars` floats.
    pub fn vertices_in(&self, scalars: usize) -> usize {
        scalars / self.size()
    }
}

/// Vertex array plus one array buffer whose contents are replaced on each upload.
pub struct VertexBuffer {
    vao: GLuint,
    vbo: GLuint,
    attribute: VertexAttribute,
}

impl VertexBuffer {
    /// Creates the buffer and points attribute `location` at it, tightly packed
    /// and not normalized.
    pub fn new(location: GLuint, attribute: VertexAttribute) -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::VertexAttribPointer(
                location,
                attribute.size() as i32,
                gl::FLOAT,
                gl::FALSE,
                0,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(location);
        }

        Self {
            vao,
            vbo,
            attribute,
        }
    }

    /// Overwrites the whole buffer with `data`.
    pub fn upload(&self, data: &[f32]) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(data) as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }
    }

    pub fn vao(&self) -> GLuint {
        self.vao
    }

    pub fn attribute(&self) -> VertexAttribute {
        self.attribute
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
