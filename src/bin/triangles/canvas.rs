use gl_wrapper::buffer::{VertexAttribute, VertexBuffer};
use gl_wrapper::program::{Program, ProgramBuilder, ProgramError};
use gl_wrapper::renderer::GlRenderer;

use triangles::DrawTarget;

const POSITION_ATTRIBUTE: &str = "a_position";

/// The window's color buffer as a [`DrawTarget`].
///
/// Needs a current GL context for its whole lifetime.
pub struct GlCanvas {
    renderer: GlRenderer,
    program: Program,
    buffer: VertexBuffer,
    // vertices of the last draw, replayed by `repaint`
    drawn: usize,
}

impl GlCanvas {
    pub fn new() -> Result<Self, ProgramError> {
        let program = ProgramBuilder::new(
            include_str!("gl_shaders/position.glsl"),
            include_str!("gl_shaders/solid_red.glsl"),
        )
        .build()?;

        let mut renderer = GlRenderer::new();
        renderer.use_program(&program);

        let location = program.attribute_location(POSITION_ATTRIBUTE)?;
        let buffer = VertexBuffer::new(location, VertexAttribute::Vec2);

        renderer.set_clear_color(0.0, 0.0, 0.0);

        Ok(Self {
            renderer,
            program,
            buffer,
            drawn: 0,
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    /// Shows the last draw again without touching the buffer contents.
    pub fn repaint(&mut self) {
        self.renderer.clear();

        if self.drawn > 0 {
            self.renderer
                .draw_triangles(&self.buffer, &self.program, self.drawn);
        }
    }
}

impl DrawTarget for GlCanvas {
    fn clear(&mut self) {
        self.renderer.clear();
        self.drawn = 0;
    }

    fn upload(&mut self, vertices: &[f32]) {
        self.buffer.upload(vertices);
    }

    fn draw_triangles(&mut self, vertex_count: usize) {
        debug_assert_eq!(self.buffer.attribute(), VertexAttribute::Vec2);

        self.renderer
            .draw_triangles(&self.buffer, &self.program, vertex_count);
        self.drawn = vertex_count;
    }
}
