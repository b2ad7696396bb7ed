use crate::points::PointStore;

/// Something that can show the accumulated triangles.
///
/// Implemented over GL by the binary; tests record the calls instead.
pub trait DrawTarget {
    /// Clears the color buffer to the clear color.
    fn clear(&mut self);
    /// Replaces the whole vertex buffer with `vertices` (2 floats per vertex).
    fn upload(&mut self, vertices: &[f32]);
    /// Draws the first `vertex_count` uploaded vertices as a triangle list.
    fn draw_triangles(&mut self, vertex_count: usize);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Only the clear happened, the store had no complete set of triangles.
    Cleared,
    Drawn { vertices: usize },
}

/// Clears, then redraws every triangle in `points` with a single draw call.
///
/// A store with a triangle in progress draws nothing; its points only show up
/// once the triangle is complete.
pub fn draw<T: DrawTarget + ?Sized>(points: &PointStore, target: &mut T) -> DrawOutcome {
    target.clear();

    if !points.is_triangle_complete() {
        return DrawOutcome::Cleared;
    }

    let packed = points.to_f32_vec();
    target.upload(&packed);

    let vertices = packed.len() / 2;
    target.draw_triangles(vertices);

    DrawOutcome::Drawn { vertices }
}
