use cgmath::Vector2;

/// Scalars making up one triangle: 3 vertices of 2 coordinates.
pub const TRIANGLE_SCALARS: usize = 6;

/// Clicked points in device coordinates, flattened to `x, y, x, y, ...`.
///
/// Only grows, until [`PointStore::reset`] empties it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointStore {
    scalars: Vec<f64>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, x: f64, y: f64) {
        self.scalars.push(x);
        self.scalars.push(y);
    }

    pub fn append_point(&mut self, point: Vector2<f64>) {
        self.append(point.x, point.y);
    }

    pub fn reset(&mut self) {
        self.scalars.clear();
    }

    /// True when the store holds at least one triangle and no partial one.
    pub fn is_triangle_complete(&self) -> bool {
        !self.scalars.is_empty() && self.scalars.len() % TRIANGLE_SCALARS == 0
    }

    /// Number of scalars, always even.
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.scalars.len() / 2
    }

    pub fn snapshot(&self) -> &[f64] {
        &self.scalars
    }

    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.scalars
            .chunks_exact(2)
            .map(|xy| Vector2::new(xy[0], xy[1]))
    }

    /// Packs the store the way the GPU expects it.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.scalars.iter().map(|s| *s as f32).collect()
    }
}
