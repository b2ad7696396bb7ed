use cgmath::Vector2;

/// Screen-space bounding box of the drawing surface, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasRect {
    /// Top-left corner, y growing downwards.
    pub origin: Vector2<f64>,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(origin: Vector2<f64>, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Rect anchored at `(0, 0)`, e.g. a window's client area.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Vector2::new(0.0, 0.0), width, height)
    }
}

/// Maps a pointer position to normalized device coordinates.
///
/// ```text
/// ┏ 1  0 ┓   ┏ 2/w  0  ┓ ┏ m_x - c_x ┓   ┏ -1 ┓
/// ┗ 0 -1 ┛ ( ┗ 0   2/h ┛ ┗ m_y - c_y ┛ + ┗ -1 ┛ )
/// ```
///
/// Positions outside the rect are not clamped and land outside `[-1, 1]`.
pub fn to_device(pointer: Vector2<f64>, canvas: &CanvasRect) -> Vector2<f64> {
    let x_premul = 2.0 / canvas.width;
    let y_premul = -2.0 / canvas.height;

    let local = pointer - canvas.origin;

    Vector2::new(x_premul * local.x - 1.0, y_premul * local.y + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn canvas() -> CanvasRect {
        CanvasRect::new(Vector2::new(32.0, 16.0), 512.0, 256.0)
    }

    #[test]
    fn center_maps_to_origin() {
        let p = to_device(Vector2::new(32.0 + 256.0, 16.0 + 128.0), &canvas());

        assert_eq!(p, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn top_left_maps_to_upper_left_corner() {
        let p = to_device(Vector2::new(32.0, 16.0), &canvas());

        assert_eq!(p, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn bottom_right_maps_to_lower_right_corner() {
        let p = to_device(Vector2::new(32.0 + 512.0, 16.0 + 256.0), &canvas());

        assert_eq!(p, Vector2::new(1.0, -1.0));
    }

    #[test]
    fn outside_is_not_clamped() {
        let p = to_device(Vector2::new(32.0 + 1024.0, 16.0 - 256.0), &canvas());

        assert_eq!(p, Vector2::new(3.0, 3.0));
    }

    proptest! {
        #[test]
        fn x_scales_linearly(dx in 0.0..2048.0f64, w in 1.0..4096.0f64, h in 1.0..4096.0f64) {
            let rect = CanvasRect::from_size(w, h);

            let once = to_device(Vector2::new(dx, 0.0), &rect).x + 1.0;
            let twice = to_device(Vector2::new(2.0 * dx, 0.0), &rect).x + 1.0;

            prop_assert!((twice - 2.0 * once).abs() < 1e-9);
            prop_assert!((once - 2.0 * dx / w).abs() < 1e-9);
        }

        #[test]
        fn y_is_flipped(y in 0.0..4096.0f64, step in 0.5..512.0f64, h in 1.0..4096.0f64) {
            let rect = CanvasRect::from_size(640.0, h);

            let upper = to_device(Vector2::new(10.0, y), &rect);
            let lower = to_device(Vector2::new(10.0, y + step), &rect);

            prop_assert!(lower.y < upper.y);
            prop_assert_eq!(lower.x, upper.x);
        }
    }
}
