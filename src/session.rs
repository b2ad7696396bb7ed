use cgmath::Vector2;

use crate::mapping::{to_device, CanvasRect};
use crate::points::PointStore;
use crate::render::{self, DrawOutcome, DrawTarget};

/// The two events the surface forwards to a [`Session`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Input {
    /// The reset control was activated.
    Reset,
    /// The canvas was clicked at `pointer`, in the same pixel space as `canvas`.
    CanvasClick {
        pointer: Vector2<f64>,
        canvas: CanvasRect,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Response {
    Redraw,
    Idle,
}

/// Owns the clicked points and decides when the surface has to be redrawn.
///
/// Inputs are handled one at a time; a handler never draws itself, it only
/// asks for a redraw through its [`Response`].
#[derive(Debug, Default)]
pub struct Session {
    points: PointStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, input: Input) -> Response {
        match input {
            Input::Reset => self.reset(),
            Input::CanvasClick { pointer, canvas } => self.click(pointer, &canvas),
        }
    }

    pub fn reset(&mut self) -> Response {
        self.points.reset();
        tracing::info!("points cleared");

        Response::Redraw
    }

    pub fn click(&mut self, pointer: Vector2<f64>, canvas: &CanvasRect) -> Response {
        let device = to_device(pointer, canvas);
        self.points.append_point(device);

        tracing::debug!(
            x = device.x,
            y = device.y,
            points = self.points.vertex_count(),
            "point recorded"
        );

        if self.points.is_triangle_complete() {
            Response::Redraw
        } else {
            Response::Idle
        }
    }

    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) -> DrawOutcome {
        let outcome = render::draw(&self.points, target);

        if let DrawOutcome::Drawn { vertices } = outcome {
            tracing::debug!(triangles = vertices / 3, "drew triangles");
        }

        outcome
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }
}
