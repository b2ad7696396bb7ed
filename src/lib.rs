//! Click to place points; every three points make a red triangle.

pub mod mapping;
pub mod points;
pub mod render;
pub mod session;

pub use mapping::{to_device, CanvasRect};
pub use points::PointStore;
pub use render::{DrawOutcome, DrawTarget};
pub use session::{Input, Response, Session};
