use cgmath::Vector2;

use triangles::{CanvasRect, DrawOutcome, DrawTarget, Input, Response, Session};

#[derive(Debug, PartialEq)]
enum Call {
    Clear,
    Upload(Vec<f32>),
    Draw(usize),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl DrawTarget for Recorder {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn upload(&mut self, vertices: &[f32]) {
        self.calls.push(Call::Upload(vertices.to_vec()));
    }

    fn draw_triangles(&mut self, vertex_count: usize) {
        self.calls.push(Call::Draw(vertex_count));
    }
}

fn canvas() -> CanvasRect {
    CanvasRect::new(Vector2::new(100.0, 50.0), 400.0, 200.0)
}

fn click(session: &mut Session, x: f64, y: f64) -> Response {
    let canvas = canvas();

    session.handle(Input::CanvasClick {
        pointer: Vector2::new(canvas.origin.x + x, canvas.origin.y + y),
        canvas,
    })
}

/// Feeds the session like the window does: draw only when asked to.
fn click_and_draw(
    session: &mut Session,
    target: &mut Recorder,
    x: f64,
    y: f64,
) -> Option<DrawOutcome> {
    match click(session, x, y) {
        Response::Redraw => Some(session.draw(target)),
        Response::Idle => None,
    }
}

#[test]
fn one_triangle_then_waits_for_the_next() {
    let mut session = Session::new();
    let mut target = Recorder::default();

    assert_eq!(click_and_draw(&mut session, &mut target, 200.0, 100.0), None);
    assert_eq!(click_and_draw(&mut session, &mut target, 300.0, 100.0), None);
    assert_eq!(
        click_and_draw(&mut session, &mut target, 200.0, 0.0),
        Some(DrawOutcome::Drawn { vertices: 3 })
    );

    assert_eq!(session.points().len(), 6);
    assert_eq!(
        target.calls,
        vec![
            Call::Clear,
            Call::Upload(vec![0.0, 0.0, 0.5, 0.0, 0.0, 1.0]),
            Call::Draw(3),
        ]
    );

    target.calls.clear();
    assert_eq!(click_and_draw(&mut session, &mut target, 0.0, 200.0), None);
    assert_eq!(session.points().len(), 8);
    assert!(target.calls.is_empty());

    assert_eq!(click_and_draw(&mut session, &mut target, 400.0, 200.0), None);
    assert_eq!(
        click_and_draw(&mut session, &mut target, 0.0, 0.0),
        Some(DrawOutcome::Drawn { vertices: 6 })
    );
}

#[test]
fn every_draw_covers_all_triangles() {
    let mut session = Session::new();

    for n in 1..=4 {
        for _ in 0..3 {
            click(&mut session, 10.0 * n as f64, 20.0);
        }

        let mut target = Recorder::default();
        session.draw(&mut target);

        assert_eq!(target.calls.last(), Some(&Call::Draw(3 * n)));
        match &target.calls[1] {
            Call::Upload(data) => assert_eq!(data.len(), 6 * n),
            other => panic!("expected an upload, got {:?}", other),
        }
    }
}

#[test]
fn reset_mid_triangle_clears_everything() {
    let mut session = Session::new();
    for i in 0..5 {
        click(&mut session, 40.0 * i as f64, 10.0);
    }
    assert_eq!(session.points().len(), 10);

    assert_eq!(session.handle(Input::Reset), Response::Redraw);
    assert!(session.points().is_empty());

    let mut target = Recorder::default();
    assert_eq!(session.draw(&mut target), DrawOutcome::Cleared);
    assert_eq!(target.calls, vec![Call::Clear]);
}

#[test]
fn counting_restarts_after_reset() {
    let mut session = Session::new();
    click(&mut session, 1.0, 1.0);
    click(&mut session, 2.0, 2.0);
    session.handle(Input::Reset);

    assert_eq!(click(&mut session, 3.0, 3.0), Response::Idle);
    assert_eq!(click(&mut session, 4.0, 4.0), Response::Idle);
    assert_eq!(click(&mut session, 5.0, 5.0), Response::Redraw);
}
