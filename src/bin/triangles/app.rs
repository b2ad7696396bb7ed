use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use cgmath::Vector2;

use thiserror::Error;

use winit::dpi::{PhysicalPosition, PhysicalSize, Size};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::program::ProgramError;

use triangles::{CanvasRect, Input, Response, Session};

use crate::args::Args;
use crate::canvas::GlCanvas;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    canvas: GlCanvas,
    session: Session,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(args.width, args.height)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title(&args.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        // glutin only calls the picker with at least one config
        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| {
                configs.next().expect("no GL config offered")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        tracing::info!(
            version = gl_wrapper::version().as_deref().unwrap_or("unknown"),
            width = args.width,
            height = args.height,
            "created GL context"
        );

        let canvas = GlCanvas::new()?;

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            canvas,
            session: Session::new(),
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            mut canvas,
            mut session,
        } = self;

        let mut last_pos = PhysicalPosition::new(0.0, 0.0);
        // the first frame runs a full draw, which clears to black
        let mut draw_pending = true;
        gl_window.window.request_redraw();

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(width), Some(height)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, width, height);
                            canvas.resize(size.width, size.height);
                            gl_window.window.request_redraw();
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        last_pos = position;
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button,
                        ..
                    } => {
                        let input = match button {
                            MouseButton::Left => {
                                let size = gl_window.window.inner_size();

                                Input::CanvasClick {
                                    pointer: Vector2::new(last_pos.x, last_pos.y),
                                    canvas: CanvasRect::from_size(
                                        size.width as f64,
                                        size.height as f64,
                                    ),
                                }
                            }
                            MouseButton::Right => Input::Reset,
                            _ => return,
                        };

                        if session.handle(input) == Response::Redraw {
                            draw_pending = true;
                            gl_window.window.request_redraw();
                        }
                    }
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                Event::RedrawRequested(_) => {
                    if std::mem::take(&mut draw_pending) {
                        session.draw(&mut canvas);
                    } else {
                        canvas.repaint();
                    }

                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        tracing::error!(error = %e, "could not present frame");
                        control_flow.set_exit();
                    }
                }
                _ => (),
            }
        })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::EmptyWindow)?,
            NonZeroU32::new(height).ok_or(AppError::EmptyWindow)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not open a GL display: {0}")]
    Display(String),
    #[error("Display was created without a window")]
    NoWindow,
    #[error("Window has zero size")]
    EmptyWindow,
    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),
    #[error("Could not build shader program: {0}")]
    Program(#[from] ProgramError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use gl_wrapper::program::ShaderStage;

    #[test]
    fn shader_failure_is_reported_once() {
        let err: AppError = ProgramError::Compilation {
            stage: ShaderStage::Vertex,
            log: "0:1(1): error: syntax error".to_owned(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Could not build shader program: vertex shader failed to compile: 0:1(1): error: syntax error"
        );
    }
}
