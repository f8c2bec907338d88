//! winit application driving the frame loop
//!
//! winit delivers input through callbacks, while the frame loop consumes at
//! most one event per frame. Quit and button events are queued here and
//! popped one per redraw; cursor motion only updates the pointer position.

use boxes_core::{FrameLoop, InputEvent, Settings};
use boxes_metrics::FrameTimer;
use boxes_render::{window, RectRenderer, RenderError, WindowConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

pub struct App {
    window_config: WindowConfig,
    canvas_size: (u32, u32),
    window: Option<Arc<Window>>,
    renderer: Option<RectRenderer>,
    frame_loop: FrameLoop,
    events: VecDeque<InputEvent>,
    pointer: (i32, i32),
    frame_timer: FrameTimer,
    error: Option<RenderError>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let window_config = WindowConfig::from(&settings);
        let canvas_size = (settings.window.width, settings.window.height);
        let frame_loop = FrameLoop::new(
            settings,
            StdRng::from_entropy(),
            StdRng::from_entropy(),
            Instant::now(),
        );

        Self {
            window_config,
            canvas_size,
            window: None,
            renderer: None,
            frame_loop,
            events: VecDeque::new(),
            pointer: (0, 0),
            frame_timer: FrameTimer::new(),
            error: None,
        }
    }

    /// Fatal error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RenderError) {
        tracing::error!(%error, "fatal rendering error");
        self.error = Some(error);
        event_loop.exit();
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let window = window::create_window(event_loop, &self.window_config)?;
        let renderer = pollster::block_on(RectRenderer::new(window.clone(), self.canvas_size))?;

        tracing::info!(
            width = self.window_config.width,
            height = self.window_config.height,
            "window created"
        );
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        self.frame_timer.begin();

        let event = self.events.pop_front();
        let outcome = self
            .frame_loop
            .run_frame(event, self.pointer, Instant::now(), renderer);

        if let Err(error) = renderer.present() {
            self.fail(event_loop, error);
            return;
        }

        self.frame_timer.end();

        if let Some(title) = &outcome.title {
            renderer.window().set_title(title);

            boxes_metrics::metrics! {
                let report = self.frame_timer.report();
                tracing::debug!(
                    frames = report.frames,
                    avg_ms = report.average_ms,
                    min_ms = report.min_ms,
                    max_ms = report.max_ms,
                    "frame times"
                );
            }
        }

        if !outcome.running {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.init_graphics(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push_back(InputEvent::Quit),
            WindowEvent::MouseInput { state, .. } => self.events.push_back(match state {
                ElementState::Pressed => InputEvent::PointerDown,
                ElementState::Released => InputEvent::PointerUp,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(renderer) = &self.renderer {
                    self.pointer = window::pointer_to_canvas(position, renderer.size(), self.canvas_size);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Surface must go before the window it was created from
        self.renderer = None;
        self.window = None;
    }
}
