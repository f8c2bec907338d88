//! Window management
//!
//! Cross-platform window creation via winit

use crate::RenderError;
use boxes_core::Settings;
use std::sync::Arc;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for WindowConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            title: settings.window.title.clone(),
            width: settings.window.width,
            height: settings.window.height,
        }
    }
}

/// Top-left position that centers a `width` x `height` window on a monitor.
pub fn centered_position(monitor: PhysicalSize<u32>, width: u32, height: u32) -> PhysicalPosition<i32> {
    let left = monitor.width as i32 / 2 - width as i32 / 2;
    let top = monitor.height as i32 / 2 - height as i32 / 2;
    PhysicalPosition::new(left, top)
}

/// Window attributes from config, centered when the monitor size is known.
///
/// Sizes are physical pixels so the drawing area matches the canvas 1:1.
pub fn window_attributes(config: &WindowConfig, monitor: Option<PhysicalSize<u32>>) -> WindowAttributes {
    let attributes = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height));

    match monitor {
        Some(monitor) => attributes.with_position(centered_position(monitor, config.width, config.height)),
        None => attributes,
    }
}

/// Event loop that never sleeps between frames.
pub fn create_event_loop() -> Result<EventLoop<()>, RenderError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    Ok(event_loop)
}

/// Create the window, centered on the primary monitor.
///
/// In winit 0.30+ this must run inside `ApplicationHandler::resumed`.
pub fn create_window(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Arc<Window>, RenderError> {
    let monitor = event_loop.primary_monitor().map(|monitor| monitor.size());
    if monitor.is_none() {
        tracing::warn!("primary monitor unknown, window position left to the platform");
    }

    let window = event_loop.create_window(window_attributes(config, monitor))?;
    Ok(Arc::new(window))
}

/// Map a cursor position in window pixels to canvas pixels.
pub fn pointer_to_canvas(
    position: PhysicalPosition<f64>,
    window_size: PhysicalSize<u32>,
    canvas_size: (u32, u32),
) -> (i32, i32) {
    if window_size.width == 0 || window_size.height == 0 {
        return (position.x as i32, position.y as i32);
    }

    let x = position.x * canvas_size.0 as f64 / window_size.width as f64;
    let y = position.y * canvas_size.1 as f64 / window_size.height as f64;
    (x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_position() {
        let position = centered_position(PhysicalSize::new(2560, 1440), 1910, 820);
        assert_eq!(position, PhysicalPosition::new(325, 310));
    }

    #[test]
    fn test_window_larger_than_monitor() {
        let position = centered_position(PhysicalSize::new(1280, 720), 1910, 820);
        assert_eq!(position, PhysicalPosition::new(-315, -50));
    }

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Boxes");
        assert_eq!((config.width, config.height), (1910, 820));
    }

    #[test]
    fn test_pointer_to_canvas() {
        let canvas = (1910, 820);

        let same = pointer_to_canvas(PhysicalPosition::new(100.7, 50.2), PhysicalSize::new(1910, 820), canvas);
        assert_eq!(same, (100, 50));

        let doubled = pointer_to_canvas(PhysicalPosition::new(200.0, 100.0), PhysicalSize::new(3820, 1640), canvas);
        assert_eq!(doubled, (100, 50));

        let minimized = pointer_to_canvas(PhysicalPosition::new(3.0, 4.0), PhysicalSize::new(0, 0), canvas);
        assert_eq!(minimized, (3, 4));
    }
}
