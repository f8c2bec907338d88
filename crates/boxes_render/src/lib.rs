//! Boxes Render
//!
//! Window creation and immediate-mode rectangle drawing on wgpu.

pub mod error;
pub mod renderer;
pub mod window;

pub use error::RenderError;
pub use renderer::RectRenderer;
pub use window::WindowConfig;

pub use wgpu;
pub use winit;
