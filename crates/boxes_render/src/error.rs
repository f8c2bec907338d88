use thiserror::Error;

/// Failures of the windowing and rendering layer.
///
/// Everything except `OutOfMemory` happens during setup; none of them are
/// retried.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create GPU surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,

    #[error("GPU ran out of memory while presenting")]
    OutOfMemory,
}
