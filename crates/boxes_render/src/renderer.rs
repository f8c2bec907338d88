//! Rectangle renderer
//!
//! Draw calls made through `Canvas` are batched into one vertex list and
//! submitted by `present`, in a single render pass that clears to the last
//! clear color.

use crate::RenderError;
use boxes_core::{Canvas, Color, Rect};
use glam::Vec2;
use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};

/// Vertices per rectangle (two triangles).
const VERTICES_PER_RECT: usize = 6;

/// Rectangles the vertex buffer holds before its first resize.
const INITIAL_RECT_CAPACITY: usize = 256;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 4],
}

pub struct RectRenderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertices: Vec<Vertex>,
    clear_color: wgpu::Color,
    canvas_size: Vec2,
    linear_output: bool,
}

impl RectRenderer {
    /// Set up a surface on `window` drawing a `canvas_size` pixel area.
    pub async fn new(window: Arc<Window>, canvas_size: (u32, u32)) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        let info = adapter.get_info();
        tracing::info!(adapter = %info.name, backend = ?info.backend, "selected GPU adapter");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Boxes Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // No frame cap: run as fast as the backend presents
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rect Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/rect.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Rect Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Rect Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    // Boxes overwrite what is below them, alpha included
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_capacity = INITIAL_RECT_CAPACITY * VERTICES_PER_RECT;
        let vertex_buffer = create_vertex_buffer(&device, vertex_capacity);

        let linear_output = surface_format.is_srgb();

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity,
            vertices: Vec::with_capacity(vertex_capacity),
            clear_color: wgpu_color(Color::BACKGROUND, linear_output),
            canvas_size: Vec2::new(canvas_size.0 as f32, canvas_size.1 as f32),
            linear_output,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Submit everything drawn since the last `clear` and show it.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped.
    pub fn present(&mut self) -> Result<(), RenderError> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => {
                tracing::warn!(error = %e, "skipping frame");
                return Ok(());
            }
        };

        self.upload_vertices();

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Rect Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Rect Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if !self.vertices.is_empty() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..self.vertices.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        output.present();

        Ok(())
    }

    fn upload_vertices(&mut self) {
        if self.vertices.is_empty() {
            return;
        }

        if self.vertices.len() > self.vertex_capacity {
            self.vertex_capacity = self.vertices.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
            tracing::debug!(vertices = self.vertex_capacity, "grew vertex buffer");
        }

        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.vertices));
    }
}

impl Canvas for RectRenderer {
    fn clear(&mut self, color: Color) {
        self.clear_color = wgpu_color(color, self.linear_output);
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let color = vertex_color(color, self.linear_output);
        self.vertices
            .extend(rect_vertices(rect, self.canvas_size).map(|position| Vertex {
                position: position.to_array(),
                color,
            }));
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertices: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Rect Vertex Buffer"),
        size: (std::mem::size_of::<Vertex>() * vertices) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Canvas pixel (top-left origin, y down) to normalized device coordinates.
fn pixel_to_ndc(pixel: Vec2, canvas_size: Vec2) -> Vec2 {
    let ndc = pixel / canvas_size * 2.0 - Vec2::ONE;
    Vec2::new(ndc.x, -ndc.y)
}

fn rect_vertices(rect: Rect, canvas_size: Vec2) -> [Vec2; VERTICES_PER_RECT] {
    let min = Vec2::new(rect.x as f32, rect.y as f32);
    let max = min + Vec2::new(rect.w as f32, rect.h as f32);

    let top_left = pixel_to_ndc(min, canvas_size);
    let bottom_right = pixel_to_ndc(max, canvas_size);
    let top_right = Vec2::new(bottom_right.x, top_left.y);
    let bottom_left = Vec2::new(top_left.x, bottom_right.y);

    [top_left, bottom_left, bottom_right, top_left, bottom_right, top_right]
}

fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// 8-bit color to float channels; sRGB surfaces expect linear input.
fn float_channels(color: Color, linear_output: bool) -> [f64; 4] {
    let [r, g, b, a] = [color.r, color.g, color.b, color.a].map(|c| c as f64 / 255.0);
    if linear_output {
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    } else {
        [r, g, b, a]
    }
}

fn wgpu_color(color: Color, linear_output: bool) -> wgpu::Color {
    let [r, g, b, a] = float_channels(color, linear_output);
    wgpu::Color { r, g, b, a }
}

fn vertex_color(color: Color, linear_output: bool) -> [f32; 4] {
    float_channels(color, linear_output).map(|c| c as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(1910.0, 820.0);

    #[test]
    fn test_pixel_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(Vec2::ZERO, CANVAS), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(CANVAS, CANVAS), Vec2::new(1.0, -1.0));
        assert_eq!(pixel_to_ndc(CANVAS / 2.0, CANVAS), Vec2::ZERO);
    }

    #[test]
    fn test_rect_vertices_cover_rect() {
        let vertices = rect_vertices(Rect::new(0, 0, 955, 410), CANVAS);

        let min = vertices.iter().fold(Vec2::splat(f32::MAX), |acc, v| acc.min(*v));
        let max = vertices.iter().fold(Vec2::splat(f32::MIN), |acc, v| acc.max(*v));
        assert_eq!(min, Vec2::new(-1.0, 0.0));
        assert_eq!(max, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_color_conversion() {
        let white = wgpu_color(Color::new(255, 255, 255, 255), true);
        assert_eq!((white.r, white.g, white.b, white.a), (1.0, 1.0, 1.0, 1.0));

        let black = vertex_color(Color::new(0, 0, 0, 0), true);
        assert_eq!(black, [0.0; 4]);

        // Alpha is never gamma-converted
        let background = wgpu_color(Color::BACKGROUND, true);
        assert!((background.a - 200.0 / 255.0).abs() < 1e-12);
        assert!(background.r < 102.0 / 255.0);

        let unconverted = wgpu_color(Color::BACKGROUND, false);
        assert!((unconverted.r - 102.0 / 255.0).abs() < 1e-12);
    }
}
