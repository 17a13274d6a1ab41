use crate::scene::{self, Camera, GeometrySlot, LineVertex, SettingsCell, Spin};
use shape_core::{Color, DisplaySettings};
use shape_geom::{edge_indices, TriMesh};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use wgpu::util::DeviceExt;

pub type Canvas = HtmlCanvasElement;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("adapter request failed: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface unsupported by adapter")]
    SurfaceUnsupported,
}

/// Owns the render surface, camera, furniture and the displayed mesh, and
/// drives the requestAnimationFrame redraw loop until shut down.
pub struct Viewport {
    state: Rc<RefCell<ViewportState>>,
    settings: SettingsCell,
    frame: Rc<Cell<Option<i32>>>,
    frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    resize_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Viewport {
    pub async fn new(canvas: HtmlCanvasElement, settings: SettingsCell) -> Result<Self, RenderError> {
        let (width, height) = canvas_size(&canvas);

        let instance = wgpu::Instance::default();
        let surface: wgpu::Surface<'static> =
            instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let limits = wgpu::Limits::downlevel_webgl2_defaults()
            .using_resolution(adapter.limits())
            .using_alignment(adapter.limits());
        let device_desc = wgpu::DeviceDescriptor {
            label: Some("viewport-device"),
            required_features: wgpu::Features::empty(),
            required_limits: limits,
            ..Default::default()
        };
        let (device, queue) = adapter.request_device(&device_desc).await?;

        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderError::SurfaceUnsupported)?;
        config.present_mode = wgpu::PresentMode::Fifo;
        surface.configure(&device, &config);

        let camera = Camera::new(width, height);
        let camera_uniform = CameraUniform::from_camera(&camera);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera-buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let model_uniform = ModelUniform::new(Spin::default(), [0.8, 0.8, 0.8]);
        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("model-buffer"),
            contents: bytemuck::bytes_of(&model_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("viewport-bind-group-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("viewport-bind-group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: model_buffer.as_entire_binding(),
                },
            ],
        });

        let depth_texture = DepthTexture::new(&device, config.width, config.height);

        let (mesh_pipeline, wire_pipeline, line_pipeline) =
            create_pipelines(&device, &bind_group_layout, config.format);

        let furniture = scene::furniture_vertices();
        let furniture_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("furniture-buffer"),
            contents: bytemuck::cast_slice(&furniture),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let state = ViewportState {
            canvas,
            surface,
            device,
            queue,
            config,
            camera,
            camera_buffer,
            model_buffer,
            bind_group,
            mesh_pipeline,
            wire_pipeline,
            line_pipeline,
            furniture_buffer,
            furniture_count: furniture.len() as u32,
            mesh: GeometrySlot::default(),
            material: Material {
                color: [0.8, 0.8, 0.8],
                wireframe: settings.get().wireframe,
            },
            spin: Spin::default(),
            depth_texture,
        };

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            settings,
            frame: Rc::new(Cell::new(None)),
            frame_closure: Rc::new(RefCell::new(None)),
            resize_closure: None,
        })
    }

    /// Replaces the displayed geometry. The previous vertex, index and edge
    /// buffers are destroyed; the material slot is reused.
    pub fn set_geometry(&mut self, mesh: &TriMesh) {
        self.state.borrow_mut().set_geometry(mesh);
    }

    /// Updates the material color; the new value is uploaded on the next tick.
    pub fn set_material(&mut self, color: Color) {
        self.state.borrow_mut().material.color = color.as_f32();
    }

    /// Flips the material wireframe flag. No geometry work happens here: the
    /// edge buffer already exists and the flag only selects the pipeline.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.state.borrow_mut().material.wireframe = wireframe;
    }

    /// Starts the self-rescheduling frame loop. Each tick reads the current
    /// settings from the shared cell, spins the mesh if auto-rotate is on,
    /// and redraws.
    pub fn start(&mut self) {
        if self.frame_closure.borrow().is_some() {
            return;
        }

        let state = self.state.clone();
        let settings = self.settings.clone();
        let frame = self.frame.clone();
        let holder = self.frame_closure.clone();
        let closure = Closure::wrap(Box::new(move || {
            frame.set(None);
            state.borrow_mut().tick(settings.get());
            // Shutdown empties the holder; an in-flight tick then finishes
            // without rescheduling.
            if let (Some(window), Some(callback)) = (web_sys::window(), holder.borrow().as_ref()) {
                if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    frame.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>);
        *self.frame_closure.borrow_mut() = Some(closure);

        if let (Some(window), Some(callback)) =
            (web_sys::window(), self.frame_closure.borrow().as_ref())
        {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.frame.set(Some(id));
            }
        }
    }

    /// Reacts to host resizes by resizing the surface to the canvas bounds,
    /// falling back to a default extent when the bounds report as zero.
    pub fn attach_resize_listener(&mut self) {
        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let mut state = state.borrow_mut();
            let (width, height) = canvas_size(&state.canvas);
            state.resize(width, height);
            state.render();
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        self.resize_closure = Some(closure);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let mut state = self.state.borrow_mut();
        state.resize(width, height);
    }

    /// Tears the viewport down: cancels the frame loop, removes the resize
    /// listener and destroys the mesh buffers. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.frame_closure.borrow_mut().take();

        if let Some(closure) = self.resize_closure.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
        }

        let mut state = self.state.borrow_mut();
        if let Some(mesh) = state.mesh.take() {
            mesh.destroy();
        }
    }
}

impl Drop for Viewport {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct Material {
    color: [f32; 3],
    wireframe: bool,
}

struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    edge_buffer: wgpu::Buffer,
    edge_count: u32,
}

impl MeshBuffers {
    fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.edge_buffer.destroy();
    }
}

struct ViewportState {
    canvas: HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    camera: Camera,
    camera_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    furniture_buffer: wgpu::Buffer,
    furniture_count: u32,
    mesh: GeometrySlot<MeshBuffers>,
    material: Material,
    spin: Spin,
    depth_texture: DepthTexture,
}

impl ViewportState {
    fn set_geometry(&mut self, mesh: &TriMesh) {
        if mesh.is_empty() {
            if let Some(old) = self.mesh.take() {
                old.destroy();
            }
            return;
        }

        let mut vertices = Vec::with_capacity(mesh.positions.len());
        for (position, normal) in mesh.positions.iter().zip(mesh.normals.iter()) {
            vertices.push(Vertex {
                position: *position,
                normal: *normal,
            });
        }
        let edges = edge_indices(&mesh.indices);

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh-vertex-buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh-index-buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let edge_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh-edge-buffer"),
                contents: bytemuck::cast_slice(&edges),
                usage: wgpu::BufferUsages::INDEX,
            });

        let previous = self.mesh.replace(MeshBuffers {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            edge_buffer,
            edge_count: edges.len() as u32,
        });
        if let Some(old) = previous {
            old.destroy();
        }
    }

    fn tick(&mut self, settings: DisplaySettings) {
        if settings.auto_rotate {
            self.spin.advance();
        }
        let uniform = ModelUniform::new(self.spin, self.material.color);
        self.queue
            .write_buffer(&self.model_buffer, 0, bytemuck::bytes_of(&uniform));
        self.render();
    }

    fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = scene::surface_extent(width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = DepthTexture::new(&self.device, width, height);
        self.camera.set_extent(width, height);
        let uniform = CameraUniform::from_camera(&self.camera);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    fn render(&mut self) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(_) => {
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("viewport-encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("viewport-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.07,
                            g: 0.08,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_bind_group(0, &self.bind_group, &[]);

            if let Some(mesh) = self.mesh.get() {
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                if self.material.wireframe {
                    pass.set_pipeline(&self.wire_pipeline);
                    pass.set_index_buffer(mesh.edge_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..mesh.edge_count, 0, 0..1);
                } else {
                    pass.set_pipeline(&self.mesh_pipeline);
                    pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
            }

            pass.set_pipeline(&self.line_pipeline);
            pass.set_vertex_buffer(0, self.furniture_buffer.slice(..));
            pass.draw(0..self.furniture_count, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let dpr = web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0) as f32;
    let width = (canvas.client_width() as f32 * dpr).max(0.0) as u32;
    let height = (canvas.client_height() as f32 * dpr).max(0.0) as u32;
    let (width, height) = scene::surface_extent(width, height);
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl ModelUniform {
    fn new(spin: Spin, color: [f32; 3]) -> Self {
        Self {
            model: spin.model_matrix().to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

impl Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

fn line_vertex_desc() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    }
}

fn create_pipelines(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> (
    wgpu::RenderPipeline,
    wgpu::RenderPipeline,
    wgpu::RenderPipeline,
) {
    let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh-shader"),
        source: wgpu::ShaderSource::Wgsl(MESH_SHADER.into()),
    });
    let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("line-shader"),
        source: wgpu::ShaderSource::Wgsl(LINE_SHADER.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("viewport-pipeline-layout"),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    let color_target = [Some(wgpu::ColorTargetState {
        format: color_format,
        blend: Some(wgpu::BlendState::REPLACE),
        write_mask: wgpu::ColorWrites::ALL,
    })];

    let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mesh-pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &mesh_shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &mesh_shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &color_target,
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
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    let wire_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("wire-pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &mesh_shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &mesh_shader,
            entry_point: Some("fs_wire"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &color_target,
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("furniture-pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &line_shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[line_vertex_desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &line_shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &color_target,
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    (mesh_pipeline, wire_pipeline, line_pipeline)
}

struct DepthTexture {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTexture {
    fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}

const MESH_SHADER: &str = r#"
struct Camera {
  view_proj: mat4x4<f32>,
};

struct Model {
  model: mat4x4<f32>,
  color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(0) @binding(1)
var<uniform> model: Model;

struct VertexInput {
  @location(0) position: vec3<f32>,
  @location(1) normal: vec3<f32>,
};

struct VertexOutput {
  @builtin(position) position: vec4<f32>,
  @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
  var out: VertexOutput;
  let world = model.model * vec4<f32>(input.position, 1.0);
  out.position = camera.view_proj * world;
  out.normal = normalize((model.model * vec4<f32>(input.normal, 0.0)).xyz);
  return out;
}

// Ambient term plus one directional light.
@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
  let light_dir = normalize(vec3<f32>(0.5, 0.8, 0.6));
  let diffuse = max(dot(normalize(input.normal), light_dir), 0.0);
  let lit = model.color.rgb * (0.25 + 0.75 * diffuse);
  return vec4<f32>(lit, 1.0);
}

@fragment
fn fs_wire(input: VertexOutput) -> @location(0) vec4<f32> {
  return vec4<f32>(model.color.rgb, 1.0);
}
"#;

const LINE_SHADER: &str = r#"
struct Camera {
  view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
  @location(0) position: vec3<f32>,
  @location(1) color: vec3<f32>,
};

struct VertexOutput {
  @builtin(position) position: vec4<f32>,
  @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
  var out: VertexOutput;
  out.position = camera.view_proj * vec4<f32>(input.position, 1.0);
  out.color = input.color;
  return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
  return vec4<f32>(input.color, 1.0);
}
"#;
