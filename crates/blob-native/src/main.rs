use glam::Vec2;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use blob_core::{
    pack_vertices, BlobScene, BlobUniforms, FrameScheduler, FrameSink, GpuVertex, InstantClock,
    RenderLoop, SceneConfig, BLOB_WGSL,
};

const SAMPLE_COUNT: u32 = 4;

/// Stand-in for the page behind the canvas.
const BACKDROP: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    msaa_view: wgpu::TextureView,
    back_pipeline: wgpu::RenderPipeline,
    front_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    vertex_scratch: Vec<GpuVertex>,
    /// Set on `OutOfMemory`; the event loop exits on the next tick.
    fatal: bool,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, scene: &BlobScene) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", config.width, config.height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blob_shader"),
            source: wgpu::ShaderSource::Wgsl(BLOB_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blob_uniforms"),
            size: std::mem::size_of::<BlobUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let back_pipeline =
            make_pipeline(&device, &pipeline_layout, &shader, format, wgpu::Face::Front);
        let front_pipeline =
            make_pipeline(&device, &pipeline_layout, &shader, format, wgpu::Face::Back);

        let mut vertex_scratch = Vec::with_capacity(scene.mesh.vertex_count());
        pack_vertices(&scene.mesh, &mut vertex_scratch);
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blob_vertices"),
            size: (std::mem::size_of::<GpuVertex>() * vertex_scratch.len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&vertex_scratch));
        let indices = scene.mesh.indices();
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blob_indices"),
            size: (std::mem::size_of::<u32>() * indices.len().max(1)) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(indices));

        let msaa_view = msaa_target(&device, &config);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            msaa_view,
            back_pipeline,
            front_pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            vertex_scratch,
            fatal: false,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.msaa_view = msaa_target(&self.device, &self.config);
    }

    fn render(&mut self, scene: &mut BlobScene) -> Result<(), wgpu::SurfaceError> {
        if scene.mesh.take_dirty() {
            pack_vertices(&scene.mesh, &mut self.vertex_scratch);
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.vertex_scratch));
        }
        scene.material.needs_update = false;
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&BlobUniforms::from_scene(scene)),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKDROP),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_pipeline(&self.back_pipeline);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
            rpass.set_pipeline(&self.front_pipeline);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'w> FrameSink for GpuState<'w> {
    type Error = wgpu::SurfaceError;

    fn draw(&mut self, scene: &mut BlobScene) -> Result<(), Self::Error> {
        match self.render(scene) {
            Err(e @ wgpu::SurfaceError::Lost) => {
                self.resize(self.window.inner_size());
                Err(e)
            }
            Err(e @ wgpu::SurfaceError::OutOfMemory) => {
                self.fatal = true;
                Err(e)
            }
            other => other,
        }
    }
}

/// winit equivalent of `requestAnimationFrame`.
struct RedrawScheduler<'w> {
    window: &'w winit::window::Window,
}

impl<'w> FrameScheduler for RedrawScheduler<'w> {
    fn request_frame(&mut self) {
        self.window.request_redraw();
    }
}

fn msaa_target(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("msaa_color"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: SAMPLE_COUNT,
            dimension: wgpu::TextureDimension::D2,
            format: config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    cull_mode: wgpu::Face,
) -> wgpu::RenderPipeline {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("blob_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<GpuVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(cull_mode),
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: SAMPLE_COUNT,
            ..Default::default()
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// `BLOB_SEED`, `BLOB_DETAIL` and `BLOB_DISPLACEMENT` override the defaults.
fn scene_config_from_env() -> SceneConfig {
    let var = |name: &str| std::env::var(name).ok();
    SceneConfig::default().with_overrides(
        var("BLOB_SEED").as_deref(),
        var("BLOB_DETAIL").as_deref(),
        var("BLOB_DISPLACEMENT").as_deref(),
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut scene = BlobScene::new(scene_config_from_env())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Glass Blob (native)")
        .with_inner_size(winit::dpi::LogicalSize::new(900.0, 700.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, &scene))?;
    let mut scheduler = RedrawScheduler { window: &window };
    let mut render_loop = RenderLoop::new(InstantClock::default());
    let size = window.inner_size();
    scene.camera.set_viewport(size.width, size.height);
    window.request_redraw();

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                scene.camera.set_viewport(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = gpu.window.inner_size();
                scene.pointer.set_from_client(
                    Vec2::new(position.x as f32, position.y as f32),
                    Vec2::ZERO,
                    Vec2::new(size.width as f32, size.height as f32),
                );
            }
            WindowEvent::CursorLeft { .. } => scene.pointer.reset(),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                render_loop.frame(&mut scheduler, &mut scene, &mut gpu);
                if gpu.fatal {
                    log::error!("[gpu] out of memory, exiting");
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
