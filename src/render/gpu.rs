use crate::{
    effects::exposure::clamp_ev,
    foundation::{
        core::Bitmap,
        error::{MirageError, MirageResult},
    },
    render::backend::ExposureBackend,
};

const EXPOSURE_WGSL: &str = r#"
struct VsOut {
  @builtin(position) pos: vec4<f32>,
};

@vertex
fn vs(@builtin(vertex_index) vi: u32) -> VsOut {
  var p = array<vec2<f32>, 3>(
    vec2<f32>(-1.0, -1.0),
    vec2<f32>( 3.0, -1.0),
    vec2<f32>(-1.0,  3.0),
  );
  var o: VsOut;
  o.pos = vec4<f32>(p[vi], 0.0, 1.0);
  return o;
}

@group(0) @binding(0) var t_src: texture_2d<f32>;
@group(0) @binding(1) var<uniform> params: vec4<f32>;

@fragment
fn fs(in: VsOut) -> @location(0) vec4<f32> {
  let c = textureLoad(t_src, vec2<i32>(in.pos.xy), 0);
  let linear = pow(max(c.rgb, vec3<f32>(0.0)), vec3<f32>(2.2)) * exp2(params.x);
  let srgb = pow(linear, vec3<f32>(1.0 / 2.2));
  return vec4<f32>(clamp(srgb, vec3<f32>(0.0), vec3<f32>(1.0)), c.a);
}
"#;

/// Per-size GPU objects. Destroyed explicitly when replaced or when the backend drops.
struct Target {
    width: u32,
    height: u32,
    source: wgpu::Texture,
    source_view: wgpu::TextureView,
    output: wgpu::Texture,
    output_view: wgpu::TextureView,
    readback: wgpu::Buffer,
    readback_bytes_per_row: u32,
}

impl Drop for Target {
    fn drop(&mut self) {
        self.readback.destroy();
        self.output.destroy();
        self.source.destroy();
    }
}

/// Shader-based exposure backend.
///
/// Device, pipeline and uniform buffer are acquired in [`GpuBackend::new`]; textures and the
/// readback buffer are (re)created per image size. Everything is released when the backend drops.
pub struct GpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    params: wgpu::Buffer,
    target: Option<Target>,
}

impl GpuBackend {
    /// Acquire an adapter and device and compile the exposure shader.
    pub fn new() -> MirageResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| match e {
            wgpu::RequestAdapterError::NotFound { .. } => {
                MirageError::capability("no gpu adapter available")
            }
            other => MirageError::capability(format!("wgpu request_adapter failed: {other:?}")),
        })?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("mirage_device"),
            required_features: wgpu::Features::empty(),
            required_limits: adapter.limits(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        }))
        .map_err(|e| MirageError::capability(format!("wgpu request_device failed: {e:?}")))?;

        let params = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mirage_exposure_params"),
            size: 16,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mirage_exposure_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(16),
                    },
                    count: None,
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mirage_exposure_shader"),
            source: wgpu::ShaderSource::Wgsl(EXPOSURE_WGSL.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mirage_exposure_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mirage_exposure_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Rgba8Unorm,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::debug!(adapter = ?adapter.get_info().name, "gpu exposure backend ready");

        Ok(Self {
            device,
            queue,
            pipeline,
            bind_group_layout,
            params,
            target: None,
        })
    }

    fn ensure_target(&mut self, width: u32, height: u32) -> MirageResult<()> {
        if self
            .target
            .as_ref()
            .is_some_and(|t| t.width == width && t.height == height)
        {
            return Ok(());
        }
        check_target_size(width, height, &self.device.limits())?;
        // release the previous size before allocating the next one
        self.target = None;

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let source = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("mirage_exposure_source"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let output = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("mirage_exposure_output"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });

        let bytes_per_row_unpadded = width
            .checked_mul(4)
            .ok_or_else(|| MirageError::validation("render target width overflow"))?;
        let readback_bytes_per_row =
            align_to(bytes_per_row_unpadded, wgpu::COPY_BYTES_PER_ROW_ALIGNMENT);
        let buffer_size = u64::from(readback_bytes_per_row)
            .checked_mul(u64::from(height))
            .ok_or_else(|| MirageError::validation("readback buffer size overflow"))?;
        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mirage_exposure_readback"),
            size: buffer_size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.target = Some(Target {
            width,
            height,
            source_view: source.create_view(&wgpu::TextureViewDescriptor::default()),
            output_view: output.create_view(&wgpu::TextureViewDescriptor::default()),
            source,
            output,
            readback,
            readback_bytes_per_row,
        });
        Ok(())
    }
}

impl ExposureBackend for GpuBackend {
    fn name(&self) -> &'static str {
        "gpu"
    }

    fn apply(&mut self, src: &Bitmap, ev: f32) -> MirageResult<Bitmap> {
        let (width, height) = src.dimensions();
        self.ensure_target(width, height)?;
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| MirageError::capability("gpu target not initialized"))?;

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &target.source,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            src.as_rgba8(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let mut params = [0u8; 16];
        params[0..4].copy_from_slice(&clamp_ev(ev).to_le_bytes());
        self.queue.write_buffer(&self.params, 0, &params);

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mirage_exposure_bg"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&target.source_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: self.params.as_entire_binding(),
                },
            ],
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("mirage_exposure_encoder"),
            });
        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("mirage_exposure_rp"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target.output_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rp.set_pipeline(&self.pipeline);
            rp.set_bind_group(0, &bind_group, &[]);
            rp.draw(0..3, 0..1);
        }
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &target.output,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &target.readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(target.readback_bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(Some(encoder.finish()));

        let buffer_slice = target.readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |res| {
            let _ = tx.send(res);
        });
        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .map_err(|e| MirageError::capability(format!("wgpu poll failed: {e:?}")))?;
        rx.recv()
            .map_err(|_| MirageError::capability("readback channel closed"))?
            .map_err(|e| MirageError::capability(format!("readback map failed: {e:?}")))?;

        let row_bytes = width as usize * 4;
        let padded_row_bytes = target.readback_bytes_per_row as usize;
        let mut out = Vec::with_capacity(row_bytes * height as usize);
        {
            let mapped = buffer_slice.get_mapped_range();
            for row in 0..height as usize {
                let start = row * padded_row_bytes;
                out.extend_from_slice(&mapped[start..start + row_bytes]);
            }
        }
        target.readback.unmap();

        Bitmap::from_rgba8(width, height, out)
    }
}

/// Reject images the device cannot hold as a texture or read back in one buffer.
fn check_target_size(width: u32, height: u32, limits: &wgpu::Limits) -> MirageResult<()> {
    let max_dim = limits.max_texture_dimension_2d;
    if width > max_dim || height > max_dim {
        return Err(MirageError::capability(format!(
            "image {width}x{height} exceeds the gpu texture limit of {max_dim}px"
        )));
    }
    let row = align_to(width.saturating_mul(4), wgpu::COPY_BYTES_PER_ROW_ALIGNMENT);
    let bytes = u64::from(row) * u64::from(height);
    if bytes > limits.max_buffer_size {
        return Err(MirageError::capability(format!(
            "image {width}x{height} needs a {bytes} byte readback buffer, gpu limit is {}",
            limits.max_buffer_size
        )));
    }
    Ok(())
}

fn align_to(v: u32, alignment: u32) -> u32 {
    v.div_ceil(alignment) * alignment
}

#[cfg(test)]
#[path = "../../tests/unit/render/gpu.rs"]
mod tests;
