use crate::dom;
use crate::texture::{SharedTextures, WebTextureLoader};
use instant::Instant;
use plaque_core::{pack_plaque_uniforms, Renderer, Scene, Viewport};
use std::rc::Rc;
use web_sys as web;

mod helpers;
mod plaques;

pub(crate) use helpers::create_color_texture;
use plaques::{PlaqueResources, PlaqueSlot};

// ===================== WebGPU state =====================

pub struct GpuRenderer {
    surface: wgpu::Surface<'static>,
    device: Rc<wgpu::Device>,
    queue: Rc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    canvas: web::HtmlCanvasElement,
    max_pixel_ratio: f64,
    msaa_samples: u32,
    msaa: Option<(wgpu::Texture, wgpu::TextureView)>,

    plaques: PlaqueResources,
    slots: Vec<PlaqueSlot>,
    textures: SharedTextures,
    _blank_tex: wgpu::Texture,
    blank_view: wgpu::TextureView,
    sampler: wgpu::Sampler,

    started: Instant,
}

impl GpuRenderer {
    /// Acquire a WebGPU device for `canvas`. Also returns the texture loader
    /// that uploads into this renderer's texture table.
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        max_pixel_ratio: f64,
        msaa_samples: u32,
    ) -> anyhow::Result<(Self, WebTextureLoader)> {
        let (width, height) = dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU impls reject unknown fields.
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // The canvas sits over the page, so keep it see-through where possible.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let msaa = helpers::create_msaa_target(&device, &config, msaa_samples);
        let plaques = plaques::create_plaque_resources(&device, format, msaa_samples);
        let (blank_tex, blank_view) = helpers::create_blank_texture(&device, &queue);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let device = Rc::new(device);
        let queue = Rc::new(queue);
        let textures = SharedTextures::default();
        let loader = WebTextureLoader::new(device.clone(), queue.clone(), textures.clone());
        log::info!(
            "[gpu] surface {}x{} {:?} msaa={}",
            width,
            height,
            format,
            msaa_samples
        );

        Ok((
            Self {
                surface,
                device,
                queue,
                config,
                canvas,
                max_pixel_ratio,
                msaa_samples,
                msaa,
                plaques,
                slots: Vec::new(),
                textures,
                _blank_tex: blank_tex,
                blank_view,
                sampler,
                started: Instant::now(),
            },
            loader,
        ))
    }

    /// Make sure there is one slot per plaque and that each slot samples the
    /// image once it has finished loading.
    fn refresh_slots(&mut self, scene: &Scene) {
        while self.slots.len() < scene.plaques.len() {
            let uniform_buffer = plaques::create_uniform_buffer(&self.device);
            let bind_group = plaques::create_bind_group(
                &self.device,
                &self.plaques.bgl,
                &uniform_buffer,
                &self.blank_view,
                &self.sampler,
            );
            self.slots.push(PlaqueSlot {
                uniform_buffer,
                bind_group,
                bound_ready: false,
            });
        }
        let textures = self.textures.borrow();
        for (slot, plaque) in self.slots.iter_mut().zip(scene.plaques.iter()) {
            if slot.bound_ready || !plaque.texture.is_ready() {
                continue;
            }
            if let Some(image) = textures.get(&plaque.texture.id()) {
                slot.bind_group = plaques::create_bind_group(
                    &self.device,
                    &self.plaques.bgl,
                    &slot.uniform_buffer,
                    &image.view,
                    &self.sampler,
                );
                slot.bound_ready = true;
            }
        }
    }
}

impl Renderer for GpuRenderer {
    fn resize(&mut self, _viewport: Viewport) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas, self.max_pixel_ratio);
        if w == self.config.width && h == self.config.height {
            return;
        }
        self.config.width = w;
        self.config.height = h;
        self.surface.configure(&self.device, &self.config);
        self.msaa = helpers::create_msaa_target(&self.device, &self.config, self.msaa_samples);
    }

    fn render(&mut self, scene: &Scene) -> anyhow::Result<()> {
        self.refresh_slots(scene);
        let time = self.started.elapsed().as_secs_f32();
        for (slot, plaque) in self.slots.iter().zip(scene.plaques.iter()) {
            let u = pack_plaque_uniforms(&scene.camera, plaque, time);
            self.queue
                .write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        // Draw into the multisampled target and resolve onto the swapchain.
        let (view, resolve_target) = match &self.msaa {
            Some((_, msaa_view)) => (msaa_view, Some(&frame_view)),
            None => (&frame_view, None),
        };
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("plaque_encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("plaque_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: if resolve_target.is_some() {
                            wgpu::StoreOp::Discard
                        } else {
                            wgpu::StoreOp::Store
                        },
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.plaques.pipeline);
            for slot in self.slots.iter().take(scene.plaques.len()) {
                pass.set_bind_group(0, &slot.bind_group, &[]);
                pass.draw(0..6, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
