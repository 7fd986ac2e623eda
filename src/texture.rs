use crate::render::create_color_texture;
use fnv::FnvHashMap;
use plaque_core::{TextureError, TextureHandle, TextureId, TextureLoader};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct LoadedTexture {
    _texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

/// Uploaded images by texture id, shared between the loader and the renderer.
pub type SharedTextures = Rc<RefCell<FnvHashMap<TextureId, LoadedTexture>>>;

/// Loads `<img>` sources into GPU textures in the background.
pub struct WebTextureLoader {
    device: Rc<wgpu::Device>,
    queue: Rc<wgpu::Queue>,
    textures: SharedTextures,
    next_id: u32,
}

impl WebTextureLoader {
    pub fn new(device: Rc<wgpu::Device>, queue: Rc<wgpu::Queue>, textures: SharedTextures) -> Self {
        Self {
            device,
            queue,
            textures,
            next_id: 0,
        }
    }
}

impl TextureLoader for WebTextureLoader {
    fn load(&mut self, source: &str) -> TextureHandle {
        let handle = TextureHandle::pending(TextureId(self.next_id), source);
        self.next_id += 1;

        let device = self.device.clone();
        let queue = self.queue.clone();
        let textures = self.textures.clone();
        let pending = handle.clone();
        spawn_local(async move {
            let loaded = match decode_image(pending.source()).await {
                Ok(img) => upload_image(&device, &queue, &img, pending.source()),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(tex) => {
                    textures.borrow_mut().insert(pending.id(), tex);
                    pending.mark_ready();
                }
                Err(e) => pending.mark_failed(&e),
            }
        });
        handle
    }
}

async fn decode_image(source: &str) -> Result<web::HtmlImageElement, TextureError> {
    let img = web::HtmlImageElement::new().map_err(|e| TextureError::Fetch {
        source_url: source.to_string(),
        message: format!("{:?}", e),
    })?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(source);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| TextureError::Decode {
            source_url: source.to_string(),
            message: format!("{:?}", e),
        })?;
    Ok(img)
}

fn upload_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    img: &web::HtmlImageElement,
    source: &str,
) -> Result<LoadedTexture, TextureError> {
    let width = img.natural_width();
    let height = img.natural_height();
    if width == 0 || height == 0 {
        return Err(TextureError::Upload {
            source_url: source.to_string(),
            message: "image has no pixels".to_string(),
        });
    }
    let (texture, view) = create_color_texture(
        device,
        "plaque_image",
        width,
        height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        1,
    );
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    log::info!("[texture] loaded {} ({}x{})", source, width, height);
    Ok(LoadedTexture {
        _texture: texture,
        view,
    })
}
