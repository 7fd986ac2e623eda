pub mod camera;
pub mod config;
pub mod constants;
pub mod hover;
pub mod layout;
pub mod picking;
pub mod registry;
pub mod scene;
pub mod scroll;
pub mod stage;
pub mod texture;
pub mod tween;
pub mod uniforms;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use hover::*;
pub use layout::*;
pub use picking::*;
pub use registry::*;
pub use scene::*;
pub use scroll::*;
pub use stage::*;
pub use texture::*;
pub use tween::*;
pub use uniforms::*;

// Shaders bundled as string constants
pub static PLAQUE_WGSL: &str = include_str!("../../../shaders/plaque.wgsl");
