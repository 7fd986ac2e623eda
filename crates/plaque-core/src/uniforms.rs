use crate::camera::Camera;
use crate::scene::Plaque;

/// GPU layout of one plaque's uniform block. Mirrors `PlaqueUniforms` in
/// `shaders/plaque.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaqueGpuUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = centre, w unused
    pub center: [f32; 4],
    /// xy = size, zw = focus
    pub size_focus: [f32; 4],
    /// x = hover, y = texture ready (0 or 1), z = time, w unused
    pub params: [f32; 4],
}

pub fn pack_plaque_uniforms(camera: &Camera, plaque: &Plaque, time: f32) -> PlaqueGpuUniforms {
    let p = plaque.position;
    let u = plaque.uniforms;
    PlaqueGpuUniforms {
        view_proj: camera.view_projection().to_cols_array_2d(),
        center: [p.x, p.y, p.z, 0.0],
        size_focus: [plaque.size.x, plaque.size.y, u.focus.x, u.focus.y],
        params: [
            u.hover,
            if plaque.texture.is_ready() { 1.0 } else { 0.0 },
            time,
            0.0,
        ],
    }
}
