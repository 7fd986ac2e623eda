use crate::camera::{Camera, Ray};
use crate::layout::Viewport;
use crate::scene::Plaque;
use glam::{Vec2, Vec3};

/// Nearest plaque under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Index into the scene's plaque list.
    pub plaque: usize,
    /// Distance along the ray.
    pub distance: f32,
    pub point: Vec3,
    /// Surface coordinate, u left to right and v bottom to top, both `[0, 1]`.
    pub uv: Vec2,
}

/// Viewport pixels to normalised device coordinates, y up.
#[inline]
pub fn pointer_to_ndc(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (x / viewport.width) * 2.0 - 1.0,
        -(y / viewport.height) * 2.0 + 1.0,
    )
}

/// Ray against the plaque's rectangle on its z plane.
///
/// Returns `(t, hit_point, uv)` for hits in front of the ray origin.
#[inline]
pub fn ray_plaque(ray: &Ray, plaque: &Plaque) -> Option<(f32, Vec3, Vec2)> {
    if ray.dir.z.abs() <= 1e-6 {
        return None;
    }
    let t = (plaque.position.z - ray.origin.z) / ray.dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray.at(t);
    let local = hit - plaque.position;
    let half = plaque.size * 0.5;
    if local.x.abs() > half.x || local.y.abs() > half.y {
        return None;
    }
    let uv = Vec2::new(local.x / plaque.size.x + 0.5, local.y / plaque.size.y + 0.5);
    Some((t, hit, uv))
}

/// Cast a ray from `camera` through the pointer and return the nearest plaque
/// it hits, if any.
pub fn compute_intersection(
    pointer_x: f32,
    pointer_y: f32,
    viewport: Viewport,
    camera: &Camera,
    plaques: &[Plaque],
) -> Option<Intersection> {
    let ray = camera.ray_from_ndc(pointer_to_ndc(pointer_x, pointer_y, viewport));
    let mut best = None::<Intersection>;
    for (i, plaque) in plaques.iter().enumerate() {
        if let Some((t, point, uv)) = ray_plaque(&ray, plaque) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(Intersection {
                        plaque: i,
                        distance: t,
                        point,
                        uv,
                    })
                }
            }
        }
    }
    best
}
