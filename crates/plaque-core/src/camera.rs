//! Perspective camera looking down -Z at the plaque plane.
//!
//! The camera is placed so that, at creation time, one world unit on `z = 0`
//! equals one CSS pixel vertically. Plaque positions can then be written in
//! pixels directly.

use crate::layout::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// A world-space ray. `dir` is normalised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Mat4,
}

/// Vertical field of view that maps `viewport_height` pixels onto the plane
/// `distance` units in front of the eye.
#[inline]
pub fn pixel_perfect_fovy(viewport_height: f32, distance: f32) -> f32 {
    2.0 * (viewport_height / 2.0 / distance).atan()
}

impl Camera {
    pub fn new(
        eye: Vec3,
        target: Vec3,
        aspect: f32,
        fovy_radians: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Camera at `(0, 0, distance)` looking at the origin, sized for `viewport`.
    pub fn for_viewport(viewport: Viewport, distance: f32, znear: f32, zfar: f32) -> Self {
        Self::new(
            Vec3::new(0.0, 0.0, distance),
            Vec3::ZERO,
            viewport.aspect(),
            pixel_perfect_fovy(viewport.height, distance),
            znear,
            zfar,
        )
    }

    /// Change the aspect ratio. Takes effect after [`Camera::update_projection`].
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Recompute the cached projection from the current parameters.
    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    /// Cached clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World to view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// World-space ray from the eye through a point in normalised device
    /// coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_h = (self.fovy_radians * 0.5).tan();
        let view_dir = Vec3::new(ndc.x * half_h * self.aspect, ndc.y * half_h, -1.0);
        let dir = self.view_matrix().inverse().transform_vector3(view_dir);
        Ray {
            origin: self.eye,
            dir: dir.normalize(),
        }
    }
}
