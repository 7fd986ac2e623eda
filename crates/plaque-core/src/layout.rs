use glam::Vec3;

/// Bounding box of a page element in viewport (CSS pixel) coordinates,
/// origin at the top-left corner, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Visible area of the page in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height. Not guarded against a zero height.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Scene-space centre of a plaque covering `rect`.
///
/// Converts the top-left-origin viewport box into the scene's centre-origin,
/// y-up coordinate system. z is always 0.
#[inline]
pub fn plaque_position(rect: Rect, viewport: Viewport) -> Vec3 {
    Vec3::new(
        rect.left - viewport.width / 2.0 + rect.width / 2.0,
        -rect.top + viewport.height / 2.0 - rect.height / 2.0,
        0.0,
    )
}
