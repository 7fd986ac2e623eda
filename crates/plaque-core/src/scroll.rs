use crate::constants::SCROLL_SNAP_PX;

/// Eased vertical page scroll.
///
/// Wheel input moves `target`; each frame `current` approaches it
/// exponentially. The host applies `current` to the page.
#[derive(Clone, Copy, Debug)]
pub struct SmoothScroll {
    pub current: f32,
    pub target: f32,
    pub max: f32,
    pub lerp_rate: f32,
}

impl SmoothScroll {
    pub fn new(start: f32, max: f32, lerp_rate: f32) -> Self {
        let max = max.max(0.0);
        let start = start.clamp(0.0, max);
        Self {
            current: start,
            target: start,
            max,
            lerp_rate,
        }
    }

    /// Accumulate a wheel delta (pixels, positive scrolls down).
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = (self.target + delta).clamp(0.0, self.max);
    }

    /// Update the scrollable range, e.g. after a resize.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.current = self.current.clamp(0.0, self.max);
    }

    /// Adopt a scroll position set outside the wheel path (scrollbar, keys).
    pub fn sync_to(&mut self, position: f32) {
        self.current = position.clamp(0.0, self.max);
        self.target = self.current;
    }

    /// Advance by `dt` seconds. Returns the new position when it changed.
    pub fn step(&mut self, dt: f32) -> Option<f32> {
        if self.is_settled() {
            return None;
        }
        let diff = self.target - self.current;
        if diff.abs() <= SCROLL_SNAP_PX {
            self.current = self.target;
        } else {
            let alpha = 1.0 - (-self.lerp_rate * dt.max(0.0)).exp();
            self.current += diff * alpha;
        }
        Some(self.current)
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}
