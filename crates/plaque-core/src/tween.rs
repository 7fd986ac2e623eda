//! Minimal tween scheduler for plaque uniforms.
//!
//! Each (plaque, field) pair holds at most one running transition. Scheduling
//! a new one on the same key replaces the old one and bumps that key's
//! generation, so the most recently scheduled transition always wins.

use crate::scene::Plaque;
use fnv::FnvHashMap;
use glam::Vec2;

/// Easing curves, named after their GSAP counterparts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    Power1Out,
    #[default]
    Power2Out,
    Power3Out,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - inv * inv,
            Easing::Power2Out => 1.0 - inv * inv * inv,
            Easing::Power3Out => 1.0 - inv * inv * inv * inv,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" | "none" => Some(Easing::Linear),
            "power1.out" => Some(Easing::Power1Out),
            "power2.out" => Some(Easing::Power2Out),
            "power3.out" => Some(Easing::Power3Out),
            _ => None,
        }
    }
}

/// Animated uniform on a plaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UniformField {
    Hover,
    Focus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenKey {
    pub plaque: usize,
    pub field: UniformField,
}

impl TweenKey {
    pub const fn hover(plaque: usize) -> Self {
        Self {
            plaque,
            field: UniformField::Hover,
        }
    }

    pub const fn focus(plaque: usize) -> Self {
        Self {
            plaque,
            field: UniformField::Focus,
        }
    }
}

// Hover is stored in `x`; `y` is unused.
#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
    easing: Easing,
    generation: u64,
}

impl Tween {
    fn value(&self) -> Vec2 {
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        self.from.lerp(self.to, self.easing.apply(t))
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Default)]
pub struct TweenScheduler {
    active: FnvHashMap<TweenKey, Tween>,
    generations: FnvHashMap<TweenKey, u64>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving `key` from `from` to `to`, replacing any transition
    /// already running on that key. Returns the new generation.
    pub fn schedule(
        &mut self,
        key: TweenKey,
        from: Vec2,
        to: Vec2,
        duration: f32,
        easing: Easing,
    ) -> u64 {
        let generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        self.active.insert(
            key,
            Tween {
                from,
                to,
                elapsed: 0.0,
                duration: duration.max(0.0),
                easing,
                generation: *generation,
            },
        );
        *generation
    }

    /// Scalar convenience for [`UniformField::Hover`].
    pub fn schedule_hover(
        &mut self,
        plaque: usize,
        from: f32,
        to: f32,
        duration: f32,
        easing: Easing,
    ) -> u64 {
        self.schedule(
            TweenKey::hover(plaque),
            Vec2::new(from, 0.0),
            Vec2::new(to, 0.0),
            duration,
            easing,
        )
    }

    /// Step every running transition by `dt` seconds and write the values
    /// into `plaques`. Finished transitions land exactly on their target.
    pub fn advance(&mut self, dt: f32, plaques: &mut [Plaque]) {
        let generations = &self.generations;
        self.active.retain(|key, tween| {
            // Only the latest generation per key is applied.
            if generations.get(key).copied() != Some(tween.generation) {
                return false;
            }
            tween.elapsed += dt.max(0.0);
            let value = if tween.finished() { tween.to } else { tween.value() };
            if let Some(plaque) = plaques.get_mut(key.plaque) {
                match key.field {
                    UniformField::Hover => plaque.uniforms.hover = value.x,
                    UniformField::Focus => plaque.uniforms.focus = value,
                }
            }
            !tween.finished()
        });
    }

    /// Destination of the running transition on `key`.
    pub fn target(&self, key: TweenKey) -> Option<Vec2> {
        self.active.get(&key).map(|t| t.to)
    }

    /// Number of transitions ever scheduled on `key`.
    pub fn generation(&self, key: TweenKey) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_tween_reports_target() {
        let tween = Tween {
            from: Vec2::ZERO,
            to: Vec2::ONE,
            elapsed: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
            generation: 1,
        };
        assert_eq!(tween.value(), Vec2::ONE);
        assert!(tween.finished());
    }

    #[test]
    fn easing_names_round_trip() {
        for e in [Easing::Linear, Easing::Power1Out, Easing::Power2Out, Easing::Power3Out] {
            let name = match e {
                Easing::Linear => "linear",
                Easing::Power1Out => "power1.out",
                Easing::Power2Out => "power2.out",
                Easing::Power3Out => "power3.out",
            };
            assert_eq!(Easing::from_name(name), Some(e));
        }
        assert_eq!(Easing::from_name("bounce"), None);
    }
}
