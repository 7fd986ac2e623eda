use crate::constants::{HOVER_OFF, HOVER_ON};
use crate::picking::Intersection;
use crate::scene::Plaque;
use crate::tween::{Easing, TweenKey, TweenScheduler};

/// Turns pointer intersections into hover and focus transitions.
#[derive(Clone, Copy, Debug)]
pub struct HoverController {
    pub duration: f32,
    pub easing: Easing,
}

impl HoverController {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Schedule transitions for one pointer move.
    ///
    /// Every plaque gets exactly one hover transition: toward 1 for the hit
    /// plaque, toward 0 for all others. The hit plaque's focus also drifts
    /// toward the hit's surface coordinate.
    pub fn on_pointer_move(
        &self,
        hit: Option<&Intersection>,
        plaques: &[Plaque],
        tweens: &mut TweenScheduler,
    ) {
        let hit_index = hit.map(|h| h.plaque);
        for (i, plaque) in plaques.iter().enumerate() {
            let target = if hit_index == Some(i) { HOVER_ON } else { HOVER_OFF };
            tweens.schedule_hover(i, plaque.uniforms.hover, target, self.duration, self.easing);
        }
        if let Some(hit) = hit {
            if let Some(plaque) = plaques.get(hit.plaque) {
                tweens.schedule(
                    TweenKey::focus(hit.plaque),
                    plaque.uniforms.focus,
                    hit.uv,
                    self.duration,
                    self.easing,
                );
            }
        }
    }
}
