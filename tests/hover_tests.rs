// Host-side tests for tweening and the hover controller.

mod common;

use common::*;
use glam::Vec2;
use plaque_core::*;

fn two_images() -> Vec<FakeImage> {
    vec![
        FakeImage::new(100.0, 50.0, 200.0, 80.0),
        FakeImage::new(1200.0, 600.0, 300.0, 200.0),
    ]
}

// Pointer position that lands on (0.3, 0.7) of the first image.
const HIT_X: f32 = 100.0 + 0.3 * 200.0;
const HIT_Y: f32 = 50.0 + 0.3 * 80.0;

#[test]
fn easings_hit_endpoints() {
    for e in [Easing::Linear, Easing::Power1Out, Easing::Power2Out, Easing::Power3Out] {
        assert_eq!(e.apply(0.0), 0.0, "{:?}", e);
        assert_eq!(e.apply(1.0), 1.0, "{:?}", e);
        assert_eq!(e.apply(2.0), 1.0, "{:?} clamps above", e);
    }
    assert!(approx(Easing::Power2Out.apply(0.5), 0.875, 1e-6));
    assert!(approx(Easing::Power1Out.apply(0.5), 0.75, 1e-6));
}

#[test]
fn decelerating_easing_leads_linear() {
    for i in 1..10 {
        let t = i as f32 / 10.0;
        assert!(Easing::Power2Out.apply(t) > t);
    }
}

#[test]
fn tween_reaches_target_and_goes_idle() {
    let mut loader = CountingLoader::default();
    let (_, mut plaques) = PlaqueRegistry::initialize(two_images(), FULL_HD, &mut loader);
    let mut tweens = TweenScheduler::new();
    tweens.schedule_hover(0, 0.0, 1.0, 0.5, Easing::Power2Out);

    tweens.advance(0.25, &mut plaques);
    assert!(approx(plaques[0].uniforms.hover, 0.875, 1e-5));
    assert!(!tweens.is_idle());

    tweens.advance(0.25, &mut plaques);
    assert_eq!(plaques[0].uniforms.hover, 1.0);
    assert!(tweens.is_idle());
    assert_eq!(plaques[1].uniforms.hover, 0.0, "other plaque untouched");
}

#[test]
fn later_schedule_replaces_earlier_on_same_key() {
    let mut loader = CountingLoader::default();
    let (_, mut plaques) = PlaqueRegistry::initialize(two_images(), FULL_HD, &mut loader);
    let mut tweens = TweenScheduler::new();

    let g1 = tweens.schedule_hover(0, 0.0, 0.0, 0.5, Easing::Power2Out);
    let g2 = tweens.schedule_hover(0, 0.0, 1.0, 0.5, Easing::Power2Out);
    assert_eq!((g1, g2), (1, 2));
    assert_eq!(tweens.generation(TweenKey::hover(0)), 2);
    assert_eq!(tweens.active_count(), 1);
    assert_eq!(tweens.target(TweenKey::hover(0)), Some(Vec2::new(1.0, 0.0)));

    tweens.advance(1.0, &mut plaques);
    assert_eq!(plaques[0].uniforms.hover, 1.0);
}

#[test]
fn hover_and_focus_keys_are_independent() {
    let mut tweens = TweenScheduler::new();
    tweens.schedule_hover(0, 0.0, 1.0, 0.5, Easing::Linear);
    tweens.schedule(TweenKey::focus(0), Vec2::splat(0.5), Vec2::new(0.1, 0.9), 0.5, Easing::Linear);
    assert_eq!(tweens.active_count(), 2);
    assert_eq!(tweens.generation(TweenKey::hover(0)), 1);
    assert_eq!(tweens.generation(TweenKey::focus(0)), 1);
    assert_eq!(tweens.generation(TweenKey::focus(1)), 0);
}

#[test]
fn miss_sends_every_plaque_toward_zero() {
    let mut stage = make_stage(two_images());
    let hit = stage.on_pointer_move(1800.0, 100.0);
    assert!(hit.is_none());
    for i in 0..2 {
        assert_eq!(stage.tweens.target(TweenKey::hover(i)), Some(Vec2::ZERO));
        assert_eq!(stage.tweens.target(TweenKey::focus(i)), None);
    }
}

#[test]
fn hit_raises_hovered_plaque_and_moves_focus() {
    let mut stage = make_stage(two_images());
    let hit = stage.on_pointer_move(HIT_X, HIT_Y).expect("expected a hit");
    assert_eq!(hit.plaque, 0);

    assert_eq!(stage.tweens.target(TweenKey::hover(0)), Some(Vec2::new(1.0, 0.0)));
    assert_eq!(stage.tweens.target(TweenKey::hover(1)), Some(Vec2::ZERO));
    let focus = stage.tweens.target(TweenKey::focus(0)).expect("focus tween");
    assert!(approx(focus.x, 0.3, 1e-3) && approx(focus.y, 0.7, 1e-3), "{:?}", focus);
    assert_eq!(stage.tweens.target(TweenKey::focus(1)), None);

    stage.tick(0.5, |_| {});
    let p0 = stage.scene.plaques[0].uniforms;
    assert_eq!(p0.hover, 1.0);
    assert!(approx(p0.focus.x, 0.3, 1e-3) && approx(p0.focus.y, 0.7, 1e-3));
    assert_eq!(stage.scene.plaques[1].uniforms.hover, 0.0);
}

#[test]
fn one_hover_transition_per_plaque_per_event() {
    let mut stage = make_stage(two_images());
    stage.on_pointer_move(HIT_X, HIT_Y);
    stage.on_pointer_move(HIT_X + 1.0, HIT_Y);
    assert_eq!(stage.tweens.generation(TweenKey::hover(0)), 2);
    assert_eq!(stage.tweens.generation(TweenKey::hover(1)), 2);
    assert_eq!(stage.tweens.generation(TweenKey::focus(0)), 2);
}

#[test]
fn leaving_a_plaque_decays_hover_from_current_value() {
    let mut stage = make_stage(two_images());
    stage.on_pointer_move(HIT_X, HIT_Y);
    stage.tick(0.5, |_| {});
    assert_eq!(stage.scene.plaques[0].uniforms.hover, 1.0);

    stage.on_pointer_move(1800.0, 100.0);
    stage.tick(0.25, |_| {});
    let h = stage.scene.plaques[0].uniforms.hover;
    assert!(approx(h, 0.125, 1e-5), "hover = {}", h);
    stage.tick(0.25, |_| {});
    assert_eq!(stage.scene.plaques[0].uniforms.hover, 0.0);
    // Focus stays where it drifted to.
    assert!(approx(stage.scene.plaques[0].uniforms.focus.x, 0.3, 1e-3));
}
