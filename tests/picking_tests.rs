// Host-side tests for pointer normalisation and plaque picking.

mod common;

use common::*;
use glam::Vec2;
use plaque_core::*;

fn camera() -> Camera {
    Camera::for_viewport(FULL_HD, CAMERA_DISTANCE, CAMERA_NEAR, CAMERA_FAR)
}

fn plaques_for(images: &[FakeImage]) -> Vec<Plaque> {
    let mut loader = CountingLoader::default();
    PlaqueRegistry::initialize(images.to_vec(), FULL_HD, &mut loader).1
}

#[test]
fn pointer_to_ndc_maps_corners_and_centre() {
    assert_eq!(pointer_to_ndc(0.0, 0.0, FULL_HD), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_to_ndc(1920.0, 1080.0, FULL_HD), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_to_ndc(960.0, 540.0, FULL_HD), Vec2::ZERO);
}

#[test]
fn camera_fov_maps_one_unit_to_one_pixel() {
    let cam = camera();
    let ray = cam.ray_from_ndc(pointer_to_ndc(0.0, 0.0, FULL_HD));
    let t = -ray.origin.z / ray.dir.z;
    let hit = ray.at(t);
    assert!(approx(hit.x, -960.0, 0.05), "x = {}", hit.x);
    assert!(approx(hit.y, 540.0, 0.05), "y = {}", hit.y);
}

#[test]
fn hit_reports_surface_coordinate() {
    let images = vec![FakeImage::new(100.0, 50.0, 200.0, 80.0)];
    let plaques = plaques_for(&images);
    // 30% across, 70% up from the bottom edge.
    let x = 100.0 + 0.3 * 200.0;
    let y = 50.0 + (1.0 - 0.7) * 80.0;
    let hit = compute_intersection(x, y, FULL_HD, &camera(), &plaques).expect("expected a hit");
    assert_eq!(hit.plaque, 0);
    assert!(approx(hit.uv.x, 0.3, 1e-3), "u = {}", hit.uv.x);
    assert!(approx(hit.uv.y, 0.7, 1e-3), "v = {}", hit.uv.y);
    assert!(hit.distance > 200.0);
}

#[test]
fn centre_of_image_hits_uv_centre() {
    let images = vec![FakeImage::new(600.0, 400.0, 300.0, 200.0)];
    let plaques = plaques_for(&images);
    let hit = compute_intersection(750.0, 500.0, FULL_HD, &camera(), &plaques)
        .expect("expected a hit");
    assert!(approx(hit.uv.x, 0.5, 1e-3));
    assert!(approx(hit.uv.y, 0.5, 1e-3));
}

#[test]
fn pointer_away_from_plaques_misses() {
    let images = vec![FakeImage::new(100.0, 50.0, 200.0, 80.0)];
    let plaques = plaques_for(&images);
    assert!(compute_intersection(1500.0, 900.0, FULL_HD, &camera(), &plaques).is_none());
}

#[test]
fn pointer_outside_viewport_misses() {
    let images = vec![FakeImage::new(100.0, 50.0, 200.0, 80.0)];
    let plaques = plaques_for(&images);
    assert!(compute_intersection(-500.0, -500.0, FULL_HD, &camera(), &plaques).is_none());
    assert!(compute_intersection(5000.0, 60.0, FULL_HD, &camera(), &plaques).is_none());
}

#[test]
fn no_plaques_means_no_hit() {
    assert!(compute_intersection(960.0, 540.0, FULL_HD, &camera(), &[]).is_none());
}

#[test]
fn nearest_plaque_wins() {
    let images = vec![
        FakeImage::new(800.0, 400.0, 400.0, 300.0),
        FakeImage::new(900.0, 450.0, 200.0, 200.0),
    ];
    let mut plaques = plaques_for(&images);
    // Lift the second plaque toward the camera.
    plaques[1].position.z = 20.0;
    let hit = compute_intersection(1000.0, 550.0, FULL_HD, &camera(), &plaques)
        .expect("expected a hit");
    assert_eq!(hit.plaque, 1);
    assert!(hit.distance < 200.0);
}

#[test]
fn equal_distance_keeps_first_plaque() {
    let images = vec![
        FakeImage::new(800.0, 400.0, 400.0, 300.0),
        FakeImage::new(900.0, 450.0, 200.0, 200.0),
    ];
    let plaques = plaques_for(&images);
    let hit = compute_intersection(1000.0, 550.0, FULL_HD, &camera(), &plaques)
        .expect("expected a hit");
    assert_eq!(hit.plaque, 0);
}

#[test]
fn ray_parallel_to_plaque_misses() {
    let images = vec![FakeImage::new(100.0, 50.0, 200.0, 80.0)];
    let plaques = plaques_for(&images);
    let ray = Ray {
        origin: glam::Vec3::new(0.0, 0.0, 10.0),
        dir: glam::Vec3::X,
    };
    assert!(ray_plaque(&ray, &plaques[0]).is_none());
}
