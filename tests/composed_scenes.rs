//! Mounting the page sections end to end.

use glam::Vec3;
use showcase_scenes::scene::{Label, TransformComponent, WorldTransform};
use showcase_scenes::{ShowcaseApp, ShowcaseScene, ShowcaseSettings};

fn settings() -> ShowcaseSettings {
    let mut settings = ShowcaseSettings::default();
    settings.hero.particle_count = 200;
    settings.hero.seed = Some(21);
    settings.ambient.seed = Some(22);
    settings
}

#[test]
fn handle_counts_hold_for_the_scene_lifetime() {
    let mut app = ShowcaseApp::from_settings(&settings()).unwrap();
    let before: Vec<usize> = app.scenes().iter().map(|m| m.scene.object_count()).collect();

    for frame in 0..300 {
        app.tick_at(frame as f64 / 60.0);
    }

    let after: Vec<usize> = app.scenes().iter().map(|m| m.scene.object_count()).collect();
    assert_eq!(before, after);
}

#[test]
fn gallery_mode_replaces_per_project_scenes() {
    let mut settings = settings();
    settings.gallery = true;
    let app = ShowcaseApp::from_settings(&settings).unwrap();

    assert_eq!(app.scenes().len(), 3);
    let gallery = app.scene(ShowcaseScene::Gallery).unwrap();
    assert_eq!(gallery.object_count(), settings.projects.len());
    for handle in gallery.handles() {
        assert!((handle.descriptor().base_position.length() - 3.0).abs() < 1e-5);
    }
}

#[test]
fn skill_labels_turn_with_the_cloud() {
    let mut app = ShowcaseApp::from_settings(&settings()).unwrap();
    app.tick_at(0.0);
    let start: Vec<Vec3> = label_positions(&app);

    app.tick_at(10.0);
    let later: Vec<Vec3> = label_positions(&app);

    for (a, b) in start.iter().zip(&later) {
        assert!((a.y - b.y).abs() < 1e-5);
        assert!((a.length() - b.length()).abs() < 1e-4);
        assert!(a.distance(*b) > 1e-3);
    }
}

fn label_positions(app: &ShowcaseApp) -> Vec<Vec3> {
    let scene = app.scene(ShowcaseScene::Skills).unwrap();
    let mut query = scene.world.query::<(&Label, &WorldTransform)>();
    query.iter().map(|(_, (_, t))| t.0.translation).collect()
}

#[test]
fn settings_file_round_trips_through_json() {
    let json = serde_json::to_string(&settings()).unwrap();
    let parsed = ShowcaseSettings::from_json_str(&json).unwrap();
    assert_eq!(parsed.projects, settings().projects);
    assert_eq!(parsed.skills.records.len(), 6);
}

#[test]
fn project_cube_spins_while_the_group_turns() {
    let mut app = ShowcaseApp::from_settings(&settings()).unwrap();
    app.tick_at(2.0);

    let scene = app.scene(ShowcaseScene::Project(0)).unwrap();
    let cube = scene.handles().as_slice()[0];
    let local = scene.world.get::<&TransformComponent>(cube.entity()).unwrap().0;
    let world = scene.world.get::<&WorldTransform>(cube.entity()).unwrap().0;

    let spin = glam::Quat::from_euler(glam::EulerRot::XYZ, 0.6, 1.0, 0.0);
    assert!(local.rotation.abs_diff_eq(spin, 1e-5));
    let turned = glam::Quat::from_rotation_y(0.4) * spin;
    assert!(world.rotation.abs_diff_eq(turned, 1e-5));
}
