use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};

use super::{add_section_lights, SceneComposer};
use crate::error::Result;
use crate::geometry::{cuboid_mesh, sphere_mesh, torus_mesh};
use crate::scene::components::{GroupAnimation, OrbitAnimation, SpinAnimation};
use crate::scene::config::validate_records;
use crate::scene::generator::{CircleLayout, SceneGenerator};
use crate::scene::{
    Camera, ItemRecord, Material, Scene, SceneConfig, ShapeDescriptor, ShapeKind, Transform,
};

const GROUP_SPIN: f32 = 0.2;
const DOT_COUNT: usize = 8;
const DOT_RADIUS: f32 = 1.8;

/// Centerpiece for one project: an accent cube inside a wireframe shell,
/// two crossed rings and a halo of dots.
pub struct ProjectComposer {
    record: ItemRecord,
}

impl ProjectComposer {
    pub fn new(record: ItemRecord) -> Self {
        Self { record }
    }
}

impl SceneComposer for ProjectComposer {
    fn name(&self) -> &str {
        &self.record.label
    }

    fn compose(&self, scene: &mut Scene) -> Result<()> {
        let colors = validate_records(std::slice::from_ref(&self.record))?;
        let accent = colors[0];

        scene.set_camera(Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0), 75.0));
        add_section_lights(scene);

        let group = scene.spawn_group(
            None,
            &self.record.label,
            Transform::IDENTITY,
            Some(GroupAnimation::spin(Vec3::new(0.0, GROUP_SPIN, 0.0))),
        );

        let cube = ShapeDescriptor::new(ShapeKind::Cuboid, 1.2, Vec3::ZERO, accent);
        scene
            .spawn_shape(cube)
            .child_of(group)
            .with_material(
                Material::new(accent)
                    .with_emissive(0.5)
                    .with_roughness(0.2)
                    .with_metallic(0.8)
                    .with_opacity(0.9),
            )
            .with_spin(SpinAnimation::new(Vec3::new(0.3, 0.5, 0.0)))
            .spawn();

        scene
            .spawn()
            .child_of(group)
            .with_name("Wireframe")
            .with_geometry(cuboid_mesh(1.5))
            .with_material(Material::white().wireframe().with_opacity(0.2))
            .spawn();

        scene
            .spawn()
            .child_of(group)
            .with_name("Accent Ring")
            .with_geometry(torus_mesh(1.0, 0.03, 16, 100))
            .with_material(Material::new(accent).with_emissive(0.3))
            .with_spin(SpinAnimation::new(Vec3::new(0.2, 0.0, 0.3)))
            .spawn();

        scene
            .spawn()
            .child_of(group)
            .with_name("Halo Ring")
            .with_transform(Transform::from_trs(
                Vec3::ZERO,
                Quat::from_rotation_y(FRAC_PI_2),
                Vec3::ONE,
            ))
            .with_geometry(torus_mesh(1.2, 0.02, 16, 100))
            .with_material(Material::white().with_emissive(0.2))
            .spawn();

        let dot = scene.assets.meshes.insert(sphere_mesh(0.08, 8, 8).into());
        for i in 0..DOT_COUNT {
            let angle = TAU * i as f32 / DOT_COUNT as f32;
            scene
                .spawn()
                .child_of(group)
                .with_name(format!("Dot {}", i))
                .at(Vec3::new(angle.cos() * DOT_RADIUS, angle.sin() * DOT_RADIUS, 0.0))
                .with_mesh(dot)
                .with_material(Material::white().with_emissive(0.5))
                .spawn();
        }

        log::debug!(
            "Project '{}' composed in {}",
            self.record.label,
            accent.to_hex()
        );
        Ok(())
    }
}

/// All projects at once, one accent cube per project on a shared circle.
pub struct ProjectGallery {
    records: Vec<ItemRecord>,
    generator: SceneGenerator,
}

impl ProjectGallery {
    pub fn new(records: Vec<ItemRecord>) -> Self {
        Self {
            records,
            generator: SceneGenerator::new().with_circle(CircleLayout {
                radius: 3.0,
                kind: ShapeKind::Cuboid,
                base_size: 0.8,
                ..CircleLayout::default()
            }),
        }
    }

    pub fn with_layout(mut self, circle: CircleLayout) -> Self {
        self.generator = self.generator.with_circle(circle);
        self
    }
}

impl SceneComposer for ProjectGallery {
    fn name(&self) -> &str {
        "gallery"
    }

    fn compose(&self, scene: &mut Scene) -> Result<()> {
        let descriptors = self
            .generator
            .generate(&SceneConfig::Records(self.records.clone()), None)?;

        scene.set_camera(Camera::looking_at_origin(Vec3::new(0.0, 2.0, 9.0), 60.0));
        add_section_lights(scene);

        let group = scene.spawn_group(
            None,
            "Gallery",
            Transform::IDENTITY,
            Some(GroupAnimation::spin(Vec3::new(0.0, GROUP_SPIN * 0.5, 0.0))),
        );
        let center = self.generator.circle.center;
        for descriptor in &descriptors {
            scene
                .spawn_shape(*descriptor)
                .child_of(group)
                .with_material(
                    Material::new(descriptor.color)
                        .with_emissive(0.5)
                        .with_roughness(0.2)
                        .with_metallic(0.8),
                )
                .with_orbit(OrbitAnimation::on_circle(descriptor, center).with_drift(0.3, 0.15, 0.2))
                .with_spin(SpinAnimation::new(Vec3::new(0.3, 0.5, 0.0)))
                .spawn();
        }

        log::debug!("Gallery composed with {} projects", descriptors.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::SceneError;
    use crate::scene::components::{Name, TransformComponent};

    fn record() -> ItemRecord {
        ItemRecord::new(1, "NEBULA", "Web Application").with_accent("#ff6b6b")
    }

    #[test]
    fn one_project_is_one_handle() {
        let mut scene = Scene::new("project");
        ProjectComposer::new(record()).compose(&mut scene).unwrap();

        assert_eq!(scene.object_count(), 1);
        let handle = scene.handles().as_slice()[0];
        assert_eq!(handle.descriptor().color, Color::from_srgb_u8([0xff, 0x6b, 0x6b]));
        assert_eq!(scene.light_count(), 2);
    }

    #[test]
    fn dots_circle_the_cube() {
        let mut scene = Scene::new("project");
        ProjectComposer::new(record()).compose(&mut scene).unwrap();

        let mut dots = 0;
        for (_, (name, transform)) in scene.world.query::<(&Name, &TransformComponent)>().iter() {
            if name.0.starts_with("Dot ") {
                dots += 1;
                assert!((transform.0.translation.length() - DOT_RADIUS).abs() < 1e-5);
                assert_eq!(transform.0.translation.z, 0.0);
            }
        }
        assert_eq!(dots, DOT_COUNT);
    }

    #[test]
    fn accent_ring_angles_track_time() {
        let mut scene = Scene::new("project");
        ProjectComposer::new(record()).compose(&mut scene).unwrap();

        let ring_at = |scene: &Scene| {
            let mut query = scene.world.query::<(&Name, &TransformComponent)>();
            let rotation = query
                .iter()
                .find(|(_, (name, _))| name.0 == "Accent Ring")
                .map(|(_, (_, transform))| transform.0.rotation);
            rotation.unwrap()
        };

        scene.tick(0.0);
        assert!(ring_at(&scene).abs_diff_eq(Quat::IDENTITY, 1e-6));

        scene.tick(5.0);
        let expected = Quat::from_euler(glam::EulerRot::XYZ, 1.0, 0.0, 1.5);
        assert!(ring_at(&scene).abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn missing_accent_fails_before_spawning() {
        let mut scene = Scene::new("project");
        let err = ProjectComposer::new(ItemRecord::new(2, "QUANTUM", "Installation"))
            .compose(&mut scene)
            .unwrap_err();
        assert!(matches!(err, SceneError::MissingAccentColor { id: 2, .. }));
        assert_eq!(scene.world.len(), 1);
    }

    #[test]
    fn single_record_gallery_starts_at_angle_zero_unrotated() {
        let mut scene = Scene::new("gallery");
        ProjectGallery::new(vec![record()]).compose(&mut scene).unwrap();

        scene.tick(0.0);

        let handle = scene.handles().as_slice()[0];
        let transform = scene.world.get::<&TransformComponent>(handle.entity()).unwrap().0;
        assert!(transform.translation.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
