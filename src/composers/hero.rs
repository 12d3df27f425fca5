use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use super::SceneComposer;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::{point_cloud, sphere_mesh, torus_knot_mesh, torus_mesh};
use crate::scene::components::{
    AmbientLight, DirectionalLight, GroupAnimation, OrbitAnimation, PointCloud, PointLight,
    SpinAnimation,
};
use crate::scene::generator::{particle_field, CircleLayout, SceneGenerator};
use crate::scene::{Camera, Material, OrbitCamera, Scene, ShapeKind, Transform};
use crate::settings::HeroSettings;

const CAMERA_DISTANCE: f32 = 15.0;
const ORBIT_RADIUS: f32 = 4.0;
const ORBITER_COUNT: usize = 8;
const PARTICLE_EXTENT: f32 = 20.0;

/// Distorted core sphere, torus knot, a ring of orbiters, three flat rings
/// and a slowly turning particle cloud, all swaying together.
pub struct HeroComposer {
    particle_count: i64,
    seed: Option<u64>,
    orbit_camera: bool,
}

impl HeroComposer {
    pub fn new(settings: &HeroSettings) -> Self {
        Self {
            particle_count: settings.particle_count,
            seed: settings.seed,
            orbit_camera: settings.orbit_camera,
        }
    }
}

impl SceneComposer for HeroComposer {
    fn name(&self) -> &str {
        "hero"
    }

    fn compose(&self, scene: &mut Scene) -> Result<()> {
        let particles = particle_field(self.particle_count, PARTICLE_EXTENT, self.seed)?;
        let orbiters = SceneGenerator::new()
            .with_circle(CircleLayout {
                radius: ORBIT_RADIUS,
                kind: ShapeKind::Sphere,
                base_size: 0.3,
                ..CircleLayout::default()
            })
            .ring(ORBITER_COUNT, 45.0, 0.7, 0.6);

        scene.set_camera(Camera::looking_at_origin(
            Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            45.0,
        ));
        if self.orbit_camera {
            let orbit = OrbitCamera::auto_rotate(CAMERA_DISTANCE, 0.0, 0.5);
            scene.add_system(move |ctx| orbit.apply(ctx.camera, ctx.elapsed as f32));
        }

        scene.add_ambient_light(AmbientLight {
            color: Color::WHITE,
            intensity: 0.5,
        });
        scene.add_directional_light(
            DirectionalLight {
                color: Color::WHITE,
                intensity: 1.0,
            },
            Vec3::new(10.0, 10.0, 5.0),
        );
        scene.add_point_light(
            PointLight {
                color: Color::WHITE,
                intensity: 0.5,
            },
            Vec3::new(-10.0, -10.0, -5.0),
        );

        let group = scene.spawn_group(
            None,
            "Hero",
            Transform::IDENTITY,
            Some(GroupAnimation::sway(
                Vec3::new(0.2, 0.2, 0.0),
                Vec3::new(0.1, 0.2, 0.0),
            )),
        );

        let coral = Color::from_hex("#ff6b6b")?;
        scene
            .spawn()
            .child_of(group)
            .with_name("Core")
            .with_geometry(sphere_mesh(1.5, 64, 64))
            .with_material(
                Material::new(coral)
                    .with_emissive(0.5)
                    .with_roughness(0.2)
                    .with_metallic(0.8)
                    .with_distort(0.4, 2.0),
            )
            .with_spin(SpinAnimation::new(Vec3::new(0.1, 0.2, 0.0)))
            .spawn();

        let teal = Color::from_hex("#4ecdc4")?;
        scene
            .spawn()
            .child_of(group)
            .with_name("Torus Knot")
            .with_geometry(torus_knot_mesh(2.5, 0.4, 128, 16, 2, 3))
            .with_material(
                Material::new(teal)
                    .with_emissive(0.3)
                    .with_roughness(0.3)
                    .with_metallic(0.7)
                    .with_wobble(0.5, 2.0),
            )
            .with_spin(SpinAnimation::new(Vec3::new(0.2, 0.1, 0.0)))
            .spawn();

        for descriptor in orbiters {
            scene
                .spawn_shape(descriptor)
                .child_of(group)
                .with_material(Material::new(descriptor.color).with_distort(0.2, 1.0))
                .with_orbit(OrbitAnimation::on_circle(&descriptor, Vec3::ZERO).with_drift(0.5, 0.0, 0.3))
                .spawn();
        }

        for i in 0..3 {
            let hue = 120.0 * i as f32;
            scene
                .spawn()
                .child_of(group)
                .with_name(format!("Ring {}", i))
                .with_transform(Transform::from_trs(
                    Vec3::new(0.0, i as f32 * 2.0 - 2.0, 0.0),
                    Quat::from_rotation_x(FRAC_PI_2),
                    Vec3::ONE,
                ))
                .with_geometry(torus_mesh(3.0 + i as f32 * 0.5, 0.02, 16, 100))
                .with_material(Material::new(Color::from_hsl(hue, 0.7, 0.6)).with_opacity(0.2).unlit())
                .spawn();
        }

        scene
            .spawn()
            .child_of(group)
            .with_name("Particles")
            .with_geometry(point_cloud(&particles))
            .with_component(PointCloud { point_size: 0.05 })
            .with_material(Material::white().with_opacity(0.6).additive())
            .with_spin(SpinAnimation::new(Vec3::new(0.0, 0.05, 0.0)))
            .spawn();

        log::debug!(
            "Hero composed with {} orbiters and {} particles",
            ORBITER_COUNT,
            particles.len()
        );
        Ok(())
    }
}
