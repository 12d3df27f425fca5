use glam::Vec3;

use super::{add_section_lights, SceneComposer};
use crate::error::Result;
use crate::scene::components::{GroupAnimation, OrbitAnimation};
use crate::scene::generator::{CircleLayout, SceneGenerator};
use crate::scene::{Camera, ItemRecord, Material, Scene, SceneConfig, ShapeKind, Transform};
use crate::settings::SkillSettings;

const ORBIT_FREQUENCY: f32 = 0.5;
const RADIAL_DRIFT: f32 = 1.0;
const VERTICAL_DRIFT: f32 = 1.5;
const LABEL_LIFT: f32 = 1.0;

/// One sphere per skill on a circle, sized by level, drifting in and out
/// while the whole cloud turns slowly.
pub struct SkillsComposer {
    records: Vec<ItemRecord>,
    generator: SceneGenerator,
}

impl SkillsComposer {
    pub fn new(settings: &SkillSettings) -> Self {
        Self {
            records: settings.records.clone(),
            generator: SceneGenerator::new().with_circle(CircleLayout {
                radius: settings.radius,
                kind: ShapeKind::Sphere,
                base_size: 0.5,
                magnitude_divisor: Some(200.0),
                ..CircleLayout::default()
            }),
        }
    }
}

impl SceneComposer for SkillsComposer {
    fn name(&self) -> &str {
        "skills"
    }

    fn compose(&self, scene: &mut Scene) -> Result<()> {
        let descriptors = self
            .generator
            .generate(&SceneConfig::Records(self.records.clone()), None)?;

        scene.set_camera(Camera::looking_at_origin(Vec3::new(0.0, 0.0, 8.0), 75.0));
        add_section_lights(scene);

        let group = scene.spawn_group(
            None,
            "Skill Cloud",
            Transform::IDENTITY,
            Some(GroupAnimation::spin(Vec3::new(0.0, 0.1, 0.0))),
        );
        let center = self.generator.circle.center;

        for (record, descriptor) in self.records.iter().zip(&descriptors) {
            scene
                .spawn_shape(*descriptor)
                .child_of(group)
                .with_material(
                    Material::new(descriptor.color)
                        .with_emissive(0.3)
                        .with_roughness(0.2)
                        .with_metallic(0.3),
                )
                .with_orbit(OrbitAnimation::on_circle(descriptor, center).with_drift(
                    ORBIT_FREQUENCY,
                    RADIAL_DRIFT,
                    VERTICAL_DRIFT,
                ))
                .spawn();

            scene
                .spawn()
                .child_of(group)
                .with_name(format!("{} label", record.label))
                .at(descriptor.base_position + Vec3::Y * LABEL_LIFT)
                .with_label(record.label.clone(), 0.3)
                .spawn();
        }

        log::debug!("Skill cloud composed with {} skills", descriptors.len());
        Ok(())
    }
}
