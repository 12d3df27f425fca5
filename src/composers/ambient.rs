use super::SceneComposer;
use crate::error::Result;
use crate::scene::components::{BobAnimation, SpinAnimation};
use crate::scene::generator::SceneGenerator;
use crate::scene::{Material, Scene, SceneConfig, Transform};
use crate::settings::AmbientSettings;

/// One radian per second, so neighbours bob out of step by their index.
const BOB_FREQUENCY: f32 = 1.0;

/// Randomly scattered translucent shapes that tumble and bob in place.
pub struct AmbientComposer {
    count: i64,
    seed: Option<u64>,
    bob_amplitude: f32,
    generator: SceneGenerator,
}

impl AmbientComposer {
    pub fn new(settings: &AmbientSettings) -> Self {
        Self {
            count: settings.count,
            seed: settings.seed,
            bob_amplitude: settings.bob_amplitude,
            generator: SceneGenerator::default(),
        }
    }

    pub fn with_generator(mut self, generator: SceneGenerator) -> Self {
        self.generator = generator;
        self
    }
}

impl SceneComposer for AmbientComposer {
    fn name(&self) -> &str {
        "ambient"
    }

    fn compose(&self, scene: &mut Scene) -> Result<()> {
        let descriptors = self
            .generator
            .generate(&SceneConfig::Count(self.count), self.seed)?;

        let group = scene.spawn_group(None, "Floating Shapes", Transform::IDENTITY, None);
        for (index, descriptor) in descriptors.iter().enumerate() {
            scene
                .spawn_shape(*descriptor)
                .child_of(group)
                .with_material(
                    Material::new(descriptor.color)
                        .with_emissive(0.2)
                        .with_opacity(0.6)
                        .with_roughness(0.3)
                        .with_metallic(0.1),
                )
                .with_spin(SpinAnimation::tumble(descriptor))
                .with_bob(BobAnimation::new(self.bob_amplitude, BOB_FREQUENCY, index))
                .spawn();
        }

        log::debug!("Scattered {} floating shapes", descriptors.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::components::TransformComponent;

    fn ambient(count: i64) -> AmbientComposer {
        AmbientComposer::new(&AmbientSettings {
            count,
            seed: Some(5),
            bob_amplitude: 0.12,
        })
    }

    #[test]
    fn handle_count_matches_configured_count() {
        let mut scene = Scene::new("ambient");
        ambient(20).compose(&mut scene).unwrap();
        assert_eq!(scene.object_count(), 20);

        for step in 1..50 {
            scene.tick(step as f64 * 0.25);
        }
        assert_eq!(scene.object_count(), 20);
    }

    #[test]
    fn zero_count_mounts_an_empty_field() {
        let mut scene = Scene::new("ambient");
        ambient(0).compose(&mut scene).unwrap();
        assert!(scene.handles().is_empty());
        scene.tick(5.0);
        assert!(scene.handles().is_empty());
    }

    #[test]
    fn shapes_stay_within_the_bob_envelope() {
        let mut scene = Scene::new("ambient");
        ambient(10).compose(&mut scene).unwrap();
        let handles: Vec<_> = scene.handles().iter().copied().collect();

        for step in 0..120 {
            scene.tick(step as f64 / 30.0);
            for handle in &handles {
                let base = handle.descriptor().base_position;
                let now = scene.world.get::<&TransformComponent>(handle.entity()).unwrap().0.translation;
                assert_eq!(now.x, base.x);
                assert_eq!(now.z, base.z);
                assert!((now.y - base.y).abs() <= 0.12 + 1e-6);
            }
        }
    }

    #[test]
    fn materials_are_translucent() {
        let mut scene = Scene::new("ambient");
        ambient(3).compose(&mut scene).unwrap();
        let mut query = scene.world.query::<&crate::scene::MaterialComponent>();
        for (_, material) in query.iter() {
            assert!(material.0.is_transparent());
            assert_eq!(material.0.opacity, 0.6);
        }
    }
}
