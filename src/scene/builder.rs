// scene/builder.rs
// Fluent spawning on top of hecs::EntityBuilder

use glam::Vec3;
use hecs::{Component, Entity};

use super::components::*;
use crate::asset::{Handle, Mesh};
use crate::color::Color;
use crate::geometry::Geometry;
use crate::scene::descriptor::ShapeDescriptor;
use crate::scene::handles::AnimatedObjectHandle;
use crate::scene::material::Material;
use crate::scene::{Scene, Transform};

/// Builds one fixture entity and hangs it under a parent (the scene root
/// unless told otherwise).
pub struct EntityBuilder<'s> {
    scene: &'s mut Scene,
    builder: hecs::EntityBuilder,
    parent: Entity,
}

impl<'s> EntityBuilder<'s> {
    pub fn new(scene: &'s mut Scene) -> Self {
        let parent = scene.root();
        Self {
            scene,
            builder: hecs::EntityBuilder::new(),
            parent,
        }
    }

    pub fn child_of(mut self, parent: Entity) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.builder.add(Name::new(name));
        self
    }

    /// Sets both the live transform and the rest pose animations start from.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.builder.add(TransformComponent(transform));
        self.builder.add(BasePose::from_transform(&transform));
        self
    }

    pub fn at(self, translation: Vec3) -> Self {
        self.with_transform(Transform::from_translation(translation))
    }

    pub fn with_mesh(mut self, mesh: Handle<Mesh>) -> Self {
        self.builder.add(MeshComponent(mesh));
        self
    }

    /// Uploads `geometry` into the scene's mesh cache.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        let mesh = self.scene.assets.meshes.insert(geometry.into());
        self.builder.add(MeshComponent(mesh));
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.builder.add(MaterialComponent(material));
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.builder.add(Visible(visible));
        self
    }

    pub fn with_spin(mut self, spin: SpinAnimation) -> Self {
        self.builder.add(spin);
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitAnimation) -> Self {
        self.builder.add(orbit);
        self
    }

    pub fn with_bob(mut self, bob: BobAnimation) -> Self {
        self.builder.add(bob);
        self
    }

    pub fn as_group(mut self, animation: Option<GroupAnimation>) -> Self {
        self.builder.add(Group);
        if let Some(animation) = animation {
            self.builder.add(animation);
        }
        self
    }

    pub fn with_label(mut self, text: impl Into<String>, font_size: f32) -> Self {
        self.builder.add(Label {
            text: text.into(),
            font_size,
            color: Color::WHITE,
        });
        self
    }

    pub fn with_component(mut self, component: impl Component) -> Self {
        self.builder.add(component);
        self
    }

    pub fn spawn(self) -> Entity {
        self.finish().0
    }

    fn finish(mut self) -> (Entity, &'s mut Scene) {
        if !self.builder.has::<TransformComponent>() {
            self = self.with_transform(Transform::IDENTITY);
        }
        if !self.builder.has::<Visible>() {
            self.builder.add(Visible::default());
        }
        let entity = self.scene.world.spawn(self.builder.build());
        self.scene.attach_child(self.parent, entity);
        (entity, self.scene)
    }
}

/// Builds the live object for one generated descriptor.
pub struct ShapeBuilder<'s> {
    inner: EntityBuilder<'s>,
    descriptor: ShapeDescriptor,
}

impl<'s> ShapeBuilder<'s> {
    pub fn new(scene: &'s mut Scene, descriptor: ShapeDescriptor) -> Self {
        let mesh = scene.assets.shape_mesh(descriptor.kind, descriptor.size);
        let inner = EntityBuilder::new(scene)
            .at(descriptor.base_position)
            .with_mesh(mesh)
            .with_material(Material::new(descriptor.color));
        Self { inner, descriptor }
    }

    pub fn child_of(mut self, parent: Entity) -> Self {
        self.inner = self.inner.child_of(parent);
        self
    }

    /// Replaces the default material; the descriptor color is kept.
    pub fn with_material(mut self, material: Material) -> Self {
        let material = Material {
            base_color: self.descriptor.color,
            ..material
        };
        self.inner = self.inner.with_material(material);
        self
    }

    pub fn with_spin(mut self, spin: SpinAnimation) -> Self {
        self.inner = self.inner.with_spin(spin);
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitAnimation) -> Self {
        self.inner = self.inner.with_orbit(orbit);
        self
    }

    pub fn with_bob(mut self, bob: BobAnimation) -> Self {
        self.inner = self.inner.with_bob(bob);
        self
    }

    pub fn spawn(self) -> AnimatedObjectHandle {
        let descriptor = self.descriptor;
        let index = self.inner.scene.handles().next_index();
        let (entity, scene) = self
            .inner
            .with_component(ShapeComponent { descriptor, index })
            .finish();
        scene.register_handle(entity, descriptor)
    }
}
