use super::internal::{animations, debug, transforms};
use crate::asset::Assets;
use crate::scene::builder::{EntityBuilder, ShapeBuilder};
use crate::scene::components::{
    AmbientLight, BasePose, Children, DirectionalLight, Group, GroupAnimation, Name, Parent,
    PointLight, SpinAnimation, TransformComponent, Visible,
};
use crate::scene::descriptor::ShapeDescriptor;
use crate::scene::handles::{AnimatedObjectHandle, HandleSet};
use crate::scene::surface::{SceneGraph, System, TickContext};
use crate::scene::{Camera, Transform};
use hecs::{Entity, World};

pub struct Scene {
    pub world: World,
    pub assets: Assets,
    name: String,
    time: f64,
    root: Entity,
    handles: HandleSet,
    camera: Camera,
    systems: Vec<System>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut world = World::new();
        let root = spawn_root(&mut world, &name);
        Self {
            world,
            assets: Assets::default(),
            name,
            time: 0.0,
            root,
            handles: HandleSet::new(),
            camera: Camera::default(),
            systems: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed seconds of the last tick.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Top-level group every spawned entity hangs under by default.
    pub fn root(&self) -> Entity {
        self.root
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn object_count(&self) -> usize {
        self.handles.len()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn add_system(&mut self, system: impl FnMut(&mut TickContext<'_>) + 'static) {
        self.systems.push(Box::new(system));
    }

    pub fn spawn(&mut self) -> EntityBuilder<'_> {
        EntityBuilder::new(self)
    }

    /// Spawns an empty group under `parent` (or the root).
    pub fn spawn_group(
        &mut self,
        parent: Option<Entity>,
        name: &str,
        transform: Transform,
        animation: Option<GroupAnimation>,
    ) -> Entity {
        let parent = parent.unwrap_or(self.root);
        self.spawn()
            .child_of(parent)
            .with_name(name)
            .with_transform(transform)
            .as_group(animation)
            .spawn()
    }

    pub fn spawn_shape(&mut self, descriptor: ShapeDescriptor) -> ShapeBuilder<'_> {
        ShapeBuilder::new(self, descriptor)
    }

    pub(crate) fn register_handle(
        &mut self,
        entity: Entity,
        descriptor: ShapeDescriptor,
    ) -> AnimatedObjectHandle {
        self.handles.push(entity, descriptor)
    }

    pub fn attach_child(&mut self, parent: Entity, child: Entity) {
        if !self.world.contains(parent) {
            log::warn!("Parent {:?} does not exist, leaving {:?} detached", parent, child);
            return;
        }
        if let Err(err) = self.world.insert_one(child, Parent(parent)) {
            log::warn!("Cannot parent {:?}: {:?}", child, err);
            return;
        }
        if let Ok(mut children) = self.world.get::<&mut Children>(parent) {
            children.0.push(child);
            return;
        }
        if let Err(err) = self.world.insert_one(parent, Children(vec![child])) {
            log::warn!("Cannot attach children to {:?}: {:?}", parent, err);
        }
    }

    pub fn add_ambient_light(&mut self, light: AmbientLight) -> Entity {
        self.spawn().with_name("Ambient Light").with_component(light).spawn()
    }

    pub fn add_directional_light(&mut self, light: DirectionalLight, position: glam::Vec3) -> Entity {
        self.spawn()
            .with_name("Directional Light")
            .at(position)
            .with_component(light)
            .spawn()
    }

    pub fn add_point_light(&mut self, light: PointLight, position: glam::Vec3) -> Entity {
        self.spawn()
            .with_name("Point Light")
            .at(position)
            .with_component(light)
            .spawn()
    }

    pub fn light_count(&self) -> usize {
        self.world.query::<&AmbientLight>().iter().count()
            + self.world.query::<&DirectionalLight>().iter().count()
            + self.world.query::<&PointLight>().iter().count()
    }

    /// Moves every managed object, fixture and group to `elapsed` seconds,
    /// runs registered systems, then refreshes world transforms.
    pub fn tick(&mut self, elapsed: f64) {
        self.time = elapsed;

        animations::advance(&mut self.world, &mut self.handles, elapsed);
        animations::update_fixture_animations(&mut self.world, elapsed);
        animations::update_group_animations(&mut self.world, elapsed);

        let mut ctx = TickContext {
            world: &mut self.world,
            camera: &mut self.camera,
            elapsed,
        };
        for system in &mut self.systems {
            system(&mut ctx);
        }

        transforms::propagate_transforms(&mut self.world);
    }

    /// Releases every entity, mesh and system in one pass. The scene is
    /// left with a fresh root and can be composed again.
    pub fn teardown(&mut self) -> usize {
        let objects = self.handles.drain().count();
        let released = self.world.len() as usize;

        self.world.clear();
        self.assets.clear();
        self.systems.clear();
        self.root = spawn_root(&mut self.world, &self.name);
        self.time = 0.0;

        log::info!(
            "Scene '{}' torn down: {} objects, {} entities released",
            self.name,
            objects,
            released
        );
        released
    }

    pub fn log_summary(&self) {
        debug::log_transform_summary(&self.name, &self.world, self.time);
    }
}

impl SceneGraph for Scene {
    fn create_handle(&mut self, descriptor: ShapeDescriptor) -> AnimatedObjectHandle {
        self.spawn_shape(descriptor)
            .with_spin(SpinAnimation::tumble(&descriptor))
            .spawn()
    }

    fn on_tick(&mut self, system: System) {
        self.systems.push(system);
    }

    fn tick(&mut self, elapsed: f64) {
        Scene::tick(self, elapsed);
    }

    fn destroy_scene(&mut self) -> usize {
        self.teardown()
    }

    fn handles(&self) -> &HandleSet {
        &self.handles
    }
}

fn spawn_root(world: &mut World, name: &str) -> Entity {
    let transform = Transform::IDENTITY;
    world.spawn((
        Name::new(format!("{} Root", name)),
        TransformComponent(transform),
        BasePose::from_transform(&transform),
        Group,
        Visible::default(),
    ))
}
