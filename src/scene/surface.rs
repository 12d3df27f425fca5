use crate::scene::descriptor::ShapeDescriptor;
use crate::scene::handles::{AnimatedObjectHandle, HandleSet};
use crate::scene::Camera;
use hecs::World;

/// What a per-frame system gets to touch.
pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub camera: &'a mut Camera,
    pub elapsed: f64,
}

pub type System = Box<dyn FnMut(&mut TickContext<'_>)>;

/// The render surface as seen by the scene composers.
///
/// An implementation owns the objects, runs the animation driver on every
/// `tick`, applies group transforms, and releases everything in one call
/// on teardown.
pub trait SceneGraph {
    /// Creates the live object for `descriptor` in the scene's root group.
    fn create_handle(&mut self, descriptor: ShapeDescriptor) -> AnimatedObjectHandle;

    /// Registers a callback run once per tick, after the driver.
    fn on_tick(&mut self, system: System);

    /// Advances every managed object to `elapsed` seconds.
    fn tick(&mut self, elapsed: f64);

    /// Destroys every object; returns how many entities were released.
    fn destroy_scene(&mut self) -> usize;

    fn handles(&self) -> &HandleSet;
}
