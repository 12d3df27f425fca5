use crate::scene::components::{Name, ShapeComponent, WorldTransform};
use hecs::World;

pub(crate) fn log_transform_summary(scene_name: &str, world: &World, elapsed: f64) {
    log::info!("=== {} @ {:.2}s ===", scene_name, elapsed);
    for (_entity, (name, shape, world_transform)) in world
        .query::<(Option<&Name>, Option<&ShapeComponent>, &WorldTransform)>()
        .iter()
    {
        let label = match (name, shape) {
            (Some(name), _) => name.0.clone(),
            (None, Some(shape)) => format!("{:?} #{}", shape.descriptor.kind, shape.index),
            (None, None) => continue,
        };
        log::debug!(
            "{}: T:{:?} R:{:?}",
            label,
            world_transform.0.translation,
            world_transform.0.rotation
        );
    }
    log::info!("{} entities", world.len());
}
