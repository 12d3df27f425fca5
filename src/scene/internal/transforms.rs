use crate::scene::components::{Children, Parent, TransformComponent, WorldTransform};
use crate::scene::transform::Transform;
use hecs::World;

/// Recomputes `WorldTransform` for every entity, parents before children.
pub(crate) fn propagate_transforms(world: &mut World) {
    let roots: Vec<hecs::Entity> = world
        .query::<&TransformComponent>()
        .without::<&Parent>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut stack: Vec<(hecs::Entity, Transform)> = Vec::new();

    for root in roots {
        stack.push((root, Transform::IDENTITY));

        while let Some((entity, parent_world)) = stack.pop() {
            let Ok(local) = world.get::<&TransformComponent>(entity).map(|t| t.0) else {
                log::trace!("Entity {:?} lost its transform, skipping subtree", entity);
                continue;
            };

            let world_transform = parent_world.mul_transform(&local);
            if let Err(err) = write_world_transform(world, entity, world_transform) {
                log::error!("Failed to store world transform for {:?}: {:?}", entity, err);
                continue;
            }

            if let Ok(children) = world.get::<&Children>(entity) {
                stack.extend(children.0.iter().rev().map(|&child| (child, world_transform)));
            }
        }
    }
}

fn write_world_transform(
    world: &mut World,
    entity: hecs::Entity,
    transform: Transform,
) -> Result<(), hecs::NoSuchEntity> {
    if let Ok(mut existing) = world.get::<&mut WorldTransform>(entity) {
        existing.0 = transform;
        return Ok(());
    }
    world.insert_one(entity, WorldTransform(transform))
}
