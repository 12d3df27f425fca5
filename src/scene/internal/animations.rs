use crate::scene::animation::pose_at;
use crate::scene::components::{
    BasePose, BobAnimation, GroupAnimation, OrbitAnimation, ShapeComponent, SpinAnimation,
    TransformComponent,
};
use crate::scene::handles::HandleSet;
use hecs::World;

type MotionQuery<'a> = (
    &'a mut TransformComponent,
    &'a BasePose,
    Option<&'a SpinAnimation>,
    Option<&'a OrbitAnimation>,
    Option<&'a BobAnimation>,
);

/// Rewrites the local transform of every live handle for `elapsed` seconds.
///
/// Output depends only on `elapsed` and per-object components, so calling
/// this twice with the same value is a no-op the second time. Handles whose
/// entity has been despawned are dropped from the set; the rest keep moving.
/// Allocates nothing.
pub fn advance(world: &mut World, handles: &mut HandleSet, elapsed: f64) {
    let time = elapsed as f32;

    handles.retain(|handle| {
        let Ok((transform, base, spin, orbit, bob)) =
            world.query_one_mut::<MotionQuery>(handle.entity())
        else {
            log::trace!(
                "Object {} ({:?}) no longer exists, dropping it from the live set",
                handle.index(),
                handle.entity()
            );
            return false;
        };

        let (translation, rotation) = pose_at(base, spin, orbit, bob, time);
        transform.0.translation = translation;
        transform.0.rotation = rotation;
        true
    });
}

/// Same motion model for static fixtures (rings, knots, point clouds) that
/// are not part of a generated sequence.
pub(crate) fn update_fixture_animations(world: &mut World, elapsed: f64) {
    let time = elapsed as f32;

    for (_entity, (transform, base, spin, orbit, bob)) in world
        .query_mut::<MotionQuery>()
        .without::<&ShapeComponent>()
    {
        if spin.is_none() && orbit.is_none() && bob.is_none() {
            continue;
        }
        let (translation, rotation) = pose_at(base, spin, orbit, bob, time);
        transform.0.translation = translation;
        transform.0.rotation = rotation;
    }
}

/// Group rotation composes with the group's rest rotation; children pick
/// it up during transform propagation.
pub(crate) fn update_group_animations(world: &mut World, elapsed: f64) {
    let time = elapsed as f32;

    for (_entity, (transform, base, group)) in
        world.query_mut::<(&mut TransformComponent, &BasePose, &GroupAnimation)>()
    {
        transform.0.rotation = base.rotation * group.rotation_at(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scene::descriptor::{ShapeDescriptor, ShapeKind};
    use crate::scene::transform::Transform;
    use glam::{Quat, Vec3};

    fn spawn_shape(world: &mut World, handles: &mut HandleSet, position: Vec3) -> hecs::Entity {
        let descriptor = ShapeDescriptor::new(ShapeKind::Cuboid, 0.2, position, Color::WHITE)
            .with_angular_speed(0.5);
        let transform = Transform::from_translation(position);
        let entity = world.spawn((
            TransformComponent(transform),
            BasePose::from_transform(&transform),
            SpinAnimation::tumble(&descriptor),
            BobAnimation::new(0.12, 1.0, handles.len()),
        ));
        let handle = handles.push(entity, descriptor);
        world
            .insert_one(
                entity,
                ShapeComponent {
                    descriptor,
                    index: handle.index(),
                },
            )
            .unwrap();
        entity
    }

    #[test]
    fn advance_is_idempotent() {
        let mut world = World::new();
        let mut handles = HandleSet::new();
        let entity = spawn_shape(&mut world, &mut handles, Vec3::new(1.0, 0.0, -3.0));

        advance(&mut world, &mut handles, 2.75);
        let first = world.get::<&TransformComponent>(entity).unwrap().0;
        advance(&mut world, &mut handles, 2.75);
        let second = world.get::<&TransformComponent>(entity).unwrap().0;

        assert_eq!(first, second);
    }

    #[test]
    fn despawned_objects_are_pruned_without_stopping_others() {
        let mut world = World::new();
        let mut handles = HandleSet::new();
        let gone = spawn_shape(&mut world, &mut handles, Vec3::ZERO);
        let kept = spawn_shape(&mut world, &mut handles, Vec3::X);

        world.despawn(gone).unwrap();
        advance(&mut world, &mut handles, 1.0);

        assert_eq!(handles.len(), 1);
        assert_eq!(handles.as_slice()[0].entity(), kept);
        let rotation = world.get::<&TransformComponent>(kept).unwrap().0.rotation;
        assert_ne!(rotation, Quat::IDENTITY);
    }

    #[test]
    fn fixtures_animate_but_generated_shapes_are_left_to_advance() {
        let mut world = World::new();
        let mut handles = HandleSet::new();
        let shape = spawn_shape(&mut world, &mut handles, Vec3::ZERO);
        let ring = world.spawn((
            TransformComponent(Transform::IDENTITY),
            BasePose::from_transform(&Transform::IDENTITY),
            SpinAnimation::new(Vec3::new(0.0, 0.0, 1.0)),
        ));

        update_fixture_animations(&mut world, 1.0);

        let ring_rotation = world.get::<&TransformComponent>(ring).unwrap().0.rotation;
        assert!(ring_rotation.abs_diff_eq(Quat::from_rotation_z(1.0), 1e-6));
        let shape_rotation = world.get::<&TransformComponent>(shape).unwrap().0.rotation;
        assert_eq!(shape_rotation, Quat::IDENTITY);
    }

    #[test]
    fn group_rotation_composes_with_rest_rotation() {
        let mut world = World::new();
        let rest = Transform::from_trs(Vec3::ZERO, Quat::from_rotation_x(0.5), Vec3::ONE);
        let group = world.spawn((
            TransformComponent(rest),
            BasePose::from_transform(&rest),
            GroupAnimation::spin(Vec3::Y * 0.2),
        ));

        update_group_animations(&mut world, 5.0);

        let rotation = world.get::<&TransformComponent>(group).unwrap().0.rotation;
        let expected = Quat::from_rotation_x(0.5) * Quat::from_rotation_y(1.0);
        assert!(rotation.abs_diff_eq(expected, 1e-6));
    }
}
