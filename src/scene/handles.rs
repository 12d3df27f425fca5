use crate::scene::descriptor::ShapeDescriptor;

/// A live scene object paired with the descriptor it was generated from.
///
/// The entity id is stable for the object's lifetime; `index` is the
/// object's position in the generated sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedObjectHandle {
    entity: hecs::Entity,
    index: usize,
    descriptor: ShapeDescriptor,
}

impl AnimatedObjectHandle {
    pub(crate) fn new(entity: hecs::Entity, index: usize, descriptor: ShapeDescriptor) -> Self {
        Self {
            entity,
            index,
            descriptor,
        }
    }

    pub fn entity(&self) -> hecs::Entity {
        self.entity
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn descriptor(&self) -> &ShapeDescriptor {
        &self.descriptor
    }
}

/// Ordered set of live handles for one scene.
#[derive(Debug, Clone, Default)]
pub struct HandleSet {
    handles: Vec<AnimatedObjectHandle>,
    next_index: usize,
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimatedObjectHandle> {
        self.handles.iter()
    }

    pub fn as_slice(&self) -> &[AnimatedObjectHandle] {
        &self.handles
    }

    pub fn get(&self, index: usize) -> Option<&AnimatedObjectHandle> {
        self.handles.iter().find(|handle| handle.index == index)
    }

    /// Index the next pushed handle will receive.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Registers `entity`, which must already carry a `TransformComponent`
    /// and `BasePose` for `advance` to move it.
    pub fn push(&mut self, entity: hecs::Entity, descriptor: ShapeDescriptor) -> AnimatedObjectHandle {
        let handle = AnimatedObjectHandle::new(entity, self.next_index, descriptor);
        self.next_index += 1;
        self.handles.push(handle);
        handle
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&AnimatedObjectHandle) -> bool) {
        self.handles.retain(keep);
    }

    /// Empties the set, returning what it held for bulk teardown.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, AnimatedObjectHandle> {
        self.next_index = 0;
        self.handles.drain(..)
    }
}

impl<'a> IntoIterator for &'a HandleSet {
    type Item = &'a AnimatedObjectHandle;
    type IntoIter = std::slice::Iter<'a, AnimatedObjectHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}
