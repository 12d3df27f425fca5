pub mod cache;
pub mod handle;
pub mod mesh;

pub use cache::AssetCache;
pub use handle::Handle;
pub use mesh::Mesh;

use crate::scene::ShapeKind;
use std::collections::HashMap;

pub struct Assets {
    pub meshes: AssetCache<Mesh>,
    shapes: HashMap<(ShapeKind, u32), Handle<Mesh>>,
}

impl Assets {
    pub fn new() -> Self {
        Self {
            meshes: AssetCache::new(),
            shapes: HashMap::new(),
        }
    }

    /// Geometry for a generated shape, built once per (kind, size).
    pub fn shape_mesh(&mut self, kind: ShapeKind, size: f32) -> Handle<Mesh> {
        let meshes = &mut self.meshes;
        *self
            .shapes
            .entry((kind, size.to_bits()))
            .or_insert_with(|| meshes.insert(kind.build_geometry(size).into()))
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
        self.shapes.clear();
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_shapes_share_geometry() {
        let mut assets = Assets::new();
        let a = assets.shape_mesh(ShapeKind::Sphere, 0.3);
        let b = assets.shape_mesh(ShapeKind::Sphere, 0.3);
        let c = assets.shape_mesh(ShapeKind::Cuboid, 0.3);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(assets.meshes.len(), 2);
    }
}
