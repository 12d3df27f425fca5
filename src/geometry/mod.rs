//! CPU-side geometry builders for the shapes the scenes place.

pub mod primitives;
pub mod vertex;

pub use primitives::{
    cuboid_mesh, icosahedron_mesh, point_cloud, sphere_mesh, torus_knot_mesh, torus_mesh, Geometry,
};
pub use vertex::Vertex;
