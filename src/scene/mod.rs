// scene/mod.rs

pub mod animation;
pub mod builder;
pub mod camera;
pub mod components;
pub mod config;
pub mod descriptor;
pub mod generator;
pub mod handles;
pub(crate) mod internal;
pub mod material;
pub mod scene_core;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use builder::{EntityBuilder, ShapeBuilder};
pub use camera::{Camera, OrbitCamera};
pub use config::{validate_records, ItemRecord, SceneConfig};
pub use descriptor::{ShapeDescriptor, ShapeKind};
pub use generator::{generate, particle_field, CircleLayout, FieldLayout, SceneGenerator};
pub use handles::{AnimatedObjectHandle, HandleSet};
pub use internal::animations::advance;
pub use material::{Deformation, Material, MaterialFlags};
pub use scene_core::Scene;
pub use surface::{SceneGraph, System, TickContext};
pub use transform::Transform;

// Re-export all components
pub use components::{
    AmbientLight, BasePose, BobAnimation, Children, DirectionalLight, Group, GroupAnimation,
    Label, MaterialComponent, MeshComponent, Name, OrbitAnimation, Parent, PointCloud, PointLight,
    ShapeComponent, SpinAnimation, TransformComponent, Visible, WorldTransform,
};
