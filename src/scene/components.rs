// scene/components.rs
// Pure hecs components

use crate::asset::{Handle, Mesh};
use crate::color::Color;
use crate::scene::descriptor::ShapeDescriptor;
use crate::scene::material::Material;
use crate::scene::Transform;
use glam::{Quat, Vec3};

// ============================================================================
// Core Components
// ============================================================================

/// Local transform, rewritten every frame for animated entities
#[derive(Debug, Clone, Copy)]
pub struct TransformComponent(pub Transform);

/// World-space transform (computed from hierarchy)
#[derive(Debug, Clone, Copy)]
pub struct WorldTransform(pub Transform);

/// Rest pose the animations are expressed against; never mutated per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl BasePose {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MeshComponent(pub Handle<Mesh>);

#[derive(Debug, Clone, Copy)]
pub struct MaterialComponent(pub Material);

#[derive(Debug, Clone, Copy)]
pub struct Visible(pub bool);

impl Default for Visible {
    fn default() -> Self {
        Self(true)
    }
}

/// Generated object: descriptor plus its position in the generated order
#[derive(Debug, Clone, Copy)]
pub struct ShapeComponent {
    pub descriptor: ShapeDescriptor,
    pub index: usize,
}

/// Marks an entity that only exists to carry children
#[derive(Debug, Clone, Copy, Default)]
pub struct Group;

/// Point sprites drawn from the entity's mesh vertices
#[derive(Debug, Clone, Copy)]
pub struct PointCloud {
    pub point_size: f32,
}

/// Text anchored at the entity's position
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

// ============================================================================
// Lighting Components
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
}

/// Shines from the entity's translation towards the origin
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
}

// ============================================================================
// Utility Components
// ============================================================================

#[derive(Debug, Clone)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

// ============================================================================
// Animation Components
// ============================================================================

/// Euler (XYZ) rotation growing linearly with elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub angular_velocity: Vec3,
}

/// Circle-layout position with bounded radial and vertical drift
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAnimation {
    pub center: Vec3,
    pub radius: f32,
    pub base_angle: f32,
    pub angular_speed: f32,
    pub frequency: f32,
    pub phase: f32,
    pub radial_amplitude: f32,
    pub vertical_amplitude: f32,
}

/// Vertical sine offset layered onto the rest position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobAnimation {
    pub amplitude: f32,
    pub frequency: f32,
    pub offset: f32,
}

/// Whole-group rotation: a sway term plus a constant spin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupAnimation {
    pub sway_amplitude: Vec3,
    pub sway_frequency: Vec3,
    pub angular_velocity: Vec3,
}

// ============================================================================
// Hierarchy Components
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Parent(pub hecs::Entity);

#[derive(Debug, Clone, Default)]
pub struct Children(pub Vec<hecs::Entity>);
