use crate::color::Color;
use crate::geometry::{self, Geometry};
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cuboid,
    Sphere,
    Icosahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cuboid, ShapeKind::Sphere, ShapeKind::Icosahedron];

    /// `size` is the edge length for cuboids and the radius otherwise.
    pub fn build_geometry(self, size: f32) -> Geometry {
        match self {
            ShapeKind::Cuboid => geometry::cuboid_mesh(size),
            ShapeKind::Sphere => geometry::sphere_mesh(size, 32, 16),
            ShapeKind::Icosahedron => geometry::icosahedron_mesh(size),
        }
    }
}

/// Static parameters for one generated object, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub size: f32,
    pub base_position: Vec3,
    pub color: Color,
    pub phase: f32,
    pub angular_speed: f32,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, size: f32, base_position: Vec3, color: Color) -> Self {
        Self {
            kind,
            size,
            base_position,
            color,
            phase: 0.0,
            angular_speed: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_angular_speed(mut self, angular_speed: f32) -> Self {
        self.angular_speed = angular_speed;
        self
    }
}
