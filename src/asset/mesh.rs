use crate::geometry::{Geometry, Vertex};

/// Render-ready geometry owned by the scene's asset cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Points have no index buffer; everything else draws triangles.
    pub fn is_point_list(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl From<Geometry> for Mesh {
    fn from((vertices, indices): Geometry) -> Self {
        Self::new(vertices, indices)
    }
}
