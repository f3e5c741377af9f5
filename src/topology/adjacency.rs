use crate::error::TopologyError;
use crate::math::Vector3;

use super::edge::Edge;
use super::face::Face;
use super::vertex::Vertex;
use super::Polyhedron;

/// Read-only adjacency queries over one mesh.
///
/// Borrows the mesh and derives its undirected edge list once up front;
/// every query answers by value equality, so vertices recomputed by a
/// subdivision pass resolve to the mesh vertices they coincide with.
#[derive(Debug)]
pub struct Adjacency<'a> {
    mesh: &'a Polyhedron,
    edges: Vec<Edge>,
}

impl<'a> Adjacency<'a> {
    /// Creates the query layer for a mesh.
    #[must_use]
    pub fn new(mesh: &'a Polyhedron) -> Self {
        Self {
            mesh,
            edges: mesh.edges(),
        }
    }

    /// Returns all faces whose loop contains the vertex.
    #[must_use]
    pub fn faces_containing(&self, vertex: &Vertex) -> Vec<&'a Face> {
        self.mesh
            .faces()
            .iter()
            .filter(|face| face.contains_vertex(vertex))
            .collect()
    }

    /// Returns all undirected mesh edges touching the vertex.
    #[must_use]
    pub fn edges_containing(&self, vertex: &Vertex) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.contains_vertex(vertex))
            .copied()
            .collect()
    }

    /// Returns the edges of one face's own loop touching the vertex, in
    /// loop order.
    ///
    /// For a well-formed face this yields exactly two edges: the one
    /// arriving at the vertex and the one leaving it.
    #[must_use]
    pub fn edges_of_face_containing(&self, face: &Face, vertex: &Vertex) -> Vec<Edge> {
        face.edges()
            .iter()
            .filter(|edge| edge.contains_vertex(vertex))
            .copied()
            .collect()
    }

    /// Returns the two faces sharing the edge (or its reversal).
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NonManifoldEdge`] unless exactly two
    /// faces contain the edge.
    pub fn winging_faces(&self, edge: &Edge) -> Result<(&'a Face, &'a Face), TopologyError> {
        let wings: Vec<&Face> = self
            .mesh
            .faces()
            .iter()
            .filter(|face| face.contains_edge_undirected(edge))
            .collect();
        match wings.as_slice() {
            [first, second] => Ok((*first, *second)),
            other => Err(TopologyError::NonManifoldEdge { found: other.len() }),
        }
    }

    /// Returns the number of faces incident to the vertex.
    ///
    /// On a closed manifold this equals the number of incident edges; the
    /// subdivision weights rely on the two quantities coinciding.
    #[must_use]
    pub fn valence(&self, vertex: &Vertex) -> usize {
        self.faces_containing(vertex).len()
    }

    /// Returns the 1-ring of the vertex: the far endpoint of every
    /// incident edge.
    #[must_use]
    pub fn ring_vertices(&self, vertex: &Vertex) -> Vec<Vertex> {
        let mut ring = Vec::new();
        for edge in &self.edges {
            if edge.start() == *vertex {
                ring.push(edge.end());
            } else if edge.end() == *vertex {
                ring.push(edge.start());
            }
        }
        ring
    }
}

/// Component-wise arithmetic mean of a vertex list.
///
/// # Errors
///
/// Returns [`TopologyError::EmptyVertexSet`] on an empty slice.
pub fn average(vertices: &[Vertex]) -> Result<Vertex, TopologyError> {
    if vertices.is_empty() {
        return Err(TopologyError::EmptyVertexSet);
    }
    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc, vertex| acc + vertex.coords());
    #[allow(clippy::cast_precision_loss)]
    let count = vertices.len() as f64;
    Ok(Vertex::from_coords(sum / count))
}
