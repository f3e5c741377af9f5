pub mod adjacency;
pub mod edge;
pub mod face;
pub mod vertex;

pub use adjacency::{average, Adjacency};
pub use edge::{Edge, EdgeKey};
pub use face::Face;
pub use vertex::{Vertex, VertexKey};

use std::collections::HashSet;

/// A polyhedral mesh: a collection of faces in Euclidean space.
///
/// The edge and vertex sets are derived from the faces by traversal and
/// value-deduplication, in face order, so identical inputs always derive
/// identical lists. The subdivision algorithms assume a closed 2-manifold
/// (every undirected edge shared by exactly two faces); violations are
/// detected by the adjacency queries, not repaired here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyhedron {
    faces: Vec<Face>,
}

impl Polyhedron {
    /// Creates a polyhedron from a face collection.
    #[must_use]
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Returns the faces of this polyhedron.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if this polyhedron has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns every undirected edge exactly once.
    ///
    /// Walks each face's loop and keeps an edge unless it or its reversal
    /// was already kept, so each interior edge appears once despite being
    /// listed by both winging faces.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for face in &self.faces {
            for edge in face.edges() {
                if seen.insert(edge.key()) {
                    edges.push(*edge);
                }
            }
        }
        edges
    }

    /// Returns every distinct vertex, each kept on first occurrence.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut seen = HashSet::new();
        let mut vertices = Vec::new();
        for face in &self.faces {
            for edge in face.edges() {
                for vertex in [edge.start(), edge.end()] {
                    if seen.insert(vertex.key()) {
                        vertices.push(vertex);
                    }
                }
            }
        }
        vertices
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vertex {
        Vertex::new(x, y, z)
    }

    /// Closed tetrahedron with outward winding.
    fn tetrahedron() -> Polyhedron {
        let a = v(0.0, 0.0, 0.0);
        let b = v(1.0, 0.0, 0.0);
        let c = v(0.0, 1.0, 0.0);
        let d = v(0.0, 0.0, 1.0);
        Polyhedron::new(vec![
            Face::from_loop(&[a, c, b]),
            Face::from_loop(&[a, b, d]),
            Face::from_loop(&[b, c, d]),
            Face::from_loop(&[a, d, c]),
        ])
    }

    #[test]
    fn derived_counts() {
        let mesh = tetrahedron();
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.edges().len(), 6);
        assert_eq!(mesh.vertices().len(), 4);
    }

    #[test]
    fn edges_are_undirected_unique() {
        let edges = tetrahedron().edges();
        for (i, e) in edges.iter().enumerate() {
            for other in &edges[i + 1..] {
                assert!(!e.undirected_eq(other));
            }
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let mesh = tetrahedron();
        assert_eq!(mesh.edges(), mesh.edges());
        assert_eq!(mesh.vertices(), mesh.vertices());
    }

    #[test]
    fn empty_mesh() {
        let mesh = Polyhedron::default();
        assert!(mesh.is_empty());
        assert!(mesh.edges().is_empty());
        assert!(mesh.vertices().is_empty());
    }
}
