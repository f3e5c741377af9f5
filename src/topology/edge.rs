use super::vertex::{Vertex, VertexKey};

/// A directed edge between two vertices.
///
/// Direction matters: an edge and its reversal are distinct values. Mesh
/// derivation and winging-face lookup treat the pair as one undirected
/// edge via [`Edge::undirected_eq`] and [`Edge::key`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    start: Vertex,
    end: Vertex,
}

impl Edge {
    /// Creates a new edge from start to end.
    #[must_use]
    pub fn new(start: Vertex, end: Vertex) -> Self {
        Self { start, end }
    }

    /// Returns the start vertex.
    #[must_use]
    pub fn start(&self) -> Vertex {
        self.start
    }

    /// Returns the end vertex.
    #[must_use]
    pub fn end(&self) -> Vertex {
        self.end
    }

    /// Returns the edge traversed in the opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the midpoint of this edge.
    #[must_use]
    pub fn midpoint(&self) -> Vertex {
        Vertex::from_coords((self.start.coords() + self.end.coords()) / 2.0)
    }

    /// Returns `true` if either endpoint equals the given vertex.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.start == *vertex || self.end == *vertex
    }

    /// Returns `true` if `other` is this edge or its reversal.
    #[must_use]
    pub fn undirected_eq(&self, other: &Self) -> bool {
        *self == *other || *self == other.reverse()
    }

    /// Returns the canonical undirected key for this edge.
    ///
    /// An edge and its reversal share the same key.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        let a = self.start.key();
        let b = self.end.key();
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
}

/// Canonical unordered endpoint-key pair identifying an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(VertexKey, VertexKey);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn edge() -> Edge {
        Edge::new(Vertex::new(0.0, 0.0, 0.0), Vertex::new(1.0, 2.0, 3.0))
    }

    #[test]
    fn reverse_is_involutive() {
        let e = edge();
        assert_eq!(e.reverse().reverse(), e);
    }

    #[test]
    fn reversal_is_not_equal() {
        let e = edge();
        assert_ne!(e, e.reverse());
        assert!(e.undirected_eq(&e.reverse()));
    }

    #[test]
    fn key_ignores_direction() {
        let e = edge();
        assert_eq!(e.key(), e.reverse().key());
    }

    #[test]
    fn midpoint_is_arithmetic_mean() {
        let m = edge().midpoint();
        assert_eq!(m, Vertex::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn contains_both_endpoints() {
        let e = edge();
        assert!(e.contains_vertex(&Vertex::new(0.0, 0.0, 0.0)));
        assert!(e.contains_vertex(&Vertex::new(1.0, 2.0, 3.0)));
        assert!(!e.contains_vertex(&Vertex::new(0.5, 1.0, 1.5)));
    }
}
