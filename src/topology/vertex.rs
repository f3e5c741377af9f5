use crate::math::{Point3, Vector3, EPSILON};

/// A 3D point compared by value with epsilon tolerance.
///
/// Subdivision recomputes geometrically identical points along independent
/// paths (an edge point is derived from either winging face, a centroid
/// from any traversal of its face); tolerant equality lets those meet as
/// one mesh vertex instead of accumulating near-duplicates.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    point: Point3,
}

impl Vertex {
    /// Creates a vertex from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            point: Point3::new(x, y, z),
        }
    }

    /// Creates a vertex at the given point.
    #[must_use]
    pub fn from_point(point: Point3) -> Self {
        Self { point }
    }

    /// Creates a vertex from a coordinate vector.
    #[must_use]
    pub fn from_coords(coords: Vector3) -> Self {
        Self {
            point: Point3::from(coords),
        }
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.point.z
    }

    /// Returns the position of this vertex.
    #[must_use]
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// Returns the coordinates as a vector, for weighted sums.
    #[must_use]
    pub fn coords(&self) -> Vector3 {
        self.point.coords
    }

    /// Returns the quantized bucket key for this vertex.
    ///
    /// The key buckets each coordinate into [`EPSILON`]-sized cells, so
    /// vertices that compare equal map to the same key for every point
    /// this crate's arithmetic produces. Collections that deduplicate by
    /// value key on this instead of hashing raw floats.
    #[must_use]
    pub fn key(&self) -> VertexKey {
        VertexKey([
            quantize(self.point.x),
            quantize(self.point.y),
            quantize(self.point.z),
        ])
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        (self.point.x - other.point.x).abs() < EPSILON
            && (self.point.y - other.point.y).abs() < EPSILON
            && (self.point.z - other.point.z).abs() < EPSILON
    }
}

/// Quantized coordinate key identifying a vertex by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexKey([i64; 3]);

// Coordinates stay within unit-cube scale here, far from i64 range.
#[allow(clippy::cast_possible_truncation)]
fn quantize(coord: f64) -> i64 {
    (coord / EPSILON).round() as i64
}
