// Valence counts feed floating-point weights.
#![allow(clippy::cast_precision_loss)]

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use tracing::debug;

use crate::error::{Result, SubdivisionError, TopologyError};
use crate::math::Vector3;
use crate::topology::{average, Adjacency, Face, Polyhedron, Vertex, VertexKey};

/// Parameters controlling a Root-Three pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootThreeParams {
    /// Weight formula applied during vertex relaxation.
    pub weighting: RelaxationWeighting,
}

/// Weight formula for Kobbelt's vertex relaxation scalar `B`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelaxationWeighting {
    /// Kobbelt's published formula: `B(n) = (4 − 2·cos(2π/n)) / 9n`.
    #[default]
    Kobbelt,
    /// Valence-insensitive variant with the cosine evaluated at the
    /// fixed angle 2π: `B(n) = (4 − 2·cos(2π)/n) / 9n`. Kept so outputs
    /// can be compared against implementations that compute the weight
    /// this way.
    FixedCosine,
}

impl RelaxationWeighting {
    fn beta(self, valence: usize) -> f64 {
        let n = valence as f64;
        match self {
            Self::Kobbelt => (4.0 - 2.0 * (2.0 * PI / n).cos()) / (9.0 * n),
            Self::FixedCosine => (4.0 - 2.0 * (2.0 * PI).cos() / n) / (9.0 * n),
        }
    }
}

/// Runs one Root-Three refinement pass with default parameters.
///
/// # Errors
///
/// Returns [`SubdivisionError::NonTriangularFace`] if any face does not
/// have exactly three edges, and a topology error if the input is not a
/// closed 2-manifold. No partial mesh is ever returned.
pub fn root_three(mesh: &Polyhedron) -> Result<Polyhedron> {
    root_three_with(mesh, &RootThreeParams::default())
}

/// Runs one Root-Three refinement pass over a triangle mesh.
///
/// Each face gains a centroid vertex; for every edge, both relaxed
/// endpoints are joined to the centroids of the edge's two winging
/// faces. Interior triangles are generated once from each side and
/// deduplicated by their vertex set, orientation ignored.
///
/// # Errors
///
/// See [`root_three`].
pub fn root_three_with(mesh: &Polyhedron, params: &RootThreeParams) -> Result<Polyhedron> {
    // Reject before any face is emitted, so a bad mesh changes nothing.
    for face in mesh.faces() {
        if face.degree() != 3 {
            return Err(SubdivisionError::NonTriangularFace {
                degree: face.degree(),
            }
            .into());
        }
    }

    let adjacency = Adjacency::new(mesh);

    // One relaxed position per distinct vertex, so every face that
    // references it sees the same valence and weight.
    let mut relaxed: HashMap<VertexKey, Vertex> = HashMap::new();
    for vertex in mesh.vertices() {
        relaxed.insert(vertex.key(), relax(&vertex, &adjacency, params)?);
    }

    let mut seen: HashSet<[VertexKey; 3]> = HashSet::new();
    let mut new_faces = Vec::new();

    for face in mesh.faces() {
        let mid_vertex = average(&face.vertices())?;

        for edge in face.edges() {
            let relaxed_start = relaxed[&edge.start().key()];
            let relaxed_end = relaxed[&edge.end().key()];

            let (wing_1, wing_2) = adjacency.winging_faces(edge)?;
            let other = if wing_1 == face { wing_2 } else { wing_1 };
            let other_mid = average(&other.vertices())?;

            for corners in [
                [relaxed_start, mid_vertex, other_mid],
                [relaxed_end, mid_vertex, other_mid],
            ] {
                if seen.insert(triangle_key(&corners)) {
                    new_faces.push(Face::from_loop(&corners));
                }
            }
        }
    }

    debug!(
        input_faces = mesh.face_count(),
        output_faces = new_faces.len(),
        weighting = ?params.weighting,
        "root-three pass complete"
    );
    Ok(Polyhedron::new(new_faces))
}

/// Relaxes an original vertex: `P·(1 − n·B) + B·Σ(1-ring)`.
fn relax(
    vertex: &Vertex,
    adjacency: &Adjacency<'_>,
    params: &RootThreeParams,
) -> Result<Vertex> {
    let n = adjacency.valence(vertex);
    if n == 0 {
        return Err(TopologyError::IsolatedVertex.into());
    }
    let beta = params.weighting.beta(n);

    let ring_sum = adjacency
        .ring_vertices(vertex)
        .iter()
        .fold(Vector3::zeros(), |acc, v| acc + v.coords());

    let retained = vertex.coords() * (1.0 - n as f64 * beta);
    Ok(Vertex::from_coords(retained + ring_sum * beta))
}

/// Orientation-insensitive identity of a triangle: its sorted corner keys.
fn triangle_key(corners: &[Vertex; 3]) -> [VertexKey; 3] {
    let mut keys = [corners[0].key(), corners[1].key(), corners[2].key()];
    keys.sort_unstable();
    keys
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::ResurfaceError;
    use crate::shapes::{quad_unit_cube, triangulated_unit_cube};

    fn assert_closed_manifold(mesh: &Polyhedron) {
        let adjacency = Adjacency::new(mesh);
        for edge in mesh.edges() {
            let (first, second) = adjacency.winging_faces(&edge).unwrap();
            assert_ne!(first, second);
        }
    }

    #[test]
    fn quad_cube_is_rejected() {
        let result = root_three(&quad_unit_cube());
        assert!(matches!(
            result,
            Err(ResurfaceError::Subdivision(
                SubdivisionError::NonTriangularFace { degree: 4 }
            ))
        ));
    }

    #[test]
    fn triangulated_cube_yields_36_triangles() {
        let input = triangulated_unit_cube();
        let out = root_three(&input).unwrap();
        // Two triangles per undirected input edge survive deduplication.
        assert_eq!(out.face_count(), 36);
        assert!(out.face_count() > input.face_count());
        assert!(out.faces().iter().all(|f| f.degree() == 3));
        assert_closed_manifold(&out);
    }

    #[test]
    fn centroids_appear_in_output() {
        // Centroid of the corner triangle on the z = 1/2 face.
        let out = root_three(&triangulated_unit_cube()).unwrap();
        let expected = Vertex::new(1.0 / 6.0, -1.0 / 6.0, 0.5);
        assert!(out.vertices().iter().any(|v| *v == expected));
    }

    #[test]
    fn kobbelt_relaxation_position() {
        // Corner (-1/2, -1/2, 1/2) has valence 4 and ring sum (0, 0, 1);
        // B(4) = (4 − 2·cos(π/2))/36 = 1/9, so the corner relaxes to
        // (-5/18, -5/18, 7/18).
        let out = root_three(&triangulated_unit_cube()).unwrap();
        let expected = Vertex::new(-5.0 / 18.0, -5.0 / 18.0, 7.0 / 18.0);
        let found = out.vertices().into_iter().find(|v| *v == expected).unwrap();
        assert_relative_eq!(found.z(), 7.0 / 18.0, epsilon = 1e-12);
    }

    #[test]
    fn fixed_cosine_relaxation_position() {
        // Same corner under the fixed-angle weight: B(4) = 7/72, giving
        // (-11/36, -11/36, 29/72).
        let params = RootThreeParams {
            weighting: RelaxationWeighting::FixedCosine,
        };
        let out = root_three_with(&triangulated_unit_cube(), &params).unwrap();
        let expected = Vertex::new(-11.0 / 36.0, -11.0 / 36.0, 29.0 / 72.0);
        let found = out.vertices().into_iter().find(|v| *v == expected).unwrap();
        assert_relative_eq!(found.z(), 29.0 / 72.0, epsilon = 1e-12);
    }

    #[test]
    fn weightings_diverge() {
        let cube = triangulated_unit_cube();
        let kobbelt = root_three(&cube).unwrap();
        let fixed = root_three_with(
            &cube,
            &RootThreeParams {
                weighting: RelaxationWeighting::FixedCosine,
            },
        )
        .unwrap();
        assert_eq!(kobbelt.face_count(), fixed.face_count());
        assert_ne!(kobbelt, fixed);
    }

    #[test]
    fn pass_is_deterministic() {
        let cube = triangulated_unit_cube();
        let first = root_three(&cube).unwrap();
        let second = root_three(&cube).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejection_leaves_no_output() {
        // The error carries no mesh; the input is untouched.
        let cube = quad_unit_cube();
        let before = cube.clone();
        assert!(root_three(&cube).is_err());
        assert_eq!(cube, before);
    }
}
