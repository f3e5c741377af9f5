// Valence counts feed floating-point weights.
#![allow(clippy::cast_precision_loss)]

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::topology::{average, Adjacency, Edge, Face, Polyhedron, Vertex};

/// Runs one Catmull-Clark refinement pass, returning a new all-quad mesh.
///
/// Every (original vertex, incident face) pair contributes one quad built
/// from the repositioned vertex, the two edge points of the face edges
/// touching it, and the face point, so the output face count is the sum
/// of the input face degrees.
///
/// # Errors
///
/// Returns an error if the input is not a closed 2-manifold (an edge
/// without exactly two winging faces, or a vertex with no incident
/// faces). An empty mesh degenerates to an empty output.
pub fn catmull_clark(mesh: &Polyhedron) -> Result<Polyhedron> {
    let adjacency = Adjacency::new(mesh);
    let mut new_faces = Vec::new();

    for vertex_s in mesh.vertices() {
        let vertex_point = reposition(&vertex_s, &adjacency)?;

        for face in adjacency.faces_containing(&vertex_s) {
            let flanking = adjacency.edges_of_face_containing(face, &vertex_s);
            let (first, second) = match flanking.as_slice() {
                [first, second] => (*first, *second),
                other => {
                    return Err(TopologyError::BrokenFaceLoop { found: other.len() }.into());
                }
            };

            let edge_point_1 = edge_point(&first, &adjacency)?;
            let edge_point_2 = edge_point(&second, &adjacency)?;
            let face_point = face_point(face)?;

            new_faces.push(Face::from_loop(&[
                vertex_point,
                edge_point_1,
                face_point,
                edge_point_2,
            ]));
        }
    }

    debug!(
        input_faces = mesh.face_count(),
        output_faces = new_faces.len(),
        "catmull-clark pass complete"
    );
    Ok(Polyhedron::new(new_faces))
}

/// Moves an original vertex to `F̄ + R̄ + S·(n−3)/n`, where `F̄` averages
/// the incident face points, `R̄` averages the incident edge midpoints
/// scaled by two, and both are divided by the valence `n`.
fn reposition(vertex_s: &Vertex, adjacency: &Adjacency<'_>) -> Result<Vertex> {
    let faces = adjacency.faces_containing(vertex_s);
    if faces.is_empty() {
        return Err(TopologyError::IsolatedVertex.into());
    }
    let n = faces.len() as f64;

    let face_points = faces
        .iter()
        .map(|face| face_point(face))
        .collect::<Result<Vec<_>>>()?;
    let f_bar = average(&face_points)?.coords() / n;

    let midpoints: Vec<Vertex> = adjacency
        .edges_containing(vertex_s)
        .iter()
        .map(Edge::midpoint)
        .collect();
    let r_bar = average(&midpoints)?.coords() * 2.0 / n;

    let s_adjusted = vertex_s.coords() * ((n - 3.0) / n);

    Ok(Vertex::from_coords(f_bar + r_bar + s_adjusted))
}

/// The face point: the average of the face's own vertices.
fn face_point(face: &Face) -> Result<Vertex> {
    Ok(average(&face.vertices())?)
}

/// The edge point: the average of the edge midpoint and the face points
/// of its two winging faces.
fn edge_point(edge: &Edge, adjacency: &Adjacency<'_>) -> Result<Vertex> {
    let (wing_1, wing_2) = adjacency.winging_faces(edge)?;
    Ok(average(&[
        edge.midpoint(),
        face_point(wing_1)?,
        face_point(wing_2)?,
    ])?)
}
