use crate::topology::{Face, Polyhedron, Vertex};

/// Corners of the unit cube centered at the origin.
///
/// Returned in the order `[a..h]`: `a..d` wind around the `z = 0.5` face,
/// `e..h` sit directly behind them at `z = -0.5`.
fn cube_corners() -> [Vertex; 8] {
    [
        Vertex::new(-0.5, -0.5, 0.5),
        Vertex::new(0.5, -0.5, 0.5),
        Vertex::new(0.5, 0.5, 0.5),
        Vertex::new(-0.5, 0.5, 0.5),
        Vertex::new(-0.5, -0.5, -0.5),
        Vertex::new(0.5, -0.5, -0.5),
        Vertex::new(0.5, 0.5, -0.5),
        Vertex::new(-0.5, 0.5, -0.5),
    ]
}

/// Returns the unit cube as six quadrilateral faces.
///
/// Centered at the origin with unit edge length; every face loop winds
/// counter-clockwise seen from outside.
#[must_use]
pub fn quad_unit_cube() -> Polyhedron {
    let [a, b, c, d, e, f, g, h] = cube_corners();
    Polyhedron::new(vec![
        Face::from_loop(&[a, b, c, d]),
        Face::from_loop(&[f, e, h, g]),
        Face::from_loop(&[b, f, g, c]),
        Face::from_loop(&[e, a, d, h]),
        Face::from_loop(&[d, c, g, h]),
        Face::from_loop(&[e, f, b, a]),
    ])
}

/// Returns the unit cube as twelve triangular faces.
///
/// Each quad face of [`quad_unit_cube`] is split along a diagonal; the
/// outward winding is preserved on both halves.
#[must_use]
pub fn triangulated_unit_cube() -> Polyhedron {
    let [a, b, c, d, e, f, g, h] = cube_corners();
    Polyhedron::new(vec![
        Face::from_loop(&[a, b, c]),
        Face::from_loop(&[a, c, d]),
        Face::from_loop(&[f, e, h]),
        Face::from_loop(&[f, h, g]),
        Face::from_loop(&[b, f, g]),
        Face::from_loop(&[b, g, c]),
        Face::from_loop(&[e, a, d]),
        Face::from_loop(&[e, d, h]),
        Face::from_loop(&[d, c, g]),
        Face::from_loop(&[d, g, h]),
        Face::from_loop(&[e, f, b]),
        Face::from_loop(&[e, b, a]),
    ])
}
