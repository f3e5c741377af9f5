use thiserror::Error;

/// Top-level error type for the Resurface subdivision kernel.
#[derive(Debug, Error)]
pub enum ResurfaceError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Subdivision(#[from] SubdivisionError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to mesh topology traversal.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("edge has {found} winging faces, expected exactly 2")]
    NonManifoldEdge { found: usize },

    #[error("vertex is flanked by {found} edges in the face loop, expected exactly 2")]
    BrokenFaceLoop { found: usize },

    #[error("vertex has no incident faces")]
    IsolatedVertex,

    #[error("cannot average an empty vertex set")]
    EmptyVertexSet,
}

/// Errors related to subdivision passes.
#[derive(Debug, Error)]
pub enum SubdivisionError {
    #[error("cannot subdivide a face with {degree} edges, expected 3")]
    NonTriangularFace { degree: usize },
}

/// Errors related to the mesh session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a refinement pass is already in flight")]
    RefinementInFlight,
}

/// Convenience type alias for results using [`ResurfaceError`].
pub type Result<T> = std::result::Result<T, ResurfaceError>;
