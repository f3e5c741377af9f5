mod catmull_clark;
mod root_three;

pub use catmull_clark::catmull_clark;
pub use root_three::{root_three, root_three_with, RelaxationWeighting, RootThreeParams};

use crate::error::Result;
use crate::topology::Polyhedron;

/// A subdivision scheme selectable by the triggering interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Catmull-Clark: any-degree input, all-quad output.
    CatmullClark,
    /// Kobbelt Root-Three: triangle input, triangle output.
    RootThree,
}

impl Scheme {
    /// Runs one refinement pass of this scheme.
    ///
    /// # Errors
    ///
    /// Propagates the pass's precondition and topology errors.
    pub fn apply(self, mesh: &Polyhedron) -> Result<Polyhedron> {
        match self {
            Self::CatmullClark => catmull_clark(mesh),
            Self::RootThree => root_three(mesh),
        }
    }
}
