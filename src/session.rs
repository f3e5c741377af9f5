use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::error::{Result, SessionError};
use crate::subdivision::Scheme;
use crate::topology::Polyhedron;

/// Owns the current mesh on behalf of display and input collaborators.
///
/// A refinement pass is a pure function over a snapshot of the current
/// mesh; the result replaces it in a single atomic hand-off, so a
/// concurrent reader observes either the old mesh or the new one, never a
/// partially built state. Background refinement is single-flight: a
/// trigger arriving while a pass runs is rejected rather than raced.
/// Once started, a pass runs to completion; there is no cancellation.
#[derive(Debug, Clone)]
pub struct Session {
    current: Arc<Mutex<Polyhedron>>,
    in_flight: Arc<AtomicBool>,
}

impl Session {
    /// Creates a session displaying the given seed mesh.
    #[must_use]
    pub fn new(seed: Polyhedron) -> Self {
        Self {
            current: Arc::new(Mutex::new(seed)),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a snapshot of the current mesh.
    #[must_use]
    pub fn current(&self) -> Polyhedron {
        self.lock_current().clone()
    }

    /// Replaces the current mesh with a seed shape.
    pub fn reset(&self, seed: Polyhedron) {
        *self.lock_current() = seed;
        debug!("session reset to seed mesh");
    }

    /// Runs one refinement pass synchronously and publishes the result.
    ///
    /// On error the current mesh is left untouched. Callers invoking this
    /// from several threads are responsible for serializing triggers; use
    /// [`Session::spawn_refine`] to get that enforced.
    ///
    /// # Errors
    ///
    /// Propagates the pass's precondition and topology errors.
    pub fn refine(&self, scheme: Scheme) -> Result<()> {
        let snapshot = self.current();
        let refined = scheme.apply(&snapshot)?;
        debug!(
            ?scheme,
            faces = refined.face_count(),
            "publishing refined mesh"
        );
        *self.lock_current() = refined;
        Ok(())
    }

    /// Runs one refinement pass on a background worker.
    ///
    /// The returned handle yields the pass result; the current mesh is
    /// replaced atomically when the pass succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RefinementInFlight`] if a previously
    /// spawned pass has not finished yet.
    pub fn spawn_refine(&self, scheme: Scheme) -> Result<JoinHandle<Result<()>>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SessionError::RefinementInFlight.into());
        }

        let session = self.clone();
        Ok(thread::spawn(move || {
            let outcome = session.refine(scheme);
            session.in_flight.store(false, Ordering::Release);
            outcome
        }))
    }

    fn lock_current(&self) -> MutexGuard<'_, Polyhedron> {
        // A pass never panics while holding the lock; recover the data if
        // some other holder did.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
