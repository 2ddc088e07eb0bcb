//! Lock-guarded shared state.
//!
//! The [`VehicleState`] and both output sinks live behind one mutex. A writer
//! holds the lock across the mutation *and* the sink notifications it
//! produces, so sinks observe states in the exact order they were made and
//! no reader can see an invariant half-applied.
//!
//! ```text
//!  StateController ──┐                      ┌──▶ DisplaySink
//!                    ├──▶ Mutex<Cockpit> ───┤
//!  BatterySimulator ─┘                      └──▶ AudioSink
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::app::ports::DisplaySink;
use crate::app::state::VehicleState;

/// The state plus the sinks that observe it.
pub struct Cockpit<D, A> {
    pub(crate) state: VehicleState,
    pub(crate) display: D,
    pub(crate) audio: A,
}

/// Cloneable handle to the shared [`Cockpit`].
pub struct CockpitHandle<D, A> {
    inner: Arc<Mutex<Cockpit<D, A>>>,
}

impl<D, A> Clone for CockpitHandle<D, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D, A> CockpitHandle<D, A> {
    pub fn new(state: VehicleState, display: D, audio: A) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Cockpit {
                state,
                display,
                audio,
            })),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> VehicleState {
        self.lock().state
    }

    /// Run `f` against the sinks under the lock (inspection, redraw).
    pub fn with_sinks<R>(&self, f: impl FnOnce(&mut D, &mut A) -> R) -> R {
        let mut guard = self.lock();
        let cockpit = &mut *guard;
        f(&mut cockpit.display, &mut cockpit.audio)
    }

    /// Every mutation leaves the state valid, so a panic in a sink does
    /// not poison the data for the other writer.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Cockpit<D, A>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: DisplaySink, A> CockpitHandle<D, A> {
    /// Push the complete current state to the display.
    pub fn redraw(&self) {
        let mut guard = self.lock();
        let Cockpit { state, display, .. } = &mut *guard;
        display.show(state);
    }
}
