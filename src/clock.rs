//! Simulation clock
//!
//! Drives one engine tick per host refresh while the run is Active. The host
//! refresh source is abstracted as a [`FrameScheduler`] (requestAnimationFrame
//! on the web, a manual queue in tests).
//!
//! Every lifecycle switch cancels the pending frame before the next state is
//! set up, and a frame that arrives with a handle other than the pending one
//! is dropped, so a stale tick can never run against freshly reset state.

use crate::error::ConfigError;
use crate::sim::{Engine, EngineObserver, FrameSnapshot, GamePhase, StartParams};

/// Opaque id of a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host refresh source
pub trait FrameScheduler {
    /// Ask for one callback on the next refresh; `None` if the host refused
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Withdraw a previously requested callback
    fn cancel_frame(&mut self, handle: FrameHandle);
}

pub struct SimulationClock<S: FrameScheduler, O: EngineObserver> {
    engine: Engine,
    scheduler: S,
    observer: O,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler, O: EngineObserver> SimulationClock<S, O> {
    pub fn new(engine: Engine, scheduler: S, observer: O) -> Self {
        Self {
            engine,
            scheduler,
            observer,
            pending: None,
        }
    }

    /// Start (or restart) a run and schedule the first frame
    pub fn start(&mut self, params: StartParams) -> Result<(), ConfigError> {
        self.cancel_pending();
        self.engine.start(params)?;
        self.schedule();
        Ok(())
    }

    /// Return to the menu: cancel the pending frame, engine goes Inactive
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.engine.stop();
    }

    /// Host refresh callback. Runs one tick, dispatches its events, and
    /// schedules the next frame while the run stays Active.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.pending != Some(handle) {
            log::debug!("Dropping stale frame {:?} (pending {:?})", handle, self.pending);
            return;
        }
        self.pending = None;

        let events = self.engine.tick();
        for event in &events {
            event.dispatch(&mut self.observer);
        }

        if self.engine.phase() == GamePhase::Active {
            self.schedule();
        }
    }

    /// Forward an impulse to the engine
    pub fn trigger_impulse(&mut self) {
        self.engine.trigger_impulse();
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.engine.snapshot()
    }

    fn schedule(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("Host refused a frame request; clock halted");
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
