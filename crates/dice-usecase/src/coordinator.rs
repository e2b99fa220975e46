//! Roll Coordinator - Holds the displayed roll and mediates roll requests
//!
//! The coordinator is the only writer of [`RollState`]:
//! 1. Request: the presentation surface calls `request_roll`
//! 2. Roll: the injected engine produces a face
//! 3. Replace: the held state is swapped for the next generation
//! 4. Publish: every observer sees the new state, once, in order
//!
//! There is a single state ("showing the last result") and `request_roll`
//! is a self-transition on it. `&mut self` makes roll + publish one
//! exclusive step; share the coordinator behind a `Mutex` if several
//! threads need to roll.

use dice_domain::{RollEngine, RollResult, RollState};
use tracing::debug;

use crate::observer::{RollObserver, Subscription};

/// RollCoordinator - The observable state holder
pub struct RollCoordinator<E> {
    engine: E,
    state: RollState,
    observers: Vec<(Subscription, Box<dyn RollObserver>)>,
    next_subscription: u64,
}

impl<E: RollEngine> RollCoordinator<E> {
    /// Create a coordinator showing the default face (1)
    pub fn new(engine: E) -> Self {
        Self::with_initial(engine, RollResult::default())
    }

    /// Create a coordinator showing `initial` until the first roll
    pub fn with_initial(engine: E, initial: RollResult) -> Self {
        Self {
            engine,
            state: RollState::initial(initial),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ========== Queries ==========

    pub fn state(&self) -> RollState {
        self.state
    }

    pub fn current(&self) -> RollResult {
        self.state.result()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========== Commands ==========

    /// Roll the engine, replace the held state and publish it
    ///
    /// Observers are notified even when the new face equals the old one.
    pub fn request_roll(&mut self) -> RollState {
        let result = self.engine.roll();
        self.state = self.state.advance(result);

        debug!(
            generation = self.state.generation(),
            value = self.state.value(),
            observers = self.observers.len(),
            "Roll published"
        );

        for (_, observer) in self.observers.iter_mut() {
            observer.on_roll(&self.state);
        }

        self.state
    }

    /// Register an observer for future rolls
    ///
    /// The current state is not replayed; read `state()` for the first render.
    pub fn subscribe(&mut self, observer: impl RollObserver + 'static) -> Subscription {
        let subscription = Subscription::new(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() != before
    }
}

impl<E> core::fmt::Debug for RollCoordinator<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RollCoordinator")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
