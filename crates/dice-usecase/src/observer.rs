//! Observer port for RollState changes

use dice_domain::RollState;

/// Receives every state the coordinator publishes
///
/// Called synchronously on the thread that requested the roll,
/// before `request_roll` returns.
pub trait RollObserver: Send {
    fn on_roll(&mut self, state: &RollState);
}

impl<F> RollObserver for F
where
    F: FnMut(&RollState) + Send,
{
    fn on_roll(&mut self, state: &RollState) {
        self(state)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}
