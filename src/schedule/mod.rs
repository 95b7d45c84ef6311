//! Injectable timing primitives.
//!
//! Widgets never call timers directly. They implement [`Reactor`] and ask a
//! [`Scheduler`] for two kinds of wakeups:
//!
//! - a one-shot timeout ([`Scheduler::set_timeout`]), and
//! - a "before next paint" callback ([`Scheduler::request_frame`]).
//!
//! Both come back later as the reactor's own event type. Every request
//! returns a [`TimerHandle`]; cancelling a handle guarantees its event is
//! never delivered.
//!
//! [`ManualScheduler`] runs on a virtual clock for tests and headless
//! simulation; [`RealtimeRunner`] paces it against the wall clock.

mod manual;
mod realtime;

use std::time::Duration;

pub use manual::ManualScheduler;
pub use realtime::RealtimeRunner;

/// Opaque identifier for a pending timeout or frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a scheduler-specific raw id.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id this handle wraps.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Source of delayed wakeups delivering events of type `E`.
pub trait Scheduler<E> {
    /// Current time on this scheduler's clock, measured from its origin.
    fn now(&self) -> Duration;

    /// Deliver `event` once `delay` has elapsed.
    fn set_timeout(&mut self, delay: Duration, event: E) -> TimerHandle;

    /// Deliver `event` before the next rendered frame.
    fn request_frame(&mut self, event: E) -> TimerHandle;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A state machine driven by scheduler events.
pub trait Reactor {
    /// Event type this reactor schedules for itself.
    type Event;

    /// Apply one delivered event. The reactor may schedule or cancel further
    /// wakeups through `scheduler`.
    fn handle(
        &mut self,
        event: Self::Event,
        scheduler: &mut dyn Scheduler<Self::Event>,
    );
}

/// Cancel the request held in `slot`, if any, leaving the slot empty.
pub fn cancel_slot<E>(
    slot: &mut Option<TimerHandle>,
    scheduler: &mut dyn Scheduler<E>,
) {
    if let Some(handle) = slot.take() {
        scheduler.cancel(handle);
    }
}
