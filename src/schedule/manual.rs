use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;

use super::{Reactor, Scheduler, TimerHandle};

/// Deterministic scheduler on a virtual clock.
///
/// Pending events are ordered by `(due, request order)`, so two events due
/// at the same instant fire in the order they were requested. A frame
/// request is due `frame_interval` after it was made; with a zero interval
/// it fires at the current instant, after everything already queued for
/// that instant. Frame loops that re-request a frame from every frame need
/// a non-zero interval to let the clock move.
pub struct ManualScheduler<E> {
    now: Duration,
    frame_interval: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), E>,
    due_by_id: FxHashMap<u64, Duration>,
    delivered: u64,
}

impl<E> ManualScheduler<E> {
    /// One 60 Hz frame, rounded to whole milliseconds.
    pub const FRAME_60HZ: Duration = Duration::from_millis(16);

    /// Scheduler at time zero with the given frame interval.
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval,
            next_id: 0,
            queue: BTreeMap::new(),
            due_by_id: FxHashMap::default(),
            delivered: 0,
        }
    }

    /// Scheduler whose frame requests fire at the instant they are made.
    #[must_use]
    pub fn immediate_frames() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Interval between a frame request and its delivery.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Number of requests not yet delivered or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending request.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Total events delivered so far.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    fn enqueue(&mut self, due: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let _ = self.queue.insert((due, id), event);
        let _ = self.due_by_id.insert(id, due);
        TimerHandle::from_raw(id)
    }

    /// Move the clock forward by `by`, delivering every event that falls
    /// due on the way, including events scheduled by earlier deliveries.
    pub fn advance<R>(&mut self, by: Duration, reactor: &mut R)
    where
        R: Reactor<Event = E>,
    {
        let target = self.now + by;
        loop {
            let Some(&(due, id)) = self.queue.keys().next() else {
                break;
            };
            if due > target {
                break;
            }
            let Some(event) = self.queue.remove(&(due, id)) else {
                break;
            };
            let _ = self.due_by_id.remove(&id);
            self.now = due;
            self.delivered += 1;
            reactor.handle(event, self);
        }
        self.now = target;
    }

    /// Advance one frame interval `count` times.
    pub fn run_frames<R>(&mut self, count: u32, reactor: &mut R)
    where
        R: Reactor<Event = E>,
    {
        for _ in 0..count {
            self.advance(self.frame_interval, reactor);
        }
    }
}

impl<E> Default for ManualScheduler<E> {
    fn default() -> Self {
        Self::new(Self::FRAME_60HZ)
    }
}

impl<E> Scheduler<E> for ManualScheduler<E> {
    fn now(&self) -> Duration {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.enqueue(self.now + delay, event)
    }

    fn request_frame(&mut self, event: E) -> TimerHandle {
        self.enqueue(self.now + self.frame_interval, event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(due) = self.due_by_id.remove(&handle.raw()) {
            let _ = self.queue.remove(&(due, handle.raw()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records `(time, label)` for every delivery; label 0 re-schedules a
    /// follow-up labelled 100 after 5 ms.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<(Duration, u32)>,
    }

    impl Reactor for Recorder {
        type Event = u32;

        fn handle(&mut self, event: u32, scheduler: &mut dyn Scheduler<u32>) {
            self.seen.push((scheduler.now(), event));
            if event == 0 {
                let _ = scheduler.set_timeout(Duration::from_millis(5), 100);
            }
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn delivers_in_due_then_request_order() {
        let mut sched = ManualScheduler::<u32>::immediate_frames();
        let mut rec = Recorder::default();
        let _ = sched.set_timeout(ms(20), 2);
        let _ = sched.set_timeout(ms(10), 1);
        let _ = sched.set_timeout(ms(20), 3);

        sched.advance(ms(30), &mut rec);
        assert_eq!(rec.seen, vec![(ms(10), 1), (ms(20), 2), (ms(20), 3)]);
        assert_eq!(sched.now(), ms(30));
        assert_eq!(sched.delivered(), 3);
    }

    #[test]
    fn events_scheduled_during_advance_fire_within_window() {
        let mut sched = ManualScheduler::<u32>::immediate_frames();
        let mut rec = Recorder::default();
        let _ = sched.set_timeout(ms(10), 0);

        sched.advance(ms(14), &mut rec);
        assert_eq!(rec.seen, vec![(ms(10), 0)]);
        assert_eq!(sched.next_due(), Some(ms(15)));

        sched.advance(ms(1), &mut rec);
        assert_eq!(rec.seen.last(), Some(&(ms(15), 100)));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn cancelled_requests_never_fire() {
        let mut sched = ManualScheduler::<u32>::immediate_frames();
        let mut rec = Recorder::default();
        let keep = sched.set_timeout(ms(10), 1);
        let dropped = sched.set_timeout(ms(10), 2);
        sched.cancel(dropped);
        sched.cancel(dropped);
        assert_ne!(keep, dropped);
        assert_eq!(sched.pending(), 1);

        sched.advance(ms(100), &mut rec);
        assert_eq!(rec.seen, vec![(ms(10), 1)]);
    }

    #[test]
    fn same_instant_requests_fire_in_request_order() {
        let mut sched = ManualScheduler::<u32>::immediate_frames();
        let mut rec = Recorder::default();
        let _ = sched.request_frame(7);
        let _ = sched.set_timeout(Duration::ZERO, 8);

        sched.advance(Duration::ZERO, &mut rec);
        assert_eq!(rec.seen, vec![(ms(0), 7), (ms(0), 8)]);
    }

    #[test]
    fn run_frames_steps_by_frame_interval() {
        let mut sched = ManualScheduler::<u32>::default();
        let mut rec = Recorder::default();
        let _ = sched.request_frame(1);

        sched.run_frames(3, &mut rec);
        assert_eq!(rec.seen, vec![(ms(16), 1)]);
        assert_eq!(sched.now(), ms(48));
    }
}
