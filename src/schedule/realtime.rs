use std::time::Duration;

use web_time::Instant;

use super::{ManualScheduler, Reactor, Scheduler};

/// Paces a [`ManualScheduler`] against the wall clock.
///
/// The runner sleeps until the next pending event is due (scaled by
/// `speed`), then advances the virtual clock to it. Used by the headless
/// simulator to watch a widget at its real cadence.
#[derive(Debug, Clone, Copy)]
pub struct RealtimeRunner {
    speed: f32,
}

impl RealtimeRunner {
    /// Runner at 1x speed.
    #[must_use]
    pub fn new() -> Self {
        Self { speed: 1.0 }
    }

    /// Runner that plays virtual time `speed` times faster than the wall
    /// clock. Non-positive or non-finite speeds fall back to 1x.
    #[must_use]
    pub fn with_speed(speed: f32) -> Self {
        let speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            1.0
        };
        Self { speed }
    }

    /// Playback speed multiplier.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Run `reactor` for `duration` of virtual time.
    pub fn run_for<R>(
        &self,
        scheduler: &mut ManualScheduler<R::Event>,
        reactor: &mut R,
        duration: Duration,
    ) where
        R: Reactor,
    {
        let wall_start = Instant::now();
        let virtual_start = scheduler.now();
        let end = virtual_start + duration;

        loop {
            let next = scheduler.next_due().map_or(end, |due| due.min(end));
            let wall_target = (next - virtual_start).div_f32(self.speed);
            let wait = wall_target.saturating_sub(wall_start.elapsed());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }

            let step = next.saturating_sub(scheduler.now());
            scheduler.advance(step, reactor);
            if next >= end {
                break;
            }
        }
    }
}

impl Default for RealtimeRunner {
    fn default() -> Self {
        Self::new()
    }
}
