use crate::gesture::PauseReasons;
use crate::options::GalleryOptions;
use crate::schedule::{cancel_slot, Reactor, Scheduler, TimerHandle};

/// Wakeups the scroll driver schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    /// One animation frame.
    Frame,
    /// A drag or wheel cooldown ran out.
    CooldownElapsed {
        /// Cooldown generation that scheduled this wakeup.
        generation: u64,
    },
}

#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    pointer_x: f32,
    offset: f32,
}

/// Frame-driven filmstrip offset with drag and wheel pausing.
///
/// Hovering the strip does not hold it; only a drag or the cooldown after a
/// drag or wheel does, so the strip resumes under a still-resting cursor.
///
/// The strip renders its content twice back to back; the offset lives in
/// `[0, content_width)` and wraps to 0 once a full copy has scrolled past,
/// which is invisible because the second copy is identical to the first.
#[derive(Debug)]
pub struct ScrollDriver {
    offset: f32,
    content_width: f32,
    options: GalleryOptions,
    pause: PauseReasons,
    drag: Option<DragAnchor>,
    generation: u64,
    frame: Option<TimerHandle>,
    cooldown: Option<TimerHandle>,
    frames_advanced: u64,
    disposed: bool,
}

impl ScrollDriver {
    /// Driver at offset 0 for one copy of content `content_width` wide.
    #[must_use]
    pub fn new(content_width: f32, options: GalleryOptions) -> Self {
        Self {
            offset: 0.0,
            content_width: sanitize_width(content_width),
            options,
            pause: PauseReasons::empty(),
            drag: None,
            generation: 0,
            frame: None,
            cooldown: None,
            frames_advanced: 0,
            disposed: false,
        }
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Width of one copy of the content.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Whether automatic advancement is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Active pause reasons.
    #[must_use]
    pub fn pause_reasons(&self) -> PauseReasons {
        self.pause
    }

    /// Whether a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the frame loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Frames on which the offset advanced automatically.
    #[must_use]
    pub fn frames_advanced(&self) -> u64 {
        self.frames_advanced
    }

    /// Start the frame loop.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        if self.disposed || self.frame.is_some() {
            return;
        }
        log::debug!("gallery started, content width {}", self.content_width);
        self.frame = Some(scheduler.request_frame(GalleryEvent::Frame));
    }

    /// Stop the frame loop and drop any pending cooldown. Later events and
    /// gestures are ignored.
    pub fn dispose(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        if self.disposed {
            return;
        }
        cancel_slot(&mut self.frame, scheduler);
        cancel_slot(&mut self.cooldown, scheduler);
        self.drag = None;
        self.generation += 1;
        self.disposed = true;
        log::debug!("gallery disposed at offset {}", self.offset);
    }

    /// Content width changed (e.g. images finished loading). The offset is
    /// re-wrapped into the new range.
    pub fn set_content_width(&mut self, content_width: f32) {
        self.content_width = sanitize_width(content_width);
        self.offset = wrap_offset(self.offset, self.content_width);
    }

    /// Adopt the platform's scroll position after a native scroll.
    pub fn sync_native_offset(&mut self, offset: f32) {
        if !self.disposed {
            self.offset = wrap_offset(offset, self.content_width);
        }
    }

    /// Pointer pressed at `pointer_x`: start dragging from the current
    /// offset and supersede any running cooldown.
    pub fn pointer_down(
        &mut self,
        pointer_x: f32,
        scheduler: &mut dyn Scheduler<GalleryEvent>,
    ) {
        if self.disposed {
            return;
        }
        self.drag = Some(DragAnchor {
            pointer_x,
            offset: self.offset,
        });
        self.pause.insert(PauseReasons::DRAG);
        cancel_slot(&mut self.cooldown, scheduler);
        self.pause.remove(PauseReasons::COOLDOWN);
        self.generation += 1;
    }

    /// Pointer moved to `pointer_x`. Only has an effect while dragging.
    pub fn pointer_move(&mut self, pointer_x: f32) {
        let Some(anchor) = self.drag else {
            return;
        };
        let walk = (pointer_x - anchor.pointer_x) * self.options.drag_sensitivity;
        self.offset = wrap_offset(anchor.offset - walk, self.content_width);
    }

    /// Pointer released. Ends a drag and starts the cooldown.
    pub fn pointer_up(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        self.end_drag(scheduler);
    }

    /// Pointer left the strip. Ends a drag in progress as if released.
    pub fn pointer_leave(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        self.end_drag(scheduler);
    }

    /// Wheel scrolled. The offset is left to the platform; advancement waits
    /// out a fresh cooldown.
    pub fn wheel(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        if !self.disposed {
            self.start_cooldown(scheduler);
        }
    }

    /// Host-requested pause.
    pub fn pause(&mut self) {
        if !self.disposed {
            self.pause.insert(PauseReasons::EXTERNAL);
        }
    }

    /// Lift a host-requested pause.
    pub fn resume(&mut self) {
        self.pause.remove(PauseReasons::EXTERNAL);
    }

    fn end_drag(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        if self.disposed || self.drag.take().is_none() {
            return;
        }
        self.pause.remove(PauseReasons::DRAG);
        self.start_cooldown(scheduler);
    }

    fn start_cooldown(&mut self, scheduler: &mut dyn Scheduler<GalleryEvent>) {
        self.generation += 1;
        self.pause.insert(PauseReasons::COOLDOWN);
        cancel_slot(&mut self.cooldown, scheduler);
        self.cooldown = Some(scheduler.set_timeout(
            self.options.cooldown(),
            GalleryEvent::CooldownElapsed {
                generation: self.generation,
            },
        ));
    }

    fn step(&mut self) {
        if self.content_width <= 0.0 {
            return;
        }
        self.offset += self.options.frame_delta;
        if self.offset >= self.content_width {
            self.offset = 0.0;
        }
        self.frames_advanced += 1;
        log::trace!("gallery offset {}", self.offset);
    }
}

impl Reactor for ScrollDriver {
    type Event = GalleryEvent;

    fn handle(
        &mut self,
        event: GalleryEvent,
        scheduler: &mut dyn Scheduler<GalleryEvent>,
    ) {
        if self.disposed {
            return;
        }
        match event {
            GalleryEvent::Frame => {
                if !self.is_paused() {
                    self.step();
                }
                self.frame = Some(scheduler.request_frame(GalleryEvent::Frame));
            }
            GalleryEvent::CooldownElapsed { generation } => {
                if generation != self.generation {
                    log::debug!("dropping superseded cooldown {generation}");
                    return;
                }
                self.cooldown = None;
                self.pause.remove(PauseReasons::COOLDOWN);
            }
        }
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}

/// Wrap `offset` into `[0, width)`; 0 for an empty or invalid range.
fn wrap_offset(offset: f32, width: f32) -> f32 {
    if width <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    let wrapped = offset.rem_euclid(width);
    // rem_euclid can round up to `width` for tiny negative inputs.
    if wrapped >= width {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::schedule::ManualScheduler;

    fn driver(width: f32) -> (ScrollDriver, ManualScheduler<GalleryEvent>) {
        let mut sched = ManualScheduler::default();
        let mut d = ScrollDriver::new(width, GalleryOptions::default());
        d.start(&mut sched);
        (d, sched)
    }

    #[test]
    fn wraps_to_zero_after_full_cycle() {
        let (mut d, mut sched) = driver(1000.0);
        sched.run_frames(1999, &mut d);
        assert!((d.offset() - 999.5).abs() < 1e-3);
        sched.run_frames(1, &mut d);
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.frames_advanced(), 2000);
    }

    #[test]
    fn resumes_after_cooldown_with_cursor_still_over_strip() {
        let (mut d, mut sched) = driver(1000.0);
        d.sync_native_offset(10.0);
        d.pointer_down(500.0, &mut sched);
        d.pointer_move(480.0);
        d.pointer_up(&mut sched);
        let released = d.offset();
        assert!((released - 40.0).abs() < 1e-3);

        sched.advance(Duration::from_millis(3000), &mut d);
        assert!(!d.is_paused());
        sched.run_frames(4, &mut d);
        assert!((d.offset() - (released + 2.0)).abs() < 1e-3);
    }

    #[test]
    fn wheel_pauses_without_moving_the_offset() {
        let (mut d, mut sched) = driver(1000.0);
        sched.run_frames(20, &mut d);
        let before = d.offset();
        d.wheel(&mut sched);
        assert_eq!(d.offset(), before);
        sched.run_frames(10, &mut d);
        assert_eq!(d.offset(), before);
        assert_eq!(d.pause_reasons(), PauseReasons::COOLDOWN);

        sched.advance(Duration::from_millis(3000), &mut d);
        sched.run_frames(2, &mut d);
        assert!(d.offset() > before);
    }

    #[test]
    fn host_pause_holds_until_lifted() {
        let (mut d, mut sched) = driver(1000.0);
        d.pause();
        sched.run_frames(10, &mut d);
        assert_eq!(d.offset(), 0.0);
        assert!(d.is_running());

        d.resume();
        sched.run_frames(2, &mut d);
        assert!((d.offset() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn drag_moves_against_pointer_then_cools_down() {
        let (mut d, mut sched) = driver(1000.0);
        d.sync_native_offset(100.0);
        d.pointer_down(500.0, &mut sched);
        d.pointer_move(460.0);
        assert!((d.offset() - 160.0).abs() < 1e-3);

        sched.run_frames(5, &mut d);
        assert!((d.offset() - 160.0).abs() < 1e-3);

        d.pointer_up(&mut sched);
        assert!(!d.is_dragging());
        assert!(d.is_paused());
        sched.advance(Duration::from_millis(2990), &mut d);
        assert!(d.is_paused());
        sched.advance(Duration::from_millis(10), &mut d);
        assert!(!d.is_paused());
    }

    #[test]
    fn drag_offset_wraps_both_ways() {
        let (mut d, mut sched) = driver(1000.0);
        d.pointer_down(0.0, &mut sched);
        d.pointer_move(100.0);
        assert!((d.offset() - 850.0).abs() < 1e-3);
        d.pointer_move(-700.0);
        assert!((d.offset() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn newer_pause_supersedes_cooldown() {
        let (mut d, mut sched) = driver(1000.0);
        d.wheel(&mut sched);
        sched.advance(Duration::from_millis(2000), &mut d);
        d.wheel(&mut sched);
        sched.advance(Duration::from_millis(1500), &mut d);
        assert!(d.is_paused());
        sched.advance(Duration::from_millis(1500), &mut d);
        assert!(!d.is_paused());

        d.wheel(&mut sched);
        d.pointer_down(0.0, &mut sched);
        sched.advance(Duration::from_millis(5000), &mut d);
        assert!(d.is_paused());
        assert!(d.is_dragging());
    }

    #[test]
    fn stale_cooldown_is_ignored() {
        let (mut d, mut sched) = driver(1000.0);
        d.wheel(&mut sched);
        d.handle(GalleryEvent::CooldownElapsed { generation: 0 }, &mut sched);
        assert!(d.is_paused());
    }

    #[test]
    fn leaving_mid_drag_releases() {
        let (mut d, mut sched) = driver(1000.0);
        d.pointer_down(10.0, &mut sched);
        d.pointer_leave(&mut sched);
        assert!(!d.is_dragging());
        assert_eq!(d.pause_reasons(), PauseReasons::COOLDOWN);
    }

    #[test]
    fn zero_width_never_advances() {
        let (mut d, mut sched) = driver(0.0);
        sched.run_frames(100, &mut d);
        assert_eq!(d.offset(), 0.0);
        d.sync_native_offset(42.0);
        assert_eq!(d.offset(), 0.0);
    }

    #[test]
    fn shrinking_content_rewraps_offset() {
        let (mut d, _sched) = driver(1000.0);
        d.sync_native_offset(900.0);
        d.set_content_width(400.0);
        assert!((d.offset() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn dispose_stops_the_loop() {
        let (mut d, mut sched) = driver(1000.0);
        d.wheel(&mut sched);
        d.dispose(&mut sched);
        assert_eq!(sched.pending(), 0);
        sched.run_frames(10, &mut d);
        assert_eq!(d.offset(), 0.0);
        assert!(!d.is_running());
    }
}
