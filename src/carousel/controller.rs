use std::time::Duration;

use super::event::{CarouselEvent, Phase};
use crate::gesture::PauseReasons;
use crate::layout::{Geometry, Viewport};
use crate::options::{CarouselOptions, LayoutOptions};
use crate::schedule::{cancel_slot, Reactor, Scheduler, TimerHandle};

/// The hero carousel's timing state machine.
///
/// One controller per mounted widget. It owns the hero index, the phase of
/// the slide cycle, the active pause reasons and every pending wakeup it has
/// requested. Gestures arrive as method calls; scheduled steps arrive through
/// [`Reactor::handle`].
#[derive(Debug)]
pub struct CarouselController {
    len: usize,
    hero: usize,
    phase: Phase,
    pause: PauseReasons,
    /// A resume landed mid-slide; the next dwell uses the resume delay.
    resume_pending: bool,
    pressed: Option<i32>,
    mounted: bool,
    disposed: bool,
    cycle: u64,
    slide_started: Duration,
    options: CarouselOptions,
    layout: LayoutOptions,
    geometry: Geometry,
    pending_viewport: Option<Viewport>,
    geometry_revision: u64,
    cycle_timer: Option<TimerHandle>,
    tap_timer: Option<TimerHandle>,
    press_timer: Option<TimerHandle>,
    resize_timer: Option<TimerHandle>,
}

impl CarouselController {
    /// Controller for a backing sequence of `len` items, hero at index 0.
    #[must_use]
    pub fn new(
        len: usize,
        viewport: Viewport,
        options: CarouselOptions,
        layout: LayoutOptions,
    ) -> Self {
        let geometry =
            Geometry::compute(viewport.breakpoint, viewport.width, &layout);
        Self {
            len,
            hero: 0,
            phase: Phase::Idle,
            pause: PauseReasons::empty(),
            resume_pending: false,
            pressed: None,
            mounted: false,
            disposed: false,
            cycle: 0,
            slide_started: Duration::ZERO,
            options,
            layout,
            geometry,
            pending_viewport: None,
            geometry_revision: 0,
            cycle_timer: None,
            tap_timer: None,
            press_timer: None,
            resize_timer: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Length of the backing sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the backing sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the current hero item.
    #[must_use]
    pub fn hero_index(&self) -> usize {
        self.hero
    }

    /// Index of the item that becomes hero after the next slide.
    #[must_use]
    pub fn next_hero_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.hero + 1) % self.len
        }
    }

    /// Current cycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether any pause reason is active.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Active pause reasons.
    #[must_use]
    pub fn pause_reasons(&self) -> PauseReasons {
        self.pause
    }

    /// Whether a slide is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Whether transitions are suppressed for the snap frame.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.phase == Phase::Snapping
    }

    /// Position of the card showing pressed feedback, if any.
    #[must_use]
    pub fn pressed_position(&self) -> Option<i32> {
        self.pressed
    }

    /// Whether a tap pause is waiting to auto-resume.
    #[must_use]
    pub fn has_pending_tap_resume(&self) -> bool {
        self.tap_timer.is_some()
    }

    /// Current layout.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Number of times geometry was recomputed after a resize.
    #[must_use]
    pub fn geometry_revision(&self) -> u64 {
        self.geometry_revision
    }

    /// Timing options in effect.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Layout options in effect.
    #[must_use]
    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Window position of the card that counts as the focal card right now:
    /// the incoming card while sliding, the centered card otherwise.
    #[must_use]
    pub fn focal_position(&self) -> i32 {
        if self.phase == Phase::Animating {
            1
        } else {
            0
        }
    }

    /// Whether a window position is currently rendered.
    #[must_use]
    pub fn is_visible(&self, position: i32) -> bool {
        position.unsigned_abs() as usize <= self.geometry.side_count
    }

    /// Translation the track is heading to (the CSS transition target).
    #[must_use]
    pub fn target_offset(&self) -> f32 {
        if self.phase == Phase::Animating {
            self.geometry.animating_offset
        } else {
            self.geometry.resting_offset
        }
    }

    /// Track translation at `now`, interpolated along the slide easing for
    /// renderers that animate the track themselves.
    #[must_use]
    pub fn track_offset(&self, now: Duration) -> f32 {
        let g = &self.geometry;
        if self.phase != Phase::Animating {
            return g.resting_offset;
        }
        let shift = self.options.shift_duration();
        let t = if shift.is_zero() {
            1.0
        } else {
            now.saturating_sub(self.slide_started).as_secs_f32()
                / shift.as_secs_f32()
        };
        self.options
            .slide_easing
            .lerp(g.resting_offset, g.animating_offset, t)
    }

    fn can_slide(&self) -> bool {
        self.len >= 2
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Start the cycle. Palettes with fewer than two items stay static.
    pub fn mount(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if self.disposed || self.mounted {
            return;
        }
        self.mounted = true;
        log::debug!("carousel mounted with {} items", self.len);
        if self.can_slide() && !self.is_paused() {
            self.restart_cycle(self.options.pause_duration(), scheduler);
        }
    }

    /// Cancel every pending wakeup. After this, delivered events and
    /// gestures have no effect.
    pub fn dispose(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if self.disposed {
            return;
        }
        cancel_slot(&mut self.cycle_timer, scheduler);
        cancel_slot(&mut self.tap_timer, scheduler);
        cancel_slot(&mut self.press_timer, scheduler);
        cancel_slot(&mut self.resize_timer, scheduler);
        self.disposed = true;
        self.mounted = false;
        self.phase = Phase::Idle;
        self.pressed = None;
        self.cycle += 1;
        log::debug!("carousel disposed on hero {}", self.hero);
    }

    // ── Gestures ─────────────────────────────────────────────────────────

    /// Pointer entered the card at `position`. Pauses when it is the focal
    /// card on a hover-capable breakpoint.
    pub fn pointer_enter(
        &mut self,
        position: i32,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        if self.disposed || !self.geometry.breakpoint.accepts_hover() {
            return;
        }
        if position == self.focal_position() {
            self.pause_with(PauseReasons::HOVER, scheduler);
        }
    }

    /// Pointer left the card at `position`. Any visible card counts, since
    /// the focal card may have slid out from under a resting cursor.
    pub fn pointer_leave(
        &mut self,
        position: i32,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        if self.disposed || !self.geometry.breakpoint.accepts_hover() {
            return;
        }
        if self.is_visible(position) {
            self.resume_from(PauseReasons::HOVER, scheduler);
        }
    }

    /// Tap on the card at `position`. On the focal card of a touch-capable
    /// breakpoint, the first tap pauses with an auto-resume and a second
    /// tap before then resumes at once. Every accepted tap shows pressed
    /// feedback.
    pub fn tap(
        &mut self,
        position: i32,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        if self.disposed
            || self.len == 0
            || !self.geometry.breakpoint.accepts_tap()
            || position != self.focal_position()
        {
            return;
        }

        self.pressed = Some(position);
        cancel_slot(&mut self.press_timer, scheduler);
        self.press_timer = Some(scheduler.set_timeout(
            self.options.press_duration(),
            CarouselEvent::PressRelease,
        ));

        if self.pause.contains(PauseReasons::TAP) {
            cancel_slot(&mut self.tap_timer, scheduler);
            self.resume_from(PauseReasons::TAP, scheduler);
        } else {
            self.pause_with(PauseReasons::TAP, scheduler);
            self.tap_timer = Some(scheduler.set_timeout(
                self.options.tap_pause(),
                CarouselEvent::TapResume,
            ));
        }
    }

    /// Viewport changed. Pauses immediately; geometry is recomputed once no
    /// further resize arrives for the debounce window.
    pub fn resize(
        &mut self,
        viewport: Viewport,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        if self.disposed {
            return;
        }
        self.pause_with(PauseReasons::RESIZE, scheduler);
        self.pending_viewport = Some(viewport);
        cancel_slot(&mut self.resize_timer, scheduler);
        self.resize_timer = Some(scheduler.set_timeout(
            self.options.resize_debounce(),
            CarouselEvent::ResizeSettled,
        ));
    }

    /// Host-requested pause.
    pub fn pause(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if !self.disposed {
            self.pause_with(PauseReasons::EXTERNAL, scheduler);
        }
    }

    /// Lift a host-requested pause.
    pub fn resume(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if !self.disposed {
            self.resume_from(PauseReasons::EXTERNAL, scheduler);
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────

    fn start_resting(
        &mut self,
        delay: Duration,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        cancel_slot(&mut self.cycle_timer, scheduler);
        self.phase = Phase::Resting;
        self.cycle_timer = Some(scheduler.set_timeout(
            delay,
            CarouselEvent::SlideStart { cycle: self.cycle },
        ));
    }

    fn restart_cycle(
        &mut self,
        delay: Duration,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        self.cycle += 1;
        self.resume_pending = false;
        self.start_resting(delay, scheduler);
    }

    fn begin_slide(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if self.is_paused() || !self.can_slide() {
            self.phase = Phase::Idle;
            return;
        }
        self.phase = Phase::Animating;
        self.slide_started = scheduler.now();
        self.cycle_timer = Some(scheduler.set_timeout(
            self.options.shift_duration(),
            CarouselEvent::SlideEnd { cycle: self.cycle },
        ));
        log::debug!(
            "slide {} -> {}",
            self.hero,
            self.next_hero_index()
        );
    }

    fn snap(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        self.phase = Phase::Snapping;
        self.hero = self.next_hero_index();
        // Window positions are relative to the hero.
        self.pressed = self.pressed.map(|p| p - 1);
        self.cycle_timer = Some(
            scheduler.request_frame(CarouselEvent::SnapFrame { cycle: self.cycle }),
        );
    }

    fn settle(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if self.is_paused() {
            self.phase = Phase::Idle;
            self.resume_pending = false;
            log::debug!("halted on hero {} ({:?})", self.hero, self.pause);
            return;
        }
        let delay = if std::mem::take(&mut self.resume_pending) {
            self.options.resume_delay()
        } else {
            self.options.pause_duration()
        };
        self.start_resting(delay, scheduler);
    }

    fn apply_resize(&mut self, scheduler: &mut dyn Scheduler<CarouselEvent>) {
        if let Some(viewport) = self.pending_viewport.take() {
            self.geometry = Geometry::compute(
                viewport.breakpoint,
                viewport.width,
                &self.layout,
            );
            self.geometry_revision += 1;
            log::debug!(
                "geometry #{} for {:?} at {}px: side_count={}",
                self.geometry_revision,
                viewport.breakpoint,
                self.geometry.viewport_width,
                self.geometry.side_count
            );
        }

        // Gestures the new breakpoint no longer delivers cannot lift their
        // own pause.
        let breakpoint = self.geometry.breakpoint;
        if !breakpoint.accepts_hover() {
            self.pause.remove(PauseReasons::HOVER);
        }
        if !breakpoint.accepts_tap() {
            cancel_slot(&mut self.tap_timer, scheduler);
            self.pause.remove(PauseReasons::TAP);
        }
        self.resume_from(PauseReasons::RESIZE, scheduler);
    }

    fn pause_with(
        &mut self,
        reason: PauseReasons,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        let was_paused = self.is_paused();
        self.pause.insert(reason);
        if was_paused {
            return;
        }
        log::debug!("paused by {reason:?} in {:?}", self.phase);
        self.resume_pending = false;
        // An in-flight slide is allowed to finish and snap; only a pending
        // dwell is cancelled.
        if self.phase == Phase::Resting {
            cancel_slot(&mut self.cycle_timer, scheduler);
            self.phase = Phase::Idle;
        }
    }

    fn resume_from(
        &mut self,
        reason: PauseReasons,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        if !self.pause.contains(reason) {
            return;
        }
        self.pause.remove(reason);
        if self.is_paused() {
            log::debug!("{reason:?} lifted, still paused by {:?}", self.pause);
            return;
        }
        log::debug!("resumed from {reason:?} in {:?}", self.phase);
        match self.phase {
            Phase::Idle => {
                if self.mounted && self.can_slide() {
                    self.restart_cycle(self.options.resume_delay(), scheduler);
                }
            }
            Phase::Animating | Phase::Snapping => self.resume_pending = true,
            Phase::Resting => {}
        }
    }

    fn is_stale(&self, cycle: u64) -> bool {
        if cycle == self.cycle {
            return false;
        }
        log::debug!("dropping step from cycle {cycle} (now {})", self.cycle);
        true
    }
}

impl Reactor for CarouselController {
    type Event = CarouselEvent;

    fn handle(
        &mut self,
        event: CarouselEvent,
        scheduler: &mut dyn Scheduler<CarouselEvent>,
    ) {
        if self.disposed {
            log::trace!("ignoring {event:?} after dispose");
            return;
        }
        match event {
            CarouselEvent::SlideStart { cycle } => {
                if !self.is_stale(cycle) {
                    self.cycle_timer = None;
                    self.begin_slide(scheduler);
                }
            }
            CarouselEvent::SlideEnd { cycle } => {
                if !self.is_stale(cycle) {
                    self.cycle_timer = None;
                    self.snap(scheduler);
                }
            }
            CarouselEvent::SnapFrame { cycle } => {
                if !self.is_stale(cycle) {
                    self.cycle_timer = None;
                    self.settle(scheduler);
                }
            }
            CarouselEvent::TapResume => {
                self.tap_timer = None;
                self.resume_from(PauseReasons::TAP, scheduler);
            }
            CarouselEvent::PressRelease => {
                self.press_timer = None;
                self.pressed = None;
            }
            CarouselEvent::ResizeSettled => {
                self.resize_timer = None;
                self.apply_resize(scheduler);
            }
        }
    }
}
