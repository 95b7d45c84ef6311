//! Browser side of the scheduler abstraction.
//!
//! A [`Driver`] owns one reactor together with its [`BrowserScheduler`].
//! Timeouts map to `setTimeout`, frame requests to `requestAnimationFrame`.
//! Each JS callback holds only a weak reference to the driver, so callbacks
//! that outlive the widget find nothing to upgrade and do nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use rustc_hash::FxHashMap;
use vitrine::schedule::{Reactor, Scheduler, TimerHandle};
use wasm_bindgen::prelude::*;
use web_time::Instant;

enum JsRequest {
    Timeout(i32),
    Frame(i32),
}

struct Shared<R: Reactor + 'static> {
    reactor: R,
    scheduler: BrowserScheduler<R>,
    on_change: Box<dyn FnMut(&R)>,
}

/// [`Scheduler`] backed by the browser's timer queues.
pub struct BrowserScheduler<R: Reactor + 'static> {
    origin: Instant,
    next_id: u64,
    pending: FxHashMap<u64, JsRequest>,
    owner: Weak<RefCell<Shared<R>>>,
}

impl<R: Reactor + 'static> BrowserScheduler<R>
where
    R::Event: 'static,
{
    fn new(owner: Weak<RefCell<Shared<R>>>) -> Self {
        Self {
            origin: Instant::now(),
            next_id: 0,
            pending: FxHashMap::default(),
            owner,
        }
    }

    fn callback(&mut self, event: R::Event) -> (u64, JsValue) {
        let id = self.next_id;
        self.next_id += 1;
        let owner = self.owner.clone();
        let callback = Closure::once_into_js(move || fire(&owner, id, event));
        (id, callback)
    }
}

fn fire<R: Reactor + 'static>(
    owner: &Weak<RefCell<Shared<R>>>,
    id: u64,
    event: R::Event,
) where
    R::Event: 'static,
{
    let Some(shared) = owner.upgrade() else {
        return;
    };
    let Ok(mut guard) = shared.try_borrow_mut() else {
        log::warn!("timer {id} fired while its widget was busy; dropped");
        return;
    };
    let Shared {
        reactor,
        scheduler,
        on_change,
    } = &mut *guard;
    // Cancelled requests are gone from the map even if JS still fires.
    if scheduler.pending.remove(&id).is_none() {
        return;
    }
    reactor.handle(event, scheduler);
    on_change(reactor);
}

impl<R: Reactor + 'static> Scheduler<R::Event> for BrowserScheduler<R>
where
    R::Event: 'static,
{
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn set_timeout(&mut self, delay: Duration, event: R::Event) -> TimerHandle {
        let (id, callback) = self.callback(event);
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                ms,
            )
            .ok()
        });
        match handle {
            Some(js) => {
                let _ = self.pending.insert(id, JsRequest::Timeout(js));
            }
            None => log::warn!("setTimeout unavailable, timer {id} dropped"),
        }
        TimerHandle::from_raw(id)
    }

    fn request_frame(&mut self, event: R::Event) -> TimerHandle {
        let (id, callback) = self.callback(event);
        let handle = web_sys::window().and_then(|w| {
            w.request_animation_frame(callback.unchecked_ref()).ok()
        });
        match handle {
            Some(js) => {
                let _ = self.pending.insert(id, JsRequest::Frame(js));
            }
            None => log::warn!("requestAnimationFrame unavailable, frame {id} dropped"),
        }
        TimerHandle::from_raw(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let Some(request) = self.pending.remove(&handle.raw()) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        match request {
            JsRequest::Timeout(js) => window.clear_timeout_with_handle(js),
            JsRequest::Frame(js) => {
                let _ = window.cancel_animation_frame(js);
            }
        }
    }
}

/// Shared handle to a reactor running on browser timers.
pub struct Driver<R: Reactor + 'static> {
    shared: Rc<RefCell<Shared<R>>>,
}

impl<R: Reactor + 'static> Clone for Driver<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<R: Reactor + 'static> PartialEq for Driver<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<R: Reactor + 'static> Driver<R>
where
    R::Event: 'static,
{
    /// Wrap `reactor`. `on_change` runs after every delivered event and
    /// every [`update`](Self::update).
    pub fn new(reactor: R, on_change: impl FnMut(&R) + 'static) -> Self {
        let shared = Rc::new_cyclic(|owner| {
            RefCell::new(Shared {
                reactor,
                scheduler: BrowserScheduler::new(owner.clone()),
                on_change: Box::new(on_change),
            })
        });
        Self { shared }
    }

    /// Apply a gesture or lifecycle call. `None` if the driver is already
    /// borrowed (a re-entrant call from inside a delivery).
    pub fn update<T>(
        &self,
        f: impl FnOnce(&mut R, &mut dyn Scheduler<R::Event>) -> T,
    ) -> Option<T> {
        let mut guard = self.shared.try_borrow_mut().ok()?;
        let Shared {
            reactor,
            scheduler,
            on_change,
        } = &mut *guard;
        let out = f(reactor, scheduler);
        on_change(reactor);
        Some(out)
    }

    /// Read the reactor together with the scheduler clock.
    pub fn read<T>(&self, f: impl FnOnce(&R, Duration) -> T) -> Option<T> {
        let guard = self.shared.try_borrow().ok()?;
        Some(f(&guard.reactor, guard.scheduler.now()))
    }
}

/// Window event listener removed again on drop.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Listen for `event` on `window`. `None` outside a browser.
    pub fn new(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        web_sys::window()?
            .add_event_listener_with_callback(
                event,
                closure.as_ref().unchecked_ref(),
            )
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Current `window.innerWidth`, 0 before layout or outside a browser.
pub fn viewport_width() -> f32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map_or(0.0, |w| w as f32)
}
