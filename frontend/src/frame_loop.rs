//! Cancellable per-frame tasks.
//!
//! [`FrameLoop`] re-requests a frame after every tick until the tick asks to
//! stop, [`FrameLoop::stop`] is called, or the loop is dropped. Scheduling goes
//! through [`FrameScheduler`] so the loop itself runs off the browser too.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Requests `callback` on the next frame, returning a handle for `cancel`.
    fn request(&self, callback: FrameCallback) -> Option<i32>;
    fn cancel(&self, handle: i32);
}

/// `requestAnimationFrame` on the global window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    fn request(&self, callback: FrameCallback) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        window.request_animation_frame(callback.unchecked_ref()).ok()
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

type Tick = Box<dyn FnMut(f64) -> bool>;

struct LoopState {
    running: bool,
    pending: Option<i32>,
    tick: Option<Tick>,
}

pub struct FrameLoop<S: FrameScheduler + 'static> {
    scheduler: Rc<S>,
    state: Rc<RefCell<LoopState>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            state: Rc::new(RefCell::new(LoopState {
                running: false,
                pending: None,
                tick: None,
            })),
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    /// Starts calling `tick` once per frame. Returns `false` without replacing
    /// the current tick if the loop is already running.
    pub fn start<F>(&self, tick: F) -> bool
    where
        F: FnMut(f64) -> bool + 'static,
    {
        {
            let mut state = self.state.borrow_mut();
            if state.running {
                return false;
            }
            state.running = true;
            state.tick = Some(Box::new(tick));
        }
        schedule(&self.scheduler, &self.state);
        true
    }

    /// Cancels the pending frame. Safe to call any number of times.
    pub fn stop(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.running = false;
            state.tick = None;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: FrameScheduler + 'static>(scheduler: &Rc<S>, state: &Rc<RefCell<LoopState>>) {
    let weak: Weak<RefCell<LoopState>> = Rc::downgrade(state);
    let next = Rc::clone(scheduler);
    let handle = scheduler.request(Box::new(move |timestamp| {
        if let Some(state) = weak.upgrade() {
            run_frame(&next, &state, timestamp);
        }
    }));

    let mut state = state.borrow_mut();
    match handle {
        Some(handle) => state.pending = Some(handle),
        None => {
            state.running = false;
            state.tick = None;
        }
    }
}

fn run_frame<S: FrameScheduler + 'static>(
    scheduler: &Rc<S>,
    state: &Rc<RefCell<LoopState>>,
    timestamp: f64,
) {
    let tick = {
        let mut state = state.borrow_mut();
        state.pending = None;
        if !state.running {
            return;
        }
        state.tick.take()
    };
    let Some(mut tick) = tick else { return };

    let keep_going = tick(timestamp);

    let reschedule = {
        let mut state = state.borrow_mut();
        if state.tick.is_some() {
            // stop() + start() from inside the tick installed a new one
            false
        } else if state.running && keep_going {
            state.tick = Some(tick);
            true
        } else {
            state.running = false;
            false
        }
    };
    if reschedule {
        schedule(scheduler, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct ManualFrames {
        next_id: Cell<i32>,
        queued: RefCell<Vec<(i32, FrameCallback)>>,
        cancelled: RefCell<Vec<i32>>,
    }

    impl ManualFrames {
        fn pending(&self) -> usize {
            self.queued.borrow().len()
        }

        fn fire(&self, timestamp: f64) {
            let queued: Vec<_> = self.queued.borrow_mut().drain(..).collect();
            for (_, callback) in queued {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for Rc<ManualFrames> {
        fn request(&self, callback: FrameCallback) -> Option<i32> {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.queued.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel(&self, handle: i32) {
            self.queued.borrow_mut().retain(|(id, _)| *id != handle);
            self.cancelled.borrow_mut().push(handle);
        }
    }

    #[test]
    fn start_is_idempotent() {
        let frames = Rc::new(ManualFrames::default());
        let frame_loop = FrameLoop::new(Rc::clone(&frames));
        assert!(frame_loop.start(|_| true));
        assert!(!frame_loop.start(|_| true));
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn stop_is_idempotent_and_cancels() {
        let frames = Rc::new(ManualFrames::default());
        let frame_loop = FrameLoop::new(Rc::clone(&frames));
        frame_loop.start(|_| true);
        frame_loop.stop();
        frame_loop.stop();
        assert!(!frame_loop.is_running());
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.cancelled.borrow().len(), 1);
    }

    #[test]
    fn ticks_every_frame_until_tick_declines() {
        let frames = Rc::new(ManualFrames::default());
        let frame_loop = FrameLoop::new(Rc::clone(&frames));
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        frame_loop.start(move |_| {
            seen.set(seen.get() + 1);
            seen.get() < 3
        });

        for frame in 0..5 {
            frames.fire(frame as f64 * 16.0);
        }
        assert_eq!(count.get(), 3);
        assert!(!frame_loop.is_running());
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn can_restart_after_stop() {
        let frames = Rc::new(ManualFrames::default());
        let frame_loop = FrameLoop::new(Rc::clone(&frames));
        frame_loop.start(|_| true);
        frame_loop.stop();
        assert!(frame_loop.start(|_| true));
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn drop_cancels_pending_frame() {
        let frames = Rc::new(ManualFrames::default());
        {
            let frame_loop = FrameLoop::new(Rc::clone(&frames));
            frame_loop.start(|_| true);
        }
        assert_eq!(frames.pending(), 0);
    }
}
