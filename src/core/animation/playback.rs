//! Frame-driven playback of a [`Timeline`].
//!
//! The browser drives frames with `requestAnimationFrame`; tests drive them with a
//! manual clock. Scheduled callbacks only hold a weak reference to the playback,
//! and dropping the playback cancels whatever frame is still pending.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::style::{ElementStyle, WillChange};
use super::timeline::Timeline;

/// Frame callback; receives a timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Handle of a scheduled frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

/// Schedules one-shot frame callbacks
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameId>;
    fn cancel_frame(&self, id: FrameId);
}

/// Receives styles computed by the playback
pub trait StyleSink<T> {
    fn apply(&self, target: T, style: &ElementStyle, hint: WillChange);
}

/// Lifecycle of a playback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Prepared,
    Running,
    Completed,
    Cancelled,
}

struct Inner<T, S: FrameScheduler, K> {
    timeline: Timeline<T>,
    scheduler: S,
    sink: K,
    state: PlaybackState,
    started_at: Option<f64>,
    pending: Option<FrameId>,
}

impl<T, S: FrameScheduler, K> Drop for Inner<T, S, K> {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}

/// One-shot player for a timeline
pub struct Playback<T, S: FrameScheduler, K> {
    inner: Rc<RefCell<Inner<T, S, K>>>,
}

impl<T, S, K> Playback<T, S, K>
where
    T: Copy + PartialEq + 'static,
    S: FrameScheduler + 'static,
    K: StyleSink<T> + 'static,
{
    pub fn new(timeline: Timeline<T>, scheduler: S, sink: K) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                timeline,
                scheduler,
                sink,
                state: PlaybackState::Idle,
                started_at: None,
                pending: None,
            })),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.inner.borrow().state
    }

    /// Apply every element's initial style and hint. Only does work once.
    pub fn prepare(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state != PlaybackState::Idle {
            return;
        }
        for element in inner.timeline.elements() {
            inner
                .sink
                .apply(element.target, &element.initial, element.hint);
        }
        inner.state = PlaybackState::Prepared;
    }

    /// Start playing. Returns false if the playback already ran or was cancelled.
    pub fn play(&self) -> bool {
        if self.state() == PlaybackState::Idle {
            self.prepare();
        }

        let mut inner = self.inner.borrow_mut();
        if inner.state != PlaybackState::Prepared {
            return false;
        }

        inner.state = PlaybackState::Running;
        let pending = inner
            .scheduler
            .request_frame(frame_callback(Rc::downgrade(&self.inner)));
        if pending.is_none() {
            // No frame source: jump straight to the end state.
            drop(inner);
            finish(&mut self.inner.borrow_mut());
            return true;
        }
        inner.pending = pending;
        true
    }

    /// Stop immediately and drop the pending frame. Returns false if nothing
    /// was left to cancel.
    pub fn cancel(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.state {
            PlaybackState::Prepared | PlaybackState::Running => {
                if let Some(id) = inner.pending.take() {
                    inner.scheduler.cancel_frame(id);
                }
                inner.state = PlaybackState::Cancelled;
                true
            }
            PlaybackState::Idle => {
                inner.state = PlaybackState::Cancelled;
                true
            }
            PlaybackState::Completed | PlaybackState::Cancelled => false,
        }
    }
}

fn frame_callback<T, S, K>(weak: Weak<RefCell<Inner<T, S, K>>>) -> FrameCallback
where
    T: Copy + PartialEq + 'static,
    S: FrameScheduler + 'static,
    K: StyleSink<T> + 'static,
{
    Box::new(move |now: f64| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        on_frame(&inner, now);
    })
}

fn on_frame<T, S, K>(cell: &Rc<RefCell<Inner<T, S, K>>>, now: f64)
where
    T: Copy + PartialEq + 'static,
    S: FrameScheduler + 'static,
    K: StyleSink<T> + 'static,
{
    let mut inner = cell.borrow_mut();
    inner.pending = None;
    if inner.state != PlaybackState::Running {
        return;
    }

    let started_at = *inner.started_at.get_or_insert(now);
    let elapsed = ((now - started_at) / 1000.0).max(0.0);

    if elapsed >= inner.timeline.duration() {
        finish(&mut inner);
        return;
    }

    for (target, style) in inner.timeline.sample(elapsed) {
        let hint = inner
            .timeline
            .elements()
            .iter()
            .find(|e| e.target == target)
            .map(|e| e.hint)
            .unwrap_or(WillChange::Auto);
        inner.sink.apply(target, &style, hint);
    }

    let next = inner
        .scheduler
        .request_frame(frame_callback(Rc::downgrade(cell)));
    match next {
        Some(id) => inner.pending = Some(id),
        None => finish(&mut inner),
    }
}

/// Apply the end state and clear every rendering hint
fn finish<T, S, K>(inner: &mut Inner<T, S, K>)
where
    T: Copy + PartialEq,
    S: FrameScheduler,
    K: StyleSink<T>,
{
    let end = inner.timeline.duration();
    for (target, style) in inner.timeline.sample(end) {
        inner.sink.apply(target, &style, WillChange::Auto);
    }
    inner.state = PlaybackState::Completed;
}
