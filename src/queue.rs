use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::host::TimeSource;
use crate::notification::{NotificationMessage, Rgb};

/// Notification queue and display timer.
///
/// Holds the bounded message log together with the "visible until" deadline
/// and the pinned flag. All mutation happens either on the host main thread
/// (frame and command callbacks) or through [`NotificationSender`], which
/// goes through the same mutex.
pub struct NotificationQueue {
    messages: VecDeque<NotificationMessage>,
    capacity: usize,
    display_duration: f32,
    disappear_deadline: f32,
    always_visible: bool,
    scroll_to_bottom: bool,
    visible: bool,
    now: TimeSource,
}

impl NotificationQueue {
    pub fn new(capacity: usize, display_duration: f32, now: TimeSource) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: capacity.max(1),
            display_duration,
            disappear_deadline: 0.0,
            always_visible: false,
            scroll_to_bottom: false,
            visible: false,
            now,
        }
    }

    /// Append a message and make the panel visible starting next frame.
    ///
    /// The oldest entry is evicted once the log exceeds its capacity. Color
    /// components outside `[0, 255]` are clamped rather than rejected. The
    /// disappear deadline is pushed out by the display duration unless the
    /// panel is pinned.
    pub fn add_message(&mut self, text: impl Into<String>, r: f32, g: f32, b: f32) {
        self.messages
            .push_back(NotificationMessage::new(text, Rgb::clamped(r, g, b)));
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
        if !self.always_visible {
            self.disappear_deadline = (self.now)() + self.display_duration;
        }
        self.scroll_to_bottom = true;
        self.visible = true;
    }

    /// Append a message in the default white.
    pub fn add_plain(&mut self, text: impl Into<String>) {
        self.add_message(text, 255.0, 255.0, 255.0);
    }

    /// Flip the pinned flag and return its new value. Pinning shows the
    /// panel immediately; unpinning hands visibility back to the deadline
    /// rule, which the next tick applies.
    pub fn toggle(&mut self) -> bool {
        self.always_visible = !self.always_visible;
        if self.always_visible {
            self.visible = true;
        }
        self.always_visible
    }

    /// Advance the timer. Called once per simulation frame; this is the only
    /// place the panel transitions to hidden, and it never makes a hidden
    /// panel visible.
    pub fn tick(&mut self, now_seconds: f32) {
        if !self.always_visible && self.visible && now_seconds >= self.disappear_deadline {
            tracing::debug!("notification panel hidden, deadline elapsed");
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.always_visible || self.visible
    }

    pub fn is_always_visible(&self) -> bool {
        self.always_visible
    }

    pub fn set_always_visible(&mut self, visible: bool) {
        if self.always_visible != visible {
            self.toggle();
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &NotificationMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consume the pending scroll request, if any.
    pub fn take_scroll_to_bottom(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}

pub type SharedQueue = Arc<Mutex<NotificationQueue>>;

/// Cloneable handle for collaborators on other threads (network/chat layer)
/// to push messages into the queue.
#[derive(Clone)]
pub struct NotificationSender {
    queue: SharedQueue,
}

impl NotificationSender {
    pub(crate) fn new(queue: SharedQueue) -> Self {
        Self { queue }
    }

    pub fn send(&self, text: impl Into<String>, r: f32, g: f32, b: f32) {
        let Ok(mut queue) = self.queue.lock() else {
            return;
        };
        queue.add_message(text, r, g, b);
    }

    pub fn send_plain(&self, text: impl Into<String>) {
        self.send(text, 255.0, 255.0, 255.0);
    }
}
