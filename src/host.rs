//! Capability interfaces for the hosting simulator engine.
//!
//! The panel never talks to the host SDK directly. It is handed a frame
//! scheduler, a command registry and (each visible frame) a drawing surface,
//! so the timer and queue logic stays testable without any host present.

use std::sync::Arc;

use anyhow::Result;

use crate::notification::Rgb;

/// Elapsed simulator network time in seconds, injected at construction
/// instead of being looked up through process-wide state.
pub type TimeSource = Arc<dyn Fn() -> f32 + Send + Sync>;

/// Per-frame handler. Receives the current simulator time and returns the
/// delay in seconds until the next invocation (`0.0` = call again next
/// frame).
pub type FrameHandler = Box<dyn FnMut(f32) -> f32>;

/// Handler invoked when a bound host command fires.
pub type CommandHandler = Box<dyn FnMut()>;

/// Registration handle for a frame callback. Dropping the token unregisters
/// the handler; the host must never invoke it afterwards.
pub struct FrameToken {
    release: Option<Box<dyn FnOnce()>>,
}

impl FrameToken {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for FrameToken {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Registration handle for a command binding. Dropping the token unbinds the
/// command.
pub struct CommandToken {
    release: Option<Box<dyn FnOnce()>>,
}

impl CommandToken {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for CommandToken {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Host facility that drives a callback once per simulation frame.
pub trait FrameScheduler {
    /// Register `handler` to run every `interval` seconds (`0.0` = every
    /// frame). Registration failure is fatal to the owning plugin and must
    /// propagate.
    fn register(&self, handler: FrameHandler, interval: f32) -> Result<FrameToken>;
}

/// Host facility that maps named commands to handlers.
pub trait CommandRegistry {
    fn bind(&self, command: &str, handler: CommandHandler) -> Result<CommandToken>;
}

/// Immediate-mode 2D surface supplied by the host for each visible frame.
pub trait DrawSurface {
    /// Emit one line of text in the given color.
    fn text_run(&mut self, text: &str, color: Rgb);

    /// Scroll the view so the most recently emitted run is in sight.
    fn scroll_to_bottom(&mut self);
}
