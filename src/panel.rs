use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

use crate::host::{
    CommandRegistry, CommandToken, DrawSurface, FrameScheduler, FrameToken, TimeSource,
};
use crate::notification::{DISPLAY_DURATION_SECS, PANEL_CAPACITY};
use crate::queue::{NotificationQueue, NotificationSender, SharedQueue};
use crate::settings::PanelSettings;

/// Command that flips the panel between timed and pinned visibility.
pub const TOGGLE_COMMAND: &str = "flight_notify/toggle_panel";

/// Screen rectangle of the panel, in host window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl From<(i32, i32, i32, i32)> for PanelRect {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// On-screen notification window.
///
/// Owns the queue and the two host registrations. Dropping the panel drops
/// the tokens, which deregister the frame callback and the command binding
/// before the queue goes away, so no host callback can reach freed state.
pub struct OverlayPanel {
    rect: PanelRect,
    // tokens are declared before the queue so teardown deregisters the host
    // callbacks first
    _frame_token: FrameToken,
    _command_token: CommandToken,
    queue: SharedQueue,
}

impl OverlayPanel {
    /// Create the panel, register its per-frame callback and bind the
    /// default toggle command.
    pub fn new(
        rect: PanelRect,
        scheduler: &dyn FrameScheduler,
        commands: &dyn CommandRegistry,
        time: TimeSource,
    ) -> Result<Self> {
        Self::with_config(
            rect,
            PANEL_CAPACITY,
            DISPLAY_DURATION_SECS,
            TOGGLE_COMMAND,
            scheduler,
            commands,
            time,
        )
    }

    /// Create the panel from the user's settings file.
    pub fn from_settings(
        settings: &PanelSettings,
        scheduler: &dyn FrameScheduler,
        commands: &dyn CommandRegistry,
        time: TimeSource,
    ) -> Result<Self> {
        Self::with_config(
            settings.rect.into(),
            settings.capacity,
            settings.display_duration_secs,
            &settings.toggle_command,
            scheduler,
            commands,
            time,
        )
    }

    fn with_config(
        rect: PanelRect,
        capacity: usize,
        display_duration: f32,
        toggle_command: &str,
        scheduler: &dyn FrameScheduler,
        commands: &dyn CommandRegistry,
        time: TimeSource,
    ) -> Result<Self> {
        let queue: SharedQueue = Arc::new(Mutex::new(NotificationQueue::new(
            capacity,
            display_duration,
            time,
        )));

        let frame_token = {
            let queue = queue.clone();
            scheduler
                .register(
                    Box::new(move |now| {
                        if let Ok(mut queue) = queue.lock() {
                            queue.tick(now);
                        }
                        0.0
                    }),
                    0.0,
                )
                .context("failed to register notification panel frame callback")?
        };

        let command_token = {
            let queue = queue.clone();
            commands
                .bind(
                    toggle_command,
                    Box::new(move || {
                        if let Ok(mut queue) = queue.lock() {
                            let pinned = queue.toggle();
                            tracing::debug!(pinned, "notification panel toggled");
                        }
                    }),
                )
                .with_context(|| format!("failed to bind command {toggle_command}"))?
        };

        Ok(Self {
            rect,
            _frame_token: frame_token,
            _command_token: command_token,
            queue,
        })
    }

    /// Handle used by the network/chat layer to post messages; safe to clone
    /// onto other threads.
    pub fn sender(&self) -> NotificationSender {
        NotificationSender::new(self.queue.clone())
    }

    pub fn rect(&self) -> PanelRect {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.queue.lock().map(|q| q.is_visible()).unwrap_or(false)
    }

    pub fn is_always_visible(&self) -> bool {
        self.queue
            .lock()
            .map(|q| q.is_always_visible())
            .unwrap_or(false)
    }

    /// Flip pinned mode, same as the bound host command.
    pub fn toggle(&self) -> bool {
        self.queue.lock().map(|mut q| q.toggle()).unwrap_or(false)
    }

    pub fn set_always_visible(&self, visible: bool) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.set_always_visible(visible);
        }
    }

    /// Render the current message log into `surface`. Invoked by the hosting
    /// draw callback each frame; does nothing while the panel is hidden.
    pub fn build_interface(&self, surface: &mut dyn DrawSurface) {
        let Ok(mut queue) = self.queue.lock() else {
            return;
        };
        if !queue.is_visible() {
            return;
        }
        for message in queue.messages() {
            surface.text_run(&message.text, message.color);
        }
        if queue.take_scroll_to_bottom() {
            surface.scroll_to_bottom();
        }
    }
}
