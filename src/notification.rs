/// Maximum number of messages retained by the panel. Once the limit is
/// reached the oldest entry is evicted first.
pub const PANEL_CAPACITY: usize = 50;

/// Seconds the panel stays on screen after the most recent message when it is
/// not pinned.
pub const DISPLAY_DURATION_SECS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Build a color from the float components the chat layer hands over,
    /// clamping each into `[0, 255]`. Bad input must never keep the panel
    /// from rendering.
    pub fn clamped(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_component(r),
            g: clamp_component(g),
            b: clamp_component(b),
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

fn clamp_component(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// A single line shown in the overlay panel. Immutable once created; the
/// queue owns it until capacity eviction drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMessage {
    pub text: String,
    pub color: Rgb,
}

impl NotificationMessage {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}
