pub mod draw;
pub mod host;
pub mod logging;
pub mod notification;
pub mod panel;
pub mod queue;
pub mod settings;
pub mod util;

pub use notification::{NotificationMessage, Rgb};
pub use panel::{OverlayPanel, PanelRect};
pub use queue::NotificationSender;
