use flight_notify::notification::Rgb;
use flight_notify::panel::{OverlayPanel, PanelRect, TOGGLE_COMMAND};
use flight_notify::settings::PanelSettings;

use mock_host::{MockHost, RecordingSurface, TestClock};

fn new_panel(host: &MockHost, clock: &TestClock) -> OverlayPanel {
    OverlayPanel::new(
        PanelRect::from((10, 10, 400, 150)),
        host,
        host,
        clock.source(),
    )
    .expect("panel construction")
}

#[test]
fn construction_registers_frame_callback_and_command() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    assert_eq!(host.frame_handler_count(), 1);
    assert_eq!(host.command_count(), 1);

    // the frame callback asks to be called again immediately
    let intervals = host.run_frame(0.0);
    assert_eq!(intervals, vec![0.0]);
    drop(panel);
}

#[test]
fn drop_deregisters_both_host_hooks() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    drop(panel);

    assert_eq!(host.frame_handler_count(), 0);
    assert_eq!(host.command_count(), 0);
    assert!(host.run_frame(1.0).is_empty());
    assert!(!host.invoke(TOGGLE_COMMAND));
}

#[test]
fn host_command_toggles_pinned_mode() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    assert!(!panel.is_visible());
    assert!(host.invoke(TOGGLE_COMMAND));
    assert!(panel.is_always_visible());
    assert!(panel.is_visible());

    assert!(host.invoke(TOGGLE_COMMAND));
    assert!(!panel.is_always_visible());
}

#[test]
fn frame_callback_hides_panel_after_deadline() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    clock.set(5.0);
    panel.sender().send_plain("contact tower");
    assert!(panel.is_visible());

    host.run_frame(6.0);
    assert!(panel.is_visible());

    host.run_frame(5.0 + 10.0 + 1.0);
    assert!(!panel.is_visible());
}

#[test]
fn build_interface_renders_messages_with_their_colors() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    let sender = panel.sender();
    sender.send("radio", 0.0, 255.0, 0.0);
    sender.send_plain("chat");

    let mut surface = RecordingSurface::default();
    panel.build_interface(&mut surface);

    assert_eq!(
        surface.runs,
        vec![
            ("radio".to_string(), Rgb { r: 0, g: 255, b: 0 }),
            ("chat".to_string(), Rgb::WHITE),
        ]
    );
    assert!(surface.scrolled);

    // the scroll request is consumed by the first render
    let mut surface = RecordingSurface::default();
    panel.build_interface(&mut surface);
    assert_eq!(surface.runs.len(), 2);
    assert!(!surface.scrolled);
}

#[test]
fn hidden_panel_renders_nothing() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    clock.set(0.0);
    panel.sender().send_plain("fading");
    host.run_frame(100.0);

    let mut surface = RecordingSurface::default();
    panel.build_interface(&mut surface);
    assert!(surface.runs.is_empty());
    assert!(!surface.scrolled);
}

#[test]
fn sender_is_usable_from_another_thread() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let panel = new_panel(&host, &clock);

    let sender = panel.sender();
    let handle = std::thread::spawn(move || {
        for i in 0..10 {
            sender.send_plain(format!("net {i}"));
        }
    });
    handle.join().unwrap();

    let mut surface = RecordingSurface::default();
    panel.build_interface(&mut surface);
    assert_eq!(surface.runs.len(), 10);
}

#[test]
fn settings_override_capacity_and_command() {
    let host = MockHost::default();
    let clock = TestClock::default();
    let settings = PanelSettings {
        rect: (0, 0, 100, 50),
        capacity: 2,
        display_duration_secs: 3.0,
        toggle_command: "custom/panel_toggle".to_string(),
        debug_logging: false,
    };
    let panel = OverlayPanel::from_settings(&settings, &host, &host, clock.source())
        .expect("panel construction");

    assert_eq!(panel.rect(), PanelRect::from((0, 0, 100, 50)));
    assert!(host.invoke("custom/panel_toggle"));
    assert!(panel.is_always_visible());
    assert!(host.invoke("custom/panel_toggle"));

    let sender = panel.sender();
    for text in ["a", "b", "c"] {
        sender.send_plain(text);
    }
    let mut surface = RecordingSurface::default();
    panel.build_interface(&mut surface);
    let texts: Vec<&str> = surface.runs.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts, vec!["b", "c"]);

    clock.set(0.0);
    host.run_frame(3.5);
    assert!(!panel.is_visible());
}
