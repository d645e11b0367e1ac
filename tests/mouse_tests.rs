use brdf_viewer::mouse::MouseTracker;

#[test]
fn test_identical_samples_yield_zero_deltas() {
    let mut mouse = MouseTracker::new();
    mouse.update(123.0, 456.0, 7, 800, 600);
    mouse.update(123.0, 456.0, 7, 800, 600);

    assert_eq!(mouse.dx, 0.0);
    assert_eq!(mouse.dy, 0.0);
    assert_eq!(mouse.scroll, 0);
}

#[test]
fn test_deltas_are_screen_normalized() {
    let mut mouse = MouseTracker::new();
    mouse.update(100.0, 100.0, 0, 1000, 500);
    mouse.update(200.0, 150.0, 0, 1000, 500);

    assert!((mouse.dx - 0.1).abs() < 1e-6, "dx = {}", mouse.dx);
    assert!((mouse.dy - 0.1).abs() < 1e-6, "dy = {}", mouse.dy);
}

#[test]
fn test_negative_motion_yields_negative_deltas() {
    let mut mouse = MouseTracker::new();
    mouse.update(500.0, 400.0, 0, 800, 600);
    mouse.update(420.0, 340.0, 0, 800, 600);

    assert!((mouse.dx + 0.1).abs() < 1e-6, "dx = {}", mouse.dx);
    assert!((mouse.dy + 0.1).abs() < 1e-6, "dy = {}", mouse.dy);
}

#[test]
fn test_scroll_delta_tracks_only_previous_sample() {
    let mut mouse = MouseTracker::new();
    mouse.update(0.0, 0.0, 10, 800, 600);
    assert_eq!(mouse.scroll, 10);
    mouse.update(0.0, 0.0, 4, 800, 600);
    assert_eq!(mouse.scroll, -6);
    mouse.update(0.0, 0.0, 4, 800, 600);
    assert_eq!(mouse.scroll, 0);
}
