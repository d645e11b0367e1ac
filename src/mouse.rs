/// Per-frame mouse delta tracker.
///
/// Fed absolute cursor coordinates and an accumulated scroll tick count
/// once per frame; produces deltas normalized by the window size. Only the
/// previous sample is kept, so feeding the same sample twice yields zero
/// deltas on the second call.
#[derive(Debug, Default)]
pub struct MouseTracker {
    pub dx: f32,
    pub dy: f32,
    pub scroll: i32,
    prev_x: f32,
    prev_y: f32,
    prev_scroll: i32,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, mx: f32, my: f32, scroll_ticks: i32, width: u32, height: u32) {
        self.dx = (mx - self.prev_x) / width as f32;
        self.dy = (my - self.prev_y) / height as f32;
        self.prev_x = mx;
        self.prev_y = my;

        self.scroll = scroll_ticks - self.prev_scroll;
        self.prev_scroll = scroll_ticks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_normalized_by_window_size() {
        let mut mouse = MouseTracker::new();
        mouse.update(0.0, 0.0, 0, 800, 600);
        mouse.update(80.0, 60.0, 0, 800, 600);
        assert!((mouse.dx - 0.1).abs() < 1e-6);
        assert!((mouse.dy - 0.1).abs() < 1e-6);
    }

    #[test]
    fn scroll_reports_tick_delta() {
        let mut mouse = MouseTracker::new();
        mouse.update(0.0, 0.0, 3, 800, 600);
        assert_eq!(mouse.scroll, 3);
        mouse.update(0.0, 0.0, 5, 800, 600);
        assert_eq!(mouse.scroll, 2);
    }
}
