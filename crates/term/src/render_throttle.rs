//! Frame pacing for the render loop.

/// Decides when the loop should repaint.
///
/// A new scene revision always repaints at once. Without one, an animating
/// scene (pulse, sparkles) repaints at the frame rate and a static scene only
/// refreshes occasionally.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    frame_ms: u64,
    idle_refresh_ms: u64,
    last_render_ms: u64,
    last_revision: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(frame_ms: u64, idle_refresh_ms: u64) -> Self {
        Self {
            frame_ms,
            idle_refresh_ms,
            last_render_ms: 0,
            last_revision: 0,
            has_rendered: false,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, revision: u64, animating: bool) -> bool {
        let due = if !self.has_rendered || revision != self.last_revision {
            true
        } else {
            let interval = if animating {
                self.frame_ms
            } else {
                self.idle_refresh_ms
            };
            now_ms.saturating_sub(self.last_render_ms) >= interval
        };

        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_revision = revision;
        }
        due
    }
}
