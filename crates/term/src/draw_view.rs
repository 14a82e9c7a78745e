//! DrawView: maps a [`Scene`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::time::Instant;

use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::scene::Scene;
use crate::types::{copy, DisplayValue, SequenceState, MASCOT_ANCHOR, RANGE_MAX, RANGE_MIN};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Preferred stage size; shrinks to the viewport.
pub const STAGE_W: u16 = 64;
pub const STAGE_H: u16 = 22;

/// Stage pixels per terminal column / row when placing sparkles.
const PX_PER_COL: f32 = 8.0;
const PX_PER_ROW: f32 = 16.0;

const MASCOT: [&str; 3] = [" .^. ", "(o.o)", "/|_|\\"];
const HINTS: &str = "Enter: draw   m: mute   q: quit";

/// Row offsets inside the stage.
const NUMBER_ROW: u16 = 9;
const PHASE_ROW: u16 = 12;
const GIFTS_ROW: u16 = 14;
const STATUS_ROW: u16 = 16;
const BUTTON_ROW: u16 = 18;
const HINTS_ROW: u16 = 20;

/// Cell rectangle occupied by the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl StageRect {
    /// Stage centered in `viewport`.
    pub fn centered(viewport: Viewport) -> Self {
        let w = STAGE_W.min(viewport.width);
        let h = STAGE_H.min(viewport.height);
        Self {
            x: (viewport.width - w) / 2,
            y: (viewport.height - h) / 2,
            w,
            h,
        }
    }

    /// Cell for a fractional stage position.
    pub fn point(&self, fx: f32, fy: f32) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 * fx,
            self.y as f32 + self.h as f32 * fy,
        )
    }
}

struct Theme {
    bg: Rgb,
    border: CellStyle,
    text: CellStyle,
    accent: CellStyle,
    muted_text: CellStyle,
}

impl Theme {
    fn for_scene(scene: &Scene) -> Self {
        let bg = if scene.magic {
            Rgb::new(40, 22, 26)
        } else {
            Rgb::new(16, 22, 34)
        };
        let border_fg = if scene.magic {
            Rgb::new(240, 196, 90)
        } else {
            Rgb::new(150, 160, 180)
        };
        Self {
            bg,
            border: CellStyle::new(border_fg, bg),
            text: CellStyle::new(Rgb::new(230, 230, 230), bg),
            accent: CellStyle::new(Rgb::new(255, 214, 102), bg).bold(),
            muted_text: CellStyle::new(Rgb::new(140, 140, 150), bg).dim(),
        }
    }
}

/// Renderer for the draw widget.
#[derive(Debug, Clone, Default)]
pub struct DrawView;

impl DrawView {
    pub fn new() -> Self {
        Self
    }

    /// Render `scene` as of `now` into an existing framebuffer.
    pub fn render_into(
        &self,
        scene: &Scene,
        now: Instant,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let stage = StageRect::centered(viewport);
        let theme = Theme::for_scene(scene);

        fb.fill_rect(stage.x, stage.y, stage.w, stage.h, ' ', theme.text);
        fb.draw_box(stage.x, stage.y, stage.w, stage.h, theme.border);
        fb.put_str(stage.x + 2, stage.y, " Lucky Draw ", theme.accent);

        self.draw_mute(fb, stage, scene, &theme);
        self.draw_mascot(fb, stage, &theme);
        self.draw_number(fb, stage, scene, now, &theme);
        self.draw_phase(fb, stage, scene.phase, &theme);
        self.draw_gifts(fb, stage, scene.highlight, &theme);

        fb.put_str_centered(
            stage.x,
            stage.w,
            stage.y + STATUS_ROW,
            &scene.status,
            theme.text,
        );
        self.draw_button(fb, stage, scene, &theme);
        fb.put_str_centered(
            stage.x,
            stage.w,
            stage.y + HINTS_ROW,
            HINTS,
            theme.muted_text,
        );

        self.draw_sparkles(fb, stage, scene, now, &theme);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, now: Instant, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, now, viewport, &mut fb);
        fb
    }

    fn draw_mute(&self, fb: &mut FrameBuffer, stage: StageRect, scene: &Scene, theme: &Theme) {
        let label = copy::mute_indicator(scene.muted);
        let text = format!("{} {}", if scene.muted { '×' } else { '♪' }, label);
        let x = (stage.x + stage.w).saturating_sub(text_width(&text) + 2);
        let style = if scene.muted { theme.muted_text } else { theme.accent };
        fb.put_str(x, stage.y + 1, &text, style);
    }

    fn draw_mascot(&self, fb: &mut FrameBuffer, stage: StageRect, theme: &Theme) {
        let (_, ay) = stage.point(MASCOT_ANCHOR.x, MASCOT_ANCHOR.y);
        let top = (ay as u16).saturating_sub(1);
        let style = CellStyle::new(Rgb::new(235, 90, 90), theme.bg).bold();
        for (i, line) in MASCOT.iter().enumerate() {
            fb.put_str_centered(stage.x, stage.w, top + i as u16, line, style);
        }
    }

    fn draw_number(
        &self,
        fb: &mut FrameBuffer,
        stage: StageRect,
        scene: &Scene,
        now: Instant,
        theme: &Theme,
    ) {
        let scale = scene.pulse_scale(now);
        // The pulse widens the box while it overshoots.
        let box_w: u16 = if scale > 1.05 { 11 } else { 9 };
        let x = stage.x + (stage.w.saturating_sub(box_w)) / 2;
        let y = stage.y + NUMBER_ROW;

        let (frame, mut value) = match scene.display {
            DisplayValue::Final(_) => (theme.accent, theme.accent),
            DisplayValue::Spin(_) if scene.magic => (theme.accent, theme.text.bold()),
            DisplayValue::Spin(_) => (theme.border, theme.text.bold()),
            DisplayValue::Placeholder => (theme.border, theme.muted_text),
        };
        if scale < 0.95 {
            value = value.dim();
        }

        fb.draw_box(x, y, box_w, 3, frame);
        fb.put_str_centered(x, box_w, y + 1, &scene.display.to_string(), value);
    }

    fn draw_phase(
        &self,
        fb: &mut FrameBuffer,
        stage: StageRect,
        phase: SequenceState,
        theme: &Theme,
    ) {
        if phase == SequenceState::Idle {
            return;
        }
        fb.put_str_centered(
            stage.x,
            stage.w,
            stage.y + PHASE_ROW,
            phase.as_str(),
            theme.muted_text,
        );
    }

    fn draw_gifts(
        &self,
        fb: &mut FrameBuffer,
        stage: StageRect,
        highlight: Option<u8>,
        theme: &Theme,
    ) {
        const GIFT_W: u16 = 4;
        const GAP: u16 = 1;
        let count = (RANGE_MAX - RANGE_MIN + 1) as u16;
        let total = count * GIFT_W + (count - 1) * GAP;
        let mut x = stage.x + stage.w.saturating_sub(total) / 2;
        let y = stage.y + GIFTS_ROW;

        let active = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(255, 214, 102)).bold();
        for n in RANGE_MIN..=RANGE_MAX {
            let style = if highlight == Some(n) { active } else { theme.text };
            fb.put_str(x, y, &format!("[{n:>2}]"), style);
            x += GIFT_W + GAP;
        }
    }

    fn draw_button(&self, fb: &mut FrameBuffer, stage: StageRect, scene: &Scene, theme: &Theme) {
        let text = format!("[ {} ]", scene.trigger_label);
        let style = if scene.trigger_enabled {
            CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(170, 40, 40)).bold()
        } else {
            theme.muted_text
        };
        fb.put_str_centered(stage.x, stage.w, stage.y + BUTTON_ROW, &text, style);
    }

    fn draw_sparkles(
        &self,
        fb: &mut FrameBuffer,
        stage: StageRect,
        scene: &Scene,
        now: Instant,
        theme: &Theme,
    ) {
        let style = CellStyle::new(Rgb::new(255, 236, 140), theme.bg).bold();
        for live in scene.sparkles.iter().filter(|s| s.is_visible(now)) {
            let (ax, ay) = stage.point(live.anchor.x, live.anchor.y);
            let x = (ax + live.sparkle.dx / PX_PER_COL).round();
            let y = (ay + live.sparkle.dy / PX_PER_ROW).round();
            if x < 0.0 || y < 0.0 {
                continue;
            }
            fb.put_char(x as u16, y as u16, live.sparkle.glyph, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_is_centered_and_clamped() {
        assert_eq!(
            StageRect::centered(Viewport::new(80, 24)),
            StageRect { x: 8, y: 1, w: 64, h: 22 }
        );
        assert_eq!(
            StageRect::centered(Viewport::new(30, 10)),
            StageRect { x: 0, y: 0, w: 30, h: 10 }
        );
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = DrawView::new();
        let now = Instant::now();
        for (w, h) in [(0, 0), (1, 1), (5, 3), (20, 5)] {
            let fb = view.render(&Scene::default(), now, Viewport::new(w, h));
            assert_eq!((fb.width(), fb.height()), (w, h));
        }
    }
}
