//! Terminal lucky draw (default binary).
//!
//! The sequence controller runs on its own single-worker runtime and writes
//! into a shared scene; this thread polls input, forwards actions and paints
//! the latest scene with the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use lucky_draw::audio::open_default;
use lucky_draw::config::AppConfig;
use lucky_draw::core::StdSelector;
use lucky_draw::engine::{DrawRuntime, SequenceController};
use lucky_draw::input::{handle_key_event, should_quit};
use lucky_draw::term::{
    DrawView, FrameBuffer, RenderThrottle, SceneEffects, SceneHandle, TerminalRenderer, Viewport,
};

const FRAME_MS: u64 = 16;
const IDLE_REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_logging()?;

    let scene = SceneHandle::new();
    let controller = SequenceController::new(
        scene.clone(),
        SceneEffects::from_entropy(&scene),
        open_default(config.audio_enabled),
        StdSelector::from_seed_opt(config.seed),
    );
    let runtime = DrawRuntime::start(controller).context("starting sequencer runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &runtime, &scene);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, runtime: &DrawRuntime, scene: &SceneHandle) -> Result<()> {
    let view = DrawView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(FRAME_MS, IDLE_REFRESH_MS);
    let mut updates = scene.subscribe();
    let mut revision: u64 = 0;
    let started = Instant::now();

    loop {
        let now = Instant::now();
        scene.prune(now);
        if updates.has_changed().unwrap_or(false) {
            updates.mark_unchanged();
            revision += 1;
        }

        let animating = updates.borrow().is_animating();
        let now_ms = now.duration_since(started).as_millis() as u64;
        if throttle.should_render(now_ms, revision, animating) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&updates.borrow(), now, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    runtime.send(action);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                // Repaint on the next pass even though the scene is unchanged.
                revision += 1;
            }
            _ => {}
        }
    }
}
