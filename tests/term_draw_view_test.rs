use std::time::{Duration, Instant};

use lucky_draw::core::Sparkle;
use lucky_draw::term::{DrawView, FrameBuffer, LiveSparkle, Pulse, Scene, StageRect, Viewport};
use lucky_draw::types::{copy, DisplayValue, SequenceState, MASCOT_ANCHOR, PLACEHOLDER};

const VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn render(scene: &Scene, now: Instant) -> FrameBuffer {
    DrawView::new().render(scene, now, VIEWPORT)
}

fn find_col(row: &str, needle: &str) -> Option<u16> {
    let hay: Vec<char> = row.chars().collect();
    let pat: Vec<char> = needle.chars().collect();
    hay.windows(pat.len())
        .position(|w| w == pat.as_slice())
        .map(|i| i as u16)
}

fn find_row(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
    (0..fb.height()).find_map(|y| find_col(&fb.row_text(y), needle).map(|x| (x, y)))
}

#[test]
fn idle_scene_shows_greeting_button_and_placeholder() {
    let fb = render(&Scene::default(), Instant::now());

    assert!(find_row(&fb, copy::STATUS_GREETING).is_some());
    assert!(find_row(&fb, &format!("[ {} ]", copy::LABEL_IDLE)).is_some());
    assert!(find_row(&fb, PLACEHOLDER).is_some());
    assert!(find_row(&fb, copy::MUTE_ON).is_some());
    assert!(find_row(&fb, copy::MUTE_OFF).is_none());
    for n in 1..=10 {
        assert!(find_row(&fb, &format!("[{n:>2}]")).is_some(), "gift {n}");
    }
}

#[test]
fn highlighted_gift_stands_out() {
    let scene = Scene {
        phase: SequenceState::Reveal,
        display: DisplayValue::Final(7),
        highlight: Some(7),
        status: copy::reveal(7),
        ..Scene::default()
    };
    let fb = render(&scene, Instant::now());

    let (x7, y) = find_row(&fb, "[ 7]").unwrap();
    let (x3, y3) = find_row(&fb, "[ 3]").unwrap();
    assert_eq!(y, y3);
    let lit = fb.get(x7 + 2, y).unwrap().style;
    let plain = fb.get(x3 + 2, y).unwrap().style;
    assert_ne!(lit.bg, plain.bg);
    assert!(lit.bold);

    assert!(find_row(&fb, "Ho ho ho! Open gift #7!").is_some());
    assert!(find_row(&fb, "reveal").is_some());
}

#[test]
fn disabled_button_is_dimmed() {
    let busy = Scene {
        phase: SequenceState::Rolling,
        trigger_enabled: false,
        trigger_label: copy::LABEL_ROLLING.to_string(),
        ..Scene::default()
    };
    let fb = render(&busy, Instant::now());
    let (x, y) = find_row(&fb, &format!("[ {} ]", copy::LABEL_ROLLING)).unwrap();
    assert!(fb.get(x, y).unwrap().style.dim);

    let fb = render(&Scene::default(), Instant::now());
    let (x, y) = find_row(&fb, &format!("[ {} ]", copy::LABEL_IDLE)).unwrap();
    assert!(!fb.get(x, y).unwrap().style.dim);
}

#[test]
fn magic_mode_warms_the_theme() {
    let now = Instant::now();
    let calm = render(&Scene::default(), now);
    let magic = render(
        &Scene {
            magic: true,
            ..Scene::default()
        },
        now,
    );
    let stage = StageRect::centered(VIEWPORT);
    assert_ne!(
        calm.get(stage.x, stage.y).unwrap().style,
        magic.get(stage.x, stage.y).unwrap().style
    );
}

#[test]
fn unmuted_indicator() {
    let fb = render(
        &Scene {
            muted: false,
            ..Scene::default()
        },
        Instant::now(),
    );
    assert!(find_row(&fb, copy::MUTE_OFF).is_some());
}

#[test]
fn pulse_widens_number_box_mid_animation() {
    let started = Instant::now();
    let scene = Scene {
        display: DisplayValue::Final(3),
        pulse: Some(Pulse {
            started,
            duration: Duration::from_millis(520),
        }),
        ..Scene::default()
    };

    // The eased curve reaches the 1.12 keyframe early in the run.
    let mid = render(&scene, started + Duration::from_millis(122));
    let done = render(&scene, started + Duration::from_millis(600));
    let width = |fb: &FrameBuffer| {
        let (_, y) = find_row(fb, " 3 ").unwrap();
        let row = fb.row_text(y - 1);
        row.chars().filter(|&c| c == '─').count()
    };
    assert!(width(&mid) > width(&done));
}

#[test]
fn sparkles_render_around_anchor_while_visible() {
    let born = Instant::now();
    let scene = Scene {
        sparkles: vec![LiveSparkle {
            sparkle: Sparkle {
                glyph: '★',
                dx: 80.0,
                dy: 32.0,
                delay_ms: 100,
            },
            anchor: MASCOT_ANCHOR,
            born,
        }],
        ..Scene::default()
    };

    let stage = StageRect::centered(VIEWPORT);
    let (ax, ay) = stage.point(MASCOT_ANCHOR.x, MASCOT_ANCHOR.y);
    let x = (ax + 10.0).round() as u16;
    let y = (ay + 2.0).round() as u16;

    let waiting = render(&scene, born + Duration::from_millis(50));
    assert_ne!(waiting.get(x, y).unwrap().ch, '★');

    let shown = render(&scene, born + Duration::from_millis(300));
    assert_eq!(shown.get(x, y).unwrap().ch, '★');

    let gone = render(&scene, born + Duration::from_millis(1100));
    assert_ne!(gone.get(x, y).unwrap().ch, '★');
}
