//! The landing choreography: title, welcome, member selection, chat bubbles,
//! stacked topic cards and the closing logo.

use crate::anim::ease::Ease;
use crate::anim::props::{PointerEvents, Props};
use crate::anim::timeline::{Position, Random, Stagger, StaggerFrom, Timeline, TweenSpec};
use crate::data::{CHAT_DEMO, MBTI_GRID, TOPIC_CARDS};

pub const WELCOME_PHASE: &str = "welcomePhase";
pub const SELECTION_PHASE: &str = "selectionPhase";
pub const SELECTION_EXIT: &str = "selectionExit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Title,
    Welcome,
    Selection,
    GridCell(usize),
    Bubble(usize),
    Card(usize),
    Logo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn current() -> Self {
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: f64| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
        };
        match web_sys::window() {
            Some(window) => Self {
                width: read(window.inner_width(), 1280.0),
                height: read(window.inner_height(), 800.0),
            },
            None => Self { width: 1280.0, height: 800.0 },
        }
    }
}

fn grid_cells() -> Vec<Target> {
    (0..MBTI_GRID.len()).map(Target::GridCell).collect()
}

fn bubbles() -> Vec<Target> {
    (0..CHAT_DEMO.len()).map(Target::Bubble).collect()
}

fn cards() -> Vec<Target> {
    (0..TOPIC_CARDS.len()).map(Target::Card).collect()
}

/// Every target the stage animates, in markup order.
pub fn targets() -> Vec<Target> {
    let mut all = vec![Target::Title, Target::Welcome, Target::Selection];
    all.extend(grid_cells());
    all.extend(bubbles());
    all.extend(cards());
    all.push(Target::Logo);
    all
}

pub fn build(viewport: Viewport, random: Random) -> Timeline<Target> {
    let mut tl = Timeline::new(random);
    tl.set_base(Target::Welcome, Props::new().opacity(0.0));
    tl.set_base(Target::Selection, Props::new().opacity(0.0));
    tl.set_base(Target::Logo, Props::new().opacity(0.0));

    opening(&mut tl, viewport);
    selection(&mut tl, viewport);
    chat_demo(&mut tl);
    topic_cards(&mut tl);
    logo(&mut tl);

    log::info!("Landing timeline built: {:.1}s", tl.duration());
    tl
}

fn opening(tl: &mut Timeline<Target>, viewport: Viewport) {
    tl.to(
        &[Target::Title],
        TweenSpec::new(4.0).ease(Ease::PowerInOut(2)),
        Position::End,
        |_, _| Props::new().y(-viewport.height / 1.5).opacity(0.0).scale(0.8),
    );
    tl.from_to(
        &[Target::Welcome],
        TweenSpec::new(4.0).ease(Ease::BackOut { overshoot: 1.2 }),
        Position::AfterPreviousStart(2.0),
        |_, _| {
            Props::new()
                .y(400.0)
                .opacity(0.0)
                .scale(0.8)
                .pointer_events(PointerEvents::None)
        },
        |_, _| {
            Props::new()
                .y(0.0)
                .opacity(1.0)
                .scale(1.0)
                .pointer_events(PointerEvents::Auto)
        },
    );
    tl.add_label(WELCOME_PHASE);
    tl.pause(3.0);
}

fn selection(tl: &mut Timeline<Target>, viewport: Viewport) {
    tl.to(&[Target::Welcome], TweenSpec::new(3.0), Position::End, |_, _| {
        Props::new()
            .opacity(0.0)
            .scale(0.8)
            .y(-200.0)
            .pointer_events(PointerEvents::None)
    });
    tl.from_to(
        &[Target::Selection],
        TweenSpec::new(4.0).ease(Ease::PowerOut(3)),
        Position::End,
        |_, _| Props::new().y(600.0).opacity(0.0).rotate_x(45.0),
        |_, _| Props::new().y(0.0).opacity(1.0).rotate_x(0.0),
    );

    let cells = grid_cells();
    tl.from_to(
        &cells,
        TweenSpec::new(2.0)
            .ease(Ease::ElasticOut { amplitude: 1.0, period: 0.3 })
            .stagger(Stagger::amount(1.5).from(StaggerFrom::Random)),
        Position::End,
        |_, _| Props::new().scale(0.0).rotation(-360.0).opacity(0.0),
        |_, _| Props::new().scale(1.0).rotation(0.0).opacity(1.0),
    );
    tl.add_label(SELECTION_PHASE);
    tl.pause(4.0);

    // cells scatter in every direction while the modal drops away
    tl.to(
        &cells,
        TweenSpec::new(1.5)
            .jitter(2.0)
            .ease(Ease::PowerIn(3))
            .stagger(Stagger::amount(0.5).from(StaggerFrom::Random)),
        Position::label(SELECTION_EXIT),
        |_, random| {
            Props::new()
                .x((random() - 0.5) * viewport.width * 2.0)
                .y((random() - 0.5) * viewport.height * 2.0)
                .rotation(random() * 720.0 - 360.0)
                .scale(0.0)
                .opacity(0.0)
        },
    );
    tl.to(
        &[Target::Selection],
        TweenSpec::new(4.0).ease(Ease::PowerIn(2)),
        Position::label_offset(SELECTION_EXIT, 0.5),
        |_, _| Props::new().y(-800.0).opacity(0.0).scale(0.9),
    );
}

fn chat_demo(tl: &mut Timeline<Target>) {
    let bubbles = bubbles();
    tl.from_to(
        &bubbles,
        TweenSpec::new(5.0)
            .ease(Ease::PowerOut(3))
            .stagger(Stagger::each(0.5)),
        Position::End,
        |i, random| {
            Props::new()
                .x(if i % 2 == 0 { -1500.0 } else { 1500.0 })
                .y(random() * 1000.0 - 500.0)
                .rotation(random() * 90.0 - 45.0)
                .opacity(0.0)
        },
        |_, _| Props::new().x(0.0).y(0.0).rotation(0.0).opacity(1.0),
    );
    tl.pause(3.0);
    tl.to(
        &bubbles,
        TweenSpec::new(3.0).stagger(Stagger::each(0.2)),
        Position::End,
        |_, _| Props::new().y(-1000.0).opacity(0.0),
    );
}

fn topic_cards(tl: &mut Timeline<Target>) {
    let cards = cards();
    for (index, &card) in cards.iter().enumerate() {
        let tilt = if index % 2 == 0 { 1.0 } else { -1.0 };
        tl.from_to(
            &[card],
            TweenSpec::new(4.0).ease(Ease::PowerOut(2)),
            Position::End,
            |_, _| Props::new().y(1200.0).rotation(10.0 * tilt).opacity(0.0),
            |_, _| Props::new().y(0.0).rotation(2.0 * tilt).opacity(1.0),
        );
        tl.pause(2.0);
        if index + 1 < cards.len() {
            // push the card back into the stack
            tl.to(&[card], TweenSpec::new(2.0), Position::End, |_, _| {
                Props::new()
                    .scale(0.9 - index as f64 * 0.05)
                    .y(-50.0 * (index + 1) as f64)
                    .brightness(0.7)
            });
        }
    }
    tl.to(
        &cards,
        TweenSpec::new(4.0).stagger(Stagger::each(0.5)),
        Position::End,
        |_, _| Props::new().y(-1500.0).opacity(0.0),
    );
}

fn logo(tl: &mut Timeline<Target>) {
    tl.from_to(
        &[Target::Logo],
        TweenSpec::new(5.0).ease(Ease::ElasticOut { amplitude: 1.0, period: 0.6 }),
        Position::End,
        |_, _| Props::new().y(800.0).scale(0.5).rotation(-10.0).opacity(0.0),
        |_, _| Props::new().y(0.0).scale(1.0).rotation(0.0).opacity(1.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::scroll::ScrollMap;
    use crate::config::StageConfig;
    use crate::playback::AutoScroll;

    const VIEWPORT: Viewport = Viewport { width: 1000.0, height: 900.0 };

    fn seeded() -> Random {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        Box::new(move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn phases_are_labelled_in_order() {
        let tl = build(VIEWPORT, seeded());
        let welcome = tl.label_time(WELCOME_PHASE).unwrap();
        let selection = tl.label_time(SELECTION_PHASE).unwrap();
        let exit = tl.label_time(SELECTION_EXIT).unwrap();
        assert!(close(welcome, 6.0));
        assert!(close(selection, 19.5));
        assert!(close(exit, 23.5));
    }

    #[test]
    fn create_chat_jumps_to_selection_scroll() {
        let config = StageConfig::default();
        let tl = build(VIEWPORT, seeded());
        let map = ScrollMap::new(config.scroll_distance, tl.duration());
        let target = map.label_scroll(&tl, SELECTION_PHASE).unwrap();
        assert!((target - 19.5 / 73.1 * 8000.0).abs() < 1e-6);
        assert!((target - 2134.06).abs() < 0.01);

        let mut auto = AutoScroll::new(&config);
        auto.jump_to(0.0, target);
        let mut last = None;
        while let Some(y) = auto.tick(1.0 / 60.0) {
            last = Some(y);
        }
        assert!((last.unwrap() - target).abs() < 1e-9);
        assert!(close(tl.render(map.time_at(target))[&Target::Selection].opacity, 1.0));
    }

    #[test]
    fn total_length_covers_every_phase() {
        let tl = build(VIEWPORT, seeded());
        assert!(close(tl.duration(), 73.1));
    }

    #[test]
    fn opening_frame_shows_only_the_title() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(0.0);
        assert_eq!(frame[&Target::Title].opacity, 1.0);
        assert_eq!(frame[&Target::Welcome].opacity, 0.0);
        assert_eq!(frame[&Target::Welcome].pointer_events, Some(PointerEvents::None));
        assert_eq!(frame[&Target::Selection].opacity, 0.0);
        assert_eq!(frame[&Target::Logo].opacity, 0.0);
        for i in 0..CHAT_DEMO.len() {
            assert_eq!(frame[&Target::Bubble(i)].opacity, 0.0);
        }
        for i in 0..TOPIC_CARDS.len() {
            assert_eq!(frame[&Target::Card(i)].y, 1200.0);
        }
    }

    #[test]
    fn welcome_is_interactive_at_its_label() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(tl.label_time(WELCOME_PHASE).unwrap());
        let welcome = frame[&Target::Welcome];
        assert!(close(welcome.opacity, 1.0));
        assert_eq!(welcome.pointer_events, Some(PointerEvents::Auto));
        assert!(close(frame[&Target::Title].y, -600.0));
    }

    #[test]
    fn grid_is_settled_at_selection_phase() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(tl.label_time(SELECTION_PHASE).unwrap());
        for i in 0..MBTI_GRID.len() {
            let cell = frame[&Target::GridCell(i)];
            assert!(close(cell.scale, 1.0), "cell {} scale {}", i, cell.scale);
            assert!(close(cell.opacity, 1.0));
        }
        assert!(close(frame[&Target::Selection].opacity, 1.0));
        assert_eq!(frame[&Target::Welcome].pointer_events, Some(PointerEvents::None));
    }

    #[test]
    fn grid_has_scattered_after_exit() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(28.0);
        for i in 0..MBTI_GRID.len() {
            let cell = frame[&Target::GridCell(i)];
            assert!(close(cell.opacity, 0.0));
            assert!(cell.x.abs() <= VIEWPORT.width);
            assert!(cell.y.abs() <= VIEWPORT.height);
        }
    }

    #[test]
    fn cards_stack_behind_each_other() {
        let tl = build(VIEWPORT, seeded());
        // third card has landed, the first two are pushed back
        let frame = tl.render(62.0);
        let first = frame[&Target::Card(0)];
        let second = frame[&Target::Card(1)];
        let third = frame[&Target::Card(2)];
        assert!(close(first.scale, 0.9) && close(first.y, -50.0));
        assert!(close(second.scale, 0.85) && close(second.y, -100.0));
        assert_eq!(first.brightness, Some(0.7));
        assert!(close(third.y, 0.0));
        assert_eq!(third.brightness, None);
        assert!(close(third.rotation, 2.0) && close(second.rotation, -2.0));
    }

    #[test]
    fn only_switched_targets_carry_pointer_events() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(62.0);
        assert_eq!(frame[&Target::Title].pointer_events, None);
        assert_eq!(frame[&Target::Card(2)].pointer_events, None);
        assert_eq!(frame[&Target::Title].brightness, None);
        assert!(frame[&Target::Welcome].pointer_events.is_some());
    }

    #[test]
    fn final_frame_reveals_the_logo() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(tl.duration());
        let logo = frame[&Target::Logo];
        assert!(close(logo.opacity, 1.0));
        assert!(close(logo.scale, 1.0));
        assert!(close(logo.y, 0.0));
        for i in 0..TOPIC_CARDS.len() {
            assert!(close(frame[&Target::Card(i)].opacity, 0.0));
        }
    }

    #[test]
    fn every_target_is_rendered() {
        let tl = build(VIEWPORT, seeded());
        let frame = tl.render(30.0);
        for target in targets() {
            assert!(frame.contains_key(&target), "{:?}", target);
        }
        assert_eq!(targets().len(), 3 + 16 + 4 + 3 + 1);
    }
}
