use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::anim::scroll::{ScrollMap, Scrubber};
use crate::anim::timeline::Timeline;
use crate::components::controls::ControlsHint;
use crate::components::pixel::{
    ButtonVariant, ChatBubble, MbtiBadge, PixelButton, PixelCard, PIXEL_CSS,
};
use crate::config::StageConfig;
use crate::data::{CHAT_DEMO, GRID_COLUMNS, MBTI_GRID, TOPIC_CARDS};
use crate::dom::{self, Listener};
use crate::error::StageError;
use crate::frame_loop::{FrameClock, FrameLoop};
use crate::playback::{AutoScroll, Shortcut};
use crate::sequence::{self, Target, Viewport, SELECTION_PHASE};

/// Node refs for every animated element.
struct StageRefs {
    title: NodeRef,
    welcome: NodeRef,
    selection: NodeRef,
    grid: Vec<NodeRef>,
    bubbles: Vec<NodeRef>,
    cards: Vec<NodeRef>,
    logo: NodeRef,
}

impl StageRefs {
    fn new() -> Self {
        Self {
            title: NodeRef::default(),
            welcome: NodeRef::default(),
            selection: NodeRef::default(),
            grid: MBTI_GRID.iter().map(|_| NodeRef::default()).collect(),
            bubbles: CHAT_DEMO.iter().map(|_| NodeRef::default()).collect(),
            cards: TOPIC_CARDS.iter().map(|_| NodeRef::default()).collect(),
            logo: NodeRef::default(),
        }
    }

    fn node(&self, target: Target) -> Option<&NodeRef> {
        match target {
            Target::Title => Some(&self.title),
            Target::Welcome => Some(&self.welcome),
            Target::Selection => Some(&self.selection),
            Target::GridCell(i) => self.grid.get(i),
            Target::Bubble(i) => self.bubbles.get(i),
            Target::Card(i) => self.cards.get(i),
            Target::Logo => Some(&self.logo),
        }
    }
}

/// Animation state shared by the frame loop, the listeners and the buttons.
struct Runtime {
    timeline: Timeline<Target>,
    scroll_map: ScrollMap,
    scrubber: Scrubber,
    clock: FrameClock,
    auto: AutoScroll,
    last_playhead: Option<f64>,
    shown_playing: bool,
}

impl Runtime {
    fn new(config: &StageConfig, viewport: Viewport) -> Self {
        let timeline = sequence::build(viewport, Box::new(js_sys::Math::random));
        let scroll_map = ScrollMap::new(config.scroll_distance, timeline.duration());
        Self {
            timeline,
            scroll_map,
            scrubber: Scrubber::new(config.scrub_seconds),
            clock: FrameClock::default(),
            auto: AutoScroll::new(config),
            last_playhead: None,
            shown_playing: false,
        }
    }

    /// New value for the "PLAYING" indicator, if it changed.
    fn take_playing_change(&mut self) -> Option<bool> {
        let playing = self.auto.is_playing();
        if playing == self.shown_playing {
            return None;
        }
        self.shown_playing = playing;
        Some(playing)
    }

    fn frame(&mut self, timestamp: f64, refs: &StageRefs) {
        let dt = self.clock.step(timestamp);
        if let Some(y) = self.auto.tick(dt) {
            dom::scroll_to(y);
        }
        let target = self.scroll_map.time_at(dom::scroll_y());
        let playhead = self.scrubber.advance(target, dt);
        self.paint(playhead, refs);
    }

    fn paint(&mut self, playhead: f64, refs: &StageRefs) {
        if self.last_playhead == Some(playhead) {
            return;
        }
        self.last_playhead = Some(playhead);
        for (target, style) in self.timeline.render(playhead) {
            let Some(element) = refs.node(target).and_then(|n| n.cast::<HtmlElement>()) else {
                continue;
            };
            if let Err(e) = dom::apply_style(&element, &style) {
                log::warn!("Failed to style {:?}: {}", target, e);
            }
        }
    }
}

type SharedRuntime = Rc<RefCell<Option<Runtime>>>;

/// Everything the stage registers with the browser; dropping it unhooks all of it.
struct StageGuards {
    _frame_loop: FrameLoop,
    _listeners: Vec<Listener>,
}

/// Runs `f` against the live runtime and pushes any indicator change to Yew
/// after the runtime borrow has been released.
fn with_runtime<F>(runtime: &SharedRuntime, is_playing: &UseStateHandle<bool>, f: F)
where
    F: FnOnce(&mut Runtime),
{
    let change = {
        let mut guard = runtime.borrow_mut();
        let Some(rt) = guard.as_mut() else {
            return;
        };
        f(rt);
        rt.take_playing_change()
    };
    if let Some(playing) = change {
        is_playing.set(playing);
    }
}

fn on_shortcut(rt: &mut Runtime, shortcut: Shortcut) {
    let current = dom::scroll_y();
    match shortcut {
        Shortcut::TogglePlayback => match dom::max_scroll_y() {
            Ok(max_y) => {
                if rt.auto.toggle(current, max_y) {
                    log::info!("Auto-scroll from {:.0}px to {:.0}px", current, max_y);
                }
            }
            Err(e) => log::warn!("Cannot measure page for playback: {}", e),
        },
        Shortcut::Replay => {
            log::info!("Replaying from {:.0}px", current);
            rt.auto.replay(current);
        }
    }
}

fn mount_stage(
    config: &StageConfig,
    runtime: SharedRuntime,
    refs: UseStateHandle<StageRefs>,
    is_playing: UseStateHandle<bool>,
) -> Result<StageGuards, StageError> {
    {
        let mut rt = Runtime::new(config, Viewport::current());
        let start = rt.scroll_map.time_at(dom::scroll_y());
        rt.scrubber.advance(start, 0.0);
        rt.paint(start, &refs);
        *runtime.borrow_mut() = Some(rt);
    }

    let mut listeners = Vec::new();
    {
        let runtime = runtime.clone();
        let is_playing = is_playing.clone();
        listeners.push(Listener::on_window("keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(shortcut) = Shortcut::from_code(&key.code()) else {
                return;
            };
            event.prevent_default();
            with_runtime(&runtime, &is_playing, |rt| on_shortcut(rt, shortcut));
        })?);
    }
    for name in ["wheel", "touchstart"] {
        let runtime = runtime.clone();
        let is_playing = is_playing.clone();
        listeners.push(Listener::on_window(name, move |_| {
            with_runtime(&runtime, &is_playing, |rt| {
                if rt.auto.interrupt() {
                    log::debug!("Auto-scroll cancelled by {}", name);
                }
            });
        })?);
    }

    let frame_loop = FrameLoop::start(move |timestamp| {
        with_runtime(&runtime, &is_playing, |rt| rt.frame(timestamp, &refs));
    })?;

    Ok(StageGuards {
        _frame_loop: frame_loop,
        _listeners: listeners,
    })
}

const STAGE_CSS: &str = r#"
    .landing-stage {
        min-height: 100vh;
        color: #000;
        font-family: 'VT323', monospace;
        background-color: #f3f0e8;
        background-image: radial-gradient(#c9c3b4 1.5px, transparent 1.5px);
        background-size: 24px 24px;
    }
    .stage {
        position: sticky;
        top: 0;
        height: 100vh;
        width: 100%;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .stage .layer {
        position: absolute;
        will-change: transform, opacity;
    }
    .stage-title {
        z-index: 50;
        text-align: center;
    }
    .big-logo {
        font-size: 16rem;
        font-weight: normal;
        line-height: 1;
        letter-spacing: -0.05em;
        margin: 0 0 1rem 0;
        -webkit-text-stroke: 2px white;
        text-shadow: 6px 6px 0 #fff, 12px 12px 0 rgba(0, 0, 0, 0.2);
    }
    .stage-logo .big-logo {
        text-shadow: 6px 6px 0 #fff, 10px 10px 0 rgba(0, 0, 0, 0.5);
    }
    .scroll-cue {
        margin-top: 2rem;
        font-size: 1.5rem;
        font-weight: bold;
        animation: cue-bounce 1s infinite;
    }
    @keyframes cue-bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }
    .modal-layer {
        z-index: 40;
        width: 100%;
        padding: 1rem;
        box-sizing: border-box;
        display: flex;
        justify-content: center;
        align-items: center;
        opacity: 0;
    }
    .modal {
        position: relative;
        background: #fff;
        border: 6px solid #000;
        width: 100%;
        box-sizing: border-box;
    }
    .welcome-modal {
        max-width: 56rem;
        padding: 4rem;
        text-align: center;
        display: flex;
        flex-direction: column;
        align-items: center;
        box-shadow: 16px 16px 0 0 #000;
    }
    .welcome-modal h2 {
        font-size: 6rem;
        font-weight: 900;
        color: #ff00ff;
        margin: 0 0 2rem 0;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        text-shadow: 3px 3px 0 #000;
    }
    .welcome-modal p {
        font-size: 1.875rem;
        font-weight: bold;
        max-width: 42rem;
        margin: 0 0 3rem 0;
        line-height: 1.6;
    }
    .welcome-modal .pixel-button {
        border-width: 5px;
        box-shadow: 8px 8px 0 0 #000;
        padding: 1.25rem 2rem;
        font-size: 1.875rem;
        background: #fde047;
    }
    .welcome-modal .pixel-button:hover {
        background: #facc15;
    }
    .selection-modal {
        max-width: 42rem;
        padding: 1.5rem;
        box-shadow: 12px 12px 0 0 #000;
    }
    .selection-modal .close {
        position: absolute;
        top: 0.75rem;
        right: 1rem;
        font-size: 1.25rem;
        font-weight: bold;
        font-family: sans-serif;
        cursor: pointer;
    }
    .selection-modal h2 {
        font-size: 2.25rem;
        font-weight: 900;
        text-align: center;
        margin: 0 0 1.5rem 0;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .selection-modal label {
        display: block;
        font-size: 1.25rem;
        font-weight: bold;
        margin-bottom: 0.5rem;
        text-transform: uppercase;
    }
    .selection-modal .field {
        margin-bottom: 1.5rem;
    }
    .room-name {
        background: #333;
        border: 4px solid #000;
        padding: 0.75rem;
        color: #d1d5db;
        font-family: monospace;
        font-size: 1.125rem;
        box-shadow: 4px 4px 0 0 #000;
    }
    .mbti-grid {
        display: grid;
        gap: 0.75rem;
    }
    .mbti-cell {
        aspect-ratio: 3 / 2;
        border: 3px solid #000;
        box-shadow: 3px 3px 0 0 #000;
        display: flex;
        align-items: center;
        justify-content: center;
        font-family: inherit;
        font-weight: bold;
        font-size: 2.25rem;
        cursor: pointer;
    }
    .mbti-cell:hover {
        box-shadow: none;
    }
    .selection-actions {
        display: flex;
        justify-content: flex-end;
    }
    .bubbles-layer {
        z-index: 30;
        width: 100%;
        max-width: 42rem;
        padding: 0 1rem;
        box-sizing: border-box;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .bubbles-layer .from-user-slot {
        align-self: flex-end;
        width: 100%;
    }
    .cards-layer {
        z-index: 20;
        width: 100%;
        max-width: 48rem;
        height: 100%;
        padding: 0 1rem;
        box-sizing: border-box;
        display: flex;
        align-items: center;
        justify-content: center;
        pointer-events: none;
    }
    .cards-layer .card-slot {
        position: absolute;
        width: 100%;
        max-width: 32rem;
    }
    .card-badges {
        display: flex;
        gap: 0.5rem;
        border-top: 4px solid #000;
        padding-top: 1rem;
    }
    .stage-logo {
        z-index: 20;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        opacity: 0;
    }
    @media (max-width: 768px) {
        .big-logo { font-size: 12rem; }
        .welcome-modal { padding: 2rem; }
        .welcome-modal h2 { font-size: 3.75rem; }
        .welcome-modal p { font-size: 1.5rem; }
        .welcome-modal .pixel-button { width: 100%; font-size: 1.5rem; }
        .selection-modal h2 { font-size: 1.875rem; }
        .mbti-grid { gap: 0.5rem; }
        .mbti-cell { font-size: 1.875rem; }
    }
"#;

fn grid_columns(columns: usize) -> String {
    format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns)
}

fn big_logo() -> Html {
    html! {
        <h1 class="big-logo">{"CHAT"}<br/>{"MBTI"}</h1>
    }
}

#[function_component]
pub fn Landing() -> Html {
    let is_playing = use_state(|| false);
    let refs = use_state(StageRefs::new);
    let runtime: SharedRuntime = use_mut_ref(|| None);
    let config = use_memo(|_| StageConfig::from_location(), ());

    {
        let runtime = runtime.clone();
        let refs = refs.clone();
        let is_playing = is_playing.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let guards = match mount_stage(&config, runtime.clone(), refs, is_playing) {
                    Ok(guards) => Some(guards),
                    Err(e) => {
                        log::error!("Failed to start landing stage: {}", e);
                        None
                    }
                };
                move || {
                    drop(guards);
                    runtime.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_create_chat = {
        let runtime = runtime.clone();
        let is_playing = is_playing.clone();
        Callback::from(move |_: MouseEvent| {
            with_runtime(&runtime, &is_playing, |rt| {
                let Some(target) = rt.scroll_map.label_scroll(&rt.timeline, SELECTION_PHASE) else {
                    return;
                };
                rt.auto.jump_to(dom::scroll_y(), target);
            });
        })
    };

    let track_height = format!("height: calc(100vh + {}px);", config.scroll_distance);

    html! {
        <div class="landing-stage">
            <style>{PIXEL_CSS}</style>
            <style>{STAGE_CSS}</style>
            <div class="stage-track" style={track_height}>
                <div class="stage">
                    <div ref={refs.title.clone()} class="layer stage-title">
                        { big_logo() }
                        <div class="scroll-cue">{"SCROLL TO START ▼"}</div>
                    </div>

                    <div ref={refs.welcome.clone()} class="layer modal-layer">
                        <div class="modal welcome-modal">
                            <h2>{"WELCOME"}</h2>
                            <p>{"Select a chat from the sidebar or create a new one to talk with MBTI personalities!"}</p>
                            <PixelButton onclick={on_create_chat}>{"Create New Chat"}</PixelButton>
                        </div>
                    </div>

                    <div ref={refs.selection.clone()} class="layer modal-layer">
                        <div class="modal selection-modal">
                            <div class="close">{"X"}</div>
                            <h2>{"CREATE CHAT ROOM"}</h2>
                            <div class="field">
                                <label>{"Room Name"}</label>
                                <div class="room-name">{"e.g. The Debaters"}</div>
                            </div>
                            <div class="field">
                                <label>{"Select Members (Max 8)"}</label>
                                <div class="mbti-grid" style={grid_columns(GRID_COLUMNS)}>
                                    { for MBTI_GRID.iter().zip(refs.grid.iter()).map(|(tile, node)| html! {
                                        <button
                                            key={tile.code}
                                            ref={node.clone()}
                                            class="mbti-cell"
                                            style={format!("background: {};", tile.color)}
                                        >
                                            {tile.code}
                                        </button>
                                    }) }
                                </div>
                            </div>
                            <div class="selection-actions">
                                <PixelButton variant={ButtonVariant::Secondary}>
                                    {"START CHAT"}
                                </PixelButton>
                            </div>
                        </div>
                    </div>

                    <div class="layer bubbles-layer">
                        { for CHAT_DEMO.iter().zip(refs.bubbles.iter()).map(|(line, node)| html! {
                            <div
                                ref={node.clone()}
                                class={classes!(line.is_user.then_some("from-user-slot"))}
                            >
                                <ChatBubble
                                    sender={line.sender}
                                    text={line.text}
                                    is_user={line.is_user}
                                    color={line.color.map(AttrValue::from)}
                                />
                            </div>
                        }) }
                    </div>

                    <div class="layer cards-layer">
                        { for TOPIC_CARDS.iter().zip(refs.cards.iter()).map(|(card, node)| html! {
                            <div ref={node.clone()} class="card-slot">
                                <PixelCard title={card.title} color={card.color}>
                                    <div>
                                        { for card.lines.iter().map(|line| html! {
                                            <ChatBubble
                                                sender={line.sender}
                                                text={line.text}
                                                is_user={line.is_user}
                                                color={line.color.map(AttrValue::from)}
                                            />
                                        }) }
                                    </div>
                                    <div class="card-badges">
                                        { for card.badges.iter().map(|badge| html! {
                                            <MbtiBadge
                                                code={badge.code}
                                                background={badge.background}
                                                light_text={badge.light_text}
                                            />
                                        }) }
                                    </div>
                                </PixelCard>
                            </div>
                        }) }
                    </div>

                    <div ref={refs.logo.clone()} class="layer stage-logo">
                        { big_logo() }
                    </div>
                </div>
            </div>
            <ControlsHint is_playing={*is_playing} />
        </div>
    }
}
