use yew::prelude::*;

const CONTROLS_CSS: &str = r#"
    .controls-hint {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        display: flex;
        flex-direction: column;
        align-items: flex-end;
        gap: 0.5rem;
        pointer-events: none;
    }
    .controls-hint .playing {
        font-size: 1.25rem;
        font-weight: bold;
        background: #4ade80;
        border: 2px solid #000;
        padding: 0.25rem 0.75rem;
        box-shadow: 4px 4px 0 0 #000;
        animation: hint-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .controls-hint .legend {
        background: #fff;
        border: 2px solid #000;
        padding: 1rem;
        box-shadow: 4px 4px 0 0 #000;
        font-size: 1.125rem;
    }
    .controls-hint .row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .controls-hint .row + .row {
        margin-top: 0.25rem;
    }
    .controls-hint kbd {
        background: #e5e7eb;
        border: 1px solid #000;
        padding: 0.125rem 0.375rem;
        font-family: inherit;
        font-weight: bold;
    }
    @keyframes hint-pulse {
        50% { opacity: 0.5; }
    }
    @media (max-width: 768px) {
        .controls-hint .legend {
            font-size: 0.875rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ControlsHintProps {
    pub is_playing: bool,
}

/// Keyboard legend pinned to the bottom-right corner.
#[function_component]
pub fn ControlsHint(props: &ControlsHintProps) -> Html {
    html! {
        <div class="controls-hint">
            <style>{CONTROLS_CSS}</style>
            if props.is_playing {
                <div class="playing">{"PLAYING..."}</div>
            }
            <div class="legend">
                <div class="row">
                    <kbd>{"[SPACE]"}</kbd>
                    <span>{"Play / Pause"}</span>
                </div>
                <div class="row">
                    <kbd>{"[R]"}</kbd>
                    <span>{"Replay"}</span>
                </div>
            </div>
        </div>
    }
}
