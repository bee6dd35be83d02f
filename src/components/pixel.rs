use yew::prelude::*;

pub const PIXEL_CSS: &str = r#"
    .pixel-card {
        position: relative;
        border: 4px solid #000;
        box-shadow: 8px 8px 0 0 #000;
    }
    .pixel-card-title {
        display: flex;
        justify-content: space-between;
        align-items: center;
        border-bottom: 4px solid #000;
        padding: 0.5rem;
        background: #fde047;
        font-weight: bold;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .pixel-card-title .window-dots {
        display: flex;
        gap: 0.25rem;
    }
    .pixel-card-title .dot-filled {
        width: 0.75rem;
        height: 0.75rem;
        background: #000;
    }
    .pixel-card-title .dot-hollow {
        width: 0.75rem;
        height: 0.75rem;
        border: 2px solid #000;
        box-sizing: border-box;
    }
    .pixel-card-body {
        padding: 1.5rem;
    }
    .pixel-button {
        border: 4px solid #000;
        box-shadow: 4px 4px 0 0 #000;
        padding: 0.75rem 1.5rem;
        font-family: inherit;
        font-weight: bold;
        font-size: 1.125rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        cursor: pointer;
        transition: all 0.15s;
    }
    .pixel-button:active {
        transform: translateY(4px);
        box-shadow: none;
    }
    .pixel-button.primary { background: #facc15; }
    .pixel-button.primary:hover { background: #fde047; }
    .pixel-button.secondary { background: #e5e7eb; }
    .pixel-button.secondary:hover { background: #f3f4f6; }
    .mbti-badge {
        display: inline-block;
        border: 2px solid #000;
        font-size: 0.75rem;
        font-weight: bold;
        padding: 0.125rem 0.25rem;
        margin: 0 0.25rem 0.25rem 0;
        box-shadow: 2px 2px 0 0 #000;
    }
    .chat-bubble {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        margin-bottom: 1rem;
    }
    .chat-bubble.from-user {
        align-items: flex-end;
    }
    .chat-bubble .sender {
        font-size: 2.25rem;
        font-weight: 900;
        margin-bottom: 0.5rem;
        text-transform: uppercase;
        color: #1f2937;
        letter-spacing: -0.05em;
        text-shadow: 2px 2px 0 rgba(255, 255, 255, 0.5);
    }
    .chat-bubble .message {
        border: 4px solid #000;
        padding: 1rem;
        max-width: 60%;
        box-shadow: 4px 4px 0 0 #000;
        font-family: monospace;
        font-size: 1.125rem;
        line-height: 1.25;
    }
    @media (max-width: 768px) {
        .chat-bubble .message {
            max-width: 80%;
        }
        .pixel-card-body {
            padding: 1rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct PixelCardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub color: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Retro card with a thick border and hard shadow.
#[function_component]
pub fn PixelCard(props: &PixelCardProps) -> Html {
    html! {
        <div
            class="pixel-card"
            style={format!("background: {};", props.color)}
        >
            if let Some(title) = &props.title {
                <div class="pixel-card-title">
                    <span>{title.clone()}</span>
                    <div class="window-dots">
                        <div class="dot-filled"></div>
                        <div class="dot-hollow"></div>
                    </div>
                </div>
            }
            <div class="pixel-card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PixelButtonProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn PixelButton(props: &PixelButtonProps) -> Html {
    html! {
        <button
            class={classes!("pixel-button", props.variant.class())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct MbtiBadgeProps {
    pub code: AttrValue,
    pub background: AttrValue,
    #[prop_or_default]
    pub light_text: bool,
}

#[function_component]
pub fn MbtiBadge(props: &MbtiBadgeProps) -> Html {
    let text = if props.light_text { "#ffffff" } else { "#000000" };
    html! {
        <span
            class="mbti-badge"
            style={format!("background: {}; color: {};", props.background, text)}
        >
            {props.code.clone()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatBubbleProps {
    pub sender: AttrValue,
    pub text: AttrValue,
    #[prop_or_default]
    pub is_user: bool,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

/// Bubble background when none is given: green for the user, white otherwise.
pub fn bubble_color(color: Option<&str>, is_user: bool) -> &str {
    match color {
        Some(color) => color,
        None if is_user => "#4ade80",
        None => "#ffffff",
    }
}

#[function_component]
pub fn ChatBubble(props: &ChatBubbleProps) -> Html {
    let background = bubble_color(props.color.as_deref(), props.is_user);
    html! {
        <div class={classes!("chat-bubble", props.is_user.then_some("from-user"))}>
            <span class="sender">{props.sender.clone()}</span>
            <div class="message" style={format!("background: {};", background)}>
                {props.text.clone()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_color_prefers_explicit_value() {
        assert_eq!(bubble_color(Some("#d8b4fe"), true), "#d8b4fe");
        assert_eq!(bubble_color(None, true), "#4ade80");
        assert_eq!(bubble_color(None, false), "#ffffff");
    }

    #[test]
    fn button_variants_have_styles() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary] {
            let selector = format!(".pixel-button.{}", variant.class());
            assert!(PIXEL_CSS.contains(&selector), "{}", selector);
        }
        assert!(ButtonVariant::default() == ButtonVariant::Primary);
    }
}
