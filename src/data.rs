//! Static content shown on the landing stage.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MbtiTile {
    pub code: &'static str,
    pub color: &'static str,
}

pub const GRID_COLUMNS: usize = 4;

pub const MBTI_GRID: [MbtiTile; 16] = [
    MbtiTile { code: "INTJ", color: "#8d6add" },
    MbtiTile { code: "INTP", color: "#a88fe8" },
    MbtiTile { code: "ENTJ", color: "#7042c9" },
    MbtiTile { code: "ENTP", color: "#bea6ff" },
    MbtiTile { code: "INFJ", color: "#4fb868" },
    MbtiTile { code: "INFP", color: "#7bdcb5" },
    MbtiTile { code: "ENFJ", color: "#358f4f" },
    MbtiTile { code: "ENFP", color: "#81e6ae" },
    MbtiTile { code: "ISTJ", color: "#4290e2" },
    MbtiTile { code: "ISFJ", color: "#7abaff" },
    MbtiTile { code: "ESTJ", color: "#2b70c9" },
    MbtiTile { code: "ESFJ", color: "#9ac9ff" },
    MbtiTile { code: "ISTP", color: "#d1a049" },
    MbtiTile { code: "ISFP", color: "#f4ce69" },
    MbtiTile { code: "ESTP", color: "#ba8530" },
    MbtiTile { code: "ESFP", color: "#ffde7a" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub sender: &'static str,
    pub text: &'static str,
    pub color: Option<&'static str>,
    pub is_user: bool,
}

impl ChatLine {
    const fn new(sender: &'static str, text: &'static str) -> Self {
        Self { sender, text, color: None, is_user: false }
    }

    const fn colored(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    const fn from_user(mut self) -> Self {
        self.is_user = true;
        self
    }
}

pub const CHAT_DEMO: [ChatLine; 4] = [
    ChatLine::new(
        "ENTP",
        "Finally, a branding update! I'm thinking we go for something abstract and chaotic.",
    )
    .colored("#d8b4fe"),
    ChatLine::new(
        "ISFP",
        "Let's keep it friendly, okay? I'm picturing a cozy pixel-art group selfie.",
    )
    .colored("#fde047")
    .from_user(),
    ChatLine::new(
        "INTJ",
        "Efficiency is key. The design must be functional before it is 'cozy'.",
    )
    .colored("#93c5fd"),
    ChatLine::new(
        "ENFP",
        "Yes!! Make sure it looks super colorful! A digital hug for everyone! ✨",
    )
    .from_user(),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub code: &'static str,
    pub background: &'static str,
    pub light_text: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicCard {
    pub title: &'static str,
    pub color: &'static str,
    pub lines: [ChatLine; 2],
    pub badges: &'static [Badge],
}

pub const TOPIC_CARDS: [TopicCard; 3] = [
    TopicCard {
        title: "Excel Help",
        color: "#67e8f9",
        lines: [
            ChatLine::new(
                "ESTJ",
                "Standard procedure is to use the SUM function. Don't complicate it.",
            ),
            ChatLine::new("ISTP", "Too much typing. Just press 'Alt + ='. Done.").colored("#fb923c"),
        ],
        badges: &[
            Badge { code: "ESTJ", background: "#3b82f6", light_text: true },
            Badge { code: "ISTP", background: "#ca8a04", light_text: true },
        ],
    },
    TopicCard {
        title: "Family Dinner",
        color: "#fde047",
        lines: [
            ChatLine::new(
                "User",
                "Please help me plan a family dinner for Christmas in Toronto.",
            )
            .colored("#4ade80"),
            ChatLine::new(
                "ISFJ",
                "Oh, that sounds wonderful! ❤️ The Drake Hotel offers a festive 3-course meal...",
            ),
        ],
        badges: &[Badge { code: "ISFJ", background: "#93c5fd", light_text: false }],
    },
    TopicCard {
        title: "Coding Questions",
        color: "#ffffff",
        lines: [
            ChatLine::new(
                "INTP",
                "Technically, using a recursion here creates a stack overflow risk.",
            )
            .colored("#d8b4fe"),
            ChatLine::new("ENTJ", "Just ship it. We can refactor in Q3.").colored("#f87171"),
        ],
        badges: &[
            Badge { code: "INTP", background: "#c084fc", light_text: true },
            Badge { code: "ENTJ", background: "#dc2626", light_text: true },
        ],
    },
];
