// SPDX-License-Identifier: MPL-2.0
//! Slide content for both deck variants.
//!
//! Content is static and typed: each slide is an ordered list of [`Block`]s
//! that the UI layer renders. Interactive blocks only name a widget; the
//! widget state itself lives in the application, not in the deck.

use super::Variant;

/// Headline figure on the title slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Icon card used by most grid slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    /// Optional second line (e.g. the fix for a challenge).
    pub detail: Option<&'static str>,
}

impl Card {
    const fn new(icon: &'static str, title: &'static str, body: &'static str) -> Self {
        Self {
            icon,
            title,
            body,
            detail: None,
        }
    }

    const fn with_detail(
        icon: &'static str,
        title: &'static str,
        body: &'static str,
        detail: &'static str,
    ) -> Self {
        Self {
            icon,
            title,
            body,
            detail: Some(detail),
        }
    }
}

/// Interactive widget hosted by a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// Fixed "Quick Round" and "Extended Round" countdowns side by side.
    RoundTimers,
    /// One countdown with duration presets and pause.
    Countdown,
    /// Single-select drawing concept picker.
    ConceptPicker,
    /// Multi-select barrier poll.
    BarrierPicker,
}

/// One piece of slide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Title {
        words: &'static [&'static str],
        subtitle: &'static str,
    },
    Heading(&'static str),
    Paragraph(&'static str),
    Stats(&'static [Stat]),
    Cards(&'static [Card]),
    Numbered(&'static [&'static str]),
    Quote {
        text: &'static str,
        author: &'static str,
    },
    Interactive(Widget),
}

/// One full-screen unit of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub blocks: &'static [Block],
}

impl Slide {
    /// The first heading or title word of the slide, for window titles and logs.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::Heading(text) => Some(*text),
                Block::Title { words, .. } => words.first().copied(),
                _ => None,
            })
            .unwrap_or(self.id)
    }

    /// Widgets hosted by this slide, in order.
    pub fn widgets(&self) -> impl Iterator<Item = Widget> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Interactive(widget) => Some(*widget),
            _ => None,
        })
    }
}

/// Ordered, immutable sequence of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    variant: Variant,
    slides: &'static [Slide],
}

impl Deck {
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        let slides: &'static [Slide] = match variant {
            Variant::Classic => &CLASSIC_SLIDES,
            Variant::Scroll => &SCROLL_SLIDES,
        };
        Self { variant, slides }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    /// Whether any slide hosts `widget`.
    #[must_use]
    pub fn hosts(&self, widget: Widget) -> bool {
        self.slides.iter().any(|s| s.widgets().any(|w| w == widget))
    }
}

// =============================================================================
// Shared slides
// =============================================================================

const INTRO: Slide = Slide {
    id: "intro",
    blocks: &[
        Block::Title {
            words: &["Teamwork", "&", "Collaboration"],
            subtitle: "{ Building Better Software Together }",
        },
        Block::Stats(&[
            Stat {
                value: "80%",
                label: "of our work involves collaboration",
            },
            Stat {
                value: "3x",
                label: "more innovative with diverse teams",
            },
            Stat {
                value: "5x",
                label: "better performance in collaborative teams",
            },
        ]),
    ],
};

const FOUNDATION_CARDS: &[Card] = &[
    Card::with_detail(
        "🚣",
        "Teamwork",
        "Working together towards a goal",
        "Like rowing a boat - everyone does their part",
    ),
    Card::with_detail(
        "🎷",
        "Collaboration",
        "Creating together with shared ideas",
        "Like a jazz band - improvising and building on each other",
    ),
];

const FOUNDATION: Slide = Slide {
    id: "foundation",
    blocks: &[
        Block::Heading("The Foundation: What's the Difference?"),
        Block::Cards(FOUNDATION_CARDS),
        Block::Paragraph(
            "One is about dividing tasks, the other is about multiplying ideas",
        ),
    ],
};

const ICEBREAKER: Slide = Slide {
    id: "icebreaker",
    blocks: &[
        Block::Heading("🌟 Ice Breaker: Success Stories"),
        Block::Paragraph("💬 Share Your Experience! Turn to someone near you and share:"),
        Block::Quote {
            text: "A time when teamwork & collaboration helped you succeed",
            author: "What big progress did you make together?",
        },
        Block::Paragraph("⏱️ 1 minute"),
    ],
};

const WHY_MATTERS_CARDS: &[Card] = &[
    Card::new("🤝", "Trust & Relationships", "Your network is your net worth"),
    Card::new("🧩", "Better Problem Solving", "None of us is as smart as all of us"),
    Card::new("💡", "Innovation", "Great ideas rarely happen in isolation"),
];

const WHY_MATTERS: Slide = Slide {
    id: "why-matters",
    blocks: &[
        Block::Heading("Why This Matters"),
        Block::Cards(WHY_MATTERS_CARDS),
    ],
};

const DEV_TEAM_CARDS: &[Card] = &[
    Card::new("🐛", "Debugging", "More eyes = fewer bugs"),
    Card::new("👀", "Code Reviews", "Like spell-check but for logic"),
    Card::new(
        "📚",
        "Knowledge Transfer",
        "Learn that framework you've been avoiding",
    ),
    Card::new("🚌", "The \"Bus Factor\"", "What if someone gets hit by a bus?"),
    Card::new(
        "🏗️",
        "Better Architecture",
        "Multiple perspectives = robust solutions",
    ),
    Card::new("⚡", "Faster Delivery", "Parallel work, shared ownership"),
];

const DEV_TEAMS: Slide = Slide {
    id: "dev-teams",
    blocks: &[
        Block::Heading("</> Why Dev Teams Excel Together"),
        Block::Cards(DEV_TEAM_CARDS),
    ],
};

const FIVE_C_CARDS: &[Card] = &[
    Card::new("💬", "Communication", "Not just Slack reactions"),
    Card::new("🤝", "Collaboration", "Beyond \"LGTM\" on PRs"),
    Card::new("✅", "Commitment", "Showing up for standups"),
    Card::new("💪", "Courage", "Admitting when you broke production"),
    Card::new("🎉", "Celebration", "Merge parties!"),
];

const FIVE_CS: Slide = Slide {
    id: "five-cs",
    blocks: &[
        Block::Heading("The 5 C's of Great Teams"),
        Block::Cards(FIVE_C_CARDS),
    ],
};

const CHALLENGE_CARDS: &[Card] = &[
    Card::with_detail(
        "🤐",
        "The \"Silent Meeting\"",
        "Everyone's on mute, mentally and literally",
        "Start with a fun check-in question",
    ),
    Card::with_detail(
        "👨‍🍳",
        "\"Too Many Cooks\"",
        "Everyone has opinions, no one decides",
        "Assign a decision maker",
    ),
    Card::with_detail(
        "🙅",
        "\"Not My Job\"",
        "Strict boundaries, no flexibility",
        "Shared ownership mindset",
    ),
    Card::with_detail(
        "📧",
        "\"Reply All Chaos\"",
        "Communication overload",
        "Clear communication channels",
    ),
];

const TIP_CARDS: &[Card] = &[
    Card::new(
        "1",
        "The \"Yes, And...\" Rule",
        "From improv comedy - build on ideas instead of shutting them down",
    ),
    Card::new(
        "2",
        "The 2-Pizza Rule",
        "If a team can't be fed with 2 pizzas, it's too big",
    ),
    Card::new(
        "3",
        "Pomodoro for Pairs",
        "25 min focused work, 5 min break - perfect for pair programming",
    ),
    Card::new(
        "4",
        "Document Everything",
        "Your future self (and team) will thank you",
    ),
];

const TIPS: Slide = Slide {
    id: "tips",
    blocks: &[
        Block::Heading("Practical Tips You Can Use Today"),
        Block::Cards(TIP_CARDS),
    ],
};

const STORY_CARDS: &[Card] = &[
    Card::new("🐧", "Linux Kernel", "15,000 developers, one kernel"),
    Card::new("📚", "Wikipedia", "Millions collaborating on truth"),
    Card::new("💻", "Stack Overflow", "50M+ devs helping each other"),
];

const STORIES: Slide = Slide {
    id: "stories",
    blocks: &[
        Block::Heading("Real Success Stories"),
        Block::Cards(STORY_CARDS),
        Block::Paragraph("And every successful project in your company too!"),
    ],
};

const GAME_RULES: &[&str] = &[
    "Choose a concept (e.g., \"Teamwork in action\", \"Our dream office\")",
    "First person starts drawing",
    "When timer ends, pass to next person",
    "Each person adds to the drawing - no talking!",
    "Reveal and discuss the final masterpiece",
];

const TAKEAWAYS: Slide = Slide {
    id: "takeaways",
    blocks: &[
        Block::Heading("Key Takeaways"),
        Block::Numbered(&[
            "Teamwork ≠ Collaboration (but you need both)",
            "Great teams are made, not born",
            "Start small: One conversation, one shared idea",
        ]),
        Block::Paragraph("💪 Challenge: Try one collaborative technique this week!"),
    ],
};

const CLOSING: Slide = Slide {
    id: "closing",
    blocks: &[
        Block::Heading("🚀 Final Thoughts"),
        Block::Quote {
            text: "If you want to go fast, go alone. If you want to go far, go together.",
            author: "- African Proverb",
        },
        Block::Paragraph("git push alone, git pull together"),
        Block::Numbered(&[
            "The best code is written together",
            "The best products are built together",
            "The best careers are grown together",
        ]),
        Block::Paragraph("Thank you! Let's build amazing things together! 🎉"),
    ],
};

// =============================================================================
// Classic deck
// =============================================================================

static CLASSIC_SLIDES: [Slide; 12] = [
    INTRO,
    FOUNDATION,
    ICEBREAKER,
    WHY_MATTERS,
    DEV_TEAMS,
    FIVE_CS,
    Slide {
        id: "challenges",
        blocks: &[
            Block::Heading("Common Team Challenges (We've All Been There)"),
            Block::Cards(CHALLENGE_CARDS),
        ],
    },
    TIPS,
    STORIES,
    Slide {
        id: "game",
        blocks: &[
            Block::Heading("🎨 Collaborative Drawing Game"),
            Block::Numbered(GAME_RULES),
            Block::Paragraph("Choose your timer duration:"),
            Block::Interactive(Widget::RoundTimers),
        ],
    },
    TAKEAWAYS,
    CLOSING,
];

// =============================================================================
// Scroll deck
// =============================================================================

static SCROLL_SLIDES: [Slide; 12] = [
    INTRO,
    FOUNDATION,
    ICEBREAKER,
    WHY_MATTERS,
    DEV_TEAMS,
    FIVE_CS,
    Slide {
        id: "challenges",
        blocks: &[
            Block::Heading("Common Team Challenges (We've All Been There)"),
            Block::Cards(CHALLENGE_CARDS),
            Block::Paragraph("Which barriers does your team face? Tap all that apply."),
            Block::Interactive(Widget::BarrierPicker),
        ],
    },
    TIPS,
    STORIES,
    Slide {
        id: "game",
        blocks: &[
            Block::Heading("🎨 Collaborative Drawing Game"),
            Block::Numbered(GAME_RULES),
            Block::Paragraph("Pick a concept to draw:"),
            Block::Interactive(Widget::ConceptPicker),
            Block::Interactive(Widget::Countdown),
        ],
    },
    TAKEAWAYS,
    CLOSING,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_have_twelve_slides() {
        assert_eq!(Deck::for_variant(Variant::Classic).len(), 12);
        assert_eq!(Deck::for_variant(Variant::Scroll).len(), 12);
    }

    #[test]
    fn slide_ids_are_unique() {
        for variant in [Variant::Classic, Variant::Scroll] {
            let deck = Deck::for_variant(variant);
            let mut ids: Vec<&str> = deck.slides().iter().map(|s| s.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), deck.len(), "duplicate ids in {variant:?}");
        }
    }

    #[test]
    fn classic_deck_hosts_round_timers_only() {
        let deck = Deck::for_variant(Variant::Classic);
        assert!(deck.hosts(Widget::RoundTimers));
        assert!(!deck.hosts(Widget::Countdown));
        assert!(!deck.hosts(Widget::ConceptPicker));
        assert!(!deck.hosts(Widget::BarrierPicker));
    }

    #[test]
    fn scroll_deck_hosts_countdown_and_pickers() {
        let deck = Deck::for_variant(Variant::Scroll);
        assert!(deck.hosts(Widget::Countdown));
        assert!(deck.hosts(Widget::ConceptPicker));
        assert!(deck.hosts(Widget::BarrierPicker));
        assert!(!deck.hosts(Widget::RoundTimers));
    }

    #[test]
    fn heading_prefers_first_heading_or_title_word() {
        let deck = Deck::for_variant(Variant::Classic);
        assert_eq!(deck.get(0).unwrap().heading(), "Teamwork");
        assert_eq!(deck.get(3).unwrap().heading(), "Why This Matters");
        assert!(deck.get(12).is_none());
    }
}
