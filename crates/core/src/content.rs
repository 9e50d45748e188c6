//! Portfolio copy and the reveal animations attached to it.

use crate::section::{PageCount, SectionIndex};

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    #[must_use]
    pub fn index(self) -> SectionIndex {
        let position = match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        };
        SectionIndex::new(position)
    }

    #[must_use]
    pub fn from_index(index: SectionIndex) -> Option<Self> {
        Self::ALL.get(index.value()).copied()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// One page per overlay section.
pub const PAGE_COUNT: PageCount = PageCount::DEFAULT;

//
// ─── COPY ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub intro: [&'static str; 2],
    pub call_to_action: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Tyson Skakun",
    intro: [
        "I'm a full-stack developer based in Edmonton, Alberta, Canada.",
        "I love building things and learning new technologies.",
    ],
    call_to_action: "Contact me",
};

/// A titled proficiency bar. `level` is a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub level: u8,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        title: "Front-end",
        level: 90,
    },
    Skill {
        title: "Threejs /React-three-fiber",
        level: 70,
    },
    Skill {
        title: "React / React Native",
        level: 90,
    },
    Skill {
        title: "UI/UX",
        level: 80,
    },
];

pub const LANGUAGES: [Skill; 2] = [
    Skill {
        title: "english 🇨🇦",
        level: 100,
    },
    Skill {
        title: "french 🇫🇷",
        level: 60,
    },
];

//
// ─── REVEALS ───────────────────────────────────────────────────────────────────
//

/// Enter animation for one overlay element: from `(from_opacity, from_y)` to fully
/// visible in place, after `delay` seconds, over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub from_opacity: f32,
    pub from_y: f32,
    pub from_scale_x: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Reveal {
    const fn fade(from_y: f32, duration: f32, delay: f32) -> Self {
        Self {
            from_opacity: 0.0,
            from_y,
            from_scale_x: 1.0,
            duration,
            delay,
        }
    }

    const fn grow(duration: f32, delay: f32) -> Self {
        Self {
            from_opacity: 1.0,
            from_y: 0.0,
            from_scale_x: 0.0,
            duration,
            delay,
        }
    }

    #[must_use]
    pub const fn section_enter() -> Self {
        Self::fade(50.0, 1.0, 0.6)
    }

    #[must_use]
    pub const fn section_exit() -> Self {
        Self::fade(50.0, 0.4, 0.0)
    }

    #[must_use]
    pub const fn intro() -> Self {
        Self::fade(25.0, 1.0, 1.5)
    }

    #[must_use]
    pub const fn call_to_action() -> Self {
        Self::fade(25.0, 1.0, 2.0)
    }

    /// Staggered by 0.2s per row, starting at 1s.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn skill_title(row: usize) -> Self {
        Self::fade(0.0, 1.0, 1.0 + row as f32 * 0.2)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn skill_bar(row: usize) -> Self {
        Self::grow(1.0, 1.0 + row as f32 * 0.2)
    }

    /// Language rows start after the skill rows, at 2s.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn language_title(row: usize) -> Self {
        Self::fade(0.0, 1.0, 2.0 + row as f32 * 0.2)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn language_bar(row: usize) -> Self {
        Self::grow(1.0, 2.0 + row as f32 * 0.2)
    }
}
