use folio_core::{LANGUAGES, Reveal, SKILLS, Skill};

use super::reveal_style;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillBarVm {
    pub title: &'static str,
    pub width: String,
    pub title_style: String,
    pub bar_style: String,
}

#[must_use]
pub fn map_skill_bars(visible: bool) -> Vec<SkillBarVm> {
    map_bars(&SKILLS, visible, Reveal::skill_title, Reveal::skill_bar)
}

#[must_use]
pub fn map_language_bars(visible: bool) -> Vec<SkillBarVm> {
    map_bars(&LANGUAGES, visible, Reveal::language_title, Reveal::language_bar)
}

fn map_bars(
    skills: &[Skill],
    visible: bool,
    title_reveal: fn(usize) -> Reveal,
    bar_reveal: fn(usize) -> Reveal,
) -> Vec<SkillBarVm> {
    skills
        .iter()
        .enumerate()
        .map(|(row, skill)| SkillBarVm {
            title: skill.title,
            width: format!("{}%", skill.level.min(100)),
            title_style: reveal_style(title_reveal(row), visible),
            bar_style: reveal_style(bar_reveal(row), visible),
        })
        .collect()
}
